use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LinkProps {
    /// Absolute in-app path, e.g. `/contact`.
    pub to: String,
    pub on_navigate: Callback<String>,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor that navigates through the app router instead of reloading.
///
/// Modified clicks (new tab, new window) are left to the browser.
pub struct Link;

impl Component for Link {
    type Message = ();
    type Properties = LinkProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Link
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let to = props.to.clone();
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            if e.ctrl_key() || e.meta_key() || e.shift_key() || e.button() != 0 {
                return;
            }
            e.prevent_default();
            on_navigate.emit(to.clone());
        });

        html! {
            <a href={props.to.clone()} class={props.classes.clone()} onclick={onclick}>
                { for props.children.iter() }
            </a>
        }
    }
}
