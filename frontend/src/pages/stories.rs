use yew::{classes, html, Callback, Component, Context, Html, Properties};

use crate::components::shell::link::Link;

use super::markdown;

#[derive(Properties, PartialEq)]
pub struct StoriesProps {
    pub on_navigate: Callback<String>,
}

pub struct StoriesPage;

impl Component for StoriesPage {
    type Message = ();
    type Properties = StoriesProps;

    fn create(_ctx: &Context<Self>) -> Self {
        StoriesPage
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="page stories">
                <h1>{ "Kitty Stories" }</h1>
                <div class="prose">{ markdown::render(include_str!("../../content/stories.md")) }</div>
                <Link to="/contact" on_navigate={ctx.props().on_navigate.clone()} classes={classes!("cta")}>
                    { "Write the next story with us" }
                </Link>
            </section>
        }
    }
}
