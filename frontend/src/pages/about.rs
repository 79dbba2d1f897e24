use yew::{html, Component, Context, Html};

use super::markdown;

pub struct AboutPage;

impl Component for AboutPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        AboutPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="page about">
                <h1>{ "About Us" }</h1>
                <div class="prose">{ markdown::render(include_str!("../../content/about.md")) }</div>
            </section>
        }
    }
}
