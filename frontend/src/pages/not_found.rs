//! 404 page. Rendered without header and footer on a plain white body; the
//! body's previous background comes back when the page goes away.

use web_sys::HtmlElement;
use yew::{classes, html, Callback, Component, Context, Html, Properties};

use crate::components::shell::link::Link;

const BODY_BACKGROUND: &str = "#fff";

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub on_navigate: Callback<String>,
}

pub struct NotFoundPage {
    previous_background: String,
}

impl Component for NotFoundPage {
    type Message = ();
    type Properties = NotFoundProps;

    fn create(_ctx: &Context<Self>) -> Self {
        let previous_background = body()
            .map(|body| {
                let style = body.style();
                let previous = style.get_property_value("background").unwrap_or_default();
                style.set_property("background", BODY_BACKGROUND).ok();
                previous
            })
            .unwrap_or_default();
        Self { previous_background }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="page not-found">
                <h1>{ "404" }</h1>
                <p>{ "This page wandered off, as cats do." }</p>
                <Link to="/" on_navigate={ctx.props().on_navigate.clone()} classes={classes!("cta")}>
                    { "Back to the kittens" }
                </Link>
            </section>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(body) = body() {
            body.style()
                .set_property("background", &self.previous_background)
                .ok();
        }
    }
}

fn body() -> Option<HtmlElement> {
    web_sys::window()?.document()?.body()
}
