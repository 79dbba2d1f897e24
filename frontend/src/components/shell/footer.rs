use yew::{html, Callback, Component, Context, Html, Properties};

use super::link::Link;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<String>,
}

pub struct Footer;

impl Component for Footer {
    type Message = ();
    type Properties = FooterProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Footer
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = ctx.props().on_navigate.clone();
        html! {
            <footer class="site-footer">
                <div class="footer-brand">
                    <span class="logo">{ "smelly-cat" }</span>
                    <p>{ "Finding forever homes for Thessaloniki's kittens." }</p>
                </div>
                <div class="footer-contact">
                    <p>{ "Tsimiski 43, Thessaloniki 546 23" }</p>
                    <p>{ "hello@smelly-cat.gr" }</p>
                    <Link to="/contact" on_navigate={on_navigate}>{ "Get in touch" }</Link>
                </div>
                <p class="copyright">{ "© smelly-cat adoption shelter" }</p>
            </footer>
        }
    }
}
