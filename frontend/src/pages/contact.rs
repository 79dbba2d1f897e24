use yew::{html, Component, Context, Html};

use crate::components::contact::ContactComponent;
use crate::components::map::MapComponent;

pub struct ContactPage;

impl Component for ContactPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ContactPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="page contact">
                <h1>{ "Contact" }</h1>
                <p>{ "Questions about adoption, fostering or volunteering? Drop us a line." }</p>
                <div class="contact-layout">
                    <ContactComponent />
                    <MapComponent />
                </div>
            </section>
        }
    }
}
