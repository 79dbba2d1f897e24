use yew::{classes, html, Callback, Component, Context, Html, Properties};

use crate::components::shell::link::Link;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<String>,
}

struct Kitten {
    name: &'static str,
    age: &'static str,
    blurb: &'static str,
}

const KITTENS: &[Kitten] = &[
    Kitten {
        name: "Whiskers",
        age: "10 weeks",
        blurb: "Tabby, fearless, will climb your curtains and then apologise.",
    },
    Kitten {
        name: "Feta",
        age: "4 months",
        blurb: "All white, very calm, prefers laps to toys.",
    },
    Kitten {
        name: "Souvlaki",
        age: "3 months",
        blurb: "Ginger troublemaker who gets along with dogs.",
    },
];

pub struct HomePage;

impl Component for HomePage {
    type Message = ();
    type Properties = HomeProps;

    fn create(_ctx: &Context<Self>) -> Self {
        HomePage
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = ctx.props().on_navigate.clone();
        html! {
            <section class="page home">
                <div class="hero">
                    <h1>{ "Adopt a kitten, gain a roommate" }</h1>
                    <p>{ "Every cat in our shelter is vaccinated, microchipped and waiting for a sofa to call home." }</p>
                    <Link to="/contact" on_navigate={on_navigate.clone()} classes={classes!("cta")}>{ "Arrange a visit" }</Link>
                </div>
                <div class="kitten-grid">
                    { for KITTENS.iter().map(|kitten| html! {
                        <article class="kitten-card" key={kitten.name}>
                            <h2>{ kitten.name }</h2>
                            <span class="age">{ kitten.age }</span>
                            <p>{ kitten.blurb }</p>
                        </article>
                    }) }
                </div>
                <Link to="/stories" on_navigate={on_navigate}>{ "Read how our cats settled in" }</Link>
            </section>
        }
    }
}
