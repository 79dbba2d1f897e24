use crate::app::App;

mod app;
mod components;
mod pages;
mod router;
mod services;

fn main() {
    yew::Renderer::<App>::new().render();
}
