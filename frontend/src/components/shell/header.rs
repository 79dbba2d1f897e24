//! Site header with the route-derived navigation menu.
//!
//! The menu entries come from the static route table. On narrow screens the
//! menu collapses behind a toggle; it shuts itself after every completed
//! navigation and when the viewport grows past the desktop breakpoint.

use common::navigation::menu::MenuState;
use common::navigation::routes::{nav_links, NavLink, ROUTES};
use yew::prelude::*;

use crate::router::{viewport_width, WindowListener};

use super::link::Link;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Menu path of the page being shown, if it has one.
    pub active: Option<String>,
    /// Bumped by the app on every completed navigation.
    pub navigation_count: u64,
    pub on_navigate: Callback<String>,
}

pub enum Msg {
    ToggleMenu,
    LinkClicked(String),
    Resized,
}

pub struct Header {
    links: Vec<NavLink>,
    menu: MenuState,
    _resize: Option<WindowListener>,
}

impl Component for Header {
    type Message = Msg;
    type Properties = HeaderProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        Self {
            links: nav_links(ROUTES),
            menu: MenuState::default(),
            _resize: WindowListener::new("resize", move || link.send_message(Msg::Resized)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleMenu => {
                self.menu.toggle();
                true
            }
            Msg::LinkClicked(path) => {
                self.menu.close();
                ctx.props().on_navigate.emit(path);
                true
            }
            Msg::Resized => viewport_width()
                .map(|width| self.menu.viewport_resized(width))
                .unwrap_or(false),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().navigation_count != old_props.navigation_count {
            self.menu.navigation_completed();
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let active = ctx.props().active.as_deref();
        let on_link = link.callback(Msg::LinkClicked);
        let icon = if self.menu.is_open() { "close" } else { "menu" };

        html! {
            <header class="site-header">
                <Link to="/" on_navigate={on_link.clone()} classes={classes!("logo")}>
                    { "smelly-cat" }
                </Link>
                <button
                    class="menu-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded={self.menu.is_open().to_string()}
                    onclick={link.callback(|_: MouseEvent| Msg::ToggleMenu)}
                >
                    <span class="material-icons">{ icon }</span>
                </button>
                <nav class={classes!("nav-links", self.menu.is_open().then_some("open"))}>
                    { for self.links.iter().map(|nav| {
                        let is_active = active == Some(nav.path.as_str());
                        html! {
                            <Link
                                to={nav.path.clone()}
                                on_navigate={on_link.clone()}
                                classes={classes!(is_active.then_some("active"))}
                            >
                                { nav.label.clone() }
                            </Link>
                        }
                    }) }
                </nav>
            </header>
        }
    }
}
