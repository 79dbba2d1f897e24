//! Application root: client-side routing and the header/footer shell.
//!
//! The app owns the current URL path. Every completed navigation (in-app
//! link or browser back/forward) re-matches it against the static route
//! table, and the matched route chain decides both the page and whether the
//! header and footer are shown.

use common::navigation::routes::{match_route, show_header_footer, Page, ROUTES};
use gloo_console::{error, log};
use yew::{html, Component, Context, Html};

use crate::components::shell::footer::Footer;
use crate::components::shell::header::Header;
use crate::pages::about::AboutPage;
use crate::pages::blog::BlogPage;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::stories::StoriesPage;
use crate::router::{current_path, push_path, WindowListener};

pub enum Msg {
    Navigate(String),
    LocationChanged,
}

pub struct App {
    path: String,
    navigation_count: u64,
    _popstate: Option<WindowListener>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        Self {
            path: current_path(),
            navigation_count: 0,
            _popstate: WindowListener::new("popstate", move || link.send_message(Msg::LocationChanged)),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(path) => {
                if let Err(e) = push_path(&path) {
                    error!("Navigation failed:", e);
                    return false;
                }
                self.path = path;
            }
            Msg::LocationChanged => {
                self.path = current_path();
            }
        }
        self.navigation_count += 1;
        log!(format!("Navigated to {}", self.path));
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let matched = match_route(ROUTES, &self.path);
        let on_navigate = ctx.link().callback(Msg::Navigate);

        let page = match matched.page() {
            Page::Home => html! { <HomePage on_navigate={on_navigate.clone()} /> },
            Page::Stories => html! { <StoriesPage on_navigate={on_navigate.clone()} /> },
            Page::About => html! { <AboutPage /> },
            Page::Blog => html! { <BlogPage /> },
            Page::Contact => html! { <ContactPage /> },
            Page::NotFound => html! { <NotFoundPage on_navigate={on_navigate.clone()} /> },
        };

        if !show_header_footer(&matched) {
            return html! { <main class="content bare">{ page }</main> };
        }

        html! {
            <>
                <Header
                    active={matched.active_href()}
                    navigation_count={self.navigation_count}
                    on_navigate={on_navigate.clone()}
                />
                <main class="content">{ page }</main>
                <Footer on_navigate={on_navigate} />
            </>
        }
    }
}
