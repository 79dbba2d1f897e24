//! The site's route table and everything derived from it.
//!
//! The shell never inspects routing state itself. It asks [`match_route`] for
//! the chain of routes matching the current URL and hands that chain to
//! [`show_header_footer`] and to the menu.

use std::sync::LazyLock;

use regex::Regex;

/// Path of the catch-all route.
pub const WILDCARD: &str = "**";

static LABEL_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_/]+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Stories,
    About,
    Blog,
    Contact,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteConfig {
    /// Path relative to the site root, without slashes. `""` is the root.
    pub path: &'static str,
    pub page: Page,
    /// Menu label. Generated from `path` when absent.
    pub label: Option<&'static str>,
    pub hide_header_footer: bool,
}

pub static ROUTES: &[RouteConfig] = &[
    RouteConfig {
        path: "",
        page: Page::Home,
        label: Some("Adopt Kittens"),
        hide_header_footer: false,
    },
    RouteConfig {
        path: "stories",
        page: Page::Stories,
        label: Some("Kitty Stories"),
        hide_header_footer: false,
    },
    RouteConfig {
        path: "about",
        page: Page::About,
        label: Some("About Us"),
        hide_header_footer: false,
    },
    RouteConfig {
        path: "blog",
        page: Page::Blog,
        label: Some("Blog"),
        hide_header_footer: false,
    },
    RouteConfig {
        path: "contact",
        page: Page::Contact,
        label: Some("Contact"),
        hide_header_footer: false,
    },
    RouteConfig {
        path: WILDCARD,
        page: Page::NotFound,
        label: None,
        hide_header_footer: true,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub path: String,
    pub label: String,
}

/// One menu entry per route, the catch-all excluded.
pub fn nav_links(routes: &[RouteConfig]) -> Vec<NavLink> {
    routes
        .iter()
        .filter(|route| route.path != WILDCARD)
        .map(|route| NavLink {
            path: href(route.path),
            label: route
                .label
                .map(str::to_string)
                .unwrap_or_else(|| create_label(route.path)),
        })
        .collect()
}

/// Absolute URL path of a route path: `""` is `/`, `"blog"` is `/blog`.
pub fn href(path: &str) -> String {
    format!("/{path}")
}

/// Human label for a route path without one, e.g. `kitty-stories` to
/// `Kitty Stories`.
pub fn create_label(path: &str) -> String {
    if path.is_empty() {
        return "Home".to_string();
    }

    let spaced = LABEL_SEPARATORS.replace_all(path, " ");
    let mut label = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for c in spaced.chars() {
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && at_word_start {
            label.push(c.to_ascii_uppercase());
        } else {
            label.push(c);
        }
        at_word_start = !is_word;
    }
    label
}

/// Chain of routes matched for one URL, outermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRoutes<'a> {
    chain: Vec<&'a RouteConfig>,
}

impl<'a> MatchedRoutes<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a RouteConfig> + '_ {
        self.chain.iter().copied()
    }

    /// Innermost matched route, the one whose page is rendered.
    pub fn leaf(&self) -> Option<&'a RouteConfig> {
        self.chain.last().copied()
    }

    pub fn page(&self) -> Page {
        self.leaf().map(|route| route.page).unwrap_or(Page::NotFound)
    }

    /// The menu path of the matched page, if it has a menu entry.
    pub fn active_href(&self) -> Option<String> {
        self.leaf()
            .filter(|route| route.path != WILDCARD)
            .map(|route| href(route.path))
    }
}

/// Matches a browser URL path (`/stories`, `/contact/?x=1#map`, ...) against
/// `routes`. Exact paths win; otherwise the catch-all matches.
pub fn match_route<'a>(routes: &'a [RouteConfig], url_path: &str) -> MatchedRoutes<'a> {
    let path = normalize(url_path);
    let chain = routes
        .iter()
        .find(|route| route.path != WILDCARD && route.path == path)
        .or_else(|| routes.iter().find(|route| route.path == WILDCARD))
        .into_iter()
        .collect();
    MatchedRoutes { chain }
}

/// Header and footer are shown unless any matched route hides them.
pub fn show_header_footer(matched: &MatchedRoutes<'_>) -> bool {
    !matched.iter().any(|route| route.hide_header_footer)
}

fn normalize(url_path: &str) -> &str {
    let end = url_path.find(['?', '#']).unwrap_or(url_path.len());
    url_path[..end].trim_matches('/')
}
