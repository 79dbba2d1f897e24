//! Blog index. Posts are Markdown files compiled into the binary, newest
//! first.

use yew::{html, Component, Context, Html};

use super::markdown;

struct Post {
    title: &'static str,
    date: &'static str,
    body: &'static str,
}

const POSTS: &[Post] = &[
    Post {
        title: "Summer kitten season is here",
        date: "2024-06-12",
        body: include_str!("../../content/blog/kitten-season.md"),
    },
    Post {
        title: "Five things to prepare before adoption day",
        date: "2024-04-03",
        body: include_str!("../../content/blog/adoption-checklist.md"),
    },
];

pub struct BlogPage;

impl Component for BlogPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        BlogPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="page blog">
                <h1>{ "Blog" }</h1>
                { for POSTS.iter().map(|post| html! {
                    <article class="post" key={post.title}>
                        <h2>{ post.title }</h2>
                        <time datetime={post.date}>{ post.date }</time>
                        <div class="prose">{ markdown::render(post.body) }</div>
                    </article>
                }) }
            </section>
        }
    }
}
