use pulldown_cmark::{html, Options, Parser};
use yew::virtual_dom::AttrValue;
use yew::Html;

/// Renders trusted, compiled-in Markdown to Yew HTML.
///
/// Only used for the site's own content files, never for visitor input.
pub fn render(source: &'static str) -> Html {
    let parser = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    Html::from_html_unchecked(AttrValue::from(html_output))
}
