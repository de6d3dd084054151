//! Server-side rendering of views into HTML strings.

use leptos::prelude::*;

use crate::app::App;
use crate::document::DOCTYPE;

/// Renders `view` to HTML under a fresh reactive owner.
///
/// Nothing in the page reads signals or context, so the output depends only on
/// the view itself.
pub fn render<V, F>(view: F) -> String
where
    V: IntoView,
    F: FnOnce() -> V,
{
    let owner = Owner::new();
    owner.with(|| view().to_html())
}

/// The full landing page document, doctype included.
pub fn render_page() -> String {
    let html = format!("{DOCTYPE}\n{}", render(|| view! { <App/> }));
    log::debug!("rendered landing page ({} bytes)", html.len());
    html
}
