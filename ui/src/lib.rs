//! TimeWeaver landing page, rendered server-side with Leptos.

pub mod app;
pub mod components;
pub mod document;
pub mod fonts;
pub mod meta;
pub mod pages;
pub mod render;

pub use crate::app::App;
pub use crate::document::RootDocument;
pub use crate::render::{render, render_page};
