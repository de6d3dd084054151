use leptos::prelude::*;

use crate::fonts;
use crate::meta::{GLOBAL_STYLESHEET, LOCALE, PageMeta};

/// Prepended by [`crate::render::render_page`]; `view!` does not emit one.
pub const DOCTYPE: &str = "<!DOCTYPE html>";

pub const BODY_CLASS: &str = "font-sans bg-frame text-[--color-text-dark]";

/// Outer HTML shell every page renders inside.
///
/// The four font families are bound as CSS variables on `<html>`, so any
/// descendant can reference them. Children are placed in `<body>` untouched.
#[component]
pub fn RootDocument(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    let page = PageMeta::SITE;

    view! {
      <html lang=LOCALE style=fonts::style_scope()>
        <head>
          <meta charset="utf-8"/>
          <meta name="viewport" content="width=device-width, initial-scale=1"/>
          <title>{page.title}</title>
          <meta name="description" content=page.description/>
          <link rel="preconnect" href="https://fonts.googleapis.com"/>
          <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous"/>
          <link rel="stylesheet" href=fonts::stylesheet_href()/>
          <link rel="stylesheet" href=GLOBAL_STYLESHEET/>
        </head>
        <body class=BODY_CLASS>
          {children.map(|children| children())}
        </body>
      </html>
    }
}
