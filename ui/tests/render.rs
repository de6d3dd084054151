//! Rendering tests for the landing page document and hero.

use leptos::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

use ui::components::Hero;
use ui::components::hero::{CTA_LABEL, DESCRIPTION, HEADING};
use ui::fonts::FONTS;
use ui::{RootDocument, render, render_page};

/// Drops hydration markers and other comments, keeping the doctype.
fn strip_markers(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(i) = rest.find("<!") {
        out.push_str(&rest[..i]);
        let tail = &rest[i..];
        let end = if tail.starts_with("<!--") {
            tail.find("-->").map(|e| e + 3)
        } else if tail.starts_with("<!DOCTYPE") {
            out.push_str("<!DOCTYPE");
            Some("<!DOCTYPE".len())
        } else {
            tail.find('>').map(|e| e + 1)
        };
        rest = &tail[end.unwrap_or(tail.len())..];
    }
    out.push_str(rest);
    out
}

/// Visible text with every tag treated as a word break.
fn text_content(html: &str) -> String {
    let mut text = String::new();
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => {
                in_tag = true;
                text.push(' ');
            }
            '>' => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn count_tag(html: &str, tag: &str) -> usize {
    let open = format!("<{tag}");
    html.match_indices(&open)
        .filter(|(i, _)| {
            matches!(
                html[i + open.len()..].chars().next(),
                Some(' ') | Some('>') | Some('/')
            )
        })
        .count()
}

fn inner<'a>(html: &'a str, tag: &str) -> &'a str {
    let start = html.find(&format!("<{tag}")).expect("open tag");
    let body_start = start + html[start..].find('>').expect("tag end") + 1;
    let end = html.rfind(&format!("</{tag}>")).expect("close tag");
    &html[body_start..end]
}

#[test]
fn page_starts_with_doctype() {
    assert!(render_page().starts_with("<!DOCTYPE html>"));
}

#[test]
fn page_carries_metadata() {
    let html = render_page();
    assert!(html.contains("<title>TimeWeaver</title>"));
    assert!(html.contains(r#"content="AI-assisted scheduling that speaks your language.""#));
    assert!(html.contains("fonts.googleapis.com/css2?family=Arsenal:wght@400;700"));
    assert!(html.contains(r#"href="/assets/styles/site.css""#));
}

#[test]
fn page_wraps_hero_in_body() {
    let html = render_page();
    let body = inner(&html, "body");
    assert_eq!(count_tag(body, "section"), 1);
    assert!(body.contains(CTA_LABEL));
}

#[test]
fn body_has_theme_classes() {
    let html = render_page();
    assert!(html.contains(r#"<body class="font-sans bg-frame text-[--color-text-dark]">"#));
}

#[test]
fn empty_document_has_fonts_and_empty_body() {
    let html = render(|| view! { <RootDocument/> });

    for font in FONTS {
        assert!(html.contains(font.variable), "missing {}", font.variable);
    }
    assert_eq!(strip_markers(inner(&html, "body")).trim(), "");
}

#[test]
fn children_are_placed_once_and_unmodified() {
    let html = render(|| {
        view! {
          <RootDocument>
            <p id="probe">"hello"</p>
          </RootDocument>
        }
    });

    assert_eq!(html.matches(r#"id="probe""#).count(), 1);
    assert_eq!(
        strip_markers(inner(&html, "body")).trim(),
        r#"<p id="probe">hello</p>"#
    );
}

#[test]
fn lang_is_fixed_regardless_of_children() {
    let empty = render(|| view! { <RootDocument/> });
    let full = render(|| view! { <RootDocument><Hero/></RootDocument> });

    for html in [empty, full] {
        assert!(html.contains(r#"<html lang="en""#));
    }
}

#[rstest]
#[case("section", 1)]
#[case("h1", 1)]
#[case("br", 1)]
#[case("p", 1)]
#[case("button", 1)]
fn hero_has_one_of_each(#[case] tag: &str, #[case] expected: usize) {
    let html = render(|| view! { <Hero/> });
    assert_eq!(count_tag(&html, tag), expected);
}

#[test]
fn heading_breaks_between_fragments() {
    let html = render(|| view! { <Hero/> });
    let h1 = strip_markers(inner(&html, "h1"));

    let first = h1.find(HEADING[0]).expect("first fragment");
    let br = h1.find("<br").expect("line break");
    let second = h1.find(HEADING[1]).expect("second fragment");
    assert!(first < br && br < second);
}

#[test]
fn paragraph_holds_description() {
    let html = render(|| view! { <Hero/> });
    assert_eq!(text_content(inner(&html, "p")), DESCRIPTION);
}

#[test]
fn button_label_is_exact() {
    let html = render(|| view! { <Hero/> });
    let button = inner(&html, "button");
    assert_eq!(text_content(button), "Explore All Templates");
    assert!(html.contains(r#"type="button""#));
}

#[test]
fn hero_text_flattens_in_order() {
    let html = render(|| view! { <Hero/> });
    let expected = format!(
        "{} {} {} {}",
        HEADING[0], HEADING[1], DESCRIPTION, CTA_LABEL
    );
    assert_eq!(text_content(&html), expected);
    assert_eq!(
        format!("{} {}", HEADING[0], HEADING[1]),
        "Handcrafted HTML, Tailwind and Bootstrap Templates and UI Kits"
    );
}

#[test]
fn backdrop_sits_behind_content() {
    let html = render(|| view! { <Hero/> });
    let gradient = html.find("-z-20").expect("gradient layer");
    let pattern = html.find("-z-10").expect("pattern layer");
    let heading = html.find("<h1").expect("heading");
    assert!(gradient < pattern && pattern < heading);
    assert_eq!(html.matches("repeating-linear-gradient").count(), 3);
}

#[test]
fn rendering_is_idempotent() {
    assert_eq!(render_page(), render_page());
    assert_eq!(render(|| view! { <Hero/> }), render(|| view! { <Hero/> }));
}
