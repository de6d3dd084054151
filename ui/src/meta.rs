/// Document-level metadata written into `<head>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

impl PageMeta {
    pub const SITE: PageMeta = PageMeta {
        title: "TimeWeaver",
        description: "AI-assisted scheduling that speaks your language.",
    };
}

pub const LOCALE: &str = "en";

/// Compiled Tailwind output of `assets/styles/globals.css`.
pub const GLOBAL_STYLESHEET: &str = "/assets/styles/site.css";
