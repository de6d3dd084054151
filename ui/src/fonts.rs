//! Web font bindings.
//!
//! Every family is requested from the Google Fonts css2 API and exposed to the
//! document as a CSS custom property, so descendants pick a face with
//! `font-family: var(--font-arsenal)` or the matching Tailwind theme token.

const GOOGLE_FONTS_CSS: &str = "https://fonts.googleapis.com/css2";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontFamily {
    pub family: &'static str,
    pub weights: &'static [u16],
    /// Character subsets the page needs. The css2 API picks subsets through
    /// `unicode-range`, so these are not sent in the request.
    pub subsets: &'static [&'static str],
    /// CSS custom property the family is bound to.
    pub variable: &'static str,
    /// Generic family used while the web font is missing.
    pub fallback: &'static str,
}

pub const ARSENAL: FontFamily = FontFamily {
    family: "Arsenal",
    weights: &[400, 700],
    subsets: &["latin"],
    variable: "--font-arsenal",
    fallback: "sans-serif",
};

pub const SEDAN: FontFamily = FontFamily {
    family: "Sedan",
    weights: &[400],
    subsets: &["latin"],
    variable: "--font-sedan",
    fallback: "serif",
};

pub const SHADOWS_INTO_LIGHT: FontFamily = FontFamily {
    family: "Shadows Into Light",
    weights: &[400],
    subsets: &["latin"],
    variable: "--font-shadows",
    fallback: "cursive",
};

pub const CUTIVE_MONO: FontFamily = FontFamily {
    family: "Cutive Mono",
    weights: &[400],
    subsets: &["latin"],
    variable: "--font-cutive",
    fallback: "monospace",
};

pub const FONTS: [FontFamily; 4] = [ARSENAL, SEDAN, SHADOWS_INTO_LIGHT, CUTIVE_MONO];

impl FontFamily {
    /// `--font-arsenal: 'Arsenal', sans-serif`
    pub fn declaration(&self) -> String {
        format!("{}: '{}', {}", self.variable, self.family, self.fallback)
    }

    /// `Shadows+Into+Light:wght@400`
    fn query(&self) -> String {
        let weights = self
            .weights
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join(";");

        format!("{}:wght@{}", self.family.replace(' ', "+"), weights)
    }
}

/// Stylesheet URL requesting every bound family in one round trip.
pub fn stylesheet_href() -> String {
    let families = FONTS
        .iter()
        .map(|font| format!("family={}", font.query()))
        .collect::<Vec<_>>()
        .join("&");

    format!("{GOOGLE_FONTS_CSS}?{families}&display=swap")
}

/// Inline style scoping all font variables to the element carrying it.
pub fn style_scope() -> String {
    FONTS
        .iter()
        .map(FontFamily::declaration)
        .collect::<Vec<_>>()
        .join("; ")
}
