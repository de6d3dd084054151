use std::fmt;

use leptos::prelude::*;

const GRADIENT_CLASS: &str =
    "absolute inset-0 -z-20 bg-gradient-to-br from-slate-50 via-slate-200 to-slate-300";

// Mask keeps the lines strongest in the middle, fading toward the top and edges.
const PATTERN_CLASS: &str = "absolute inset-0 -z-10 pointer-events-none \
    mask-t-from-50% mask-radial-[50%_90%] mask-radial-from-80%";

const LINE_START_PX: u8 = 2;
const LINE_END_PX: u8 = 3;
const PERIOD_PX: u8 = 16;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// One repeating diagonal hairline texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePattern {
    pub angle_deg: f32,
    pub color: Rgba,
}

impl fmt::Display for LinePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.color;
        write!(
            f,
            "repeating-linear-gradient({}deg, transparent, transparent {LINE_START_PX}px, \
             {c} {LINE_START_PX}px, {c} {LINE_END_PX}px, \
             transparent {LINE_END_PX}px, transparent {PERIOD_PX}px)",
            self.angle_deg
        )
    }
}

/// Listed front to back, as CSS stacks `background-image` layers.
pub const LINE_PATTERNS: [LinePattern; 3] = [
    LinePattern {
        angle_deg: 22.5,
        color: Rgba { r: 107, g: 114, b: 128, a: 0.05 },
    },
    LinePattern {
        angle_deg: 112.5,
        color: Rgba { r: 55, g: 65, b: 81, a: 0.04 },
    },
    LinePattern {
        angle_deg: 157.5,
        color: Rgba { r: 31, g: 41, b: 55, a: 0.03 },
    },
];

pub fn pattern_style() -> String {
    let layers = LINE_PATTERNS
        .iter()
        .map(LinePattern::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    format!("background-image: {layers}")
}

/// Gradient fill with the hairline pattern on top, both behind the content.
#[component]
pub fn Backdrop() -> impl IntoView {
    view! {
      <div class=GRADIENT_CLASS aria-hidden="true"></div>
      <div class=PATTERN_CLASS style=pattern_style() aria-hidden="true"></div>
    }
}
