//! Icon glyphs and the themed icon components.
//!
//! DESIGN
//! ======
//! Data types refer to glyphs by `IconKind` only. The SVG path for each kind
//! lives in `GLYPHS`, so navigation data stays independent of rendering.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Which glyph to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    Dashboard,
    Members,
    Events,
    Donations,
    Reports,
    Settings,
    Refresh,
}

/// Size token, rendered as an `icon--{token}` class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Xxl,
}

impl IconSize {
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }
}

/// Theme color token such as `brand.500`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    pub family: &'static str,
    pub shade: u16,
}

impl ColorToken {
    pub const BRAND_500: Self = Self { family: "brand", shade: 500 };

    /// Dotted token form, e.g. `brand.500`.
    #[must_use]
    pub fn token(self) -> String {
        format!("{}.{}", self.family, self.shade)
    }

    /// CSS class form, e.g. `color-brand-500`.
    #[must_use]
    pub fn class(self) -> String {
        format!("color-{}-{}", self.family, self.shade)
    }
}

const GLYPHS: &[(IconKind, &str)] = &[
    (IconKind::Dashboard, "M3 13h8V3H3v10zm0 8h8v-6H3v6zm10 0h8V11h-8v10zm0-18v6h8V3h-8z"),
    (
        IconKind::Members,
        "M16 11c1.66 0 3-1.34 3-3s-1.34-3-3-3-3 1.34-3 3 1.34 3 3 3zm-8 0c1.66 0 3-1.34 3-3S9.66 5 8 5 5 6.34 5 8s1.34 3 3 3zm0 2c-2.33 0-7 1.17-7 3.5V19h14v-2.5C15 14.17 10.33 13 8 13zm8 0c-.29 0-.62.02-.97.05 1.16.84 1.97 1.97 1.97 3.45V19h6v-2.5c0-2.33-4.67-3.5-7-3.5z",
    ),
    (
        IconKind::Events,
        "M19 4h-1V2h-2v2H8V2H6v2H5c-1.11 0-2 .9-2 2v14c0 1.1.89 2 2 2h14c1.1 0 2-.9 2-2V6c0-1.1-.9-2-2-2zm0 16H5V9h14v11z",
    ),
    (
        IconKind::Donations,
        "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z",
    ),
    (IconKind::Reports, "M5 9.2h3V19H5V9.2zM10.6 5h2.8v14h-2.8V5zm5.6 8H19v6h-2.8v-6z"),
    (
        IconKind::Settings,
        "M19.14 12.94a7.07 7.07 0 0 0 0-1.88l2.03-1.58-1.92-3.32-2.39.96a7.03 7.03 0 0 0-1.63-.94L14.87 3.6h-3.84l-.36 2.58c-.59.24-1.13.56-1.63.94l-2.39-.96-1.92 3.32 2.03 1.58a7.07 7.07 0 0 0 0 1.88l-2.03 1.58 1.92 3.32 2.39-.96c.5.38 1.04.7 1.63.94l.36 2.58h3.84l.36-2.58c.59-.24 1.13-.56 1.63-.94l2.39.96 1.92-3.32-2.03-1.58zM12.95 15.5a3.5 3.5 0 1 1 0-7 3.5 3.5 0 0 1 0 7z",
    ),
    (
        IconKind::Refresh,
        "M17.65 6.35A7.96 7.96 0 0 0 12 4a8 8 0 1 0 7.73 10h-2.08A6 6 0 1 1 12 6c1.66 0 3.14.69 4.22 1.78L13 11h7V4l-2.35 2.35z",
    ),
];

/// SVG path data for `kind`.
#[must_use]
pub fn glyph_path(kind: IconKind) -> &'static str {
    GLYPHS
        .iter()
        .find(|(k, _)| *k == kind)
        .map_or("", |(_, d)| *d)
}

/// Class list for an icon of the given size and optional color.
#[must_use]
pub fn icon_class(size: IconSize, color: Option<ColorToken>) -> String {
    match color {
        Some(color) => format!("icon icon--{} {}", size.token(), color.class()),
        None => format!("icon icon--{}", size.token()),
    }
}

/// Inline SVG icon. Without a color it inherits `currentColor`.
#[component]
pub fn Icon(
    kind: IconKind,
    #[prop(optional)] size: IconSize,
    #[prop(optional)] color: Option<ColorToken>,
) -> impl IntoView {
    view! {
        <svg class=icon_class(size, color) viewBox="0 0 24 24" aria-hidden="true" fill="currentColor">
            <path d=glyph_path(kind)></path>
        </svg>
    }
}

/// Large brand-colored refresh glyph.
#[component]
pub fn RefreshIcon() -> impl IntoView {
    view! { <Icon kind=IconKind::Refresh size=IconSize::Xxl color=ColorToken::BRAND_500/> }
}
