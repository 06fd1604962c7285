//! Syntax highlighting theme resolution.
//!
//! Themes come from [`two_face`]'s embedded assets (curated by the `bat`
//! project) and are resolved by display name, e.g. `"Nord"`, `"Dracula"`,
//! `"Monokai Extended"`. An unknown or missing name falls back to the
//! default dark theme.

use syntect::highlighting::Theme;
use tracing::debug;
use two_face::theme::{EmbeddedThemeName, extra};

/// The default dark theme.
const DEFAULT: EmbeddedThemeName = EmbeddedThemeName::OneHalfDark;

/// Every embedded theme variant, in display order.
const ALL: &[EmbeddedThemeName] = &[
    EmbeddedThemeName::Ansi,
    EmbeddedThemeName::Base16,
    EmbeddedThemeName::Base16EightiesDark,
    EmbeddedThemeName::Base16MochaDark,
    EmbeddedThemeName::Base16OceanDark,
    EmbeddedThemeName::Base16OceanLight,
    EmbeddedThemeName::Base16_256,
    EmbeddedThemeName::ColdarkCold,
    EmbeddedThemeName::ColdarkDark,
    EmbeddedThemeName::DarkNeon,
    EmbeddedThemeName::Dracula,
    EmbeddedThemeName::Github,
    EmbeddedThemeName::GruvboxDark,
    EmbeddedThemeName::GruvboxLight,
    EmbeddedThemeName::InspiredGithub,
    EmbeddedThemeName::Leet,
    EmbeddedThemeName::MonokaiExtended,
    EmbeddedThemeName::MonokaiExtendedBright,
    EmbeddedThemeName::MonokaiExtendedLight,
    EmbeddedThemeName::MonokaiExtendedOrigin,
    EmbeddedThemeName::Nord,
    EmbeddedThemeName::OneHalfDark,
    EmbeddedThemeName::OneHalfLight,
    EmbeddedThemeName::SolarizedDark,
    EmbeddedThemeName::SolarizedLight,
    EmbeddedThemeName::SublimeSnazzy,
    EmbeddedThemeName::TwoDark,
    EmbeddedThemeName::Zenburn,
];

/// Resolve a theme by display name, falling back to the default dark theme
/// when `name` is `None` or matches no embedded theme.
///
/// Matching is case-insensitive. Returns an owned `Theme` so callers have
/// no lifetime ties to the embedded set.
#[must_use]
pub fn resolve(name: Option<&str>) -> Theme {
    let themes = extra();

    let Some(name) = name else {
        return themes[DEFAULT].clone();
    };

    match ALL
        .iter()
        .find(|variant| variant.as_name().eq_ignore_ascii_case(name))
    {
        Some(&variant) => themes[variant].clone(),
        None => {
            debug!(name, "unknown theme name, using the default theme");
            themes[DEFAULT].clone()
        }
    }
}

/// Display names of every embedded theme.
pub fn names() -> impl Iterator<Item = &'static str> {
    ALL.iter().map(|variant| variant.as_name())
}

/// The display name of the default theme.
#[must_use]
pub fn default_name() -> &'static str {
    DEFAULT.as_name()
}
