//! Styles for the rl1 CLI.
//!
//! Templates never name colors. They name *semantic* styles (`name`,
//! `unmet`, `header`) through the `style` filter, and this module decides
//! what each one looks like for the active [`EndingTheme`].
//!
//! Each theme contributes an accent color; dark themes get a light text
//! foreground and light themes a dark one. Everything else (errors, warnings,
//! the unmet-requirement highlight) is shared so that meaning stays
//! consistent while the look changes.
//!
//! A style name a template asks for but the palette lacks renders with a
//! `(!?)` prefix, which makes typos visible in tests instead of silently
//! dropping the style.

use console::Style;
use rl1search::theme::EndingTheme;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const REGULAR: &str = "regular";
    pub const MUTED: &str = "muted";
    pub const ACCENT: &str = "accent";
    pub const HEADER: &str = "header";
    pub const TITLE: &str = "title";
    pub const NAME: &str = "name";
    pub const DLC: &str = "dlc";
    pub const UNMET: &str = "unmet";
    pub const ACTIVE: &str = "active";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
}

/// Named styles applied by the template `style` filter.
#[derive(Clone, Default)]
pub struct Styles {
    styles: HashMap<String, Style>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Applies a named style, forcing ANSI output.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.clone().force_styling(true).apply_to(text).to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }

    /// Plain-text mode: the text unchanged, still flagging unknown names.
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.has(name) {
            text.to_string()
        } else {
            format!("{} {}", MISSING_STYLE_INDICATOR, text)
        }
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

fn accent(theme: EndingTheme) -> (u8, u8, u8) {
    match theme {
        EndingTheme::AgeOfFracture => (212, 175, 55),
        EndingTheme::AgeOfDuskborn => (120, 81, 169),
        EndingTheme::AgeOfOrder => (176, 141, 30),
        EndingTheme::BlessingOfDespair => (178, 34, 52),
        EndingTheme::AgeOfStars => (100, 149, 237),
        EndingTheme::LordOfFrenziedFlame => (255, 170, 0),
    }
}

fn color(rgb: (u8, u8, u8)) -> Style {
    Style::new().color256(rgb_to_ansi256(rgb))
}

/// The palette for `theme`.
pub fn palette(theme: EndingTheme) -> Styles {
    let (regular, muted) = if theme.is_dark() {
        (Style::new().white(), color((170, 170, 170)))
    } else {
        (Style::new().black(), color((110, 110, 110)))
    };
    let accent = color(accent(theme));

    Styles::new()
        .add(names::REGULAR, regular.clone())
        .add(names::MUTED, muted.clone())
        .add(names::ACCENT, accent.clone())
        .add(names::HEADER, accent.clone().bold().underlined())
        .add(names::TITLE, regular.clone().bold())
        .add(names::NAME, regular.bold())
        .add(names::DLC, accent.clone().italic())
        .add(names::UNMET, Style::new().black().on_color256(rgb_to_ansi256((255, 99, 71))))
        .add(names::ACTIVE, accent.bold())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_theme_defines_every_name() {
        let all = [
            names::REGULAR,
            names::MUTED,
            names::ACCENT,
            names::HEADER,
            names::TITLE,
            names::NAME,
            names::DLC,
            names::UNMET,
            names::ACTIVE,
            names::ERROR,
            names::WARNING,
            names::SUCCESS,
            names::INFO,
        ];
        for theme in EndingTheme::ALL {
            let styles = palette(theme);
            for name in all {
                assert!(styles.has(name), "{} lacks {}", theme, name);
            }
        }
    }

    #[test]
    fn test_missing_styles_are_flagged() {
        let styles = Styles::new().add("ok", Style::new().green());
        assert_eq!(styles.apply_plain("ok", "fine"), "fine");
        assert_eq!(styles.apply_plain("typo", "Hello"), "(!?) Hello");
        assert!(styles.apply("typo", "Hello").starts_with("(!?)"));
    }

    #[test]
    fn test_apply_emits_ansi() {
        let styles = Styles::new().add("ok", Style::new().green());
        assert!(styles.apply("ok", "fine").contains("\u{1b}["));
    }

    #[test]
    fn test_rgb_to_ansi256() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
    }
}
