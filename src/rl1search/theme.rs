//! Ending themes. Purely cosmetic: the CLI derives its palette from the
//! chosen theme, nothing else reads it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndingTheme {
    #[default]
    AgeOfFracture,
    AgeOfDuskborn,
    AgeOfOrder,
    BlessingOfDespair,
    AgeOfStars,
    LordOfFrenziedFlame,
}

impl EndingTheme {
    pub const ALL: [EndingTheme; 6] = [
        EndingTheme::AgeOfFracture,
        EndingTheme::AgeOfDuskborn,
        EndingTheme::AgeOfOrder,
        EndingTheme::BlessingOfDespair,
        EndingTheme::AgeOfStars,
        EndingTheme::LordOfFrenziedFlame,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            EndingTheme::AgeOfFracture => "age-of-fracture",
            EndingTheme::AgeOfDuskborn => "age-of-duskborn",
            EndingTheme::AgeOfOrder => "age-of-order",
            EndingTheme::BlessingOfDespair => "blessing-of-despair",
            EndingTheme::AgeOfStars => "age-of-stars",
            EndingTheme::LordOfFrenziedFlame => "lord-of-frenzied-flame",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EndingTheme::AgeOfFracture => "Age of Fracture",
            EndingTheme::AgeOfDuskborn => "Age of the Duskborn",
            EndingTheme::AgeOfOrder => "Age of Order",
            EndingTheme::BlessingOfDespair => "Blessing of Despair",
            EndingTheme::AgeOfStars => "Age of Stars",
            EndingTheme::LordOfFrenziedFlame => "Lord of Frenzied Flame",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EndingTheme::AgeOfFracture => "The Erdtree endures, cracked but golden",
            EndingTheme::AgeOfDuskborn => "Death becomes life, life becomes death",
            EndingTheme::AgeOfOrder => "Perfect Order through divine geometry",
            EndingTheme::BlessingOfDespair => "The curse spreads to all living things",
            EndingTheme::AgeOfStars => "Cold lunar light guides the way",
            EndingTheme::LordOfFrenziedFlame => "May chaos take the world!",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            EndingTheme::AgeOfFracture => "🌳",
            EndingTheme::AgeOfDuskborn => "💀",
            EndingTheme::AgeOfOrder => "⚡",
            EndingTheme::BlessingOfDespair => "🩸",
            EndingTheme::AgeOfStars => "🌙",
            EndingTheme::LordOfFrenziedFlame => "🔥",
        }
    }

    /// Light themes are the two "daylight" endings.
    pub fn is_dark(&self) -> bool {
        !matches!(self, EndingTheme::AgeOfOrder | EndingTheme::AgeOfDuskborn)
    }

    /// The next theme in display order, wrapping around.
    pub fn next(&self) -> EndingTheme {
        let pos = EndingTheme::ALL
            .iter()
            .position(|t| t == self)
            .unwrap_or(0);
        EndingTheme::ALL[(pos + 1) % EndingTheme::ALL.len()]
    }

    /// Parses a theme id, falling back to the default for unknown ids.
    pub fn from_id_or_default(id: &str) -> EndingTheme {
        id.parse().unwrap_or_default()
    }
}

impl fmt::Display for EndingTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for EndingTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        EndingTheme::ALL
            .into_iter()
            .find(|t| t.id() == wanted)
            .ok_or_else(|| format!("Unknown theme: {}", s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycling_visits_every_theme_once() {
        let mut theme = EndingTheme::default();
        let mut seen = vec![theme];
        for _ in 1..EndingTheme::ALL.len() {
            theme = theme.next();
            assert!(!seen.contains(&theme));
            seen.push(theme);
        }
        assert_eq!(theme.next(), EndingTheme::AgeOfFracture);
    }

    #[test]
    fn unknown_ids_fall_back() {
        assert_eq!(
            EndingTheme::from_id_or_default("age-of-stars"),
            EndingTheme::AgeOfStars
        );
        assert_eq!(
            EndingTheme::from_id_or_default("dark"),
            EndingTheme::AgeOfFracture
        );
    }

    #[test]
    fn only_two_themes_are_light() {
        let light: Vec<_> = EndingTheme::ALL.iter().filter(|t| !t.is_dark()).collect();
        assert_eq!(
            light,
            vec![&EndingTheme::AgeOfDuskborn, &EndingTheme::AgeOfOrder]
        );
    }
}
