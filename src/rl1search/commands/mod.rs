use crate::attributes::AttributeState;
use crate::config::Rl1Config;
use crate::model::Item;
use crate::sort::{Column, SortState};
use crate::theme::EndingTheme;
use serde::Serialize;

pub mod categories;
pub mod columns;
pub mod config;
pub mod prefs;
pub mod query;
pub mod show;
pub mod sort;
pub mod stats;
pub mod theme;
pub mod toggles;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One page of the sorted view plus what a client needs to lay it out.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub rows: Vec<Item>,
    pub columns: Vec<Column>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub sort: SortState,
    pub attributes: AttributeState,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listing: Option<Listing>,
    pub items: Vec<Item>,
    pub attributes: Option<AttributeState>,
    pub labels: Vec<String>,
    pub entries: Vec<(String, String)>,
    pub theme: Option<EndingTheme>,
    pub config: Option<Rl1Config>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listing(mut self, listing: Listing) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    pub fn with_attributes(mut self, attributes: AttributeState) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_entries(mut self, entries: Vec<(String, String)>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_theme(mut self, theme: EndingTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_config(mut self, config: Rl1Config) -> Self {
        self.config = Some(config);
        self
    }
}

/// Matches `input` against a fixed label domain, ignoring case and treating
/// `_`/`-` as spaces, so `blood_loss` finds "Blood Loss" and `hand-to-hand`
/// finds "Hand-to-Hand".
pub(crate) fn resolve_label<'a>(input: &str, domain: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    fn key(s: &str) -> String {
        crate::text::fold(s.trim()).replace(['_', '-'], " ")
    }
    let wanted = key(input);
    domain.into_iter().find(|label| key(label) == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{STATUS_BUILDUPS, WEAPON_CATEGORIES};

    #[test]
    fn labels_resolve_loosely() {
        assert_eq!(
            resolve_label("blood_loss", STATUS_BUILDUPS),
            Some("Blood Loss")
        );
        assert_eq!(
            resolve_label("hand-to-hand", WEAPON_CATEGORIES),
            Some("Hand-to-Hand")
        );
        assert_eq!(resolve_label("KATANAS", WEAPON_CATEGORIES), Some("Katanas"));
        assert_eq!(resolve_label("lances", WEAPON_CATEGORIES), None);
    }
}
