//! # Rendering Module
//!
//! Turns `CmdResult` data into terminal text through minijinja templates and
//! the named styles of [`super::styles`].
//!
//! ## Design Philosophy
//!
//! Layout calculations (column widths, truncation, padding) stay in Rust
//! because they need Unicode-aware width math. Templates handle presentation:
//! which semantic style each cell gets, section breaks, empty states.
//!
//! Padding is passed separately from cell text so a style (underline,
//! background) covers the text only, never the gap after it.

use super::styles::{names, palette, Styles};
use super::templates::{ITEM_TEMPLATE, MESSAGES_TEMPLATE, TABLE_TEMPLATE, TEXT_LIST_TEMPLATE};
use minijinja::{Environment, Value};
use rl1search::attributes::{Attribute, AttributeState};
use rl1search::commands::{CmdMessage, Listing, MessageLevel};
use rl1search::model::{Item, NONE_LABEL};
use rl1search::sort::Column;
use rl1search::theme::EndingTheme;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const MAX_CELL_WIDTH: usize = 28;
pub const MAX_LINK_WIDTH: usize = 48;
const COLUMN_GAP: &str = "  ";

#[derive(Serialize)]
struct Cell {
    text: String,
    pad: String,
    style: &'static str,
}

#[derive(Serialize)]
struct TableData {
    header: Vec<Cell>,
    rows: Vec<Vec<Cell>>,
    gap: &'static str,
    empty: bool,
    empty_message: String,
    footer: String,
}

#[derive(Serialize)]
struct Field {
    label: String,
    pad: String,
    value: String,
    style: &'static str,
}

#[derive(Serialize)]
struct ItemEntry {
    name: String,
    name_style: &'static str,
    kind: String,
    fields: Vec<Field>,
}

#[derive(Serialize)]
struct ItemsData {
    items: Vec<ItemEntry>,
}

#[derive(Serialize)]
pub struct TextLine {
    pub text: String,
    pub style: &'static str,
}

impl TextLine {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: names::REGULAR,
        }
    }

    pub fn styled(text: impl Into<String>, style: &'static str) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Serialize)]
struct TextListData<'a> {
    lines: &'a [TextLine],
    empty_message: &'a str,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

/// Renders with one palette and a fixed color decision.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(theme: EndingTheme, use_color: bool) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        register_style_filter(&mut env, palette(theme), use_color);

        for (name, source) in [
            ("table", TABLE_TEMPLATE),
            ("item", ITEM_TEMPLATE),
            ("text_list", TEXT_LIST_TEMPLATE),
            ("messages", MESSAGES_TEMPLATE),
        ] {
            if let Err(e) = env.add_template(name, source) {
                tracing::error!(template = name, error = %e, "invalid template");
            }
        }
        Self { env }
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> String {
        self.env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(data))
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    pub fn listing(&self, listing: &Listing) -> String {
        self.render("table", &table_data(listing))
    }

    pub fn items(&self, items: &[Item], attrs: &AttributeState) -> String {
        let data = ItemsData {
            items: items.iter().map(|item| item_entry(item, attrs)).collect(),
        };
        self.render("item", &data)
    }

    pub fn text_list(&self, lines: &[TextLine], empty_message: &str) -> String {
        self.render(
            "text_list",
            &TextListData {
                lines,
                empty_message,
            },
        )
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> String {
        if messages.is_empty() {
            return String::new();
        }
        let data = MessagesData {
            messages: messages
                .iter()
                .map(|msg| MessageData {
                    content: msg.content.clone(),
                    style: match msg.level {
                        MessageLevel::Info => names::INFO,
                        MessageLevel::Success => names::SUCCESS,
                        MessageLevel::Warning => names::WARNING,
                        MessageLevel::Error => names::ERROR,
                    },
                })
                .collect(),
        };
        self.render("messages", &data)
    }
}

/// Registers the `style` filter on a minijinja environment.
fn register_style_filter(env: &mut Environment<'static>, styles: Styles, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            styles.apply(&name, &text)
        } else {
            // Unknown names are still flagged without color.
            styles.apply_plain(&name, &text)
        }
    });
}

fn table_data(listing: &Listing) -> TableData {
    let attrs = &listing.attributes;
    let columns = &listing.columns;

    let rows: Vec<Vec<(String, &'static str)>> = listing
        .rows
        .iter()
        .map(|item| {
            columns
                .iter()
                .map(|&column| cell(item, column, attrs))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            rows.iter()
                .map(|row| row[i].0.width())
                .chain(std::iter::once(header_label(*column, listing).width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let last = columns.len().saturating_sub(1);
    let pad = |i: usize, text: &str| -> String {
        if i == last {
            String::new()
        } else {
            " ".repeat(widths[i].saturating_sub(text.width()))
        }
    };

    let header = columns
        .iter()
        .enumerate()
        .map(|(i, &column)| {
            let text = header_label(column, listing);
            Cell {
                pad: pad(i, &text),
                text,
                style: names::HEADER,
            }
        })
        .collect();

    let rows = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .enumerate()
                .map(|(i, (text, style))| Cell {
                    pad: pad(i, &text),
                    text,
                    style,
                })
                .collect()
        })
        .collect();

    let empty = listing.rows.is_empty() || columns.is_empty();
    let empty_message = if columns.is_empty() {
        "No columns are visible. Try `rl1 columns --reset`.".to_string()
    } else if listing.total_matches == 0 {
        "No items match the current filters.".to_string()
    } else {
        format!("Nothing on page {}.", listing.page)
    };

    TableData {
        header,
        rows,
        gap: COLUMN_GAP,
        empty,
        empty_message,
        footer: footer(listing),
    }
}

/// Header text, with the sort arrow on the active column.
fn header_label(column: Column, listing: &Listing) -> String {
    if listing.sort.column == column {
        let arrow = match listing.sort.direction {
            rl1search::sort::SortDirection::Asc => '▲',
            rl1search::sort::SortDirection::Desc => '▼',
        };
        format!("{} {}", column.label(), arrow)
    } else {
        column.label().to_string()
    }
}

fn footer(listing: &Listing) -> String {
    let matches = match listing.total_matches {
        1 => "1 match".to_string(),
        n => format!("{} matches", n),
    };
    if listing.total_pages == 0 {
        return matches;
    }
    format!(
        "Page {} of {} · {}",
        listing.page, listing.total_pages, matches
    )
}

fn cell(item: &Item, column: Column, attrs: &AttributeState) -> (String, &'static str) {
    if let Some(attribute) = column.attribute() {
        return requirement_cell(item, attribute, attrs);
    }
    match column {
        Column::Image => (
            truncate_to_width(image_name(&item.image), MAX_CELL_WIDTH),
            names::MUTED,
        ),
        Column::Name => (
            truncate_to_width(&item.name, MAX_CELL_WIDTH),
            if item.dlc_exclusive {
                names::DLC
            } else {
                names::NAME
            },
        ),
        Column::Category => (truncate_to_width(&item.category, MAX_CELL_WIDTH), names::REGULAR),
        Column::DamageType => (
            truncate_to_width(&damage_text(item), MAX_CELL_WIDTH),
            names::REGULAR,
        ),
        Column::AttackType => (attack_text(item), names::REGULAR),
        Column::StatusBuildup => (
            item.status_buildup.clone(),
            if item.status_buildup == NONE_LABEL {
                names::MUTED
            } else {
                names::REGULAR
            },
        ),
        Column::Links => (
            truncate_to_width(&item.links.fextralife, MAX_LINK_WIDTH),
            names::MUTED,
        ),
        _ => (String::new(), names::REGULAR),
    }
}

/// A requirement above the player's value can only be listed when
/// requirements are ignored; those cells are highlighted.
fn requirement_cell(item: &Item, attribute: Attribute, attrs: &AttributeState) -> (String, &'static str) {
    let needed = attrs.requirement(item, attribute);
    let style = if needed > attrs.stats.get(attribute) {
        names::UNMET
    } else if needed == 0 {
        names::MUTED
    } else {
        names::REGULAR
    };
    (needed.to_string(), style)
}

fn damage_text(item: &Item) -> String {
    if item.damage_types.is_empty() {
        "-".to_string()
    } else {
        item.damage_types.join(", ")
    }
}

fn attack_text(item: &Item) -> String {
    let attacks = &item.attack_types;
    if attacks.secondary == NONE_LABEL || attacks.secondary == attacks.primary {
        attacks.primary.clone()
    } else {
        format!("{} / {}", attacks.primary, attacks.secondary)
    }
}

fn image_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

fn item_entry(item: &Item, attrs: &AttributeState) -> ItemEntry {
    let mut fields: Vec<(String, String, &'static str)> = vec![(
        "Category".into(),
        item.category.clone(),
        names::REGULAR,
    )];

    for attribute in Attribute::ALL {
        let have = attrs.stats.get(attribute);
        let (value, needed) = match attribute {
            Attribute::Strength if item.is_weapon() => {
                let req = &item.required;
                (
                    format!(
                        "{} one-handed, {} two-handed",
                        req.strength_one_hand, req.strength_two_hand
                    ),
                    req.strength(attrs.two_handed),
                )
            }
            _ => {
                let needed = attrs.requirement(item, attribute);
                (needed.to_string(), needed)
            }
        };
        let style = if needed > have {
            names::UNMET
        } else {
            names::REGULAR
        };
        fields.push((attribute.label().to_string(), value, style));
    }

    fields.push(("Damage".into(), damage_text(item), names::REGULAR));
    if item.is_weapon() {
        fields.push(("Attack".into(), attack_text(item), names::REGULAR));
    }
    fields.push(("Status".into(), item.status_buildup.clone(), names::REGULAR));
    if item.dlc_exclusive {
        fields.push(("DLC".into(), "Shadow of the Erdtree".into(), names::DLC));
    }
    for (label, link) in [("Wiki.gg", &item.links.wiki_gg), ("Fextralife", &item.links.fextralife)] {
        if !link.is_empty() {
            fields.push((label.into(), link.clone(), names::MUTED));
        }
    }

    let label_width = fields.iter().map(|(l, _, _)| l.width()).max().unwrap_or(0) + 2;
    ItemEntry {
        name: item.name.clone(),
        name_style: if item.dlc_exclusive {
            names::DLC
        } else {
            names::TITLE
        },
        kind: format!("{} · {}", item.kind, item.category),
        fields: fields
            .into_iter()
            .map(|(label, value, style)| Field {
                pad: " ".repeat(label_width.saturating_sub(label.width())),
                label,
                value,
                style,
            })
            .collect(),
    }
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rl1search::catalog::Catalog;
    use rl1search::paginate::PageState;
    use rl1search::sort::SortState;

    fn plain() -> Renderer {
        Renderer::new(EndingTheme::default(), false)
    }

    fn listing(names: &[&str], columns: Vec<Column>, attrs: AttributeState) -> Listing {
        let catalog = Catalog::bundled();
        let rows: Vec<Item> = names
            .iter()
            .map(|n| catalog.find(n).cloned().unwrap())
            .collect();
        let page = PageState::default();
        Listing {
            total_matches: rows.len(),
            total_pages: page.total_pages(rows.len()),
            rows,
            columns,
            page: page.page(),
            page_size: page.page_size(),
            sort: SortState::default(),
            attributes: attrs,
        }
    }

    #[test]
    fn test_render_empty_listing() {
        let data = listing(&[], Column::ALL.to_vec(), AttributeState::default());
        let output = plain().listing(&data);
        assert_eq!(output.trim_end(), "No items match the current filters.\n0 matches");
    }

    #[test]
    fn test_render_table_rows_align() {
        let data = listing(
            &["Dagger", "Claymore"],
            vec![Column::Name, Column::Strength, Column::Category],
            AttributeState::default(),
        );
        let output = plain().listing(&data);
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("Name ▲"));
        let dagger = lines.iter().find(|l| l.starts_with("Dagger")).unwrap();
        let claymore = lines.iter().find(|l| l.starts_with("Claymore")).unwrap();
        assert_eq!(dagger.find("Daggers"), claymore.find("Greatswords"));
        assert!(output.contains("Page 1 of 1 · 2 matches"));
        assert!(!output.contains("(!?)"));
    }

    #[test]
    fn test_unmet_requirements_are_highlighted() {
        let attrs = AttributeState {
            ignore_requirements: true,
            ..Default::default()
        };
        let claymore = Catalog::bundled().find("Claymore").cloned().unwrap();
        let (text, style) = requirement_cell(&claymore, Attribute::Dexterity, &attrs);
        assert_eq!(text, "13");
        assert_eq!(style, names::UNMET);

        let dagger = Catalog::bundled().find("Dagger").cloned().unwrap();
        let (_, style) = requirement_cell(&dagger, Attribute::Strength, &attrs);
        assert_eq!(style, names::REGULAR);
    }

    #[test]
    fn test_render_with_color_includes_ansi() {
        let data = listing(&["Dagger"], vec![Column::Name], AttributeState::default());
        let output = Renderer::new(EndingTheme::AgeOfStars, true).listing(&data);
        assert!(output.contains("\u{1b}["));
        assert!(output.contains("Dagger"));
    }

    #[test]
    fn test_render_item_details() {
        let item = Catalog::bundled().find("Varré's Bouquet").cloned().unwrap();
        let output = plain().items(&[item], &AttributeState::default());
        assert!(output.starts_with("Varré's Bouquet"));
        assert!(output.contains("Arcane"));
        assert!(output.contains("23"));
        assert!(output.contains("Blood Loss"));
    }

    #[test]
    fn test_render_text_list() {
        let lines = vec![TextLine::plain("first"), TextLine::styled("second", names::ACTIVE)];
        let output = plain().text_list(&lines, "Nothing here.");
        assert_eq!(output, "first\nsecond\n");
        assert_eq!(plain().text_list(&[], "Nothing here."), "Nothing here.\n");
    }

    #[test]
    fn test_render_messages() {
        assert!(plain().messages(&[]).is_empty());
        let messages = vec![
            CmdMessage::info("Info message"),
            CmdMessage::warning("Warning message"),
        ];
        assert_eq!(plain().messages(&messages), "Info message\nWarning message\n");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Claymore", 10), "Claymore");
        assert_eq!(truncate_to_width("Heavy Thrusting Swords", 8), "Heavy T…");
        assert_eq!(truncate_to_width("Great Épée", 6).width(), 6);
    }
}
