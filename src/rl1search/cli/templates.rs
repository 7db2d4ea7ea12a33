//! # CLI Templates
//!
//! Terminal output goes through minijinja templates kept as standalone files,
//! which are easier to edit and diff than string literals. They are embedded
//! here as constants.
//!
//! Conventions:
//!
//! 1. **Line breaks are explicit.** The environment trims the newline after a
//!    block tag, so a line that ends in `{% endfor %}` needs an empty line
//!    after it to emit one.
//! 2. **No layout math.** Widths, padding and truncation arrive precomputed
//!    from `render.rs`; templates only place text.
//! 3. **Styles are data.** Rows carry the style name for each cell rather than
//!    templates branching on item properties.

pub const TABLE_TEMPLATE: &str = include_str!("templates/table.tmp");
pub const ITEM_TEMPLATE: &str = include_str!("templates/item.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
