//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every rl1search operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs**: user spellings such as `str=30`, `damage-type` or
//!   `age-of-stars` become typed values ([`Attribute`], [`Column`],
//!   [`EndingTheme`]) before any command runs
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O operations**: no stdout, stderr or file formatting
//! - **Presentation concerns**: returns data structures, not strings
//!
//! ## Attribute Assignments
//!
//! [`Rl1Api::set_stats`] takes `NAME=VALUE` pairs. Names accept the full
//! attribute name or its three-letter short form (`str`, `dex`, `int`,
//! `fai`, `arc`); values must be non-negative integers. All assignments are
//! parsed before any is applied, so a typo changes nothing.
//!
//! ## Generic Over PrefStore
//!
//! `Rl1Api<S: PrefStore>` is generic over the preference backend:
//! - Production: `Rl1Api<FileStore>`
//! - Testing: `Rl1Api<InMemoryStore>`

use crate::attributes::Attribute;
use crate::commands::{self, query::QueryOptions, CmdResult};
use crate::config::Rl1Config;
use crate::error::{Result, Rl1Error};
use crate::model::DataType;
use crate::session::Session;
use crate::sort::{Column, SortDirection};
use crate::store::PrefStore;
use crate::theme::EndingTheme;
use std::str::FromStr;

/// The main API facade.
///
/// All UI clients (the `rl1` CLI included) go through this type.
pub struct Rl1Api<S: PrefStore> {
    session: Session<S>,
    config: Rl1Config,
}

impl<S: PrefStore> Rl1Api<S> {
    pub fn new(session: Session<S>, config: Rl1Config) -> Self {
        Self { session, config }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn list(&mut self, opts: &QueryOptions) -> Result<CmdResult> {
        commands::query::run(&mut self.session, opts)
    }

    pub fn show_item(&self, name: &str) -> Result<CmdResult> {
        commands::show::run(&self.session, name)
    }

    pub fn categories(&mut self, data_type: Option<&str>) -> Result<CmdResult> {
        let data_type = data_type.map(parse::<DataType>).transpose()?;
        commands::categories::run(&mut self.session, data_type)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::show(&self.session)
    }

    pub fn set_stats<I: AsRef<str>>(&mut self, assignments: &[I]) -> Result<CmdResult> {
        let values = assignments
            .iter()
            .map(|a| parse_assignment(a.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        commands::stats::set(&mut self.session, &values)
    }

    pub fn reset_stats(&mut self) -> Result<CmdResult> {
        commands::stats::reset(&mut self.session)
    }

    pub fn set_ignore_requirements(&mut self, ignore: bool) -> Result<CmdResult> {
        commands::stats::set_ignore_requirements(&mut self.session, ignore)
    }

    pub fn set_show_dlc(&mut self, show: bool) -> Result<CmdResult> {
        commands::toggles::set_show_dlc(&mut self.session, show)
    }

    pub fn set_hide_shields(&mut self, hide: bool) -> Result<CmdResult> {
        commands::toggles::set_hide_shields(&mut self.session, hide)
    }

    pub fn sort(&mut self, column: Option<&str>, direction: Option<&str>) -> Result<CmdResult> {
        let column = column.map(parse::<Column>).transpose()?;
        let direction = direction.map(parse::<SortDirection>).transpose()?;
        commands::sort::run(&mut self.session, column, direction)
    }

    pub fn columns(&self) -> Result<CmdResult> {
        commands::columns::show(&self.session)
    }

    pub fn toggle_columns<I: AsRef<str>>(&mut self, columns: &[I]) -> Result<CmdResult> {
        let columns = parse_columns(columns)?;
        commands::columns::toggle(&mut self.session, &columns)
    }

    pub fn set_columns<I: AsRef<str>>(&mut self, columns: &[I]) -> Result<CmdResult> {
        let columns = parse_columns(columns)?;
        commands::columns::set(&mut self.session, &columns)
    }

    pub fn reset_columns(&mut self) -> Result<CmdResult> {
        commands::columns::reset(&mut self.session)
    }

    pub fn themes(&self) -> Result<CmdResult> {
        commands::theme::show(&self.session)
    }

    pub fn set_theme(&mut self, id: &str) -> Result<CmdResult> {
        let theme = parse::<EndingTheme>(id)?;
        commands::theme::set(&mut self.session, theme)
    }

    pub fn cycle_theme(&mut self) -> Result<CmdResult> {
        commands::theme::cycle(&mut self.session)
    }

    pub fn prefs(&self) -> Result<CmdResult> {
        commands::prefs::show(&self.session)
    }

    pub fn reset_prefs(&mut self) -> Result<CmdResult> {
        commands::prefs::reset(&mut self.session)
    }

    pub fn config(&self) -> Result<CmdResult> {
        commands::config::run(&self.config)
    }
}

fn parse<T: FromStr<Err = String>>(input: &str) -> Result<T> {
    input.parse().map_err(Rl1Error::Api)
}

fn parse_columns<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<Column>> {
    inputs.iter().map(|c| parse::<Column>(c.as_ref())).collect()
}

/// Parses `NAME=VALUE`.
fn parse_assignment(input: &str) -> Result<(Attribute, u32)> {
    let (name, value) = input
        .split_once('=')
        .ok_or_else(|| Rl1Error::Api(format!("Expected NAME=VALUE, got '{}'", input)))?;
    let attribute = parse::<Attribute>(name)?;
    let value = value
        .trim()
        .parse::<u32>()
        .map_err(|_| Rl1Error::Api(format!("Invalid value for {}: '{}'", attribute, value.trim())))?;
    Ok((attribute, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::store::memory::InMemoryStore;

    fn api() -> Rl1Api<InMemoryStore> {
        let session = Session::new(Catalog::bundled(), InMemoryStore::new(), 10).unwrap();
        Rl1Api::new(session, Rl1Config::default())
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(parse_assignment("str=30").unwrap(), (Attribute::Strength, 30));
        assert_eq!(
            parse_assignment(" Arcane = 7 ").unwrap(),
            (Attribute::Arcane, 7)
        );
        assert!(parse_assignment("str").is_err());
        assert!(parse_assignment("str=-1").is_err());
        assert!(parse_assignment("luck=10").is_err());
    }

    #[test]
    fn test_set_stats_is_all_or_nothing() {
        let mut api = api();
        assert!(api.set_stats(&["str=30", "bogus=1"]).is_err());
        assert_eq!(api.session().attributes().stats.strength, 10);

        api.set_stats(&["str=30", "fai=25"]).unwrap();
        assert_eq!(api.session().attributes().stats.strength, 30);
        assert_eq!(api.session().attributes().stats.faith, 25);
    }

    #[test]
    fn test_sort_parses_column_and_direction() {
        let mut api = api();
        api.sort(Some("damage-type"), Some("desc")).unwrap();
        let sort = api.session().sort();
        assert_eq!(sort.column, Column::DamageType);
        assert_eq!(sort.direction, SortDirection::Desc);
        assert!(api.sort(Some("weight"), None).is_err());
    }

    #[test]
    fn test_theme_ids_are_strict() {
        let mut api = api();
        api.set_theme("age-of-stars").unwrap();
        assert_eq!(api.session().theme(), EndingTheme::AgeOfStars);
        assert!(api.set_theme("age-of-nothing").is_err());
    }

    #[test]
    fn test_columns_dispatch() {
        let mut api = api();
        let result = api.set_columns(&["name", "str", "status"]).unwrap();
        assert_eq!(result.labels, vec!["Name", "Strength", "Status Buildup"]);
        let result = api.toggle_columns(&["links"]).unwrap();
        assert_eq!(result.labels.last().map(String::as_str), Some("Links"));
    }

    #[test]
    fn test_categories_parses_data_type() {
        let mut api = api();
        let result = api.categories(Some("spells")).unwrap();
        assert!(result.labels.contains(&"Sorcery".to_string()));
        assert!(api.categories(Some("armor")).is_err());
    }

    #[test]
    fn test_config_is_returned() {
        let api = api();
        assert_eq!(api.config().unwrap().config, Some(Rl1Config::default()));
    }
}
