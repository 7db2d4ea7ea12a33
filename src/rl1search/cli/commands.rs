//! # CLI Layer
//!
//! One possible UI client for rl1search. This module is the only place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Sets up logging
//! - Decides whether output is colored
//!
//! ## Flow
//!
//! 1. Parse arguments with clap (`setup.rs`)
//! 2. Handle help and completions, which need no catalog or preferences
//! 3. Build the [`AppContext`] through `rl1search::init`
//! 4. Dispatch to a `handle_*` function, which calls the API and renders the
//!    `CmdResult` with the palette of the *current* theme
//!
//! Handlers never inspect business rules; they only choose what to print.

use super::render::{Renderer, TextLine};
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, CharacterCommands, Cli,
    Commands, DisplayCommands, ListArgs, MiscCommands, SearchCommands,
};
use super::styles::names;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use console::Term;
use rl1search::api::Rl1Api;
use rl1search::attributes::{Attribute, AttributeState};
use rl1search::commands::query::QueryOptions;
use rl1search::commands::CmdResult;
use rl1search::config::Rl1Config;
use rl1search::error::Result;
use rl1search::init::{data_dir, initialize};
use rl1search::sort::Column;
use rl1search::store::fs::FileStore;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

struct AppContext {
    api: Rl1Api<FileStore>,
    config: Rl1Config,
    config_path: Option<PathBuf>,
    use_color: bool,
}

impl AppContext {
    /// A renderer for the theme in effect right now. Theme commands change it
    /// mid-run, so this is built per output rather than once.
    fn renderer(&self) -> Renderer {
        Renderer::new(self.api.session().theme(), self.use_color)
    }

    fn print_messages(&self, result: &CmdResult) {
        print!("{}", self.renderer().messages(&result.messages));
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // At top level use grouped help, for subcommands clap's default
    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    // Completions and help need neither catalog nor preferences
    match &cli.command {
        Some(Commands::Misc(MiscCommands::Completions { shell })) => {
            return handle_completions(*shell);
        }
        Some(Commands::Misc(MiscCommands::Help { command })) => {
            return handle_help(command.as_deref());
        }
        _ => {}
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Search(cmd)) => match cmd {
            SearchCommands::List(args) => handle_list(&mut ctx, args),
            SearchCommands::Show { name } => handle_show(&ctx, name.join(" ")),
            SearchCommands::Categories { data_type } => {
                handle_categories(&mut ctx, data_type.as_deref())
            }
        },
        Some(Commands::Character(cmd)) => match cmd {
            CharacterCommands::Stats { assignments, reset } => {
                handle_stats(&mut ctx, assignments, reset)
            }
            CharacterCommands::IgnoreReqs { state } => {
                let result = ctx.api.set_ignore_requirements(state.is_on())?;
                handle_view_change(&mut ctx, result)
            }
        },
        Some(Commands::Display(cmd)) => match cmd {
            DisplayCommands::Dlc { state } => {
                let result = ctx.api.set_show_dlc(state.is_on())?;
                handle_view_change(&mut ctx, result)
            }
            DisplayCommands::Shields { state } => {
                let result = ctx.api.set_hide_shields(!state.is_on())?;
                handle_view_change(&mut ctx, result)
            }
            DisplayCommands::Sort { column, direction } => {
                handle_sort(&mut ctx, column.as_deref(), direction.as_deref())
            }
            DisplayCommands::Columns {
                columns,
                set,
                reset,
            } => handle_columns(&mut ctx, columns, set, reset),
            DisplayCommands::Theme { id, next } => handle_theme(&mut ctx, id.as_deref(), next),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Prefs { reset } => handle_prefs(&mut ctx, reset),
            MiscCommands::Config { template } => handle_config(&ctx, template),
            MiscCommands::Help { command } => handle_help(command.as_deref()),
            MiscCommands::Completions { shell } => handle_completions(shell),
        },
        None => handle_list(&mut ctx, ListArgs::default()),
    }
}

/// Logs go to stderr so they never mix with rendered output. `RUST_LOG`
/// overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let ctx = initialize(cli.config.as_deref())?;
    let use_color = !cli.no_color && Term::stdout().features().colors_supported();

    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
        config_path: ctx.config_path,
        use_color,
    })
}

impl From<ListArgs> for QueryOptions {
    fn from(args: ListArgs) -> Self {
        QueryOptions {
            search: args.search,
            data_type: args.data_type,
            categories: args.category,
            damage_types: args.damage,
            attack_types: args.attack,
            status_buildups: args.status,
            one_handed: args.one_handed,
            page: args.page,
            page_size: args.per_page,
        }
    }
}

fn handle_list(ctx: &mut AppContext, args: ListArgs) -> Result<()> {
    let result = ctx.api.list(&QueryOptions::from(args))?;
    print_listing(ctx, &result);
    Ok(())
}

fn print_listing(ctx: &AppContext, result: &CmdResult) {
    let renderer = ctx.renderer();
    if let Some(listing) = &result.listing {
        print!("{}", renderer.listing(listing));
    }
    print!("{}", renderer.messages(&result.messages));
}

/// Reports a persisted view change, then shows the first page of the new view.
fn handle_view_change(ctx: &mut AppContext, result: CmdResult) -> Result<()> {
    ctx.print_messages(&result);
    let listing = ctx.api.list(&QueryOptions::default())?;
    print_listing(ctx, &listing);
    Ok(())
}

fn handle_show(ctx: &AppContext, name: String) -> Result<()> {
    let result = ctx.api.show_item(&name)?;
    let renderer = ctx.renderer();
    let attrs = result.attributes.unwrap_or_default();
    print!("{}", renderer.items(&result.items, &attrs));
    println!();
    print!("{}", renderer.messages(&result.messages));
    Ok(())
}

fn handle_categories(ctx: &mut AppContext, data_type: Option<&str>) -> Result<()> {
    let result = ctx.api.categories(data_type)?;
    let lines: Vec<TextLine> = result.labels.iter().map(TextLine::plain).collect();
    print!("{}", ctx.renderer().text_list(&lines, "No categories."));
    Ok(())
}

fn handle_stats(ctx: &mut AppContext, assignments: Vec<String>, reset: bool) -> Result<()> {
    let result = if reset {
        ctx.api.reset_stats()?
    } else if assignments.is_empty() {
        ctx.api.stats()?
    } else {
        ctx.api.set_stats(&assignments)?
    };

    let renderer = ctx.renderer();
    print!("{}", renderer.messages(&result.messages));
    if let Some(attrs) = &result.attributes {
        print!("{}", renderer.text_list(&stats_lines(attrs), ""));
    }
    Ok(())
}

fn stats_lines(attrs: &AttributeState) -> Vec<TextLine> {
    let width = Attribute::ALL
        .iter()
        .map(|a| a.label().len())
        .max()
        .unwrap_or(0);
    let mut lines: Vec<TextLine> = Attribute::ALL
        .iter()
        .map(|&a| TextLine::plain(format!("{:<width$}  {}", a.label(), attrs.stats.get(a))))
        .collect();

    let flag = |on: bool| if on { "on" } else { "off" };
    lines.push(TextLine::styled(
        format!("Two-handed strength: {}", flag(attrs.two_handed)),
        names::MUTED,
    ));
    lines.push(TextLine::styled(
        format!("Ignore requirements: {}", flag(attrs.ignore_requirements)),
        if attrs.ignore_requirements {
            names::WARNING
        } else {
            names::MUTED
        },
    ));
    lines
}

fn handle_sort(ctx: &mut AppContext, column: Option<&str>, direction: Option<&str>) -> Result<()> {
    let result = ctx.api.sort(column, direction)?;
    if column.is_none() && direction.is_none() {
        ctx.print_messages(&result);
        return Ok(());
    }
    handle_view_change(ctx, result)
}

fn handle_columns(ctx: &mut AppContext, columns: Vec<String>, set: bool, reset: bool) -> Result<()> {
    let result = if reset {
        ctx.api.reset_columns()?
    } else if columns.is_empty() {
        ctx.api.columns()?
    } else if set {
        ctx.api.set_columns(&columns)?
    } else {
        ctx.api.toggle_columns(&columns)?
    };

    let renderer = ctx.renderer();
    print!("{}", renderer.messages(&result.messages));
    let lines: Vec<TextLine> = Column::ALL
        .iter()
        .map(|column| {
            let label = column.label();
            if result.labels.iter().any(|l| l == label) {
                TextLine::styled(format!("[x] {}", label), names::ACTIVE)
            } else {
                TextLine::styled(format!("[ ] {}", label), names::MUTED)
            }
        })
        .collect();
    print!("{}", renderer.text_list(&lines, ""));
    Ok(())
}

fn handle_theme(ctx: &mut AppContext, id: Option<&str>, next: bool) -> Result<()> {
    let result = match id {
        Some(id) => ctx.api.set_theme(id)?,
        None if next => ctx.api.cycle_theme()?,
        None => ctx.api.themes()?,
    };

    let renderer = ctx.renderer();
    if result.entries.is_empty() {
        print!("{}", renderer.messages(&result.messages));
        return Ok(());
    }

    let current = result.theme.map(|t| t.id()).unwrap_or_default();
    let width = result.entries.iter().map(|(id, _)| id.len()).max().unwrap_or(0);
    let lines: Vec<TextLine> = result
        .entries
        .iter()
        .map(|(id, name)| {
            if *id == current {
                TextLine::styled(format!("* {:<width$}  {}", id, name), names::ACTIVE)
            } else {
                TextLine::plain(format!("  {:<width$}  {}", id, name))
            }
        })
        .collect();
    print!("{}", renderer.text_list(&lines, ""));
    Ok(())
}

fn handle_prefs(ctx: &mut AppContext, reset: bool) -> Result<()> {
    let result = if reset {
        ctx.api.reset_prefs()?
    } else {
        ctx.api.prefs()?
    };

    let renderer = ctx.renderer();
    let lines: Vec<TextLine> = result
        .entries
        .iter()
        .map(|(key, value)| TextLine::plain(format!("{} = {}", key, value)))
        .collect();
    if !lines.is_empty() {
        print!("{}", renderer.text_list(&lines, ""));
    }
    print!("{}", renderer.messages(&result.messages));
    Ok(())
}

fn handle_config(ctx: &AppContext, template: bool) -> Result<()> {
    if template {
        print!("{}", Rl1Config::template());
        return Ok(());
    }

    let result = ctx.api.config()?;
    let config = result.config.as_ref().unwrap_or(&ctx.config);
    let config_file = match &ctx.config_path {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("{} (not found, using defaults)", path.display()),
        None => "(none)".to_string(),
    };
    let catalog = config
        .catalog_dir
        .as_ref()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "(bundled)".to_string());
    let data = data_dir(config)?;

    let lines = vec![
        TextLine::styled(format!("config file = {}", config_file), names::MUTED),
        TextLine::plain(format!("page_size = {}", config.page_size())),
        TextLine::plain(format!("catalog_dir = {}", catalog)),
        TextLine::plain(format!("data_dir = {}", data.display())),
    ];
    print!("{}", ctx.renderer().text_list(&lines, ""));
    Ok(())
}

fn handle_help(command: Option<&str>) -> Result<()> {
    match command {
        Some(name) => print_help_for_command(name),
        None => print_grouped_help(),
    }
    Ok(())
}

fn handle_completions(shell: Shell) -> Result<()> {
    clap_complete::generate(shell, &mut Cli::command(), "rl1", &mut io::stdout());
    Ok(())
}
