use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use rl1search::model::DataType;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rl1",
    bin_name = "rl1",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Find the Elden Ring weapons and spells your character can use", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Search,
    Character,
    Display,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Search => "Search Commands:",
            CommandGroup::Character => "Character Commands:",
            CommandGroup::Display => "Display Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "list" | "show" | "categories" => Some(CommandGroup::Search),
            "stats" | "ignore-reqs" => Some(CommandGroup::Character),
            "dlc" | "shields" | "sort" | "columns" | "theme" => Some(CommandGroup::Display),
            "prefs" | "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Search,
            CommandGroup::Character,
            CommandGroup::Display,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("rl1 {version}\n"));
    output.push_str("Find the Elden Ring weapons and spells your character can use\n");
    output.push('\n');
    output.push_str("Usage: rl1 [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --no-color       Disable colored output\n");
    output.push_str("  -v, --verbose        Verbose output (debug logging on stderr)\n");
    output.push_str("      --config <PATH>  Use this config file instead of the default location\n");
    output.push_str("  -h, --help           Print help\n");
    output.push_str("  -V, --version        Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a command by name
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

/// Prints help for the parsed subcommand, or the grouped help at top level.
pub fn print_subcommand_help(command: &Option<Commands>) {
    let name = match command {
        Some(Commands::Search(c)) => match c {
            SearchCommands::List(_) => "list",
            SearchCommands::Show { .. } => "show",
            SearchCommands::Categories { .. } => "categories",
        },
        Some(Commands::Character(c)) => match c {
            CharacterCommands::Stats { .. } => "stats",
            CharacterCommands::IgnoreReqs { .. } => "ignore-reqs",
        },
        Some(Commands::Display(c)) => match c {
            DisplayCommands::Dlc { .. } => "dlc",
            DisplayCommands::Shields { .. } => "shields",
            DisplayCommands::Sort { .. } => "sort",
            DisplayCommands::Columns { .. } => "columns",
            DisplayCommands::Theme { .. } => "theme",
        },
        Some(Commands::Misc(c)) => match c {
            MiscCommands::Prefs { .. } => "prefs",
            MiscCommands::Config { .. } => "config",
            MiscCommands::Help { .. } => "help",
            MiscCommands::Completions { .. } => "completions",
        },
        None => {
            print_grouped_help();
            return;
        }
    };
    print_help_for_command(name);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn is_on(self) -> bool {
        self == Toggle::On
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Search(SearchCommands),

    #[command(flatten)]
    Character(CharacterCommands),

    #[command(flatten)]
    Display(DisplayCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

/// Filters for one `list` invocation. Repeated or comma-separated values
/// select several labels; labels match loosely (`blood_loss`, `Blood Loss`).
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Case-insensitive name search
    #[arg(short, long)]
    pub search: Option<String>,

    /// weapons, spells or both
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub data_type: Option<DataType>,

    /// Category, e.g. katanas or "Sacred Seals"
    #[arg(short, long, value_delimiter = ',')]
    pub category: Vec<String>,

    /// Damage type, e.g. physical, holy
    #[arg(short, long, value_delimiter = ',')]
    pub damage: Vec<String>,

    /// Primary attack type, e.g. slash, pierce
    #[arg(short, long, value_delimiter = ',')]
    pub attack: Vec<String>,

    /// Status buildup, e.g. blood_loss, frostbite
    #[arg(long, value_delimiter = ',')]
    pub status: Vec<String>,

    /// Check strength against the one-handed requirement
    #[arg(long)]
    pub one_handed: bool,

    /// Page to show (1-based)
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Rows per page (overrides page_size from config)
    #[arg(long, value_name = "N")]
    pub per_page: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum SearchCommands {
    /// List matching items (the default command)
    #[command(alias = "ls", display_order = 1)]
    List(ListArgs),

    /// Show one item and whether you meet its requirements
    #[command(display_order = 2)]
    Show {
        /// Item name (words are joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// List selectable categories
    #[command(display_order = 3)]
    Categories {
        /// weapons, spells or both
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        data_type: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CharacterCommands {
    /// Show or set attributes (e.g. rl1 stats str=30 dex=12)
    #[command(display_order = 10)]
    Stats {
        /// NAME=VALUE pairs; names: str, dex, int, fai, arc
        assignments: Vec<String>,

        /// Reset every attribute to 10
        #[arg(long, conflicts_with = "assignments")]
        reset: bool,
    },

    /// Ignore attribute requirements when filtering
    #[command(display_order = 11)]
    IgnoreReqs {
        #[arg(value_enum)]
        state: Toggle,
    },
}

#[derive(Subcommand, Debug)]
pub enum DisplayCommands {
    /// Show or hide DLC-exclusive items
    #[command(display_order = 20)]
    Dlc {
        #[arg(value_enum)]
        state: Toggle,
    },

    /// Show or hide shields
    #[command(display_order = 21)]
    Shields {
        #[arg(value_enum)]
        state: Toggle,
    },

    /// Show or change the sort column and direction
    #[command(display_order = 22)]
    Sort {
        /// Column, e.g. name, arcane, damage-type
        column: Option<String>,

        /// asc or desc (without it the column flips like a header click)
        direction: Option<String>,
    },

    /// Show or toggle visible columns
    #[command(display_order = 23)]
    Columns {
        /// Columns to toggle (or to show exactly, with --set)
        columns: Vec<String>,

        /// Show exactly the given columns
        #[arg(long, requires = "columns")]
        set: bool,

        /// Show every column
        #[arg(long, conflicts_with_all = ["columns", "set"])]
        reset: bool,
    },

    /// Show or change the theme
    #[command(display_order = 24)]
    Theme {
        /// Theme id, e.g. age-of-stars
        id: Option<String>,

        /// Switch to the next theme
        #[arg(long, conflicts_with = "id")]
        next: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Show stored preferences
    #[command(display_order = 30)]
    Prefs {
        /// Forget every stored preference
        #[arg(long)]
        reset: bool,
    },

    /// Show the effective configuration
    #[command(display_order = 31)]
    Config {
        /// Print a commented rl1.toml with every setting instead
        #[arg(long)]
        template: bool,
    },

    /// Print help for rl1 or a subcommand
    #[command(display_order = 32)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },

    /// Generate shell completions
    #[command(hide = true, display_order = 33)]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
