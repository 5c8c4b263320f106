// CLI module - command-line argument parsing and handlers
//
// `logcols [FILE]` renders JSON Lines log objects as column tables.
// `logcols config --show|--path` inspects configuration.

use crate::config::{Config, VERSION};
use clap::{Parser, Subcommand, ValueEnum};
use logcols::format::{ColumnOptions, Layout};
use std::path::PathBuf;

/// logcols - render log objects as column tables
#[derive(Parser, Debug)]
#[command(name = "logcols")]
#[command(version = VERSION)]
#[command(about = "Render JSON log objects as column-aligned tables", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON Lines file to read (stdin when omitted)
    pub input: Option<PathBuf>,

    /// Field-to-column mapping
    #[arg(long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Omit the heading row
    #[arg(long)]
    pub no_headers: bool,

    /// Maximum column width (0 = unbounded)
    #[arg(long, value_name = "COLUMNS")]
    pub max_width: Option<usize>,

    /// Cut over-wide cells instead of wrapping them
    #[arg(long)]
    pub truncate: bool,

    /// String placed between columns
    #[arg(long)]
    pub splitter: Option<String>,

    /// Show line breaks inside values as `\n` instead of breaking the cell
    #[arg(long)]
    pub escape_newlines: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutArg {
    Columns,
    KeyValue,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Columns => Layout::Columns,
            LayoutArg::KeyValue => Layout::KeyValue,
        }
    }
}

impl Cli {
    /// Apply flag overrides on top of loaded options
    pub fn apply(&self, options: &mut ColumnOptions) {
        if let Some(layout) = self.layout {
            options.layout = layout.into();
        }
        if self.no_headers {
            options.show_headers = false;
        }
        if let Some(width) = self.max_width {
            options.max_width = (width > 0).then_some(width);
        }
        if self.truncate {
            options.truncate = true;
        }
        if let Some(splitter) = &self.splitter {
            options.splitter = splitter.clone();
        }
        if self.escape_newlines {
            options.preserve_new_lines = false;
        }
    }
}

/// Handle the `config` subcommand
pub fn handle_config(show: bool, path: bool) {
    if path {
        handle_config_path();
    } else if show {
        handle_config_show();
    } else {
        println!("Usage: logcols config [--show|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --path    Show config file path");
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Could not determine config path (no home directory)");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();
    print!("{}", config.to_toml());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_options() {
        let cli = Cli::parse_from([
            "logcols",
            "--layout",
            "key-value",
            "--no-headers",
            "--max-width",
            "20",
            "--truncate",
            "--splitter",
            " | ",
            "--escape-newlines",
            "events.jsonl",
        ]);
        assert_eq!(cli.input, Some(PathBuf::from("events.jsonl")));

        let mut options = ColumnOptions::default();
        cli.apply(&mut options);

        assert_eq!(options.layout, Layout::KeyValue);
        assert!(!options.show_headers);
        assert_eq!(options.max_width, Some(20));
        assert!(options.truncate);
        assert_eq!(options.splitter, " | ");
        assert!(!options.preserve_new_lines);
    }

    #[test]
    fn test_no_flags_leave_options() {
        let cli = Cli::parse_from(["logcols"]);
        let mut options = ColumnOptions {
            max_width: Some(40),
            ..Default::default()
        };
        cli.apply(&mut options);
        assert_eq!(options.max_width, Some(40));
        assert!(options.show_headers);
        assert!(cli.input.is_none());
    }

    #[test]
    fn test_zero_max_width_clears_limit() {
        let cli = Cli::parse_from(["logcols", "--max-width", "0"]);
        let mut options = ColumnOptions {
            max_width: Some(40),
            ..Default::default()
        };
        cli.apply(&mut options);
        assert_eq!(options.max_width, None);
    }

    #[test]
    fn test_config_subcommand() {
        let cli = Cli::parse_from(["logcols", "config", "--path"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                show: false,
                path: true
            })
        ));
    }
}
