// logcols - column tables for JSON log objects
//
// Reads log objects (JSON Lines) from a file or stdin and prints each one as
// a column-aligned table, the way a console log viewer shows a single entry.
//
// Architecture:
// - Config: file -> env -> CLI flags, merged into ColumnOptions
// - Logging: tracing to stderr, tables to stdout
// - Render: one LogObject view, re-run for every input line

mod cli;
mod config;
mod logging;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use logcols::format::LogObject;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Config { show, path }) = &cli.command {
        cli::handle_config(*show, *path);
        return Ok(());
    }

    let mut config = Config::from_env();
    logging::init(&config.logging);
    cli.apply(&mut config.columns);

    tracing::debug!(
        layout = config.columns.layout.as_str(),
        max_width = ?config.columns.max_width,
        "Loaded configuration"
    );

    let view = LogObject::new(config.columns);

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = render::render_json_lines(reader, &view, &mut out)?;

    tracing::info!(
        rendered = summary.rendered,
        failed = summary.failed,
        "Finished rendering"
    );

    if summary.failed > 0 {
        anyhow::bail!(
            "{} log line(s) could not be rendered ({} rendered)",
            summary.failed,
            summary.rendered
        );
    }

    Ok(())
}
