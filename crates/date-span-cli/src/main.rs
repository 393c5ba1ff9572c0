//! Command-line front end for date-span.
//!
//! `between` and `label` answer one question and exit; `interactive` keeps a
//! form open and edits it from stdin.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use date_span::{format_label, DateForm};
use log::debug;

mod cli;
mod render;
mod session;

use cli::{Cli, Command, OutputFormat};
use session::Session;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("locale: {}", cli.locale);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Between { start, end, format } => {
            let mut form = DateForm::new();
            form.set_start(start);
            form.set_end(end);
            let view = form.view(cli.locale);

            match format {
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut out, &view)
                        .context("failed to serialize result")?;
                    writeln!(out)?;
                }
                OutputFormat::Text => {
                    if let Some(panel) = &view.result {
                        writeln!(out, "{}", render::span_line(&panel.span))?;
                    }
                }
            }
        }
        Command::Label { date } => {
            writeln!(out, "{}", format_label(&date, cli.locale))?;
        }
        Command::Interactive => {
            let stdin = io::stdin();
            Session::new(cli.locale, stdin.lock(), out).run()?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
