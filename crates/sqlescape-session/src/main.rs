//! sqlescape CLI
//!
//! Command-line tool for previewing escape clause translation.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use sqlescape_session::prelude::*;

/// Translate SQL escape clauses into native SQL.
#[derive(Parser)]
#[command(name = "sqlescape")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Statement to translate (read from --file or stdin when omitted).
    sql: Option<String>,

    /// Read the statement from a file.
    #[arg(short, long, conflicts_with = "sql")]
    file: Option<PathBuf>,

    /// JSON session configuration file.
    #[arg(short, long, env = "SQLESCAPE_CONFIG")]
    config: Option<PathBuf>,

    /// Pass the statement through without translating escape clauses.
    #[arg(long, env = "SQLESCAPE_NO_ESCAPE_PROCESSING")]
    no_escape_processing: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn session_config(&self) -> Result<SessionConfig> {
        let config = match &self.config {
            Some(path) => SessionConfig::from_file(path)?,
            None => SessionConfig::default(),
        };
        if self.no_escape_processing {
            return Ok(config.escape_processing(false));
        }
        Ok(config)
    }

    fn statement_text(&self) -> std::io::Result<String> {
        if let Some(sql) = &self.sql {
            return Ok(sql.clone());
        }
        if let Some(path) = &self.file {
            return std::fs::read_to_string(path);
        }
        let mut sql = String::new();
        std::io::stdin().read_to_string(&mut sql)?;
        Ok(sql)
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = cli.session_config()?;
    debug!(?config, "Loaded session config");
    let sql = cli.statement_text()?;

    let session = Session::with_config(EchoEngine, config);
    let statement = session.create_statement()?;
    match statement.prepare(&sql) {
        Ok(prepared) => {
            if prepared.returns_value() {
                info!("Statement binds a return value to its first parameter");
            }
            println!("{}", prepared.sql());
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ SessionError::Prepare { .. }) => {
            eprintln!("{}", e.diagnostic());
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
