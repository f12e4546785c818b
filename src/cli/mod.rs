mod query;
pub use query::*;

use crate::decisions::Config;
use crate::decisions::DecisionTable;
use crate::decisions::Malformed;
use clap::Parser;
use std::path::PathBuf;

/// Query a digested decision table from the shell.
///
/// Flags override `DECISIONS_CSV`, `DECISIONS_MALFORMED` and
/// `DECISIONS_VALIDATE`, which in turn override the built-in defaults.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CLI {
    #[arg(long, short)]
    path: Option<PathBuf>,
    #[arg(long)]
    skip_malformed: bool,
    /// `--validate` or `--validate=false`; absent defers to the environment.
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    validate: Option<bool>,
    #[command(subcommand)]
    query: Query,
}

impl CLI {
    pub fn config(&self) -> Config {
        let config = Config::from_env();
        let config = match self.path {
            Some(ref path) => Config {
                path: path.clone(),
                ..config
            },
            None => config,
        };
        let config = match self.skip_malformed {
            true => config.malformed(Malformed::Skip),
            false => config,
        };
        match self.validate {
            Some(validate) => config.validate(validate),
            None => config,
        }
    }

    pub fn run() -> anyhow::Result<()> {
        let cli = Self::parse();
        let ref config = cli.config();
        let table = DecisionTable::load_with(config)?;
        cli.handle(&table, &mut std::io::stdout().lock())
    }

    fn handle<W>(&self, table: &DecisionTable, out: &mut W) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        match self.query {
            Query::Lookup {
                ref cards,
                ref board,
            } => match table.lookup(cards, board) {
                Some(action) => writeln!(out, "{}", action)?,
                None => writeln!(out, "no decision")?,
            },
            Query::Record {
                ref cards,
                ref board,
            } => match table.record(cards, board) {
                Some(record) => writeln!(out, "{}", record)?,
                None => writeln!(out, "no decision")?,
            },
            Query::Stats => writeln!(out, "{} decisions", table.len())?,
            Query::Dump => table.write(&mut *out)?,
        }
        Ok(())
    }
}
