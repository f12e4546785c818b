//! Decision Lookup Binary
//!
//! Loads a digested decision table and answers a single query.

use rbp_decisions::*;

fn main() -> anyhow::Result<()> {
    log();
    cli::CLI::run()
}
