//! Digested poker decisions and exact-match lookup.
//!
//! The log digester reduces observed play to one row per holding: the hole
//! cards, the visible board, the action taken and how well it worked out.
//! [`DecisionTable`](decisions::DecisionTable) loads that CSV once and
//! answers `(cards, board) -> action` queries.
pub mod cards;
pub mod decisions;

#[cfg(feature = "cli")]
pub mod cli;

/// Mean showdown rank achieved after taking an action.
pub type AverageRank = f64;
/// Number of observed hands behind a digested decision.
pub type Count = u32;

/// Random instance generation for tests and benchmarks.
pub trait Arbitrary {
    fn random() -> Self;
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
