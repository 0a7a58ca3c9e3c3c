pub mod analysis;
pub mod data;
pub mod draft;
pub mod heroes;
pub mod scoring;

/// Bounded [0, 1] component values and aggregate scores.
pub type Score = f64;
/// Match-outcome probabilities.
pub type Probability = f64;
/// Stable, externally assigned hero identifier.
pub type HeroId = u32;

/// Picks per team in every supported mode.
pub const PICKS_PER_TEAM: usize = 5;
/// Seconds on the clock for a single turn.
pub const TURN_CLOCK: u32 = 30;
/// Per-team reserve seconds in Captain's Mode.
pub const RESERVE_CLOCK: u32 = 130;

/// Random instance generation for rehearsal rosters and sampling.
pub trait Arbitrary {
    /// Generate a random instance.
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
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
