//! Interactive draft rehearsal.
//!
//! Drafts against a recommendation-driven bot, printing the board and the
//! running win probability after every action.

use clap::Parser;
use dialoguer::Select;
use draftsim::analysis::WinProbability;
use draftsim::data::HeroCatalog;
use draftsim::data::HeroSource;
use draftsim::data::MatchupTable;
use draftsim::draft::DraftMode;
use draftsim::draft::Team;
use draftsim::heroes::Hero;
use draftsim::scoring::Recommendation;
use draftsim::scoring::RecommendationEngine;
use draftsim::Arbitrary;
use std::sync::Arc;

#[derive(Parser)]
#[command(about = "Rehearse a two-team hero draft against a bot.")]
struct Args {
    /// Draft mode: captains or allpick.
    #[arg(long, default_value = "captains")]
    mode: String,
    /// Side to play: radiant or dire.
    #[arg(long, default_value = "radiant")]
    side: String,
    /// Hero catalog JSON; a synthetic roster is used when omitted.
    #[arg(long)]
    heroes: Option<std::path::PathBuf>,
    /// Matchup statistics JSON; all-neutral data when omitted.
    #[arg(long)]
    matchups: Option<std::path::PathBuf>,
    /// Suggestions offered per turn.
    #[arg(long, default_value_t = 8)]
    count: usize,
    /// Let the bot draft both sides.
    #[arg(long)]
    auto: bool,
    /// Record timer fields in the draft state.
    #[arg(long)]
    timer: bool,
}

fn main() -> anyhow::Result<()> {
    draftsim::log();
    let args = Args::parse();
    let mode = DraftMode::try_from(args.mode.as_str()).map_err(anyhow::Error::msg)?;
    let side = Team::try_from(args.side.as_str()).map_err(anyhow::Error::msg)?;
    let catalog = match &args.heroes {
        Some(path) => HeroCatalog::from_json(&std::fs::read_to_string(path)?)?,
        None => HeroCatalog::random(),
    };
    let stats = match &args.matchups {
        Some(path) => MatchupTable::from_json(&std::fs::read_to_string(path)?)?,
        None => MatchupTable::new(),
    };
    log::info!("{} rehearsal over {} heroes", mode, catalog.count());

    let engine = mode.engine();
    let recommendations = RecommendationEngine::new(&stats);
    let outcome = WinProbability::new(&stats);
    let mut state = engine.start(catalog.all(), args.timer)?;
    while let Some(team) = engine.current_team(&state) {
        println!("\n{state}");
        let ranked = recommendations.recommend(&state, team, args.count);
        let hero = match ranked.first() {
            Some(_) if !args.auto && team == side => choose(&ranked)?,
            Some(top) => top.hero.clone(),
            None => anyhow::bail!("hero pool exhausted before the draft completed"),
        };
        state = if engine.is_ban_phase(&state) {
            engine.ban(&state, &hero)?
        } else {
            engine.pick(&state, &hero)?
        };
        if let Some(action) = state.history().last() {
            println!("{action}");
        }
        println!(
            "radiant win probability: {:5.1}%",
            100.0 * outcome.radiant(&state)
        );
    }
    println!("\n{state}");
    Ok(())
}

fn choose(ranked: &[Recommendation]) -> anyhow::Result<Arc<Hero>> {
    let items = ranked
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<String>>();
    let selection = Select::new()
        .with_prompt("your turn")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(ranked[selection].hero.clone())
}
