//! Space Defender - headless entry point
//!
//! Runs the game in the terminal with the autopilot at the controls.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;

use space_defender::autopilot::choose_command;
use space_defender::persistence::FileStore;
use space_defender::platform::ConsoleFrontend;
use space_defender::sim::SystemClock;
use space_defender::{Game, GameError, Settings};

#[derive(Parser, Debug)]
#[command(name = "space-defender")]
#[command(about = "Headless grid arcade shooter driven by an autopilot")]
#[command(version)]
struct Args {
    /// Settings JSON file; defaults apply when absent
    #[arg(env = "SPACE_DEFENDER_SETTINGS")]
    settings: Option<PathBuf>,

    /// Spawner seed, overriding the settings file
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks (0 = until game over)
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Log moves, hits, level-ups and achievement reports
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Apply command line overrides onto loaded settings
    fn apply(&self, settings: &mut Settings) {
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(max_ticks) = self.max_ticks {
            settings.max_ticks = max_ticks;
        }
        if self.verbose {
            settings.verbose = true;
        }
    }
}

fn main() -> Result<(), GameError> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Space Defender (headless) starting...");

    let mut settings = Settings::load_or_default(args.settings.as_deref())?;
    args.apply(&mut settings);

    let store = FileStore::new(settings.achievement_log.clone());
    let mut game = Game::from_settings(&settings, Box::new(store), Box::new(SystemClock))?;
    for name in game.previously_mastered() {
        log::info!("Previously mastered: {name}");
    }

    let rules = settings.rules;
    let mut console = ConsoleFrontend::new(rules.grid_width, rules.grid_height, settings.render_every);
    let tick_interval = Duration::from_millis(settings.tick_millis);

    let mut tick_index = 0u64;
    while !game.is_game_over() {
        if settings.max_ticks > 0 && tick_index >= settings.max_ticks {
            log::info!("Stopping after {tick_index} ticks");
            for line in game.summary() {
                println!("{line}");
            }
            break;
        }

        if let Some(command) = choose_command(game.state()) {
            game.handle_input(command.key(), &mut console);
        }
        tick_index += 1;
        game.on_tick(tick_index, &mut console)?;

        if !tick_interval.is_zero() {
            thread::sleep(tick_interval);
        }
    }

    Ok(())
}
