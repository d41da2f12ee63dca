//! Chrono Cleaners headless runner
//!
//! Drives the simulation with a simulated 60 Hz frame clock and the demo
//! autopilot, then prints the final session as JSON.
//!
//! Usage: `chrono-cleaners [config.json] [levels]`

use chrono_cleaners::consts::SIM_DT;
use chrono_cleaners::sim::{GamePhase, Session, SimEvent, plan_route};
use chrono_cleaners::{FrameClock, SimConfig};

/// Levels to attempt when none is given
const DEFAULT_LEVELS: u32 = 3;

fn main() {
    env_logger::init();
    log::info!("Chrono Cleaners (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimConfig::load(&path).unwrap_or_else(|e| {
            log::warn!("{e}; using default config");
            SimConfig::default()
        }),
        None => SimConfig::default(),
    };
    let levels = args
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(DEFAULT_LEVELS)
        .max(1);

    let session = run(config, levels);

    match serde_json::to_string_pretty(&session) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not serialize session: {e}"),
    }
}

/// Play up to `levels` levels, stopping at the first failure
fn run(config: SimConfig, levels: u32) -> Session {
    // Upper bound on frames per level: full clock plus slack
    let frame_budget = (config.time_limit as f32 / SIM_DT) as u64 + 600;

    let mut session = Session::new(config);
    let mut clock = FrameClock::new();
    session.start(1);

    loop {
        let mut frames = 0u64;
        while session.phase == GamePhase::Playing && frames < frame_budget {
            if !session.player.moving && session.items_remaining() > 0 {
                session.commit_path(plan_route(&session));
            }
            for event in clock.advance(&mut session, SIM_DT) {
                log_event(&event);
            }
            frames += 1;
        }

        match session.phase {
            GamePhase::LevelComplete if session.level < levels => {
                session.next_level();
            }
            phase => {
                log::info!(
                    "Run finished at level {} ({:?}), score {}, crystals {}",
                    session.level,
                    phase,
                    session.player.score,
                    session.player.crystals
                );
                return session;
            }
        }
    }
}

fn log_event(event: &SimEvent) {
    match event {
        SimEvent::ItemCollected { id, kind, points } => {
            log::debug!("picked up {:?} #{} (+{})", kind, id, points)
        }
        SimEvent::ParadoxContact { id } => log::info!("paradox #{} disrupted the timeline", id),
        SimEvent::TimeExpired => log::info!("out of time"),
        SimEvent::LevelComplete { stars, time_bonus } => {
            log::info!("era cleaned: {} stars, {}s bonus", stars, time_bonus)
        }
    }
}
