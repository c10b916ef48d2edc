//! Balls Game headless entry point
//!
//! Runs a scripted match through the fixed-step game loop and prints the
//! final score. Usage: `balls-game [settings.json] [seed]`

use glam::Vec3;

use balls_game::Settings;
use balls_game::consts::*;
use balls_game::sim::{GamePhase, GameState, TickInput, tick};

/// Simulated frame time of the host loop (deliberately not a multiple of SIM_DT)
const FRAME_DT: f32 = 1.0 / 45.0;
/// Give up after this many frames
const MAX_FRAMES: u32 = 45 * 120;

/// Game loop driver holding all state
struct Game {
    state: GameState,
    accumulator: f32,
    input: TickInput,
    frame: u32,
}

impl Game {
    fn new(settings: Settings, seed: u64) -> Self {
        Self {
            state: GameState::new(settings, seed),
            accumulator: 0.0,
            input: TickInput::default(),
            frame: 0,
        }
    }

    /// Scripted players: both fire every second, player one nudges the
    /// primary ball toward the right wall
    fn script_input(&mut self) {
        let t = self.frame as f32 * FRAME_DT;
        if self.frame == 0 {
            self.input.start = true;
        }
        if self.frame % 45 == 10 {
            let aim_y = (t * 1.7).sin() * 0.6;
            self.input.player1_shot = Some(Vec3::new(1.0, aim_y, 0.0));
            self.input.player2_shot = Some(Vec3::new(-1.0, -aim_y, 0.0));
        }
        self.input.push = Vec3::new(0.8, (t * 0.9).cos() * 0.5, 0.0);
    }

    /// Run simulation ticks for one frame
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let report = tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            if report.collisions > 0 || report.despawned > 0 {
                log::debug!(
                    "tick {}: {} collisions, {} despawned, {} balls, {} particles",
                    self.state.time_ticks,
                    report.collisions,
                    report.despawned,
                    self.state.manager.balls().len(),
                    self.state.manager.active_particles().count()
                );
            }

            // Clear one-shot inputs after processing
            self.input.start = false;
            self.input.pause = false;
            self.input.player1_shot = None;
            self.input.player2_shot = None;
        }
        self.frame += 1;
    }
}

fn main() {
    env_logger::init();
    log::info!("Balls Game (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let mut game = Game::new(settings, seed);
    while game.frame < MAX_FRAMES && game.state.phase != GamePhase::MatchOver {
        game.script_input();
        game.update(FRAME_DT);
    }

    let m = &game.state.match_state;
    log::info!(
        "Finished after {} ticks in phase {:?}",
        game.state.time_ticks,
        game.state.phase
    );
    match serde_json::to_string_pretty(m) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize match state: {}", e),
    }
}
