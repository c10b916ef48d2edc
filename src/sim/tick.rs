//! Session tick
//!
//! Drives one simulation step: phase handling, player input, then a single
//! `BallManager::update`.

use glam::Vec3;

use super::manager::TickReport;
use super::state::{GamePhase, GameState, Player};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Leave the menu / start a new match
    pub start: bool,
    /// Pause toggle
    pub pause: bool,
    /// Force applied to the primary ball this tick
    pub push: Vec3,
    /// Aim of a shot fired by player one this tick
    pub player1_shot: Option<Vec3>,
    /// Aim of a shot fired by player two this tick
    pub player2_shot: Option<Vec3>,
}

/// Advance the session by one timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> TickReport {
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                log::info!("Paused");
                return TickReport::default();
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                log::info!("Resumed");
            }
            _ => {}
        }
    }

    match state.phase {
        GamePhase::Menu | GamePhase::MatchOver => {
            if input.start {
                if state.phase == GamePhase::MatchOver {
                    *state = GameState::new(state.settings.clone(), state.seed);
                }
                state.phase = GamePhase::Playing;
                log::info!("Match started (seed {})", state.seed);
            }
            return TickReport::default();
        }
        GamePhase::Paused => return TickReport::default(),
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    for cooldown in &mut state.shot_cooldowns {
        *cooldown = (*cooldown - dt).max(0.0);
    }

    let shots = [
        (Player::One, input.player1_shot),
        (Player::Two, input.player2_shot),
    ];
    for (slot, (player, aim)) in shots.into_iter().enumerate() {
        let Some(aim) = aim else { continue };
        if state.shot_cooldowns[slot] <= 0.0 {
            state.spawn_shot(player, aim);
            state.shot_cooldowns[slot] = state.settings.shot_cooldown;
        }
    }

    if input.push != Vec3::ZERO {
        state.manager.apply_force_to_primary(input.push);
    }

    let report = state.manager.update(dt, &mut state.match_state);

    if report.scored {
        let m = &state.match_state;
        log::info!("Goal! {} - {}", m.player1_score, m.player2_score);

        if let Some(winner) = m.winner(state.settings.goals_to_win) {
            log::info!("{:?} wins the match", winner);
            state.phase = GamePhase::MatchOver;
        }
    }

    report
}
