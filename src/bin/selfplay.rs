//! Headless selfplay runner (default binary).
//!
//! Plays random legal moves against the engine until game over, one episode
//! per requested game, and prints a one-line summary for each. Useful for
//! smoke-testing the engine and for generating score distributions.

use anyhow::{anyhow, Result};

use blockfill::core::{DropOutcome, Session, SimpleRng};
use blockfill::types::{CellPos, SessionState, COLS, ROWS, TRAY_SLOTS};

#[derive(Debug, Clone, PartialEq, Eq)]
struct SelfplayConfig {
    seed: u32,
    games: u32,
}

fn parse_args(args: &[String]) -> Result<SelfplayConfig> {
    let mut seed: u32 = 1;
    let mut games: u32 = 1;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("selfplay: missing value for --seed"))?;
                seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("selfplay: invalid --seed value: {}", v))?;
            }
            "--games" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("selfplay: missing value for --games"))?;
                games = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("selfplay: invalid --games value: {}", v))?;
            }
            other => {
                return Err(anyhow!("selfplay: unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(SelfplayConfig { seed, games })
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;

    let mut session = Session::new(config.seed);
    let mut moves = SimpleRng::new(config.seed);

    let mut total: u64 = 0;
    let mut best: u32 = 0;

    for _ in 0..config.games {
        let (placements, clears, ticks) = run_episode(&mut session, &mut moves);
        let snap = session.snapshot();
        println!(
            "EP {} SCORE {} PLACEMENTS {} CLEARS {} TICKS {} SEED {}",
            snap.episode, snap.score, placements, clears, ticks, snap.seed
        );

        total += u64::from(snap.score);
        best = best.max(snap.score);
        session.on_restart_requested();
    }

    if config.games > 1 {
        println!("GAMES {} TOTAL {} BEST {}", config.games, total, best);
    }
    Ok(())
}

/// Play one episode to completion. Returns committed placements, clears, and
/// elapsed ticks.
fn run_episode(session: &mut Session, moves: &mut SimpleRng) -> (u32, u32, u32) {
    let mut placements = 0u32;
    let mut clears = 0u32;
    let mut ticks = 0u32;
    let mut last_score = session.score();

    loop {
        match session.state() {
            SessionState::GameOver => return (placements, clears, ticks),
            SessionState::Playing => {
                // Move only with the queue idle, like a player waiting out
                // the animations
                if session.head_effect().is_none()
                    && session.drag().is_none()
                    && play_random_move(session, moves)
                {
                    placements += 1;
                }
            }
            SessionState::GameOverPending => {}
        }
        session.tick();
        ticks += 1;
        // A placement that completed at least one region bumps the score
        // exactly once, on its commit tick
        if session.score() > last_score {
            clears += 1;
            last_score = session.score();
        }
    }
}

/// Drag a random usable shape to a random legal cell. Returns true if a
/// placement was queued.
fn play_random_move(session: &mut Session, moves: &mut SimpleRng) -> bool {
    let Some(slot) = pick_usable_slot(session, moves) else {
        return false;
    };
    let Some(shape) = session.tray().get(slot) else {
        return false;
    };

    let mut origins: Vec<CellPos> = Vec::new();
    for y in 0..ROWS {
        for x in 0..COLS {
            if session.board().can_place(shape, x, y) {
                origins.push((x, y));
            }
        }
    }
    if origins.is_empty() {
        return false;
    }
    let target = origins[moves.next_range(origins.len() as u32) as usize];

    if !session.on_drag_start(slot, None) {
        return false;
    }
    session.on_drag_move(Some(target));
    matches!(session.on_drag_end(Some(target)), DropOutcome::Queued)
}

fn pick_usable_slot(session: &Session, moves: &mut SimpleRng) -> Option<usize> {
    let usable: Vec<usize> = (0..TRAY_SLOTS)
        .filter(|&slot| session.tray().is_usable(slot, session.board()))
        .collect();
    if usable.is_empty() {
        return None;
    }
    Some(usable[moves.next_range(usable.len() as u32) as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args_uses_defaults() {
        let cfg = parse_args(&[]).unwrap();
        assert_eq!(cfg, SelfplayConfig { seed: 1, games: 1 });
    }

    #[test]
    fn parse_args_parses_seed_and_games() {
        let args = vec![
            "--seed".to_string(),
            "99".to_string(),
            "--games".to_string(),
            "5".to_string(),
        ];
        let cfg = parse_args(&args).unwrap();
        assert_eq!(cfg, SelfplayConfig { seed: 99, games: 5 });
    }

    #[test]
    fn parse_args_rejects_unknown_argument() {
        let args = vec!["--speed".to_string()];
        assert!(parse_args(&args).is_err());
    }

    #[test]
    fn parse_args_rejects_bad_value() {
        let args = vec!["--seed".to_string(), "abc".to_string()];
        assert!(parse_args(&args).is_err());
    }

    #[test]
    fn random_episode_terminates() {
        let mut session = Session::new(7);
        let mut moves = SimpleRng::new(7);

        let (placements, clears, ticks) = run_episode(&mut session, &mut moves);

        assert!(placements > 0);
        assert!(clears <= placements);
        assert!(ticks >= placements * 10);
        assert_eq!(session.state(), SessionState::GameOver);
        assert_eq!(session.score() > 0, clears > 0);
    }
}
