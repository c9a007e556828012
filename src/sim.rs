//! AI self-play against a random opponent.

use crate::core::{GameEngine, GameStatus, Mark};
use crate::player::{play_round, AiPlayer, Player, RandomPlayer};

/// Tally of simulated rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SimSummary {
    pub games: usize,
    pub ai_wins: usize,
    pub random_wins: usize,
    pub draws: usize,
}

/// Play `games` rounds of a seeded [`RandomPlayer`] (X) against an
/// [`AiPlayer`] (O). The random side starts even-numbered rounds and the AI
/// starts odd-numbered ones.
pub fn simulate(seed: u64, games: usize) -> anyhow::Result<SimSummary> {
    let mut random = RandomPlayer::with_seed(Mark::X, seed);
    let mut ai = AiPlayer::new(Mark::O);
    let mut summary = SimSummary::default();

    for game in 0..games {
        let first = if game % 2 == 0 { random.mark() } else { ai.mark() };
        let mut engine = GameEngine::new(first);
        let status = play_round(&mut engine, &mut random, &mut ai)?;
        summary.games += 1;
        match status {
            GameStatus::Won(m) if m == ai.mark() => summary.ai_wins += 1,
            GameStatus::Won(_) => summary.random_wins += 1,
            GameStatus::Draw => summary.draws += 1,
            GameStatus::InProgress => return Err(anyhow::anyhow!("round ended unfinished")),
        }
    }
    log::info!("simulated {} games: {:?}", games, summary);
    Ok(summary)
}
