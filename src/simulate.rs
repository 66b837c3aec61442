//! Random-agent rollouts over a batch of games.

use crate::alphabet::Code;
use crate::batch::VecWordle;
use crate::game::{GameError, Outcome};
use crate::info_log;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Aggregate statistics over finished episodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationReport {
    pub episodes: usize,
    pub wins: usize,
    pub total_reward: f64,
    pub total_guesses: usize,
}

impl SimulationReport {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn win_rate(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.wins as f64 / self.episodes as f64
        }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_reward(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.total_reward / self.episodes as f64
        }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_guesses(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.episodes as f64
        }
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Episodes:      {}", self.episodes)?;
        writeln!(f, "Wins:          {} ({:.1}%)", self.wins, self.win_rate() * 100.0)?;
        writeln!(f, "Mean reward:   {:.3}", self.mean_reward())?;
        write!(f, "Mean guesses:  {:.2}", self.mean_guesses())
    }
}

/// Plays every slot with uniformly random vocabulary guesses until at least
/// `episodes` episodes have finished across the batch.
pub fn run_random_agent(
    batch: &mut VecWordle,
    episodes: usize,
    seed: u64,
) -> Result<SimulationReport, GameError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut report = SimulationReport::default();
    let mut episode_rewards = vec![0.0f64; batch.len()];

    batch.reset_all();
    while report.episodes < episodes {
        let guesses: Vec<Vec<Code>> = batch
            .games()
            .iter()
            .map(|game| {
                let vocabulary = game.vocabulary();
                let index = rng.gen_range(0..vocabulary.len());
                vocabulary.get(index).unwrap_or_default().to_vec()
            })
            .collect();

        let steps = batch.step(&guesses)?;
        for (slot, step) in steps.iter().enumerate() {
            episode_rewards[slot] += f64::from(step.reward);
            if !step.done {
                continue;
            }
            report.episodes += 1;
            report.total_guesses += step.info.turn + 1;
            report.total_reward += episode_rewards[slot];
            episode_rewards[slot] = 0.0;
            if step.info.outcome == Some(Outcome::Won) {
                report.wins += 1;
            }
        }
    }
    info_log!("run_random_agent() - {:?}", report);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use crate::game::GameConfig;
    use crate::vocabulary::Vocabulary;
    use std::sync::Arc;

    #[test]
    fn test_single_word_vocabulary_always_wins_first_try() {
        let vocabulary = Arc::new(Vocabulary::from_words(&["crane"], &Alphabet::english(), 5).unwrap());
        let mut batch = VecWordle::new(vocabulary, GameConfig::default(), 4, 0).unwrap();
        let report = run_random_agent(&mut batch, 10, 1).unwrap();

        // Each step finishes one episode per slot.
        assert_eq!(report.episodes, 12);
        assert_eq!(report.wins, 12);
        assert!((report.win_rate() - 1.0).abs() < f64::EPSILON);
        assert!((report.mean_reward() - 10.0).abs() < 1e-9);
        assert!((report.mean_guesses() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_report_is_reproducible() {
        let vocabulary = Arc::new(
            Vocabulary::from_words(&["sword", "crane", "plate"], &Alphabet::english(), 5).unwrap(),
        );
        let mut a = VecWordle::new(Arc::clone(&vocabulary), GameConfig::default(), 3, 5).unwrap();
        let mut b = VecWordle::new(vocabulary, GameConfig::default(), 3, 5).unwrap();
        assert_eq!(
            run_random_agent(&mut a, 30, 9).unwrap(),
            run_random_agent(&mut b, 30, 9).unwrap()
        );
    }

    #[test]
    fn test_empty_report() {
        let report = SimulationReport::default();
        assert_eq!(report.win_rate(), 0.0);
        assert!(report.to_string().contains("Episodes:      0"));
    }
}
