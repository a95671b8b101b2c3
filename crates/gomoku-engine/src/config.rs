//! Engine configuration.

use std::fmt;
use std::str::FromStr;

use gomoku_core::{DEFAULT_RADIUS, MAX_BOARD_SIZE};

use crate::error::ConfigError;
use crate::eval::WIN_SCORE;
use crate::eval::pattern::Shape;
use crate::eval::weights::Weights;

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 3;

/// Default share of opponent pattern scores counted against the evaluated side.
pub const DEFAULT_DEFENSE_PERCENT: u8 = 80;

/// How the engine picks a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Fixed-depth alpha-beta minimax.
    #[default]
    Minimax,
    /// Win if possible, otherwise block an immediate loss, otherwise a
    /// random empty cell.
    Tactical,
    /// Any empty cell, chosen uniformly.
    Random,
}

impl Strategy {
    /// Lower-case name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Minimax => "minimax",
            Strategy::Tactical => "tactical",
            Strategy::Random => "random",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Strategy, ConfigError> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Strategy::Minimax),
            "tactical" => Ok(Strategy::Tactical),
            "random" => Ok(Strategy::Random),
            _ => Err(ConfigError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}

/// Evaluator knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Score per recognized shape.
    pub weights: Weights,
    /// Percentage of opponent pattern scores subtracted from own scores.
    pub defense_percent: u8,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            defense_percent: DEFAULT_DEFENSE_PERCENT,
        }
    }
}

/// Everything a [`Searcher`](crate::Searcher) needs to know, passed in
/// explicitly at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Evaluator settings.
    pub eval: EvalConfig,
    /// Chebyshev radius for candidate generation.
    pub radius: u8,
    /// Depth used when a request does not name one.
    pub depth: u8,
    /// Move selection strategy.
    pub strategy: Strategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            eval: EvalConfig::default(),
            radius: DEFAULT_RADIUS,
            depth: DEFAULT_DEPTH,
            strategy: Strategy::default(),
        }
    }
}

impl EngineConfig {
    /// Check that the configuration keeps the search sound.
    ///
    /// The defense weight must stay below 100%, shape weights must not grow
    /// from stronger to weaker shapes, and no board of the largest size may
    /// accumulate a positional score that reaches [`WIN_SCORE`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.eval.defense_percent >= 100 {
            return Err(ConfigError::DefenseWeightTooHigh {
                percent: self.eval.defense_percent,
            });
        }
        if self.radius == 0 {
            return Err(ConfigError::ZeroRadius);
        }
        if self.depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if let Some((stronger, weaker)) = self.eval.weights.first_inversion() {
            return Err(ConfigError::UnorderedWeights {
                stronger: stronger.name(),
                weaker: weaker.name(),
            });
        }

        // One pattern per stone and direction; each scores at most a five.
        let five = self.eval.weights.score(Shape::Five);
        let ceiling = (MAX_BOARD_SIZE * MAX_BOARD_SIZE * 4) as i64 * five as i64;
        if ceiling >= WIN_SCORE as i64 {
            return Err(ConfigError::WeightsExceedWinScore { five });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{EngineConfig, EvalConfig, Strategy};
    use crate::error::ConfigError;
    use crate::eval::pattern::Shape;

    #[test]
    fn default_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.depth, 3);
        assert_eq!(config.radius, 2);
        assert_eq!(config.eval.defense_percent, 80);
        assert_eq!(config.strategy, Strategy::Minimax);
    }

    #[test]
    fn rejects_full_defense() {
        let config = EngineConfig {
            eval: EvalConfig {
                defense_percent: 100,
                ..EvalConfig::default()
            },
            ..EngineConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DefenseWeightTooHigh { percent: 100 })
        );
    }

    #[test]
    fn rejects_zero_radius_and_depth() {
        let config = EngineConfig {
            radius: 0,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroRadius));

        let config = EngineConfig {
            depth: 0,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroDepth));
    }

    #[test]
    fn rejects_unordered_weights() {
        let mut config = EngineConfig::default();
        config.eval.weights.set(Shape::Three, 5_000);
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnorderedWeights {
                stronger: "open three",
                weaker: "three",
            })
        );
    }

    #[test]
    fn rejects_five_weight_near_win_score() {
        let mut config = EngineConfig::default();
        config.eval.weights.set(Shape::Five, 250_000);
        assert_eq!(
            config.validate(),
            Err(ConfigError::WeightsExceedWinScore { five: 250_000 })
        );

        config.eval.weights.set(Shape::Five, 200_000);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn strategy_from_str() {
        assert_eq!("minimax".parse::<Strategy>(), Ok(Strategy::Minimax));
        assert_eq!("Tactical".parse::<Strategy>(), Ok(Strategy::Tactical));
        assert_eq!("RANDOM".parse::<Strategy>(), Ok(Strategy::Random));
        assert_eq!(
            "greedy".parse::<Strategy>(),
            Err(ConfigError::UnknownStrategy {
                name: "greedy".to_string()
            })
        );
        assert_eq!(Strategy::Tactical.to_string(), "tactical");
        assert_eq!(Strategy::Random.to_string(), "random");
    }
}
