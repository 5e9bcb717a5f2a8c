use std::fmt;

use mazetrace_core::Point;

use crate::cost::manhattan;

/// Frontier priority rule used by a [`Search`](crate::Search).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Dijkstra: priority is the cumulative cost from the start.
    #[default]
    UniformCost,
    /// A*: priority is cumulative cost plus the Manhattan estimate to the goal.
    Heuristic,
}

impl Strategy {
    /// Frontier key for `node` reached at cumulative `cost`. Saturates at
    /// `i32::MAX`.
    #[inline]
    pub fn priority(self, cost: i32, node: Point, goal: Point) -> i32 {
        match self {
            Self::UniformCost => cost,
            Self::Heuristic => cost.saturating_add(manhattan(node, goal)),
        }
    }

    /// Short human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::UniformCost => "dijkstra",
            Self::Heuristic => "astar",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for creating a [`Search`](crate::Search).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub strategy: Strategy,
}

impl SearchConfig {
    /// Create a configuration using `strategy`.
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// Replace the strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn strategy_uses_snake_case() {
        let json = serde_json::to_string(&Strategy::UniformCost).unwrap();
        assert_eq!(json, "\"uniform_cost\"");
        let back: Strategy = serde_json::from_str("\"heuristic\"").unwrap();
        assert_eq!(back, Strategy::Heuristic);
    }

    #[test]
    fn config_fills_missing_fields() {
        let cfg: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SearchConfig::default());
        let cfg: SearchConfig = serde_json::from_str(r#"{"strategy":"heuristic"}"#).unwrap();
        assert_eq!(cfg.strategy, Strategy::Heuristic);
    }
}
