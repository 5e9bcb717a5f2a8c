use std::collections::HashSet;

use mazetrace_core::Point;

/// Outcome of a finished search.
///
/// `path` runs from start to goal inclusive and is empty when the goal is
/// unreachable. `visited` holds every node that was finalized (popped and
/// expanded) before the search stopped; the goal itself is never expanded,
/// so it is not part of this set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub path: Vec<Point>,
    pub visited: HashSet<Point>,
}

impl SearchResult {
    /// Whether a path to the goal was found.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the path, or `None` when no path exists.
    #[inline]
    pub fn steps(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

/// One item of a stepwise search's output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Observation {
    /// A node was finalized and its neighbors expanded.
    Visit(Point),
    /// The search ended. Empty if the goal is unreachable.
    Path(Vec<Point>),
}

impl Observation {
    /// Whether this is the final observation of its search.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Path(_))
    }

    /// The visited node, for [`Observation::Visit`].
    #[inline]
    pub fn node(&self) -> Option<Point> {
        match self {
            Self::Visit(p) => Some(*p),
            Self::Path(_) => None,
        }
    }
}

/// A consumed observation stream: visit order plus the final path.
///
/// This is what a presentation layer would accumulate while animating a
/// stepwise search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTrace {
    pub order: Vec<Point>,
    pub path: Vec<Point>,
}

impl SearchTrace {
    /// Drain `observations` up to and including the first path.
    ///
    /// A stream that stops without a path leaves `path` empty.
    pub fn collect<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = Observation>,
    {
        let mut trace = Self::default();
        for obs in observations {
            match obs {
                Observation::Visit(p) => trace.order.push(p),
                Observation::Path(path) => {
                    trace.path = path;
                    break;
                }
            }
        }
        trace
    }

    /// The run-to-completion result equivalent to this trace.
    pub fn into_result(self) -> SearchResult {
        SearchResult {
            visited: self.order.into_iter().collect(),
            path: self.path,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn observation_round_trip() {
        let obs = Observation::Path(vec![Point::new(0, 0), Point::new(0, 1)]);
        let json = serde_json::to_string(&obs).unwrap();
        let back: Observation = serde_json::from_str(&json).unwrap();
        assert_eq!(obs, back);
    }

    #[test]
    fn result_round_trip() {
        let result = SearchResult {
            path: vec![Point::new(0, 0)],
            visited: HashSet::from([Point::new(0, 0), Point::new(1, 0)]),
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
