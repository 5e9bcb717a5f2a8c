use std::collections::HashMap;
use std::hash::BuildHasher;

use mazetrace_core::Point;

/// Rebuild the path from the search start to `goal` out of predecessor links.
///
/// `predecessors` maps each reached node to the node it was reached from,
/// with the start mapped to `None`. Returns the path with both endpoints
/// included, or an empty path if `goal` was never reached.
pub fn reconstruct<S: BuildHasher>(
    predecessors: &HashMap<Point, Option<Point>, S>,
    goal: Point,
) -> Vec<Point> {
    if !predecessors.contains_key(&goal) {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut cur = Some(goal);
    while let Some(p) = cur {
        // A well-formed table is a tree, so no chain is longer than the table.
        if path.len() > predecessors.len() {
            log::warn!("predecessor chain from {goal} does not terminate");
            return Vec::new();
        }
        path.push(p);
        cur = predecessors.get(&p).copied().flatten();
    }
    path.reverse();
    path
}
