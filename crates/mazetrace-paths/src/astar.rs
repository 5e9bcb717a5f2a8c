use mazetrace_core::Point;

use crate::config::Strategy;
use crate::result::SearchResult;
use crate::search::Search;
use crate::traits::Pather;

/// Compute the shortest path from `from` to `to` using A*.
///
/// The frontier is keyed by cost so far plus the Manhattan distance to `to`.
/// Returns the full path (including both endpoints), or an empty path if
/// `to` cannot be reached, together with the set of expanded nodes.
pub fn astar<P: Pather + ?Sized>(pather: &P, from: Point, to: Point) -> SearchResult {
    astar_steps(pather, from, to).run()
}

/// Stepwise A*: one [`Observation`](crate::Observation) per expanded node,
/// then the path.
pub fn astar_steps<P: Pather + ?Sized>(pather: &P, from: Point, to: Point) -> Search<'_, P> {
    Search::new(pather, from, to, Strategy::Heuristic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FnPather;
    use mazetrace_core::Range;

    fn open(w: i32, h: i32) -> impl Pather {
        let bounds = Range::sized(w, h);
        FnPather(move |p: Point, buf: &mut Vec<Point>| {
            buf.extend(p.neighbors_4().into_iter().filter(|&n| bounds.contains(n)));
        })
    }

    #[test]
    fn straight_corridor_expands_only_the_corridor() {
        let grid = open(10, 10);
        let result = astar(&grid, Point::new(0, 4), Point::new(9, 4));
        assert_eq!(result.path.len(), 10);
        assert!(result.path.iter().all(|p| p.y == 4));
        // Every node off the corridor has a strictly larger key than the goal.
        assert_eq!(result.visited.len(), 9);
    }

    #[test]
    fn steps_use_heuristic_strategy() {
        let grid = open(3, 3);
        let s = astar_steps(&grid, Point::new(0, 0), Point::new(2, 2));
        assert_eq!(s.strategy(), Strategy::Heuristic);
        assert_eq!(s.last().map(|o| o.is_terminal()), Some(true));
    }

    #[test]
    fn detour_is_optimal() {
        // A wall at x = 2 with a single gap at the bottom row.
        let bounds = Range::sized(5, 5);
        let grid = FnPather(move |p: Point, buf: &mut Vec<Point>| {
            for n in p.neighbors_4() {
                if bounds.contains(n) && !(n.x == 2 && n.y < 4) {
                    buf.push(n);
                }
            }
        });
        let result = astar(&grid, Point::new(0, 0), Point::new(4, 0));
        // Down 4, across 4, up 4.
        assert_eq!(result.steps(), Some(12));
    }
}
