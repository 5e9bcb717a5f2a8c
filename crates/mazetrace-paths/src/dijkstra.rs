use mazetrace_core::Point;

use crate::config::Strategy;
use crate::result::SearchResult;
use crate::search::Search;
use crate::traits::Pather;

/// Compute the shortest path from `from` to `to` with uniform-cost search.
///
/// Nodes leave the frontier in order of cost from `from`, so with unit edges
/// the expansion proceeds in rings of equal distance.
pub fn dijkstra<P: Pather + ?Sized>(pather: &P, from: Point, to: Point) -> SearchResult {
    dijkstra_steps(pather, from, to).run()
}

/// Stepwise uniform-cost search.
pub fn dijkstra_steps<P: Pather + ?Sized>(pather: &P, from: Point, to: Point) -> Search<'_, P> {
    Search::new(pather, from, to, Strategy::UniformCost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FnPather, Observation, manhattan};
    use mazetrace_core::Range;

    #[test]
    fn expands_in_distance_order() {
        let bounds = Range::sized(7, 7);
        let grid = FnPather(move |p: Point, buf: &mut Vec<Point>| {
            buf.extend(p.neighbors_4().into_iter().filter(|&n| bounds.contains(n)));
        });
        let start = Point::new(3, 3);
        let order: Vec<Point> = dijkstra_steps(&grid, start, Point::new(6, 6))
            .filter_map(|o| o.node())
            .collect();
        assert_eq!(order[0], start);
        for w in order.windows(2) {
            assert!(manhattan(start, w[0]) <= manhattan(start, w[1]));
        }
    }

    #[test]
    fn unreachable_explores_whole_component() {
        let a = Point::new(0, 0);
        let b = Point::new(1, 0);
        let c = Point::new(5, 5);
        let graph = std::collections::HashMap::from([(a, vec![b]), (b, vec![a]), (c, vec![])]);
        let result = dijkstra(&graph, a, c);
        assert!(!result.found());
        assert_eq!(result.visited.len(), 2);

        let last = dijkstra_steps(&graph, a, c).last();
        assert_eq!(last, Some(Observation::Path(Vec::new())));
    }
}
