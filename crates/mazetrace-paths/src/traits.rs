use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use mazetrace_core::Point;

/// Graph provider interface: enumerates the neighbors of a node.
///
/// The search engine borrows a `Pather` read-only for the duration of one
/// search. Answers must be deterministic within that search and every
/// neighbor set must be finite. Nodes the provider never mentions are not an
/// error; they simply have no neighbors.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

impl<P: Pather + ?Sized> Pather for &P {
    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        (**self).neighbors(p, buf);
    }
}

/// Adjacency-list graph. Neighbors are reported in list order.
impl<S: BuildHasher> Pather for HashMap<Point, Vec<Point>, S> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        if let Some(ns) = self.get(&p) {
            buf.extend_from_slice(ns);
        }
    }
}

impl Pather for BTreeMap<Point, Vec<Point>> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        if let Some(ns) = self.get(&p) {
            buf.extend_from_slice(ns);
        }
    }
}

/// Adapter turning a closure into a [`Pather`].
///
/// ```
/// use mazetrace_core::{Point, Range};
/// use mazetrace_paths::{FnPather, dijkstra};
///
/// let bounds = Range::sized(4, 4);
/// let open = FnPather(|p: Point, buf: &mut Vec<Point>| {
///     buf.extend(p.neighbors_4().into_iter().filter(|&n| bounds.contains(n)));
/// });
/// assert_eq!(dijkstra(&open, Point::new(0, 0), Point::new(3, 3)).path.len(), 7);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnPather<F>(pub F);

impl<F: Fn(Point, &mut Vec<Point>)> Pather for FnPather<F> {
    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        (self.0)(p, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_maps_report_list_order() {
        let a = Point::new(0, 0);
        let b = Point::new(1, 0);
        let c = Point::new(0, 1);

        let hashed: HashMap<Point, Vec<Point>> = HashMap::from([(a, vec![c, b])]);
        let mut buf = Vec::new();
        hashed.neighbors(a, &mut buf);
        assert_eq!(buf, vec![c, b]);

        let ordered: BTreeMap<Point, Vec<Point>> = BTreeMap::from([(a, vec![b, c])]);
        buf.clear();
        ordered.neighbors(a, &mut buf);
        assert_eq!(buf, vec![b, c]);
    }

    #[test]
    fn unknown_node_has_no_neighbors() {
        let graph: HashMap<Point, Vec<Point>> = HashMap::new();
        let mut buf = Vec::new();
        graph.neighbors(Point::new(7, 7), &mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn references_forward_to_the_provider() {
        let p = FnPather(|p: Point, buf: &mut Vec<Point>| buf.push(p.shift(1, 0)));
        let by_ref = &p;
        let mut buf = Vec::new();
        by_ref.neighbors(Point::new(2, 2), &mut buf);
        assert_eq!(buf, vec![Point::new(3, 2)]);
    }
}
