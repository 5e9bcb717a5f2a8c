use std::collections::{HashMap, HashSet};
use std::iter::FusedIterator;

use mazetrace_core::Point;

use crate::config::{SearchConfig, Strategy};
use crate::cost::STEP_COST;
use crate::frontier::Frontier;
use crate::path::reconstruct;
use crate::result::{Observation, SearchResult};
use crate::traits::Pather;

/// Run a search to completion with the given strategy.
pub fn search<P: Pather + ?Sized>(
    pather: &P,
    start: Point,
    goal: Point,
    strategy: Strategy,
) -> SearchResult {
    Search::new(pather, start, goal, strategy).run()
}

/// A resumable best-first search from `start` to `goal`.
///
/// Each call to [`advance`](Self::advance) pops one node off the frontier.
/// A node that is not the goal is finalized, its neighbors are relaxed, and
/// it is reported as [`Observation::Visit`]. Popping the goal, or running
/// out of frontier, ends the search with a single [`Observation::Path`];
/// after that every call returns `None`.
///
/// Frontier copies of nodes that are already finalized are dropped without
/// producing an observation, for both strategies.
///
/// `Search` is also an [`Iterator`] over its observations. It owns its
/// frontier and cost tables and only borrows the graph, so abandoning it at
/// any point is free.
pub struct Search<'a, P: ?Sized> {
    pather: &'a P,
    start: Point,
    goal: Point,
    strategy: Strategy,
    frontier: Frontier,
    costs: HashMap<Point, i32>,
    predecessors: HashMap<Point, Option<Point>>,
    visited: HashSet<Point>,
    path: Vec<Point>,
    nbuf: Vec<Point>,
    done: bool,
}

impl<'a, P: Pather + ?Sized> Search<'a, P> {
    /// Start a search. No node is expanded until the first `advance`.
    pub fn new(pather: &'a P, start: Point, goal: Point, strategy: Strategy) -> Self {
        let mut frontier = Frontier::new();
        frontier.push(strategy.priority(0, start, goal), start);
        log::debug!("{strategy} search from {start} to {goal}");
        Self {
            pather,
            start,
            goal,
            strategy,
            frontier,
            costs: HashMap::from([(start, 0)]),
            predecessors: HashMap::from([(start, None)]),
            visited: HashSet::new(),
            path: Vec::new(),
            nbuf: Vec::with_capacity(8),
            done: false,
        }
    }

    /// Start a search configured by `config`.
    pub fn with_config(pather: &'a P, start: Point, goal: Point, config: SearchConfig) -> Self {
        Self::new(pather, start, goal, config.strategy)
    }

    /// Perform one pop-and-expand cycle and report what happened.
    pub fn advance(&mut self) -> Option<Observation> {
        if self.done {
            return None;
        }

        while let Some(entry) = self.frontier.pop() {
            let current = entry.node;
            if self.visited.contains(&current) {
                continue;
            }

            if current == self.goal {
                self.path = reconstruct(&self.predecessors, current);
                self.finish();
                return Some(Observation::Path(self.path.clone()));
            }

            self.visited.insert(current);
            self.expand(current);
            return Some(Observation::Visit(current));
        }

        self.finish();
        Some(Observation::Path(Vec::new()))
    }

    /// Drive the search to the end and return its result.
    ///
    /// Observations already pulled are accounted for; calling this on a
    /// finished search just packages the outcome.
    pub fn run(mut self) -> SearchResult {
        while self.advance().is_some() {}
        SearchResult {
            path: self.path,
            visited: self.visited,
        }
    }

    fn expand(&mut self, current: Point) {
        let Some(&current_cost) = self.costs.get(&current) else {
            return;
        };

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.pather.neighbors(current, &mut nbuf);
        log::trace!("expand {current} (cost {current_cost}): {} neighbors", nbuf.len());

        let tentative = current_cost.saturating_add(STEP_COST);
        for &np in nbuf.iter() {
            if self.costs.get(&np).is_some_and(|&known| tentative >= known) {
                continue;
            }
            self.costs.insert(np, tentative);
            self.predecessors.insert(np, Some(current));
            self.frontier
                .push(self.strategy.priority(tentative, np, self.goal), np);
        }

        self.nbuf = nbuf;
    }

    fn finish(&mut self) {
        self.done = true;
        if self.path.is_empty() {
            log::debug!(
                "{} search: {} unreachable from {} after expanding {} nodes",
                self.strategy,
                self.goal,
                self.start,
                self.visited.len()
            );
        } else {
            log::debug!(
                "{} search: path of {} nodes to {} after expanding {} nodes",
                self.strategy,
                self.path.len(),
                self.goal,
                self.visited.len()
            );
        }
    }

    /// Whether the final observation has been produced.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Number of nodes finalized so far.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.visited.len()
    }

    /// Number of entries currently in the frontier, stale ones included.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Best known cost from the start to `p`, if `p` has been reached.
    #[inline]
    pub fn cost(&self, p: Point) -> Option<i32> {
        self.costs.get(&p).copied()
    }

    /// Nodes finalized so far.
    #[inline]
    pub fn visited(&self) -> &HashSet<Point> {
        &self.visited
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }
}

impl<P: Pather + ?Sized> Iterator for Search<'_, P> {
    type Item = Observation;

    fn next(&mut self) -> Option<Observation> {
        self.advance()
    }
}

impl<P: Pather + ?Sized> FusedIterator for Search<'_, P> {}
