//! Incremental shortest-path search over grid-shaped graphs.
//!
//! Two strategies share a single frontier-expansion engine:
//!
//! - **Uniform-cost** (Dijkstra) search: [`dijkstra`], [`dijkstra_steps`]
//! - **Heuristic-guided** (A\*) search with a Manhattan estimate: [`astar`],
//!   [`astar_steps`]
//!
//! Each strategy runs either to completion, returning a [`SearchResult`], or
//! stepwise through a [`Search`], which yields one [`Observation`] per
//! finalized node and ends with the path. A stepwise search holds no
//! external resources; dropping it part-way simply discards its state.
//!
//! Graphs are supplied through the [`Pather`] trait. Every edge costs
//! [`STEP_COST`]; neighbor sets must be finite or the search never ends.
//!
//! ```
//! use std::collections::HashMap;
//! use mazetrace_core::Point;
//! use mazetrace_paths::{astar, Observation, Strategy, Search};
//!
//! let a = Point::new(0, 0);
//! let b = Point::new(1, 0);
//! let c = Point::new(2, 0);
//! let graph = HashMap::from([(a, vec![b]), (b, vec![a, c]), (c, vec![b])]);
//!
//! assert_eq!(astar(&graph, a, c).path, vec![a, b, c]);
//!
//! let steps: Vec<_> = Search::new(&graph, a, c, Strategy::UniformCost).collect();
//! assert_eq!(steps.last(), Some(&Observation::Path(vec![a, b, c])));
//! ```

mod astar;
mod config;
mod cost;
mod dijkstra;
mod frontier;
mod path;
mod result;
mod search;
mod traits;

pub use astar::{astar, astar_steps};
pub use config::{SearchConfig, Strategy};
pub use cost::{STEP_COST, manhattan};
pub use dijkstra::{dijkstra, dijkstra_steps};
pub use path::reconstruct;
pub use result::{Observation, SearchResult, SearchTrace};
pub use search::{Search, search};
pub use traits::{FnPather, Pather};
