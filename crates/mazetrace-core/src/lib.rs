//! **mazetrace-core**: geometry primitives for grid-shaped graphs.
//!
//! Every node the search engine handles is a [`Point`]; grid-backed graph
//! providers describe their extent with a [`Range`].

pub mod geom;

pub use geom::{Point, Range, RangeIter};
