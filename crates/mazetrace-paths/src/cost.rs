use mazetrace_core::Point;

/// Cost of traversing any single edge.
pub const STEP_COST: i32 = 1;

/// Manhattan (L1) distance between two points.
///
/// Admissible and consistent for a 4-connected grid with [`STEP_COST`]
/// edges, so heuristic-guided search stays optimal with it. Distances too
/// large for an `i32` saturate at `i32::MAX`.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    let d = a.x.abs_diff(b.x).saturating_add(a.y.abs_diff(b.y));
    i32::try_from(d).unwrap_or(i32::MAX)
}
