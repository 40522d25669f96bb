use log::debug;

use crate::grammar::Charts;
use crate::graph::Graph;
use crate::oracle::Admissibility;

/// Largest number of `graph`'s edges realized together by one noncrossing
/// acyclic digraph on the same points.
pub fn coverage(graph: &Graph) -> u32 {
    let covered = coverage_with(&Admissibility::new(graph));
    debug!(
        "graph {}: {} of {} edges covered",
        graph.id(),
        covered,
        graph.num_edges()
    );
    covered
}

/// Same as [`coverage`], for a graph already indexed into an oracle.
pub fn coverage_with(oracle: &Admissibility) -> u32 {
    // No arcs fit on fewer than two points.
    if oracle.num_nodes() < 2 {
        return 0;
    }
    Charts::<u32>::fill(oracle.num_nodes(), |s, t| oracle.is_admissible(s, t))
        .totals()
        .total()
}
