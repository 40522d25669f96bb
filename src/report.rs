use std::fmt;

use crate::graph::Graph;

/// Running totals over a corpus of graphs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CoverageReport {
    pub num_edges: u64,
    pub num_edges_covered: u64,
    pub num_graphs: u64,
    pub num_graphs_covered: u64,
}

impl CoverageReport {
    pub fn for_graph(graph: &Graph, covered: u32) -> CoverageReport {
        let num_edges = graph.num_edges() as u64;
        let covered = covered as u64;
        CoverageReport {
            num_edges,
            num_edges_covered: covered,
            num_graphs: 1,
            num_graphs_covered: (covered == num_edges) as u64,
        }
    }

    pub fn merge(self, other: CoverageReport) -> CoverageReport {
        CoverageReport {
            num_edges: self.num_edges + other.num_edges,
            num_edges_covered: self.num_edges_covered + other.num_edges_covered,
            num_graphs: self.num_graphs + other.num_graphs,
            num_graphs_covered: self.num_graphs_covered + other.num_graphs_covered,
        }
    }

    pub fn edge_recall(&self) -> Option<f64> {
        ratio(self.num_edges_covered, self.num_edges)
    }

    pub fn graph_recall(&self) -> Option<f64> {
        ratio(self.num_graphs_covered, self.num_graphs)
    }
}

fn ratio(part: u64, whole: u64) -> Option<f64> {
    if whole == 0 {
        None
    } else {
        Some(part as f64 / whole as f64)
    }
}

/// Formats a ratio as a US-style percentage with two fraction digits, e.g. `87.50%`.
pub fn format_percent(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{:.2}%", 100.0 * r),
        None => "n/a".to_string(),
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Upper bound on recall (edges): {}",
            format_percent(self.edge_recall())
        )?;
        write!(
            f,
            "Upper bound on recall (complete graphs): {}",
            format_percent(self.graph_recall())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(1.0)), "100.00%");
        assert_eq!(format_percent(Some(0.875)), "87.50%");
        assert_eq!(format_percent(Some(2.0 / 3.0)), "66.67%");
        assert_eq!(format_percent(Some(0.0)), "0.00%");
        assert_eq!(format_percent(None), "n/a");
    }

    #[test]
    fn test_merge_reports() {
        let g1 = Graph::from_pairs("1", 3, &[(0, 1), (1, 2)]).unwrap();
        let g2 = Graph::from_pairs("2", 4, &[(0, 2), (1, 3)]).unwrap();
        let report = CoverageReport::for_graph(&g1, 2).merge(CoverageReport::for_graph(&g2, 1));
        assert_eq!(
            report,
            CoverageReport {
                num_edges: 4,
                num_edges_covered: 3,
                num_graphs: 2,
                num_graphs_covered: 1,
            }
        );
        assert_eq!(
            report.to_string(),
            "Upper bound on recall (edges): 75.00%\nUpper bound on recall (complete graphs): 50.00%"
        );
    }

    #[test]
    fn test_empty_report() {
        let report = CoverageReport::default();
        assert_eq!(report.edge_recall(), None);
        assert_eq!(report.graph_recall(), None);
    }
}
