pub mod chart;
pub mod counter;
pub mod coverage;
pub mod edges;
pub mod grammar;
pub mod graph;
pub mod oracle;
pub mod report;
pub mod sdp;

pub use chart::IntervalChart;
pub use counter::{category_totals, count_derivations, count_sequence};
pub use coverage::{coverage, coverage_with};
pub use grammar::{Category, CategoryTotals, Charts, Score};
pub use graph::{Edge, Graph, GraphError};
pub use oracle::Admissibility;
pub use report::CoverageReport;
pub use sdp::{SdpError, SdpReader};
