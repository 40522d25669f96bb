use count_ncdags::{coverage, CoverageReport, Edge, Graph, SdpReader};

fn sample_graphs() -> Vec<Graph> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/sample.sdp");
    SdpReader::open(path)
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[test]
fn test_sample_graphs() {
    let graphs = sample_graphs();
    let ids: Vec<&str> = graphs.iter().map(|g| g.id()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
    assert_eq!(graphs[0].edges(), &[Edge::new(0, 1), Edge::new(2, 3)]);
    assert_eq!(graphs[1].edges(), &[Edge::new(0, 2), Edge::new(1, 3)]);
    assert_eq!(graphs[2].edges(), &[Edge::new(0, 1), Edge::new(1, 2)]);
}

#[test]
fn test_sample_report() {
    let report = sample_graphs()
        .iter()
        .map(|g| CoverageReport::for_graph(g, coverage(g)))
        .fold(CoverageReport::default(), CoverageReport::merge);
    assert_eq!(report.num_edges, 6);
    assert_eq!(report.num_edges_covered, 5);
    assert_eq!(report.num_graphs, 3);
    assert_eq!(report.num_graphs_covered, 2);
    assert_eq!(
        report.to_string(),
        "Upper bound on recall (edges): 83.33%\nUpper bound on recall (complete graphs): 66.67%"
    );
}

#[test]
fn test_missing_file() {
    assert!(SdpReader::open("tests/data/does-not-exist.sdp").is_err());
}
