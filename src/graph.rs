use std::cmp::{max, min};
use std::fmt;

use rustc_hash::FxHashSet;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
}

impl Edge {
    pub fn new(source: usize, target: usize) -> Edge {
        Edge { source, target }
    }

    fn span(&self) -> (usize, usize) {
        (min(self.source, self.target), max(self.source, self.target))
    }

    /// Whether the two chords cross strictly inside the circle.
    pub fn crosses(&self, other: &Edge) -> bool {
        let (s1, e1) = self.span();
        let (s2, e2) = other.span();
        (s1 < s2 && s2 < e1 && e1 < e2) || (s2 < s1 && s1 < e2 && e2 < e1)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    NodeOutOfRange { edge: Edge, num_nodes: usize },
    SelfLoop(usize),
    DuplicateEdge(Edge),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::NodeOutOfRange { edge, num_nodes } => {
                write!(f, "edge {} refers to a node outside 0..{}", edge, num_nodes)
            }
            GraphError::SelfLoop(node) => write!(f, "self-loop on node {}", node),
            GraphError::DuplicateEdge(edge) => write!(f, "duplicate edge {}", edge),
        }
    }
}

impl std::error::Error for GraphError {}

/// A simple digraph on nodes `0..num_nodes`, placed in order around a circle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    id: String,
    num_nodes: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Builds a graph, rejecting edges that leave `0..num_nodes`, self-loops and multi-edges.
    pub fn new(
        id: impl Into<String>,
        num_nodes: usize,
        edges: Vec<Edge>,
    ) -> Result<Graph, GraphError> {
        let mut seen: FxHashSet<Edge> = FxHashSet::default();
        for &edge in edges.iter() {
            if edge.source >= num_nodes || edge.target >= num_nodes {
                return Err(GraphError::NodeOutOfRange { edge, num_nodes });
            }
            if edge.source == edge.target {
                return Err(GraphError::SelfLoop(edge.source));
            }
            if !seen.insert(edge) {
                return Err(GraphError::DuplicateEdge(edge));
            }
        }
        Ok(Graph {
            id: id.into(),
            num_nodes,
            edges,
        })
    }

    pub fn from_pairs(
        id: impl Into<String>,
        num_nodes: usize,
        pairs: &[(usize, usize)],
    ) -> Result<Graph, GraphError> {
        let edges = pairs.iter().map(|&(s, t)| Edge::new(s, t)).collect();
        Graph::new(id, num_nodes, edges)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The same graph seen in a mirror: node `i` becomes `n - 1 - i` and every edge is reversed.
    pub fn mirrored(&self) -> Graph {
        let n = self.num_nodes;
        Graph {
            id: self.id.clone(),
            num_nodes: n,
            edges: self
                .edges
                .iter()
                .map(|e| Edge::new(n - 1 - e.target, n - 1 - e.source))
                .collect(),
        }
    }

    pub fn is_noncrossing(&self) -> bool {
        self.edges
            .iter()
            .enumerate()
            .all(|(i, e1)| self.edges[i + 1..].iter().all(|e2| !e1.crosses(e2)))
    }

    pub fn is_acyclic(&self) -> bool {
        let mut successors: Vec<Vec<usize>> = vec![Vec::new(); self.num_nodes];
        let mut num_preds: Vec<usize> = vec![0; self.num_nodes];
        for edge in self.edges.iter() {
            successors[edge.source].push(edge.target);
            num_preds[edge.target] += 1;
        }

        let mut no_preds: Vec<usize> = (0..self.num_nodes).filter(|&v| num_preds[v] == 0).collect();
        let mut visited = 0;
        while let Some(v) = no_preds.pop() {
            visited += 1;
            for &w in successors[v].iter() {
                num_preds[w] -= 1;
                if num_preds[w] == 0 {
                    no_preds.push(w);
                }
            }
        }
        visited == self.num_nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_rejects_out_of_range() {
        let res = Graph::from_pairs("g", 3, &[(0, 1), (1, 3)]);
        assert_eq!(
            res,
            Err(GraphError::NodeOutOfRange {
                edge: Edge::new(1, 3),
                num_nodes: 3
            })
        );
    }

    #[test]
    fn test_rejects_self_loop() {
        let res = Graph::from_pairs("g", 3, &[(2, 2)]);
        assert_eq!(res, Err(GraphError::SelfLoop(2)));
    }

    #[test]
    fn test_rejects_duplicate() {
        let res = Graph::from_pairs("g", 3, &[(0, 2), (1, 2), (0, 2)]);
        assert_eq!(res, Err(GraphError::DuplicateEdge(Edge::new(0, 2))));
    }

    #[test]
    fn test_opposite_edges_are_not_duplicates() {
        let g = Graph::from_pairs("g", 2, &[(0, 1), (1, 0)]).unwrap();
        assert_eq!(g.num_edges(), 2);
        assert!(!g.is_acyclic());
    }

    #[test]
    fn test_crossing() {
        assert!(Edge::new(0, 2).crosses(&Edge::new(1, 3)));
        assert!(Edge::new(3, 1).crosses(&Edge::new(2, 0)));
        assert!(!Edge::new(0, 2).crosses(&Edge::new(2, 3)));
        assert!(!Edge::new(0, 3).crosses(&Edge::new(1, 2)));
        assert!(!Edge::new(0, 1).crosses(&Edge::new(2, 3)));
        assert!(!Edge::new(0, 3).crosses(&Edge::new(0, 2)));
    }

    #[test]
    fn test_noncrossing() {
        let g = Graph::from_pairs("g", 4, &[(0, 3), (0, 1), (1, 2), (3, 2)]).unwrap();
        assert!(g.is_noncrossing());
        let g = Graph::from_pairs("g", 4, &[(0, 2), (1, 3)]).unwrap();
        assert!(!g.is_noncrossing());
    }

    #[test]
    fn test_acyclic() {
        let g = Graph::from_pairs("g", 3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
        assert!(g.is_acyclic());
        let g = Graph::from_pairs("g", 3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        assert!(!g.is_acyclic());
    }

    #[test]
    fn test_mirrored() {
        let g = Graph::from_pairs("g", 4, &[(0, 1), (3, 1)]).unwrap();
        let m = g.mirrored();
        assert_eq!(m.edges(), &[Edge::new(2, 3), Edge::new(2, 0)]);
        assert_eq!(m.mirrored(), g);
    }
}
