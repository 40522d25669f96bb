use crate::graph::Graph;

/// Dense adjacency matrix of one graph, answering edge queries in constant time.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Admissibility {
    num_nodes: usize,
    data: Vec<bool>,
}

impl Admissibility {
    pub fn new(graph: &Graph) -> Admissibility {
        let num_nodes = graph.num_nodes();
        let mut data = vec![false; num_nodes * num_nodes];
        for edge in graph.edges() {
            data[edge.target + edge.source * num_nodes] = true;
        }
        Admissibility { num_nodes, data }
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn is_admissible(&self, source: usize, target: usize) -> bool {
        assert!(source < self.num_nodes && target < self.num_nodes);
        self.data[target + source * self.num_nodes]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_exactly_the_declared_edges() {
        let pairs = [(0, 2), (3, 1), (1, 2)];
        let graph = Graph::from_pairs("g", 4, &pairs).unwrap();
        let oracle = Admissibility::new(&graph);
        for s in 0..4 {
            for t in 0..4 {
                assert_eq!(oracle.is_admissible(s, t), pairs.contains(&(s, t)));
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_query_panics() {
        let graph = Graph::from_pairs("g", 2, &[(0, 1)]).unwrap();
        Admissibility::new(&graph).is_admissible(0, 2);
    }
}
