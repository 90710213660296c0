use spanwood_core::{Graph, GraphEdge, GraphError, GraphNode, NodeLabel};

/// A bare node list plus edge list that performs no consistency checks, so
/// tests can hand algorithms graphs whose views disagree.
#[derive(Clone, Debug)]
pub struct EdgeList<L> {
    nodes: Vec<GraphNode<L>>,
    edges: Vec<GraphEdge<L>>,
    directed: bool,
}

impl<L: NodeLabel> EdgeList<L> {
    #[must_use]
    pub fn new(labels: impl IntoIterator<Item = L>, edges: Vec<GraphEdge<L>>) -> Self {
        Self {
            nodes: labels.into_iter().map(GraphNode::new).collect(),
            edges,
            directed: false,
        }
    }

    #[must_use]
    pub fn directed(mut self) -> Self {
        self.directed = true;
        self
    }

    fn position(&self, label: &L) -> Option<usize> {
        self.nodes.iter().position(|node| node.label() == label)
    }

    fn touching(&self, label: &L) -> Vec<&GraphEdge<L>> {
        self.edges
            .iter()
            .filter(|edge| edge.node1() == label || edge.node2() == label)
            .collect()
    }
}

impl<L: NodeLabel> Graph<L> for EdgeList<L> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn nodes(&self) -> Vec<&GraphNode<L>> {
        self.nodes.iter().collect()
    }

    fn add_node(&mut self, node: GraphNode<L>) -> bool {
        self.nodes.push(node);
        true
    }

    fn remove_node(&mut self, label: &L) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|node| node.label() != label);
        before != self.nodes.len()
    }

    fn contains_node(&self, label: &L) -> bool {
        self.position(label).is_some()
    }

    fn node(&self, label: &L) -> Option<&GraphNode<L>> {
        self.nodes.iter().find(|node| node.label() == label)
    }

    fn node_mut(&mut self, label: &L) -> Option<&mut GraphNode<L>> {
        self.nodes.iter_mut().find(|node| node.label() == label)
    }

    fn node_index_of(&self, label: &L) -> Result<usize, GraphError> {
        self.position(label).ok_or_else(|| GraphError::UnknownLabel {
            label: format!("{label:?}").into(),
        })
    }

    fn node_at_index(&self, index: usize) -> Result<&GraphNode<L>, GraphError> {
        self.nodes.get(index).ok_or(GraphError::IndexOutOfRange {
            index,
            node_count: self.nodes.len(),
        })
    }

    fn adjacent_nodes_of(&self, label: &L) -> Result<Vec<&GraphNode<L>>, GraphError> {
        Ok(self
            .touching(label)
            .into_iter()
            .filter_map(|edge| edge.opposite(label))
            .filter_map(|other| self.node(other))
            .collect())
    }

    fn predecessor_nodes_of(&self, label: &L) -> Result<Vec<&GraphNode<L>>, GraphError> {
        self.adjacent_nodes_of(label)
    }

    fn edges(&self) -> Vec<&GraphEdge<L>> {
        self.edges.iter().collect()
    }

    fn add_edge(&mut self, edge: &GraphEdge<L>) -> Result<bool, GraphError> {
        self.edges.push(edge.clone());
        Ok(true)
    }

    fn remove_edge(&mut self, edge: &GraphEdge<L>) -> Result<bool, GraphError> {
        let before = self.edges.len();
        self.edges.retain(|stored| stored != edge);
        Ok(before != self.edges.len())
    }

    fn contains_edge(&self, edge: &GraphEdge<L>) -> Result<bool, GraphError> {
        Ok(self.edges.contains(edge))
    }

    fn edges_of(&self, label: &L) -> Result<Vec<&GraphEdge<L>>, GraphError> {
        Ok(self.touching(label))
    }

    fn ingoing_edges_of(&self, label: &L) -> Result<Vec<&GraphEdge<L>>, GraphError> {
        Ok(self.touching(label))
    }
}
