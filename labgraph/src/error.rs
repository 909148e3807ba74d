error_chain! {
    errors {
        UnknownNode(id: String) {
            description("an edge references a node that is not part of the node list")
            display("an edge references the unknown node {}", id)
        }

        DuplicateNode(id: String) {
            description("the node list contains a node twice")
            display("the node list contains the node {} twice", id)
        }

        DuplicateEdge(from: String, to: String) {
            description("the edge list contains an edge twice")
            display("the edge list contains the edge ({}, {}) twice", from, to)
        }

        InvalidWeight(from: String, to: String, weight: String) {
            description("an edge weight is negative or not a number")
            display("the edge ({}, {}) has the invalid weight {}", from, to, weight)
        }

        NodeNotFound(id: String) {
            description("the requested node is not part of the graph")
            display("the node {} is not part of the graph", id)
        }

        NotEulerian {
            description("the graph has no Eulerian circuit")
            display("the graph has no Eulerian circuit")
        }

        NoEulerianTrail {
            description("the graph has no open Eulerian trail")
            display("the graph has no open Eulerian trail")
        }
    }
}

impl ErrorKind {
    /// Returns true if this error describes malformed input to [`Graph::build`](crate::Graph::build).
    pub fn is_malformed_graph(&self) -> bool {
        matches!(
            self,
            ErrorKind::UnknownNode(_)
                | ErrorKind::DuplicateNode(_)
                | ErrorKind::DuplicateEdge(_, _)
                | ErrorKind::InvalidWeight(_, _, _)
        )
    }
}
