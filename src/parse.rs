use error_chain::error_chain;
use labgraph::{EdgeSpec, Graph, NodeLabel};
use log::debug;
use regex::Regex;
use std::fmt::Display;

error_chain! {
    errors {
        Notation(reason: String) {
            description("the graph notation is malformed")
            display("the graph notation is malformed: {}. Expected e.g. {{{{v1, v2, v3}},{{(v1, v2), (v2, v3, 2.5)}}}}", reason)
        }

        WeightLiteral(from: String, to: String, weight: String) {
            description("an edge weight is not a number")
            display("the weight {:?} of the edge ({}, {}) is not a number", weight, from, to)
        }
    }
}

/// A graph as given in the bracketed notation, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedGraph {
    /// The node ids in the order they were listed.
    pub nodes: Vec<String>,
    /// The edges in the order they were listed.
    pub edges: Vec<EdgeSpec<String, f64>>,
}

impl ParsedGraph {
    /// Validates the graph and builds it.
    pub fn build(self) -> labgraph::error::Result<Graph<String>> {
        Graph::build(self.nodes, self.edges)
    }
}

/// Parses the notation `{{v1, v2, v3},{(v1, v2), (v2, v3, 2.5)}}`.
///
/// Node ids are tokens without whitespace, commas, parentheses or braces.
/// An edge may carry a weight as third component.
/// Whether the ids are consistent is not checked here, but when building the graph.
pub fn parse_graph_notation(raw: &str) -> Result<ParsedGraph> {
    let outer = Regex::new(r"^\s*\{\s*\{(?P<nodes>[^{}]*)\}\s*,\s*\{(?P<edges>[^{}]*)\}\s*\}\s*$")
        .map_err(|error| ErrorKind::Notation(error.to_string()))?;
    let edge = Regex::new(
        r"\(\s*(?P<from>[^\s,(){}]+)\s*,\s*(?P<to>[^\s,(){}]+)\s*(?:,\s*(?P<weight>[^\s,(){}]+)\s*)?\)",
    )
    .map_err(|error| ErrorKind::Notation(error.to_string()))?;

    let captures = outer.captures(raw).ok_or_else(|| {
        ErrorKind::Notation("expected exactly one node group and one edge group".to_string())
    })?;
    let node_section = &captures["nodes"];
    let edge_section = &captures["edges"];

    let mut nodes = Vec::new();
    for token in node_section.split(',').map(str::trim) {
        if token.is_empty() {
            continue;
        }
        if token.contains(|c: char| c.is_whitespace() || c == '(' || c == ')') {
            return Err(ErrorKind::Notation(format!("invalid node id {:?}", token)).into());
        }
        nodes.push(token.to_string());
    }

    let mut edges = Vec::new();
    for captures in edge.captures_iter(edge_section) {
        let from = captures["from"].to_string();
        let to = captures["to"].to_string();
        let weight = match captures.name("weight") {
            Some(weight) => Some(weight.as_str().parse::<f64>().map_err(|_| {
                ErrorKind::WeightLiteral(from.clone(), to.clone(), weight.as_str().to_string())
            })?),
            None => None,
        };
        edges.push(EdgeSpec::new(from, to, weight));
    }

    // Everything that is not an edge must be a separator.
    let rest = edge.replace_all(edge_section, "");
    if let Some(garbage) = rest
        .split(',')
        .map(str::trim)
        .find(|token| !token.is_empty())
    {
        return Err(ErrorKind::Notation(format!("unexpected {:?} between the edges", garbage)).into());
    }

    debug!(
        "Parsed graph notation with {} nodes and {} edges",
        nodes.len(),
        edges.len()
    );
    Ok(ParsedGraph { nodes, edges })
}

/// Writes a graph in the notation understood by [parse_graph_notation].
/// Weights are only written if they differ from one.
pub fn format_graph_notation<Node: NodeLabel + Display>(graph: &Graph<Node>) -> String {
    let nodes: Vec<_> = graph.nodes().map(ToString::to_string).collect();
    let edges: Vec<_> = graph
        .edges()
        .map(|(from, to, weight)| {
            if weight == 1.0 {
                format!("({}, {})", from, to)
            } else {
                format!("({}, {}, {})", from, to, weight)
            }
        })
        .collect();
    format!("{{{{{}}},{{{}}}}}", nodes.join(", "), edges.join(", "))
}

#[cfg(test)]
mod tests {
    use super::{format_graph_notation, parse_graph_notation, ErrorKind};
    use labgraph::EdgeSpec;

    fn s(value: &str) -> String {
        value.to_string()
    }

    #[test]
    fn test_parse_example() {
        let parsed = parse_graph_notation("{{v1, v2, v3},{(v1, v2), (v2, v3)}}").unwrap();
        assert_eq!(parsed.nodes, vec![s("v1"), s("v2"), s("v3")]);
        assert_eq!(
            parsed.edges,
            vec![
                EdgeSpec::new(s("v1"), s("v2"), None),
                EdgeSpec::new(s("v2"), s("v3"), None)
            ]
        );
    }

    #[test]
    fn test_parse_weights_and_whitespace() {
        let parsed =
            parse_graph_notation("  { {1,2 , 3} , { ( 1 ,2, 2.5),(2,3 ,7) } }\n").unwrap();
        assert_eq!(parsed.nodes, vec![s("1"), s("2"), s("3")]);
        assert_eq!(parsed.edges[0], EdgeSpec::new(s("1"), s("2"), Some(2.5)));
        assert_eq!(parsed.edges[1], EdgeSpec::new(s("2"), s("3"), Some(7.0)));
    }

    #[test]
    fn test_parse_empty_graph() {
        let parsed = parse_graph_notation("{{},{}}").unwrap();
        assert!(parsed.nodes.is_empty());
        assert!(parsed.edges.is_empty());
        assert!(parsed.build().unwrap().nodes().next().is_none());
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(matches!(
            parse_graph_notation("{{a, b}}").unwrap_err().kind(),
            ErrorKind::Notation(_)
        ));
        assert!(matches!(
            parse_graph_notation("{{a, b},{(a, b)},{}}").unwrap_err().kind(),
            ErrorKind::Notation(_)
        ));
        assert!(matches!(
            parse_graph_notation("{{a, b},{(a, b), c}}").unwrap_err().kind(),
            ErrorKind::Notation(_)
        ));
        assert!(matches!(
            parse_graph_notation("{{a, b},{(a, b, heavy)}}").unwrap_err().kind(),
            ErrorKind::WeightLiteral(_, _, weight) if weight == "heavy"
        ));
    }

    #[test]
    fn test_build_reports_unknown_nodes() {
        let parsed = parse_graph_notation("{{a, b},{(a, c)}}").unwrap();
        let error = parsed.build().unwrap_err();
        assert!(error.kind().is_malformed_graph());
    }

    #[test]
    fn test_build_rejects_infinite_weight_literals() {
        for notation in ["{{a, b},{(a, b, inf)}}", "{{a, b},{(a, b, -inf)}}", "{{a, b},{(a, b, NaN)}}"] {
            let parsed = parse_graph_notation(notation).unwrap();
            let error = parsed.build().unwrap_err();
            assert!(error.kind().is_malformed_graph(), "{}", notation);
        }
    }

    #[test]
    fn test_format_parses_back() {
        let parsed = parse_graph_notation("{{b, a, c},{(a, b, 2.5), (c, a)}}").unwrap();
        let graph = parsed.build().unwrap();
        let formatted = format_graph_notation(&graph);
        assert_eq!(formatted, "{{a, b, c},{(a, b, 2.5), (a, c)}}");
        assert_eq!(
            parse_graph_notation(&formatted).unwrap().build().unwrap().weight(&s("a"), &s("b")),
            Some(2.5)
        );
    }
}
