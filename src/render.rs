//! 图的文本渲染
//!
//! 邻接表文本和 Graphviz DOT 导出

use crate::graph::{Graph, VertexKey};
use std::fmt::Display;

/// 每个顶点一行：`A: -> B -> C`；没有出边时只输出键
pub fn adjacency_lines<K: VertexKey + Display>(graph: &Graph<K>) -> Vec<String> {
    graph
        .list_vertices()
        .into_iter()
        .filter_map(|id| {
            let key = graph.key(id)?;
            let edges = graph.edges(id);
            if edges.is_empty() {
                return Some(key.to_string());
            }

            let mut line = format!("{}:", key);
            for edge in edges {
                if let Some(dst) = graph.key(edge.dst()) {
                    line.push_str(&format!(" -> {}", dst));
                }
            }
            Some(line)
        })
        .collect()
}

/// 导出为 Graphviz `digraph`，边标签为权重
pub fn to_dot<K: VertexKey + Display>(graph: &Graph<K>) -> String {
    let mut out = String::from("digraph waygraph {\n");

    for id in graph.list_vertices() {
        if let Some(key) = graph.key(id) {
            out.push_str(&format!("    \"{}\";\n", escape(&key.to_string())));
        }
    }

    for id in graph.list_vertices() {
        let Some(src) = graph.key(id) else { continue };
        for edge in graph.edges(id) {
            if let Some(dst) = graph.key(edge.dst()) {
                out.push_str(&format!(
                    "    \"{}\" -> \"{}\" [label=\"{}\"];\n",
                    escape(&src.to_string()),
                    escape(&dst.to_string()),
                    edge.weight()
                ));
            }
        }
    }

    out.push_str("}\n");
    out
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph<&'static str> {
        let mut graph = Graph::new();
        for key in ["A", "B", "C"] {
            graph.add_vertex(key);
        }
        graph.add_edge(&"A", &"B", 1.0);
        graph.add_edge(&"A", &"C", 2.5);
        graph
    }

    #[test]
    fn test_adjacency_lines() {
        let lines = adjacency_lines(&sample());
        assert_eq!(lines, vec!["C", "B", "A: -> B -> C"]);
    }

    #[test]
    fn test_to_dot() {
        let dot = to_dot(&sample());
        assert!(dot.starts_with("digraph waygraph {"));
        assert!(dot.contains("\"A\" -> \"C\" [label=\"2.5\"];"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_dot_escapes_quotes() {
        let mut graph = Graph::new();
        graph.add_vertex("say \"hi\"".to_string());
        assert!(to_dot(&graph).contains("\"say \\\"hi\\\"\""));
    }
}
