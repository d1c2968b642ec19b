//! graph6, JSON and bincode encodings.

use inp_core::errors::{ErrorInfo, InpError};
use serde::{Deserialize, Serialize};

use crate::graph::{Graph, MAX_ORDER};

/// Encodes the graph in the graph6 text format.
///
/// Orders below 63 use a single header byte; larger orders use the `~`
/// prefix followed by an 18-bit big-endian order.
pub fn to_graph6(graph: &Graph) -> String {
    let n = graph.order();
    let mut out: Vec<u8> = Vec::with_capacity(4 + (n * n.saturating_sub(1) / 2).div_ceil(6));
    if n < 63 {
        out.push(n as u8 + 63);
    } else {
        out.push(126);
        out.push(((n >> 12) & 0x3f) as u8 + 63);
        out.push(((n >> 6) & 0x3f) as u8 + 63);
        out.push((n & 0x3f) as u8 + 63);
    }
    let mut chunk = 0u8;
    let mut filled = 0;
    for j in 1..n {
        for i in 0..j {
            chunk = (chunk << 1) | u8::from(graph.has_edge(i, j));
            filled += 1;
            if filled == 6 {
                out.push(chunk + 63);
                chunk = 0;
                filled = 0;
            }
        }
    }
    if filled > 0 {
        out.push((chunk << (6 - filled)) + 63);
    }
    out.into_iter().map(char::from).collect()
}

/// Decodes one graph6 line. A leading `>>graph6<<` header and trailing
/// whitespace are accepted.
pub fn from_graph6(text: &str) -> Result<Graph, InpError> {
    let trimmed = text.trim();
    let body = trimmed.strip_prefix(">>graph6<<").unwrap_or(trimmed);
    let bytes = body.as_bytes();
    if bytes.is_empty() {
        return Err(graph6_error("empty graph6 string", body));
    }
    if bytes.iter().any(|&b| !(63..=126).contains(&b)) {
        return Err(graph6_error("byte outside the printable graph6 range", body));
    }
    let (order, payload) = if bytes[0] == 126 {
        if bytes.len() < 4 || bytes[1] == 126 {
            return Err(graph6_error("unsupported or truncated order header", body));
        }
        let order = bytes[1..4]
            .iter()
            .fold(0usize, |acc, &b| (acc << 6) | usize::from(b - 63));
        (order, &bytes[4..])
    } else {
        (usize::from(bytes[0] - 63), &bytes[1..])
    };
    if order > MAX_ORDER {
        return Err(graph6_error("order exceeds the supported limit", body)
            .with_context("order", order));
    }
    let bits = order * order.saturating_sub(1) / 2;
    if payload.len() != bits.div_ceil(6) {
        return Err(graph6_error("payload length does not match the order", body)
            .with_context("order", order)
            .with_context("payload", payload.len()));
    }
    let mut edges = Vec::new();
    let mut position = 0usize;
    for j in 1..order {
        for i in 0..j {
            let byte = payload[position / 6] - 63;
            if byte & (1 << (5 - position % 6)) != 0 {
                edges.push((i, j));
            }
            position += 1;
        }
    }
    Graph::new(order, &edges)
}

fn graph6_error(message: &str, input: &str) -> InpError {
    InpError::Serde(ErrorInfo::new("graph6-invalid", message).with_context("input", input))
}

/// Serializes the graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes(graph: &Graph) -> Result<Vec<u8>, InpError> {
    bincode::serialize(&SerializableGraph::from_graph(graph))
        .map_err(|err| InpError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<Graph, InpError> {
    let serializable: SerializableGraph = bincode::deserialize(bytes)
        .map_err(|err| InpError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_graph()
}

/// Serializes the graph to a JSON string.
pub fn graph_to_json(graph: &Graph) -> Result<String, InpError> {
    serde_json::to_string_pretty(&SerializableGraph::from_graph(graph))
        .map_err(|err| InpError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON string.
pub fn graph_from_json(json: &str) -> Result<Graph, InpError> {
    let serializable: SerializableGraph = serde_json::from_str(json)
        .map_err(|err| InpError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_graph()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph {
    order: usize,
    edges: Vec<(usize, usize)>,
}

impl SerializableGraph {
    fn from_graph(graph: &Graph) -> Self {
        Self {
            order: graph.order(),
            edges: graph.edges().to_vec(),
        }
    }

    fn into_graph(self) -> Result<Graph, InpError> {
        Graph::new(self.order, &self.edges)
    }
}
