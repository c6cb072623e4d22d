//! Loaders for the whitespace-separated road network tables.
//!
//! Each table starts with a record count followed by that many records:
//!
//! - nodes: `id latitude longitude`
//! - edges: `from to cost length speed_limit` (cost in hundredths of a second)
//! - interest points: `node category "display name"`
//!
//! Parsing is controlled by an explicit [`LoaderConfig`] rather than any
//! process-wide locale. Every id is validated against the node table before
//! the graph or landmark index is built, so a loaded [`RoadMap`] never holds a
//! dangling reference.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::dataset::DatasetPaths;
use crate::error::{Error, Result};
use crate::graph::{EdgeRecord, Graph, Node, NodeId};
use crate::landmarks::{InterestCategory, InterestPoint, LandmarkIndex};

/// Options that affect how the input tables are parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Accept `,` as the decimal separator in coordinates.
    pub decimal_comma: bool,
    /// Reject tables that carry tokens after the declared number of records.
    pub strict_counts: bool,
}

/// Road network and landmark index loaded from one dataset.
#[derive(Debug, Clone, Default)]
pub struct RoadMap {
    pub graph: Graph,
    pub landmarks: LandmarkIndex,
}

/// Load all three tables and build the graph and landmark index.
pub fn load_road_map(paths: &DatasetPaths, config: &LoaderConfig) -> Result<RoadMap> {
    paths.verify()?;

    let nodes = parse_nodes(&read_table(&paths.nodes)?, config)?;
    let edges = parse_edges(&read_table(&paths.edges)?, config)?;
    let points = parse_interest_points(&read_table(&paths.interest_points)?, config)?;

    let graph = Graph::from_records(nodes, &edges)?;
    let landmarks = LandmarkIndex::build(points, graph.node_count())?;
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        landmarks = landmarks.len(),
        "loaded road map"
    );

    Ok(RoadMap { graph, landmarks })
}

fn read_table(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading table");
    Ok(fs::read_to_string(path)?)
}

/// Parse the node table into coordinates indexed by node id.
pub fn parse_nodes(text: &str, config: &LoaderConfig) -> Result<Vec<Node>> {
    let mut tokens = Tokens::new("node table", text);
    let count = tokens.record_count("node count", 3)?;

    let mut slots: Vec<Option<Node>> = vec![None; count];
    for record in 0..count {
        tokens.record = Some(record);
        let id: NodeId = tokens.parse("node id")?;
        let latitude = tokens.coordinate("latitude", config)?;
        let longitude = tokens.coordinate("longitude", config)?;

        let Some(slot) = slots.get_mut(id) else {
            return Err(tokens.error(format!("node id {id} is outside [0, {count})")));
        };
        if slot.is_some() {
            return Err(tokens.error(format!("node id {id} appears more than once")));
        }
        *slot = Some(Node {
            latitude,
            longitude,
        });
    }
    tokens.finish(config)?;

    // `count` unique ids below `count` fill every slot.
    Ok(slots.into_iter().flatten().collect())
}

/// Parse the edge table. Endpoint ranges and cost signs are checked when the
/// records are handed to [`Graph::from_records`].
pub fn parse_edges(text: &str, config: &LoaderConfig) -> Result<Vec<EdgeRecord>> {
    let mut tokens = Tokens::new("edge table", text);
    let count = tokens.record_count("edge count", 5)?;

    let mut edges = Vec::with_capacity(count);
    for record in 0..count {
        tokens.record = Some(record);
        let from = tokens.node_id("source node")?;
        let to = tokens.node_id("destination node")?;
        let cost: i64 = tokens.parse("cost")?;
        let length_m: u32 = tokens.parse("length")?;
        let speed_limit_kmh: u32 = tokens.parse("speed limit")?;
        edges.push(EdgeRecord {
            from,
            to,
            cost,
            length_m,
            speed_limit_kmh,
        });
    }
    tokens.finish(config)?;

    Ok(edges)
}

/// Parse the interest-point table. Names are the text between the next pair
/// of double quotes and may contain whitespace.
pub fn parse_interest_points(text: &str, config: &LoaderConfig) -> Result<Vec<InterestPoint>> {
    let mut tokens = Tokens::new("interest point table", text);
    let count = tokens.record_count("interest point count", 3)?;

    let mut points = Vec::with_capacity(count);
    for record in 0..count {
        tokens.record = Some(record);
        let node = tokens.node_id("node")?;
        let category: u32 = tokens.parse("category")?;
        let name = tokens.quoted("name")?;
        points.push(InterestPoint {
            node,
            category: InterestCategory(category),
            name: name.to_string(),
        });
    }
    tokens.finish(config)?;

    Ok(points)
}

/// Cursor over a table's text that reports errors with record context.
struct Tokens<'a> {
    source_name: &'static str,
    text: &'a str,
    pos: usize,
    record: Option<usize>,
}

impl<'a> Tokens<'a> {
    fn new(source_name: &'static str, text: &'a str) -> Self {
        Self {
            source_name,
            text,
            pos: 0,
            record: None,
        }
    }

    fn error(&self, message: String) -> Error {
        let message = match self.record {
            Some(record) => format!("record {record}: {message}"),
            None => message,
        };
        Error::malformed(self.source_name, message)
    }

    fn skip_whitespace(&mut self) {
        let text = self.text;
        let rest = &text[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn next(&mut self, field: &str) -> Result<&'a str> {
        self.skip_whitespace();
        let text = self.text;
        let rest = &text[self.pos..];
        if rest.is_empty() {
            return Err(self.error(format!("unexpected end of input while reading {field}")));
        }
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.pos += end;
        Ok(&rest[..end])
    }

    fn parse<T: FromStr>(&mut self, field: &str) -> Result<T> {
        let token = self.next(field)?;
        token
            .parse()
            .map_err(|_| self.error(format!("invalid {field} '{token}'")))
    }

    /// Read a table's leading record count. Every record needs at least
    /// `tokens_per_record` tokens, each preceded by a separator, so a count
    /// that cannot fit in the remaining text is rejected before anything is
    /// allocated for it.
    fn record_count(&mut self, field: &str, tokens_per_record: usize) -> Result<usize> {
        let count: usize = self.parse(field)?;
        let remaining = self.text.len() - self.pos;
        let fits = count
            .checked_mul(2 * tokens_per_record)
            .is_some_and(|needed| needed <= remaining);
        if !fits {
            return Err(self.error(format!(
                "{field} {count} exceeds what the remaining {remaining} bytes can hold"
            )));
        }
        Ok(count)
    }

    /// Node ids are read signed so negative ids surface as range errors
    /// instead of generic parse failures.
    fn node_id(&mut self, field: &str) -> Result<NodeId> {
        let value: i64 = self.parse(field)?;
        NodeId::try_from(value)
            .map_err(|_| self.error(format!("{field} id {value} is negative")))
    }

    fn coordinate(&mut self, field: &str, config: &LoaderConfig) -> Result<f64> {
        let token = self.next(field)?;
        let parsed = if config.decimal_comma {
            token.replace(',', ".").parse::<f64>()
        } else {
            token.parse::<f64>()
        };
        parsed.map_err(|_| self.error(format!("invalid {field} '{token}'")))
    }

    fn quoted(&mut self, field: &str) -> Result<&'a str> {
        let text = self.text;
        let rest = &text[self.pos..];
        let Some(open) = rest.find('"') else {
            return Err(self.error(format!("missing opening quote for {field}")));
        };
        let body = &rest[open + 1..];
        let Some(close) = body.find('"') else {
            return Err(self.error(format!("unterminated quoted {field}")));
        };
        self.pos += open + 1 + close + 1;
        Ok(&body[..close])
    }

    fn finish(&mut self, config: &LoaderConfig) -> Result<()> {
        self.record = None;
        self.skip_whitespace();
        if config.strict_counts && self.pos < self.text.len() {
            return Err(self.error(
                "found data after the declared number of records".to_string(),
            ));
        }
        Ok(())
    }
}
