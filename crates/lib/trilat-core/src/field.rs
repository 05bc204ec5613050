use serde::Deserialize;
use typed_builder::TypedBuilder;

use crate::error::ParamError;
use crate::node::{Node, NodeIdx};

/// The five inputs of a simulation run, as read from a configuration file or the
/// command line. Values are checked by [`FieldSettings::validate`] before any node is
/// generated.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldSettings {
    pub node_count: i64,
    pub field_size: i64,
    pub radius: i64,
    pub noise_percent: i64,
    pub anchor_percent: i64,
}

impl FieldSettings {
    pub const NAMES: [&'static str; 5] = [
        "node_count",
        "field_size",
        "radius",
        "noise_percent",
        "anchor_percent",
    ];

    /// Reads the settings from five textual inputs given in the order N, L, R, r, f.
    pub fn parse(inputs: [&str; 5]) -> Result<Self, ParamError> {
        let mut values = [0i64; 5];
        for (idx, input) in inputs.iter().enumerate() {
            values[idx] = input.trim().parse::<i64>().map_err(|_| ParamError::Parse {
                name: Self::NAMES[idx],
                input: input.trim().to_owned(),
            })?;
        }
        Ok(Self {
            node_count: values[0],
            field_size: values[1],
            radius: values[2],
            noise_percent: values[3],
            anchor_percent: values[4],
        })
    }

    pub fn validate(&self) -> Result<FieldParams, ParamError> {
        let node_count = Self::at_least_one("node_count", self.node_count)?;
        let field_size = Self::at_least_one("field_size", self.field_size)?;
        let radius = Self::at_least_one("radius", self.radius)?;
        let noise_percent = Self::percent("noise_percent", self.noise_percent)?;
        let anchor_percent = Self::percent("anchor_percent", self.anchor_percent)?;
        Ok(FieldParams::builder()
            .node_count(node_count)
            .field_size(field_size)
            .radius(radius)
            .noise_percent(noise_percent)
            .anchor_percent(anchor_percent)
            .build())
    }

    fn at_least_one(name: &'static str, value: i64) -> Result<u32, ParamError> {
        if value < 1 || value > i64::from(u32::MAX) {
            return Err(ParamError::InvalidParameter {
                name,
                value,
                reason: "must be a positive 32-bit integer",
            });
        }
        Ok(value as u32)
    }

    fn percent(name: &'static str, value: i64) -> Result<u32, ParamError> {
        if !(0..=100).contains(&value) {
            return Err(ParamError::InvalidParameter {
                name,
                value,
                reason: "must be a percentage between 0 and 100",
            });
        }
        Ok(value as u32)
    }
}

/// Validated parameters of a run. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct FieldParams {
    pub node_count: u32,
    pub field_size: u32,
    pub radius: u32,
    pub noise_percent: u32,
    pub anchor_percent: u32,
}

impl FieldParams {
    /// `floor(N * f / 100)`.
    pub fn anchor_count(&self) -> usize {
        (u64::from(self.node_count) * u64::from(self.anchor_percent) / 100) as usize
    }

    pub fn non_anchor_count(&self) -> usize {
        self.node_count as usize - self.anchor_count()
    }

    /// Arena index of the first anchor. Anchors occupy the tail of the arena.
    pub fn first_anchor_idx(&self) -> NodeIdx {
        self.non_anchor_count()
    }
}

/// The arena of nodes of one generated field.
///
/// Neighbor entries refer to other nodes by their arena index, so a clone of the field
/// is a fully independent snapshot whose references stay valid.
#[derive(Clone, Debug)]
pub struct Field {
    params: FieldParams,
    nodes: Vec<Node>,
}

impl Field {
    pub fn new(params: FieldParams, nodes: Vec<Node>) -> Self {
        Self { params, nodes }
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn node(&self, idx: NodeIdx) -> &Node {
        &self.nodes[idx]
    }

    pub fn node_mut(&mut self, idx: NodeIdx) -> &mut Node {
        &mut self.nodes[idx]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of non-anchors the field was generated with. Promotions do not change it.
    pub fn initial_non_anchors(&self) -> usize {
        self.params.non_anchor_count()
    }

    pub fn anchor_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_anchor).count()
    }

    pub fn snapshot(&self) -> Field {
        self.clone()
    }
}
