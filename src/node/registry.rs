//! Registry mapping node ids to their descriptors and handlers.

use serde_json::{Map, Value};

use super::{Node, NodeDescriptor, NodeInputs, NodeValue};
use crate::config::Config;
use crate::error::{NodeError, Result};
use crate::host::Host;
use crate::nodes;

struct Entry {
    descriptor: NodeDescriptor,
    node: Box<dyn Node>,
}

/// Table of every node this crate exposes to the host.
///
/// Nodes are kept in registration order so listings are stable.
pub struct NodeRegistry {
    entries: Vec<Entry>,
}

impl NodeRegistry {
    /// Create a registry with all available nodes and default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create a registry whose network nodes use `config`.
    #[must_use]
    pub fn with_config(config: &Config) -> Self {
        let nodes: Vec<Box<dyn Node>> = vec![
            Box::new(nodes::JsonParserNode::new(config.clone())),
            Box::new(nodes::ImageFromUrlNode::new(config.clone())),
            Box::new(nodes::DecodeChineseNode),
        ];

        let mut registry = Self::empty();
        for node in nodes {
            registry.register(node);
        }
        registry
    }

    /// A registry with no nodes.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a node. A node with the same id replaces the earlier one.
    pub fn register(&mut self, node: Box<dyn Node>) {
        let descriptor = node.descriptor();
        let entry = Entry { descriptor, node };
        match self
            .entries
            .iter_mut()
            .find(|e| e.descriptor.id == entry.descriptor.id)
        {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &NodeDescriptor> {
        self.entries.iter().map(|e| &e.descriptor)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&NodeDescriptor> {
        self.entry(id).map(|e| &e.descriptor)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discovery document keyed by node id.
    #[must_use]
    pub fn manifest(&self) -> Value {
        let nodes: Map<String, Value> = self
            .entries
            .iter()
            .map(|e| (e.descriptor.id.to_string(), e.descriptor.to_manifest()))
            .collect();
        Value::Object(nodes)
    }

    /// Validate `inputs` against the node's schema and run it.
    ///
    /// Missing inputs with a declared default are filled in before the node
    /// sees them.
    pub fn invoke(
        &self,
        id: &str,
        mut inputs: NodeInputs,
        host: &dyn Host,
    ) -> Result<Vec<NodeValue>> {
        let entry = self
            .entry(id)
            .ok_or_else(|| NodeError::UnknownNode(id.to_string()))?;

        for spec in &entry.descriptor.inputs {
            match inputs.get(spec.name) {
                Some(value) if value.value_type() != spec.kind => {
                    return Err(NodeError::InputType {
                        name: spec.name.to_string(),
                        expected: spec.kind,
                        actual: value.value_type(),
                    });
                }
                Some(_) => {}
                None => match spec.default {
                    Some(default) => inputs.insert(spec.name, NodeValue::from(default)),
                    None if spec.required => {
                        return Err(NodeError::MissingInput(spec.name.to_string()));
                    }
                    None => {}
                },
            }
        }

        tracing::debug!("Invoking node {}", id);
        entry.node.run(&inputs, host).inspect_err(|e| {
            tracing::warn!("Node {} failed: {}", id, e);
        })
    }

    fn entry(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.descriptor.id == id)
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
