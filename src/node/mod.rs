//! Node abstraction shared by every plugin node.
//!
//! # Architecture
//!
//! - [`Node`]: Synchronous trait implemented by each node type
//! - [`NodeDescriptor`]: Declared input/output schema handed to the host
//! - [`NodeRegistry`]: Maps node ids to descriptors and handlers
//! - [`NodeValue`]: Values flowing in and out of a node
//!
//! # Example
//!
//! ```rust,no_run
//! use fetchnodes::node::{NodeInputs, NodeRegistry};
//! use fetchnodes::LocalHost;
//!
//! # fn example() -> anyhow::Result<()> {
//! let registry = NodeRegistry::new();
//! let host = LocalHost::new("/tmp/input");
//!
//! let inputs = NodeInputs::new().with_string("encoded_string", r"\u4f60\u597d");
//! let outputs = registry.invoke("DecodeChinese", inputs, &host)?;
//! assert_eq!(outputs[0].as_str(), Some("你好"));
//! # Ok(())
//! # }
//! ```

pub mod registry;
pub mod schema;

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{NodeError, Result};
use crate::host::Host;

pub use registry::NodeRegistry;
pub use schema::{CachePolicy, InputSpec, NodeDescriptor, OutputSpec};

/// Type tags understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValueType {
    String,
    Int,
    Image,
    Mask,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "STRING",
            Self::Int => "INT",
            Self::Image => "IMAGE",
            Self::Mask => "MASK",
        };
        f.write_str(name)
    }
}

/// Opaque host-owned payload such as an image tensor or a mask.
///
/// Nodes pass these through untouched; only the host knows the concrete type.
#[derive(Clone)]
pub struct HostValue {
    kind: ValueType,
    payload: Arc<dyn Any + Send + Sync>,
}

impl HostValue {
    pub fn new<T: Any + Send + Sync>(kind: ValueType, payload: T) -> Self {
        Self {
            kind,
            payload: Arc::new(payload),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ValueType {
        self.kind
    }

    /// Borrow the payload if it has type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }
}

impl fmt::Debug for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostValue")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// A value passed into or returned from a node.
#[derive(Debug, Clone)]
pub enum NodeValue {
    String(String),
    Int(i64),
    Host(HostValue),
}

impl NodeValue {
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::String(_) => ValueType::String,
            Self::Int(_) => ValueType::Int,
            Self::Host(value) => value.kind(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<String> for NodeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for NodeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i64> for NodeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// Named inputs for a single invocation.
#[derive(Debug, Clone, Default)]
pub struct NodeInputs {
    values: BTreeMap<String, NodeValue>,
}

impl NodeInputs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style string input.
    #[must_use]
    pub fn with_string(mut self, name: &str, value: impl Into<String>) -> Self {
        self.insert(name, NodeValue::String(value.into()));
        self
    }

    pub fn insert(&mut self, name: &str, value: NodeValue) {
        self.values.insert(name.to_string(), value);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NodeValue> {
        self.values.get(name)
    }

    /// String input by name; absent inputs read as empty.
    pub fn string(&self, name: &str) -> Result<&str> {
        match self.values.get(name) {
            None => Ok(""),
            Some(NodeValue::String(s)) => Ok(s),
            Some(other) => Err(NodeError::InputType {
                name: name.to_string(),
                expected: ValueType::String,
                actual: other.value_type(),
            }),
        }
    }
}

/// A plugin node the host can discover and invoke.
///
/// Implementations are stateless; everything an invocation needs arrives
/// through `inputs` and `host`.
pub trait Node: Send + Sync {
    /// Schema and metadata announced to the host.
    fn descriptor(&self) -> NodeDescriptor;

    /// Run the node. Outputs are positional and match `descriptor().outputs`.
    fn run(&self, inputs: &NodeInputs, host: &dyn Host) -> Result<Vec<NodeValue>>;
}
