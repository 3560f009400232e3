//! Declared node schemas.
//!
//! A [`NodeDescriptor`] is what the host's discovery layer sees: input fields
//! with their metadata, positional output types and names, the entry-point
//! function name and a display category.

use serde::Serialize;
use serde_json::{json, Map, Value};

use super::ValueType;

/// Whether the host may reuse cached outputs for unchanged inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CachePolicy {
    /// Outputs depend only on inputs.
    #[default]
    Inputs,
    /// Never cached (the node reads live network state).
    AlwaysRerun,
}

/// One input field.
#[derive(Debug, Clone, Serialize)]
pub struct InputSpec {
    pub name: &'static str,
    pub kind: ValueType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
    pub multiline: bool,
    /// Host may defer evaluating the upstream value until it is needed.
    pub lazy: bool,
    pub required: bool,
}

impl InputSpec {
    /// A required string input with no default.
    #[must_use]
    pub const fn string(name: &'static str) -> Self {
        Self {
            name,
            kind: ValueType::String,
            default: None,
            multiline: false,
            lazy: false,
            required: true,
        }
    }

    #[must_use]
    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub const fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    #[must_use]
    pub const fn lazy(mut self) -> Self {
        self.lazy = true;
        self
    }

    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Host-facing `[TYPE, {metadata}]` pair.
    fn to_manifest(&self) -> Value {
        let mut meta = Map::new();
        if let Some(default) = self.default {
            meta.insert("default".into(), json!(default));
        }
        if self.multiline {
            meta.insert("multiline".into(), json!(true));
        }
        if self.lazy {
            meta.insert("lazy".into(), json!(true));
        }
        json!([self.kind, meta])
    }
}

/// One positional output.
#[derive(Debug, Clone, Serialize)]
pub struct OutputSpec {
    pub kind: ValueType,
    pub name: &'static str,
}

impl OutputSpec {
    #[must_use]
    pub const fn new(kind: ValueType, name: &'static str) -> Self {
        Self { kind, name }
    }
}

/// Everything the host needs to list and invoke a node.
#[derive(Debug, Clone, Serialize)]
pub struct NodeDescriptor {
    pub id: &'static str,
    pub display_name: &'static str,
    pub category: &'static str,
    /// Entry-point name reported to the host.
    pub function: &'static str,
    pub inputs: Vec<InputSpec>,
    pub outputs: Vec<OutputSpec>,
    pub cache: CachePolicy,
}

impl NodeDescriptor {
    #[must_use]
    pub fn input(&self, name: &str) -> Option<&InputSpec> {
        self.inputs.iter().find(|spec| spec.name == name)
    }

    /// Render in the host's discovery format.
    #[must_use]
    pub fn to_manifest(&self) -> Value {
        let mut required = Map::new();
        let mut optional = Map::new();
        for spec in &self.inputs {
            let target = if spec.required {
                &mut required
            } else {
                &mut optional
            };
            target.insert(spec.name.to_string(), spec.to_manifest());
        }

        let mut input = Map::new();
        input.insert("required".into(), Value::Object(required));
        if !optional.is_empty() {
            input.insert("optional".into(), Value::Object(optional));
        }

        json!({
            "display_name": self.display_name,
            "category": self.category,
            "function": self.function,
            "input": input,
            "output": self.outputs.iter().map(|o| o.kind).collect::<Vec<_>>(),
            "output_name": self.outputs.iter().map(|o| o.name).collect::<Vec<_>>(),
            "always_rerun": self.cache == CachePolicy::AlwaysRerun,
        })
    }
}
