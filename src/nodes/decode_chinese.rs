//! Escape-sequence decoding exposed as a node.

use super::CATEGORY;
use crate::decode::decode_escapes;
use crate::error::Result;
use crate::host::Host;
use crate::node::{
    CachePolicy, InputSpec, Node, NodeDescriptor, NodeInputs, NodeValue, OutputSpec, ValueType,
};

/// Turns `\uXXXX` and numeric HTML entities back into readable text.
#[derive(Debug, Default, Clone, Copy)]
pub struct DecodeChineseNode;

impl Node for DecodeChineseNode {
    fn descriptor(&self) -> NodeDescriptor {
        NodeDescriptor {
            id: "DecodeChinese",
            display_name: "Unicode解码中文",
            category: CATEGORY,
            function: "decode_chinese",
            inputs: vec![InputSpec::string("encoded_string").multiline()],
            outputs: vec![OutputSpec::new(ValueType::String, "解码后的中文")],
            cache: CachePolicy::Inputs,
        }
    }

    fn run(&self, inputs: &NodeInputs, _host: &dyn Host) -> Result<Vec<NodeValue>> {
        let decoded = decode_escapes(inputs.string("encoded_string")?);
        Ok(vec![NodeValue::String(decoded)])
    }
}
