//! JSON parsing and path extraction, optionally from a live URL.

use tracing::debug;

use super::{LazyClient, CATEGORY};
use crate::config::Config;
use crate::error::{NodeError, Result};
use crate::host::Host;
use crate::json_path::{self, build_url, parse_query_block};
use crate::node::{
    CachePolicy, InputSpec, Node, NodeDescriptor, NodeInputs, NodeValue, OutputSpec, ValueType,
};

/// Parses JSON text (or fetches it) and returns the value at a path.
///
/// Outputs: serialized selection, array length (-1 for non-arrays), and the
/// first image URL found under the selection.
#[derive(Debug, Default)]
pub struct JsonParserNode {
    client: LazyClient,
}

impl JsonParserNode {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            client: LazyClient::new(config),
        }
    }

    fn load(&self, inputs: &NodeInputs) -> Result<serde_json::Value> {
        let url = inputs.string("url")?.trim();
        if url.is_empty() {
            let text = inputs.string("json_string")?;
            return serde_json::from_str(text).map_err(NodeError::InvalidJson);
        }

        let params = parse_query_block(inputs.string("query_string")?);
        let full_url = build_url(url, &params);
        debug!("Fetching JSON from {}", full_url);
        self.client.get(NodeError::Fetch)?.get_json(&full_url)
    }
}

impl Node for JsonParserNode {
    fn descriptor(&self) -> NodeDescriptor {
        NodeDescriptor {
            id: "SimpleJSONParserNode",
            display_name: "JSON解析器",
            category: CATEGORY,
            function: "parse_json",
            inputs: vec![
                InputSpec::string("json_string").multiline().optional(),
                InputSpec::string("url").with_default(""),
                InputSpec::string("query_string").with_default("").multiline(),
                InputSpec::string("path").with_default(""),
            ],
            outputs: vec![
                OutputSpec::new(ValueType::String, "解析后数据"),
                OutputSpec::new(ValueType::Int, "数据大小"),
                OutputSpec::new(ValueType::String, "图片URL"),
            ],
            cache: CachePolicy::AlwaysRerun,
        }
    }

    fn run(&self, inputs: &NodeInputs, _host: &dyn Host) -> Result<Vec<NodeValue>> {
        let doc = self.load(inputs)?;
        let selection = json_path::extract(&doc, inputs.string("path")?)?;

        Ok(vec![
            NodeValue::String(selection.text),
            NodeValue::Int(selection.array_size),
            NodeValue::String(selection.image_url),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::LocalHost;

    fn run(inputs: NodeInputs) -> Result<Vec<NodeValue>> {
        let host = LocalHost::new(std::env::temp_dir());
        JsonParserNode::default().run(&inputs, &host)
    }

    fn texts(out: &[NodeValue]) -> (&str, i64, &str) {
        (
            out[0].as_str().unwrap(),
            out[1].as_int().unwrap(),
            out[2].as_str().unwrap(),
        )
    }

    #[test]
    fn parses_inline_json() {
        let out = run(NodeInputs::new()
            .with_string("json_string", r#"{"a": [1, 2, {"b": "x"}]}"#)
            .with_string("path", "a[2].b"))
        .unwrap();
        assert_eq!(texts(&out), ("x", -1, ""));
    }

    #[test]
    fn invalid_inline_json() {
        let err = run(NodeInputs::new().with_string("json_string", "{not json")).unwrap_err();
        assert_eq!(err.to_string(), "invalid JSON string");
    }

    #[test]
    fn missing_json_without_url_is_invalid_json() {
        let err = run(NodeInputs::new()).unwrap_err();
        assert!(matches!(err, NodeError::InvalidJson(_)));
    }

    #[test]
    fn invalid_json_reported_before_bad_path() {
        let err = run(NodeInputs::new()
            .with_string("json_string", "[")
            .with_string("path", "a[x]"))
        .unwrap_err();
        assert!(matches!(err, NodeError::InvalidJson(_)));
    }

    #[test]
    fn fetches_with_query_parameters() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("k1".into(), "v1".into()),
                mockito::Matcher::UrlEncoded("k2".into(), "v 2".into()),
            ]))
            .with_body(r#"{"items": [{"img": "https://cdn.e.com/a.JPG"}, {}]}"#)
            .create();

        let out = run(NodeInputs::new()
            .with_string("url", format!("{}/api", server.url()))
            .with_string("query_string", "k1=v1\nk2 = v 2\nignored")
            .with_string("path", "items"))
        .unwrap();

        mock.assert();
        let (text, size, image) = texts(&out);
        assert_eq!(size, 2);
        assert_eq!(image, "https://cdn.e.com/a.JPG");
        assert!(text.starts_with("[\n  {"));
    }

    #[test]
    fn url_takes_precedence_over_inline_json() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", "/doc").with_body("[1, 2, 3]").create();

        let out = run(NodeInputs::new()
            .with_string("json_string", "this is ignored")
            .with_string("url", format!("{}/doc", server.url())))
        .unwrap();

        assert_eq!(out[1].as_int(), Some(3));
    }

    #[test]
    fn server_error_is_fetch_error() {
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", "/down").with_status(503).create();

        let err = run(NodeInputs::new().with_string("url", format!("{}/down", server.url())))
            .unwrap_err();

        assert!(err.to_string().starts_with("error fetching JSON from URL: "));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn descriptor_declares_outputs() {
        let descriptor = JsonParserNode::default().descriptor();
        let kinds: Vec<_> = descriptor.outputs.iter().map(|o| o.kind).collect();
        assert_eq!(kinds, vec![ValueType::String, ValueType::Int, ValueType::String]);
        assert_eq!(descriptor.cache, CachePolicy::AlwaysRerun);
        assert!(!descriptor.input("json_string").unwrap().required);
    }
}
