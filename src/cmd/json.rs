use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::json;

use fetchnodes::{LocalHost, NodeInputs, NodeRegistry};

use crate::OutputFormat;

/// Where the JSON document comes from.
pub struct JsonSource {
    pub json_string: Option<String>,
    pub file: Option<PathBuf>,
    pub url: Option<String>,
}

pub fn cmd_json(
    registry: &NodeRegistry,
    host: &LocalHost,
    source: JsonSource,
    query: &[String],
    path: &str,
    format: OutputFormat,
) -> Result<()> {
    let json_string = match (source.json_string, source.file) {
        (Some(text), _) => text,
        (None, Some(file)) => std::fs::read_to_string(&file)
            .with_context(|| format!("failed to read {}", file.display()))?,
        (None, None) => String::new(),
    };

    let inputs = NodeInputs::new()
        .with_string("json_string", json_string)
        .with_string("url", source.url.unwrap_or_default())
        .with_string("query_string", query.join("\n"))
        .with_string("path", path);

    let outputs = registry.invoke("SimpleJSONParserNode", inputs, host)?;
    let data = outputs.first().and_then(|v| v.as_str()).unwrap_or_default();
    let size = outputs.get(1).and_then(fetchnodes::NodeValue::as_int).unwrap_or(-1);
    let image_url = outputs.get(2).and_then(|v| v.as_str()).unwrap_or_default();

    match format {
        OutputFormat::Text => {
            println!("{data}");
            if size >= 0 {
                println!("\n📏 {size} items");
            }
            if !image_url.is_empty() {
                println!("🖼️  {image_url}");
            }
        }
        OutputFormat::Json => {
            let out = json!({
                "data": data,
                "array_size": size,
                "image_url": image_url,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}
