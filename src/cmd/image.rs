use std::path::PathBuf;

use anyhow::{Context, Result};

use fetchnodes::{LocalHost, NodeInputs, NodeRegistry, NodeValue};

pub fn cmd_image(registry: &NodeRegistry, host: &LocalHost, source: &str) -> Result<()> {
    let inputs = NodeInputs::new().with_string("image_url", source);
    let outputs = registry.invoke("DisplayImageFromURL", inputs, host)?;

    let path = outputs
        .first()
        .and_then(|value| match value {
            NodeValue::Host(image) => image.downcast_ref::<PathBuf>(),
            _ => None,
        })
        .context("host returned no image")?;

    println!("🖼️  {}", path.display());
    Ok(())
}
