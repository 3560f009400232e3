use std::io::Read;

use anyhow::{Context, Result};

use fetchnodes::{LocalHost, NodeInputs, NodeRegistry};

pub fn cmd_decode(registry: &NodeRegistry, host: &LocalHost, text: Option<String>) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let inputs = NodeInputs::new().with_string("encoded_string", text);
    let outputs = registry.invoke("DecodeChinese", inputs, host)?;
    if let Some(decoded) = outputs.first().and_then(|v| v.as_str()) {
        println!("{decoded}");
    }
    Ok(())
}
