//! Download an image into the host's input directory and load it.

use std::fs;

use tracing::info;

use super::{LazyClient, CATEGORY};
use crate::config::Config;
use crate::download::PathLocks;
use crate::error::{NodeError, Result};
use crate::host::Host;
use crate::node::{
    CachePolicy, InputSpec, Node, NodeDescriptor, NodeInputs, NodeValue, OutputSpec, ValueType,
};

/// Fetches a URL (or reuses an existing file of the same name) and hands the
/// filename to the host's image loader.
///
/// Files are keyed by base filename only: an existing file with that name is
/// never re-downloaded or overwritten.
#[derive(Debug, Default)]
pub struct ImageFromUrlNode {
    client: LazyClient,
    locks: PathLocks,
}

impl ImageFromUrlNode {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            client: LazyClient::new(config),
            locks: PathLocks::new(),
        }
    }
}

impl Node for ImageFromUrlNode {
    fn descriptor(&self) -> NodeDescriptor {
        NodeDescriptor {
            id: "DisplayImageFromURL",
            display_name: "URL显示图片",
            category: CATEGORY,
            function: "display_image",
            inputs: vec![InputSpec::string("image_url")
                .with_default("url or path")
                .multiline()
                .lazy()],
            outputs: vec![
                OutputSpec::new(ValueType::Image, "IMAGE"),
                OutputSpec::new(ValueType::Mask, "MASK"),
            ],
            cache: CachePolicy::Inputs,
        }
    }

    fn run(&self, inputs: &NodeInputs, host: &dyn Host) -> Result<Vec<NodeValue>> {
        let source = inputs.string("image_url")?.trim();
        if source.is_empty() {
            return Err(NodeError::EmptyImageUrl);
        }

        let filename = base_name(source).ok_or_else(|| NodeError::NoFilename(source.to_string()))?;
        let input_dir = host.input_directory();
        let target = input_dir.join(filename);

        self.locks.with_lock(&target, || -> Result<()> {
            if target.exists() {
                info!("File {} already exists, skipping download.", filename);
                return Ok(());
            }
            fs::create_dir_all(input_dir)?;
            self.client.get(NodeError::Download)?.download(source, &target)?;
            info!("Image successfully downloaded and saved as {}.", filename);
            Ok(())
        })?;

        host.load_image(filename)
    }
}

/// Last `/`-separated component, if it names a file.
fn base_name(source: &str) -> Option<&str> {
    let name = source.rsplit('/').next()?;
    match name {
        "" | "." | ".." => None,
        _ => Some(name),
    }
}
