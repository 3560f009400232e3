//! The host application as seen from a node.
//!
//! Nodes never decode images themselves. The Image Fetcher hands a filename to
//! [`Host::load_image`] and returns whatever the host produces.

use std::path::{Path, PathBuf};

use crate::error::{NodeError, Result};
use crate::node::{HostValue, NodeValue, ValueType};

/// Capabilities the host application provides to nodes.
pub trait Host: Send + Sync {
    /// Directory the host reads user-supplied inputs from.
    fn input_directory(&self) -> &Path;

    /// Load `filename` (relative to [`Host::input_directory`]) with the host's
    /// own image loader. Conventionally returns an image and a mask.
    fn load_image(&self, filename: &str) -> Result<Vec<NodeValue>>;
}

/// Stand-alone host used by the CLI and tests.
///
/// `load_image` only checks that the file is present and returns its path as
/// both the image and the mask payload.
#[derive(Debug, Clone)]
pub struct LocalHost {
    input_dir: PathBuf,
}

impl LocalHost {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
        }
    }
}

impl Host for LocalHost {
    fn input_directory(&self) -> &Path {
        &self.input_dir
    }

    fn load_image(&self, filename: &str) -> Result<Vec<NodeValue>> {
        let path = self.input_dir.join(filename);
        if !path.is_file() {
            return Err(NodeError::Host(format!(
                "image not found: {}",
                path.display()
            )));
        }
        Ok(vec![
            NodeValue::Host(HostValue::new(ValueType::Image, path.clone())),
            NodeValue::Host(HostValue::new(ValueType::Mask, path)),
        ])
    }
}
