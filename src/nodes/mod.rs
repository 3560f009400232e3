//! Node implementations.
//!
//! | Id | Node | Purpose |
//! |----|------|---------|
//! | `SimpleJSONParserNode` | [`JsonParserNode`] | Parse/fetch JSON and select a sub-value |
//! | `DisplayImageFromURL` | [`ImageFromUrlNode`] | Download an image into the input directory |
//! | `DecodeChinese` | [`DecodeChineseNode`] | Resolve Unicode and numeric HTML escapes |

mod decode_chinese;
mod image_url;
mod json_parser;

use once_cell::sync::OnceCell;

use crate::config::Config;
use crate::error::{NodeError, Result};
use crate::http_client::FetchClient;

pub use decode_chinese::DecodeChineseNode;
pub use image_url::ImageFromUrlNode;
pub use json_parser::JsonParserNode;

/// Category every node is listed under.
pub const CATEGORY: &str = "utils";

/// HTTP client built on first use, so constructing a node never fails.
#[derive(Debug, Default)]
struct LazyClient {
    config: Config,
    client: OnceCell<FetchClient>,
}

impl LazyClient {
    fn new(config: Config) -> Self {
        Self {
            config,
            client: OnceCell::new(),
        }
    }

    fn get(&self, on_error: fn(String) -> NodeError) -> Result<&FetchClient> {
        self.client
            .get_or_try_init(|| FetchClient::from_config(&self.config))
            .map_err(|e| on_error(e.to_string()))
    }
}
