//! `fetchnodes` - JSON, image and text nodes for node-graph hosts
//!
//! # Nodes
//!
//! - **`SimpleJSONParserNode`**: Parse inline or fetched JSON, select a value by
//!   dotted/bracketed path, report array size and the first image URL
//! - **`DisplayImageFromURL`**: Download an image into the host's input
//!   directory and load it with the host's image loader
//! - **`DecodeChinese`**: Resolve `\uXXXX` and numeric HTML entities
//!
//! # Example
//!
//! ```rust,no_run
//! use fetchnodes::{LocalHost, NodeInputs, NodeRegistry};
//!
//! fn main() -> anyhow::Result<()> {
//!     let registry = NodeRegistry::new();
//!     let host = LocalHost::new("./input");
//!
//!     let inputs = NodeInputs::new()
//!         .with_string("url", "https://api.example.com/posts")
//!         .with_string("query_string", "page=1\nlimit=10")
//!         .with_string("path", "data[0].title");
//!     let outputs = registry.invoke("SimpleJSONParserNode", inputs, &host)?;
//!     println!("{:?}", outputs[0].as_str());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod decode;
pub mod download;
pub mod error;
pub mod host;
pub mod http_client;
pub mod json_path;
pub mod node;
pub mod nodes;

pub use config::{load_config, Config};
pub use decode::decode_escapes;
pub use error::NodeError;
pub use host::{Host, LocalHost};
pub use http_client::FetchClient;
pub use json_path::{extract, Selection};
pub use node::{
    CachePolicy, HostValue, InputSpec, Node, NodeDescriptor, NodeInputs, NodeRegistry, NodeValue,
    OutputSpec, ValueType,
};

/// Version of fetchnodes
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
