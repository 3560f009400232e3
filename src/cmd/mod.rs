pub mod decode;
pub mod image;
pub mod json;
pub mod list;
