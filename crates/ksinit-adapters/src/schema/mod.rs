//! Schema fetchers.

mod http;
mod memory;
pub mod registry;

pub use http::HttpSchemaFetcher;
pub use memory::StaticSchemaFetcher;
