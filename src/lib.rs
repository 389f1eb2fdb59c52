// HTML Renderer
// Library exports

pub mod config;
pub mod errors;
pub mod ingest;
pub mod pages;
pub mod retrieval;
pub mod server;
pub mod store;
