// Infrastructure layer - Configuration and wire encoding
pub mod chunked_json;
pub mod config;
pub mod http_response;
