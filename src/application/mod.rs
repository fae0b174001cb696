// Application layer - Use cases over the domain model
pub mod control_store;
pub mod deck_service;
pub mod streaming_service;
