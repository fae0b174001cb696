// Domain layer - Pure models and transitions, no I/O
pub mod control;
pub mod deck;
pub mod error;
pub mod trend;
