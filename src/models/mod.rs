//! Data models
//!
//! Shared between the engine and the external persistence/API layer.
//! All IDs are `i64`.

pub mod parking_lot;
pub mod reservation;
pub mod space;

// Re-exports
pub use parking_lot::*;
pub use reservation::*;
pub use space::*;
