//! Normalization adapter. Reconciles the server's two field-naming
//! dialects into the canonical campaign model.

pub mod keys;
pub mod mapper;
pub mod resolver;

pub use mapper::*;
pub use resolver::{FieldValue, Keys, Record};
