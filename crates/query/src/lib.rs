//! Campaign list query state and per-campaign insights loading.

#![warn(clippy::unwrap_used)]

pub mod controller;
mod debounce;
pub mod state;
pub mod summary;

#[cfg(test)]
mod testing;

pub use controller::QueryController;
pub use state::{LoadPhase, PageStats, QuerySnapshot};
pub use summary::SummaryLoader;
