//! Library surface of the granary CLI: logging setup and summary rendering.

pub mod logging;
pub mod summary;
