//! CLI command implementations.

mod display;

pub mod cycles;
pub mod depth;
pub mod order;
pub mod path;
pub mod products;
pub mod reachable;
pub mod stats;
pub mod terms;
