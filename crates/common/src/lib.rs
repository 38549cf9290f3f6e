//! Types shared across the ordering workspace.

mod types;

pub use types::OrderId;
