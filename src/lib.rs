// Receipt Points - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod config;
pub mod error;
pub mod logging;
pub mod points;
pub mod receipt;
pub mod store;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use error::ReceiptError;
pub use points::{calculate_points, PointsBreakdown, PointsRule, RuleScore};
pub use receipt::{Item, RawItem, RawReceipt, Receipt};
pub use store::{InMemoryReceiptStore, ReceiptStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
