pub mod metrics;
pub mod report;
pub mod store;

pub use metrics::{get_metrics, init_metrics};
pub use store::{MemoryStore, ResetSummary, Store};
