pub mod allocation;
pub mod app_config;
pub mod error;

pub use allocation::AllocationStore;
pub use error::{StoreError, StoreResult};
