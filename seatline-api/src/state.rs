use std::sync::Arc;
use seatline_store::AllocationStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<AllocationStore>,
}

impl AppState {
    /// Wrap the store the process built. Handlers use exactly this instance.
    pub fn new(store: Arc<AllocationStore>) -> Self {
        Self { store }
    }
}
