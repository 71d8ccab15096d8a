use std::sync::atomic::{AtomicUsize, Ordering};

// Single static counter for all figures
static NEXT_FIGURE_ID: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id() -> usize {
    NEXT_FIGURE_ID.fetch_add(1, Ordering::SeqCst)
}
