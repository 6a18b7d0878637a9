//! Process-wide catalog counters.
//!
//! Both counters only grow. They are shared by every [`Category`](crate::Category)
//! in the process; [`reset_counters`] exists for test isolation only.

use std::sync::atomic::{AtomicU64, Ordering};

static CATEGORY_COUNT: AtomicU64 = AtomicU64::new(0);
static PRODUCT_COUNT: AtomicU64 = AtomicU64::new(0);

/// Number of categories constructed since start (or the last reset).
pub fn category_count() -> u64 {
    CATEGORY_COUNT.load(Ordering::SeqCst)
}

/// Number of products that entered any category since start (or the last reset).
pub fn product_count() -> u64 {
    PRODUCT_COUNT.load(Ordering::SeqCst)
}

/// Zero both counters.
pub fn reset_counters() {
    CATEGORY_COUNT.store(0, Ordering::SeqCst);
    PRODUCT_COUNT.store(0, Ordering::SeqCst);
}

pub(crate) fn record_category(initial_products: usize) {
    CATEGORY_COUNT.fetch_add(1, Ordering::SeqCst);
    PRODUCT_COUNT.fetch_add(initial_products as u64, Ordering::SeqCst);
}

pub(crate) fn record_product() {
    PRODUCT_COUNT.fetch_add(1, Ordering::SeqCst);
}
