//! Process-wide route table.
//!
//! Uses `arc-swap` for lock-free reads. The table is stored once after it
//! passed validation and is read-only from then on.

use super::RouteTable;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global route table storage.
static ROUTES: LazyLock<ArcSwap<RouteTable>> =
    LazyLock::new(|| ArcSwap::from_pointee(RouteTable::default()));

/// The current route table (empty before [`init_routes`]).
#[inline]
pub fn routes() -> Arc<RouteTable> {
    ROUTES.load_full()
}

/// Publish a validated route table.
#[inline]
pub fn init_routes(table: RouteTable) -> Arc<RouteTable> {
    let arc = Arc::new(table);
    ROUTES.store(Arc::clone(&arc));
    arc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::tests::sample_table;

    #[test]
    fn test_init_then_read() {
        let published = init_routes(sample_table());
        assert_eq!(published.routes.len(), 6);
        // other tests publish the same sample
        assert_eq!(routes().len(), published.len());
    }
}
