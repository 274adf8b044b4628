//! Splitting a themed catalog slice into regular and promotional pools.

use hunt_core::types::CatalogSnapshot;

/// Regular and promotional item ids, each in catalog order.
#[derive(Debug, Clone, Default)]
pub struct CandidatePools {
    pub regular: Vec<String>,
    pub promo: Vec<String>,
}

/// Partition a catalog into regular and promotional pools. Every id
/// lands in exactly one pool; ordering follows the snapshot's
/// identifier order.
pub fn partition(catalog: &CatalogSnapshot) -> CandidatePools {
    let mut pools = CandidatePools::default();
    for (id, item) in catalog.iter() {
        if item.is_promo {
            pools.promo.push(id.clone());
        } else {
            pools.regular.push(id.clone());
        }
    }
    pools
}
