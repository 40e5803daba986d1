use parking_lot::RwLock;
use std::collections::BTreeSet;

/// Which reviews a manager has curated for public display.
///
/// Every id starts out not approved. Both mutations are idempotent.
pub trait ApprovalStore: Send + Sync {
    fn approve(&self, id: i64);
    fn unapprove(&self, id: i64);
    fn is_approved(&self, id: i64) -> bool;
    fn list_approved(&self) -> BTreeSet<i64>;

    /// Applies `approved` to `id`.
    fn set_approved(&self, id: i64, approved: bool) {
        if approved {
            self.approve(id);
        } else {
            self.unapprove(id);
        }
    }
}

/// Process-lifetime store. Lost on restart.
#[derive(Debug, Default)]
pub struct MemoryApprovalStore {
    ids: RwLock<BTreeSet<i64>>,
}

impl MemoryApprovalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ApprovalStore for MemoryApprovalStore {
    fn approve(&self, id: i64) {
        self.ids.write().insert(id);
    }

    fn unapprove(&self, id: i64) {
        self.ids.write().remove(&id);
    }

    fn is_approved(&self, id: i64) -> bool {
        self.ids.read().contains(&id)
    }

    fn list_approved(&self) -> BTreeSet<i64> {
        self.ids.read().clone()
    }
}
