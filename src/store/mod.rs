pub mod approvals;

pub use approvals::{ApprovalStore, MemoryApprovalStore};
