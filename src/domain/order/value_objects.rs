use serde::{Deserialize, Serialize};

// ============================================================================
// Order Value Objects
// ============================================================================

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Created,
    Assigned,
    Completed,
}

/// Controls whether `assign` may pull a completed order back into work.
///
/// The permissive default reproduces the long-standing behavior of the
/// dispatch flow; `Strict` is for callers that treat completion as terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReassignmentPolicy {
    /// Any order may be (re)assigned regardless of its current status.
    #[default]
    Permissive,
    /// Completed orders stay completed.
    Strict,
}

// ============================================================================
// Unit Tests
// ============================================================================
