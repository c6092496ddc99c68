use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::domain::kernel::{Location, Volume};

use super::errors::OrderError;
use super::value_objects::{OrderStatus, ReassignmentPolicy};

// ============================================================================
// Order Aggregate - Business Logic
// ============================================================================

/// A delivery request with a destination, a volume and a status state
/// machine.
///
/// The identity is supplied by the caller: it is the basket id handed over
/// by the upstream basket context, never generated here. The courier
/// reference is an identifier only; the two aggregates are coordinated by an
/// external dispatcher and never hold each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: Uuid,
    location: Location,
    volume: Volume,
    status: OrderStatus,
    courier_id: Option<Uuid>,
}

impl Order {
    pub fn new(basket_id: Uuid, location: Location, volume: Volume) -> Self {
        Self {
            id: basket_id,
            location,
            volume,
            status: OrderStatus::Created,
            courier_id: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn courier_id(&self) -> Option<Uuid> {
        self.courier_id
    }

    /// Assigns the order to a courier under the permissive default policy.
    ///
    /// Reassignment overwrites the previous courier at any prior status,
    /// including `Completed`.
    pub fn assign(&mut self, courier_id: Uuid) -> Result<(), OrderError> {
        self.assign_with_policy(courier_id, ReassignmentPolicy::default())
    }

    pub fn assign_with_policy(
        &mut self,
        courier_id: Uuid,
        policy: ReassignmentPolicy,
    ) -> Result<(), OrderError> {
        if policy == ReassignmentPolicy::Strict && self.status == OrderStatus::Completed {
            return Err(OrderError::AlreadyCompleted);
        }

        self.courier_id = Some(courier_id);
        self.status = OrderStatus::Assigned;
        debug!(order_id = %self.id, %courier_id, "order assigned");
        Ok(())
    }

    /// Finishes an assigned order; fails for any other status.
    pub fn complete(&mut self) -> Result<(), OrderError> {
        if self.status != OrderStatus::Assigned {
            return Err(OrderError::NotAssigned);
        }

        self.status = OrderStatus::Completed;
        debug!(order_id = %self.id, "order completed");
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
