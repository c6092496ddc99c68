use uuid::Uuid;

use crate::domain::kernel::ValueError;

// ============================================================================
// Courier Business Rule Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoragePlaceError {
    #[error("cannot place order in a storage place that already contains an order")]
    NotEmpty,

    #[error("order volume {order_volume} exceeds storage place capacity {capacity}")]
    InsufficientCapacity { order_volume: i32, capacity: i32 },

    #[error("cannot remove order from an empty storage place")]
    AlreadyEmpty,

    #[error(transparent)]
    Validation(#[from] ValueError),
}

impl StoragePlaceError {
    /// Stable machine-readable code; validation failures keep their own code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotEmpty => "storage_place.not_empty",
            Self::InsufficientCapacity { .. } => "storage_place.insufficient_capacity",
            Self::AlreadyEmpty => "storage_place.already_empty",
            Self::Validation(inner) => inner.code(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CourierError {
    #[error("cannot take order with volume {order_volume}: no suitable storage place")]
    CannotTakeOrder { order_volume: i32 },

    #[error("order {order_id} is not found in any storage place")]
    CannotCompleteOrder { order_id: Uuid },

    #[error(transparent)]
    Storage(#[from] StoragePlaceError),

    #[error(transparent)]
    Validation(#[from] ValueError),
}

impl CourierError {
    /// Stable machine-readable code; forwarded sub-errors keep their own code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::CannotTakeOrder { .. } => "courier.cannot.take.order",
            Self::CannotCompleteOrder { .. } => "courier.cannot.complete.order",
            Self::Storage(inner) => inner.code(),
            Self::Validation(inner) => inner.code(),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
