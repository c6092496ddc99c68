use serde::{Deserialize, Serialize};

use crate::domain::kernel::ValueError;

// ============================================================================
// Courier Value Objects
// ============================================================================

/// How many grid units a courier covers per tick.
///
/// Deliberately a separate type from [`Volume`](crate::domain::kernel::Volume)
/// even though both wrap a positive integer; the two are never interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Speed(i32);

impl Speed {
    pub const MIN_VALUE: i32 = 1;

    pub fn create(value: i32) -> Result<Self, ValueError> {
        if value < Self::MIN_VALUE {
            return Err(ValueError::BelowMinimum {
                field: "value",
                value,
                min: Self::MIN_VALUE,
            });
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn is_less_than(&self, other: Speed) -> bool {
        self.0 < other.0
    }

    pub fn is_greater_than(&self, other: Speed) -> bool {
        self.0 > other.0
    }

    pub fn is_less_or_equal(&self, other: Speed) -> bool {
        self.0 <= other.0
    }

    pub fn is_greater_or_equal(&self, other: Speed) -> bool {
        self.0 >= other.0
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
