use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::kernel::{ValueError, Volume};

use super::errors::StoragePlaceError;

// ============================================================================
// Storage Place - Single-Slot Compartment Owned by a Courier
// ============================================================================

/// A compartment with a fixed capacity that holds at most one order.
///
/// Storage places have no lifecycle of their own: they are created through
/// their owning [`Courier`](super::aggregate::Courier) and removed only
/// together with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoragePlace {
    id: Uuid,
    name: String,
    total_volume: Volume,
    order_id: Option<Uuid>,
}

impl StoragePlace {
    /// Creates an empty storage place. Fails when `name` is blank.
    pub fn create(
        name: impl Into<String>,
        total_volume: Volume,
    ) -> Result<Self, StoragePlaceError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValueError::Required { field: "name" }.into());
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            total_volume,
            order_id: None,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_volume(&self) -> Volume {
        self.total_volume
    }

    pub fn order_id(&self) -> Option<Uuid> {
        self.order_id
    }

    /// True when the place is free and large enough for `order_volume`.
    pub fn can_place_order(&self, order_volume: Volume) -> bool {
        self.is_empty() && self.total_volume.is_greater_or_equal(order_volume)
    }

    pub fn place_order(
        &mut self,
        order_id: Uuid,
        order_volume: Volume,
    ) -> Result<(), StoragePlaceError> {
        if !self.is_empty() {
            return Err(StoragePlaceError::NotEmpty);
        }

        if self.total_volume.is_less_than(order_volume) {
            return Err(StoragePlaceError::InsufficientCapacity {
                order_volume: order_volume.value(),
                capacity: self.total_volume.value(),
            });
        }

        self.order_id = Some(order_id);
        Ok(())
    }

    pub fn remove_order(&mut self) -> Result<(), StoragePlaceError> {
        if self.is_empty() {
            return Err(StoragePlaceError::AlreadyEmpty);
        }

        self.order_id = None;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.order_id.is_none()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn volume(value: i32) -> Volume {
        Volume::create(value).unwrap()
    }

    fn backpack() -> StoragePlace {
        StoragePlace::create("Backpack", volume(100)).unwrap()
    }

    #[test]
    fn test_create_with_valid_parameters() {
        let place = StoragePlace::create("Main Backpack", volume(100)).unwrap();

        assert_eq!(place.name(), "Main Backpack");
        assert_eq!(place.total_volume(), volume(100));
        assert!(place.is_empty());
        assert!(place.order_id().is_none());
    }

    #[test]
    fn test_create_generates_unique_ids() {
        assert_ne!(backpack().id(), backpack().id());
    }

    #[test]
    fn test_create_rejects_blank_names() {
        for invalid_name in ["", " ", "\t", "\n"] {
            let result = StoragePlace::create(invalid_name, volume(100));
            assert!(
                matches!(
                    result,
                    Err(StoragePlaceError::Validation(ValueError::Required { .. }))
                ),
                "{invalid_name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_can_place_order_when_empty_and_large_enough() {
        assert!(backpack().can_place_order(volume(80)));
    }

    #[test]
    fn test_can_place_order_capacity_boundaries() {
        for (total, order, expected) in [
            (100, 50, true),
            (100, 100, true),
            (100, 101, false),
            (50, 30, true),
            (50, 51, false),
        ] {
            let place = StoragePlace::create("Backpack", volume(total)).unwrap();
            assert_eq!(place.can_place_order(volume(order)), expected);
        }
    }

    #[test]
    fn test_cannot_place_order_when_occupied() {
        let mut place = backpack();
        place.place_order(Uuid::new_v4(), volume(50)).unwrap();

        assert!(!place.can_place_order(volume(30)));
    }

    #[test]
    fn test_place_order_successfully() {
        let mut place = backpack();
        let order_id = Uuid::new_v4();

        place.place_order(order_id, volume(80)).unwrap();

        assert!(!place.is_empty());
        assert_eq!(place.order_id(), Some(order_id));
    }

    #[test]
    fn test_place_order_fails_when_occupied() {
        let mut place = backpack();
        let first_order_id = Uuid::new_v4();
        place.place_order(first_order_id, volume(50)).unwrap();

        let result = place.place_order(Uuid::new_v4(), volume(30));

        assert!(matches!(result, Err(StoragePlaceError::NotEmpty)));
        assert_eq!(result.unwrap_err().code(), "storage_place.not_empty");
        // the first order stays put
        assert_eq!(place.order_id(), Some(first_order_id));
    }

    #[test]
    fn test_place_order_fails_when_volume_exceeds_capacity() {
        let mut place = backpack();

        let result = place.place_order(Uuid::new_v4(), volume(150));

        assert!(matches!(
            result,
            Err(StoragePlaceError::InsufficientCapacity {
                order_volume: 150,
                capacity: 100
            })
        ));
        assert!(place.is_empty());
    }

    #[test]
    fn test_remove_order_successfully() {
        let mut place = backpack();
        place.place_order(Uuid::new_v4(), volume(80)).unwrap();

        place.remove_order().unwrap();

        assert!(place.is_empty());
        assert!(place.order_id().is_none());
    }

    #[test]
    fn test_remove_order_fails_when_empty() {
        let mut place = backpack();

        let result = place.remove_order();

        assert!(matches!(result, Err(StoragePlaceError::AlreadyEmpty)));
        assert_eq!(result.unwrap_err().code(), "storage_place.already_empty");
    }

    #[test]
    fn test_remove_order_twice_fails_the_second_time() {
        let mut place = backpack();
        place.place_order(Uuid::new_v4(), volume(10)).unwrap();

        assert!(place.remove_order().is_ok());
        assert!(matches!(
            place.remove_order(),
            Err(StoragePlaceError::AlreadyEmpty)
        ));
    }
}
