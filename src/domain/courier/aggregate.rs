use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use uuid::Uuid;

use crate::domain::kernel::{Location, ValueError, Volume};

use super::errors::CourierError;
use super::storage_place::StoragePlace;
use super::value_objects::Speed;

// ============================================================================
// Courier Aggregate - Business Logic
// ============================================================================

const DEFAULT_STORAGE_PLACE_NAME: &str = "Сумка";
const DEFAULT_STORAGE_PLACE_VOLUME: i32 = 10;

/// A courier with a position, a speed and an owned set of storage places.
///
/// The storage places form an insertion-ordered list that is never empty: the
/// default bag is allocated at construction and places can only be added, so
/// the order of the list doubles as the tie-breaking order for storage
/// selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Courier {
    id: Uuid,
    name: String,
    speed: Speed,
    location: Location,
    storage_places: Vec<StoragePlace>,
}

impl Courier {
    /// Creates a courier with the default bag. Fails when `name` is blank.
    pub fn create(
        name: impl Into<String>,
        speed: Speed,
        location: Location,
    ) -> Result<Self, CourierError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValueError::Required { field: "name" }.into());
        }

        let default_bag = StoragePlace::create(
            DEFAULT_STORAGE_PLACE_NAME,
            Volume::create(DEFAULT_STORAGE_PLACE_VOLUME)?,
        )?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            speed,
            location,
            storage_places: vec![default_bag],
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn storage_places(&self) -> &[StoragePlace] {
        &self.storage_places
    }

    /// Adds a storage place; the list is left unchanged when creation fails.
    pub fn add_storage_place(
        &mut self,
        name: impl Into<String>,
        volume: Volume,
    ) -> Result<(), CourierError> {
        let place = StoragePlace::create(name, volume)?;
        self.storage_places.push(place);
        Ok(())
    }

    /// True when at least one owned storage place can take the order.
    pub fn can_place_order(&self, order_volume: Volume) -> bool {
        self.storage_places
            .iter()
            .any(|place| place.can_place_order(order_volume))
    }

    /// Stores the order in the tightest eligible place.
    ///
    /// Among all places that can take the order the one with the smallest
    /// total volume wins; on equal capacity the earliest place keeps
    /// priority, so only a strictly smaller candidate replaces the current
    /// pick.
    pub fn take_order(&mut self, order_id: Uuid, order_volume: Volume) -> Result<(), CourierError> {
        let mut selected: Option<usize> = None;
        for (index, place) in self.storage_places.iter().enumerate() {
            if !place.can_place_order(order_volume) {
                continue;
            }
            let tighter = match selected {
                Some(current) => place
                    .total_volume()
                    .is_less_than(self.storage_places[current].total_volume()),
                None => true,
            };
            if tighter {
                selected = Some(index);
            }
        }

        let Some(index) = selected else {
            return Err(CourierError::CannotTakeOrder {
                order_volume: order_volume.value(),
            });
        };

        self.storage_places[index].place_order(order_id, order_volume)?;
        debug!(
            courier_id = %self.id,
            %order_id,
            storage_place = self.storage_places[index].name(),
            "order taken"
        );
        Ok(())
    }

    /// Hands the order over and frees the storage place that held it.
    pub fn complete_order(&mut self, order_id: Uuid) -> Result<(), CourierError> {
        let Some(place) = self
            .storage_places
            .iter_mut()
            .find(|place| place.order_id() == Some(order_id))
        else {
            return Err(CourierError::CannotCompleteOrder { order_id });
        };

        place.remove_order()?;
        debug!(courier_id = %self.id, %order_id, "order handed over");
        Ok(())
    }

    /// Number of ticks needed to reach `target` at this courier's speed.
    pub fn calculate_delivery_time(&self, target: Location) -> i32 {
        (self.location.distance_to(target) as u32).div_ceil(self.speed.value() as u32) as i32
    }

    /// Advances the location one tick towards `target`.
    ///
    /// The per-tick budget of `speed` grid units is spent on the X gap first;
    /// whatever remains closes the Y gap. The courier never overshoots, and
    /// moving while already at the target is a successful no-op.
    pub fn move_towards(&mut self, target: Location) -> Result<(), CourierError> {
        let dif_x = target.x() - self.location.x();
        let dif_y = target.y() - self.location.y();
        let mut cruising_range = self.speed.value();

        let step_x = dif_x.clamp(-cruising_range, cruising_range);
        cruising_range -= step_x.abs();
        let step_y = dif_y.clamp(-cruising_range, cruising_range);

        self.location = Location::create(self.location.x() + step_x, self.location.y() + step_y)?;
        trace!(
            courier_id = %self.id,
            x = self.location.x(),
            y = self.location.y(),
            "moved"
        );
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
