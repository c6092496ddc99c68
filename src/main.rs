use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

use delivery_core::{Courier, Location, Order, Speed, Volume};

// ============================================================================
// Delivery Lifecycle Demo
// ============================================================================
//
// Plays the external dispatcher for one courier and one order: take the
// order, assign it, tick the courier towards the destination, hand it over.
//
// ============================================================================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=trace cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,delivery_core=debug")),
        )
        .init();

    tracing::info!("Starting delivery dispatch demo");

    let mut courier = Courier::create("Ivan", Speed::create(2)?, Location::create(1, 1)?)?;
    courier.add_storage_place("Backpack", Volume::create(20)?)?;
    tracing::info!(courier_id = %courier.id(), "Courier registered");

    let basket_id = Uuid::new_v4();
    let mut order = Order::new(basket_id, Location::create(5, 5)?, Volume::create(8)?);
    tracing::info!(order_id = %order.id(), "Order accepted from basket");

    if !courier.can_place_order(order.volume()) {
        tracing::warn!(order_id = %order.id(), "No storage place fits the order");
        return Ok(());
    }

    courier.take_order(order.id(), order.volume())?;
    order.assign(courier.id())?;

    let ticks = courier.calculate_delivery_time(order.location());
    tracing::info!(ticks, "Courier dispatched");

    for tick in 1..=ticks {
        courier.move_towards(order.location())?;
        tracing::info!(
            tick,
            x = courier.location().x(),
            y = courier.location().y(),
            "Tick"
        );
    }

    courier.complete_order(order.id())?;
    order.complete()?;

    tracing::info!(order_id = %order.id(), status = ?order.status(), "Delivery finished");
    Ok(())
}
