//! Build independent cars from a factory and share one showroom car.
//!
//! ```text
//! cargo run --example factory
//! ```

mod common;

use log::info;
use patternkit::factory::{Factory, SharedFactory};

#[derive(Debug, Default, Clone)]
struct Car {
    model: String,
    top_speed_kmh: u16,
    zero_to_hundred_s: f32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_logger()?;

    let cars = SharedFactory::<Car>::new();

    let mut passat = cars.create();
    passat.model = "1.6 TDI BMT".into();
    passat.top_speed_kmh = 195;
    passat.zero_to_hundred_s = 12.2;

    let mut camry = cars.create();
    camry.model = "2.5 Hybrid e-CVT".into();
    camry.top_speed_kmh = 180;
    camry.zero_to_hundred_s = 8.3;

    info!("built {passat:?}");
    info!("built {camry:?}");

    let showroom = cars.get_shared()?;
    *showroom.lock().map_err(|_| "showroom lock poisoned")? = camry;

    let again = cars.get_shared()?;
    let displayed = again.lock().map_err(|_| "showroom lock poisoned")?;
    info!(
        "showroom car: {} ({} km/h, 0-100 in {}s)",
        displayed.model, displayed.top_speed_kmh, displayed.zero_to_hundred_s
    );
    Ok(())
}
