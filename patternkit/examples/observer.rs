//! Two observers reacting to a changing integer.
//!
//! ```text
//! cargo run --example observer
//! ```

mod common;

use std::cmp::Ordering;
use std::sync::{Arc, Mutex};

use log::info;
use patternkit::observer::{Observer, Subject};

/// Reports whether the value went up, down or stayed put.
struct Trend {
    name: &'static str,
    last: Mutex<&'static str>,
}

impl Observer<i64> for Trend {
    fn update(&self, state: &i64, prev_state: &i64) {
        let trend = match state.cmp(prev_state) {
            Ordering::Greater => "increase",
            Ordering::Less => "decrease",
            Ordering::Equal => "steady",
        };
        if let Ok(mut last) = self.last.lock() {
            *last = trend;
        }
        info!("{}: {trend}", self.name);
    }
}

/// Reports the relative change against the previous value.
struct PercentChange {
    name: &'static str,
}

impl PercentChange {
    fn change(state: i64, prev_state: i64) -> f64 {
        if prev_state == 0 {
            return match state.cmp(&0) {
                Ordering::Greater => 100.0,
                Ordering::Less => -100.0,
                Ordering::Equal => 0.0,
            };
        }
        let ratio = (state as f64 - prev_state as f64) / prev_state.unsigned_abs() as f64;
        (ratio * 100.0 * 100.0).round() / 100.0
    }
}

impl Observer<i64> for PercentChange {
    fn update(&self, state: &i64, prev_state: &i64) {
        info!("{}: {}%", self.name, Self::change(*state, *prev_state));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_logger()?;

    let mut subject = Subject::<i64>::new();
    subject.set_state(4);

    let trend = Arc::new(Trend {
        name: "trend observer",
        last: Mutex::new("steady"),
    });
    let percent = Arc::new(PercentChange {
        name: "percent observer",
    });
    subject.attach([
        trend.clone() as Arc<dyn Observer<i64>>,
        percent as Arc<dyn Observer<i64>>,
    ]);

    for state in [-2, -2, 4, 5, -15, -16] {
        subject.set_state(state);
    }

    let last = *trend.last.lock().map_err(|_| "trend lock poisoned")?;
    info!("final state {} ({last})", subject.state());
    Ok(())
}
