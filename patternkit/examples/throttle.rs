//! Ten calls, 100 ms apart, through a 250 ms throttle.  Only the calls that
//! open a new window are printed.
//!
//! ```text
//! cargo run --example throttle
//! ```

mod common;

use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};
use patternkit::throttle::Throttle;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_logger()?;

    let started = Instant::now();
    let throttled = Throttle::new(
        |i: u32| info!("+{:>4} ms  call {i}", started.elapsed().as_millis()),
        Duration::from_millis(250),
    );

    for i in 0..10 {
        if !throttled.call(i) {
            debug!("call {i} dropped");
        }
        thread::sleep(Duration::from_millis(100));
    }
    Ok(())
}
