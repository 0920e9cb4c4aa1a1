use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};

const LEVEL_VAR: &str = "PATTERNKIT_LOG";

/// Log to stderr at the level named by `PATTERNKIT_LOG` (default `info`).
pub fn init_logger() -> Result<(), Box<dyn std::error::Error>> {
    let level = std::env::var(LEVEL_VAR)
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S%.3f)} {h({l:<5})} {t} - {m}{n}",
        )))
        .build();

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("stderr", Box::new(stderr)),
        )
        .build(Root::builder().appender("stderr").build(LevelFilter::Trace))?;

    log4rs::init_config(config)?;
    Ok(())
}
