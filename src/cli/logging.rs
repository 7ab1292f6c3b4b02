use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Initialize logging with the default level
pub fn init_logging() -> LevelFilter {
    let log_level = LevelFilter::Info;

    SimpleLogger::new()
        .with_level(log_level)
        .init()
        .unwrap();

    log_level
}
