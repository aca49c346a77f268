use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Pick the log level from the global flags
pub fn level_for(debug: bool, quiet: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    }
}

/// Initialize logging with the level implied by the flags
pub fn init_logging(debug: bool, quiet: bool) -> LevelFilter {
    let log_level = level_for(debug, quiet);

    if let Err(e) = SimpleLogger::new().with_level(log_level).init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    log_level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(false, false), LevelFilter::Info);
        assert_eq!(level_for(false, true), LevelFilter::Error);
        // Debug wins over quiet
        assert_eq!(level_for(true, true), LevelFilter::Debug);
    }
}
