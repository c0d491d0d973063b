#[cfg(test)]
mod iteration_tests;

#[cfg(test)]
fn init_logger() {
    use std::sync::Once;

    use flexi_logger::Logger;

    static LOGGER_INIT: Once = Once::new();
    LOGGER_INIT.call_once(|| {
        if let Ok(logger) = Logger::try_with_str("trace") {
            logger.start().ok(); // Another test binary may already own the logger
        }
    });
}
