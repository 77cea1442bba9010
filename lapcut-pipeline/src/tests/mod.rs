mod test_io;
mod test_pipeline;

/// Initialize logging for tests.
pub fn init() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
