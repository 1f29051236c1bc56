//! Testing utilities for the stepcrypt engines
pub mod vectors;

/// Install the test logger once; later calls are ignored
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
