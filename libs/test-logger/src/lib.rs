//! Logger for tests.
//!
//! Initializes logging once per test binary. Output goes through the test harness capture and is filtered with
//! `RUST_LOG`, falling back to `debug` for the workspace crates.

use once_cell::sync::Lazy;

/// Forces logger initialization when dereferenced.
pub static LOGGER_INIT: Lazy<()> = Lazy::new(logger_init);

/// The filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "math_lib=debug,shamir_sharing=debug,share_reconstructor=debug";

fn logger_init() {
    #[cfg(feature = "log")]
    {
        let env = env_logger::Env::default().default_filter_or(DEFAULT_FILTER);
        // Another harness may have installed a logger already, which is fine.
        let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
    }
}

/// Initializes the test logger, can be called from every test.
pub fn init() {
    Lazy::force(&LOGGER_INIT);
}
