use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// `RUST_LOG` takes precedence when set; otherwise `default_level`
/// applies. This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(default_level: log::LevelFilter) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(default_level);
        }

        builder.init();

        log::debug!("logging initialized");
    });
}
