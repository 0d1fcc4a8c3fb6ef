//! Logger setup for the command line tools.

use std::io::Write;

use env_logger::{Builder, Env};

/// Initialise `env_logger`, writing `level: message` lines to stderr.
///
/// `debug` raises the default filter; `RUST_LOG` still takes precedence.
pub fn init(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            writeln!(buf, "{}: {}", record.level().as_str().to_lowercase(), record.args())
        })
        .init();
}
