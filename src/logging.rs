//! Logger initialization shared by the binaries.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::io::Write;

/// Install `env_logger` on stderr.
///
/// Filters come from `RUST_LOG`, falling back to `default` when it is unset.
/// An explicit `level` (from a CLI flag) takes precedence over both. Stdout is
/// left to the data.
pub fn init_logger(level: Option<LevelFilter>, default: LevelFilter) -> Result<(), log::SetLoggerError> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(default.as_str()));
    if let Some(level) = level {
        builder.filter_level(level);
    }

    builder.target(Target::Stderr).format(|buf, record| {
        writeln!(
            buf,
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        )
    });

    // try_init so repeated initialization in tests does not panic
    builder.try_init()
}
