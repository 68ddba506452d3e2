use crate::cli::{actions::Action, commands, dispatch, telemetry};
use anyhow::Result;
use tracing::Level;

/// `-v` count to tracing level; `None` keeps the default (error).
fn verbosity_level(count: u8) -> Option<Level> {
    let index = usize::from(count).checked_sub(1)?;
    [Level::WARN, Level::INFO, Level::DEBUG]
        .get(index)
        .copied()
        .or(Some(Level::TRACE))
}

/// Parse arguments, install logging and pick the action to run.
///
/// # Errors
///
/// Returns an error if telemetry cannot be initialized or dispatch fails.
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    let count = matches
        .get_one::<u8>(commands::logging::ARG_VERBOSITY)
        .copied()
        .unwrap_or_default();
    telemetry::init(verbosity_level(count))?;

    dispatch::handler(&matches)
}
