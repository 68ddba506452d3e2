use crate::cli::{
    actions::{server::Args, Action},
    commands::{ARG_PORT, DEFAULT_PORT},
};
use anyhow::Result;

/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches
        .get_one::<u16>(ARG_PORT)
        .copied()
        .unwrap_or(DEFAULT_PORT);

    Ok(Action::Server(Args { port }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;

    #[test]
    fn handler_builds_server_action() {
        temp_env::with_vars([("HELPINGHANDS_LOG_LEVEL", None::<String>)], || {
            let matches = commands::new().get_matches_from(vec!["helpinghands", "-p", "4000"]);
            let action = handler(&matches);
            assert!(matches!(action, Ok(Action::Server(Args { port: 4000 }))));
        });
    }
}
