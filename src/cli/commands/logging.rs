use clap::{builder::ValueParser, Arg, ArgAction, Command};

pub const ARG_VERBOSITY: &str = "verbosity";

/// Level names in `-v` count order: no flag is `error`, `-vvvv` is `trace`.
const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Accept either a level name (any case) or its `-v` count.
fn parse_log_level(level: &str) -> Result<u8, String> {
    let by_count = level
        .parse::<usize>()
        .ok()
        .filter(|count| *count < LEVELS.len());
    let by_name = || {
        LEVELS
            .iter()
            .position(|name| name.eq_ignore_ascii_case(level.trim()))
    };

    by_count
        .or_else(by_name)
        .and_then(|index| u8::try_from(index).ok())
        .ok_or_else(|| {
            format!(
                "invalid log level '{level}', expected one of {} or 0-{}",
                LEVELS.join(", "),
                LEVELS.len() - 1
            )
        })
}

#[must_use]
pub fn log_level_parser() -> ValueParser {
    ValueParser::from(parse_log_level)
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Increase verbosity: -v warn, -vv info, -vvv debug, -vvvv trace (default: error)")
            .env("HELPINGHANDS_LOG_LEVEL")
            .action(ArgAction::Count)
            .value_parser(log_level_parser()),
    )
}
