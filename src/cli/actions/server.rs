use crate::{api, cli::telemetry};
use anyhow::Result;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn execute(args: Args) -> Result<()> {
    log_startup_args(&args);

    let result = api::new(args.port, api::fixtures::Fixtures::default()).await;

    telemetry::shutdown_tracer();

    result
}

fn log_startup_args(args: &Args) {
    let entries = [
        ("listen", format!("tcp:{}", args.port)),
        ("docs", format!("http://localhost:{}/api-docs", args.port)),
    ];
    info!("{}", startup_message("Startup configuration", &entries));
}

fn startup_message(title: &str, entries: &[(&str, String)]) -> String {
    let max_key_len = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let lines: Vec<String> = entries
        .iter()
        .map(|(key, value)| {
            let padding = " ".repeat(max_key_len.saturating_sub(key.len()));
            format!("  {key}:{padding} {value}")
        })
        .collect();
    format!("{}\n\n{title}:\n{}", banner(), lines.join("\n"))
}

fn banner() -> String {
    BANNER.replace(
        "{VERSION}",
        &format!(
            " - {} - {}",
            env!("CARGO_PKG_VERSION"),
            short_commit(crate::GIT_COMMIT_HASH)
        ),
    )
}

fn short_commit(hash: &str) -> String {
    let trimmed = hash.trim();
    if trimmed.len() > 7 {
        trimmed[..7].to_string()
    } else {
        trimmed.to_string()
    }
}

const BANNER: &str = r"
   _   _
  ( \_/ )
   \   /   H E L P I N G H A N D S {VERSION}
    \_/";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_commit_truncates_long_hashes() {
        assert_eq!(short_commit("0123456789abcdef"), "0123456");
        assert_eq!(short_commit(" abc "), "abc");
    }

    #[test]
    fn startup_message_aligns_keys() {
        let entries = [("listen", "tcp:3000".to_string()), ("docs", "x".to_string())];
        let message = startup_message("Startup configuration", &entries);
        assert!(message.contains("H E L P I N G H A N D S"));
        assert!(message.contains("\n  listen: tcp:3000"));
        assert!(message.contains("\n  docs:   x"));
    }
}
