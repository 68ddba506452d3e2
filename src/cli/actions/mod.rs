//! What the binary does once its arguments are parsed.

pub mod server;

#[derive(Debug)]
pub enum Action {
    /// Serve the HTTP API until a shutdown signal arrives.
    Server(server::Args),
}

impl Action {
    /// # Errors
    /// Propagates the failure of the selected action.
    pub async fn execute(self) -> anyhow::Result<()> {
        match self {
            Self::Server(args) => server::execute(args).await,
        }
    }
}
