//! Network actor - runs rate requests in Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{execute_fetch, RatesClient};

/// Network actor that processes rate fetch commands
pub struct NetworkActor {
    client: RatesClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(client: RatesClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchRates { id, base, purpose }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            // Each request runs on its own; nothing fences or cancels it
                            self.active_requests.spawn(async move {
                                tracing::info!(id, base = %base, ?purpose, "Fetching rates");
                                let result = execute_fetch(&client, id, &base, purpose).await;
                                tracing::info!(id, ?purpose, "Rate request completed");
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            // In-flight results are dropped with the app
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
