use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::config::Config;
use crate::depth_chart::{self, DepthChart};
use crate::error::FetchError;
use crate::state::{Delta, ProviderCommand};

/// Runs depth chart fetches on a worker thread. Each `FetchDepthChart` logs the
/// attempt, then yields exactly one `SetDepthChart` or `FetchFailed` delta.
pub fn spawn_provider(
    tx: Sender<Delta>,
    cmd_rx: Receiver<ProviderCommand>,
    config: Config,
) -> JoinHandle<()> {
    spawn_provider_with(tx, cmd_rx, move || depth_chart::fetch_depth_chart(&config))
}

/// Same as [`spawn_provider`] with a caller-supplied loader.
pub fn spawn_provider_with<F>(
    tx: Sender<Delta>,
    cmd_rx: Receiver<ProviderCommand>,
    mut load: F,
) -> JoinHandle<()>
where
    F: FnMut() -> Result<DepthChart, FetchError> + Send + 'static,
{
    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                ProviderCommand::FetchDepthChart => {
                    if tx
                        .send(Delta::Log("[INFO] Fetching depth charts".to_string()))
                        .is_err()
                    {
                        break;
                    }
                    let delta = match load() {
                        Ok(chart) => Delta::SetDepthChart(chart),
                        Err(err) => Delta::FetchFailed(err.to_string()),
                    };
                    if tx.send(delta).is_err() {
                        break;
                    }
                }
                ProviderCommand::Shutdown => break,
            }
        }
    })
}
