//! Signal handling for cooperative shutdown

use std::io;

use futures::stream::StreamExt;
use signal_hook_tokio::Signals;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::state::Clock;

/// Register handlers for SIGTERM, SIGINT and SIGHUP.
///
/// Once this returns, those signals are queued on the stream instead of
/// killing the process.
pub fn termination_signals() -> io::Result<Signals> {
    Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
        signal_hook::consts::SIGHUP,
    ])
}

/// Wait for the next termination signal and return it
pub async fn shutdown_signal(signals: &mut Signals) -> io::Result<i32> {
    match signals.next().await {
        Some(signal) => {
            info!("Received signal: {}", signal);
            Ok(signal)
        }
        None => Err(io::Error::new(io::ErrorKind::Other, "signal stream closed")),
    }
}

/// Stop `clock` when a termination signal arrives, so the normal exit path
/// restores the terminal.
///
/// Handlers are in place when this returns; call it before raw mode is
/// entered so no signal can end the process with the terminal still raw.
pub fn stop_on_signal(clock: Clock) -> io::Result<JoinHandle<()>> {
    let mut signals = termination_signals()?;
    Ok(tokio::spawn(async move {
        match shutdown_signal(&mut signals).await {
            Ok(_) => clock.stop(),
            Err(e) => warn!("Signal handling stopped: {}", e),
        }
    }))
}
