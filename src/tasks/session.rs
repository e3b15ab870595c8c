//! One interactive run: tick loop and key listener side by side

use tracing::{info, warn};

use super::{run_clock, spawn_key_listener};
use crate::{
    error::Result,
    state::{Clock, Outcome},
    terminal::{KeySource, RenderSink},
};

/// Run the clock with a concurrent key listener until the clock stops.
///
/// Returns only after the listener has finished, so a `RawTerminal` key
/// source has already restored the terminal by then.
pub async fn run_session<S, K>(clock: &Clock, sink: S, keys: K) -> Result<Outcome>
where
    S: RenderSink,
    K: KeySource + Send + 'static,
{
    let listener = spawn_key_listener(clock.clone(), keys);

    let outcome = run_clock(clock, sink).await;

    let listened = match listener.await {
        Ok(result) => result,
        Err(e) => {
            warn!("Key listener task did not finish cleanly: {}", e);
            Ok(())
        }
    };

    let outcome = outcome?;
    // A listener failure stops the clock; report the cause, not a plain stop
    listened?;

    info!("Session finished: {:?}", outcome);
    Ok(outcome)
}
