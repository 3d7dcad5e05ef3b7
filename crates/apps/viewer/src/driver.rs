//! Async glue between the deterministic controller core and real IO.
//!
//! One task owns the controller; fetches run on spawned tasks and report
//! back over a channel, so completion order is whatever the network gives
//! us and the controller's sequence filter does the reconciliation.

use std::sync::Arc;
use std::time::{Duration, Instant};

use controller::{RequestSeq, ViewportPointsController};
use foundation::Viewport;
use points::{FetchError, GeoPoint, PointsSource};
use tokio::sync::mpsc;
use tracing::debug;

/// Runs the debounce/fetch loop until the viewport stream ends and every
/// issued fetch has completed.
pub async fn drive<F>(
    ctl: &mut ViewportPointsController,
    source: Arc<dyn PointsSource>,
    mut viewports: mpsc::Receiver<Viewport>,
    mut on_update: F,
) where
    F: FnMut(&ViewportPointsController),
{
    let started = Instant::now();
    let now_ms = move || started.elapsed().as_millis() as u64;

    let (done_tx, mut done_rx) =
        mpsc::channel::<(RequestSeq, Result<Vec<GeoPoint>, FetchError>)>(8);

    let mut open = true;
    let mut in_flight = 0usize;

    loop {
        if let Some(cmd) = ctl.poll(now_ms()) {
            debug!(seq = cmd.seq.0, "issuing points fetch");
            in_flight += 1;
            let source = Arc::clone(&source);
            let done = done_tx.clone();
            tokio::spawn(async move {
                let result = source.fetch_points(cmd.viewport.bounds).await;
                let _ = done.send((cmd.seq, result)).await;
            });
            on_update(ctl);
            continue;
        }

        if !open && in_flight == 0 && ctl.next_fire_at().is_none() {
            break;
        }

        // Sleep to the debounce deadline when one is pending; otherwise just
        // wake occasionally so the exit condition is re-checked.
        let tick = ctl
            .next_fire_at()
            .map(|deadline| deadline.saturating_sub(now_ms()).max(1))
            .unwrap_or(50);

        tokio::select! {
            maybe_vp = viewports.recv(), if open => match maybe_vp {
                Some(vp) => ctl.on_viewport_changed(vp, now_ms()),
                None => open = false,
            },
            completion = done_rx.recv() => {
                if let Some((seq, result)) = completion {
                    in_flight -= 1;
                    ctl.on_fetch_complete(seq, result);
                    on_update(ctl);
                }
            }
            _ = tokio::time::sleep(Duration::from_millis(tick)) => {}
        }
    }
}
