//! Watch mode - recompute as observations arrive, coalescing bursts
//!
//! Input lines are parsed on a reader task and pushed through a channel. The
//! debouncer only forecasts once input has been quiet for the configured
//! period; values superseded inside a burst are dropped, never computed.

use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::cli::parse_watch_line;
use crate::session::Session;

/// Hand only the last value of each burst to `handle`
///
/// A burst ends after `period` without a new value, or when the channel
/// closes. Returns how many values were handled.
pub async fn debounce<T, F>(mut rx: mpsc::Receiver<T>, period: Duration, mut handle: F) -> usize
where
    F: FnMut(T),
{
    let mut handled = 0;

    while let Some(mut pending) = rx.recv().await {
        loop {
            tokio::select! {
                next = rx.recv() => match next {
                    Some(value) => pending = value,
                    None => {
                        handle(pending);
                        return handled + 1;
                    }
                },
                _ = tokio::time::sleep(period) => {
                    handle(pending);
                    handled += 1;
                    break;
                }
            }
        }
    }

    handled
}

/// Read `<base> <prices>` lines from `reader` and emit a rendered report per settled input
pub async fn watch<R, E>(reader: R, mut session: Session, mut emit: E) -> usize
where
    R: AsyncBufRead + Unpin + Send + 'static,
    E: FnMut(String),
{
    let (tx, rx) = mpsc::channel(64);

    let reader_task = tokio::spawn(async move {
        let mut lines = reader.lines();
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    log::error!("Failed to read input: {}", e);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            match parse_watch_line(&line) {
                Ok(observations) => {
                    if tx.send(observations).await.is_err() {
                        break;
                    }
                }
                Err(e) => log::warn!("Skipping input '{}': {}", line.trim(), e),
            }
        }
    });

    let period = session.config().debounce();
    let format = session.config().format;
    let handled = debounce(rx, period, |observations| {
        match session.report(&observations).render(format) {
            Ok(text) => emit(text),
            Err(e) => log::error!("Failed to render forecast: {}", e),
        }
    })
    .await;

    if let Err(e) = reader_task.await {
        log::warn!("Input reader stopped abnormally: {}", e);
    }

    handled
}
