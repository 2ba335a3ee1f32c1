//! Background task forwarding position readings while paired.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use super::types::GeoReading;

/// An active position watch. Stopping (or dropping) it ends the task.
pub struct LocationWatch {
    task: JoinHandle<()>,
}

impl LocationWatch {
    /// Forward every reading from `readings` to `forward` until stopped or
    /// the stream closes. Must be called inside a tokio runtime.
    pub fn spawn<F>(mut readings: mpsc::UnboundedReceiver<GeoReading>, forward: F) -> Self
    where
        F: Fn(GeoReading) + Send + 'static,
    {
        let task = tokio::spawn(async move {
            while let Some(reading) = readings.recv().await {
                forward(reading);
            }
            debug!("position stream closed");
        });
        Self { task }
    }

    pub fn stop(self) {
        drop(self);
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for LocationWatch {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::GeoPosition;

    #[tokio::test]
    async fn forwards_until_stopped() {
        let (tx, rx) = mpsc::unbounded_channel();
        let (out_tx, mut out_rx) = mpsc::unbounded_channel();
        let watch = LocationWatch::spawn(rx, move |r| {
            let _ = out_tx.send(r);
        });

        tx.send(GeoReading::Fix(GeoPosition::new(1.0, 2.0))).unwrap();
        assert_eq!(
            out_rx.recv().await,
            Some(GeoReading::Fix(GeoPosition::new(1.0, 2.0)))
        );

        watch.stop();
        // The forwarding closure (and its sender) is dropped with the task.
        assert_eq!(out_rx.recv().await, None);
    }

    #[tokio::test]
    async fn finishes_when_stream_closes() {
        let (tx, rx) = mpsc::unbounded_channel::<GeoReading>();
        let watch = LocationWatch::spawn(rx, |_| {});
        drop(tx);
        for _ in 0..50 {
            if watch.is_finished() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(watch.is_finished());
    }
}
