//! One-shot background fetch
//!
//! The fetch runs on its own thread with a current-thread tokio runtime and
//! hands its single result back over a channel, so the UI loop never blocks.

use std::sync::mpsc::{self, Receiver, TryRecvError};

use super::series::SeriesPair;
use super::source::{ChartSource, FetchError};

pub type FetchResult = Result<SeriesPair, FetchError>;

/// Pending result of a single fetch
#[derive(Debug)]
pub struct DataLoader {
    rx: Option<Receiver<FetchResult>>,
}

impl DataLoader {
    /// Start fetching from `source` in the background
    pub fn spawn(source: ChartSource) -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || {
            let result = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime.block_on(source.fetch()),
                Err(e) => {
                    log::error!("Failed to start fetch runtime: {}", e);
                    Err(FetchError::Network(e.to_string()))
                }
            };

            // Receiver gone means the app already quit
            let _ = tx.send(result);
        });

        Self { rx: Some(rx) }
    }

    /// Loader fed by an existing channel
    pub fn from_receiver(rx: Receiver<FetchResult>) -> Self {
        Self { rx: Some(rx) }
    }

    /// Loader whose result is already known
    pub fn ready(result: FetchResult) -> Self {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(result);
        Self { rx: Some(rx) }
    }

    /// Take the result if it has arrived. Yields `Some` at most once.
    pub fn poll(&mut self) -> Option<FetchResult> {
        let rx = self.rx.as_ref()?;

        match rx.try_recv() {
            Ok(result) => {
                self.rx = None;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.rx = None;
                log::error!("Chart data loader exited without a result");
                Some(Err(FetchError::Network(
                    "loader exited without a result".to_string(),
                )))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.rx.is_some()
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
