//! Background profile lookup.
//!
//! Each lookup runs on its own thread. The worker builds its own blocking
//! client, performs one request and reports through a oneshot channel, so the
//! caller can poll, await or block on the result.

use crate::github::GitHubClient;
use crate::profile::ProfileSummary;
use crate::{EditorConfig, Error, Result};
use std::thread;
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Handle to one in-flight profile fetch.
///
/// Dropping the handle does not stop the request; its result is simply
/// discarded. There is no cancellation.
pub struct ProfileLookup {
    username: String,
    rx: oneshot::Receiver<Result<ProfileSummary>>,
}

impl ProfileLookup {
    pub fn spawn(config: EditorConfig, username: impl Into<String>) -> Self {
        let username = username.into();
        let (tx, rx) = oneshot::channel();

        let worker_name = username.clone();
        thread::spawn(move || {
            let res = GitHubClient::new(&config).and_then(|client| client.fetch(&worker_name));
            if let Err(e) = &res {
                log::error!("Error fetching GitHub user data for {}: {}", worker_name, e);
            }
            // Receiver may already be gone
            let _ = tx.send(res);
        });

        Self { username, rx }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// `None` while the request is still in flight.
    pub fn try_result(&mut self) -> Option<Result<ProfileSummary>> {
        match self.rx.try_recv() {
            Ok(res) => Some(res),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(worker_gone())),
        }
    }

    pub async fn wait(self) -> Result<ProfileSummary> {
        self.rx.await.map_err(|_| worker_gone())?
    }

    /// Block the current thread until the lookup finishes.
    ///
    /// # Panics
    ///
    /// Panics when called from an async execution context. Use [`wait`](Self::wait)
    /// there, or call this from `tokio::task::spawn_blocking`.
    pub fn wait_blocking(self) -> Result<ProfileSummary> {
        self.rx.blocking_recv().map_err(|_| worker_gone())?
    }
}

fn worker_gone() -> Error {
    Error::Failure("lookup worker exited without a result".into())
}
