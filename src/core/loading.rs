//! # Loading Simulator
//!
//! Fakes a network fetch so the grid shows skeleton tiles for a moment
//! before the real tiles appear. A tokio task sleeps for a fixed delay and
//! then sends `Action::LoadingFinished` into the event loop's channel.
//!
//! The timer runs once per `LoadingTimer`. Dropping the timer aborts the task,
//! so a UI torn down mid-delay leaves nothing running behind it.

use log::{debug, warn};
use std::sync::mpsc;
use std::time::Duration;

use crate::core::action::Action;

pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(800);

/// Placeholder tiles rendered while loading.
pub const SKELETON_TILES: usize = 4;

pub struct LoadingTimer {
    handle: tokio::task::AbortHandle,
}

impl LoadingTimer {
    /// Start the timer. Must be called from within a tokio runtime.
    pub fn start(delay: Duration, tx: mpsc::Sender<Action>) -> Self {
        debug!("Loading timer started ({}ms)", delay.as_millis());
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(Action::LoadingFinished).is_err() {
                warn!("Failed to send LoadingFinished: receiver dropped");
            }
        });
        Self {
            handle: task.abort_handle(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for LoadingTimer {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            debug!("Loading timer aborted before firing");
        }
        self.handle.abort();
    }
}
