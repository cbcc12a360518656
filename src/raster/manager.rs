//! Background raster job execution.

use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};

use super::backend::{CairoBackend, RasterBackend};
use super::types::{RasterError, RasterJob, RasterOutcome, RasterStatus};

/// Runs raster jobs on a background task, one at a time.
///
/// Each submitted [`RasterJob`] carries an owned snapshot of the stroke data,
/// so the capture side can keep mutating its live line collection while a
/// job is in flight. Jobs run to completion; there is no cancellation.
#[derive(Clone)]
pub struct RasterManager {
    /// Channel for sending raster requests.
    request_tx: mpsc::UnboundedSender<RasterJob>,
    /// Shared status of the current job.
    status: Arc<Mutex<RasterStatus>>,
    /// Shared result of the last finished job (if any).
    last_result: Arc<Mutex<Option<RasterOutcome>>>,
}

impl RasterManager {
    /// Creates a manager driving the default cairo backend.
    ///
    /// Spawns a background task on the given runtime that serves requests
    /// until the manager (and with it the request channel) is dropped.
    pub fn new(runtime_handle: &tokio::runtime::Handle) -> Self {
        Self::with_backend(runtime_handle, CairoBackend::default())
    }

    /// Creates a manager with a custom backend (useful for testing).
    pub fn with_backend(
        runtime_handle: &tokio::runtime::Handle,
        backend: impl RasterBackend + 'static,
    ) -> Self {
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<RasterJob>();
        let status = Arc::new(Mutex::new(RasterStatus::Idle));
        let last_result = Arc::new(Mutex::new(None));
        let backend: Arc<dyn RasterBackend> = Arc::new(backend);

        let status_clone = status.clone();
        let result_clone = last_result.clone();

        runtime_handle.spawn(async move {
            while let Some(job) = request_rx.recv().await {
                log::debug!("processing raster job");
                *status_clone.lock().await = RasterStatus::InProgress;

                match backend.render(job).await {
                    Ok(stream) => {
                        log::info!("raster job finished ({} bytes)", stream.as_bytes().len());
                        *status_clone.lock().await = RasterStatus::Success;
                        *result_clone.lock().await = Some(RasterOutcome::Success(stream));
                    }
                    Err(e) => {
                        let message = e.to_string();
                        log::error!("raster job failed: {message}");
                        *status_clone.lock().await = RasterStatus::Failed(message.clone());
                        *result_clone.lock().await = Some(RasterOutcome::Failed(message));
                    }
                }
            }
        });

        Self {
            request_tx,
            status,
            last_result,
        }
    }

    /// Submits a job snapshot. Non-blocking; the render happens in the
    /// background and the result is picked up via [`Self::take_result`].
    pub fn request_render(&self, job: RasterJob) -> Result<(), RasterError> {
        self.request_tx
            .send(job)
            .map_err(|_| RasterError::ManagerStopped)
    }

    /// Current status of the most recent job.
    pub async fn status(&self) -> RasterStatus {
        self.status.lock().await.clone()
    }

    /// Takes the result of the last finished job, clearing it.
    pub async fn take_result(&self) -> Option<RasterOutcome> {
        self.last_result.lock().await.take()
    }

    /// Non-blocking variant of [`Self::take_result`].
    pub fn try_take_result(&self) -> Option<RasterOutcome> {
        self.last_result.try_lock().ok().and_then(|mut r| r.take())
    }

    /// Resets status to idle.
    pub async fn reset(&self) {
        *self.status.lock().await = RasterStatus::Idle;
    }
}

#[cfg(test)]
impl RasterManager {
    pub(crate) fn with_closed_channel_for_test() -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<RasterJob>();
        drop(rx);
        Self {
            request_tx: tx,
            status: Arc::new(Mutex::new(RasterStatus::Idle)),
            last_result: Arc::new(Mutex::new(None)),
        }
    }
}
