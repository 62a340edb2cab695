//! Archiving Scheduler
//!
//! Owns the sweep timer. One sweep finds every active space whose window
//! has closed and archives each in turn; the timer fires a sweep every
//! `ArchiveConfig::sweep_interval` with the first tick immediate.
//!
//! Concurrency rules:
//! - At most one timer loop exists; `start` refuses a second.
//! - At most one sweep runs at a time. The timer skips its tick when the
//!   previous sweep is still going; a manual `run_sweep` waits its turn.
//! - A per-space failure or timeout is logged and counted, never aborts
//!   the rest of the sweep.
//! - `stop` only prevents future fires; an in-flight sweep completes.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{Mutex, Notify};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::application::archive_space::{
    ArchiveSpaceInput, ArchiveSpaceOutput, ArchiveSpaceUseCase,
};
use crate::application::config::ArchiveConfig;
use crate::domain::repository::{PostRepository, SessionRepository, SpaceRepository};
use crate::error::{SpaceError, SpaceResult};
use kernel::id::{SpaceId, UserId};

/// Outcome of one sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Spaces archived this sweep
    pub archived: usize,
    /// Spaces that failed or timed out
    pub failed: usize,
}

struct TimerHandle {
    shutdown: Arc<Notify>,
    task: JoinHandle<()>,
}

/// Archiving scheduler
pub struct ArchiveScheduler<S, P, N>
where
    S: SpaceRepository,
    P: PostRepository,
    N: SessionRepository,
{
    archive: ArchiveSpaceUseCase<S, P, N>,
    space_repo: Arc<S>,
    config: ArchiveConfig,
    /// Held for the duration of a sweep
    sweep_guard: Mutex<()>,
    /// Present while the timer loop is running
    timer: Mutex<Option<TimerHandle>>,
}

impl<S, P, N> ArchiveScheduler<S, P, N>
where
    S: SpaceRepository + Sync + 'static,
    P: PostRepository + Sync + 'static,
    N: SessionRepository + Sync + 'static,
{
    pub fn new(
        space_repo: Arc<S>,
        post_repo: Arc<P>,
        session_repo: Arc<N>,
        config: ArchiveConfig,
    ) -> Self {
        Self {
            archive: ArchiveSpaceUseCase::new(Arc::clone(&space_repo), post_repo, session_repo),
            space_repo,
            config,
            sweep_guard: Mutex::new(()),
            timer: Mutex::new(None),
        }
    }

    /// Spawn the timer loop; returns false (and changes nothing) when the
    /// scheduler is already running
    pub async fn start(self: &Arc<Self>) -> bool {
        let mut timer = self.timer.lock().await;
        if timer.is_some() {
            tracing::warn!("Archive scheduler already running, start ignored");
            return false;
        }

        let shutdown = Arc::new(Notify::new());
        let scheduler = Arc::clone(self);
        let stop = Arc::clone(&shutdown);
        let interval = self.config.sweep_interval;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = ticker.tick() => scheduler.tick().await,
                    _ = stop.notified() => break,
                }
            }
            tracing::info!("Archive scheduler loop exited");
        });

        *timer = Some(TimerHandle { shutdown, task });
        tracing::info!(
            interval_secs = interval.as_secs(),
            "Archive scheduler started"
        );
        true
    }

    /// Signal shutdown and wait for the timer loop to exit
    pub async fn stop(&self) {
        let handle = self.timer.lock().await.take();
        let Some(handle) = handle else {
            tracing::debug!("Archive scheduler not running, stop ignored");
            return;
        };

        handle.shutdown.notify_one();
        if let Err(e) = handle.task.await {
            tracing::error!(error = %e, "Archive scheduler task join failed");
        }
        tracing::info!("Archive scheduler stopped");
    }

    /// Whether the timer loop is currently running
    pub async fn is_running(&self) -> bool {
        self.timer.lock().await.is_some()
    }

    /// Run one sweep now; waits if a timer-driven sweep is in progress
    pub async fn run_sweep(&self) -> SpaceResult<SweepReport> {
        let _guard = self.sweep_guard.lock().await;
        self.sweep().await
    }

    /// Archive one space on demand, bounded by the per-space timeout
    pub async fn archive_space(
        &self,
        space_id: SpaceId,
        actor_id: Option<UserId>,
        force: bool,
    ) -> SpaceResult<ArchiveSpaceOutput> {
        self.archive_one(space_id, actor_id, force).await
    }

    /// Timer body: skip the tick when the previous sweep still holds the guard
    async fn tick(&self) {
        let Ok(_guard) = self.sweep_guard.try_lock() else {
            tracing::warn!("Previous sweep still running, skipping tick");
            return;
        };
        if let Err(e) = self.sweep().await {
            tracing::error!(error = %e, "Sweep failed");
        }
    }

    /// One pass over the expired spaces. Callers hold the sweep guard.
    async fn sweep(&self) -> SpaceResult<SweepReport> {
        let now = Utc::now();
        let expired = self.space_repo.find_expired_active(now).await?;

        if expired.is_empty() {
            tracing::debug!("Sweep found no expired spaces");
            return Ok(SweepReport::default());
        }

        tracing::info!(count = expired.len(), "Sweep found expired spaces");

        let mut report = SweepReport::default();
        for space_id in expired {
            match self.archive_one(space_id, None, false).await {
                Ok(_) => report.archived += 1,
                Err(SpaceError::AlreadyArchived) => {
                    // Raced with a manual archive between discovery and here
                    tracing::debug!(space_id = %space_id, "Space already archived, skipping");
                }
                Err(e) => {
                    report.failed += 1;
                    tracing::error!(space_id = %space_id, error = %e, "Failed to archive space");
                }
            }
        }

        tracing::info!(
            archived = report.archived,
            failed = report.failed,
            "Sweep complete"
        );
        Ok(report)
    }

    async fn archive_one(
        &self,
        space_id: SpaceId,
        actor_id: Option<UserId>,
        force: bool,
    ) -> SpaceResult<ArchiveSpaceOutput> {
        let archive = self.archive.execute(ArchiveSpaceInput {
            space_id,
            actor_id,
            force,
        });
        match tokio::time::timeout(self.config.space_timeout, archive).await {
            Ok(result) => result,
            Err(_) => Err(SpaceError::ArchiveTimeout),
        }
    }
}
