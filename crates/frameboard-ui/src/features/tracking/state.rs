//! Tracking poller slot and the counters shown in the group panel.

use frameboard_api_models::AlbumTracking;

/// Group/album pair the poller refreshes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TrackingTarget {
    /// Group id.
    pub group_id: String,
    /// Album id.
    pub album_id: String,
}

impl TrackingTarget {
    /// Build a target; returns `None` when either id is empty.
    #[must_use]
    pub fn new(group_id: impl Into<String>, album_id: impl Into<String>) -> Option<Self> {
        let group_id = group_id.into();
        let album_id = album_id.into();
        if group_id.is_empty() || album_id.is_empty() {
            return None;
        }
        Some(Self { group_id, album_id })
    }
}

/// Single-slot poller holding at most one live timer handle.
///
/// `H` is the timer type; dropping it must cancel the timer (as
/// `gloo_timers::callback::Interval` does).
#[derive(Debug)]
pub struct TrackingPoller<H> {
    active: Option<(TrackingTarget, H)>,
}

impl<H> Default for TrackingPoller<H> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<H> TrackingPoller<H> {
    /// Start polling `target`, cancelling any previous timer first.
    ///
    /// `spawn` creates the timer; it runs only after the old handle is gone,
    /// so two timers never coexist.
    pub fn start(&mut self, target: TrackingTarget, spawn: impl FnOnce(&TrackingTarget) -> H) {
        self.active = None;
        let handle = spawn(&target);
        self.active = Some((target, handle));
    }

    /// Stop polling. Returns the target that was active, if any.
    pub fn stop(&mut self) -> Option<TrackingTarget> {
        self.active.take().map(|(target, _)| target)
    }

    /// Stop polling when the active target belongs to `group_id`.
    pub fn stop_for_group(&mut self, group_id: &str) -> Option<TrackingTarget> {
        if self.target().is_some_and(|target| target.group_id == group_id) {
            return self.stop();
        }
        None
    }

    /// Currently polled target.
    #[must_use]
    pub fn target(&self) -> Option<&TrackingTarget> {
        self.active.as_ref().map(|(target, _)| target)
    }

    /// True while a timer is installed.
    #[must_use]
    pub const fn is_polling(&self) -> bool {
        self.active.is_some()
    }
}

/// Tracking block of the group panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackingView {
    /// Pair being displayed.
    pub target: TrackingTarget,
    /// Last counters received, `None` until the first fetch lands.
    pub counts: Option<AlbumTracking>,
}

impl TrackingView {
    /// Text shown in the panel.
    #[must_use]
    pub fn label(&self) -> String {
        self.counts.map_or_else(
            || "Loading tracking status…".to_string(),
            |counts| {
                format!(
                    "Album Images: {} / {}",
                    counts.shown_count, counts.total_count
                )
            },
        )
    }
}
