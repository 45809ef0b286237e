//! # Viewport Reveal
//!
//! One-shot "reveal on view" bookkeeping. Every marked element starts
//! [`RevealState::Pending`]; the first time at least `threshold` of its area is
//! visible it becomes [`RevealState::Shown`], gets its revealed styling, and is
//! no longer watched. Scrolling it back out never hides it again.
//!
//! The viewport itself is an external capability ([`ViewportWatch`]) and the
//! revealed styling is applied through a [`RevealSurface`]. When the runtime
//! has no way to observe the viewport, [`RevealSession::start_immediate`]
//! reveals everything up front instead of leaving content hidden forever.

use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Shown,
}

/// Delivers visibility changes for watched targets.
///
/// Implementations report crossings by calling [`RevealSession::on_crossing`].
pub trait ViewportWatch<T> {
    fn watch(&mut self, target: &T, threshold: f64) -> Result<()>;
    fn unwatch(&mut self, target: &T);
    /// Stop every outstanding watch.
    fn disconnect(&mut self);
}

/// Applies the revealed styling to a target.
pub trait RevealSurface<T> {
    fn show(&mut self, target: &T) -> Result<()>;
}

/// Targets and their reveal states
#[derive(Debug)]
pub struct RevealSet<T> {
    entries: Vec<(T, RevealState)>,
    threshold: f64,
}

impl<T: PartialEq> RevealSet<T> {
    pub fn new(targets: impl IntoIterator<Item = T>, threshold: f64) -> Self {
        Self::from_states(
            targets.into_iter().map(|target| (target, RevealState::Pending)),
            threshold,
        )
    }

    /// Build from targets whose state is already known (e.g. revealed before a remount).
    pub fn from_states(entries: impl IntoIterator<Item = (T, RevealState)>, threshold: f64) -> Self {
        Self {
            entries: entries.into_iter().collect(),
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn state(&self, target: &T) -> Option<RevealState> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == target)
            .map(|(_, state)| *state)
    }

    pub fn pending(&self) -> impl Iterator<Item = &T> {
        self.entries
            .iter()
            .filter(|(_, state)| *state == RevealState::Pending)
            .map(|(target, _)| target)
    }

    pub fn all_shown(&self) -> bool {
        self.pending().next().is_none()
    }

    /// Record a visibility report. Returns the target if this report revealed it.
    ///
    /// Reports for unknown or already shown targets, and reports below the
    /// threshold, change nothing.
    pub fn record(&mut self, target: &T, visible_ratio: f64) -> Option<&T> {
        if visible_ratio < self.threshold {
            return None;
        }
        let (target, state) = self
            .entries
            .iter_mut()
            .find(|(candidate, _)| candidate == target)?;
        if *state == RevealState::Shown {
            return None;
        }
        *state = RevealState::Shown;
        Some(&*target)
    }

    /// Mark every pending target shown and return them.
    pub fn reveal_all(&mut self) -> Vec<&T> {
        self.entries
            .iter_mut()
            .filter(|(_, state)| *state == RevealState::Pending)
            .map(|(target, state)| {
                *state = RevealState::Shown;
                &*target
            })
            .collect()
    }
}

/// Intermediate observer thresholds between 0 and the reveal threshold
const THRESHOLD_STEPS: u32 = 8;

/// Ratios at which the viewport should report a target.
///
/// Reporting below the reveal threshold lets [`visible_share`] catch targets
/// too tall to ever reach it by intersection ratio alone.
pub fn observer_thresholds(threshold: f64) -> Vec<f64> {
    (0..=THRESHOLD_STEPS)
        .map(|step| threshold * f64::from(step) / f64::from(THRESHOLD_STEPS))
        .collect()
}

/// Visibility of a target as compared against the reveal threshold.
///
/// The larger of its intersection ratio and the share of the viewport height
/// it covers. A section taller than `viewport / threshold` never reaches the
/// threshold by ratio, but does once it fills that much of the screen.
pub fn visible_share(intersection_ratio: f64, visible_height: f64, viewport_height: f64) -> f64 {
    if viewport_height > 0.0 && visible_height.is_finite() {
        intersection_ratio.max(visible_height / viewport_height)
    } else {
        intersection_ratio
    }
}

/// A running reveal: targets, the viewport capability and the surface.
pub struct RevealSession<T, W, S> {
    set: RevealSet<T>,
    watcher: Option<W>,
    surface: S,
}

impl<T, W, S> RevealSession<T, W, S>
where
    T: PartialEq,
    W: ViewportWatch<T>,
    S: RevealSurface<T>,
{
    /// Watch every pending target. With no targets this is a no-op.
    pub fn start(set: RevealSet<T>, mut watcher: W, surface: S) -> Self {
        let threshold = set.threshold();
        let mut watched = 0;
        for target in set.pending() {
            match watcher.watch(target, threshold) {
                Ok(()) => watched += 1,
                Err(err) => tracing::warn!("Could not watch reveal target: {}", err),
            }
        }
        tracing::debug!("Watching {} of {} reveal targets", watched, set.len());
        Self {
            set,
            watcher: Some(watcher),
            surface,
        }
    }

    /// Reveal every target right away; used when the viewport cannot be observed.
    pub fn start_immediate(mut set: RevealSet<T>, mut surface: S) -> Self {
        let revealed = set.reveal_all();
        let count = revealed.len();
        for target in revealed {
            if let Err(err) = surface.show(target) {
                tracing::warn!("Could not reveal target: {}", err);
            }
        }
        tracing::debug!("Revealed {} targets without viewport observation", count);
        Self {
            set,
            watcher: None,
            surface,
        }
    }

    /// Handle a visibility report. Returns `true` when it revealed the target.
    pub fn on_crossing(&mut self, target: &T, visible_ratio: f64) -> bool {
        let Some(target) = self.set.record(target, visible_ratio) else {
            return false;
        };
        if let Err(err) = self.surface.show(target) {
            tracing::warn!("Could not reveal target: {}", err);
        }
        if let Some(watcher) = self.watcher.as_mut() {
            watcher.unwatch(target);
        }
        true
    }

    /// Stop all outstanding watches. Idempotent.
    pub fn teardown(&mut self) {
        if let Some(mut watcher) = self.watcher.take() {
            watcher.disconnect();
        }
    }

    pub fn is_active(&self) -> bool {
        self.watcher.is_some()
    }

    pub fn set(&self) -> &RevealSet<T> {
        &self.set
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    const THRESHOLD: f64 = 0.16;

    #[derive(Default)]
    struct FakeViewport {
        watched: BTreeSet<u32>,
        disconnects: Rc<Cell<u32>>,
    }

    impl ViewportWatch<u32> for FakeViewport {
        fn watch(&mut self, target: &u32, threshold: f64) -> Result<()> {
            assert_eq!(threshold, THRESHOLD);
            self.watched.insert(*target);
            Ok(())
        }

        fn unwatch(&mut self, target: &u32) {
            self.watched.remove(target);
        }

        fn disconnect(&mut self) {
            self.watched.clear();
            self.disconnects.set(self.disconnects.get() + 1);
        }
    }

    #[derive(Default)]
    struct FakeSurface {
        shown: Vec<u32>,
    }

    impl RevealSurface<u32> for FakeSurface {
        fn show(&mut self, target: &u32) -> Result<()> {
            self.shown.push(*target);
            Ok(())
        }
    }

    fn session(targets: &[u32]) -> RevealSession<u32, FakeViewport, FakeSurface> {
        RevealSession::start(
            RevealSet::new(targets.iter().copied(), THRESHOLD),
            FakeViewport::default(),
            FakeSurface::default(),
        )
    }

    #[test]
    fn test_start_watches_pending_targets_only() {
        let set = RevealSet::from_states(
            [(1, RevealState::Pending), (2, RevealState::Shown), (3, RevealState::Pending)],
            THRESHOLD,
        );
        let session = RevealSession::start(set, FakeViewport::default(), FakeSurface::default());
        let watched: Vec<u32> = session.watcher.as_ref().unwrap().watched.iter().copied().collect();
        assert_eq!(watched, vec![1, 3]);
    }

    #[test]
    fn test_reveal_at_threshold() {
        let mut session = session(&[7]);
        assert!(!session.on_crossing(&7, 0.10));
        assert_eq!(session.set().state(&7), Some(RevealState::Pending));

        assert!(session.on_crossing(&7, 0.16));
        assert_eq!(session.set().state(&7), Some(RevealState::Shown));
        assert_eq!(session.surface().shown, vec![7]);
        assert!(session.watcher.as_ref().unwrap().watched.is_empty());
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut session = session(&[1, 2]);
        assert!(session.on_crossing(&1, 0.5));
        // out, in, out, in again
        for ratio in [0.0, 0.9, 0.05, 1.0] {
            assert!(!session.on_crossing(&1, ratio));
            assert_eq!(session.set().state(&1), Some(RevealState::Shown));
        }
        assert_eq!(session.surface().shown, vec![1]);
        assert_eq!(session.set().state(&2), Some(RevealState::Pending));
    }

    #[test]
    fn test_unknown_target_is_ignored() {
        let mut session = session(&[1]);
        assert!(!session.on_crossing(&99, 1.0));
        assert!(session.surface().shown.is_empty());
    }

    #[test]
    fn test_no_targets_is_noop() {
        let mut session = session(&[]);
        assert!(session.set().is_empty());
        assert!(session.set().all_shown());
        session.teardown();
        assert!(!session.is_active());
    }

    #[test]
    fn test_teardown_disconnects_once() {
        let disconnects = Rc::new(Cell::new(0));
        let viewport = FakeViewport {
            disconnects: Rc::clone(&disconnects),
            ..FakeViewport::default()
        };
        let mut session = RevealSession::start(
            RevealSet::new([1u32, 2, 3], THRESHOLD),
            viewport,
            FakeSurface::default(),
        );
        session.teardown();
        session.teardown();
        assert_eq!(disconnects.get(), 1);
        assert!(!session.is_active());

        // A report already in flight still cannot revert anything
        assert!(session.on_crossing(&2, 0.3));
        assert_eq!(session.set().state(&2), Some(RevealState::Shown));
    }

    #[test]
    fn test_immediate_fallback_reveals_everything() {
        let set = RevealSet::from_states(
            [(1, RevealState::Pending), (2, RevealState::Shown), (3, RevealState::Pending)],
            THRESHOLD,
        );
        let session: RevealSession<u32, FakeViewport, FakeSurface> =
            RevealSession::start_immediate(set, FakeSurface::default());
        assert!(session.set().all_shown());
        assert_eq!(session.surface().shown, vec![1, 3]);
        assert!(!session.is_active());
    }

    #[test]
    fn test_observer_thresholds_step_up_to_threshold() {
        let steps = observer_thresholds(THRESHOLD);
        assert_eq!(steps.len(), 9);
        assert_eq!(steps[0], 0.0);
        assert!((steps[1] - 0.02).abs() < 1e-12);
        assert_eq!(*steps.last().unwrap(), THRESHOLD);
    }

    #[test]
    fn test_visible_share_without_viewport_is_ratio() {
        assert_eq!(visible_share(0.1, 300.0, 0.0), 0.1);
        assert_eq!(visible_share(0.1, f64::NAN, 600.0), 0.1);
    }

    #[test]
    fn test_section_taller_than_reveal_reach_still_reveals() {
        // 4000px section on a 568px viewport: the ratio tops out near 0.142
        let viewport = 568.0;
        let section = 4000.0;
        let mut session = session(&[5]);

        let max_ratio = viewport / section;
        assert!(!session.on_crossing(&5, max_ratio));

        // First reported step (0.02 of the section) already covers 80px
        let ratio = observer_thresholds(THRESHOLD)[1];
        let share = visible_share(ratio, ratio * section, viewport);
        assert!(share < THRESHOLD);

        let ratio = observer_thresholds(THRESHOLD)[2];
        let share = visible_share(ratio, ratio * section, viewport);
        assert!(session.on_crossing(&5, share));
        assert_eq!(session.set().state(&5), Some(RevealState::Shown));
    }
}
