use std::time::Duration;

use gpui::{Context, Task};

/// Window after a slide change during which navigation is ignored.
pub const TRANSITION_LOCK: Duration = Duration::from_millis(1_000);

/// Navigation direction for [`CarouselState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Result of one attempted navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The index changed and the transition lock was taken.
    Moved { from: usize, to: usize },
    /// Rejected: a transition is still in progress.
    Locked,
    /// Nothing to do (same index, out of range, or fewer than two items).
    Unchanged,
}

impl NavOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Index-and-lock state for one carousel.
///
/// Invariant: `current < count` whenever `count > 0`. Every index change
/// takes the transition lock; the owner releases it via [`unlock`] after
/// [`TRANSITION_LOCK`] elapses.
///
/// [`unlock`]: CarouselState::unlock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    count: usize,
    current: usize,
    transitioning: bool,
}

impl CarouselState {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            current: 0,
            transitioning: false,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Steps one slide in `direction`, wrapping at both ends.
    ///
    /// With fewer than two items there is nowhere to go, so the lock cycle is
    /// skipped entirely rather than locking a wrap-to-self.
    pub fn advance(&mut self, direction: Direction) -> NavOutcome {
        if self.count < 2 {
            return NavOutcome::Unchanged;
        }
        if self.transitioning {
            return NavOutcome::Locked;
        }

        let from = self.current;
        let to = match direction {
            Direction::Next => (from + 1) % self.count,
            Direction::Prev => (from + self.count - 1) % self.count,
        };

        self.current = to;
        self.transitioning = true;
        NavOutcome::Moved { from, to }
    }

    /// Jumps straight to `index` under the same lock discipline.
    pub fn jump_to(&mut self, index: usize) -> NavOutcome {
        if index >= self.count || index == self.current {
            return NavOutcome::Unchanged;
        }
        if self.transitioning {
            return NavOutcome::Locked;
        }

        let from = self.current;
        self.current = index;
        self.transitioning = true;
        NavOutcome::Moved { from, to: index }
    }

    /// Releases the transition lock.
    pub fn unlock(&mut self) {
        self.transitioning = false;
    }
}

/// Projection from a view to its embedded driver, used by the timer tasks to
/// find their way back after an await.
type DriverProjection<V> = fn(&mut V) -> &mut CarouselDriver;

/// [`CarouselState`] plus the two timers that animate it: the unlock timer
/// released [`TRANSITION_LOCK`] after each move, and the auto-advance timer
/// re-armed from every index change so the period always measures from the
/// last slide change.
///
/// Both user navigation and the timer funnel through the same guarded
/// transition, so they can never race past the lock.
pub struct CarouselDriver {
    state: CarouselState,
    period: Duration,
    unlock_task: Option<Task<()>>,
    advance_task: Option<Task<()>>,
}

impl CarouselDriver {
    pub fn new(count: usize, period: Duration) -> Self {
        Self {
            state: CarouselState::new(count),
            period,
            unlock_task: None,
            advance_task: None,
        }
    }

    pub fn count(&self) -> usize {
        self.state.count()
    }

    pub fn current(&self) -> usize {
        self.state.current()
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    /// Arms the auto-advance timer. Call once after construction and after
    /// every [`rebuild`](Self::rebuild).
    pub fn start<V: 'static>(&mut self, cx: &mut Context<V>, project: DriverProjection<V>) {
        self.arm_auto_advance(cx, project);
    }

    /// Replaces the item count (filter change), resetting to the first slide
    /// with the lock released and both timers stopped.
    pub fn rebuild(&mut self, count: usize) {
        self.state = CarouselState::new(count);
        self.unlock_task = None;
        self.advance_task = None;
    }

    /// User- or timer-initiated step.
    pub fn navigate<V: 'static>(
        &mut self,
        direction: Direction,
        cx: &mut Context<V>,
        project: DriverProjection<V>,
    ) -> NavOutcome {
        let outcome = self.state.advance(direction);
        if outcome.moved() {
            self.after_move(cx, project);
            cx.notify();
        }
        outcome
    }

    /// User-initiated jump (dot indicators).
    pub fn jump<V: 'static>(
        &mut self,
        index: usize,
        cx: &mut Context<V>,
        project: DriverProjection<V>,
    ) -> NavOutcome {
        let outcome = self.state.jump_to(index);
        if outcome.moved() {
            self.after_move(cx, project);
            cx.notify();
        }
        outcome
    }

    fn after_move<V: 'static>(&mut self, cx: &mut Context<V>, project: DriverProjection<V>) {
        self.schedule_unlock(cx, project);
        self.arm_auto_advance(cx, project);
    }

    fn schedule_unlock<V: 'static>(&mut self, cx: &mut Context<V>, project: DriverProjection<V>) {
        self.unlock_task = Some(cx.spawn(async move |this, cx| {
            cx.background_executor().timer(TRANSITION_LOCK).await;

            let _ = this.update(cx, |view, cx| {
                project(view).state.unlock();
                cx.notify();
            });
        }));
    }

    fn arm_auto_advance<V: 'static>(&mut self, cx: &mut Context<V>, project: DriverProjection<V>) {
        if self.state.count() < 2 {
            self.advance_task = None;
            return;
        }

        let period = self.period;
        self.advance_task = Some(cx.spawn(async move |this, cx| {
            cx.background_executor().timer(period).await;

            let _ = this.update(cx, |view, cx| {
                let outcome = project(view).navigate(Direction::Next, cx, project);
                if !outcome.moved() {
                    // Tick landed inside the lock window; swallow it and keep
                    // the timer running.
                    project(view).arm_auto_advance(cx, project);
                }
            });
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_at_zero_unlocked() {
        let state = CarouselState::new(4);
        assert_eq!(state.current(), 0);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn advance_wraps_in_both_directions() {
        let mut state = CarouselState::new(3);

        assert_eq!(
            state.advance(Direction::Prev),
            NavOutcome::Moved { from: 0, to: 2 }
        );
        state.unlock();

        state.jump_to(2);
        state.unlock();
        assert_eq!(
            state.advance(Direction::Next),
            NavOutcome::Moved { from: 2, to: 0 }
        );
    }

    #[test]
    fn lock_blocks_every_navigation_source() {
        let mut state = CarouselState::new(4);
        assert!(state.advance(Direction::Next).moved());

        assert_eq!(state.advance(Direction::Next), NavOutcome::Locked);
        assert_eq!(state.advance(Direction::Prev), NavOutcome::Locked);
        assert_eq!(state.jump_to(3), NavOutcome::Locked);
        assert_eq!(state.current(), 1);

        state.unlock();
        assert!(state.advance(Direction::Next).moved());
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn jump_to_current_or_out_of_range_is_a_no_op() {
        let mut state = CarouselState::new(4);
        assert_eq!(state.jump_to(0), NavOutcome::Unchanged);
        assert_eq!(state.jump_to(4), NavOutcome::Unchanged);
        assert_eq!(state.jump_to(99), NavOutcome::Unchanged);
        assert!(!state.is_transitioning());
    }

    #[test]
    fn single_item_advance_takes_no_lock() {
        let mut state = CarouselState::new(1);
        assert_eq!(state.advance(Direction::Next), NavOutcome::Unchanged);
        assert_eq!(state.advance(Direction::Prev), NavOutcome::Unchanged);
        assert!(!state.is_transitioning());
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn empty_carousel_never_moves() {
        let mut state = CarouselState::new(0);
        assert_eq!(state.advance(Direction::Next), NavOutcome::Unchanged);
        assert_eq!(state.jump_to(0), NavOutcome::Unchanged);
    }

    #[test]
    fn index_stays_in_bounds_under_arbitrary_navigation() {
        let mut state = CarouselState::new(5);

        for step in 0..1_000usize {
            match step % 4 {
                0 => {
                    state.advance(Direction::Next);
                }
                1 => {
                    state.advance(Direction::Prev);
                }
                2 => {
                    state.jump_to(step % 7);
                }
                _ => state.unlock(),
            }
            assert!(state.current() < state.count());
        }
    }

    #[test]
    fn rebuild_resets_index_and_lock() {
        let mut driver = CarouselDriver::new(6, Duration::from_secs(5));
        driver.state.advance(Direction::Next);
        assert!(driver.is_transitioning());

        driver.rebuild(2);
        assert_eq!(driver.current(), 0);
        assert_eq!(driver.count(), 2);
        assert!(!driver.is_transitioning());
    }
}
