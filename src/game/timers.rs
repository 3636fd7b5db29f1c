use crate::consts;
use std::time::{Duration, Instant};

/// A repeating timer driven by the caller's clock.  Nothing happens on its
/// own; the event loop asks for [`Timer::deadline()`], waits until then, and
/// checks [`Timer::is_due()`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Timer {
    period: Duration,
    state: TimerState,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum TimerState {
    Stopped,
    Running { deadline: Instant },
    /// Suspended with this much time left before it would have fired
    Suspended { remaining: Duration },
}

impl Timer {
    pub(crate) fn new(period: Duration) -> Timer {
        Timer {
            period,
            state: TimerState::Stopped,
        }
    }

    /// Change the period.  Takes effect the next time the timer is started.
    pub(crate) fn set_period(&mut self, period: Duration) {
        self.period = period;
    }

    /// (Re)start the timer so that it next fires one period after `now`
    pub(crate) fn start(&mut self, now: Instant) {
        self.state = TimerState::Running {
            deadline: now + self.period,
        };
    }

    pub(crate) fn stop(&mut self) {
        self.state = TimerState::Stopped;
    }

    /// Freeze a running timer, remembering how long it had left to go
    pub(crate) fn suspend(&mut self, now: Instant) {
        if let TimerState::Running { deadline } = self.state {
            self.state = TimerState::Suspended {
                remaining: deadline.saturating_duration_since(now),
            };
        }
    }

    /// Unfreeze a suspended timer
    pub(crate) fn resume(&mut self, now: Instant) {
        if let TimerState::Suspended { remaining } = self.state {
            self.state = TimerState::Running {
                deadline: now + remaining,
            };
        }
    }

    /// When the timer will next fire, if it's running
    pub(crate) fn deadline(&self) -> Option<Instant> {
        match self.state {
            TimerState::Running { deadline } => Some(deadline),
            TimerState::Stopped | TimerState::Suspended { .. } => None,
        }
    }

    pub(crate) fn is_due(&self, now: Instant) -> bool {
        self.deadline().is_some_and(|d| d <= now)
    }
}

/// The game's two timers: one for moving the snake, one for respawning food
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Timers {
    pub(crate) tick: Timer,
    pub(crate) spawn: Timer,
}

impl Timers {
    pub(crate) fn new(tick_period: Duration) -> Timers {
        Timers {
            tick: Timer::new(tick_period),
            spawn: Timer::new(consts::FOOD_SPAWN_PERIOD),
        }
    }

    pub(crate) fn start(&mut self, now: Instant) {
        self.tick.start(now);
        self.spawn.start(now);
    }

    pub(crate) fn stop(&mut self) {
        self.tick.stop();
        self.spawn.stop();
    }

    /// The earliest time at which either timer will fire
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.tick.deadline().into_iter().chain(self.spawn.deadline()).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn fires_after_period() {
        let t0 = Instant::now();
        let mut timer = Timer::new(MS * 500);
        assert_eq!(timer.deadline(), None);
        assert!(!timer.is_due(t0 + MS * 1000));
        timer.start(t0);
        assert_eq!(timer.deadline(), Some(t0 + MS * 500));
        assert!(!timer.is_due(t0 + MS * 499));
        assert!(timer.is_due(t0 + MS * 500));
    }

    #[test]
    fn new_period_applies_on_restart() {
        let t0 = Instant::now();
        let mut timer = Timer::new(MS * 500);
        timer.start(t0);
        timer.set_period(MS * 450);
        assert_eq!(timer.deadline(), Some(t0 + MS * 500));
        timer.start(t0 + MS * 500);
        assert_eq!(timer.deadline(), Some(t0 + MS * 950));
    }

    #[test]
    fn suspend_and_resume_keep_remaining_time() {
        let t0 = Instant::now();
        let mut timer = Timer::new(MS * 1000);
        timer.start(t0);
        timer.suspend(t0 + MS * 400);
        assert_eq!(timer.deadline(), None);
        assert!(!timer.is_due(t0 + MS * 5000));
        timer.resume(t0 + MS * 5000);
        assert_eq!(timer.deadline(), Some(t0 + MS * 5600));
    }

    #[test]
    fn suspend_and_resume_are_idempotent() {
        let t0 = Instant::now();
        let mut timer = Timer::new(MS * 1000);
        timer.start(t0);
        timer.resume(t0 + MS * 100);
        assert_eq!(timer.deadline(), Some(t0 + MS * 1000));
        timer.suspend(t0 + MS * 200);
        timer.suspend(t0 + MS * 900);
        timer.resume(t0 + MS * 1000);
        assert_eq!(timer.deadline(), Some(t0 + MS * 1800));
    }

    #[test]
    fn stopped_timer_does_not_resume() {
        let t0 = Instant::now();
        let mut timer = Timer::new(MS * 1000);
        timer.start(t0);
        timer.stop();
        timer.resume(t0);
        assert_eq!(timer.deadline(), None);
    }

    #[test]
    fn next_deadline_is_earliest() {
        let t0 = Instant::now();
        let mut timers = Timers::new(MS * 500);
        assert_eq!(timers.next_deadline(), None);
        timers.start(t0);
        assert_eq!(timers.next_deadline(), Some(t0 + MS * 500));
        timers.tick.stop();
        assert_eq!(timers.next_deadline(), Some(t0 + consts::FOOD_SPAWN_PERIOD));
        timers.stop();
        assert_eq!(timers.next_deadline(), None);
    }
}
