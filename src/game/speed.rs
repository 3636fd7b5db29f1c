use crate::consts;
use std::time::Duration;

/// Time between movements of the snake, kept within
/// [`MIN_TICK`][consts::MIN_TICK]..=[`MAX_TICK`][consts::MAX_TICK]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct TickInterval(Duration);

impl TickInterval {
    pub(crate) const MIN: TickInterval = TickInterval(consts::MIN_TICK);
    pub(crate) const MAX: TickInterval = TickInterval(consts::MAX_TICK);

    fn clamped(d: Duration) -> TickInterval {
        TickInterval(d).clamp(TickInterval::MIN, TickInterval::MAX)
    }

    /// Interval for a freshly-started game
    pub(crate) fn initial() -> TickInterval {
        TickInterval::clamped(consts::INITIAL_TICK)
    }

    /// Interval a level starts at: one step faster than the initial interval
    /// for every level reached
    pub(crate) fn for_level(level: u32) -> TickInterval {
        TickInterval::clamped(
            consts::INITIAL_TICK.saturating_sub(consts::SPEED_STEP.saturating_mul(level)),
        )
    }

    #[must_use]
    pub(crate) fn faster(self) -> TickInterval {
        TickInterval::clamped(self.0.saturating_sub(consts::SPEED_STEP))
    }

    #[must_use]
    pub(crate) fn slower(self) -> TickInterval {
        TickInterval::clamped(self.0.saturating_add(consts::SPEED_STEP))
    }

    pub(crate) fn get(self) -> Duration {
        self.0
    }
}
