use std::time::Duration;

/// Interval between automatic generations at `speed` steps per second
pub fn interval_for_speed(speed: u32) -> Duration {
    Duration::from_micros(1_000_000 / u64::from(speed.max(1)))
}

/// Recurring tick driven by frame time.
///
/// The owner polls it with the time elapsed since the last poll; a poll that
/// crosses the interval fires once and carries the overshoot into the next
/// interval, so the average rate matches the interval even when frames do not
/// divide it evenly. The carry is capped below one interval, so a slow frame
/// never produces a burst of ticks. Dropping the schedule cancels it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickSchedule {
    interval: Duration,
    elapsed: Duration,
}

impl TickSchedule {
    pub fn every(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
        }
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next firing
    pub fn remaining(&self) -> Duration {
        self.interval.saturating_sub(self.elapsed)
    }

    /// Account for `delta` and report whether the tick is due
    pub fn poll(&mut self, delta: Duration) -> bool {
        self.elapsed += delta;
        if self.elapsed >= self.interval {
            self.elapsed = (self.elapsed - self.interval).min(self.interval - Duration::from_nanos(1));
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_for_speed() {
        assert_eq!(interval_for_speed(1), Duration::from_secs(1));
        assert_eq!(interval_for_speed(10), Duration::from_millis(100));
        assert_eq!(interval_for_speed(30), Duration::from_micros(33_333));
        assert_eq!(interval_for_speed(0), Duration::from_secs(1));
    }

    #[test]
    fn test_fires_once_interval_elapsed() {
        let mut schedule = TickSchedule::every(Duration::from_millis(100));
        assert!(!schedule.poll(Duration::from_millis(40)));
        assert!(!schedule.poll(Duration::from_millis(40)));
        assert_eq!(schedule.remaining(), Duration::from_millis(20));
        assert!(schedule.poll(Duration::from_millis(40)));
        assert_eq!(schedule.remaining(), Duration::from_millis(80));
    }

    #[test]
    fn test_overshoot_carries_into_next_interval() {
        // 60 fps frames against a 40 ms interval
        let frame = Duration::from_micros(16_667);
        let mut schedule = TickSchedule::every(interval_for_speed(25));
        let fired = (0..60).filter(|_| schedule.poll(frame)).count();
        assert_eq!(fired, 25);
    }

    #[test]
    fn test_slow_frame_fires_single_tick() {
        let mut schedule = TickSchedule::every(Duration::from_millis(50));
        assert!(schedule.poll(Duration::from_millis(500)));
        assert!(!schedule.poll(Duration::ZERO));
        assert!(schedule.remaining() > Duration::ZERO);
    }
}
