use std::time::{Duration, Instant};

/// Minimum time between two frames: 1/30 s.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / 30);

/// Fixed-framerate pacing.
///
/// A frame begins with [`begin`](Self::begin); the next one may not begin
/// before `interval` has elapsed. There is no frame skipping and no catch-up:
/// a slow frame simply starts the next one late.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    frame_start: Option<Instant>,
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval, frame_start: None }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Marks the start of a frame.
    #[inline]
    pub fn begin(&mut self, now: Instant) {
        self.frame_start = Some(now);
    }

    /// Earliest instant the next frame may start. `None` before the first frame.
    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.frame_start.map(|start| start + self.interval)
    }

    /// True once the current frame's interval has fully elapsed.
    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline().is_none_or(|deadline| now >= deadline)
    }

    /// Starts a frame at `now` if the interval has elapsed. An early request
    /// leaves the current frame start untouched and returns `false`.
    pub fn try_begin(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.begin(now);
        true
    }

    /// Time still to wait before the next frame may start.
    #[inline]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
            .unwrap_or(Duration::ZERO)
    }

    /// Blocks until the interval has elapsed.
    ///
    /// `wait` is called with the remaining time and may return early (an event
    /// loop woken by input does); it is called again until the deadline has
    /// passed according to `now`.
    pub fn wait_with<N, W>(&self, mut now: N, mut wait: W)
    where
        N: FnMut() -> Instant,
        W: FnMut(Duration),
    {
        loop {
            let remaining = self.remaining(now());
            if remaining.is_zero() {
                return;
            }
            wait(remaining);
        }
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_interval_is_a_thirtieth_of_a_second() {
        let secs = FramePacer::default().interval().as_secs_f64();
        assert!((secs - 1.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn due_before_first_frame() {
        let pacer = FramePacer::default();
        assert!(pacer.is_due(Instant::now()));
        assert_eq!(pacer.remaining(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn not_due_until_interval_elapsed() {
        let mut pacer = FramePacer::new(Duration::from_millis(30));
        let t0 = Instant::now();
        pacer.begin(t0);

        assert!(!pacer.is_due(t0 + Duration::from_millis(29)));
        assert_eq!(pacer.remaining(t0 + Duration::from_millis(10)), Duration::from_millis(20));
        assert!(pacer.is_due(t0 + Duration::from_millis(30)));
        assert!(pacer.is_due(t0 + Duration::from_millis(500)));
    }

    #[test]
    fn early_redraw_is_skipped_without_moving_the_deadline() {
        let mut pacer = FramePacer::new(Duration::from_millis(30));
        let t0 = Instant::now();

        assert!(pacer.try_begin(t0));
        assert!(!pacer.try_begin(t0 + Duration::from_millis(5)));
        assert!(!pacer.try_begin(t0 + Duration::from_millis(29)));
        assert_eq!(pacer.deadline(), Some(t0 + Duration::from_millis(30)));

        assert!(pacer.try_begin(t0 + Duration::from_millis(30)));
        assert_eq!(pacer.deadline(), Some(t0 + Duration::from_millis(60)));
    }

    #[test]
    fn frames_started_by_try_begin_are_an_interval_apart() {
        let mut pacer = FramePacer::new(Duration::from_millis(30));
        let t0 = Instant::now();

        // Redraw requests every 7 ms, as a platform flooding expose events might.
        let starts: Vec<Instant> = (0..20)
            .map(|i| t0 + Duration::from_millis(7 * i))
            .filter(|&now| pacer.try_begin(now))
            .collect();

        // 0, 35, 70 and 105 ms.
        assert_eq!(starts.len(), 4);
        for pair in starts.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_millis(30));
        }
    }

    #[test]
    fn wait_with_never_returns_early() {
        let mut pacer = FramePacer::default();
        let start = Instant::now();
        pacer.begin(start);

        // Simulated render cost well below the interval.
        std::thread::sleep(Duration::from_millis(5));

        // A waiter that wakes up early, like an event arriving mid-wait.
        pacer.wait_with(Instant::now, |remaining| {
            std::thread::sleep(remaining / 3);
        });

        assert!(start.elapsed() >= DEFAULT_FRAME_INTERVAL);
    }

    #[test]
    fn wait_with_does_not_wait_after_slow_frame() {
        let mut pacer = FramePacer::new(Duration::from_millis(10));
        let t0 = Instant::now();
        pacer.begin(t0);

        let mut calls = 0;
        pacer.wait_with(|| t0 + Duration::from_millis(40), |_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn wait_with_rewaits_with_shrinking_timeouts() {
        let mut pacer = FramePacer::new(Duration::from_millis(30));
        let t0 = Instant::now();
        pacer.begin(t0);

        // Fake clock advancing 10 ms per wait.
        let mut fake_now = t0;
        let mut timeouts = Vec::new();
        let clock = std::cell::Cell::new(fake_now);
        pacer.wait_with(
            || clock.get(),
            |remaining| {
                timeouts.push(remaining);
                fake_now += Duration::from_millis(10);
                clock.set(fake_now);
            },
        );

        assert_eq!(
            timeouts,
            vec![
                Duration::from_millis(30),
                Duration::from_millis(20),
                Duration::from_millis(10),
            ]
        );
    }
}
