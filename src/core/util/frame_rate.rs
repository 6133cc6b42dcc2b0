use std::time::Duration;

const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Counts presented frames and yields a frames-per-second figure once per
/// reporting interval.
#[derive(Debug, Clone, Default)]
pub struct FrameRateCounter {
    frames: u32,
    elapsed: Duration,
    last_rate: Option<f64>,
}

impl FrameRateCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one frame that took `frame_time` since the previous one.
    /// Returns the rate when a full interval has accumulated, then restarts.
    pub fn record_frame(&mut self, frame_time: Duration) -> Option<f64> {
        self.frames += 1;
        self.elapsed += frame_time;

        if self.elapsed < REPORT_INTERVAL {
            return None;
        }

        let rate = f64::from(self.frames) / self.elapsed.as_secs_f64();
        self.frames = 0;
        self.elapsed = Duration::ZERO;
        self.last_rate = Some(rate);

        Some(rate)
    }

    #[must_use]
    pub fn last_rate(&self) -> Option<f64> {
        self.last_rate
    }
}
