use std::time::Duration;

/// Begin auto-rotating `slide_count` slides every `interval`.
///
/// Returns `None` when there is nothing to rotate (fewer than two slides) or
/// the interval is zero.
pub fn start_rotation(slide_count: usize, interval: Duration) -> Option<RotationHandle> {
    if slide_count < 2 || interval.is_zero() {
        return None;
    }
    tracing::debug!(slide_count, interval_ms = interval.as_millis() as u64, "hero rotation started");
    Some(RotationHandle {
        slide_count,
        interval,
        current: 0,
        pending: Duration::ZERO,
        running: true,
    })
}

/// Live hero rotation. Stops on [`RotationHandle::stop`] or drop.
#[derive(Debug)]
pub struct RotationHandle {
    slide_count: usize,
    interval: Duration,
    current: usize,
    pending: Duration,
    running: bool,
}

impl RotationHandle {
    /// Index of the visible slide.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of slides rotated over.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Time between automatic advances.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// `false` once stopped.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Let `elapsed` pass; moves forward one slide per whole interval, wrapping.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        if !self.running {
            return self.current;
        }
        let pending = self.pending.as_nanos() + elapsed.as_nanos();
        let interval = self.interval.as_nanos();
        let ticks = pending / interval;
        self.pending = Duration::from_nanos((pending % interval) as u64);
        self.current = ((self.current as u128 + ticks) % self.slide_count as u128) as usize;
        self.current
    }

    /// Manual selection (dot or arrow); restarts the interval.
    pub fn go_to(&mut self, index: usize) -> usize {
        self.current = index % self.slide_count;
        self.pending = Duration::ZERO;
        self.current
    }

    /// Manual step forward.
    pub fn next(&mut self) -> usize {
        self.go_to(self.current + 1)
    }

    /// Manual step back.
    pub fn previous(&mut self) -> usize {
        self.go_to(self.current + self.slide_count - 1)
    }

    /// Stop rotating; the visible slide stays put.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            tracing::debug!(current = self.current, "hero rotation stopped");
        }
    }
}

impl Drop for RotationHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/rotation.rs"]
mod tests;
