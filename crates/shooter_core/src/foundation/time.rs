//! Frame clock

use std::time::Instant;

/// Per-tick timing handed to the simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous tick
    pub delta: f64,
    /// Seconds since the clock started
    pub elapsed: f64,
}

/// Frame clock producing `dt` and cumulative elapsed time
///
/// `tick()` reads wall time; `advance()` steps by a fixed amount so headless
/// runs and tests stay deterministic.
#[derive(Debug, Clone)]
pub struct Clock {
    last_frame: Instant,
    delta: f64,
    elapsed: f64,
    frame_count: u64,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    /// Create a new clock
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta: 0.0,
            elapsed: 0.0,
            frame_count: 0,
        }
    }

    /// Update from wall time (call once per frame)
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;
        self.advance(delta)
    }

    /// Step the clock by a fixed delta
    ///
    /// Negative deltas are treated as zero.
    pub fn advance(&mut self, delta: f64) -> FrameTime {
        self.delta = delta.max(0.0);
        self.elapsed += self.delta;
        self.frame_count += 1;
        self.frame_time()
    }

    /// Timing of the most recent tick
    pub fn frame_time(&self) -> FrameTime {
        FrameTime {
            delta: self.delta,
            elapsed: self.elapsed,
        }
    }

    /// Seconds since the previous tick
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Seconds since the clock started
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of ticks so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Average ticks per second since creation
    pub fn average_fps(&self) -> f64 {
        if self.elapsed > 0.0 {
            self.frame_count as f64 / self.elapsed
        } else {
            0.0
        }
    }
}
