use instant::Instant;

/// Timing of one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the clock started; feeds the `time` uniform.
    pub elapsed_sec: f32,
    pub dt_sec: f32,
    pub frame_index: u64,
}

/// Monotonic frame clock anchored at construction.
///
/// `tick_at` takes an explicit timestamp so tests and the integrator can run
/// on synthetic time; `now_ms` is the wall-clock source the front ends use.
#[derive(Clone, Debug)]
pub struct FrameClock {
    start: Instant,
    last_ms: f64,
    frames: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            last_ms: 0.0,
            frames: 0,
        }
    }

    /// Milliseconds since construction.
    pub fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// Latest timestamp seen by `tick_at`.
    #[inline]
    pub fn last_ms(&self) -> f64 {
        self.last_ms
    }

    /// Advance to `now_ms`. Earlier timestamps are treated as "no time passed".
    pub fn tick_at(&mut self, now_ms: f64) -> FrameTime {
        let now = now_ms.max(self.last_ms);
        let dt = now - self.last_ms;
        self.last_ms = now;
        let t = FrameTime {
            elapsed_sec: (now / 1000.0) as f32,
            dt_sec: (dt / 1000.0) as f32,
            frame_index: self.frames,
        };
        self.frames += 1;
        t
    }
}
