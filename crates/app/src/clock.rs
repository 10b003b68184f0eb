use std::time::Instant;

/// Longest frame time handed to the integrator; a stalled frame (debugger,
/// window drag) would otherwise inject a huge gravity impulse.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Source of per-frame elapsed time.
#[derive(Clone, Debug)]
pub enum FrameClock {
    /// Measured between calls to `tick`, clamped to `MAX_FRAME_DT`
    Wall { last: Option<Instant> },
    /// Constant step for headless and reproducible runs
    Fixed { dt: f32 },
}

impl FrameClock {
    pub fn wall() -> Self {
        Self::Wall { last: None }
    }

    pub fn fixed(dt: f32) -> Self {
        Self::Fixed { dt }
    }

    /// Seconds since the previous tick. The first wall-clock tick returns 0.
    pub fn tick(&mut self) -> f32 {
        match self {
            Self::Wall { last } => {
                let now = Instant::now();
                let dt = last
                    .map(|prev| now.duration_since(prev).as_secs_f32().min(MAX_FRAME_DT))
                    .unwrap_or(0.0);
                *last = Some(now);
                dt
            }
            Self::Fixed { dt } => *dt,
        }
    }
}
