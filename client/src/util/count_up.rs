//! Count-up animation for the landing page stat counters.
//!
//! A one-shot, fixed-length interpolation from zero to each target using an
//! exponential ease-out. The component drives it with a timer and calls
//! [`CountUp::tick`] once per frame; this module owns all of the math.

#[cfg(test)]
#[path = "count_up_test.rs"]
mod count_up_test;

/// Total animation length.
pub const DURATION_MS: u32 = 2_000;

/// Target frame rate.
pub const FRAMES_PER_SECOND: u32 = 60;

/// Milliseconds between frames, rounded for the timer API.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn frame_interval_ms() -> u32 {
    (1_000.0 / f64::from(FRAMES_PER_SECOND)).round() as u32
}

/// Number of frames in one run: `round(duration / frame_length)`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn total_frames() -> u32 {
    let frame_len = 1_000.0 / f64::from(FRAMES_PER_SECOND);
    (f64::from(DURATION_MS) / frame_len).round() as u32
}

/// `1 - 2^(-10x)`, pinned to exactly 1 at `x >= 1`.
pub fn ease_out_expo(x: f64) -> f64 {
    if x >= 1.0 { 1.0 } else { 1.0 - 2f64.powf(-10.0 * x) }
}

/// Interpolation state for a row of counters.
#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    targets: Vec<u64>,
    values: Vec<u64>,
    frame: u32,
    total_frames: u32,
    has_animated: bool,
    running: bool,
}

impl CountUp {
    pub fn new(targets: Vec<u64>) -> Self {
        Self {
            values: vec![0; targets.len()],
            targets,
            frame: 0,
            total_frames: total_frames(),
            has_animated: false,
            running: false,
        }
    }

    /// Start the animation on the first intersection.
    ///
    /// Returns `false` (and does nothing) if it has already been triggered.
    pub fn trigger(&mut self) -> bool {
        if self.has_animated {
            return false;
        }
        self.has_animated = true;
        self.running = true;
        true
    }

    /// Advance one frame. Returns whether the animation is still running.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.frame += 1;
        let eased = ease_out_expo(f64::from(self.frame) / f64::from(self.total_frames));
        for (value, target) in self.values.iter_mut().zip(&self.targets) {
            *value = interpolate(*target, eased);
        }
        if self.frame >= self.total_frames {
            self.values.clone_from(&self.targets);
            self.running = false;
        }
        self.running
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    pub fn value(&self, index: usize) -> u64 {
        self.values.get(index).copied().unwrap_or(0)
    }

    #[cfg(test)]
    pub(crate) fn frame(&self) -> u32 {
        self.frame
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn has_animated(&self) -> bool {
        self.has_animated
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn interpolate(target: u64, eased: f64) -> u64 {
    ((target as f64) * eased).floor() as u64
}

/// Render `value` with thousands separators and a suffix (`12,500+`).
pub fn format_stat(value: u64, suffix: &str) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + suffix.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push_str(suffix);
    out
}
