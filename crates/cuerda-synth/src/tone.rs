//! Brightness-decay lowpass filter.
//!
//! A one-pole IIR lowpass with the difference equation:
//!
//! ```text
//! y[n] = x[n] + coeff * (y[n-1] - x[n])
//! ```
//!
//! where `coeff = exp(-2π * cutoff / sample_rate)`. The cutoff itself
//! decays exponentially per sample from a bright onset value to a darker
//! floor over a fixed fraction of the note, modeling the way a plucked
//! string loses high-frequency energy fastest right after the attack.

use crate::profile::PluckProfile;
use libm::{expf, powf};

/// Flush tiny filter state to zero (denormal protection).
#[inline]
fn flush_denormal(x: f32) -> f32 {
    if x.abs() < 1e-20 { 0.0 } else { x }
}

/// One-pole lowpass with a decaying cutoff.
///
/// # Invariants
///
/// - `coeff` stays in [0, 1) for stable operation
/// - `cutoff` is monotonically non-increasing, clamped at the floor
#[derive(Debug, Clone)]
pub struct ToneFilter {
    state: f32,
    coeff: f32,
    sample_rate: f32,
    cutoff: f32,
    cutoff_floor: f32,
    /// Per-sample multiplier taking the cutoff from start to floor over
    /// the sweep window.
    cutoff_ratio: f32,
}

impl ToneFilter {
    /// Create the filter for one note at the given sample rate.
    pub fn new(sample_rate: f32, profile: &PluckProfile) -> Self {
        let sweep_samples =
            (profile.duration_ms * profile.cutoff_sweep * sample_rate / 1000.0).max(1.0);
        let mut filter = Self {
            state: 0.0,
            coeff: 0.0,
            sample_rate,
            cutoff: profile.cutoff_start_hz,
            cutoff_floor: profile.cutoff_end_hz,
            cutoff_ratio: powf(
                profile.cutoff_end_hz / profile.cutoff_start_hz,
                1.0 / sweep_samples,
            ),
        };
        filter.recalculate_coeff();
        filter
    }

    /// Current cutoff frequency in Hz.
    pub fn cutoff(&self) -> f32 {
        self.cutoff
    }

    /// Process one sample, advancing the brightness decay.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        if self.cutoff > self.cutoff_floor {
            self.cutoff *= self.cutoff_ratio;
            if self.cutoff < self.cutoff_floor {
                self.cutoff = self.cutoff_floor;
            }
            self.recalculate_coeff();
        }

        self.state = flush_denormal(input + self.coeff * (self.state - input));
        self.state
    }

    /// Reset filter state to zero (cutoff keeps its decayed position).
    pub fn reset(&mut self) {
        self.state = 0.0;
    }

    fn recalculate_coeff(&mut self) {
        self.coeff = expf(-core::f32::consts::TAU * self.cutoff / self.sample_rate);
    }
}
