//! Audio-rate oscillators for the pluck voice.
//!
//! Only sine and triangle are needed; both are continuous waveforms, so
//! no band-limiting correction is applied.

use core::f32::consts::PI;
use libm::sinf;

/// Oscillator waveform types
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OscillatorWaveform {
    /// Sine waveform — pure fundamental tone.
    #[default]
    Sine,
    /// Triangle waveform — odd harmonics, softer than saw.
    Triangle,
}

/// Phase-accumulator oscillator.
///
/// # Example
///
/// ```rust
/// use cuerda_synth::{Oscillator, OscillatorWaveform};
///
/// let mut osc = Oscillator::new(48000.0);
/// osc.set_frequency(440.0); // A4
/// osc.set_waveform(OscillatorWaveform::Triangle);
///
/// let sample = osc.advance();
/// ```
#[derive(Debug, Clone)]
pub struct Oscillator {
    /// Current phase position [0.0, 1.0)
    phase: f32,
    /// Phase increment per sample
    phase_inc: f32,
    /// Sample rate in Hz
    sample_rate: f32,
    /// Frequency in Hz
    frequency: f32,
    /// Waveform type
    waveform: OscillatorWaveform,
}

impl Default for Oscillator {
    fn default() -> Self {
        Self::new(48000.0)
    }
}

impl Oscillator {
    /// Create a new oscillator with the given sample rate.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            phase: 0.0,
            phase_inc: 440.0 / sample_rate,
            sample_rate,
            frequency: 440.0,
            waveform: OscillatorWaveform::Sine,
        }
    }

    /// Set frequency in Hz.
    pub fn set_frequency(&mut self, freq_hz: f32) {
        self.frequency = freq_hz.max(0.0);
        self.phase_inc = self.frequency / self.sample_rate;
    }

    /// Get current frequency in Hz.
    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Set waveform type.
    pub fn set_waveform(&mut self, waveform: OscillatorWaveform) {
        self.waveform = waveform;
    }

    /// Set sample rate and recalculate phase increment.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.phase_inc = self.frequency / self.sample_rate;
    }

    /// Reset phase to 0.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Generate next sample.
    #[inline]
    pub fn advance(&mut self) -> f32 {
        let output = match self.waveform {
            OscillatorWaveform::Sine => sinf(self.phase * 2.0 * PI),
            OscillatorWaveform::Triangle => {
                if self.phase < 0.25 {
                    4.0 * self.phase
                } else if self.phase < 0.75 {
                    2.0 - 4.0 * self.phase
                } else {
                    -4.0 + 4.0 * self.phase
                }
            }
        };

        self.phase += self.phase_inc;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sine_starts_at_zero_and_is_bounded() {
        let mut osc = Oscillator::new(48000.0);
        osc.set_frequency(440.0);

        let first = osc.advance();
        assert!(first.abs() < 1e-6);

        for _ in 0..48000 {
            let s = osc.advance();
            assert!((-1.0..=1.0).contains(&s));
        }
    }

    #[test]
    fn triangle_peaks_at_quarter_phase() {
        let mut osc = Oscillator::new(4.0);
        osc.set_frequency(1.0); // 4 samples per cycle
        osc.set_waveform(OscillatorWaveform::Triangle);

        assert!((osc.advance() - 0.0).abs() < 1e-6); // phase 0
        assert!((osc.advance() - 1.0).abs() < 1e-6); // phase 0.25
        assert!((osc.advance() - 0.0).abs() < 1e-6); // phase 0.5
        assert!((osc.advance() + 1.0).abs() < 1e-6); // phase 0.75
    }

    #[test]
    fn frequency_sets_period() {
        let mut osc = Oscillator::new(48000.0);
        osc.set_frequency(480.0);

        // 100 samples per cycle; after one full cycle the sine returns
        // to its starting value
        let start = osc.advance();
        for _ in 0..99 {
            osc.advance();
        }
        let wrapped = osc.advance();
        assert!((wrapped - start).abs() < 1e-3);
    }

    #[test]
    fn reset_clears_phase() {
        let mut osc = Oscillator::new(48000.0);
        for _ in 0..17 {
            osc.advance();
        }
        osc.reset();
        assert!(osc.advance().abs() < 1e-6);
    }
}
