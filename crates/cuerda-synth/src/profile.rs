//! The pluck sound's empirical constants.
//!
//! Every value here was tuned by ear; none is derived from a formula.
//! They are kept as a configuration value rather than hard-coded so
//! alternative profiles can be supplied without touching the engine.

/// Timing, level, and timbre constants for one pluck.
///
/// Times are milliseconds from note onset. The amplitude path is:
/// instant zero, linear rise to `peak_level` at `attack_ms`, exponential
/// decay to `sustain_level` at `decay_ms`, exponential tail toward
/// `silence_floor` at `duration_ms`. A pre-empted voice instead ramps
/// linearly from its current level to zero within `fade_ms`.
#[derive(Clone, Copy, Debug)]
pub struct PluckProfile {
    /// Linear attack time to peak.
    pub attack_ms: f32,
    /// Time of the decay knee (peak has fallen to sustain).
    pub decay_ms: f32,
    /// Total note length; the tail reaches the silence floor here.
    pub duration_ms: f32,
    /// Cut-fade window for pre-empted or stopped voices.
    pub fade_ms: f32,

    /// Envelope peak amplitude.
    pub peak_level: f32,
    /// Amplitude at the decay knee.
    pub sustain_level: f32,
    /// Level treated as silence; the tail aims here, never at zero.
    pub silence_floor: f32,

    /// Lowpass cutoff at note onset.
    pub cutoff_start_hz: f32,
    /// Lowpass cutoff floor after the brightness decay.
    pub cutoff_end_hz: f32,
    /// Fraction of the note duration over which the cutoff decays.
    pub cutoff_sweep: f32,

    /// Triangle fundamental amplitude.
    pub fundamental_level: f32,
    /// Sine overtone at 2x the fundamental.
    pub second_harmonic_level: f32,
    /// Sine overtone at 3x the fundamental.
    pub third_harmonic_level: f32,
    /// Random detune applied to the fundamental, +/- this many cents.
    pub detune_spread_cents: f32,
    /// Stereo offset; keyboard pans left by this, fretboard right.
    pub pan_offset: f32,
}

impl Default for PluckProfile {
    fn default() -> Self {
        Self {
            attack_ms: 3.0,
            decay_ms: 180.0,
            duration_ms: 900.0,
            fade_ms: 10.0,
            peak_level: 0.6,
            sustain_level: 0.24,
            silence_floor: 1e-4,
            cutoff_start_hz: 9000.0,
            cutoff_end_hz: 3200.0,
            cutoff_sweep: 0.7,
            fundamental_level: 0.55,
            second_harmonic_level: 0.22,
            third_harmonic_level: 0.14,
            detune_spread_cents: 2.0,
            pan_offset: 0.08,
        }
    }
}

impl PluckProfile {
    /// Note length in samples at a given rate.
    pub fn duration_samples(&self, sample_rate: f32) -> usize {
        (self.duration_ms * sample_rate / 1000.0) as usize
    }

    /// Cut-fade length in samples at a given rate.
    pub fn fade_samples(&self, sample_rate: f32) -> usize {
        (self.fade_ms * sample_rate / 1000.0) as usize
    }
}
