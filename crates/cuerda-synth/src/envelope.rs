//! The pluck's amplitude envelope.
//!
//! Four stages from onset: instant zero, linear attack to the peak,
//! exponential decay to the sustain knee, exponential tail toward the
//! silence floor. A fifth stage, [`EnvelopeStage::Cut`], is entered when a
//! voice is pre-empted: the current level is latched and ramped linearly
//! to zero within the fade window, so output is monotonically
//! non-increasing from the moment of the cut regardless of which stage
//! was interrupted.

use crate::profile::PluckProfile;
use libm::powf;

/// Envelope stages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvelopeStage {
    /// Linear rise to the peak level.
    Attack,
    /// Exponential fall from peak to the sustain knee.
    Decay,
    /// Exponential fall from sustain toward the silence floor.
    Tail,
    /// Click-free linear ramp to zero after a cut.
    Cut,
    /// Envelope has finished — output is zero.
    Done,
}

/// Percussive amplitude envelope with a click-free cut.
///
/// Exponential stages multiply by a precalculated per-sample ratio, the
/// discrete equivalent of an exponential ramp between two levels over a
/// fixed time.
///
/// # Example
///
/// ```rust
/// use cuerda_synth::{PluckEnvelope, PluckProfile};
///
/// let mut env = PluckEnvelope::new(48000.0, &PluckProfile::default());
/// for _ in 0..1000 {
///     let level = env.advance();
/// }
/// env.cut(); // latch and fade within 10 ms
/// ```
#[derive(Debug, Clone)]
pub struct PluckEnvelope {
    /// Current stage
    stage: EnvelopeStage,
    /// Current output level
    level: f32,

    // Stage targets
    peak: f32,
    sustain: f32,
    floor: f32,

    // Per-sample steps (precalculated)
    attack_step: f32,
    decay_ratio: f32,
    tail_ratio: f32,
    cut_step: f32,
    fade_samples: f32,
}

impl PluckEnvelope {
    /// Create an envelope at the given sample rate from a profile.
    pub fn new(sample_rate: f32, profile: &PluckProfile) -> Self {
        let ms = sample_rate / 1000.0;
        let attack_samples = (profile.attack_ms * ms).max(1.0);
        let decay_samples = ((profile.decay_ms - profile.attack_ms) * ms).max(1.0);
        let tail_samples = ((profile.duration_ms - profile.decay_ms) * ms).max(1.0);

        Self {
            stage: EnvelopeStage::Attack,
            level: 0.0,
            peak: profile.peak_level,
            sustain: profile.sustain_level,
            floor: profile.silence_floor,
            attack_step: profile.peak_level / attack_samples,
            decay_ratio: powf(
                profile.sustain_level / profile.peak_level,
                1.0 / decay_samples,
            ),
            tail_ratio: powf(
                profile.silence_floor / profile.sustain_level,
                1.0 / tail_samples,
            ),
            cut_step: 0.0,
            fade_samples: (profile.fade_ms * ms).max(1.0),
        }
    }

    /// Current stage.
    pub fn stage(&self) -> EnvelopeStage {
        self.stage
    }

    /// Current level without advancing.
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Whether the envelope has reached silence.
    pub fn is_finished(&self) -> bool {
        self.stage == EnvelopeStage::Done
    }

    /// Latch the current level and begin the click-free fade to zero.
    ///
    /// Idempotent: cutting an already-cut or finished envelope changes
    /// nothing.
    pub fn cut(&mut self) {
        match self.stage {
            EnvelopeStage::Cut | EnvelopeStage::Done => {}
            _ => {
                if self.level <= 0.0 {
                    self.stage = EnvelopeStage::Done;
                    self.level = 0.0;
                } else {
                    self.cut_step = self.level / self.fade_samples;
                    self.stage = EnvelopeStage::Cut;
                }
            }
        }
    }

    /// Advance one sample and return the current level.
    #[inline]
    pub fn advance(&mut self) -> f32 {
        match self.stage {
            EnvelopeStage::Attack => {
                self.level += self.attack_step;
                if self.level >= self.peak {
                    self.level = self.peak;
                    self.stage = EnvelopeStage::Decay;
                }
            }

            EnvelopeStage::Decay => {
                self.level *= self.decay_ratio;
                if self.level <= self.sustain {
                    self.level = self.sustain;
                    self.stage = EnvelopeStage::Tail;
                }
            }

            EnvelopeStage::Tail => {
                self.level *= self.tail_ratio;
                if self.level <= self.floor {
                    self.level = 0.0;
                    self.stage = EnvelopeStage::Done;
                }
            }

            EnvelopeStage::Cut => {
                self.level -= self.cut_step;
                if self.level <= 0.0 {
                    self.level = 0.0;
                    self.stage = EnvelopeStage::Done;
                }
            }

            EnvelopeStage::Done => {
                self.level = 0.0;
            }
        }

        self.level
    }
}
