//! One sounding note.
//!
//! A voice is three oscillators (a slightly detuned triangle fundamental
//! plus sine overtones at 2x and 3x), mixed at fixed levels, shaped by the
//! amplitude envelope, darkened by the tone filter, and placed in the
//! stereo field with a constant-power pan law.

use crate::envelope::PluckEnvelope;
use crate::oscillator::{Oscillator, OscillatorWaveform};
use crate::profile::PluckProfile;
use crate::tone::ToneFilter;
use cuerda_theory::Pitch;
use libm::{cosf, exp2f, sinf};

/// Convert a detune in cents to a frequency ratio.
///
/// 100 cents is one equal-tempered semitone, so the ratio is
/// `2^(cents/1200)`.
#[inline]
pub fn cents_to_ratio(cents: f32) -> f32 {
    exp2f(cents / 1200.0)
}

/// Which surface triggered the note.
///
/// The two surfaces render the same pluck; they differ only in which side
/// of center the voice sits, so simultaneous-feeling interactions on both
/// read as two sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timbre {
    /// Piano-style keyboard: panned slightly left.
    Keyboard,
    /// Guitar-style fretboard: panned slightly right.
    Fretboard,
}

impl Timbre {
    /// Pan position in [-1, 1] for this surface.
    pub fn pan(self, profile: &PluckProfile) -> f32 {
        match self {
            Timbre::Keyboard => -profile.pan_offset,
            Timbre::Fretboard => profile.pan_offset,
        }
    }
}

/// A single pluck from strike to silence.
#[derive(Debug, Clone)]
pub struct PluckVoice {
    fundamental: Oscillator,
    second: Oscillator,
    third: Oscillator,
    envelope: PluckEnvelope,
    filter: ToneFilter,

    fundamental_level: f32,
    second_level: f32,
    third_level: f32,
    pan_left: f32,
    pan_right: f32,

    pitch: Pitch,
    generation: u64,
}

impl PluckVoice {
    /// Start a voice at the given fundamental frequency.
    ///
    /// `detune_cents` shifts only the fundamental; the overtones stay
    /// locked to the nominal frequency so repeated strikes of the same
    /// note shimmer slightly against each other.
    pub fn new(
        sample_rate: f32,
        frequency_hz: f32,
        detune_cents: f32,
        pitch: Pitch,
        timbre: Timbre,
        profile: &PluckProfile,
        generation: u64,
    ) -> Self {
        let mut fundamental = Oscillator::new(sample_rate);
        fundamental.set_waveform(OscillatorWaveform::Triangle);
        fundamental.set_frequency(frequency_hz * cents_to_ratio(detune_cents));

        let mut second = Oscillator::new(sample_rate);
        second.set_frequency(frequency_hz * 2.0);

        let mut third = Oscillator::new(sample_rate);
        third.set_frequency(frequency_hz * 3.0);

        // Constant-power pan: angle 0 is hard left, PI/2 hard right.
        let pan = timbre.pan(profile).clamp(-1.0, 1.0);
        let angle = (pan + 1.0) * core::f32::consts::FRAC_PI_4;

        Self {
            fundamental,
            second,
            third,
            envelope: PluckEnvelope::new(sample_rate, profile),
            filter: ToneFilter::new(sample_rate, profile),
            fundamental_level: profile.fundamental_level,
            second_level: profile.second_harmonic_level,
            third_level: profile.third_harmonic_level,
            pan_left: cosf(angle),
            pan_right: sinf(angle),
            pitch,
            generation,
        }
    }

    /// The note this voice is sounding.
    pub fn pitch(&self) -> Pitch {
        self.pitch
    }

    /// Strike counter assigned by the engine, for ordering voices.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current envelope level.
    pub fn level(&self) -> f32 {
        self.envelope.level()
    }

    /// Whether the voice has decayed or faded to silence.
    pub fn is_finished(&self) -> bool {
        self.envelope.is_finished()
    }

    /// Begin the click-free fade to silence. Idempotent.
    pub fn cut(&mut self) {
        self.envelope.cut();
    }

    /// Render one stereo sample.
    #[inline]
    pub fn process_stereo(&mut self) -> (f32, f32) {
        if self.is_finished() {
            return (0.0, 0.0);
        }

        let mix = self.fundamental.advance() * self.fundamental_level
            + self.second.advance() * self.second_level
            + self.third.advance() * self.third_level;

        let shaped = self.filter.process(mix * self.envelope.advance());
        (shaped * self.pan_left, shaped * self.pan_right)
    }
}
