//! Monophonic voice engine.
//!
//! At most one voice is in the sounding slot. Striking while a voice is
//! sounding cuts it into one of two fade slots (where it completes its
//! short ramp to silence) and installs the new voice immediately, so
//! retriggers never click and never stack into a chord.

use crate::profile::PluckProfile;
use crate::voice::{PluckVoice, Timbre};
use cuerda_theory::{Pitch, PitchClass, TheoryError, frequency};

/// Errors from the voice engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynthError {
    /// The requested note falls outside the playable octave range.
    UnsupportedPitch {
        /// Requested pitch class.
        class: PitchClass,
        /// Requested octave.
        octave: i32,
    },
}

impl core::fmt::Display for SynthError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SynthError::UnsupportedPitch { class, octave } => {
                write!(f, "unsupported pitch: {class}{octave}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SynthError {}

/// Number of simultaneously fading voices retained during retriggers.
///
/// Two is enough: a fade lasts 10 ms, so a third overlapping retrigger
/// within one fade window would have to arrive faster than any pointer
/// interaction produces. If both slots are somehow full, the quieter
/// fade is dropped.
const FADE_SLOTS: usize = 2;

enum EngineState {
    Ready,
    Sounding(PluckVoice),
}

/// Monophonic pluck engine with bounded retrigger cross-fade.
///
/// All methods are allocation-free after construction, safe to call from
/// an audio callback.
pub struct VoiceEngine {
    sample_rate: f32,
    profile: PluckProfile,
    state: EngineState,
    fading: [Option<PluckVoice>; FADE_SLOTS],
    next_generation: u64,
    noise_state: u32,
}

impl VoiceEngine {
    /// Create an engine at the given sample rate with the default profile.
    pub fn new(sample_rate: f32) -> Self {
        Self::with_profile(sample_rate, PluckProfile::default())
    }

    /// Create an engine with a custom pluck profile.
    pub fn with_profile(sample_rate: f32, profile: PluckProfile) -> Self {
        Self {
            sample_rate,
            profile,
            state: EngineState::Ready,
            fading: [None, None],
            next_generation: 0,
            noise_state: 0x2545_f491,
        }
    }

    /// The profile voices are built from.
    pub fn profile(&self) -> &PluckProfile {
        &self.profile
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Change the sample rate. Drops all sounding and fading voices.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.reset();
    }

    /// Whether a voice currently occupies the sounding slot.
    pub fn is_sounding(&self) -> bool {
        matches!(self.state, EngineState::Sounding(_))
    }

    /// The pitch in the sounding slot, if any.
    pub fn current_pitch(&self) -> Option<Pitch> {
        match &self.state {
            EngineState::Sounding(v) => Some(v.pitch()),
            EngineState::Ready => None,
        }
    }

    /// Total sounding plus fading voices.
    pub fn active_voice_count(&self) -> usize {
        let sounding = usize::from(self.is_sounding());
        sounding + self.fading.iter().flatten().count()
    }

    /// Number of strikes accepted so far.
    pub fn generation(&self) -> u64 {
        self.next_generation
    }

    /// Sum of the fading voices' envelope levels.
    pub fn fading_level(&self) -> f32 {
        self.fading.iter().flatten().map(PluckVoice::level).sum()
    }

    /// Start a note, pre-empting any sounding voice.
    ///
    /// Validation happens before any state change: an out-of-range note
    /// returns an error and leaves the current voice untouched.
    pub fn strike(
        &mut self,
        class: PitchClass,
        octave: i32,
        timbre: Timbre,
    ) -> Result<(), SynthError> {
        let frequency_hz = frequency(class, octave).map_err(|e| match e {
            TheoryError::OctaveOutOfRange(o) => SynthError::UnsupportedPitch { class, octave: o },
            _ => SynthError::UnsupportedPitch { class, octave },
        })?;

        self.retire_current();

        let detune = (self.next_noise() * 2.0 - 1.0) * self.profile.detune_spread_cents;
        let generation = self.next_generation;
        self.next_generation += 1;

        let pitch = Pitch { class, octave };
        self.state = EngineState::Sounding(PluckVoice::new(
            self.sample_rate,
            frequency_hz,
            detune,
            pitch,
            timbre,
            &self.profile,
            generation,
        ));
        Ok(())
    }

    /// Cut the sounding voice, if any. Idempotent.
    pub fn stop(&mut self) {
        self.retire_current();
    }

    /// Drop every voice without a fade. Not click-free; for teardown only.
    pub fn reset(&mut self) {
        self.state = EngineState::Ready;
        self.fading = [None, None];
    }

    /// Render one stereo sample, mixing the sounding voice with any
    /// fading voices and retiring those that reach silence.
    #[inline]
    pub fn process_stereo(&mut self) -> (f32, f32) {
        let (mut left, mut right) = (0.0f32, 0.0f32);

        if let EngineState::Sounding(voice) = &mut self.state {
            let (l, r) = voice.process_stereo();
            left += l;
            right += r;
            if voice.is_finished() {
                self.state = EngineState::Ready;
            }
        }

        for slot in &mut self.fading {
            if let Some(voice) = slot {
                let (l, r) = voice.process_stereo();
                left += l;
                right += r;
                if voice.is_finished() {
                    *slot = None;
                }
            }
        }

        (left, right)
    }

    /// Fill an interleaved stereo buffer.
    pub fn render(&mut self, buffer: &mut [f32]) {
        for frame in buffer.chunks_exact_mut(2) {
            let (l, r) = self.process_stereo();
            frame[0] = l;
            frame[1] = r;
        }
    }

    /// Move the sounding voice into a fade slot, evicting the quieter
    /// fade if both slots are occupied.
    fn retire_current(&mut self) {
        if !self.is_sounding() {
            return;
        }
        let EngineState::Sounding(mut voice) =
            core::mem::replace(&mut self.state, EngineState::Ready)
        else {
            return;
        };
        voice.cut();
        if voice.is_finished() {
            return;
        }

        if let Some(slot) = self.fading.iter_mut().find(|s| s.is_none()) {
            *slot = Some(voice);
            return;
        }

        // Both full: replace whichever fade is quietest.
        let quietest = self
            .fading
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                let a = a.as_ref().map_or(0.0, |v| v.level());
                let b = b.as_ref().map_or(0.0, |v| v.level());
                a.partial_cmp(&b).unwrap_or(core::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i);
        if let Some(i) = quietest {
            self.fading[i] = Some(voice);
        }
    }

    /// xorshift32, mapped to [0, 1).
    fn next_noise(&mut self) -> f32 {
        let mut x = self.noise_state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.noise_state = x;
        (x >> 8) as f32 / 16_777_216.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> VoiceEngine {
        VoiceEngine::new(48000.0)
    }

    #[test]
    fn starts_silent() {
        let mut e = engine();
        assert!(!e.is_sounding());
        assert_eq!(e.process_stereo(), (0.0, 0.0));
    }

    #[test]
    fn strike_installs_voice() {
        let mut e = engine();
        e.strike(PitchClass::A, 4, Timbre::Keyboard).unwrap();
        assert!(e.is_sounding());
        assert_eq!(
            e.current_pitch(),
            Some(Pitch {
                class: PitchClass::A,
                octave: 4
            })
        );
    }

    #[test]
    fn out_of_range_strike_is_rejected_and_harmless() {
        let mut e = engine();
        e.strike(PitchClass::C, 4, Timbre::Keyboard).unwrap();

        let err = e.strike(PitchClass::C, 9, Timbre::Keyboard).unwrap_err();
        assert_eq!(
            err,
            SynthError::UnsupportedPitch {
                class: PitchClass::C,
                octave: 9
            }
        );
        // The sounding voice is untouched
        assert_eq!(
            e.current_pitch(),
            Some(Pitch {
                class: PitchClass::C,
                octave: 4
            })
        );
    }

    #[test]
    fn retrigger_replaces_not_stacks() {
        let mut e = engine();
        e.strike(PitchClass::E, 2, Timbre::Fretboard).unwrap();
        for _ in 0..1000 {
            e.process_stereo();
        }
        e.strike(PitchClass::A, 2, Timbre::Fretboard).unwrap();

        assert_eq!(
            e.current_pitch(),
            Some(Pitch {
                class: PitchClass::A,
                octave: 2
            })
        );
        // Old voice is fading, not sounding
        assert_eq!(e.active_voice_count(), 2);
    }

    #[test]
    fn fading_voices_are_retired_within_fade_window() {
        let mut e = engine();
        e.strike(PitchClass::E, 2, Timbre::Fretboard).unwrap();
        for _ in 0..1000 {
            e.process_stereo();
        }
        e.strike(PitchClass::A, 2, Timbre::Fretboard).unwrap();

        // 10 ms at 48 kHz plus slack
        for _ in 0..500 {
            e.process_stereo();
        }
        assert_eq!(e.active_voice_count(), 1);
        assert_eq!(e.fading_level(), 0.0);
    }

    #[test]
    fn rapid_retriggers_stay_bounded() {
        let mut e = engine();
        for i in 0..20 {
            let class = if i % 2 == 0 {
                PitchClass::C
            } else {
                PitchClass::G
            };
            e.strike(class, 4, Timbre::Keyboard).unwrap();
            for _ in 0..16 {
                let (l, r) = e.process_stereo();
                assert!(l.abs() <= 2.0 && r.abs() <= 2.0);
            }
            assert!(e.active_voice_count() <= 1 + FADE_SLOTS);
        }
    }

    #[test]
    fn stop_is_idempotent() {
        let mut e = engine();
        e.strike(PitchClass::D, 3, Timbre::Keyboard).unwrap();
        for _ in 0..1000 {
            e.process_stereo();
        }
        e.stop();
        assert!(!e.is_sounding());
        e.stop(); // no-op
        assert!(!e.is_sounding());

        for _ in 0..500 {
            e.process_stereo();
        }
        assert_eq!(e.active_voice_count(), 0);
    }

    #[test]
    fn voice_expires_on_its_own() {
        let mut e = engine();
        e.strike(PitchClass::B, 3, Timbre::Keyboard).unwrap();
        // 900 ms at 48 kHz plus slack
        for _ in 0..43300 {
            e.process_stereo();
        }
        assert!(!e.is_sounding());
        assert_eq!(e.active_voice_count(), 0);
    }

    #[test]
    fn generation_advances_per_strike() {
        let mut e = engine();
        let mut generations = std::vec::Vec::new();
        for _ in 0..8 {
            e.strike(PitchClass::A, 4, Timbre::Keyboard).unwrap();
            if let EngineState::Sounding(v) = &e.state {
                generations.push(v.generation());
            }
            e.reset();
        }
        // Generations are distinct even when the pitch repeats
        generations.dedup();
        assert_eq!(generations.len(), 8);
    }

    #[test]
    fn render_fills_interleaved_frames() {
        let mut e = engine();
        e.strike(PitchClass::A, 4, Timbre::Keyboard).unwrap();
        let mut buf = [0.0f32; 256];
        e.render(&mut buf);
        assert!(buf.iter().any(|s| *s != 0.0));
    }
}
