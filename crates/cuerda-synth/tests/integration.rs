//! Integration tests for cuerda-synth.
//!
//! Tests cover the full strike-to-silence lifecycle, retrigger behavior,
//! stereo placement, and the engine's bounded voice count under abuse.

use cuerda_synth::{Timbre, VoiceEngine};
use cuerda_theory::PitchClass;

const SR: f32 = 48000.0;

/// Render `frames` stereo frames, returning per-frame peak magnitudes.
fn render_peaks(engine: &mut VoiceEngine, frames: usize) -> Vec<f32> {
    (0..frames)
        .map(|_| {
            let (l, r) = engine.process_stereo();
            assert!(l.is_finite() && r.is_finite());
            l.abs().max(r.abs())
        })
        .collect()
}

// ---------------------------------------------------------------------------
// 1. Strike lifecycle
// ---------------------------------------------------------------------------

#[test]
fn strike_rises_then_decays_to_silence() {
    let mut engine = VoiceEngine::new(SR);
    engine.strike(PitchClass::A, 4, Timbre::Keyboard).unwrap();

    // 950 ms of audio
    let peaks = render_peaks(&mut engine, (0.95 * SR) as usize);

    let onset_peak = peaks[..4800].iter().cloned().fold(0.0f32, f32::max);
    assert!(onset_peak > 0.05, "onset should be audible, got {onset_peak}");

    // Early audio is louder than late audio (percussive shape)
    let early: f32 = peaks[..9600].iter().sum();
    let late: f32 = peaks[peaks.len() - 9600..].iter().sum();
    assert!(early > late * 10.0, "pluck should decay: early={early}, late={late}");

    // Silent by the end
    assert!(!engine.is_sounding());
    assert_eq!(engine.active_voice_count(), 0);
    assert_eq!(engine.process_stereo(), (0.0, 0.0));
}

#[test]
fn every_supported_note_produces_audio() {
    let mut engine = VoiceEngine::new(SR);
    for octave in 2..=7 {
        for class in PitchClass::ALL {
            engine.strike(class, octave, Timbre::Keyboard).unwrap();
            let energy: f32 = render_peaks(&mut engine, 2400).iter().sum();
            assert!(energy > 0.0, "{class}{octave} produced silence");
            engine.reset();
        }
    }
}

#[test]
fn octave_eight_is_rejected() {
    let mut engine = VoiceEngine::new(SR);
    assert!(engine.strike(PitchClass::C, 8, Timbre::Keyboard).is_err());
    assert!(!engine.is_sounding());
}

// ---------------------------------------------------------------------------
// 2. Retrigger behavior
// ---------------------------------------------------------------------------

#[test]
fn retrigger_does_not_click() {
    let mut engine = VoiceEngine::new(SR);
    engine.strike(PitchClass::E, 3, Timbre::Fretboard).unwrap();
    for _ in 0..4800 {
        engine.process_stereo();
    }

    // Capture the sample just before and the samples just after retrigger;
    // the mixed output must not jump by more than the attack slope plus
    // the cut slope allows.
    let (pre_l, pre_r) = engine.process_stereo();
    let pre = pre_l.abs().max(pre_r.abs());
    engine.strike(PitchClass::A, 3, Timbre::Fretboard).unwrap();
    let (post_l, post_r) = engine.process_stereo();
    let post = post_l.abs().max(post_r.abs());

    assert!(
        (post - pre).abs() < 0.1,
        "retrigger jumped from {pre} to {post}"
    );
}

#[test]
fn old_voice_gone_after_fade_window() {
    let mut engine = VoiceEngine::new(SR);
    engine.strike(PitchClass::C, 3, Timbre::Keyboard).unwrap();
    for _ in 0..4800 {
        engine.process_stereo();
    }
    engine.strike(PitchClass::G, 3, Timbre::Keyboard).unwrap();
    assert_eq!(engine.active_voice_count(), 2);

    // 10 ms fade plus slack
    for _ in 0..600 {
        engine.process_stereo();
    }
    assert_eq!(engine.active_voice_count(), 1);
}

#[test]
fn fading_level_is_monotone_after_retrigger() {
    let mut engine = VoiceEngine::new(SR);
    engine.strike(PitchClass::D, 4, Timbre::Keyboard).unwrap();
    for _ in 0..2400 {
        engine.process_stereo();
    }
    engine.strike(PitchClass::F, 4, Timbre::Keyboard).unwrap();

    let mut last = engine.fading_level();
    for _ in 0..600 {
        engine.process_stereo();
        let level = engine.fading_level();
        assert!(level <= last + 1e-7, "fade level rose: {last} -> {level}");
        last = level;
    }
    assert_eq!(last, 0.0);
}

#[test]
fn voice_count_bounded_under_rapid_fire() {
    let mut engine = VoiceEngine::new(SR);
    // Strike every 2 samples, far faster than any pointer could
    for i in 0..200 {
        let class = PitchClass::ALL[i % 12];
        engine.strike(class, 4, Timbre::Fretboard).unwrap();
        for _ in 0..2 {
            let (l, r) = engine.process_stereo();
            assert!(l.abs() < 2.0 && r.abs() < 2.0, "output blew up");
        }
        assert!(engine.active_voice_count() <= 3);
    }
}

// ---------------------------------------------------------------------------
// 3. Stereo placement
// ---------------------------------------------------------------------------

#[test]
fn surfaces_sit_on_opposite_sides() {
    let mut engine = VoiceEngine::new(SR);

    engine.strike(PitchClass::A, 4, Timbre::Keyboard).unwrap();
    let (mut kb_l, mut kb_r) = (0.0f32, 0.0f32);
    for _ in 0..4800 {
        let (l, r) = engine.process_stereo();
        kb_l += l.abs();
        kb_r += r.abs();
    }
    engine.reset();

    engine.strike(PitchClass::A, 4, Timbre::Fretboard).unwrap();
    let (mut fb_l, mut fb_r) = (0.0f32, 0.0f32);
    for _ in 0..4800 {
        let (l, r) = engine.process_stereo();
        fb_l += l.abs();
        fb_r += r.abs();
    }

    assert!(kb_l > kb_r);
    assert!(fb_r > fb_l);
    // The offset is subtle, not hard-panned
    assert!(kb_r > kb_l * 0.5, "keyboard pan should be gentle");
    assert!(fb_l > fb_r * 0.5, "fretboard pan should be gentle");
}

// ---------------------------------------------------------------------------
// 4. Stop behavior
// ---------------------------------------------------------------------------

#[test]
fn stop_fades_instead_of_truncating() {
    let mut engine = VoiceEngine::new(SR);
    engine.strike(PitchClass::B, 3, Timbre::Keyboard).unwrap();
    for _ in 0..4800 {
        engine.process_stereo();
    }

    engine.stop();
    assert!(!engine.is_sounding());
    // The cut voice is still audible for the fade window
    assert!(engine.active_voice_count() > 0);

    let peaks = render_peaks(&mut engine, 600);
    assert!(peaks[0] > 0.0, "fade should start audible");
    assert_eq!(*peaks.last().unwrap(), 0.0, "fade should end silent");
    assert_eq!(engine.active_voice_count(), 0);
}
