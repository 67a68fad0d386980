//! Waveform synthesizer - procedural PCM generation
//!
//! Every sound effect in the game is generated here at startup; no audio
//! assets are loaded. Output is mono 16-bit PCM at [`SAMPLE_RATE`], scaled to
//! [`AMPLITUDE`] and faded linearly to zero over the last
//! [`FADE_OUT_SAMPLES`] samples so playback never ends on a click.

use std::f64::consts::TAU;

use thiserror::Error;

use crate::core::SimpleRng;
use crate::types::{Waveform, AMPLITUDE, FADE_OUT_SAMPLES, SAMPLE_RATE};

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SynthError {
    #[error("duration must be a positive number of seconds, got {0}")]
    InvalidDuration(f32),

    #[error("{kind:?} needs a positive frequency, got {frequency} Hz")]
    InvalidFrequency { kind: Waveform, frequency: f32 },
}

/// Owned mono PCM16 buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmBuffer {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl PcmBuffer {
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        1
    }

    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }
}

/// Number of samples for `duration` seconds.
pub fn sample_count(duration: f32) -> usize {
    (SAMPLE_RATE as f64 * duration as f64).round() as usize
}

/// Generate `duration` seconds of `kind` at `frequency` Hz.
///
/// `rng` only feeds [`Waveform::Noise`]; the other kinds are fully
/// determined by their arguments. Noise ignores `frequency`.
pub fn synthesize(
    kind: Waveform,
    duration: f32,
    frequency: f32,
    rng: &mut SimpleRng,
) -> Result<PcmBuffer, SynthError> {
    if !duration.is_finite() || duration <= 0.0 {
        return Err(SynthError::InvalidDuration(duration));
    }
    if kind.is_periodic() && (!frequency.is_finite() || frequency <= 0.0) {
        return Err(SynthError::InvalidFrequency { kind, frequency });
    }

    let n = sample_count(duration);
    let rate = SAMPLE_RATE as f64;
    let freq = frequency as f64;
    let period = rate / freq;

    let samples = (0..n)
        .map(|i| {
            let t = i as f64 / rate;
            let raw = match kind {
                Waveform::Sine => (TAU * freq * t).sin(),
                Waveform::Square => {
                    if (TAU * freq * t).sin() > 0.0 {
                        0.5
                    } else {
                        -0.5
                    }
                }
                Waveform::Noise => rng.next_signed_unit() as f64,
                Waveform::Sawtooth => 2.0 * (i as f64 / period).fract() - 1.0,
            };
            to_pcm(raw * fade_gain(i, n))
        })
        .collect();

    Ok(PcmBuffer {
        samples,
        sample_rate: SAMPLE_RATE,
    })
}

/// Linear fade over the tail: 1.0 before it, remaining/FADE_OUT_SAMPLES inside.
fn fade_gain(i: usize, n: usize) -> f64 {
    let remaining = n - i;
    if remaining >= FADE_OUT_SAMPLES {
        1.0
    } else {
        remaining as f64 / FADE_OUT_SAMPLES as f64
    }
}

fn to_pcm(sample: f64) -> i16 {
    (sample * AMPLITUDE as f64)
        .round()
        .clamp(i16::MIN as f64, i16::MAX as f64) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synth(kind: Waveform, duration: f32, frequency: f32) -> PcmBuffer {
        synthesize(kind, duration, frequency, &mut SimpleRng::new(7)).unwrap()
    }

    #[test]
    fn test_sample_count_rounds() {
        assert_eq!(synth(Waveform::Sine, 0.3, 880.0).len(), 13_230);
        assert_eq!(synth(Waveform::Sawtooth, 0.4, 150.0).len(), 17_640);
        assert_eq!(synth(Waveform::Noise, 0.8, 0.0).len(), 35_280);
        assert_eq!(sample_count(0.00001), 0);
        assert!(synth(Waveform::Sine, 0.00001, 440.0).is_empty());
        assert_eq!(sample_count(1.0 / 44_100.0 * 2.6), 3);
    }

    #[test]
    fn test_sine_starts_at_zero_and_peaks_near_amplitude() {
        let pcm = synth(Waveform::Sine, 0.3, 880.0);
        assert_eq!(pcm.samples()[0], 0);
        let peak = pcm.samples().iter().map(|s| s.unsigned_abs()).max().unwrap();
        assert!(peak <= AMPLITUDE as u16);
        assert!(peak > (AMPLITUDE * 0.99) as u16);
    }

    #[test]
    fn test_square_is_half_amplitude() {
        let pcm = synth(Waveform::Square, 0.1, 440.0);
        let body = &pcm.samples()[..pcm.len() - FADE_OUT_SAMPLES];
        assert!(body.iter().all(|&s| s == 5000 || s == -5000));
        assert!(body.contains(&5000));
        assert!(body.contains(&-5000));
    }

    #[test]
    fn test_fade_is_strictly_decreasing_for_square() {
        let pcm = synth(Waveform::Square, 0.1, 440.0);
        let tail = &pcm.samples()[pcm.len() - FADE_OUT_SAMPLES..];
        for pair in tail.windows(2) {
            assert!(pair[1].unsigned_abs() < pair[0].unsigned_abs());
        }
        assert_eq!(tail.last().unwrap().unsigned_abs(), 5);
    }

    #[test]
    fn test_sine_tail_envelope_decreases() {
        let pcm = synth(Waveform::Sine, 0.3, 880.0);
        let tail = &pcm.samples()[pcm.len() - FADE_OUT_SAMPLES..];
        let peaks: Vec<u16> = tail
            .chunks(100)
            .map(|c| c.iter().map(|s| s.unsigned_abs()).max().unwrap())
            .collect();
        for pair in peaks.windows(2) {
            assert!(pair[1] < pair[0], "{peaks:?}");
        }
        assert!(tail.last().unwrap().unsigned_abs() <= (AMPLITUDE / 1000.0) as u16);
    }

    #[test]
    fn test_sawtooth_ramps_over_one_period() {
        let pcm = synth(Waveform::Sawtooth, 0.4, 150.0);
        // period = 294 samples: -1 at the start, just below +1 before the wrap
        assert_eq!(pcm.samples()[0], -10_000);
        assert!(pcm.samples()[293] > 9_900);
        assert_eq!(pcm.samples()[294], -10_000);
        assert!(pcm.samples()[147].unsigned_abs() < 100);
    }

    #[test]
    fn test_noise_stays_in_range_and_fades() {
        let pcm = synth(Waveform::Noise, 0.8, 0.0);
        assert!(pcm
            .samples()
            .iter()
            .all(|s| s.unsigned_abs() <= AMPLITUDE as u16));
        let tail = &pcm.samples()[pcm.len() - 10..];
        assert!(tail.iter().all(|s| s.unsigned_abs() <= 100));
        // Not silence.
        assert!(pcm.samples().iter().any(|&s| s.unsigned_abs() > 1000));
    }

    #[test]
    fn test_periodic_kinds_are_deterministic() {
        for kind in [Waveform::Sine, Waveform::Square, Waveform::Sawtooth] {
            let a = synthesize(kind, 0.2, 330.0, &mut SimpleRng::new(1)).unwrap();
            let b = synthesize(kind, 0.2, 330.0, &mut SimpleRng::new(999)).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_noise_depends_on_rng() {
        let a = synthesize(Waveform::Noise, 0.1, 0.0, &mut SimpleRng::new(1)).unwrap();
        let b = synthesize(Waveform::Noise, 0.1, 0.0, &mut SimpleRng::new(2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_short_buffer_fades_throughout() {
        let pcm = synth(Waveform::Square, 0.01, 440.0);
        assert_eq!(pcm.len(), 441);
        assert!(pcm.samples()[0].unsigned_abs() < 5000);
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let mut rng = SimpleRng::new(1);
        assert_eq!(
            synthesize(Waveform::Sine, 0.0, 440.0, &mut rng),
            Err(SynthError::InvalidDuration(0.0))
        );
        assert!(matches!(
            synthesize(Waveform::Sine, f32::NAN, 440.0, &mut rng),
            Err(SynthError::InvalidDuration(_))
        ));
        assert_eq!(
            synthesize(Waveform::Sawtooth, 0.5, 0.0, &mut rng),
            Err(SynthError::InvalidFrequency {
                kind: Waveform::Sawtooth,
                frequency: 0.0
            })
        );
        assert!(synthesize(Waveform::Noise, 0.5, 0.0, &mut rng).is_ok());
    }

    #[test]
    fn test_buffer_metadata() {
        let pcm = synth(Waveform::Sine, 0.5, 440.0);
        assert_eq!(pcm.sample_rate(), SAMPLE_RATE);
        assert_eq!(pcm.channels(), 1);
        assert!((pcm.duration_secs() - 0.5).abs() < 1e-4);
    }
}
