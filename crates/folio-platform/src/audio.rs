//! Audio data types and PCM helpers shared by capture and output services.

use std::fmt;

/// Sample rate used for synthesized tones and the desktop test microphone.
pub const SAMPLE_RATE: u32 = 8000;

/// Raw bytes delivered by a capture device (16-bit little-endian mono PCM).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioChunk(pub Vec<u8>);

impl AudioChunk {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Opaque handle to an in-memory playable clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipHandle(pub u32);

impl fmt::Display for ClipHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "blob:folio/{}", self.0)
    }
}

/// A fixed-length oscillator tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_secs: f32,
    /// Linear gain, 0.0-1.0.
    pub gain: f32,
}

/// Render a sine tone to mono 16-bit PCM.
pub fn synthesize_tone(tone: &Tone, sample_rate: u32) -> Vec<i16> {
    let samples = (tone.duration_secs.max(0.0) * sample_rate as f32) as usize;
    sine_samples(tone.frequency_hz, tone.gain, 0, samples, sample_rate)
}

/// `count` samples of a continuous sine starting at sample index `start`.
/// Consecutive spans join without a phase jump.
pub fn sine_samples(
    frequency_hz: f32,
    gain: f32,
    start: u64,
    count: usize,
    sample_rate: u32,
) -> Vec<i16> {
    let gain = gain.clamp(0.0, 1.0);
    let rate = f64::from(sample_rate);
    (start..start + count as u64)
        .map(|i| {
            let cycles = (i as f64 * f64::from(frequency_hz) / rate).fract();
            let wave = (cycles * std::f64::consts::TAU).sin() as f32;
            (i16::MAX as f32 * gain * wave) as i16
        })
        .collect()
}

/// Convert PCM samples to little-endian bytes.
pub fn pcm_to_bytes(pcm: &[i16]) -> Vec<u8> {
    pcm.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Wrap raw 16-bit mono PCM bytes in a RIFF/WAVE container.
pub fn encode_wav(pcm_bytes: &[u8], sample_rate: u32) -> Vec<u8> {
    let data_len = pcm_bytes.len() as u32;
    let byte_rate = sample_rate * 2;
    let mut out = Vec::with_capacity(44 + pcm_bytes.len());
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes()); // block align
    out.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    out.extend_from_slice(pcm_bytes);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_length_matches_duration() {
        let tone = Tone {
            frequency_hz: 440.0,
            duration_secs: 0.5,
            gain: 0.1,
        };
        assert_eq!(synthesize_tone(&tone, 8000).len(), 4000);
    }

    #[test]
    fn tone_respects_gain() {
        let tone = Tone {
            frequency_hz: 100.0,
            duration_secs: 0.1,
            gain: 0.1,
        };
        let peak = synthesize_tone(&tone, 8000)
            .iter()
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap();
        assert!(peak <= (i16::MAX as f32 * 0.1) as u16 + 1);
        assert!(peak > 1000);
    }

    #[test]
    fn sine_spans_join_without_phase_reset() {
        let whole = sine_samples(440.0, 0.1, 0, 80, 8000);
        let mut parts = sine_samples(440.0, 0.1, 0, 30, 8000);
        parts.extend(sine_samples(440.0, 0.1, 30, 50, 8000));
        assert_eq!(parts, whole);
        assert_ne!(sine_samples(440.0, 0.1, 30, 1, 8000)[0], whole[0]);
    }

    #[test]
    fn negative_duration_is_silent() {
        let tone = Tone {
            frequency_hz: 440.0,
            duration_secs: -1.0,
            gain: 0.5,
        };
        assert!(synthesize_tone(&tone, 8000).is_empty());
    }

    #[test]
    fn wav_header_layout() {
        let wav = encode_wav(&[1, 0, 2, 0], 8000);
        assert_eq!(wav.len(), 48);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]), 8000);
        assert_eq!(u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]), 4);
    }

    #[test]
    fn pcm_bytes_little_endian() {
        assert_eq!(pcm_to_bytes(&[0x0102, -1]), vec![0x02, 0x01, 0xFF, 0xFF]);
    }

    #[test]
    fn clip_handle_display() {
        assert_eq!(ClipHandle(7).to_string(), "blob:folio/7");
    }
}
