//! Mini audio studio: a record/stop/play cycle over the capture service
//! and a pad of fire-and-forget tones.

use serde::Serialize;

use folio_platform::audio::{AudioChunk, ClipHandle, SAMPLE_RATE, Tone, encode_wav};
use folio_platform::{AudioCaptureService, AudioOutputService};
use folio_sdi::SurfaceRegistry;
use folio_terminal::LogKind;

use crate::context::Context;
use crate::layout::{MASTER_VOLUME, PLAY_BUTTON, RECORD_BUTTON, RECORDING_STATUS, STOP_BUTTON};

const TONE_SECS: f32 = 0.5;
const TONE_GAIN: f32 = 0.1;
const CLIP_MIME: &str = "audio/wav";

/// Oscillator frequency for a sound pad tag. Unknown tags play A4.
pub fn tone_frequency(tag: &str) -> f32 {
    match tag {
        "drum" => 100.0,
        "piano" => 440.0,
        "guitar" => 220.0,
        "bass" => 110.0,
        "synth" => 880.0,
        "fx" => 660.0,
        _ => 440.0,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordingState {
    #[default]
    Idle,
    Recording,
    Stopped,
}

/// The current take and its finalized clip.
#[derive(Debug, Default)]
pub struct RecordingSession {
    pub state: RecordingState,
    pub captured: Option<ClipHandle>,
}

#[derive(Debug)]
pub struct AudioStudio {
    session: RecordingSession,
    chunks: Vec<AudioChunk>,
    sounds: Vec<String>,
    volume: u8,
    status: String,
}

impl AudioStudio {
    pub fn new(sounds: Vec<String>, volume: u8) -> Self {
        Self {
            session: RecordingSession::default(),
            chunks: Vec::new(),
            sounds,
            volume: volume.min(100),
            status: String::new(),
        }
    }

    pub fn state(&self) -> RecordingState {
        self.session.state
    }

    pub fn captured(&self) -> Option<ClipHandle> {
        self.session.captured
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn sounds(&self) -> &[String] {
        &self.sounds
    }

    /// Begin a new take. A refused capture request leaves the session as it
    /// was and reports the reason.
    pub fn start<P>(&mut self, ctx: &mut Context<'_>, audio: &mut P)
    where
        P: AudioCaptureService + AudioOutputService + ?Sized,
    {
        if self.session.state == RecordingState::Recording {
            return;
        }
        if let Err(e) = audio.start_capture() {
            log::warn!("capture refused: {e}");
            ctx.log(format!("Error starting recording: {e}"), LogKind::Error);
            self.status = "Error: Could not access microphone".to_string();
            self.sync_controls(ctx.sdi);
            return;
        }
        if let Some(old) = self.session.captured.take() {
            audio.release_clip(old);
        }
        self.chunks.clear();
        self.session.state = RecordingState::Recording;
        self.status = "Recording...".to_string();
        self.sync_controls(ctx.sdi);
        ctx.log("Recording started", LogKind::Success);
    }

    /// Accept a chunk from the capture device. Ignored unless recording.
    pub fn deliver_chunk(&mut self, chunk: AudioChunk) -> bool {
        if self.session.state != RecordingState::Recording {
            return false;
        }
        self.chunks.push(chunk);
        true
    }

    /// Finish the take and turn the collected chunks into one clip.
    pub fn stop<P>(&mut self, ctx: &mut Context<'_>, audio: &mut P)
    where
        P: AudioCaptureService + AudioOutputService + ?Sized,
    {
        if self.session.state != RecordingState::Recording {
            return;
        }
        self.chunks.extend(audio.take_chunks(0));
        if let Err(e) = audio.stop_capture() {
            ctx.log(format!("Error stopping recording: {e}"), LogKind::Error);
        }

        let pcm: Vec<u8> = self.chunks.drain(..).flat_map(|c| c.0).collect();
        match audio.create_clip(encode_wav(&pcm, SAMPLE_RATE), CLIP_MIME) {
            Ok(clip) => {
                log::info!("Recording finalized as {clip} ({} bytes)", pcm.len());
                self.session.captured = Some(clip);
                self.session.state = RecordingState::Stopped;
                self.status = "Recording saved!".to_string();
                self.sync_controls(ctx.sdi);
                ctx.log("Recording stopped", LogKind::Success);
            },
            Err(e) => {
                self.session.state = RecordingState::Idle;
                self.status.clear();
                self.sync_controls(ctx.sdi);
                ctx.log(format!("Error saving recording: {e}"), LogKind::Error);
            },
        }
    }

    /// Play back the finalized clip. Only acts after a successful stop.
    pub fn play<P>(&mut self, ctx: &mut Context<'_>, audio: &mut P)
    where
        P: AudioOutputService + ?Sized,
    {
        if self.session.state != RecordingState::Stopped {
            return;
        }
        let Some(clip) = self.session.captured else {
            return;
        };
        match audio.play_clip(clip) {
            Ok(()) => ctx.log("Playing recorded audio", LogKind::Success),
            Err(e) => ctx.log(format!("Error playing recording: {e}"), LogKind::Error),
        }
    }

    /// Sound pad `index` was pressed.
    pub fn play_pad<P>(&mut self, ctx: &mut Context<'_>, audio: &mut P, index: usize)
    where
        P: AudioOutputService + ?Sized,
    {
        let Some(tag) = self.sounds.get(index).cloned() else {
            log::warn!("no sound pad at index {index}");
            return;
        };
        self.play_sound(ctx, audio, &tag);
    }

    /// Fire a short tone for `tag` and log it.
    pub fn play_sound<P>(&mut self, ctx: &mut Context<'_>, audio: &mut P, tag: &str)
    where
        P: AudioOutputService + ?Sized,
    {
        ctx.log(format!("User played {tag} sound"), LogKind::Interaction);
        let tone = Tone {
            frequency_hz: tone_frequency(tag),
            duration_secs: TONE_SECS,
            gain: TONE_GAIN,
        };
        if let Err(e) = audio.play_tone(&tone) {
            log::warn!("tone for {tag} not played: {e}");
        }
    }

    /// Move the master volume slider. Values are clamped to 0-100.
    pub fn set_volume(&mut self, ctx: &mut Context<'_>, value: i32) {
        self.volume = value.clamp(0, 100) as u8;
        if let Ok(obj) = ctx.sdi.get_mut(MASTER_VOLUME) {
            obj.text = format!("{}%", self.volume);
        }
        ctx.log(
            format!("Master volume set to {}%", self.volume),
            LogKind::System,
        );
    }

    /// Mirror the session onto the control surfaces.
    pub fn sync_controls(&self, sdi: &mut SurfaceRegistry) {
        let state = self.session.state;
        let flags = [
            (RECORD_BUTTON, state != RecordingState::Recording),
            (STOP_BUTTON, state == RecordingState::Recording),
            (
                PLAY_BUTTON,
                state == RecordingState::Stopped && self.session.captured.is_some(),
            ),
        ];
        for (name, enabled) in flags {
            if let Ok(obj) = sdi.get_mut(name) {
                obj.enabled = enabled;
            }
        }
        if let Ok(obj) = sdi.get_mut(RECORDING_STATUS) {
            obj.text.clone_from(&self.status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::Harness;
    use folio_types::error::{FolioError, Result};

    /// Mock audio device that records every call.
    #[derive(Default)]
    struct MockAudio {
        deny: bool,
        fail_stop: bool,
        fail_tone: bool,
        capturing: bool,
        pending: Vec<AudioChunk>,
        clips: Vec<(ClipHandle, usize, String)>,
        released: Vec<ClipHandle>,
        played: Vec<ClipHandle>,
        tones: Vec<Tone>,
    }

    impl AudioCaptureService for MockAudio {
        fn start_capture(&mut self) -> Result<()> {
            if self.deny {
                return Err(FolioError::CapabilityDenied("Permission denied".into()));
            }
            self.capturing = true;
            Ok(())
        }

        fn take_chunks(&mut self, _elapsed_ms: u32) -> Vec<AudioChunk> {
            std::mem::take(&mut self.pending)
        }

        fn stop_capture(&mut self) -> Result<()> {
            self.capturing = false;
            if self.fail_stop {
                return Err(FolioError::Platform("device busy".into()));
            }
            Ok(())
        }
    }

    impl AudioOutputService for MockAudio {
        fn create_clip(&mut self, data: Vec<u8>, mime: &str) -> Result<ClipHandle> {
            let handle = ClipHandle(self.clips.len() as u32 + 1);
            self.clips.push((handle, data.len(), mime.to_string()));
            Ok(handle)
        }

        fn release_clip(&mut self, clip: ClipHandle) {
            self.released.push(clip);
        }

        fn play_clip(&mut self, clip: ClipHandle) -> Result<()> {
            self.played.push(clip);
            Ok(())
        }

        fn play_tone(&mut self, tone: &Tone) -> Result<()> {
            if self.fail_tone {
                return Err(FolioError::Platform("no output device".into()));
            }
            self.tones.push(*tone);
            Ok(())
        }
    }

    fn studio() -> AudioStudio {
        AudioStudio::new(
            ["drum", "piano", "kazoo"].into_iter().map(String::from).collect(),
            75,
        )
    }

    #[test]
    fn full_cycle() {
        let mut h = Harness::new();
        let mut audio = MockAudio::default();
        let mut s = studio();

        s.start(&mut h.ctx(), &mut audio);
        assert_eq!(s.state(), RecordingState::Recording);
        assert!(audio.capturing);
        assert!(!h.sdi.get(RECORD_BUTTON).unwrap().enabled);
        assert!(h.sdi.get(STOP_BUTTON).unwrap().enabled);
        assert_eq!(h.sdi.get(RECORDING_STATUS).unwrap().text, "Recording...");

        assert!(s.deliver_chunk(AudioChunk(vec![0; 8])));
        audio.pending.push(AudioChunk(vec![1; 4]));
        s.stop(&mut h.ctx(), &mut audio);
        assert_eq!(s.state(), RecordingState::Stopped);
        assert!(!audio.capturing);
        assert_eq!(audio.clips, vec![(ClipHandle(1), 44 + 12, "audio/wav".to_string())]);
        assert_eq!(s.chunk_count(), 0);
        assert!(h.sdi.get(PLAY_BUTTON).unwrap().enabled);
        assert_eq!(h.sdi.get(RECORDING_STATUS).unwrap().text, "Recording saved!");

        s.play(&mut h.ctx(), &mut audio);
        assert_eq!(s.state(), RecordingState::Stopped);
        assert_eq!(audio.played, vec![ClipHandle(1)]);

        assert_eq!(
            h.entries(),
            vec![
                ("Recording started".to_string(), LogKind::Success),
                ("Recording stopped".to_string(), LogKind::Success),
                ("Playing recorded audio".to_string(), LogKind::Success),
            ]
        );
    }

    #[test]
    fn restart_releases_previous_clip() {
        let mut h = Harness::new();
        let mut audio = MockAudio::default();
        let mut s = studio();
        s.start(&mut h.ctx(), &mut audio);
        s.stop(&mut h.ctx(), &mut audio);
        s.start(&mut h.ctx(), &mut audio);
        assert_eq!(audio.released, vec![ClipHandle(1)]);
        assert_eq!(s.captured(), None);
        assert_eq!(s.state(), RecordingState::Recording);
    }

    #[test]
    fn stop_and_play_before_start_are_noops() {
        let mut h = Harness::new();
        let mut audio = MockAudio::default();
        let mut s = studio();
        s.stop(&mut h.ctx(), &mut audio);
        s.play(&mut h.ctx(), &mut audio);
        assert_eq!(s.state(), RecordingState::Idle);
        assert!(audio.clips.is_empty());
        assert!(audio.played.is_empty());
        assert!(h.messages().is_empty());
    }

    #[test]
    fn denied_start_stays_idle() {
        let mut h = Harness::new();
        let mut audio = MockAudio {
            deny: true,
            ..MockAudio::default()
        };
        let mut s = studio();
        s.start(&mut h.ctx(), &mut audio);
        assert_eq!(s.state(), RecordingState::Idle);
        assert_eq!(
            h.entries(),
            vec![(
                "Error starting recording: capability denied: Permission denied".to_string(),
                LogKind::Error
            )]
        );
        assert_eq!(
            h.sdi.get(RECORDING_STATUS).unwrap().text,
            "Error: Could not access microphone"
        );
        s.stop(&mut h.ctx(), &mut audio);
        s.play(&mut h.ctx(), &mut audio);
        assert_eq!(h.messages().len(), 1);
    }

    #[test]
    fn chunks_rejected_unless_recording() {
        let mut s = studio();
        assert!(!s.deliver_chunk(AudioChunk(vec![0; 2])));
        assert_eq!(s.chunk_count(), 0);
    }

    #[test]
    fn second_start_while_recording_is_ignored() {
        let mut h = Harness::new();
        let mut audio = MockAudio::default();
        let mut s = studio();
        s.start(&mut h.ctx(), &mut audio);
        s.deliver_chunk(AudioChunk(vec![0; 2]));
        s.start(&mut h.ctx(), &mut audio);
        assert_eq!(s.chunk_count(), 1);
        assert_eq!(h.messages(), vec!["Recording started"]);
    }

    #[test]
    fn tone_table() {
        assert_eq!(tone_frequency("drum"), 100.0);
        assert_eq!(tone_frequency("bass"), 110.0);
        assert_eq!(tone_frequency("synth"), 880.0);
        assert_eq!(tone_frequency("fx"), 660.0);
        assert_eq!(tone_frequency("kazoo"), 440.0);
    }

    #[test]
    fn pads_play_tones_and_log() {
        let mut h = Harness::new();
        let mut audio = MockAudio::default();
        let mut s = studio();
        s.play_pad(&mut h.ctx(), &mut audio, 0);
        s.play_pad(&mut h.ctx(), &mut audio, 2);
        s.play_pad(&mut h.ctx(), &mut audio, 9);
        assert_eq!(audio.tones.len(), 2);
        assert_eq!(audio.tones[0].frequency_hz, 100.0);
        assert_eq!(audio.tones[0].duration_secs, 0.5);
        assert_eq!(audio.tones[0].gain, 0.1);
        assert_eq!(audio.tones[1].frequency_hz, 440.0);
        assert_eq!(
            h.messages(),
            vec!["User played drum sound", "User played kazoo sound"]
        );
    }

    #[test]
    fn failed_stop_capture_is_logged_and_take_is_kept() {
        let mut h = Harness::new();
        let mut audio = MockAudio {
            fail_stop: true,
            ..MockAudio::default()
        };
        let mut s = studio();
        s.start(&mut h.ctx(), &mut audio);
        s.deliver_chunk(AudioChunk(vec![0; 4]));
        s.stop(&mut h.ctx(), &mut audio);
        assert_eq!(s.state(), RecordingState::Stopped);
        assert_eq!(audio.clips.len(), 1);
        assert_eq!(
            h.entries(),
            vec![
                ("Recording started".to_string(), LogKind::Success),
                (
                    "Error stopping recording: platform error: device busy".to_string(),
                    LogKind::Error
                ),
                ("Recording stopped".to_string(), LogKind::Success),
            ]
        );
    }

    #[test]
    fn pad_press_is_logged_even_when_tone_fails() {
        let mut h = Harness::new();
        let mut audio = MockAudio {
            fail_tone: true,
            ..MockAudio::default()
        };
        let mut s = studio();
        s.play_sound(&mut h.ctx(), &mut audio, "synth");
        assert!(audio.tones.is_empty());
        assert_eq!(
            h.entries(),
            vec![("User played synth sound".to_string(), LogKind::Interaction)]
        );
    }

    #[test]
    fn recording_state_serializes_lowercase() {
        let json = serde_json::to_string(&RecordingState::Recording).unwrap();
        assert_eq!(json, "\"recording\"");
    }

    #[test]
    fn volume_is_clamped_and_rendered() {
        let mut h = Harness::new();
        let mut s = studio();
        s.set_volume(&mut h.ctx(), 140);
        assert_eq!(s.volume(), 100);
        s.set_volume(&mut h.ctx(), -5);
        assert_eq!(s.volume(), 0);
        assert_eq!(h.sdi.get(MASTER_VOLUME).unwrap().text, "0%");
        assert_eq!(
            h.messages(),
            vec!["Master volume set to 100%", "Master volume set to 0%"]
        );
    }
}
