//! Platform service traits and desktop implementation.

use std::collections::HashMap;

use chrono::{Datelike, Local, Timelike};

use folio_types::error::{FolioError, Result};

use crate::audio::{
    AudioChunk, ClipHandle, SAMPLE_RATE, Tone, encode_wav, pcm_to_bytes, sine_samples,
    synthesize_tone,
};

// ---------------------------------------------------------------------------
// Time service
// ---------------------------------------------------------------------------

/// A local wall-clock timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl SystemTime {
    /// Time-of-day only, for tests and fixed clocks.
    pub fn at(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
            ..Self::default()
        }
    }
}

impl std::fmt::Display for SystemTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second,
        )
    }
}

/// Abstraction over platform time services.
pub trait TimeService {
    /// Current local wall-clock time.
    fn now(&self) -> Result<SystemTime>;
}

// ---------------------------------------------------------------------------
// Navigation service
// ---------------------------------------------------------------------------

/// Abstraction over page navigation and external link opening.
pub trait NavigationService {
    /// Replace the current page with `path`.
    fn navigate(&mut self, path: &str) -> Result<()>;

    /// Open `url` in a new tab, keeping the desktop loaded.
    fn open_new_tab(&mut self, url: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Audio capture service
// ---------------------------------------------------------------------------

/// Abstraction over microphone capture.
///
/// `start_capture` is the one request that may be refused; a refusal is
/// reported as [`FolioError::CapabilityDenied`].
pub trait AudioCaptureService {
    /// Request the device and begin capturing.
    fn start_capture(&mut self) -> Result<()>;

    /// Drain what was captured over the last `elapsed_ms` of host time.
    fn take_chunks(&mut self, elapsed_ms: u32) -> Vec<AudioChunk>;

    /// Stop capturing and release the device.
    fn stop_capture(&mut self) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Audio output service
// ---------------------------------------------------------------------------

/// Abstraction over audio playback and in-memory clip handles.
pub trait AudioOutputService {
    /// Register an in-memory clip and return a handle to it.
    fn create_clip(&mut self, data: Vec<u8>, mime: &str) -> Result<ClipHandle>;

    /// Release a clip handle. Unknown handles are ignored.
    fn release_clip(&mut self, clip: ClipHandle);

    /// Play a previously created clip.
    fn play_clip(&mut self, clip: ClipHandle) -> Result<()>;

    /// Fire-and-forget oscillator tone.
    fn play_tone(&mut self, tone: &Tone) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Unified platform trait
// ---------------------------------------------------------------------------

/// Aggregate trait providing access to all platform services.
pub trait Platform:
    TimeService + NavigationService + AudioCaptureService + AudioOutputService
{
}

// ---------------------------------------------------------------------------
// Desktop implementation
// ---------------------------------------------------------------------------

/// Default platform implementation for a headless desktop host.
///
/// Navigation is recorded rather than performed. The microphone is a test
/// signal generator (a steady 440 Hz sine) that can be switched off to
/// simulate a machine without an input device.
pub struct DesktopPlatform {
    location: String,
    opened_tabs: Vec<String>,
    capture_device: bool,
    capturing: bool,
    capture_pos: u64,
    clips: HashMap<u32, Vec<u8>>,
    next_clip: u32,
    clips_played: usize,
    tones_played: usize,
}

impl DesktopPlatform {
    pub fn new() -> Self {
        Self {
            location: "/".to_string(),
            opened_tabs: Vec::new(),
            capture_device: true,
            capturing: false,
            capture_pos: 0,
            clips: HashMap::new(),
            next_clip: 1,
            clips_played: 0,
            tones_played: 0,
        }
    }

    /// Enable or disable the test microphone.
    pub fn with_capture_device(mut self, available: bool) -> Self {
        self.capture_device = available;
        self
    }

    /// Path of the last in-place navigation.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// URLs opened in new tabs, oldest first.
    pub fn opened_tabs(&self) -> &[String] {
        &self.opened_tabs
    }

    /// Number of clips currently held.
    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }

    /// Byte length of a held clip.
    pub fn clip_len(&self, clip: ClipHandle) -> Option<usize> {
        self.clips.get(&clip.0).map(Vec::len)
    }

    pub fn clips_played(&self) -> usize {
        self.clips_played
    }

    pub fn tones_played(&self) -> usize {
        self.tones_played
    }
}

impl Default for DesktopPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeService for DesktopPlatform {
    fn now(&self) -> Result<SystemTime> {
        let now = Local::now();
        Ok(SystemTime {
            year: u16::try_from(now.year()).unwrap_or(0),
            month: now.month() as u8,
            day: now.day() as u8,
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            second: now.second() as u8,
        })
    }
}

impl NavigationService for DesktopPlatform {
    fn navigate(&mut self, path: &str) -> Result<()> {
        if path.is_empty() {
            return Err(FolioError::Navigation("empty navigation target".into()));
        }
        log::info!("Navigating to {path}");
        self.location = path.to_string();
        Ok(())
    }

    fn open_new_tab(&mut self, url: &str) -> Result<()> {
        if url.is_empty() {
            return Err(FolioError::Navigation("empty link target".into()));
        }
        log::info!("Opening new tab: {url}");
        self.opened_tabs.push(url.to_string());
        Ok(())
    }
}

impl AudioCaptureService for DesktopPlatform {
    fn start_capture(&mut self) -> Result<()> {
        if !self.capture_device {
            return Err(FolioError::CapabilityDenied(
                "Requested device not found".into(),
            ));
        }
        self.capturing = true;
        self.capture_pos = 0;
        Ok(())
    }

    fn take_chunks(&mut self, elapsed_ms: u32) -> Vec<AudioChunk> {
        if !self.capturing {
            return Vec::new();
        }
        let count = u64::from(elapsed_ms) * u64::from(SAMPLE_RATE) / 1000;
        if count == 0 {
            return Vec::new();
        }
        let pcm = sine_samples(440.0, 0.1, self.capture_pos, count as usize, SAMPLE_RATE);
        self.capture_pos += count;
        vec![AudioChunk(pcm_to_bytes(&pcm))]
    }

    fn stop_capture(&mut self) -> Result<()> {
        self.capturing = false;
        Ok(())
    }
}

impl AudioOutputService for DesktopPlatform {
    fn create_clip(&mut self, data: Vec<u8>, mime: &str) -> Result<ClipHandle> {
        let handle = ClipHandle(self.next_clip);
        self.next_clip += 1;
        log::debug!("Created clip {handle} ({mime}, {} bytes)", data.len());
        self.clips.insert(handle.0, data);
        Ok(handle)
    }

    fn release_clip(&mut self, clip: ClipHandle) {
        if self.clips.remove(&clip.0).is_some() {
            log::debug!("Released clip {clip}");
        }
    }

    fn play_clip(&mut self, clip: ClipHandle) -> Result<()> {
        let data = self
            .clips
            .get(&clip.0)
            .ok_or_else(|| FolioError::Platform(format!("unknown clip {clip}")))?;
        log::info!("Playing clip {clip} ({} bytes)", data.len());
        self.clips_played += 1;
        Ok(())
    }

    fn play_tone(&mut self, tone: &Tone) -> Result<()> {
        let pcm = synthesize_tone(tone, SAMPLE_RATE);
        let wav = encode_wav(&pcm_to_bytes(&pcm), SAMPLE_RATE);
        log::debug!(
            "Tone {} Hz for {}s ({} bytes)",
            tone.frequency_hz,
            tone.duration_secs,
            wav.len()
        );
        self.tones_played += 1;
        Ok(())
    }
}

impl Platform for DesktopPlatform {}

// ---------------------------------------------------------------------------
// In-module tests
// ---------------------------------------------------------------------------
