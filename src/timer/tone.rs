// src/timer/tone.rs
//
// Completion beep: a sine wave whose gain falls exponentially, rendered to
// 16-bit mono PCM and wrapped in a WAV container for the platform player.

use std::f32::consts::TAU;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::config::consts::*;
use crate::error::BeepError;
use super::ports::Beeper;

#[derive(Clone, Debug, PartialEq)]
pub struct Tone {
    pub freq_hz: f32,
    pub secs: f32,
    pub gain_start: f32,
    pub gain_end: f32,
    pub sample_rate: u32,
}

impl Tone {
    /// 800 Hz, 0.3 -> 0.01 over half a second.
    pub fn completion() -> Self {
        Self {
            freq_hz: BEEP_HZ,
            secs: BEEP_SECS,
            gain_start: BEEP_GAIN_START,
            gain_end: BEEP_GAIN_END,
            sample_rate: BEEP_SAMPLE_RATE,
        }
    }

    /// Exponential ramp from `gain_start` at 0 to `gain_end` at `secs`.
    pub fn gain_at(&self, t: f32) -> f32 {
        if self.secs <= 0.0 || self.gain_start <= 0.0 {
            return 0.0;
        }
        let x = (t / self.secs).clamp(0.0, 1.0);
        self.gain_start * (self.gain_end / self.gain_start).powf(x)
    }

    pub fn sample_count(&self) -> usize {
        (self.secs.max(0.0) * self.sample_rate as f32).round() as usize
    }

    pub fn samples(&self) -> Vec<i16> {
        let rate = self.sample_rate as f32;
        (0..self.sample_count())
            .map(|i| {
                let t = i as f32 / rate;
                let v = (TAU * self.freq_hz * t).sin() * self.gain_at(t);
                (v.clamp(-1.0, 1.0) * i16::MAX as f32) as i16
            })
            .collect()
    }

    /// RIFF/WAVE, PCM 16-bit mono.
    pub fn to_wav(&self) -> Vec<u8> {
        let samples = self.samples();
        let data_len = (samples.len() * 2) as u32;
        let byte_rate = self.sample_rate * 2;

        let mut out = Vec::with_capacity(44 + data_len as usize);
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(36 + data_len).to_le_bytes());
        out.extend_from_slice(b"WAVE");
        out.extend_from_slice(b"fmt ");
        out.extend_from_slice(&16u32.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // PCM
        out.extend_from_slice(&1u16.to_le_bytes()); // mono
        out.extend_from_slice(&self.sample_rate.to_le_bytes());
        out.extend_from_slice(&byte_rate.to_le_bytes());
        out.extend_from_slice(&2u16.to_le_bytes()); // block align
        out.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
        out.extend_from_slice(b"data");
        out.extend_from_slice(&data_len.to_le_bytes());
        for s in samples {
            out.extend_from_slice(&s.to_le_bytes());
        }
        out
    }
}

/// Plays tones through whatever command-line player the OS ships.
pub struct SystemBeeper {
    wav_path: PathBuf,
}

impl SystemBeeper {
    pub fn new() -> Self {
        Self { wav_path: std::env::temp_dir().join("tgstat_tools_beep.wav") }
    }

    fn player(&self) -> Option<Command> {
        let path = self.wav_path.as_os_str();
        if cfg!(target_os = "macos") {
            let mut c = Command::new("afplay");
            c.arg(path);
            Some(c)
        } else if cfg!(target_os = "windows") {
            let mut c = Command::new("powershell");
            c.args(["-NoProfile", "-Command"]).arg(format!(
                "(New-Object Media.SoundPlayer '{}').PlaySync()",
                self.wav_path.display()
            ));
            Some(c)
        } else if cfg!(unix) {
            let mut c = Command::new("aplay");
            c.arg("-q").arg(path);
            Some(c)
        } else {
            None
        }
    }
}

impl Default for SystemBeeper {
    fn default() -> Self { Self::new() }
}

impl Beeper for SystemBeeper {
    fn beep(&mut self, tone: &Tone) -> Result<(), BeepError> {
        let mut cmd = self.player().ok_or(BeepError::Unsupported)?;
        fs::write(&self.wav_path, tone.to_wav())?;
        let mut child = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        // reap in the background; playback outcome is irrelevant
        std::thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gain_ramps_from_start_to_end() {
        let t = Tone::completion();
        assert!((t.gain_at(0.0) - 0.3).abs() < 1e-6);
        assert!((t.gain_at(0.5) - 0.01).abs() < 1e-6);
        assert!(t.gain_at(0.25) < 0.3 && t.gain_at(0.25) > 0.01);
        // past the end stays at the floor
        assert!((t.gain_at(2.0) - 0.01).abs() < 1e-6);
    }

    #[test]
    fn half_second_at_44k1() {
        let t = Tone::completion();
        assert_eq!(t.sample_count(), 22_050);
        let peak = t.samples().iter().map(|s| s.unsigned_abs()).max().unwrap();
        // 0.3 gain ceiling
        assert!(peak <= (0.3 * i16::MAX as f32) as u16 + 1);
        assert!(peak > 0);
    }

    #[test]
    fn wav_header_is_well_formed() {
        let t = Tone { secs: 0.01, ..Tone::completion() };
        let wav = t.to_wav();
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[36..40], b"data");
        let data_len = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]) as usize;
        assert_eq!(data_len, t.sample_count() * 2);
        assert_eq!(wav.len(), 44 + data_len);
    }
}
