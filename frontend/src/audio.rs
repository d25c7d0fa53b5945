use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

pub const SAMPLE_RATE: u32 = 44_100;

/// Number of interleaved stereo frames over which to fade in/out (~5.8 ms).
const FADE_FRAMES: u32 = 256;

pub(crate) struct AudioPlayer {
    buffer: Arc<Mutex<VecDeque<i16>>>,
    fade_in_pos: u32,
    fading_out: Arc<AtomicBool>,
    fade_out_pos: u32,
}

impl AudioCallback for AudioPlayer {
    type Channel = i16;
    fn callback(&mut self, out: &mut [i16]) {
        let mut buf = self.buffer.lock().unwrap();
        for frame in out.chunks_mut(2) {
            let raw = [buf.pop_front().unwrap_or(0), buf.pop_front().unwrap_or(0)];

            let gain = if self.fade_in_pos < FADE_FRAMES {
                let g = self.fade_in_pos as f32 / FADE_FRAMES as f32;
                self.fade_in_pos += 1;
                Some(g)
            } else if self.fading_out.load(Ordering::Relaxed) {
                if self.fade_out_pos < FADE_FRAMES {
                    let g = 1.0 - (self.fade_out_pos as f32 / FADE_FRAMES as f32);
                    self.fade_out_pos += 1;
                    Some(g)
                } else {
                    Some(0.0)
                }
            } else {
                None
            };

            for (i, sample) in frame.iter_mut().enumerate() {
                *sample = match gain {
                    Some(g) => (raw[i] as f32 * g) as i16,
                    None => raw[i],
                };
            }
        }
    }
}

/// Shared interleaved stereo ring buffer: the emulator thread pushes
/// `[left, right]` pairs in; the SDL audio callback thread pops them out.
pub type AudioRing = Arc<Mutex<VecDeque<i16>>>;

/// Handle for signalling the audio callback to fade out before shutdown.
pub type FadeOut = Arc<AtomicBool>;

/// Initialize SDL2 stereo audio playback at [`SAMPLE_RATE`].
pub fn init(sdl_audio: &sdl2::AudioSubsystem) -> (AudioDevice<AudioPlayer>, AudioRing, FadeOut) {
    let ring: AudioRing = Arc::new(Mutex::new(VecDeque::with_capacity(8192)));
    let fade_out: FadeOut = Arc::new(AtomicBool::new(false));

    let desired_spec = AudioSpecDesired {
        freq: Some(SAMPLE_RATE as i32),
        channels: Some(2),
        samples: Some(1024), // ~23 ms at 44100 Hz
    };

    let device = sdl_audio
        .open_playback(None, &desired_spec, |_spec| AudioPlayer {
            buffer: Arc::clone(&ring),
            fade_in_pos: 0,
            fading_out: Arc::clone(&fade_out),
            fade_out_pos: 0,
        })
        .expect("Failed to open SDL audio device");

    (device, ring, fade_out)
}

/// Convert a core stereo sample (roughly 0.0..1.0 per channel) to signed
/// 16-bit PCM and push it onto the ring buffer.
pub fn push_sample(ring: &AudioRing, sample: dmg_core::apu::StereoSample) {
    let mut buf = ring.lock().unwrap();
    buf.push_back((sample.left.clamp(-1.0, 1.0) * i16::MAX as f32) as i16);
    buf.push_back((sample.right.clamp(-1.0, 1.0) * i16::MAX as f32) as i16);
}

/// Duration to sleep after signalling fade-out, allowing the callback to
/// ramp down before the device is paused.
pub fn fade_out_duration() -> std::time::Duration {
    std::time::Duration::from_millis(10)
}
