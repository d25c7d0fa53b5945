use std::time::Instant;

use dmg_core::prelude::Machine;
use dmg_core::system::Console;
use sdl2::event::Event;
use sdl2::keyboard::Scancode;

use crate::audio::{self, AudioRing};
use crate::input::KeyMap;
use crate::overlay;
use crate::video::Video;

/// The four DMG LCD shades, palette index -> RGB24, darkest last.
const SHADES: [[u8; 3]; 4] = [[0x9B, 0xBC, 0x0F], [0x8B, 0xAC, 0x0F], [0x30, 0x62, 0x30], [0x0F, 0x38, 0x0F]];

/// A Game Boy frame is 70224 clock cycles at 4194304 Hz, ~16.74 ms.
const FRAME_SECONDS: f64 = 70224.0 / 4_194_304.0;

pub fn run(console: &mut Console, key_map: &KeyMap, scale: u32, show_fps: bool) {
    let sdl_context = sdl2::init().expect("Failed to initialize SDL2");
    let sdl_video = sdl_context.video().expect("Failed to init SDL video");
    let sdl_audio = sdl_context.audio().expect("Failed to init SDL audio");

    let (width, height) = console.display_size();
    let mut video = Video::new(&sdl_video, "DMG Emulator", width, height, scale);
    let mut event_pump = sdl_context.event_pump().expect("Failed to get event pump");

    let (audio_device, audio_ring, fade_out) = audio::init(&sdl_audio);
    audio_device.resume();

    let indexed_len = (width * height) as usize;
    let mut indexed = vec![0u8; indexed_len];
    let mut rgb = vec![0u8; indexed_len * 3];

    let mut last_frame = Instant::now();
    let mut fps = 0.0f64;

    'main: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'main,
                Event::KeyDown { scancode: Some(Scancode::Escape), .. } => break 'main,
                Event::KeyDown { scancode: Some(sc), repeat: false, .. } => {
                    if let Some(button_id) = key_map.get(sc) {
                        console.set_input(button_id, true);
                    }
                }
                Event::KeyUp { scancode: Some(sc), .. } => {
                    if let Some(button_id) = key_map.get(sc) {
                        console.set_input(button_id, false);
                    }
                }
                _ => {}
            }
        }

        console.run_frame();
        if let Some(fault) = console.fault() {
            log::error!("halting: {fault}");
            break;
        }
        feed_audio_for_frame(console, &audio_ring);

        console.render_frame(&mut indexed);
        decode_palette(&indexed, &mut rgb);

        let now = Instant::now();
        let elapsed = now.duration_since(last_frame);
        last_frame = now;
        if elapsed.as_secs_f64() > 0.0 {
            fps = 0.9 * fps + 0.1 * (1.0 / elapsed.as_secs_f64());
        }
        if show_fps {
            overlay::draw_fps(&mut rgb, width as usize, &format!("{fps:.1}"));
        }

        video.present(&rgb);
    }

    fade_out.store(true, std::sync::atomic::Ordering::Relaxed);
    std::thread::sleep(audio::fade_out_duration());
}

fn decode_palette(indexed: &[u8], rgb: &mut [u8]) {
    for (px, chunk) in indexed.iter().zip(rgb.chunks_mut(3)) {
        let color = SHADES[(*px & 0x03) as usize];
        chunk.copy_from_slice(&color);
    }
}

/// Pull one frame's worth of audio samples at the host sample rate (~738
/// stereo frames at 44100 Hz).
fn feed_audio_for_frame(console: &mut Console, ring: &AudioRing) {
    let dt = 1.0 / audio::SAMPLE_RATE as f64;
    let samples = (FRAME_SECONDS / dt).round() as u32;
    let apu = console.bus_mut().apu_mut();
    for _ in 0..samples {
        apu.tick_sample(dt);
        audio::push_sample(ring, apu.current_sample());
    }
}
