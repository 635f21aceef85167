use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use sdl2::event::Event;
use tracing::info;

use chipeit_core::constants::CYCLE_NANOS;
use chipeit_core::Chip8;
use chipeit_display::Display;

use crate::keymap::keymap;

/// Drives the interpreter: loads the ROM, then interleaves input polling,
/// `step`, rendering, and sleep-based pacing until the window closes or the
/// interpreter faults.
pub fn run(rom: PathBuf) -> Result<(), String> {
    let mut chip8 = Chip8::new();

    let program = fs::read(&rom).map_err(|e| format!("unable to read {}: {e}", rom.display()))?;
    chip8.load(&program).map_err(|e| e.to_string())?;
    info!("loaded {} ({} bytes)", rom.display(), program.len());

    let sdl = sdl2::init()?;
    let mut display = Display::new(&sdl)?;
    let mut events = sdl.event_pump()?;

    let cycle_time = Duration::new(0, CYCLE_NANOS);
    let mut last_cycle = Instant::now();
    let mut tone_on = false;

    'event: loop {
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.key_press(kc);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(kc) = keymap(key) {
                        chip8.key_release(kc);
                    }
                }
                _ => continue,
            };
        }

        chip8.step().map_err(|e| e.to_string())?;

        if let Some(frame) = chip8.take_frame() {
            display.render(frame)?;
        }

        // No audio backend; surface the sound timer's tone as a log line.
        if chip8.sound_active() != tone_on {
            tone_on = !tone_on;
            info!("tone {}", if tone_on { "on" } else { "off" });
        }

        // The core has no opinion on timing; pace the cycle rate here.
        let elapsed = last_cycle.elapsed();
        if cycle_time > elapsed {
            std::thread::sleep(cycle_time - elapsed);
        }
        last_cycle = Instant::now();
    }

    Ok(())
}
