use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::trace;

use crate::constants::{ADDRESS_MASK, MAX_PROGRAM_SIZE, PROGRAM_START};
use crate::error::Error;
use crate::instruction;
use crate::opcode::Opcode;
use crate::state::{FrameBuffer, State};

/// The CHIP-8 virtual machine core.
///
/// Owns all interpreter state and advances it one instruction per [`step`].
/// The host drives everything else: it loads a program once, calls `step` at
/// whatever cadence it wants, feeds key state in through [`key_press`] /
/// [`key_release`], and reads the framebuffer and sound signal back out.
/// There is no I/O and no blocking anywhere in the core.
///
/// [`step`]: Chip8::step
/// [`key_press`]: Chip8::key_press
/// [`key_release`]: Chip8::key_release
pub struct Chip8 {
    state: State,
    pressed_keys: [bool; 16],
    rng: Box<dyn RngCore>,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::with_rng(Box::new(StdRng::from_entropy()))
    }

    /// Builds an interpreter with an injected random source, so runs can be
    /// made deterministic.
    pub fn with_rng(rng: Box<dyn RngCore>) -> Self {
        Chip8 {
            state: State::new(),
            pressed_keys: [false; 16],
            rng,
        }
    }

    /// Copies a program into memory starting at 0x200.
    ///
    /// The bytes are not validated in any way; malformed programs only show
    /// up at execution time as unknown opcodes. Meant to be called once,
    /// before stepping begins.
    pub fn load(&mut self, program: &[u8]) -> Result<(), Error> {
        if program.len() > MAX_PROGRAM_SIZE {
            return Err(Error::ProgramTooLarge {
                size: program.len(),
            });
        }
        let start = PROGRAM_START as usize;
        self.state.memory[start..start + program.len()].copy_from_slice(program);
        Ok(())
    }

    /// Runs a single fetch-decode-execute cycle followed by a timer tick.
    ///
    /// While a key-wait instruction is pending the cycle is suspended: no
    /// fetch happens and the timers hold, until the host delivers a key via
    /// [`key_press`](Chip8::key_press).
    pub fn step(&mut self) -> Result<(), Error> {
        if self.state.register_needing_key.is_some() {
            return Ok(());
        }

        let op = self.fetch();
        trace!("executing {op} at {:#05X}", self.state.pc);

        // The pc advances before execution so jumps and calls land cleanly.
        self.state.pc = (self.state.pc + 2) & ADDRESS_MASK;
        instruction::execute(op, &mut self.state, &self.pressed_keys, self.rng.as_mut())?;
        self.state.tick_timers();
        Ok(())
    }

    /// Composes the two bytes at the pc into a big-endian instruction word.
    fn fetch(&self) -> Opcode {
        let pc = self.state.pc & ADDRESS_MASK;
        let high = self.state.memory[pc as usize];
        let low = self.state.memory[((pc + 1) & ADDRESS_MASK) as usize];
        Opcode::new(u16::from(high) << 8 | u16::from(low))
    }

    /// Read-only view of the 64x32 pixel grid.
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Returns the framebuffer if it changed since the last take, so the
    /// host only re-renders when a clear or draw actually happened.
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Marks key 0..F as held down and satisfies a pending key-wait.
    pub fn key_press(&mut self, key: u8) {
        let key = key as usize & 0xF;
        self.pressed_keys[key] = true;
        if let Some(register) = self.state.register_needing_key.take() {
            self.state.v[register] = key as u8;
        }
    }

    /// Marks key 0..F as released.
    pub fn key_release(&mut self, key: u8) {
        self.pressed_keys[key as usize & 0xF] = false;
    }

    /// Whether the host should be emitting a tone right now.
    pub fn sound_active(&self) -> bool {
        self.state.sound_timer > 0
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
