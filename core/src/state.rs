use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_SET, MEMORY_SIZE, PROGRAM_START, STACK_DEPTH,
};

/// The framebuffer is a flat row-major grid of 1-bit cells, indexed as
/// `[y * DISPLAY_WIDTH + x]`. Cells are exactly 0 or 1.
pub type FrameBuffer = [u8; DISPLAY_WIDTH * DISPLAY_HEIGHT];

/// The interpreter's internal state.
///
/// ## CPU
/// - (v) 16 8-bit registers V0..VF; VF doubles as the carry/borrow/collision
///   flag and is clobbered by any instruction that produces one
/// - (i) a 16-bit memory address register
/// - (pc) a 16-bit program counter, starting at 0x200
/// - (sp) the call stack pointer; `stack[sp]` is the next free slot
///
/// ## Memory
/// - 4096 bytes of addressable memory with the font sheet at 0x000..0x050
///   and program space from 0x200
/// - a 16-entry stack of return addresses
///
/// ## Timers
/// - two 8-bit countdown timers (delay & sound), each decremented once per
///   executed cycle and floored at 0
#[derive(Clone)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: usize,
    pub stack: [u16; STACK_DEPTH],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub draw_flag: bool,
    /// Set by the key-wait instruction; while `Some`, cycles are suspended
    /// until the host delivers a key press for this register.
    pub register_needing_key: Option<usize>,
}

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        memory[..FONT_SET.len()].copy_from_slice(&FONT_SET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            stack: [0; STACK_DEPTH],
            memory,
            frame_buffer: [0; DISPLAY_WIDTH * DISPLAY_HEIGHT],
            delay_timer: 0,
            sound_timer: 0,
            draw_flag: false,
            register_needing_key: None,
        }
    }

    /// Count both timers down by one, flooring at zero.
    pub fn tick_timers(&mut self) {
        if self.delay_timer > 0 {
            self.delay_timer -= 1;
        }
        if self.sound_timer > 0 {
            self.sound_timer -= 1;
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
