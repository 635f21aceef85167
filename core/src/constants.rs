/// Total addressable memory in bytes.
pub const MEMORY_SIZE: usize = 4096;

/// Mask that keeps an effective address inside the 12-bit address space.
pub const ADDRESS_MASK: u16 = 0x0FFF;

/// Programs are loaded at 0x200; everything below is interpreter-reserved.
pub const PROGRAM_START: u16 = 0x200;

/// The largest program that fits between 0x200 and the end of memory.
pub const MAX_PROGRAM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Maximum number of nested subroutine calls.
pub const STACK_DEPTH: usize = 16;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Nanoseconds per CPU cycle at the default 500Hz clock.
pub const CYCLE_NANOS: u32 = 2_000_000;

/// Built-in glyphs for the hexadecimal digits 0..F.
///
/// Each glyph is a 4x5 bitmap stored as 5 bytes (one row per byte, high
/// nibble only). The whole sheet occupies the first 80 bytes of memory.
pub const FONT_SET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
