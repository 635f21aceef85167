use std::fmt;

/// A 2-byte big-endian instruction word.
///
/// Which operation an opcode selects is determined by some combination of its
/// top nibble and, for the 0x0/0x8/0xE/0xF families, a trailing sub-opcode.
/// The remaining nibbles carry the operands:
/// - `x` (bits 11-8) and `y` (bits 7-4) are register indices
/// - `n` (bits 3-0) is a 4-bit immediate
/// - `nn` (bits 7-0) is an 8-bit immediate
/// - `nnn` (bits 11-0) is a 12-bit address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode(u16);

impl Opcode {
    pub fn new(word: u16) -> Self {
        Opcode(word)
    }

    /// The component nibbles, most significant first.
    pub fn nibbles(self) -> (u8, u8, u8, u8) {
        (
            (self.0 >> 12) as u8,
            self.x() as u8,
            self.y() as u8,
            self.n(),
        )
    }

    /// Register index operand Vx.
    pub fn x(self) -> usize {
        ((self.0 >> 8) & 0xF) as usize
    }

    /// Register index operand Vy.
    pub fn y(self) -> usize {
        ((self.0 >> 4) & 0xF) as usize
    }

    /// 4-bit immediate.
    pub fn n(self) -> u8 {
        (self.0 & 0xF) as u8
    }

    /// 8-bit immediate.
    pub fn nn(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// 12-bit address immediate.
    pub fn nnn(self) -> u16 {
        self.0 & 0xFFF
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}
