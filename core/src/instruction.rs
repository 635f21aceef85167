use rand::RngCore;
use tracing::warn;

use crate::error::Error;
use crate::opcode::Opcode;
use crate::operations;
use crate::state::State;

/// Applies the state transition an opcode selects.
///
/// Dispatch is cased on the opcode's top nibble and, for the 0x0/0x8/0xE/0xF
/// families, its trailing sub-opcode. Encodings outside the table are logged
/// and skipped without touching any state; stack faults are the only fatal
/// outcomes.
pub fn execute(
    op: Opcode,
    state: &mut State,
    keys: &[bool; 16],
    rng: &mut dyn RngCore,
) -> Result<(), Error> {
    match op.nibbles() {
        (0x0, 0x0, 0xE, 0x0) => operations::clear(state),
        (0x0, 0x0, 0xE, 0xE) => operations::ret(state)?,
        (0x1, ..) => operations::jump(op, state),
        (0x2, ..) => operations::call(op, state)?,
        (0x3, ..) => operations::skip_eq(op, state),
        (0x4, ..) => operations::skip_ne(op, state),
        (0x5, .., 0x0) => operations::skip_eq_reg(op, state),
        (0x6, ..) => operations::set(op, state),
        (0x7, ..) => operations::add(op, state),
        (0x8, .., 0x0) => operations::copy(op, state),
        (0x8, .., 0x1) => operations::or(op, state),
        (0x8, .., 0x2) => operations::and(op, state),
        (0x8, .., 0x3) => operations::xor(op, state),
        (0x8, .., 0x4) => operations::add_reg(op, state),
        (0x8, .., 0x6) => operations::shift_right(op, state),
        (0x8, .., 0xE) => operations::shift_left(op, state),
        (0x9, .., 0x0) => operations::skip_ne_reg(op, state),
        (0xA, ..) => operations::set_index(op, state),
        (0xB, ..) => operations::jump_offset(op, state),
        (0xC, ..) => operations::random(op, state, rng),
        (0xD, ..) => operations::draw(op, state),
        (0xE, .., 0x9, 0xE) => operations::skip_pressed(op, state, keys),
        (0xE, .., 0xA, 0x1) => operations::skip_released(op, state, keys),
        (0xF, .., 0x0, 0x7) => operations::read_delay(op, state),
        (0xF, .., 0x0, 0xA) => operations::wait_key(op, state),
        (0xF, .., 0x1, 0x5) => operations::set_delay(op, state),
        (0xF, .., 0x1, 0x8) => operations::set_sound(op, state),
        (0xF, .., 0x1, 0xE) => operations::add_index(op, state),
        (0xF, .., 0x3, 0x3) => operations::store_bcd(op, state),
        (0xF, .., 0x5, 0x5) => operations::dump_registers(op, state),
        (0xF, .., 0x6, 0x5) => operations::load_registers(op, state),
        _ => warn!("unknown opcode {op}, skipping"),
    };
    Ok(())
}
