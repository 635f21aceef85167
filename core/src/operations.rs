use rand::Rng;
use rand::RngCore;

use crate::constants::{ADDRESS_MASK, DISPLAY_HEIGHT, DISPLAY_WIDTH, STACK_DEPTH};
use crate::error::Error;
use crate::opcode::Opcode;
use crate::state::State;

/// 00E0: clear the framebuffer
pub fn clear(state: &mut State) {
    state.frame_buffer = [0; DISPLAY_WIDTH * DISPLAY_HEIGHT];
    state.draw_flag = true;
}

/// 00EE: PC = stack.pop()
pub fn ret(state: &mut State) -> Result<(), Error> {
    if state.sp == 0 {
        return Err(Error::StackUnderflow);
    }
    state.sp -= 1;
    state.pc = state.stack[state.sp];
    Ok(())
}

/// 1NNN: PC = NNN
pub fn jump(op: Opcode, state: &mut State) {
    state.pc = op.nnn();
}

/// 2NNN: stack.push(PC); PC = NNN
pub fn call(op: Opcode, state: &mut State) -> Result<(), Error> {
    if state.sp == STACK_DEPTH {
        return Err(Error::StackOverflow);
    }
    state.stack[state.sp] = state.pc;
    state.sp += 1;
    state.pc = op.nnn();
    Ok(())
}

/// 3XNN: if Vx == NN then PC += 2
pub fn skip_eq(op: Opcode, state: &mut State) {
    if state.v[op.x()] == op.nn() {
        state.pc += 2;
    }
}

/// 4XNN: if Vx != NN then PC += 2
pub fn skip_ne(op: Opcode, state: &mut State) {
    if state.v[op.x()] != op.nn() {
        state.pc += 2;
    }
}

/// 5XY0: if Vx == Vy then PC += 2
pub fn skip_eq_reg(op: Opcode, state: &mut State) {
    if state.v[op.x()] == state.v[op.y()] {
        state.pc += 2;
    }
}

/// 6XNN: Vx = NN
pub fn set(op: Opcode, state: &mut State) {
    state.v[op.x()] = op.nn();
}

/// 7XNN: Vx += NN, wrapping; the carry flag is untouched
pub fn add(op: Opcode, state: &mut State) {
    state.v[op.x()] = state.v[op.x()].wrapping_add(op.nn());
}

/// 8XY0: Vx = Vy
pub fn copy(op: Opcode, state: &mut State) {
    state.v[op.x()] = state.v[op.y()];
}

/// 8XY1: Vx |= Vy
pub fn or(op: Opcode, state: &mut State) {
    state.v[op.x()] |= state.v[op.y()];
}

/// 8XY2: Vx &= Vy
pub fn and(op: Opcode, state: &mut State) {
    state.v[op.x()] &= state.v[op.y()];
}

/// 8XY3: Vx ^= Vy
pub fn xor(op: Opcode, state: &mut State) {
    state.v[op.x()] ^= state.v[op.y()];
}

/// 8XY4: Vx += Vy; VF = carry (cleared when there is none)
pub fn add_reg(op: Opcode, state: &mut State) {
    let (result, carry) = state.v[op.x()].overflowing_add(state.v[op.y()]);
    state.v[0xF] = carry as u8;
    state.v[op.x()] = result;
}

/// 8XY6: VF = lsb(Vx); Vx >>= 1
pub fn shift_right(op: Opcode, state: &mut State) {
    state.v[0xF] = state.v[op.x()] & 0x1;
    state.v[op.x()] >>= 1;
}

/// 8XYE: VF = msb(Vx); Vx <<= 1
pub fn shift_left(op: Opcode, state: &mut State) {
    state.v[0xF] = state.v[op.x()] >> 7;
    state.v[op.x()] <<= 1;
}

/// 9XY0: if Vx != Vy then PC += 2
pub fn skip_ne_reg(op: Opcode, state: &mut State) {
    if state.v[op.x()] != state.v[op.y()] {
        state.pc += 2;
    }
}

/// ANNN: I = NNN
pub fn set_index(op: Opcode, state: &mut State) {
    state.i = op.nnn();
}

/// BNNN: PC = NNN + V0
pub fn jump_offset(op: Opcode, state: &mut State) {
    state.pc = (op.nnn() + u16::from(state.v[0])) & ADDRESS_MASK;
}

/// CXNN: Vx = random byte AND NN
pub fn random(op: Opcode, state: &mut State, rng: &mut dyn RngCore) {
    state.v[op.x()] = rng.gen::<u8>() & op.nn();
}

/// DXYN: XOR an N-row sprite from memory[I..] onto the framebuffer at
/// (Vx % 64, Vy % 32); VF = 1 if any lit cell was erased.
///
/// Only the origin wraps. Sprite rows and columns that run past the display
/// edge are clipped rather than wrapped around.
pub fn draw(op: Opcode, state: &mut State) {
    let origin_x = state.v[op.x()] as usize % DISPLAY_WIDTH;
    let origin_y = state.v[op.y()] as usize % DISPLAY_HEIGHT;
    state.v[0xF] = 0;

    for row in 0..op.n() as usize {
        let y = origin_y + row;
        if y >= DISPLAY_HEIGHT {
            break;
        }
        let sprite_row = state.memory[(state.i as usize + row) & ADDRESS_MASK as usize];
        for bit in 0..8 {
            let x = origin_x + bit;
            if x >= DISPLAY_WIDTH {
                break;
            }
            if sprite_row & (0x80 >> bit) != 0 {
                let cell = &mut state.frame_buffer[y * DISPLAY_WIDTH + x];
                if *cell == 1 {
                    state.v[0xF] = 1;
                }
                *cell ^= 1;
            }
        }
    }

    state.draw_flag = true;
}

/// EX9E: if key Vx is pressed then PC += 2
pub fn skip_pressed(op: Opcode, state: &mut State, keys: &[bool; 16]) {
    if keys[state.v[op.x()] as usize & 0xF] {
        state.pc += 2;
    }
}

/// EXA1: if key Vx is not pressed then PC += 2
pub fn skip_released(op: Opcode, state: &mut State, keys: &[bool; 16]) {
    if !keys[state.v[op.x()] as usize & 0xF] {
        state.pc += 2;
    }
}

/// FX07: Vx = delay timer
pub fn read_delay(op: Opcode, state: &mut State) {
    state.v[op.x()] = state.delay_timer;
}

/// FX0A: suspend cycles until the host delivers a key press into Vx
pub fn wait_key(op: Opcode, state: &mut State) {
    state.register_needing_key = Some(op.x());
}

/// FX15: delay timer = Vx
pub fn set_delay(op: Opcode, state: &mut State) {
    state.delay_timer = state.v[op.x()];
}

/// FX18: sound timer = Vx
pub fn set_sound(op: Opcode, state: &mut State) {
    state.sound_timer = state.v[op.x()];
}

/// FX1E: I += Vx; no overflow flag
pub fn add_index(op: Opcode, state: &mut State) {
    state.i = state.i.wrapping_add(u16::from(state.v[op.x()]));
}

/// FX33: memory[I..I+3] = the decimal digits of Vx
pub fn store_bcd(op: Opcode, state: &mut State) {
    let value = state.v[op.x()];
    let i = state.i as usize;
    state.memory[i & ADDRESS_MASK as usize] = value / 100;
    state.memory[(i + 1) & ADDRESS_MASK as usize] = value / 10 % 10;
    state.memory[(i + 2) & ADDRESS_MASK as usize] = value % 10;
}

/// FX55: memory[I..I+X] = V0..Vx inclusive
pub fn dump_registers(op: Opcode, state: &mut State) {
    for index in 0..=op.x() {
        state.memory[(state.i as usize + index) & ADDRESS_MASK as usize] = state.v[index];
    }
}

/// FX65: V0..Vx inclusive = memory[I..I+X]
pub fn load_registers(op: Opcode, state: &mut State) {
    for index in 0..=op.x() {
        state.v[index] = state.memory[(state.i as usize + index) & ADDRESS_MASK as usize];
    }
}
