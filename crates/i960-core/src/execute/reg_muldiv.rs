//! REG-format multiply/divide block, opcode bytes `0x70` and `0x74`:
//! `mulo`/`remo`/`divo` (ordinal) and `muli`/`remi`/`modi`/`divi` (integer).

use crate::bits::bit_select;
use crate::decode::RegOperands;
use crate::env::Environment;
use crate::execute::common::{div_check, on_overflow};
use crate::state::Core;

fn reg_mulo(core: &mut Core, a: u32, b: u32, c: usize) {
    core.r[c] = a.wrapping_mul(b);
}

fn reg_divo<E: Environment>(core: &mut Core, env: &mut E, op: u32, a: u32, b: u32, c: usize) {
    if !div_check(core, env, a) {
        return;
    }
    core.r[c] = if bit_select(op, 8) { b / a } else { b % a };
}

fn reg_70<E: Environment>(core: &mut Core, env: &mut E, op: u32, r: &RegOperands) {
    if bit_select(op, 10) {
        reg_divo(core, env, op, r.a, r.b, r.c);
    } else {
        reg_mulo(core, r.a, r.b, r.c);
    }
}

fn reg_muli<E: Environment>(core: &mut Core, env: &mut E, a: u32, b: u32, c: usize) {
    let r = i64::from(a as i32) * i64::from(b as i32);
    core.r[c] = r as u32;
    on_overflow(core, env, r < i64::from(i32::MIN) || r > i64::from(i32::MAX));
}

fn reg_remi<E: Environment>(core: &mut Core, env: &mut E, op: u32, a: u32, b: u32, c: usize) {
    if !div_check(core, env, a) {
        return;
    }
    let r = (b as i32) % (a as i32);
    let modi = bit_select(op, 7);
    core.r[c] = if modi && r != 0 && ((a ^ b) as i32) < 0 {
        (r + a as i32) as u32
    } else {
        r as u32
    };
}

fn reg_divi<E: Environment>(core: &mut Core, env: &mut E, a: u32, b: u32, c: usize) {
    if !div_check(core, env, a) {
        return;
    }
    let r = (b as i32).wrapping_div(a as i32);
    core.r[c] = r as u32;
    on_overflow(core, env, ((a ^ b ^ r as u32) as i32) < 0);
}

fn reg_74<E: Environment>(core: &mut Core, env: &mut E, op: u32, r: &RegOperands) {
    if !bit_select(op, 10) {
        reg_muli(core, env, r.a, r.b, r.c);
    } else if bit_select(op, 8) {
        reg_divi(core, env, r.a, r.b, r.c);
    } else {
        reg_remi(core, env, op, r.a, r.b, r.c);
    }
}

/// Execute an opcode in the `0x70..=0x77` block.
pub fn execute<E: Environment>(core: &mut Core, env: &mut E, op: u32, r: &RegOperands) {
    if bit_select(op, 26) {
        reg_74(core, env, op, r);
    } else {
        reg_70(core, env, op, r);
    }
}
