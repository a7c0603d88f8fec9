//! REG-format conditional block, opcode byte `0x78..=0x7F`: `add<cc>`,
//! `sub<cc>`, `sel<cc>`. The floating-point ALU operations that share this
//! block are not implemented.

use crate::bits::bit_select;
use crate::branch::check_cond;
use crate::decode::RegOperands;
use crate::env::Environment;
use crate::fault::Fault;
use crate::state::Core;

use super::reg_core::reg_add;

fn reg_addcc<E: Environment>(core: &mut Core, env: &mut E, op: u32, r: &RegOperands) {
    if check_cond(core, op) {
        reg_add(core, env, op, r.a, r.b, r.c);
    }
}

fn reg_selcc(core: &mut Core, op: u32, r: &RegOperands) {
    core.r[r.c] = if check_cond(core, op) { r.b } else { r.a };
}

/// Execute an opcode in the `0x78..=0x7F` block.
pub fn execute<E: Environment>(core: &mut Core, env: &mut E, op: u32, r: &RegOperands) {
    if bit_select(op, 10) {
        env.fault(Fault::InvalidOpcode);
    } else if bit_select(op, 9) {
        reg_selcc(core, op, r);
    } else {
        reg_addcc(core, env, op, r);
    }
}
