//! CTRL-format execution: unconditional/conditional branches, `call`,
//! `ret`, and `fault<cc>`.

use crate::branch;
use crate::decode::{ctrl_disp, ctrl_opcode, ctrl_r_bit};
use crate::env::Environment;
use crate::fault::Fault;
use crate::state::{Core, LP};

/// Execute a CTRL-format instruction. `core.ip` must already have been
/// advanced to the address of the following instruction.
pub fn execute<E: Environment>(core: &mut Core, env: &mut E, op: u32) {
    if ctrl_r_bit(op) {
        env.fault(Fault::InvalidOpcode);
        return;
    }

    let efa = core.ip.wrapping_add(ctrl_disp(op) as u32);

    match ctrl_opcode(op) {
        0x08 => branch::b(core, efa),
        0x09 => branch::call(core, env, efa),
        0x0A => branch::ret(core, env),
        0x0B => branch::bal(core, efa, LP),
        0x10..=0x17 => branch::bcc(core, op, efa),
        0x18..=0x1F => {
            if branch::check_cond(core, op) {
                env.fault(Fault::ConstraintRange);
            }
        }
        _ => env.fault(Fault::InvalidOpcode),
    }
}
