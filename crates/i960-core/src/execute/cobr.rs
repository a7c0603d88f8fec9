//! COBR-format execution: `test<cc>`, `bbc`/`bbs`, `cmpob<cc>`/`cmpib<cc>`.

use crate::bits::bit_select;
use crate::branch;
use crate::compare::cmp;
use crate::decode::{cobr_disp, cobr_operands, cobr_opcode};
use crate::state::Core;

fn set_cond(core: &mut Core, cc: u32) {
    core.set_cc(cc);
}

fn test_cc(core: &mut Core, op: u32, c: usize) {
    core.r[c] = u32::from(branch::check_cond(core, op));
}

fn bb(core: &mut Core, op: u32, a: u32, b: u32, disp: i32) {
    let c0 = bit_select(op, 24);
    let ok = !(bit_select(b, a) ^ c0);
    set_cond(core, if ok { 2 } else { 0 });
    if ok {
        branch::b(core, core.ip.wrapping_add(disp as u32));
    }
}

fn cmp_bcc(core: &mut Core, op: u32, a: u32, b: u32, disp: i32) {
    let integer = bit_select(op, 27);
    cmp(core, a, b, integer);
    branch::bcc(core, op, core.ip.wrapping_add(disp as u32));
}

/// Execute a COBR-format instruction. `core.ip` must already have been
/// advanced to the address of the following instruction.
pub fn execute(core: &mut Core, op: u32) {
    let (a, b, c) = cobr_operands(core, op);
    let disp = cobr_disp(op);
    let opcode = cobr_opcode(op);

    if !bit_select(op, 28) {
        test_cc(core, op, c);
    } else if opcode == 0x30 || opcode == 0x37 {
        bb(core, op, a, b, disp);
    } else {
        cmp_bcc(core, op, a, b, disp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmpibe_branches_on_equal() {
        let mut core = Core::new();
        core.r[4] = 5;
        core.ip = 0x1000;
        // cmpibe r4(literal 5 as c-field), disp=0x10: opcode 0x3A, M1=1, c=5
        let disp_field = 0x10u32 & 0x1FFC;
        let op = (0x3A << 24) | (5 << 19) | (4 << 14) | (1 << 13) | disp_field;
        execute(&mut core, op);
        assert_eq!(core.cc(), 2);
        assert_eq!(core.ip, 0x1010);
    }

    #[test]
    fn testcc_writes_boolean_result() {
        let mut core = Core::new();
        core.set_cc(0b010);
        let op = (0x22 << 24) | (7 << 19); // teste, c = r7
        execute(&mut core, op);
        assert_eq!(core.r[7], 1);
    }
}
