//! The three-way and constrained compare primitives shared by COBR
//! `cmpob`/`cmpib` and the REG compare block.

use crate::state::Core;

/// Ordinal (`integer = false`) or signed (`integer = true`) three-way
/// compare, setting `AC.CC` to 4 (less), 2 (equal), or 1 (greater).
pub fn cmp(core: &mut Core, a: u32, b: u32, integer: bool) {
    let lt = if integer {
        (a as i32) < (b as i32)
    } else {
        a < b
    };
    core.set_cc(if lt { 4 } else if a == b { 2 } else { 1 });
}

/// `concmp`: only updates `AC.CC` when bit 2 is already clear, comparing
/// `a <= b` (2) vs `a > b` (1).
pub fn concmp(core: &mut Core, a: u32, b: u32, integer: bool) {
    if core.ac & 4 != 0 {
        return;
    }
    let le = if integer {
        (a as i32) <= (b as i32)
    } else {
        a <= b
    };
    core.set_cc(if le { 2 } else { 1 });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmp_sets_less_equal_greater() {
        let mut core = Core::new();
        cmp(&mut core, 1, 2, false);
        assert_eq!(core.cc(), 4);
        cmp(&mut core, 2, 2, false);
        assert_eq!(core.cc(), 2);
        cmp(&mut core, 3, 2, false);
        assert_eq!(core.cc(), 1);
    }

    #[test]
    fn concmp_skips_update_when_cc_bit_2_set() {
        let mut core = Core::new();
        core.set_cc(4);
        concmp(&mut core, 5, 1, false);
        assert_eq!(core.cc(), 4);
    }
}
