//! Shared helpers used across the REG-format executors.

use crate::env::Environment;
use crate::fault::Fault;
use crate::state::{Core, AC_OM_POS};

/// `d == 0` raises [`Fault::DivideByZero`] and leaves the destination
/// register untouched by the caller; otherwise the division proceeds.
pub fn div_check<E: Environment>(core: &Core, env: &mut E, d: u32) -> bool {
    let _ = core;
    if d == 0 {
        env.fault(Fault::DivideByZero);
    }
    d != 0
}

/// Signed overflow either sets the sticky `AC.OF` bit (when `AC.OM` masks
/// the fault) or raises [`Fault::IntegerOverflow`].
pub fn on_overflow<E: Environment>(core: &mut Core, env: &mut E, overflowed: bool) {
    if !overflowed {
        return;
    }
    if (core.ac >> AC_OM_POS) & 1 != 0 {
        core.ac |= 1 << crate::state::AC_OF_POS;
    } else {
        env.fault(Fault::IntegerOverflow);
    }
}

/// Supervisor-only instructions fault with [`Fault::TypeMismatch`] outside
/// supervisor mode.
pub fn check_supervisor<E: Environment>(core: &Core, env: &mut E) -> bool {
    if core.supervisor() {
        true
    } else {
        env.fault(Fault::TypeMismatch);
        false
    }
}
