//! Fault codes reported through [`crate::Environment::fault`].

use std::fmt;

/// A fault raised by the executor.
///
/// The core never returns these as a `Result` to its caller; it hands them
/// to [`crate::Environment::fault`] and continues decoding the next
/// instruction, matching the hardware's "recovery is someone else's
/// problem" contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Opcode not in the implemented table, or an FPU opcode.
    InvalidOpcode,
    /// Signed arithmetic overflowed and `AC.OM` was not set.
    IntegerOverflow,
    /// Division or remainder by zero.
    DivideByZero,
    /// `fault<cc>` fired because its condition held.
    ConstraintRange,
    /// Supervisor-only instruction executed outside supervisor mode.
    TypeMismatch,
}

impl Fault {
    /// The hex fault code used by the reference implementation.
    #[must_use]
    pub fn code(self) -> u32 {
        match self {
            Fault::InvalidOpcode => 0x2_0001,
            Fault::IntegerOverflow => 0x3_0001,
            Fault::DivideByZero => 0x3_0002,
            Fault::ConstraintRange => 0x5_0001,
            Fault::TypeMismatch => 0xA_0001,
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Fault::InvalidOpcode => "invalid opcode",
            Fault::IntegerOverflow => "integer overflow",
            Fault::DivideByZero => "divide by zero",
            Fault::ConstraintRange => "constraint range",
            Fault::TypeMismatch => "type mismatch",
        };
        write!(f, "{name} (0x{:05X})", self.code())
    }
}

impl std::error::Error for Fault {}
