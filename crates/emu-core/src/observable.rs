//! Observability trait for inspecting component state.
//!
//! The register file and control registers are the only state a debugger
//! needs to see, and every field in them fits a bit, a byte, or a 32-bit
//! word, so `Value` only carries those three shapes. Queries never affect
//! emulation state.

use std::fmt;

/// A dynamically-typed value for state queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// A single flag bit, e.g. `ac.of` or `pc.em`.
    Bool(bool),
    /// A byte-sized field, e.g. the condition code.
    U8(u8),
    /// A register or control-register word.
    U32(u32),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v:#04X}"),
            Value::U32(v) => write!(f, "{v:#010X}"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::U8(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::U32(v)
    }
}

/// A component whose state can be inspected.
///
/// At any point between instruction steps, a debugger or test harness can
/// query a component's registers without reaching into crate internals.
/// Queries never affect emulation state.
pub trait Observable {
    /// Query a specific property by path.
    ///
    /// Paths are hierarchical, separated by dots:
    /// - `ip` - Instruction pointer
    /// - `ac.of` - Arithmetic-controls overflow flag
    /// - `r5` - Register `r5`
    ///
    /// Returns `None` if the path is not recognised.
    fn query(&self, path: &str) -> Option<Value>;

    /// List all available query paths.
    ///
    /// Returns paths that can be passed to `query()`.
    fn query_paths(&self) -> &'static [&'static str];
}
