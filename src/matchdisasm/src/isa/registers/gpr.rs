/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use crate::isa::Abi;

/// A general purpose register.
///
/// Variants are named after the o32 convention; display names depend on the
/// configured [`Abi`].
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Gpr {
    zero,
    at,
    v0,
    v1,
    a0,
    a1,
    a2,
    a3,
    t0,
    t1,
    t2,
    t3,
    t4,
    t5,
    t6,
    t7,
    s0,
    s1,
    s2,
    s3,
    s4,
    s5,
    s6,
    s7,
    t8,
    t9,
    k0,
    k1,
    gp,
    sp,
    fp,
    ra,
}

const GPR_LIST: [Gpr; 32] = [
    Gpr::zero,
    Gpr::at,
    Gpr::v0,
    Gpr::v1,
    Gpr::a0,
    Gpr::a1,
    Gpr::a2,
    Gpr::a3,
    Gpr::t0,
    Gpr::t1,
    Gpr::t2,
    Gpr::t3,
    Gpr::t4,
    Gpr::t5,
    Gpr::t6,
    Gpr::t7,
    Gpr::s0,
    Gpr::s1,
    Gpr::s2,
    Gpr::s3,
    Gpr::s4,
    Gpr::s5,
    Gpr::s6,
    Gpr::s7,
    Gpr::t8,
    Gpr::t9,
    Gpr::k0,
    Gpr::k1,
    Gpr::gp,
    Gpr::sp,
    Gpr::fp,
    Gpr::ra,
];

const GPR_NAMES_O32: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

const GPR_NAMES_N32N64: [&str; 32] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$a4", "$a5", "$a6", "$a7", "$t0",
    "$t1", "$t2", "$t3", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$s8", "$ra",
];

const GPR_NAMES_NUMERIC: [&str; 32] = [
    "$0", "$1", "$2", "$3", "$4", "$5", "$6", "$7", "$8", "$9", "$10", "$11", "$12", "$13", "$14",
    "$15", "$16", "$17", "$18", "$19", "$20", "$21", "$22", "$23", "$24", "$25", "$26", "$27",
    "$28", "$29", "$30", "$31",
];

impl Gpr {
    #[must_use]
    pub const fn count() -> usize {
        32
    }

    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        GPR_LIST[(index & 0x1F) as usize]
    }

    #[must_use]
    pub const fn as_index(&self) -> usize {
        *self as usize
    }

    pub fn iter() -> impl Iterator<Item = Gpr> {
        GPR_LIST.into_iter()
    }

    #[must_use]
    pub const fn name(&self, abi: Abi) -> &'static str {
        let index = self.as_index();
        match abi {
            Abi::Numeric => GPR_NAMES_NUMERIC[index],
            Abi::O32 => GPR_NAMES_O32[index],
            Abi::N32 | Abi::N64 => GPR_NAMES_N32N64[index],
        }
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        matches!(self, Gpr::zero)
    }

    #[must_use]
    pub const fn is_assembler_temp(&self) -> bool {
        matches!(self, Gpr::at)
    }

    #[must_use]
    pub const fn is_stack_pointer(&self, _abi: Abi) -> bool {
        matches!(self, Gpr::sp)
    }

    #[must_use]
    pub const fn is_global_pointer(&self, _abi: Abi) -> bool {
        matches!(self, Gpr::gp)
    }

    #[must_use]
    pub const fn holds_return_address(&self, _abi: Abi) -> bool {
        matches!(self, Gpr::ra)
    }

    /// Whether a function call is allowed to clobber this register under the
    /// given calling convention.
    #[must_use]
    pub const fn is_clobbered_by_func_call(&self, abi: Abi) -> bool {
        match abi {
            Abi::Numeric | Abi::O32 => matches!(
                self,
                Gpr::v0
                    | Gpr::v1
                    | Gpr::a0
                    | Gpr::a1
                    | Gpr::a2
                    | Gpr::a3
                    | Gpr::t0
                    | Gpr::t1
                    | Gpr::t2
                    | Gpr::t3
                    | Gpr::t4
                    | Gpr::t5
                    | Gpr::t6
                    | Gpr::t7
                    | Gpr::t8
                    | Gpr::t9
                    | Gpr::ra
            ),
            Abi::N32 | Abi::N64 => !matches!(
                self,
                Gpr::zero
                    | Gpr::s0
                    | Gpr::s1
                    | Gpr::s2
                    | Gpr::s3
                    | Gpr::s4
                    | Gpr::s5
                    | Gpr::s6
                    | Gpr::s7
                    | Gpr::gp
                    | Gpr::sp
                    | Gpr::fp
            ),
        }
    }
}
