/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use crate::addresses::{GpValue, Rom, Vram};
use crate::config::GpConfig;
use crate::isa::{registers::Gpr, AccessType};

/// What the tracker currently believes a gpr holds.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[must_use]
pub(crate) enum GprRegisterValue {
    /// No usable information.
    Garbage,
    /// `$zero`, can't be overwritten.
    HardwiredZero,
    GlobalPointer {
        gp: GpValue,
    },
    StackPointer,
    /// The result of a `lui`.
    Hi {
        value: u32,
        rom: Rom,
    },
    /// A fully formed address.
    RawAddress {
        vram: Vram,
        setter_rom: Rom,
        info: GprRegRawAddress,
    },
    /// The value loaded from memory at a known address.
    DereferencedAddress {
        original_address: Vram,
        deref_rom: Rom,
        access_info: (AccessType, bool),
        info: GprRegDereferencedAddress,
    },
    /// A `lui`/`ori` constant.
    Constant {
        value: u32,
        hi_rom: Rom,
    },
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[must_use]
pub(crate) enum GprRegRawAddress {
    /// Built from a `%hi`/`%lo` pair.
    HiLo { hi_rom: Rom },
    /// Built from a single `$gp`-relative addition.
    GpRel,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[must_use]
pub(crate) enum GprRegDereferencedAddress {
    /// Loaded via `%lo` on top of a `lui`.
    Hi { hi_rom: Rom },
    /// Loaded relative to `$gp`.
    GpRel,
    /// Loaded through an already formed address (function pointers,
    /// jumptable entries loaded from arrays, ...).
    HiLo { lo_rom: Rom, addend: i16 },
}

impl GprRegisterValue {
    pub(crate) fn new(reg: Gpr, gp_config: Option<GpConfig>) -> Self {
        if reg.is_zero() {
            Self::HardwiredZero
        } else if reg == Gpr::gp {
            if let Some(gp_config) = gp_config {
                Self::GlobalPointer {
                    gp: gp_config.gp_value(),
                }
            } else {
                Self::Garbage
            }
        } else if reg == Gpr::sp {
            Self::StackPointer
        } else {
            Self::Garbage
        }
    }

    /// Result of `addiu dst, self, imm`.
    pub(crate) fn add_imm16(&self, imm: i16, instr_rom: Rom) -> Self {
        match self {
            Self::Hi { value, rom } => Self::RawAddress {
                vram: Vram::new(value.wrapping_add_signed(imm as i32)),
                setter_rom: instr_rom,
                info: GprRegRawAddress::HiLo { hi_rom: *rom },
            },
            Self::GlobalPointer { gp } => Self::RawAddress {
                vram: Vram::new(gp.inner().wrapping_add_signed(imm as i32)),
                setter_rom: instr_rom,
                info: GprRegRawAddress::GpRel,
            },
            Self::StackPointer => Self::StackPointer,
            Self::HardwiredZero => Self::Garbage,
            _ => Self::Garbage,
        }
    }

    /// Result of `ori dst, self, imm`.
    pub(crate) fn or_imm16(&self, imm: u16, _instr_rom: Rom) -> Self {
        match self {
            Self::Hi { value, rom } => Self::Constant {
                value: value | imm as u32,
                hi_rom: *rom,
            },
            _ => Self::Garbage,
        }
    }

    /// Result of loading through `imm(self)`.
    pub(crate) fn dereference(
        &self,
        imm: i16,
        instr_rom: Rom,
        access_info: (AccessType, bool),
    ) -> Self {
        match self {
            Self::Hi { value, rom } => Self::DereferencedAddress {
                original_address: Vram::new(value.wrapping_add_signed(imm as i32)),
                deref_rom: instr_rom,
                access_info,
                info: GprRegDereferencedAddress::Hi { hi_rom: *rom },
            },
            Self::GlobalPointer { gp } => Self::DereferencedAddress {
                original_address: Vram::new(gp.inner().wrapping_add_signed(imm as i32)),
                deref_rom: instr_rom,
                access_info,
                info: GprRegDereferencedAddress::GpRel,
            },
            Self::RawAddress {
                vram, setter_rom, ..
            } => Self::DereferencedAddress {
                original_address: *vram,
                deref_rom: instr_rom,
                access_info,
                info: GprRegDereferencedAddress::HiLo {
                    lo_rom: *setter_rom,
                    addend: imm,
                },
            },
            _ => Self::Garbage,
        }
    }

    /// Result of `addu dst, self, rhs`.
    ///
    /// Indexed accesses add a garbage index to a tracked value, so the
    /// tracked side survives the addition.
    pub(crate) fn add_register(&self, rhs: &Self) -> Self {
        match (self, rhs) {
            (Self::Hi { .. }, Self::Hi { .. }) => Self::Garbage,
            (hi @ Self::Hi { .. }, _) | (_, hi @ Self::Hi { .. }) => *hi,
            (gp @ Self::GlobalPointer { .. }, _) | (_, gp @ Self::GlobalPointer { .. }) => *gp,
            (addr @ Self::RawAddress { .. }, _) | (_, addr @ Self::RawAddress { .. }) => *addr,
            (Self::HardwiredZero, other) | (other, Self::HardwiredZero) => *other,
            _ => Self::Garbage,
        }
    }

    /// Result of `or dst, self, rhs`: only meaningful as a register move.
    pub(crate) fn or_register(&self, rhs: &Self) -> Self {
        match (self, rhs) {
            (Self::HardwiredZero, other) | (other, Self::HardwiredZero) => match other {
                Self::HardwiredZero => Self::Garbage,
                _ => *other,
            },
            _ => Self::Garbage,
        }
    }
}
