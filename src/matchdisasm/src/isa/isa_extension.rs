/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use super::IsaVersion;

/// Vendor instruction set laid on top of a base [`IsaVersion`].
///
/// The extension selects which decoding tables overlay the core ones: the
/// RSP replaces the COP2 space with its vector unit, the PS1 GTE fills COP2
/// with geometry commands, the EE and ALLEGREX add their own spaces.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum IsaExtension {
    /// N64 Reality Signal Processor.
    Rsp,
    /// PS1 Geometry Transformation Engine.
    R3000Gte,
    /// PS2 Emotion Engine (R5900).
    R5900Ee,
    /// PSP main cpu.
    R4000Allegrex,
}

impl IsaExtension {
    #[must_use]
    pub const fn base_isa_version(&self) -> IsaVersion {
        match self {
            IsaExtension::Rsp => IsaVersion::MIPS_II,
            IsaExtension::R3000Gte => IsaVersion::MIPS_I,
            IsaExtension::R5900Ee => IsaVersion::MIPS_III,
            IsaExtension::R4000Allegrex => IsaVersion::MIPS_II,
        }
    }
}
