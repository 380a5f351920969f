/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum IsaVersion {
    MIPS_I,
    MIPS_II,
    MIPS_III,
    MIPS_IV,
}

impl IsaVersion {
    #[must_use]
    pub const fn has_64bit_gprs(&self) -> bool {
        matches!(self, IsaVersion::MIPS_III | IsaVersion::MIPS_IV)
    }

    #[must_use]
    pub const fn has_branch_likely(&self) -> bool {
        !matches!(self, IsaVersion::MIPS_I)
    }
}
