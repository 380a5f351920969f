/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::sync::Arc;

/// What a relocation points at.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum RelocReferencedSym {
    /// A resolved symbol name plus a byte addend into it.
    SymName { name: Arc<str>, addend: i32 },
    /// A raw 32-bit constant split across a `lui`/`ori` pair.
    Constant { constant: u32 },
}

impl RelocReferencedSym {
    #[must_use]
    pub fn new_name(name: Arc<str>, addend: i32) -> Self {
        Self::SymName { name, addend }
    }

    #[must_use]
    pub const fn new_constant(constant: u32) -> Self {
        Self::Constant { constant }
    }
}
