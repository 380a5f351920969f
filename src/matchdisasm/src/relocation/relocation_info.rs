/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::string::String;

use super::{RelocReferencedSym, RelocationType};

/// A symbolic rewrite for one instruction or data word.
///
/// Stored in per-symbol overlays keyed by rom address; the decoded words are
/// never mutated.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RelocationInfo {
    reloc_type: RelocationType,
    referenced_sym: RelocReferencedSym,
}

impl RelocationInfo {
    #[must_use]
    pub(crate) const fn new(
        reloc_type: RelocationType,
        referenced_sym: RelocReferencedSym,
    ) -> Self {
        Self {
            reloc_type,
            referenced_sym,
        }
    }

    #[must_use]
    pub const fn reloc_type(&self) -> RelocationType {
        self.reloc_type
    }

    #[must_use]
    pub const fn referenced_sym(&self) -> &RelocReferencedSym {
        &self.referenced_sym
    }

    /// The operand text this reloc replaces the raw immediate with.
    #[must_use]
    pub fn display_str(&self) -> String {
        match &self.referenced_sym {
            RelocReferencedSym::SymName { name, addend } => {
                let sym_text = if *addend == 0 {
                    String::from(&**name)
                } else if *addend > 0 {
                    format!("{} + 0x{:X}", name, addend)
                } else {
                    format!("{} - 0x{:X}", name, -addend)
                };

                match self.reloc_type.operator() {
                    Some(operator) => format!("{}({})", operator, sym_text),
                    None => sym_text,
                }
            }
            RelocReferencedSym::Constant { constant } => match self.reloc_type {
                RelocationType::R_CUSTOM_CONSTANT_HI => {
                    format!("0x{:X}", constant >> 16)
                }
                RelocationType::R_CUSTOM_CONSTANT_LO => {
                    format!("0x{:X}", constant & 0xFFFF)
                }
                _ => format!("0x{:X}", constant),
            },
        }
    }
}
