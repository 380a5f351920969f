/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::sync::Arc;
use core::fmt;

use crate::addresses::Vram;
use crate::metadata::SymbolType;

/// A non-fatal anomaly found during analysis.
///
/// Analysis never aborts on these: a partial matching disassembly is more
/// useful than none, so anomalies are collected and surfaced to the caller.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum Diagnostic {
    /// A pairing resolved to an address whose symbol is already typed
    /// incompatibly. The existing type wins.
    TypeConflict {
        vram: Vram,
        existing: SymbolType,
        attempted: SymbolType,
    },

    /// A function's end couldn't be located before its section ran out; the
    /// function was extended to the section end.
    BoundaryAmbiguity {
        section_name: Arc<str>,
        function_vram: Vram,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::TypeConflict {
                vram,
                existing,
                attempted,
            } => write!(
                f,
                "Symbol at {} is typed {:?}; ignoring conflicting {:?}",
                vram, existing, attempted
            ),
            Diagnostic::BoundaryAmbiguity {
                section_name,
                function_vram,
            } => write!(
                f,
                "Couldn't find the end of the function at {} before section '{}' ran out",
                function_vram, section_name
            ),
        }
    }
}
