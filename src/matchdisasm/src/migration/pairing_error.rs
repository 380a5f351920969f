/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::sync::Arc;
use core::{error, fmt};

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum PairingError {
    MissingTextSection,
    MissingRodataSection,
    FunctionOutOfBounds {
        index: usize,
        len: usize,
        section_name: Arc<str>,
    },
    RodataOutOfBounds {
        index: usize,
        len: usize,
        section_name: Arc<str>,
    },
}

impl fmt::Display for PairingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairingError::MissingTextSection => {
                write!(f, "This pairing requires a text section")
            }
            PairingError::MissingRodataSection => {
                write!(f, "This pairing requires a rodata section")
            }
            PairingError::FunctionOutOfBounds {
                index,
                len,
                section_name,
            } => write!(
                f,
                "Function index {} out of bounds ({} functions in '{}')",
                index, len, section_name
            ),
            PairingError::RodataOutOfBounds {
                index,
                len,
                section_name,
            } => write!(
                f,
                "Rodata index {} out of bounds ({} symbols in '{}')",
                index, len, section_name
            ),
        }
    }
}
impl error::Error for PairingError {}
