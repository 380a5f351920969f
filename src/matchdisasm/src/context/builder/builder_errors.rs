/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::string::String;
use core::{error, fmt};

use crate::addresses::{Rom, Vram};
use crate::metadata::OverlayCategoryName;

/// User symbol rejection. These are configuration errors, so they are fatal
/// at build time instead of being diagnostics.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum AddUserSymbolError {
    Overlap {
        name: String,
        vram: Vram,
        other_name: String,
        other_vram: Vram,
    },
    OutOfRange {
        name: String,
        vram: Vram,
    },
    DuplicatedName {
        name: String,
        vram: Vram,
        other_vram: Vram,
    },
    UnknownOverlaySegment {
        name: String,
        vram: Vram,
        category_name: OverlayCategoryName,
        segment_rom: Rom,
    },
}

impl fmt::Display for AddUserSymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddUserSymbolError::Overlap {
                name,
                vram,
                other_name,
                other_vram,
            } => write!(
                f,
                "Symbol '{}' at {} overlaps '{}' at {}",
                name, vram, other_name, other_vram
            ),
            AddUserSymbolError::OutOfRange { name, vram } => write!(
                f,
                "Symbol '{}' at {} is outside of the segment's vram range",
                name, vram
            ),
            AddUserSymbolError::DuplicatedName {
                name,
                vram,
                other_vram,
            } => write!(
                f,
                "Symbol name '{}' given to both {} and {}",
                name, vram, other_vram
            ),
            AddUserSymbolError::UnknownOverlaySegment {
                name,
                vram,
                category_name,
                segment_rom,
            } => write!(
                f,
                "Symbol '{}' at {} references overlay segment {} of category '{}', which was never declared",
                name, vram, segment_rom, category_name
            ),
        }
    }
}
impl error::Error for AddUserSymbolError {}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum AddOverlayError {
    UnknownCategory {
        category_name: OverlayCategoryName,
    },
    DuplicatedRom {
        category_name: OverlayCategoryName,
        segment_rom: Rom,
    },
}

impl fmt::Display for AddOverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddOverlayError::UnknownCategory { category_name } => {
                write!(f, "Overlay category '{}' was never declared", category_name)
            }
            AddOverlayError::DuplicatedRom {
                category_name,
                segment_rom,
            } => write!(
                f,
                "Category '{}' already has a segment at rom {}",
                category_name, segment_rom
            ),
        }
    }
}
impl error::Error for AddOverlayError {}
