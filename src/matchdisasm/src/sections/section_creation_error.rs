/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::sync::Arc;
use core::{error, fmt};

use crate::addresses::{Rom, Vram};
use crate::context::OwnedSegmentNotFoundError;
use crate::symbols::{SymbolCreationError, SymbolPostProcessError};

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum SectionCreationError {
    OwnedSegmentNotFound(OwnedSegmentNotFoundError),
    EmptySection {
        name: Arc<str>,
    },
    BadBytesSize {
        name: Arc<str>,
        size: usize,
        multiple_of: usize,
    },
    UnalignedVram {
        name: Arc<str>,
        vram: Vram,
        multiple_of: u32,
    },
    UnalignedRom {
        name: Arc<str>,
        rom: Rom,
        multiple_of: u32,
    },
}

impl fmt::Display for SectionCreationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionCreationError::OwnedSegmentNotFound(x) => write!(f, "{}", x),
            SectionCreationError::EmptySection { name } => {
                write!(f, "Can't create section '{}' with no bytes", name)
            }
            SectionCreationError::BadBytesSize {
                name,
                size,
                multiple_of,
            } => write!(
                f,
                "Section '{}' got 0x{:X} bytes, which is not a multiple of 0x{:X}",
                name, size, multiple_of
            ),
            SectionCreationError::UnalignedVram {
                name,
                vram,
                multiple_of,
            } => write!(
                f,
                "Vram {} of section '{}' is not aligned to 0x{:X}",
                vram, name, multiple_of
            ),
            SectionCreationError::UnalignedRom {
                name,
                rom,
                multiple_of,
            } => write!(
                f,
                "Rom {} of section '{}' is not aligned to 0x{:X}",
                rom, name, multiple_of
            ),
        }
    }
}
impl error::Error for SectionCreationError {}

impl From<OwnedSegmentNotFoundError> for SectionCreationError {
    fn from(value: OwnedSegmentNotFoundError) -> Self {
        SectionCreationError::OwnedSegmentNotFound(value)
    }
}

impl From<SymbolCreationError> for SectionCreationError {
    fn from(value: SymbolCreationError) -> Self {
        match value {
            SymbolCreationError::OwnedSegmentNotFound(x) => {
                SectionCreationError::OwnedSegmentNotFound(x)
            }
        }
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum SectionPostProcessError {
    OwnedSegmentNotFound(OwnedSegmentNotFoundError),
}

impl fmt::Display for SectionPostProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionPostProcessError::OwnedSegmentNotFound(x) => write!(f, "{}", x),
        }
    }
}
impl error::Error for SectionPostProcessError {}

impl From<OwnedSegmentNotFoundError> for SectionPostProcessError {
    fn from(value: OwnedSegmentNotFoundError) -> Self {
        SectionPostProcessError::OwnedSegmentNotFound(value)
    }
}

impl From<SymbolPostProcessError> for SectionPostProcessError {
    fn from(value: SymbolPostProcessError) -> Self {
        match value {
            SymbolPostProcessError::OwnedSegmentNotFound(x) => {
                SectionPostProcessError::OwnedSegmentNotFound(x)
            }
        }
    }
}
