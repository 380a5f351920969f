/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::{error, fmt};

use crate::context::OwnedSegmentNotFoundError;

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum SymbolCreationError {
    OwnedSegmentNotFound(OwnedSegmentNotFoundError),
}

impl fmt::Display for SymbolCreationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolCreationError::OwnedSegmentNotFound(x) => write!(f, "{}", x),
        }
    }
}
impl error::Error for SymbolCreationError {}

impl From<OwnedSegmentNotFoundError> for SymbolCreationError {
    fn from(value: OwnedSegmentNotFoundError) -> Self {
        SymbolCreationError::OwnedSegmentNotFound(value)
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum SymbolPostProcessError {
    OwnedSegmentNotFound(OwnedSegmentNotFoundError),
}

impl fmt::Display for SymbolPostProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolPostProcessError::OwnedSegmentNotFound(x) => write!(f, "{}", x),
        }
    }
}
impl error::Error for SymbolPostProcessError {}

impl From<OwnedSegmentNotFoundError> for SymbolPostProcessError {
    fn from(value: OwnedSegmentNotFoundError) -> Self {
        SymbolPostProcessError::OwnedSegmentNotFound(value)
    }
}
