/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::sync::Arc;

use crate::addresses::Vram;
use crate::parent_segment_info::ParentSegmentInfo;

/// Which section a symbol was created from.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ParentSectionMetadata {
    name: Arc<str>,
    vram: Vram,
    parent_segment_info: ParentSegmentInfo,
}

impl ParentSectionMetadata {
    pub(crate) fn new(name: Arc<str>, vram: Vram, parent_segment_info: ParentSegmentInfo) -> Self {
        Self {
            name,
            vram,
            parent_segment_info,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub const fn vram(&self) -> Vram {
        self.vram
    }
    pub const fn parent_segment_info(&self) -> &ParentSegmentInfo {
        &self.parent_segment_info
    }
}
