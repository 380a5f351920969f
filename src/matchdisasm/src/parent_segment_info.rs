/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use crate::addresses::{Rom, Vram};
use crate::metadata::OverlayCategoryName;

/// Identifies the segment a section belongs to.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ParentSegmentInfo {
    segment_rom: Rom,
    segment_vram: Vram,
    overlay_category_name: Option<OverlayCategoryName>,
}

impl ParentSegmentInfo {
    pub const fn new(
        segment_rom: Rom,
        segment_vram: Vram,
        overlay_category_name: Option<OverlayCategoryName>,
    ) -> Self {
        Self {
            segment_rom,
            segment_vram,
            overlay_category_name,
        }
    }

    pub const fn segment_rom(&self) -> Rom {
        self.segment_rom
    }
    pub const fn segment_vram(&self) -> Vram {
        self.segment_vram
    }
    pub const fn overlay_category_name(&self) -> Option<&OverlayCategoryName> {
        self.overlay_category_name.as_ref()
    }
}
