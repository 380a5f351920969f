/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

mod section_settings;
pub mod before_proc;
pub mod processed;
mod section_creation_error;

pub use before_proc::{DataSection, ExecutableSection, NoloadSection};
pub use processed::{DataSectionProcessed, ExecutableSectionProcessed, NoloadSectionProcessed};
pub use section_creation_error::{SectionCreationError, SectionPostProcessError};
pub use section_settings::{DataSectionSettings, ExecutableSectionSettings, NoloadSectionSettings};

use alloc::sync::Arc;

use crate::addresses::{AddressRange, RomVramRange, Vram};
use crate::collections::unordered_set::UnorderedSet;
use crate::parent_segment_info::ParentSegmentInfo;
use crate::section_type::SectionType;

/// Common interface of every analyzed section.
pub trait Section {
    fn name(&self) -> Arc<str>;
    fn vram_range(&self) -> &AddressRange<Vram>;
    fn parent_segment_info(&self) -> &ParentSegmentInfo;
    fn section_type(&self) -> SectionType;
    /// Vram of every symbol this section owns.
    fn symbols_vrams(&self) -> &UnorderedSet<Vram>;
}

/// Sections that are backed by actual bytes in the binary.
pub trait RomSection: Section {
    fn rom_vram_range(&self) -> &RomVramRange;
}
