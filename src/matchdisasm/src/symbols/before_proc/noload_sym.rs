/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::hash;

use crate::addresses::{AddressRange, Vram};
use crate::context::Context;
use crate::metadata::GeneratedBy;
use crate::parent_segment_info::ParentSegmentInfo;
use crate::section_type::SectionType;
use crate::symbols::processed::NoloadSymProcessed;
use crate::symbols::{Symbol, SymbolCreationError, SymbolPostProcessError};

const SECTION_TYPE: SectionType = SectionType::Bss;

/// A bss symbol: a vram range with no backing bytes.
#[derive(Debug, Clone)]
pub struct NoloadSym {
    vram_range: AddressRange<Vram>,
    parent_segment_info: ParentSegmentInfo,
}

impl NoloadSym {
    pub(crate) fn new(
        context: &mut Context,
        vram_range: AddressRange<Vram>,
        parent_segment_info: ParentSegmentInfo,
    ) -> Result<Self, SymbolCreationError> {
        {
            let owned_segment = context.find_owned_segment_mut(&parent_segment_info)?;
            let metadata =
                owned_segment.add_symbol(vram_range.start(), GeneratedBy::Autogenerated, false);
            metadata.set_defined();
            metadata.update_section_type(Some(SECTION_TYPE));
            metadata.set_autodetected_size(vram_range.size());
        }

        Ok(Self {
            vram_range,
            parent_segment_info,
        })
    }

    pub(crate) fn post_process(
        self,
        context: &mut Context,
    ) -> Result<NoloadSymProcessed, SymbolPostProcessError> {
        NoloadSymProcessed::new(context, self.vram_range, self.parent_segment_info)
    }
}

impl Symbol for NoloadSym {
    fn vram_range(&self) -> &AddressRange<Vram> {
        &self.vram_range
    }

    fn parent_segment_info(&self) -> &ParentSegmentInfo {
        &self.parent_segment_info
    }

    fn section_type(&self) -> SectionType {
        SECTION_TYPE
    }
}

impl hash::Hash for NoloadSym {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.parent_segment_info.hash(state);
        self.vram_range.hash(state);
    }
}
impl PartialEq for NoloadSym {
    fn eq(&self, other: &Self) -> bool {
        self.parent_segment_info == other.parent_segment_info
            && self.vram_range == other.vram_range
    }
}
