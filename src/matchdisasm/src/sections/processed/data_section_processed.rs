/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{sync::Arc, vec::Vec};
use core::hash;

use crate::addresses::{AddressRange, RomVramRange, Vram};
use crate::collections::unordered_set::UnorderedSet;
use crate::context::Context;
use crate::parent_segment_info::ParentSegmentInfo;
use crate::section_type::SectionType;
use crate::sections::{RomSection, Section, SectionPostProcessError};
use crate::symbols::{DataSym, DataSymProcessed};

#[derive(Debug, Clone)]
#[must_use]
pub struct DataSectionProcessed {
    name: Arc<str>,
    ranges: RomVramRange,
    parent_segment_info: ParentSegmentInfo,
    section_type: SectionType,

    data_symbols: Vec<DataSymProcessed>,
    symbol_vrams: UnorderedSet<Vram>,
}

impl DataSectionProcessed {
    pub(crate) fn new(
        context: &mut Context,
        name: Arc<str>,
        ranges: RomVramRange,
        parent_segment_info: ParentSegmentInfo,
        section_type: SectionType,
        data_symbols: Vec<DataSym>,
        symbol_vrams: UnorderedSet<Vram>,
    ) -> Result<Self, SectionPostProcessError> {
        let data_symbols = data_symbols
            .into_iter()
            .map(|x| x.post_process(context))
            .collect::<Result<Vec<DataSymProcessed>, _>>()?;

        Ok(Self {
            name,
            ranges,
            parent_segment_info,
            section_type,
            data_symbols,
            symbol_vrams,
        })
    }

    #[must_use]
    pub fn data_symbols(&self) -> &[DataSymProcessed] {
        &self.data_symbols
    }
}

impl Section for DataSectionProcessed {
    fn name(&self) -> Arc<str> {
        self.name.clone()
    }

    fn vram_range(&self) -> &AddressRange<Vram> {
        self.ranges.vram()
    }

    fn parent_segment_info(&self) -> &ParentSegmentInfo {
        &self.parent_segment_info
    }

    fn section_type(&self) -> SectionType {
        self.section_type
    }

    fn symbols_vrams(&self) -> &UnorderedSet<Vram> {
        &self.symbol_vrams
    }
}
impl RomSection for DataSectionProcessed {
    fn rom_vram_range(&self) -> &RomVramRange {
        &self.ranges
    }
}

impl hash::Hash for DataSectionProcessed {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.parent_segment_info.hash(state);
        self.ranges.hash(state);
    }
}
impl PartialEq for DataSectionProcessed {
    fn eq(&self, other: &Self) -> bool {
        self.parent_segment_info == other.parent_segment_info && self.ranges == other.ranges
    }
}
