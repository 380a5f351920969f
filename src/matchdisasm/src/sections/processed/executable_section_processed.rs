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
use crate::symbols::{FunctionSym, FunctionSymProcessed};

/// A text section whose functions have their references fully resolved.
#[derive(Debug, Clone)]
#[must_use]
pub struct ExecutableSectionProcessed {
    name: Arc<str>,
    ranges: RomVramRange,
    parent_segment_info: ParentSegmentInfo,

    functions: Vec<FunctionSymProcessed>,
    symbol_vrams: UnorderedSet<Vram>,
}

impl ExecutableSectionProcessed {
    pub(crate) fn new(
        context: &mut Context,
        name: Arc<str>,
        ranges: RomVramRange,
        parent_segment_info: ParentSegmentInfo,
        functions: Vec<FunctionSym>,
        symbol_vrams: UnorderedSet<Vram>,
    ) -> Result<Self, SectionPostProcessError> {
        let functions = functions
            .into_iter()
            .map(|x| x.post_process(context))
            .collect::<Result<Vec<FunctionSymProcessed>, _>>()?;

        Ok(Self {
            name,
            ranges,
            parent_segment_info,
            functions,
            symbol_vrams,
        })
    }

    #[must_use]
    pub fn functions(&self) -> &[FunctionSymProcessed] {
        &self.functions
    }
}

impl Section for ExecutableSectionProcessed {
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
        SectionType::Text
    }

    fn symbols_vrams(&self) -> &UnorderedSet<Vram> {
        &self.symbol_vrams
    }
}
impl RomSection for ExecutableSectionProcessed {
    fn rom_vram_range(&self) -> &RomVramRange {
        &self.ranges
    }
}

impl hash::Hash for ExecutableSectionProcessed {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.parent_segment_info.hash(state);
        self.ranges.hash(state);
    }
}
impl PartialEq for ExecutableSectionProcessed {
    fn eq(&self, other: &Self) -> bool {
        self.parent_segment_info == other.parent_segment_info && self.ranges == other.ranges
    }
}
