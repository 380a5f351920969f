/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{sync::Arc, vec::Vec};
use core::hash;

use crate::addresses::{AddressRange, Vram};
use crate::collections::unordered_set::UnorderedSet;
use crate::context::Context;
use crate::parent_segment_info::ParentSegmentInfo;
use crate::section_type::SectionType;
use crate::sections::{Section, SectionPostProcessError};
use crate::symbols::{NoloadSym, NoloadSymProcessed};

#[derive(Debug, Clone)]
#[must_use]
pub struct NoloadSectionProcessed {
    name: Arc<str>,
    vram_range: AddressRange<Vram>,
    parent_segment_info: ParentSegmentInfo,

    noload_symbols: Vec<NoloadSymProcessed>,
    symbol_vrams: UnorderedSet<Vram>,
}

impl NoloadSectionProcessed {
    pub(crate) fn new(
        context: &mut Context,
        name: Arc<str>,
        vram_range: AddressRange<Vram>,
        parent_segment_info: ParentSegmentInfo,
        noload_symbols: Vec<NoloadSym>,
        symbol_vrams: UnorderedSet<Vram>,
    ) -> Result<Self, SectionPostProcessError> {
        let noload_symbols = noload_symbols
            .into_iter()
            .map(|x| x.post_process(context))
            .collect::<Result<Vec<NoloadSymProcessed>, _>>()?;

        Ok(Self {
            name,
            vram_range,
            parent_segment_info,
            noload_symbols,
            symbol_vrams,
        })
    }

    #[must_use]
    pub fn noload_symbols(&self) -> &[NoloadSymProcessed] {
        &self.noload_symbols
    }
}

impl Section for NoloadSectionProcessed {
    fn name(&self) -> Arc<str> {
        self.name.clone()
    }

    fn vram_range(&self) -> &AddressRange<Vram> {
        &self.vram_range
    }

    fn parent_segment_info(&self) -> &ParentSegmentInfo {
        &self.parent_segment_info
    }

    fn section_type(&self) -> SectionType {
        SectionType::Bss
    }

    fn symbols_vrams(&self) -> &UnorderedSet<Vram> {
        &self.symbol_vrams
    }
}

impl hash::Hash for NoloadSectionProcessed {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.parent_segment_info.hash(state);
        self.vram_range.hash(state);
    }
}
impl PartialEq for NoloadSectionProcessed {
    fn eq(&self, other: &Self) -> bool {
        self.parent_segment_info == other.parent_segment_info
            && self.vram_range == other.vram_range
    }
}
