/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{sync::Arc, vec::Vec};
use core::hash;

use crate::addresses::{AddressRange, Vram};
use crate::collections::unordered_set::UnorderedSet;
use crate::context::Context;
use crate::parent_segment_info::ParentSegmentInfo;
use crate::section_type::SectionType;
use crate::sections::processed::NoloadSectionProcessed;
use crate::sections::{
    NoloadSectionSettings, Section, SectionCreationError, SectionPostProcessError,
};
use crate::symbols::NoloadSym;

/// A `.bss` section. It has no bytes; its symbols come from the references
/// the text analysis resolved into its range.
#[derive(Debug, Clone)]
#[must_use]
pub struct NoloadSection {
    name: Arc<str>,
    vram_range: AddressRange<Vram>,
    parent_segment_info: ParentSegmentInfo,

    noload_symbols: Vec<NoloadSym>,
    symbol_vrams: UnorderedSet<Vram>,
}

impl NoloadSection {
    pub(crate) fn new(
        context: &mut Context,
        _settings: &NoloadSectionSettings,
        name: Arc<str>,
        vram_range: AddressRange<Vram>,
        parent_segment_info: ParentSegmentInfo,
    ) -> Result<Self, SectionCreationError> {
        if vram_range.size().inner() == 0 {
            return Err(SectionCreationError::EmptySection { name });
        }

        // Every referenced address inside the range starts a symbol, plus
        // the section start itself.
        let mut symbol_starts: Vec<Vram> = {
            let owned_segment = context.find_owned_segment(&parent_segment_info)?;

            let mut starts = vec![vram_range.start()];
            for (sym_vram, _) in
                owned_segment.find_symbols_range(vram_range.start(), vram_range.end())
            {
                if *sym_vram != vram_range.start() {
                    starts.push(*sym_vram);
                }
            }
            starts
        };
        symbol_starts.sort_unstable();

        let mut noload_symbols = Vec::new();
        let mut symbol_vrams = UnorderedSet::new();

        for (i, sym_vram) in symbol_starts.iter().enumerate() {
            let sym_end = if i + 1 < symbol_starts.len() {
                symbol_starts[i + 1]
            } else {
                vram_range.end()
            };

            symbol_vrams.insert(*sym_vram);

            let sym = NoloadSym::new(
                context,
                AddressRange::new(*sym_vram, sym_end),
                parent_segment_info.clone(),
            )?;
            noload_symbols.push(sym);
        }

        Ok(Self {
            name,
            vram_range,
            parent_segment_info,
            noload_symbols,
            symbol_vrams,
        })
    }
}

impl NoloadSection {
    #[must_use]
    pub fn noload_symbols(&self) -> &[NoloadSym] {
        &self.noload_symbols
    }

    pub fn post_process(
        self,
        context: &mut Context,
    ) -> Result<NoloadSectionProcessed, SectionPostProcessError> {
        NoloadSectionProcessed::new(
            context,
            self.name,
            self.vram_range,
            self.parent_segment_info,
            self.noload_symbols,
            self.symbol_vrams,
        )
    }
}

impl Section for NoloadSection {
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

impl hash::Hash for NoloadSection {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.parent_segment_info.hash(state);
        self.vram_range.hash(state);
    }
}
impl PartialEq for NoloadSection {
    fn eq(&self, other: &Self) -> bool {
        self.parent_segment_info == other.parent_segment_info
            && self.vram_range == other.vram_range
    }
}
