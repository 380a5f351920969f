/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::sync::Arc;
use core::hash;

use crate::addresses::{AddressRange, Vram};
use crate::collections::addended_ordered_map::FindSettings;
use crate::context::Context;
use crate::parent_segment_info::ParentSegmentInfo;
use crate::section_type::SectionType;
use crate::symbols::display::{SymNoloadDisplay, SymNoloadDisplaySettings};
use crate::symbols::{Symbol, SymbolPostProcessError};

#[derive(Debug, Clone)]
pub struct NoloadSymProcessed {
    vram_range: AddressRange<Vram>,
    parent_segment_info: ParentSegmentInfo,
    name: Arc<str>,
}

impl NoloadSymProcessed {
    pub(crate) fn new(
        context: &mut Context,
        vram_range: AddressRange<Vram>,
        parent_segment_info: ParentSegmentInfo,
    ) -> Result<Self, SymbolPostProcessError> {
        let name_settings = *context.global_config().name_generation();

        let name = {
            let owned_segment = context.find_owned_segment(&parent_segment_info)?;
            let metadata = owned_segment
                .find_symbol(vram_range.start(), FindSettings::new(false))
                .expect("The symbol was registered during section analysis");
            Arc::from(metadata.display_name(&name_settings))
        };

        Ok(Self {
            vram_range,
            parent_segment_info,
            name,
        })
    }

    #[must_use]
    pub fn name(&self) -> Arc<str> {
        self.name.clone()
    }

    #[must_use]
    pub fn display<'sym, 'flg>(
        &'sym self,
        settings: &'flg SymNoloadDisplaySettings,
    ) -> SymNoloadDisplay<'sym, 'flg> {
        SymNoloadDisplay::new(self, settings)
    }
}

impl Symbol for NoloadSymProcessed {
    fn vram_range(&self) -> &AddressRange<Vram> {
        &self.vram_range
    }

    fn parent_segment_info(&self) -> &ParentSegmentInfo {
        &self.parent_segment_info
    }

    fn section_type(&self) -> SectionType {
        SectionType::Bss
    }
}

impl hash::Hash for NoloadSymProcessed {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.parent_segment_info.hash(state);
        self.vram_range.hash(state);
    }
}
impl PartialEq for NoloadSymProcessed {
    fn eq(&self, other: &Self) -> bool {
        self.parent_segment_info == other.parent_segment_info
            && self.vram_range == other.vram_range
    }
}
