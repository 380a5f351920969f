/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{sync::Arc, vec::Vec};
use core::{error, fmt};

use ::polonius_the_crab::prelude::*;

use crate::addresses::{AddressRange, Rom, Vram};
use crate::collections::{addended_ordered_map::FindSettings, unordered_map::UnorderedMap};
use crate::config::GlobalConfig;
use crate::metadata::{OverlayCategory, OverlayCategoryName, SegmentMetadata, SymbolMetadata};
use crate::parent_segment_info::ParentSegmentInfo;
use crate::sections::{
    DataSection, DataSectionSettings, ExecutableSection, ExecutableSectionSettings,
    NoloadSection, NoloadSectionSettings, SectionCreationError,
};

use super::Diagnostic;

/// The shared symbol table: every known symbol, keyed by
/// (overlay category, segment, vram).
///
/// This is the single synchronization point of an analysis run. Sections
/// never point at each other; every cross-section reference goes through
/// here.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    global_config: GlobalConfig,

    global_segment: SegmentMetadata,
    overlay_segments: UnorderedMap<OverlayCategoryName, OverlayCategory>,

    diagnostics: Vec<Diagnostic>,
}

impl Context {
    pub(crate) fn new(
        global_config: GlobalConfig,
        global_segment: SegmentMetadata,
        overlay_segments: UnorderedMap<OverlayCategoryName, OverlayCategory>,
    ) -> Self {
        Self {
            global_config,
            global_segment,
            overlay_segments,
            diagnostics: Vec::new(),
        }
    }

    #[must_use]
    pub const fn global_config(&self) -> &GlobalConfig {
        &self.global_config
    }
    #[must_use]
    pub const fn global_segment(&self) -> &SegmentMetadata {
        &self.global_segment
    }
    #[must_use]
    pub const fn overlay_segments(&self) -> &UnorderedMap<OverlayCategoryName, OverlayCategory> {
        &self.overlay_segments
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
    pub(crate) fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

impl Context {
    pub fn create_section_text(
        &mut self,
        settings: &ExecutableSectionSettings,
        name: Arc<str>,
        raw_bytes: &[u8],
        rom: Rom,
        vram: Vram,
        parent_segment_info: ParentSegmentInfo,
    ) -> Result<ExecutableSection, SectionCreationError> {
        ExecutableSection::new(
            self,
            settings,
            name,
            raw_bytes,
            rom,
            vram,
            parent_segment_info,
        )
    }

    pub fn create_section_data(
        &mut self,
        settings: &DataSectionSettings,
        name: Arc<str>,
        raw_bytes: &[u8],
        rom: Rom,
        vram: Vram,
        parent_segment_info: ParentSegmentInfo,
    ) -> Result<DataSection, SectionCreationError> {
        DataSection::new(
            self,
            settings,
            name,
            raw_bytes,
            rom,
            vram,
            parent_segment_info,
            crate::section_type::SectionType::Data,
        )
    }

    pub fn create_section_rodata(
        &mut self,
        settings: &DataSectionSettings,
        name: Arc<str>,
        raw_bytes: &[u8],
        rom: Rom,
        vram: Vram,
        parent_segment_info: ParentSegmentInfo,
    ) -> Result<DataSection, SectionCreationError> {
        DataSection::new(
            self,
            settings,
            name,
            raw_bytes,
            rom,
            vram,
            parent_segment_info,
            crate::section_type::SectionType::Rodata,
        )
    }

    pub fn create_section_bss(
        &mut self,
        settings: &NoloadSectionSettings,
        name: Arc<str>,
        vram_range: AddressRange<Vram>,
        parent_segment_info: ParentSegmentInfo,
    ) -> Result<NoloadSection, SectionCreationError> {
        NoloadSection::new(self, settings, name, vram_range, parent_segment_info)
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub struct OwnedSegmentNotFoundError {
    info: ParentSegmentInfo,
}

impl fmt::Display for OwnedSegmentNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Can't find owned segment for ")?;
        if let Some(overlay_name) = self.info.overlay_category_name() {
            write!(f, "overlay '{}'", overlay_name)?;
        } else {
            write!(f, "global segment")?;
        }
        write!(
            f,
            ". Addresses of the expected parent segment: Rom: {}, Vram: {}",
            self.info.segment_rom(),
            self.info.segment_vram()
        )
    }
}
impl error::Error for OwnedSegmentNotFoundError {}

impl Context {
    pub(crate) fn find_owned_segment(
        &self,
        info: &ParentSegmentInfo,
    ) -> Result<&SegmentMetadata, OwnedSegmentNotFoundError> {
        if let Some(overlay_name) = info.overlay_category_name() {
            if let Some(segments_per_rom) = self.overlay_segments.get(overlay_name) {
                if let Some(segment) = segments_per_rom.segments().get(&info.segment_rom()) {
                    debug_assert!(segment.category_name() == Some(overlay_name));
                    return Ok(segment);
                }
            }
        } else if self.global_segment.in_rom_range(info.segment_rom()) {
            // The global segment may contain more than one actual segment, so
            // checking for ranges is okay.
            return Ok(&self.global_segment);
        } else if self.global_segment.in_vram_range(info.segment_vram()) {
            // Required by segments that only have bss sections.
            return Ok(&self.global_segment);
        }
        Err(OwnedSegmentNotFoundError { info: info.clone() })
    }

    pub(crate) fn find_owned_segment_mut(
        &mut self,
        info: &ParentSegmentInfo,
    ) -> Result<&mut SegmentMetadata, OwnedSegmentNotFoundError> {
        if let Some(overlay_name) = info.overlay_category_name() {
            if let Some(segments_per_rom) = self.overlay_segments.get_mut(overlay_name) {
                if let Some(segment) = segments_per_rom.segments_mut().get_mut(&info.segment_rom())
                {
                    debug_assert!(segment.category_name() == Some(overlay_name));
                    return Ok(segment);
                }
            }
        } else if self.global_segment.in_rom_range(info.segment_rom()) {
            return Ok(&mut self.global_segment);
        } else if self.global_segment.in_vram_range(info.segment_vram()) {
            return Ok(&mut self.global_segment);
        }
        Err(OwnedSegmentNotFoundError { info: info.clone() })
    }

    /// Resolve a reference from the segment described by `info`.
    ///
    /// Resolution is conservative about overlays: the global segment, the
    /// referencing segment itself and its explicitly prioritised overlays are
    /// searched, in that order. References into other categories stay
    /// unresolved instead of being guessed.
    #[must_use]
    pub fn find_symbol_from_any_segment(
        &self,
        vram: Vram,
        info: &ParentSegmentInfo,
        settings: FindSettings,
    ) -> Option<&SymbolMetadata> {
        if self.global_segment.in_vram_range(vram) {
            return self.global_segment.find_symbol(vram, settings);
        }

        let overlay_category_name = info.overlay_category_name()?;
        let segments_per_rom = self.overlay_segments.get(overlay_category_name)?;
        let owned_segment = segments_per_rom.segments().get(&info.segment_rom())?;

        if owned_segment.in_vram_range(vram) {
            return owned_segment.find_symbol(vram, settings);
        }

        for prioritised_overlay in owned_segment.prioritised_overlays() {
            for (_ovl_cat, segments_per_rom) in self.overlay_segments.iter() {
                for (_segment_rom, segment) in segments_per_rom.segments() {
                    if segment.name() == Some(&**prioritised_overlay)
                        && segment.in_vram_range(vram)
                    {
                        return segment.find_symbol(vram, settings);
                    }
                }
            }
        }

        None
    }

    /// Like [`find_symbol_from_any_segment`], but for creating or updating
    /// the referenced symbol.
    ///
    /// [`find_symbol_from_any_segment`]: Context::find_symbol_from_any_segment
    #[must_use]
    pub(crate) fn find_referenced_segment_mut(
        &mut self,
        vram: Vram,
        info: &ParentSegmentInfo,
    ) -> Option<&mut SegmentMetadata> {
        find_referenced_segment_mut_impl(self, vram, info)
    }
}

fn find_referenced_segment_mut_impl<'ctx>(
    mut slf: &'ctx mut Context,
    vram: Vram,
    info: &ParentSegmentInfo,
) -> Option<&'ctx mut SegmentMetadata> {
    if slf.global_segment.in_vram_range(vram) {
        return Some(&mut slf.global_segment);
    }

    let overlay_category_name = info.overlay_category_name()?;

    polonius!(|slf| -> Option<&'polonius mut SegmentMetadata> {
        if let Some(segments_per_rom) = slf.overlay_segments.get_mut(overlay_category_name) {
            if let Some(owned_segment) = segments_per_rom.segments_mut().get_mut(&info.segment_rom())
            {
                if owned_segment.in_vram_range(vram) {
                    polonius_return!(Some(owned_segment));
                }
            }
        }
    });

    // Check the prioritised overlays. The double lookup dance avoids holding
    // a shared borrow while asking for the exclusive one.
    let mut prioritised_overlay_info = None;
    if let Some(segments_per_rom) = slf.overlay_segments.get(overlay_category_name) {
        if let Some(owned_segment) = segments_per_rom.segments().get(&info.segment_rom()) {
            'outer: for prioritised_overlay in owned_segment.prioritised_overlays() {
                for (ovl_cat, segments_per_rom) in slf.overlay_segments.iter() {
                    for (segment_rom, segment) in segments_per_rom.segments() {
                        if segment.name() == Some(&**prioritised_overlay)
                            && segment.in_vram_range(vram)
                        {
                            prioritised_overlay_info = Some((ovl_cat.clone(), *segment_rom));
                            break 'outer;
                        }
                    }
                }
            }
        }
    }

    if let Some((ovl_cat, segment_rom)) = prioritised_overlay_info {
        polonius!(|slf| -> Option<&'polonius mut SegmentMetadata> {
            if let Some(segment) = slf
                .overlay_segments
                .get_mut(&ovl_cat)
                .and_then(|x| x.segments_mut().get_mut(&segment_rom))
            {
                polonius_return!(Some(segment));
            }
        });
    }

    // An address inside this category's own vram window but outside the
    // owned segment goes to the category placeholder.
    polonius!(|slf| -> Option<&'polonius mut SegmentMetadata> {
        if let Some(segments_per_rom) = slf.overlay_segments.get_mut(overlay_category_name) {
            let placeholder = segments_per_rom.placeholder_segment_mut();
            if placeholder.in_vram_range(vram) {
                polonius_return!(Some(placeholder));
            }
        }
    });

    None
}
