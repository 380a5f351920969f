/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{collections::btree_set::BTreeSet, sync::Arc};
use core::hash;

use crate::addresses::{AddressRange, Rom, RomVramRange, Size, Vram};
use crate::analysis::{InstrAnalysisInfo, InstructionAnalysisResult, InstructionAnalyzer};
use crate::config::Compiler;
use crate::context::Context;
use crate::isa::Instruction;
use crate::metadata::{GeneratedBy, ParentSectionMetadata};
use crate::parent_segment_info::ParentSegmentInfo;
use crate::section_type::SectionType;
use crate::symbols::processed::FunctionSymProcessed;
use crate::symbols::{RomSymbol, Symbol, SymbolCreationError, SymbolPostProcessError};

const SECTION_TYPE: SectionType = SectionType::Text;

/// One function of a text section, before symbol names are resolved.
#[derive(Debug, Clone)]
pub struct FunctionSym {
    ranges: RomVramRange,
    instructions: Arc<[Instruction]>,
    parent_segment_info: ParentSegmentInfo,
    instr_analysis: InstructionAnalysisResult,
}

impl FunctionSym {
    pub(crate) fn new(
        context: &mut Context,
        instructions: Arc<[Instruction]>,
        rom: Rom,
        vram: Vram,
        parent_segment_info: ParentSegmentInfo,
        properties: FunctionSymProperties,
    ) -> Result<Self, SymbolCreationError> {
        let size = Size::new(instructions.len() as u32 * 4);
        let rom_range = AddressRange::new(rom, rom + size);
        let vram_range = AddressRange::new(vram, vram + size);
        let ranges = RomVramRange::new(rom_range, vram_range);

        let gp_config = context.global_config().gp_config();
        let instr_analysis = InstructionAnalyzer::analyze(gp_config, ranges, &instructions);

        {
            let owned_segment = context.find_owned_segment_mut(&parent_segment_info)?;
            let metadata = owned_segment.add_function(vram, Some(rom), GeneratedBy::Autogenerated);
            metadata.set_defined();
            metadata.set_autodetected_size(size - count_padding(&instructions));
            properties.apply_to_metadata(metadata);
        }

        Self::process_instr_analysis_result(
            context,
            &instr_analysis,
            ranges,
            &parent_segment_info,
        )?;

        Ok(Self {
            ranges,
            instructions,
            parent_segment_info,
            instr_analysis,
        })
    }

    /// Register every address the analysis discovered into the context.
    fn process_instr_analysis_result(
        context: &mut Context,
        instr_analysis: &InstructionAnalysisResult,
        ranges: RomVramRange,
        parent_segment_info: &ParentSegmentInfo,
    ) -> Result<(), SymbolCreationError> {
        let self_vram = ranges.vram().start();
        let self_rom = ranges.rom().start();

        let mut branch_labels: BTreeSet<Vram> = BTreeSet::new();

        for (instr_index, info) in instr_analysis.instr_infos().iter().enumerate() {
            let _instr_rom = self_rom + Size::new(instr_index as u32 * 4);

            match info {
                InstrAnalysisInfo::No
                | InstrAnalysisInfo::PairedHi { .. }
                | InstrAnalysisInfo::ConstantHi { .. }
                | InstrAnalysisInfo::ConstantLo { .. } => {}

                InstrAnalysisInfo::DirectCall { target_vram } => {
                    if let Some(segment) =
                        context.find_referenced_segment_mut(*target_vram, parent_segment_info)
                    {
                        if !segment.is_vram_ignored(*target_vram) {
                            segment
                                .add_function(*target_vram, None, GeneratedBy::Autogenerated)
                                .add_reference_function(self_vram);
                        }
                    }
                }

                InstrAnalysisInfo::BranchLink { target_vram }
                | InstrAnalysisInfo::MaybeTailCall { target_vram } => {
                    if ranges.in_vram_range(*target_vram) {
                        branch_labels.insert(*target_vram);
                    } else if let Some(segment) =
                        context.find_referenced_segment_mut(*target_vram, parent_segment_info)
                    {
                        if !segment.is_vram_ignored(*target_vram) {
                            segment
                                .add_function(*target_vram, None, GeneratedBy::Autogenerated)
                                .add_reference_function(self_vram);
                        }
                    }
                }

                InstrAnalysisInfo::Branch { target_vram } => {
                    branch_labels.insert(*target_vram);
                }

                InstrAnalysisInfo::BranchOutside { target_vram } => {
                    // A branch out of the function. Conservatively make it a
                    // label so the target section emits it.
                    if let Some(segment) =
                        context.find_referenced_segment_mut(*target_vram, parent_segment_info)
                    {
                        if !segment.is_vram_ignored(*target_vram) {
                            segment
                                .add_branch_label(*target_vram, None, GeneratedBy::Autogenerated)
                                .add_reference_function(self_vram);
                        }
                    }
                }

                InstrAnalysisInfo::Jumptable { jumptable_vram } => {
                    if !context.global_config().features().jumptable_detection() {
                        continue;
                    }
                    if let Some(segment) =
                        context.find_referenced_segment_mut(*jumptable_vram, parent_segment_info)
                    {
                        if !segment.is_vram_ignored(*jumptable_vram) {
                            segment
                                .add_jumptable(*jumptable_vram, GeneratedBy::Autogenerated)
                                .add_reference_function(self_vram);
                        }
                    }
                }

                InstrAnalysisInfo::PairedLo { address, gp_rel } => {
                    if let Some(segment) =
                        context.find_referenced_segment_mut(*address, parent_segment_info)
                    {
                        if !segment.is_vram_ignored(*address) {
                            let sym =
                                segment.add_symbol(*address, GeneratedBy::Autogenerated, true);
                            sym.add_reference_function(self_vram);
                            if *gp_rel {
                                sym.set_accessed_as_gp_rel();
                            }
                            if let Some(access_info) =
                                instr_analysis.access_info_per_address().get(address)
                            {
                                sym.set_access_type_if_unset(access_info.0, access_info.1);
                            }
                        }
                    }
                }
            }
        }

        // Branch targets inside the function body become its labels.
        let owned_segment = context.find_owned_segment_mut(parent_segment_info)?;
        for target_vram in branch_labels {
            let label_rom =
                self_rom + Size::new((target_vram.inner() - self_vram.inner()) & !0x3);
            let label =
                owned_segment.add_branch_label(target_vram, Some(label_rom), GeneratedBy::Autogenerated);
            label.set_defined();
        }

        Ok(())
    }
}

impl FunctionSym {
    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    #[must_use]
    pub fn instr_analysis(&self) -> &InstructionAnalysisResult {
        &self.instr_analysis
    }

    #[must_use]
    pub fn referenced_vrams(&self) -> &BTreeSet<Vram> {
        self.instr_analysis.referenced_vrams()
    }

    /// Advisory: does this function look like it was written by hand?
    #[must_use]
    pub fn is_likely_handwritten(&self) -> bool {
        self.instr_analysis.is_likely_handwritten()
            || !self.instr_analysis.has_standard_prologue()
    }

    pub(crate) fn post_process(
        self,
        context: &mut Context,
    ) -> Result<FunctionSymProcessed, SymbolPostProcessError> {
        FunctionSymProcessed::new(
            context,
            self.ranges,
            self.instructions,
            self.parent_segment_info,
            self.instr_analysis,
        )
    }
}

impl Symbol for FunctionSym {
    fn vram_range(&self) -> &AddressRange<Vram> {
        self.ranges.vram()
    }

    fn parent_segment_info(&self) -> &ParentSegmentInfo {
        &self.parent_segment_info
    }

    fn section_type(&self) -> SectionType {
        SECTION_TYPE
    }
}
impl RomSymbol for FunctionSym {
    fn rom_vram_range(&self) -> &RomVramRange {
        &self.ranges
    }
}

impl hash::Hash for FunctionSym {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.parent_segment_info.hash(state);
        self.ranges.hash(state);
    }
}
impl PartialEq for FunctionSym {
    fn eq(&self, other: &Self) -> bool {
        self.parent_segment_info == other.parent_segment_info && self.ranges == other.ranges
    }
}

#[derive(Debug, Clone, Hash, PartialEq)]
pub(crate) struct FunctionSymProperties {
    pub parent_metadata: ParentSectionMetadata,
    pub compiler: Option<Compiler>,
}

impl FunctionSymProperties {
    fn apply_to_metadata(self, metadata: &mut crate::metadata::SymbolMetadata) {
        metadata.set_parent_metadata(self.parent_metadata);

        if let Some(compiler) = self.compiler {
            metadata.set_compiler(compiler);
        }
    }
}

fn count_padding(instructions: &[Instruction]) -> Size {
    if instructions.iter().all(|x| x.is_nop()) {
        return Size::new(0);
    }

    let mut count = 0;

    for pair in instructions.windows(2).rev() {
        let prev_instr = pair[0];
        let instr = pair[1];

        if prev_instr.opcode().has_delay_slot() {
            break;
        }
        if !instr.is_nop() {
            break;
        }

        count += 4;
    }

    Size::new(count)
}
