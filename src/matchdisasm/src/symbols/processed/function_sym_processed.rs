/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{
    collections::{btree_map::BTreeMap, btree_set::BTreeSet},
    sync::Arc,
};
use core::hash;

use crate::addresses::{AddressRange, Rom, RomVramRange, Size, Vram};
use crate::analysis::{InstrAnalysisInfo, InstructionAnalysisResult};
use crate::collections::addended_ordered_map::FindSettings;
use crate::config::Compiler;
use crate::context::Context;
use crate::isa::{opcodes::Opcode, Instruction};
use crate::metadata::SymbolType;
use crate::parent_segment_info::ParentSegmentInfo;
use crate::relocation::{RelocReferencedSym, RelocationInfo, RelocationType};
use crate::section_type::SectionType;
use crate::symbols::display::{FunctionDisplay, FunctionDisplaySettings};
use crate::symbols::{RomSymbol, Symbol, SymbolPostProcessError};

/// A function with every reference resolved to a symbol name, ready for
/// emission.
#[derive(Debug, Clone)]
pub struct FunctionSymProcessed {
    ranges: RomVramRange,
    instructions: Arc<[Instruction]>,
    parent_segment_info: ParentSegmentInfo,

    name: Arc<str>,
    /// Labels to print before the instruction at the keyed vram.
    labels: BTreeMap<Vram, Arc<str>>,
    /// The symbolic-operand overlay, keyed by instruction rom.
    relocs: BTreeMap<Rom, RelocationInfo>,

    /// Instructions swallowed by a compiler workaround; not emitted.
    skipped_instrs: BTreeSet<usize>,
    /// `div`/`divu` which must be rendered in their two-operand form.
    two_operand_divs: BTreeSet<usize>,
}

impl FunctionSymProcessed {
    pub(crate) fn new(
        context: &mut Context,
        ranges: RomVramRange,
        instructions: Arc<[Instruction]>,
        parent_segment_info: ParentSegmentInfo,
        instr_analysis: InstructionAnalysisResult,
    ) -> Result<Self, SymbolPostProcessError> {
        let name_settings = *context.global_config().name_generation();
        let self_vram = ranges.vram().start();

        let (name, compiler) = {
            let owned_segment = context.find_owned_segment(&parent_segment_info)?;
            let metadata = owned_segment
                .find_symbol(self_vram, FindSettings::new(false))
                .expect("The symbol was registered during section analysis");
            (
                Arc::from(metadata.display_name(&name_settings)),
                metadata.compiler(),
            )
        };

        let labels = {
            let owned_segment = context.find_owned_segment(&parent_segment_info)?;
            let mut labels: BTreeMap<Vram, Arc<str>> = BTreeMap::new();

            for (label_vram, metadata) in owned_segment
                .find_symbols_range(self_vram + Size::new(4), ranges.vram().end())
            {
                match metadata.sym_type() {
                    Some(SymbolType::BranchLabel) | Some(SymbolType::JumptableLabel) => {
                        labels.insert(*label_vram, Arc::from(metadata.display_name(&name_settings)));
                    }
                    _ => {}
                }
            }
            labels
        };

        let mut relocs = BTreeMap::new();
        for (index, info) in instr_analysis.instr_infos().iter().enumerate() {
            let instr_rom = ranges.rom().start() + Size::new(index as u32 * 4);

            let reloc = match info {
                InstrAnalysisInfo::No | InstrAnalysisInfo::Jumptable { .. } => None,

                InstrAnalysisInfo::DirectCall { target_vram }
                | InstrAnalysisInfo::MaybeTailCall { target_vram } => Self::resolve_reloc(
                    context,
                    &parent_segment_info,
                    *target_vram,
                    RelocationType::R_MIPS_26,
                    false,
                ),

                InstrAnalysisInfo::BranchLink { target_vram }
                | InstrAnalysisInfo::Branch { target_vram }
                | InstrAnalysisInfo::BranchOutside { target_vram } => {
                    if let Some(label) = labels.get(target_vram) {
                        Some(
                            RelocationType::R_MIPS_PC16.new_reloc_info(
                                RelocReferencedSym::new_name(label.clone(), 0),
                            ),
                        )
                    } else {
                        Self::resolve_reloc(
                            context,
                            &parent_segment_info,
                            *target_vram,
                            RelocationType::R_MIPS_PC16,
                            false,
                        )
                    }
                }

                InstrAnalysisInfo::PairedHi { address } => Self::resolve_reloc(
                    context,
                    &parent_segment_info,
                    *address,
                    RelocationType::R_MIPS_HI16,
                    true,
                ),
                InstrAnalysisInfo::PairedLo { address, gp_rel } => {
                    let reloc_type = if *gp_rel {
                        RelocationType::R_MIPS_GPREL16
                    } else {
                        RelocationType::R_MIPS_LO16
                    };
                    Self::resolve_reloc(context, &parent_segment_info, *address, reloc_type, true)
                }

                InstrAnalysisInfo::ConstantHi { constant } => {
                    Some(RelocationType::R_CUSTOM_CONSTANT_HI.new_reloc_info(
                        RelocReferencedSym::new_constant(*constant),
                    ))
                }
                InstrAnalysisInfo::ConstantLo { constant } => {
                    Some(RelocationType::R_CUSTOM_CONSTANT_LO.new_reloc_info(
                        RelocReferencedSym::new_constant(*constant),
                    ))
                }
            };

            if let Some(reloc) = reloc {
                relocs.insert(instr_rom, reloc);
            }
        }

        let (skipped_instrs, two_operand_divs) = find_div_trap_expansions(&instructions, compiler);

        // Labels that only the collapsed trap expansions branched to would
        // dangle in the output; drop them.
        let labels = {
            let mut labels = labels;
            let mut kept_targets: BTreeSet<Vram> = BTreeSet::new();
            let mut skipped_targets: BTreeSet<Vram> = BTreeSet::new();

            for (index, info) in instr_analysis.instr_infos().iter().enumerate() {
                if let InstrAnalysisInfo::Branch { target_vram } = info {
                    if skipped_instrs.contains(&index) {
                        skipped_targets.insert(*target_vram);
                    } else {
                        kept_targets.insert(*target_vram);
                    }
                }
            }

            for target in skipped_targets.difference(&kept_targets) {
                labels.remove(target);
            }
            labels
        };

        Ok(Self {
            ranges,
            instructions,
            parent_segment_info,
            name,
            labels,
            relocs,
            skipped_instrs,
            two_operand_divs,
        })
    }

    /// Resolve `vram` to a symbol in scope and build the relocation against
    /// its name.
    ///
    /// Addresses that don't resolve keep their raw numeric form, which is the
    /// tie-break for reconstructed addresses that fall outside every known
    /// range.
    fn resolve_reloc(
        context: &Context,
        parent_segment_info: &ParentSegmentInfo,
        vram: Vram,
        reloc_type: RelocationType,
        allow_addend: bool,
    ) -> Option<RelocationInfo> {
        let name_settings = *context.global_config().name_generation();
        let metadata = context.find_symbol_from_any_segment(
            vram,
            parent_segment_info,
            FindSettings::new(allow_addend),
        )?;

        let addend = (vram.inner() as i64 - metadata.vram().inner() as i64) as i32;
        let name: Arc<str> = Arc::from(metadata.display_name(&name_settings));

        Some(reloc_type.new_reloc_info(RelocReferencedSym::new_name(name, addend)))
    }
}

impl FunctionSymProcessed {
    #[must_use]
    pub fn name(&self) -> Arc<str> {
        self.name.clone()
    }

    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    #[must_use]
    pub fn labels(&self) -> &BTreeMap<Vram, Arc<str>> {
        &self.labels
    }

    #[must_use]
    pub fn relocs(&self) -> &BTreeMap<Rom, RelocationInfo> {
        &self.relocs
    }

    #[must_use]
    pub(crate) fn skipped_instrs(&self) -> &BTreeSet<usize> {
        &self.skipped_instrs
    }

    #[must_use]
    pub(crate) fn two_operand_divs(&self) -> &BTreeSet<usize> {
        &self.two_operand_divs
    }

    #[must_use]
    pub fn display<'sym, 'flg>(
        &'sym self,
        settings: &'flg FunctionDisplaySettings,
    ) -> FunctionDisplay<'sym, 'flg> {
        FunctionDisplay::new(self, settings)
    }
}

impl Symbol for FunctionSymProcessed {
    fn vram_range(&self) -> &AddressRange<Vram> {
        self.ranges.vram()
    }

    fn parent_segment_info(&self) -> &ParentSegmentInfo {
        &self.parent_segment_info
    }

    fn section_type(&self) -> SectionType {
        SectionType::Text
    }
}
impl RomSymbol for FunctionSymProcessed {
    fn rom_vram_range(&self) -> &RomVramRange {
        &self.ranges
    }
}

impl hash::Hash for FunctionSymProcessed {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.parent_segment_info.hash(state);
        self.ranges.hash(state);
    }
}
impl PartialEq for FunctionSymProcessed {
    fn eq(&self, other: &Self) -> bool {
        self.parent_segment_info == other.parent_segment_info && self.ranges == other.ranges
    }
}

/// Find the divide-by-zero trap expansions emitted by SN64 and PSYQ around
/// each `div`/`divu` and mark them for collapsing.
///
/// The expansion checks the divisor and traps on zero:
///
/// ```mips
/// div         $zero, $a0, $a1
/// bnez        $a1, . + 0x10
///  nop
/// break       7
/// ```
///
/// Signed divisions get a second overflow check (`-1` divisor against
/// `INT_MIN`), which is collapsed as well. The whole thing re-assembles from
/// a plain two-operand `div`.
fn find_div_trap_expansions(
    instructions: &[Instruction],
    compiler: Option<Compiler>,
) -> (BTreeSet<usize>, BTreeSet<usize>) {
    let mut skipped = BTreeSet::new();
    let mut two_operand = BTreeSet::new();

    if !compiler.is_some_and(|x| x.expands_div_into_zero_check()) {
        return (skipped, two_operand);
    }

    for index in 0..instructions.len() {
        let instr = &instructions[index];
        let is_signed_div = instr.opcode() == Opcode::core_div;
        if !is_signed_div && instr.opcode() != Opcode::core_divu {
            continue;
        }
        if index + 3 >= instructions.len() {
            continue;
        }

        let divisor = instr.field_rt_raw();

        // bnez divisor, over the break
        let guard = &instructions[index + 1];
        if guard.opcode() != Opcode::core_bne
            || guard.field_rs_raw() != divisor
            || guard.field_rt_raw() != 0
        {
            continue;
        }
        if !instructions[index + 2].is_nop() {
            continue;
        }
        if instructions[index + 3].opcode() != Opcode::core_break {
            continue;
        }

        skipped.insert(index + 1);
        skipped.insert(index + 2);
        skipped.insert(index + 3);
        two_operand.insert(index);

        if !is_signed_div || index + 9 >= instructions.len() {
            continue;
        }

        // addiu $at, $zero, -1; bne divisor, $at, ...; lui $at, 0x8000;
        // bne dividend, $at, ...; nop; break 6
        let overflow = &instructions[index + 4..index + 10];
        if overflow[0].word() == 0x2401FFFF
            && overflow[1].opcode() == Opcode::core_bne
            && overflow[1].field_rt_raw() == 1
            && overflow[2].word() == 0x3C018000
            && overflow[3].opcode() == Opcode::core_bne
            && overflow[3].field_rt_raw() == 1
            && overflow[4].is_nop()
            && overflow[5].opcode() == Opcode::core_break
        {
            for skip in index + 4..index + 10 {
                skipped.insert(skip);
            }
        }
    }

    (skipped, two_operand)
}
