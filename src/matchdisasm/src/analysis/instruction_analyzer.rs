/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use crate::addresses::RomVramRange;
use crate::config::GpConfig;
use crate::isa::Instruction;

use super::{
    InstrAnalysisInfo, InstrOpLink, InstrOpPairedAddress, InstructionAnalysisResult,
    InstructionOperation, RegisterTracker,
};

/// Single forward pass over one function.
///
/// Instruction order matters (the register tracker depends on it); branches
/// do not reset tracking state, which empirically works well on compiler
/// output.
pub struct InstructionAnalyzer {}

impl InstructionAnalyzer {
    #[must_use]
    pub(crate) fn analyze(
        gp_config: Option<GpConfig>,
        ranges: RomVramRange,
        instrs: &[Instruction],
    ) -> InstructionAnalysisResult {
        debug_assert!(!instrs.is_empty());

        let mut result = InstructionAnalysisResult::new(ranges, instrs.len());
        let mut regs_tracker = RegisterTracker::new(gp_config);

        let mut prev_instr: Option<Instruction> = None;
        for (index, instr) in instrs.iter().enumerate() {
            let instr_rom = result.rom_from_index(index);

            if instr.is_likely_handwritten() {
                result.set_likely_handwritten();
            }

            let operation = regs_tracker.process_instruction(instr, instr_rom);
            Self::process_operation(&mut result, operation, index);

            // Delay slots execute before the jump or call lands, so the
            // previous instruction's side effects are applied only now.
            regs_tracker.clear_afterwards(prev_instr.as_ref());
            prev_instr = if instr.is_valid() { Some(*instr) } else { None };
        }

        Self::detect_prologue(&mut result, instrs);

        result
    }

    fn process_operation(
        result: &mut InstructionAnalysisResult,
        operation: InstructionOperation,
        index: usize,
    ) {
        let instr_rom = result.rom_from_index(index);

        match operation {
            InstructionOperation::Link { info } => match info {
                InstrOpLink::DirectCall { target_vram } => {
                    result.add_referenced_vram(target_vram);
                    result.add_func_call(instr_rom, target_vram);
                    result.set_info(index, InstrAnalysisInfo::DirectCall { target_vram });
                }
                InstrOpLink::LinkingBranch { target_vram } => {
                    result.add_referenced_vram(target_vram);
                    result.set_info(index, InstrAnalysisInfo::BranchLink { target_vram });
                }
                InstrOpLink::RegisterCall { .. } => {}
            },

            InstructionOperation::TailCall { target_vram } => {
                result.add_referenced_vram(target_vram);
                result.set_info(index, InstrAnalysisInfo::MaybeTailCall { target_vram });
            }

            InstructionOperation::JumptableJump {
                jumptable_vram,
                load_rom,
            } => {
                result.add_referenced_vram(jumptable_vram);
                result.add_referenced_jumptable(load_rom, jumptable_vram);
                result.set_info(index, InstrAnalysisInfo::Jumptable { jumptable_vram });
            }

            InstructionOperation::ReturnJump
            | InstructionOperation::UnknownRegisterJump { .. } => {}

            InstructionOperation::Branch { target_vram } => {
                if result.ranges().in_vram_range(target_vram) {
                    result.add_branch_target(instr_rom, target_vram);
                    result.set_info(index, InstrAnalysisInfo::Branch { target_vram });
                } else {
                    result.add_referenced_vram(target_vram);
                    result.set_info(index, InstrAnalysisInfo::BranchOutside { target_vram });
                }
            }

            InstructionOperation::Hi { .. } => {
                // Becomes a PairedHi or a ConstantHi when (and if) a low half
                // shows up.
            }

            InstructionOperation::PairedAddress { vram, info } => match info {
                InstrOpPairedAddress::PairedLo {
                    hi_rom,
                    access_info,
                } => {
                    result.add_referenced_vram(vram);
                    if let Some(access_info) = access_info {
                        result.add_access_info(vram, access_info);
                    }
                    result.set_info(
                        index,
                        InstrAnalysisInfo::PairedLo {
                            address: vram,
                            gp_rel: false,
                        },
                    );

                    let hi_index = result.index_from_rom(hi_rom);
                    match result.info(hi_index) {
                        // A single `lui` may feed multiple lows (struct field
                        // accesses); the first resolved address wins.
                        InstrAnalysisInfo::PairedHi { .. } => {}
                        _ => {
                            result.set_info(
                                hi_index,
                                InstrAnalysisInfo::PairedHi { address: vram },
                            );
                        }
                    }
                }
                InstrOpPairedAddress::GpRel { access_info } => {
                    result.add_referenced_vram(vram);
                    result.add_gp_rel_address(vram);
                    if let Some(access_info) = access_info {
                        result.add_access_info(vram, access_info);
                    }
                    result.set_info(
                        index,
                        InstrAnalysisInfo::PairedLo {
                            address: vram,
                            gp_rel: true,
                        },
                    );
                }
            },

            InstructionOperation::Constant { constant, hi_rom } => {
                result.set_info(index, InstrAnalysisInfo::ConstantLo { constant });

                let hi_index = result.index_from_rom(hi_rom);
                result.set_info(hi_index, InstrAnalysisInfo::ConstantHi { constant });
            }

            InstructionOperation::DanglingLo { .. }
            | InstructionOperation::UnpairedConstant { .. }
            | InstructionOperation::UnhandledOpcode { .. }
            | InstructionOperation::InvalidInstr => {}
        }
    }

    /// `addiu $sp, $sp, -N` followed by callee-save stores within the next
    /// few instructions.
    fn detect_prologue(result: &mut InstructionAnalysisResult, instrs: &[Instruction]) {
        let first_real = instrs.iter().position(|x| !x.is_nop());

        let Some(first_real) = first_real else {
            return;
        };

        if !instrs[first_real].is_stack_allocation() {
            return;
        }

        for instr in instrs.iter().skip(first_real + 1).take(8) {
            if instr.opcode().does_store()
                && instr
                    .field_rs()
                    .is_some_and(|reg| reg.is_stack_pointer(instr.abi()))
            {
                result.set_standard_prologue();
                return;
            }
        }
    }
}
