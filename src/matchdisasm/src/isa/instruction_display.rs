/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::fmt;

use super::{
    opcodes::OperandFormat,
    registers::{Cop1, Gpr},
    Instruction, InstructionDisplayFlags, Opcode,
};

impl Instruction {
    /// Render this instruction.
    ///
    /// `imm_override` replaces the immediate (or branch/jump target) operand,
    /// which is how symbolic `%hi`/`%lo`/label references get emitted.
    #[must_use]
    pub fn display<'ins, 'flg, 'ovr>(
        &'ins self,
        display_flags: &'flg InstructionDisplayFlags,
        imm_override: Option<&'ovr str>,
        extra_ljust: i32,
    ) -> InstructionDisplay<'ins, 'flg, 'ovr> {
        InstructionDisplay {
            instr: self,
            display_flags,
            imm_override,
            extra_ljust,
        }
    }
}

pub struct InstructionDisplay<'ins, 'flg, 'ovr> {
    instr: &'ins Instruction,
    display_flags: &'flg InstructionDisplayFlags,
    imm_override: Option<&'ovr str>,
    extra_ljust: i32,
}

impl fmt::Display for InstructionDisplay<'_, '_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let instr = self.instr;

        if !instr.is_valid() {
            return self.write_mnemonic_operands(f, ".word", &[format!("0x{:08X}", instr.word())]);
        }

        if self.display_flags.pseudo_instructions() {
            if let Some(result) = self.fmt_pseudo(f) {
                return result;
            }
        }

        let mnemonic = instr.opcode().name();
        let operands = self.operands();
        self.write_mnemonic_operands(f, mnemonic, &operands)
    }
}

impl InstructionDisplay<'_, '_, '_> {
    fn write_mnemonic_operands(
        &self,
        f: &mut fmt::Formatter<'_>,
        mnemonic: &str,
        operands: &[String],
    ) -> fmt::Result {
        if operands.is_empty() {
            return write!(f, "{}", mnemonic);
        }

        let ljust = {
            let base = self.display_flags.opcode_ljust() as i32 + self.extra_ljust;
            if base < 0 {
                0
            } else {
                base as usize
            }
        };
        write!(f, "{:<width$} ", mnemonic, width = ljust)?;

        for (i, op) in operands.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", op)?;
        }
        Ok(())
    }

    /// Try the single-instruction pseudo renderings. Returns `None` when the
    /// instruction has no pseudo form.
    fn fmt_pseudo(&self, f: &mut fmt::Formatter<'_>) -> Option<fmt::Result> {
        let instr = self.instr;
        let abi = instr.abi();

        if instr.is_nop() {
            return Some(write!(f, "nop"));
        }

        match instr.opcode() {
            Opcode::core_or | Opcode::core_addu | Opcode::core_daddu => {
                if instr.field_rt_raw() == 0 {
                    let rd = Gpr::from_index(instr.field_rd_raw()).name(abi);
                    let rs = Gpr::from_index(instr.field_rs_raw()).name(abi);
                    return Some(self.write_mnemonic_operands(
                        f,
                        "move",
                        &[rd.to_string(), rs.to_string()],
                    ));
                }
            }
            Opcode::core_addiu => {
                if instr.field_rs_raw() == 0 {
                    let rt = Gpr::from_index(instr.field_rt_raw()).name(abi);
                    let imm = self.immediate_str();
                    return Some(self.write_mnemonic_operands(f, "li", &[rt.to_string(), imm]));
                }
            }
            Opcode::core_ori => {
                if instr.field_rs_raw() == 0 {
                    let rt = Gpr::from_index(instr.field_rt_raw()).name(abi);
                    let imm = self.immediate_str();
                    return Some(self.write_mnemonic_operands(f, "li", &[rt.to_string(), imm]));
                }
            }
            Opcode::core_beq => {
                if instr.field_rs_raw() == 0 && instr.field_rt_raw() == 0 {
                    let target = self.branch_target_str();
                    return Some(self.write_mnemonic_operands(f, "b", &[target]));
                }
                if instr.field_rt_raw() == 0 {
                    let rs = Gpr::from_index(instr.field_rs_raw()).name(abi);
                    let target = self.branch_target_str();
                    return Some(self.write_mnemonic_operands(
                        f,
                        "beqz",
                        &[rs.to_string(), target],
                    ));
                }
            }
            Opcode::core_bne => {
                if instr.field_rt_raw() == 0 {
                    let rs = Gpr::from_index(instr.field_rs_raw()).name(abi);
                    let target = self.branch_target_str();
                    return Some(self.write_mnemonic_operands(
                        f,
                        "bnez",
                        &[rs.to_string(), target],
                    ));
                }
            }
            Opcode::core_bgezal => {
                if instr.field_rs_raw() == 0 {
                    let target = self.branch_target_str();
                    return Some(self.write_mnemonic_operands(f, "bal", &[target]));
                }
            }
            Opcode::core_sub | Opcode::core_subu => {
                if instr.field_rs_raw() == 0 {
                    let mnemonic = if instr.opcode() == Opcode::core_sub {
                        "neg"
                    } else {
                        "negu"
                    };
                    let rd = Gpr::from_index(instr.field_rd_raw()).name(abi);
                    let rt = Gpr::from_index(instr.field_rt_raw()).name(abi);
                    return Some(self.write_mnemonic_operands(
                        f,
                        mnemonic,
                        &[rd.to_string(), rt.to_string()],
                    ));
                }
            }
            _ => {}
        }

        None
    }

    fn operands(&self) -> Vec<String> {
        let instr = self.instr;
        let abi = instr.abi();
        let gpr = |raw: u32| Gpr::from_index(raw).name(abi).to_string();
        let fpr = |raw: u32| Cop1::from_index(raw).name(abi).to_string();

        match instr.opcode().operand_format() {
            OperandFormat::None => Vec::new(),
            OperandFormat::RdRsRt => vec![
                gpr(instr.field_rd_raw()),
                gpr(instr.field_rs_raw()),
                gpr(instr.field_rt_raw()),
            ],
            OperandFormat::RdRtRs => vec![
                gpr(instr.field_rd_raw()),
                gpr(instr.field_rt_raw()),
                gpr(instr.field_rs_raw()),
            ],
            OperandFormat::RdRtSa => vec![
                gpr(instr.field_rd_raw()),
                gpr(instr.field_rt_raw()),
                format!("{}", instr.field_sa()),
            ],
            OperandFormat::RsRt => {
                let rs = gpr(instr.field_rs_raw());
                let rt = gpr(instr.field_rt_raw());
                match instr.opcode() {
                    Opcode::core_div | Opcode::core_divu | Opcode::core_ddiv
                    | Opcode::core_ddivu => {
                        if self.display_flags.two_operand_div() {
                            vec![rs, rt]
                        } else {
                            vec!["$zero".to_string(), rs, rt]
                        }
                    }
                    _ => vec![rs, rt],
                }
            }
            OperandFormat::Rs => vec![gpr(instr.field_rs_raw())],
            OperandFormat::Rd => vec![gpr(instr.field_rd_raw())],
            OperandFormat::RdRs => {
                let rd_raw = instr.field_rd_raw();
                let rs = gpr(instr.field_rs_raw());
                if instr.opcode() == Opcode::core_jalr && Gpr::from_index(rd_raw) == Gpr::ra {
                    vec![rs]
                } else {
                    vec![gpr(rd_raw), rs]
                }
            }
            OperandFormat::RtRsImm => vec![
                gpr(instr.field_rt_raw()),
                gpr(instr.field_rs_raw()),
                self.immediate_str(),
            ],
            OperandFormat::RtImm => vec![gpr(instr.field_rt_raw()), self.immediate_str()],
            OperandFormat::RsImm => vec![gpr(instr.field_rs_raw()), self.immediate_str()],
            OperandFormat::RsRtOffset => vec![
                gpr(instr.field_rs_raw()),
                gpr(instr.field_rt_raw()),
                self.branch_target_str(),
            ],
            OperandFormat::RsOffset => {
                vec![gpr(instr.field_rs_raw()), self.branch_target_str()]
            }
            OperandFormat::Offset => vec![self.branch_target_str()],
            OperandFormat::Target => vec![self.jump_target_str()],
            OperandFormat::RtOffsetBase => vec![
                gpr(instr.field_rt_raw()),
                format!("{}({})", self.immediate_str(), gpr(instr.field_rs_raw())),
            ],
            OperandFormat::FtOffsetBase => vec![
                fpr(instr.field_rt_raw()),
                format!("{}({})", self.immediate_str(), gpr(instr.field_rs_raw())),
            ],
            OperandFormat::FdFsFt => vec![
                fpr(instr.field_sa()),
                fpr(instr.field_rd_raw()),
                fpr(instr.field_rt_raw()),
            ],
            OperandFormat::FdFs => vec![fpr(instr.field_sa()), fpr(instr.field_rd_raw())],
            OperandFormat::FsFt => vec![fpr(instr.field_rd_raw()), fpr(instr.field_rt_raw())],
            OperandFormat::RtFs => vec![gpr(instr.field_rt_raw()), fpr(instr.field_rd_raw())],
            OperandFormat::RtCop0 => vec![
                gpr(instr.field_rt_raw()),
                instr
                    .field_cop0()
                    .map(|x| x.name().to_string())
                    .unwrap_or_default(),
            ],
            OperandFormat::RtFsControl => vec![
                gpr(instr.field_rt_raw()),
                format!("${}", instr.field_rd_raw()),
            ],
            OperandFormat::RtGteData => vec![
                gpr(instr.field_rt_raw()),
                instr
                    .field_gte_data()
                    .map(|x| x.name().to_string())
                    .unwrap_or_default(),
            ],
            OperandFormat::RtGteControl => vec![
                gpr(instr.field_rt_raw()),
                instr
                    .field_gte_control()
                    .map(|x| x.name().to_string())
                    .unwrap_or_default(),
            ],
            OperandFormat::Code => {
                let code = (instr.word() >> 16) & 0x3FF;
                if code != 0 {
                    vec![format!("{}", code)]
                } else {
                    Vec::new()
                }
            }
            OperandFormat::GteCommand => Vec::new(),
            OperandFormat::RspVdVsVt => {
                let vd = instr
                    .field_rsp_vd()
                    .map(|x| x.name().to_string())
                    .unwrap_or_default();
                let vs = format!("$v{}", instr.field_rd_raw());
                let element = instr.field_rsp_element();
                let vt = if element != 0 {
                    format!("$v{}[{}]", instr.field_rt_raw(), element)
                } else {
                    format!("$v{}", instr.field_rt_raw())
                };
                vec![vd, vs, vt]
            }
            OperandFormat::RspVdVs => {
                let de = instr.field_rd_raw() & 0x7;
                let e = instr.field_rsp_element() & 0x7;
                vec![
                    format!("$v{}[{}]", instr.field_sa(), de),
                    format!("$v{}[{}]", instr.field_rt_raw(), e),
                ]
            }
            OperandFormat::RspVtOffsetBase => {
                let scale = rsp_load_store_scale(instr.opcode());
                let offset = instr.field_rsp_ls_offset() * scale;
                let offset_str = if let Some(imm_override) = self.imm_override {
                    imm_override.to_string()
                } else if offset < 0 {
                    format!("-0x{:X}", -offset)
                } else {
                    format!("0x{:X}", offset)
                };
                vec![
                    format!(
                        "$v{}[{}]",
                        instr.field_rt_raw(),
                        instr.field_rsp_ls_element()
                    ),
                    format!("{}({})", offset_str, gpr(instr.field_rs_raw())),
                ]
            }
            OperandFormat::RtRspVs => vec![
                gpr(instr.field_rt_raw()),
                format!(
                    "$v{}[{}]",
                    instr.field_rd_raw(),
                    instr.field_rsp_ls_element()
                ),
            ],
            OperandFormat::RtRspCop0 => vec![
                gpr(instr.field_rt_raw()),
                instr
                    .field_rsp_cop0()
                    .map(|x| x.name().to_string())
                    .unwrap_or_default(),
            ],
        }
    }

    fn immediate_str(&self) -> String {
        if let Some(imm_override) = self.imm_override {
            return imm_override.to_string();
        }

        match self.instr.get_processed_immediate() {
            Some(imm) => match self.instr.opcode() {
                Opcode::core_andi | Opcode::core_ori | Opcode::core_xori | Opcode::core_lui => {
                    format!("0x{:X}", imm)
                }
                _ => {
                    if imm < 0 {
                        format!("-0x{:X}", -imm)
                    } else {
                        format!("0x{:X}", imm)
                    }
                }
            },
            None => String::new(),
        }
    }

    fn branch_target_str(&self) -> String {
        if let Some(imm_override) = self.imm_override {
            return imm_override.to_string();
        }

        match self.instr.get_branch_offset_generic() {
            Some(offset) => {
                let inner = offset.inner();
                if inner < 0 {
                    format!(". - 0x{:X}", -inner)
                } else {
                    format!(". + 0x{:X}", inner)
                }
            }
            None => String::new(),
        }
    }

    fn jump_target_str(&self) -> String {
        if let Some(imm_override) = self.imm_override {
            return imm_override.to_string();
        }

        match self.instr.get_instr_index_as_vram() {
            Some(target) => format!("0x{:X}", target.inner()),
            None => format!("0x{:X}", self.instr.field_instr_index() << 2),
        }
    }
}

const fn rsp_load_store_scale(opcode: Opcode) -> i32 {
    match opcode {
        Opcode::rsp_lbv | Opcode::rsp_sbv => 1,
        Opcode::rsp_lsv | Opcode::rsp_ssv => 2,
        Opcode::rsp_llv | Opcode::rsp_slv => 4,
        Opcode::rsp_ldv | Opcode::rsp_sdv | Opcode::rsp_lpv | Opcode::rsp_spv
        | Opcode::rsp_luv | Opcode::rsp_suv => 8,
        _ => 16,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addresses::Vram;
    use crate::isa::{InstructionFlags, IsaVersion};

    fn disp(word: u32) -> String {
        let flags = InstructionFlags::new(IsaVersion::MIPS_III);
        let display_flags = InstructionDisplayFlags::new();
        let instr = Instruction::new(word, Vram::new(0x80000000), flags);
        instr.display(&display_flags, None, 0).to_string()
    }

    #[test]
    fn pseudo_renderings() {
        assert_eq!(disp(0x00000000), "nop");
        assert_eq!(disp(0x03E00008), "jr          $ra");
        assert_eq!(disp(0x24020001), "li          $v0, 0x1");
        assert_eq!(disp(0x00802021), "move        $a0, $a0");
        assert_eq!(disp(0x10000007), "b           . + 0x20");
        assert_eq!(disp(0x0411000F), "bal         . + 0x40");
    }

    #[test]
    fn plain_renderings() {
        assert_eq!(disp(0x27BDFFE8), "addiu       $sp, $sp, -0x18");
        assert_eq!(disp(0x3C1C8000), "lui         $gp, 0x8000");
        assert_eq!(disp(0x8FBF0014), "lw          $ra, 0x14($sp)");
        assert_eq!(disp(0xAFB00010), "sw          $s0, 0x10($sp)");
        assert_eq!(disp(0x0320F809), "jalr        $t9");
    }

    #[test]
    fn invalid_renders_as_word_directive() {
        assert_eq!(disp(0xFC000000), ".word       0xFC000000");
    }

    #[test]
    fn div_renders_with_explicit_zero() {
        // div $zero, $a0, $a1
        assert_eq!(disp(0x0085001A), "div         $zero, $a0, $a1");

        let flags = InstructionFlags::new(IsaVersion::MIPS_III);
        let display_flags = InstructionDisplayFlags::new().with_two_operand_div(true);
        let instr = Instruction::new(0x0085001A, Vram::new(0x80000000), flags);
        assert_eq!(
            instr.display(&display_flags, None, 0).to_string(),
            "div         $a0, $a1"
        );
    }

    #[test]
    fn imm_override_replaces_immediate() {
        let flags = InstructionFlags::new(IsaVersion::MIPS_III);
        let display_flags = InstructionDisplayFlags::new();

        let lui = Instruction::new(0x3C1C8000, Vram::new(0x80000000), flags);
        assert_eq!(
            lui.display(&display_flags, Some("%hi(D_80000010)"), 0)
                .to_string(),
            "lui         $gp, %hi(D_80000010)"
        );

        let addiu = Instruction::new(0x279C0010, Vram::new(0x80000004), flags);
        assert_eq!(
            addiu
                .display(&display_flags, Some("%lo(D_80000010)"), 0)
                .to_string(),
            "addiu       $gp, $gp, %lo(D_80000010)"
        );
    }
}
