/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use crate::addresses::{Vram, VramOffset};

use super::{
    decode::decode,
    opcodes::OperandFormat,
    registers::{Cop0, Cop1, Gpr, GteControl, GteData, RspCop0, RspVector},
    Abi, IsaExtension, IsaVersion, Opcode,
};

/// Decoding configuration: base isa, vendor extension, register naming and
/// `j` handling.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct InstructionFlags {
    isa_version: IsaVersion,
    isa_extension: Option<IsaExtension>,
    abi: Abi,
    j_as_branch: bool,
}

impl InstructionFlags {
    #[must_use]
    pub const fn new(isa_version: IsaVersion) -> Self {
        Self {
            isa_version,
            isa_extension: None,
            abi: Abi::O32,
            j_as_branch: false,
        }
    }

    #[must_use]
    pub const fn new_extension(isa_extension: IsaExtension) -> Self {
        Self {
            isa_version: isa_extension.base_isa_version(),
            isa_extension: Some(isa_extension),
            abi: Abi::O32,
            j_as_branch: false,
        }
    }

    #[must_use]
    pub const fn isa_version(&self) -> IsaVersion {
        self.isa_version
    }
    #[must_use]
    pub const fn isa_extension(&self) -> Option<IsaExtension> {
        self.isa_extension
    }
    #[must_use]
    pub const fn abi(&self) -> Abi {
        self.abi
    }
    #[must_use]
    pub const fn j_as_branch(&self) -> bool {
        self.j_as_branch
    }

    #[must_use]
    pub const fn with_abi(self, abi: Abi) -> Self {
        Self { abi, ..self }
    }
    #[must_use]
    pub const fn with_j_as_branch(self, j_as_branch: bool) -> Self {
        Self {
            j_as_branch,
            ..self
        }
    }
}

impl Default for InstructionFlags {
    fn default() -> Self {
        Self::new(IsaVersion::MIPS_III)
    }
}

/// One decoded machine word.
///
/// Immutable: symbolic rewriting lives in overlays produced by the analysis
/// passes, never in the instruction itself.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instruction {
    word: u32,
    vram: Vram,
    opcode: Opcode,
    flags: InstructionFlags,
}

impl Instruction {
    #[must_use]
    pub const fn new(word: u32, vram: Vram, flags: InstructionFlags) -> Self {
        let opcode = decode(word, flags);

        Self {
            word,
            vram,
            opcode,
            flags,
        }
    }

    #[must_use]
    pub const fn word(&self) -> u32 {
        self.word
    }
    #[must_use]
    pub const fn vram(&self) -> Vram {
        self.vram
    }
    #[must_use]
    pub const fn opcode(&self) -> Opcode {
        self.opcode
    }
    #[must_use]
    pub const fn flags(&self) -> InstructionFlags {
        self.flags
    }
    #[must_use]
    pub const fn abi(&self) -> Abi {
        self.flags.abi()
    }
    #[must_use]
    pub const fn isa_extension(&self) -> Option<IsaExtension> {
        self.flags.isa_extension()
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.opcode.is_valid()
    }
}

// Raw field extraction.
impl Instruction {
    #[must_use]
    pub const fn field_rs_raw(&self) -> u32 {
        (self.word >> 21) & 0x1F
    }
    #[must_use]
    pub const fn field_rt_raw(&self) -> u32 {
        (self.word >> 16) & 0x1F
    }
    #[must_use]
    pub const fn field_rd_raw(&self) -> u32 {
        (self.word >> 11) & 0x1F
    }
    #[must_use]
    pub const fn field_sa(&self) -> u32 {
        (self.word >> 6) & 0x1F
    }
    #[must_use]
    pub const fn field_function(&self) -> u32 {
        self.word & 0x3F
    }
    #[must_use]
    pub const fn field_immediate(&self) -> u16 {
        (self.word & 0xFFFF) as u16
    }
    #[must_use]
    pub const fn field_instr_index(&self) -> u32 {
        self.word & 0x03FF_FFFF
    }
    /// Code field of `break`/`syscall`.
    #[must_use]
    pub const fn field_code(&self) -> u32 {
        (self.word >> 6) & 0xFFFFF
    }
}

// Typed field accessors. Each returns `Some` only when the decoded opcode
// actually uses that field.
impl Instruction {
    #[must_use]
    pub fn field_rs(&self) -> Option<Gpr> {
        if self.opcode.reads_rs() || self.opcode.jumps_to_register() {
            Some(Gpr::from_index(self.field_rs_raw()))
        } else {
            None
        }
    }

    #[must_use]
    pub fn field_rt(&self) -> Option<Gpr> {
        if self.opcode.reads_rt() || self.opcode.modifies_rt() {
            Some(Gpr::from_index(self.field_rt_raw()))
        } else {
            None
        }
    }

    #[must_use]
    pub fn field_rd(&self) -> Option<Gpr> {
        if self.opcode.modifies_rd() {
            Some(Gpr::from_index(self.field_rd_raw()))
        } else {
            None
        }
    }

    #[must_use]
    pub fn field_fs(&self) -> Option<Cop1> {
        match self.opcode.operand_format() {
            OperandFormat::FdFsFt | OperandFormat::FdFs | OperandFormat::FsFt => {
                Some(Cop1::from_index(self.field_rd_raw()))
            }
            OperandFormat::RtFs | OperandFormat::RtFsControl => {
                Some(Cop1::from_index(self.field_rd_raw()))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn field_ft(&self) -> Option<Cop1> {
        match self.opcode.operand_format() {
            OperandFormat::FdFsFt | OperandFormat::FsFt | OperandFormat::FtOffsetBase => {
                Some(Cop1::from_index(self.field_rt_raw()))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn field_fd(&self) -> Option<Cop1> {
        match self.opcode.operand_format() {
            OperandFormat::FdFsFt | OperandFormat::FdFs => {
                Some(Cop1::from_index(self.field_sa()))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn field_cop0(&self) -> Option<Cop0> {
        match self.opcode.operand_format() {
            OperandFormat::RtCop0 => Some(Cop0::from_index(self.field_rd_raw())),
            _ => None,
        }
    }

    #[must_use]
    pub fn field_rsp_cop0(&self) -> Option<RspCop0> {
        match self.opcode.operand_format() {
            OperandFormat::RtRspCop0 => Some(RspCop0::from_index(self.field_rd_raw())),
            _ => None,
        }
    }

    #[must_use]
    pub fn field_gte_data(&self) -> Option<GteData> {
        match self.opcode.operand_format() {
            OperandFormat::RtGteData => Some(GteData::from_index(self.field_rd_raw())),
            _ => None,
        }
    }

    #[must_use]
    pub fn field_gte_control(&self) -> Option<GteControl> {
        match self.opcode.operand_format() {
            OperandFormat::RtGteControl => Some(GteControl::from_index(self.field_rd_raw())),
            _ => None,
        }
    }

    #[must_use]
    pub fn field_rsp_vd(&self) -> Option<RspVector> {
        match self.opcode.operand_format() {
            OperandFormat::RspVdVsVt => Some(RspVector::from_index(self.field_sa())),
            OperandFormat::RspVdVs => Some(RspVector::from_index(self.field_sa())),
            _ => None,
        }
    }

    #[must_use]
    pub fn field_rsp_vs(&self) -> Option<RspVector> {
        match self.opcode.operand_format() {
            OperandFormat::RspVdVsVt => Some(RspVector::from_index(self.field_rd_raw())),
            OperandFormat::RspVdVs => Some(RspVector::from_index(self.field_rt_raw())),
            OperandFormat::RtRspVs => Some(RspVector::from_index(self.field_rd_raw())),
            _ => None,
        }
    }

    #[must_use]
    pub fn field_rsp_vt(&self) -> Option<RspVector> {
        match self.opcode.operand_format() {
            OperandFormat::RspVdVsVt | OperandFormat::RspVtOffsetBase => {
                Some(RspVector::from_index(self.field_rt_raw()))
            }
            _ => None,
        }
    }

    /// Element field of RSP vector computational instructions.
    #[must_use]
    pub const fn field_rsp_element(&self) -> u32 {
        (self.word >> 21) & 0xF
    }

    /// Element field of RSP vector loads/stores.
    #[must_use]
    pub const fn field_rsp_ls_element(&self) -> u32 {
        (self.word >> 7) & 0xF
    }

    /// 7-bit signed offset of RSP vector loads/stores, in access-size units.
    #[must_use]
    pub const fn field_rsp_ls_offset(&self) -> i32 {
        let raw = (self.word & 0x7F) as i32;
        if raw >= 0x40 {
            raw - 0x80
        } else {
            raw
        }
    }
}

// Processed views.
impl Instruction {
    /// The immediate operand, sign- or zero-extended according to the opcode.
    #[must_use]
    pub fn get_processed_immediate(&self) -> Option<i32> {
        match self.opcode.operand_format() {
            OperandFormat::RtRsImm | OperandFormat::RsImm | OperandFormat::RtImm => {
                match self.opcode {
                    Opcode::core_andi | Opcode::core_ori | Opcode::core_xori | Opcode::core_lui => {
                        Some(self.field_immediate() as i32)
                    }
                    _ => Some(self.field_immediate() as i16 as i32),
                }
            }
            OperandFormat::RtOffsetBase | OperandFormat::FtOffsetBase => {
                Some(self.field_immediate() as i16 as i32)
            }
            _ => None,
        }
    }

    /// Branch offset relative to this instruction, delay-slot adjusted.
    #[must_use]
    pub fn get_branch_offset_generic(&self) -> Option<VramOffset> {
        if self.opcode.is_branch() {
            let imm = self.field_immediate() as i16 as i32;
            Some(VramOffset::new((imm << 2) + 4))
        } else if self.opcode == Opcode::core_j && self.flags.j_as_branch() {
            let target = self.instr_index_target();
            Some(target - self.vram)
        } else {
            None
        }
    }

    #[must_use]
    pub fn get_branch_vram_generic(&self) -> Option<Vram> {
        self.get_branch_offset_generic()
            .map(|offset| self.vram + offset)
    }

    /// Jump target of `j`/`jal` as a vram address.
    #[must_use]
    pub fn get_instr_index_as_vram(&self) -> Option<Vram> {
        if self.opcode.is_jump_with_address() {
            if self.opcode == Opcode::core_j && self.flags.j_as_branch() {
                None
            } else {
                Some(self.instr_index_target())
            }
        } else {
            None
        }
    }

    const fn instr_index_target(&self) -> Vram {
        Vram::new((self.vram.inner() & 0xF000_0000) | (self.field_instr_index() << 2))
    }

    /// The gpr this instruction writes, if any.
    #[must_use]
    pub fn get_destination_gpr(&self) -> Option<Gpr> {
        if self.opcode.modifies_rd() {
            Some(Gpr::from_index(self.field_rd_raw()))
        } else if self.opcode.modifies_rt() {
            Some(Gpr::from_index(self.field_rt_raw()))
        } else {
            None
        }
    }
}

// Classification helpers.
impl Instruction {
    #[must_use]
    pub fn is_nop(&self) -> bool {
        self.word == 0
    }

    /// `jr $ra`
    #[must_use]
    pub fn is_return(&self) -> bool {
        self.opcode == Opcode::core_jr
            && Gpr::from_index(self.field_rs_raw()).holds_return_address(self.abi())
    }

    /// A `jr` to anything that is not `$ra`.
    #[must_use]
    pub fn is_jumptable_jump(&self) -> bool {
        self.opcode == Opcode::core_jr
            && !Gpr::from_index(self.field_rs_raw()).holds_return_address(self.abi())
    }

    #[must_use]
    pub fn is_function_call(&self) -> bool {
        self.opcode.does_link()
    }

    #[must_use]
    pub fn is_unconditional_branch(&self) -> bool {
        match self.opcode {
            Opcode::core_beq => self.field_rs_raw() == 0 && self.field_rt_raw() == 0,
            Opcode::core_bgez => self.field_rs_raw() == 0,
            Opcode::core_j => self.flags.j_as_branch(),
            _ => false,
        }
    }

    #[must_use]
    pub fn is_likely_handwritten(&self) -> bool {
        self.opcode.is_likely_handwritten()
    }

    /// Does this word look like the first instruction of an o32 prologue
    /// (`addiu $sp, $sp, -N`)?
    #[must_use]
    pub fn is_stack_allocation(&self) -> bool {
        self.opcode == Opcode::core_addiu
            && Gpr::from_index(self.field_rt_raw()).is_stack_pointer(self.abi())
            && Gpr::from_index(self.field_rs_raw()).is_stack_pointer(self.abi())
            && (self.field_immediate() as i16) < 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_basic_words() {
        let flags = InstructionFlags::new(IsaVersion::MIPS_III);
        let vram = Vram::new(0x80000000);

        for (word, opcode) in [
            (0x00000000, Opcode::core_sll),
            (0x03E00008, Opcode::core_jr),
            (0x24020001, Opcode::core_addiu),
            (0x3C1C8000, Opcode::core_lui),
            (0x8C430000, Opcode::core_lw),
            (0xAFB00010, Opcode::core_sw),
            (0x0C000123, Opcode::core_jal),
            (0x1462FFFF, Opcode::core_bne),
            (0x0411FFFF, Opcode::core_bgezal),
            (0x46001032, Opcode::core_c_eq_s),
            (0x46200000, Opcode::core_add_d),
        ] {
            let instr = Instruction::new(word, vram, flags);
            assert_eq!(instr.opcode(), opcode, "word 0x{:08X}", word);
        }
    }

    #[test]
    fn decode_invalid_word() {
        let flags = InstructionFlags::new(IsaVersion::MIPS_III);
        let instr = Instruction::new(0xFC000000, Vram::new(0x80000000), flags);

        assert!(!instr.is_valid());
        assert_eq!(instr.opcode(), Opcode::INVALID);
    }

    #[test]
    fn mips1_rejects_64bit_opcodes() {
        let vram = Vram::new(0x80000000);
        // daddiu $v0, $v0, 0x1
        let word = 0x64420001;

        let mips3 = Instruction::new(word, vram, InstructionFlags::new(IsaVersion::MIPS_III));
        assert_eq!(mips3.opcode(), Opcode::core_daddiu);

        let mips1 = Instruction::new(word, vram, InstructionFlags::new(IsaVersion::MIPS_I));
        assert!(!mips1.is_valid());
    }

    #[test]
    fn branch_targets() {
        let flags = InstructionFlags::new(IsaVersion::MIPS_III);
        // beq $zero, $zero, . + 0x20
        let instr = Instruction::new(0x10000007, Vram::new(0x80000100), flags);

        assert!(instr.is_unconditional_branch());
        assert_eq!(
            instr.get_branch_vram_generic(),
            Some(Vram::new(0x80000120))
        );
    }

    #[test]
    fn jal_target() {
        let flags = InstructionFlags::new(IsaVersion::MIPS_III);
        // jal 0x8000013F*4
        let instr = Instruction::new(0x0C00013F, Vram::new(0x80000400), flags);

        assert_eq!(
            instr.get_instr_index_as_vram(),
            Some(Vram::new(0x800004FC))
        );
    }

    #[test]
    fn rsp_cop2_is_vector_unit() {
        let flags = InstructionFlags::new_extension(IsaExtension::Rsp);
        // vmudn $v29, $v29, $v31
        let instr = Instruction::new(0x4A1FEF46, Vram::new(0x04001000), flags);
        assert_eq!(instr.opcode(), Opcode::rsp_vmudn);

        // lqv $v7[0], 0x10($s1)
        let instr = Instruction::new(0xCA272001, Vram::new(0x04001004), flags);
        assert_eq!(instr.opcode(), Opcode::rsp_lqv);
    }

    #[test]
    fn gte_cop2_is_geometry_unit() {
        let flags = InstructionFlags::new_extension(IsaExtension::R3000Gte);
        // RTPS
        let instr = Instruction::new(0x4A180001, Vram::new(0x80010000), flags);
        assert_eq!(instr.opcode(), Opcode::gte_rtps);

        // mtc2 $v0, $vxy0
        let instr = Instruction::new(0x48820000, Vram::new(0x80010004), flags);
        assert_eq!(instr.opcode(), Opcode::gte_mtc2);
    }
}
