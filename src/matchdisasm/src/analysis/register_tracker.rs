/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use crate::addresses::{Rom, Vram};
use crate::config::GpConfig;
use crate::isa::{opcodes::Opcode, registers::Gpr, AccessType, Instruction};

use super::gpr_register_value::{GprRegDereferencedAddress, GprRegisterValue};

/// Forward-walking state machine over a function's instructions.
///
/// Keeps one [`GprRegisterValue`] per register and reports what each
/// instruction did as an [`InstructionOperation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub(crate) struct RegisterTracker {
    registers: [GprRegisterValue; Gpr::count()],
    gp_config: Option<GpConfig>,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[must_use]
pub(crate) enum InstructionOperation {
    Link {
        info: InstrOpLink,
    },

    /// A `j` outside of the function, or a `jr` to a raw address.
    TailCall {
        target_vram: Vram,
    },

    /// Jump into a `case` of a `switch`: a `jr` on a register loaded from a
    /// table.
    JumptableJump {
        jumptable_vram: Vram,
        load_rom: Rom,
    },

    /// `jr $ra`
    ReturnJump,

    /// A `jr` on a register we know nothing about.
    UnknownRegisterJump {
        reg: Gpr,
    },

    /// A non-linking branch.
    Branch {
        target_vram: Vram,
    },

    /// A `lui`: candidate `%hi` half.
    Hi {
        value: u32,
        dst_reg: Gpr,
    },

    /// A `%lo`-capable instruction that completed an address.
    PairedAddress {
        vram: Vram,
        info: InstrOpPairedAddress,
    },

    /// A `%lo`-capable instruction with no `%hi` to pair against.
    DanglingLo {
        imm: i16,
    },

    /// An `ori` paired with a `lui`: a 32-bit constant, not an address.
    Constant {
        constant: u32,
        hi_rom: Rom,
    },
    /// An `ori` with no `lui` to pair against.
    UnpairedConstant {
        imm: u16,
    },

    UnhandledOpcode {
        opcode: Opcode,
    },
    /// Not applied to the tracker at all.
    InvalidInstr,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[must_use]
pub(crate) enum InstrOpLink {
    /// A `jal` to a hardcoded address.
    DirectCall { target_vram: Vram },
    /// A "branch and link", usually seen in handwritten assembly. The target
    /// may even be inside the current function.
    LinkingBranch { target_vram: Vram },
    /// A `jalr`.
    RegisterCall { reg: Gpr },
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[must_use]
pub(crate) enum InstrOpPairedAddress {
    /// Paired as the `%lo` of a preceding `lui`.
    PairedLo {
        hi_rom: Rom,
        access_info: Option<(AccessType, bool)>,
    },
    /// An address relative to the global pointer, no `lui` involved.
    GpRel {
        access_info: Option<(AccessType, bool)>,
    },
}

impl RegisterTracker {
    pub(crate) fn new(gp_config: Option<GpConfig>) -> Self {
        let mut slf = Self {
            registers: [GprRegisterValue::Garbage; Gpr::count()],
            gp_config,
        };
        slf.clear();
        slf
    }

    pub(crate) fn clear(&mut self) {
        for reg in Gpr::iter() {
            self.registers[reg.as_index()] = GprRegisterValue::new(reg, self.gp_config);
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, gpr: Gpr) -> &GprRegisterValue {
        &self.registers[gpr.as_index()]
    }

    fn set_gpr_value(&mut self, gpr: Gpr, value: GprRegisterValue) {
        let old_value = &mut self.registers[gpr.as_index()];

        match old_value {
            GprRegisterValue::HardwiredZero => {}
            _ => *old_value = value,
        }
    }
}

impl RegisterTracker {
    pub(crate) fn process_instruction(
        &mut self,
        instr: &Instruction,
        instr_rom: Rom,
    ) -> InstructionOperation {
        if !instr.is_valid() {
            return InstructionOperation::InvalidInstr;
        }

        let opcode = instr.opcode();
        if opcode.does_link() {
            if let Some(target_vram) = instr.get_instr_index_as_vram() {
                InstructionOperation::Link {
                    info: InstrOpLink::DirectCall { target_vram },
                }
            } else if let Some(target_vram) = instr.get_branch_vram_generic() {
                InstructionOperation::Link {
                    info: InstrOpLink::LinkingBranch { target_vram },
                }
            } else {
                let reg = Gpr::from_index(instr.field_rs_raw());
                InstructionOperation::Link {
                    info: InstrOpLink::RegisterCall { reg },
                }
            }
        } else if let Some(target_vram) = instr.get_branch_vram_generic() {
            InstructionOperation::Branch { target_vram }
        } else if opcode.jumps_to_register() {
            // Only `jr` should reach here, `jalr` is handled by the
            // "does_link" check.
            self.handle_jr(instr)
        } else if let Some(target_vram) = instr.get_instr_index_as_vram() {
            debug_assert!(opcode == Opcode::core_j);

            // Some compilers use `j` as an unconditional branch, as a tail
            // call or even as both, so this being an actual tail call is not
            // certain.
            InstructionOperation::TailCall { target_vram }
        } else if opcode.can_be_hi() {
            let (reg, reg_value, info) = self.handle_hi(instr, instr_rom);
            self.set_gpr_value(reg, reg_value);

            info
        } else if opcode.can_be_unsigned_lo() {
            let (reg, reg_value, info) = self.handle_unsigned_lo(instr, instr_rom);
            self.set_gpr_value(reg, reg_value);

            info
        } else if opcode.can_be_lo() {
            let (new_val, info) = self.handle_lo(instr, instr_rom);
            if let Some((reg, reg_value)) = new_val {
                self.set_gpr_value(reg, reg_value);
            }

            info
        } else if opcode.adds_registers() {
            let rd = Gpr::from_index(instr.field_rd_raw());
            let rs_value = self.registers[instr.field_rs_raw() as usize];
            let rt_value = self.registers[instr.field_rt_raw() as usize];

            self.set_gpr_value(rd, rs_value.add_register(&rt_value));
            InstructionOperation::UnhandledOpcode { opcode }
        } else if opcode.ors_registers() {
            let rd = Gpr::from_index(instr.field_rd_raw());
            let rs_value = self.registers[instr.field_rs_raw() as usize];
            let rt_value = self.registers[instr.field_rt_raw() as usize];

            self.set_gpr_value(rd, rs_value.or_register(&rt_value));
            InstructionOperation::UnhandledOpcode { opcode }
        } else {
            if let Some(reg) = instr.get_destination_gpr() {
                self.set_gpr_value(reg, GprRegisterValue::Garbage);
            }
            InstructionOperation::UnhandledOpcode { opcode }
        }
    }

    fn handle_jr(&self, instr: &Instruction) -> InstructionOperation {
        debug_assert!(instr.opcode() == Opcode::core_jr);

        let rs = Gpr::from_index(instr.field_rs_raw());

        if rs.holds_return_address(instr.abi()) {
            return InstructionOperation::ReturnJump;
        }

        match &self.registers[rs.as_index()] {
            GprRegisterValue::DereferencedAddress {
                original_address,
                deref_rom,
                info,
                ..
            } => match info {
                GprRegDereferencedAddress::Hi { .. } | GprRegDereferencedAddress::GpRel => {
                    InstructionOperation::JumptableJump {
                        jumptable_vram: *original_address,
                        load_rom: *deref_rom,
                    }
                }
                GprRegDereferencedAddress::HiLo { .. } => InstructionOperation::TailCall {
                    target_vram: *original_address,
                },
            },
            GprRegisterValue::RawAddress { vram, .. } => InstructionOperation::TailCall {
                target_vram: *vram,
            },
            _ => InstructionOperation::UnknownRegisterJump { reg: rs },
        }
    }

    fn handle_hi(
        &self,
        instr: &Instruction,
        instr_rom: Rom,
    ) -> (Gpr, GprRegisterValue, InstructionOperation) {
        debug_assert!(instr.opcode().can_be_hi());

        let reg = Gpr::from_index(instr.field_rt_raw());
        let imm = instr
            .get_processed_immediate()
            .expect("lui should have an immediate field") as u32;
        let value = imm << 16;

        let reg_value = GprRegisterValue::Hi {
            value,
            rom: instr_rom,
        };
        let info = InstructionOperation::Hi {
            value,
            dst_reg: reg,
        };
        (reg, reg_value, info)
    }

    fn handle_unsigned_lo(
        &self,
        instr: &Instruction,
        instr_rom: Rom,
    ) -> (Gpr, GprRegisterValue, InstructionOperation) {
        let rt = Gpr::from_index(instr.field_rt_raw());
        let rs = Gpr::from_index(instr.field_rs_raw());
        let imm = instr
            .get_processed_immediate()
            .expect("ori should have an immediate field") as u16;

        let reg_value = self.registers[rs.as_index()].or_imm16(imm, instr_rom);

        let info = if let GprRegisterValue::Constant { value, hi_rom } = &reg_value {
            InstructionOperation::Constant {
                constant: *value,
                hi_rom: *hi_rom,
            }
        } else {
            InstructionOperation::UnpairedConstant { imm }
        };

        (rt, reg_value, info)
    }

    fn handle_lo(
        &self,
        instr: &Instruction,
        instr_rom: Rom,
    ) -> (Option<(Gpr, GprRegisterValue)>, InstructionOperation) {
        let opcode = instr.opcode();
        let imm = instr
            .get_processed_immediate()
            .expect("lo instructions should have an immediate field") as i16;
        let rs = Gpr::from_index(instr.field_rs_raw());
        let src_reg_value = &self.registers[rs.as_index()];

        if opcode.does_dereference() {
            let access_type = opcode
                .access_type()
                .expect("dereferencing instructions must have an access type");
            let access_info = (access_type, opcode.does_unsigned_memory_access());
            let reg_value = src_reg_value.dereference(imm, instr_rom, access_info);

            let info = match &reg_value {
                GprRegisterValue::DereferencedAddress {
                    original_address,
                    info,
                    access_info,
                    ..
                } => match info {
                    GprRegDereferencedAddress::Hi { hi_rom } => {
                        InstructionOperation::PairedAddress {
                            vram: *original_address,
                            info: InstrOpPairedAddress::PairedLo {
                                hi_rom: *hi_rom,
                                access_info: Some(*access_info),
                            },
                        }
                    }
                    GprRegDereferencedAddress::GpRel => InstructionOperation::PairedAddress {
                        vram: *original_address,
                        info: InstrOpPairedAddress::GpRel {
                            access_info: Some(*access_info),
                        },
                    },
                    GprRegDereferencedAddress::HiLo { .. } => {
                        InstructionOperation::DanglingLo { imm }
                    }
                },
                _ => InstructionOperation::DanglingLo { imm },
            };

            let new_val = if opcode.modifies_rt() {
                let rt = Gpr::from_index(instr.field_rt_raw());

                // Avoid overwriting the tracked $gp when the asm is restoring
                // it from the stack.
                if matches!(
                    self.registers[rt.as_index()],
                    GprRegisterValue::GlobalPointer { .. }
                ) && matches!(src_reg_value, GprRegisterValue::StackPointer)
                {
                    None
                } else {
                    Some((rt, reg_value))
                }
            } else {
                None
            };
            (new_val, info)
        } else {
            let rt = Gpr::from_index(instr.field_rt_raw());
            let reg_value = src_reg_value.add_imm16(imm, instr_rom);

            let info = match &reg_value {
                GprRegisterValue::RawAddress { vram, info, .. } => match info {
                    super::GprRegRawAddress::HiLo { hi_rom } => {
                        InstructionOperation::PairedAddress {
                            vram: *vram,
                            info: InstrOpPairedAddress::PairedLo {
                                hi_rom: *hi_rom,
                                access_info: None,
                            },
                        }
                    }
                    super::GprRegRawAddress::GpRel => InstructionOperation::PairedAddress {
                        vram: *vram,
                        info: InstrOpPairedAddress::GpRel { access_info: None },
                    },
                },
                _ => InstructionOperation::DanglingLo { imm },
            };

            (Some((rt, reg_value)), info)
        }
    }
}

impl RegisterTracker {
    /// Apply the side effects of the previous instruction once its delay slot
    /// has been processed.
    ///
    /// Returns `true` when the tracker got fully reset.
    pub(crate) fn clear_afterwards(&mut self, prev_instr: Option<&Instruction>) -> bool {
        if let Some(prev) = prev_instr {
            if prev.is_function_call() {
                self.unset_registers_after_func_call(prev);
            } else if (prev.opcode().is_jump() && !prev.opcode().does_link())
                || prev.is_unconditional_branch()
            {
                self.clear();
                return true;
            }
        }
        false
    }

    fn unset_registers_after_func_call(&mut self, prev_instr: &Instruction) {
        for reg in Gpr::iter() {
            if reg.is_clobbered_by_func_call(prev_instr.abi()) {
                self.set_gpr_value(reg, GprRegisterValue::Garbage);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec::Vec;

    use crate::addresses::{GpValue, Size};
    use crate::config::Endian;
    use crate::isa::{InstructionFlags, IsaVersion};

    fn register_tracking_general_test(
        bytes: &[u8],
        expected_gpr_values: &[Option<GprRegisterValue>],
        expected_operations: &[InstructionOperation],
        gp_config: Option<GpConfig>,
    ) {
        assert_eq!(bytes.len(), expected_gpr_values.len() * 4);
        assert_eq!(bytes.len(), expected_operations.len() * 4);

        let rom = Rom::new(0x00010000);
        let vram = Vram::new(0x80000000);
        let endian = Endian::Big;
        let flags = InstructionFlags::new(IsaVersion::MIPS_III);

        let instructions: Vec<Instruction> = bytes
            .chunks_exact(4)
            .enumerate()
            .map(|(instr_index, w)| {
                let word = endian.word_from_bytes(w);
                let current_vram = vram + Size::new(instr_index as u32 * 4);

                Instruction::new(word, current_vram, flags)
            })
            .collect();

        let mut expected_gpr_values_iter = expected_gpr_values.iter();
        let mut expected_operations_iter = expected_operations.iter();

        let mut regs_tracker = RegisterTracker::new(gp_config);
        let mut prev_instr: Option<Instruction> = None;
        for (instr_index, instr) in instructions.into_iter().enumerate() {
            let current_rom = rom + Size::new(instr_index as u32 * 4);

            let instr_processed_result = regs_tracker.process_instruction(&instr, current_rom);

            let gpr_value = if let (false, Some(reg)) = (
                instr.opcode().does_link(),
                instr.get_destination_gpr(),
            ) {
                Some(*regs_tracker.get(reg))
            } else {
                None
            };

            assert_eq!(expected_gpr_values_iter.next(), Some(&gpr_value));
            assert_eq!(
                expected_operations_iter.next(),
                Some(&instr_processed_result)
            );

            regs_tracker.clear_afterwards(prev_instr.as_ref());
            prev_instr = Some(instr);
        }
    }

    #[test]
    fn hi_survives_an_indexed_addition() {
        static BYTES: [u8; 5 * 4] = [
            0x00, 0x04, 0x70, 0x80, // sll
            0x3C, 0x02, 0x80, 0x00, // lui
            0x00, 0x4E, 0x10, 0x21, // addu
            0x03, 0xE0, 0x00, 0x08, // jr
            0x8C, 0x42, 0x00, 0x90, // lw
        ];
        static EXPECTED_GPR_VALUES: [Option<GprRegisterValue>; 5] = [
            Some(GprRegisterValue::Garbage),
            Some(GprRegisterValue::Hi {
                value: 0x80000000,
                rom: Rom::new(0x00010004),
            }),
            Some(GprRegisterValue::Hi {
                value: 0x80000000,
                rom: Rom::new(0x00010004),
            }),
            None,
            Some(GprRegisterValue::DereferencedAddress {
                original_address: Vram::new(0x80000090),
                deref_rom: Rom::new(0x00010010),
                access_info: (AccessType::WORD, false),
                info: GprRegDereferencedAddress::Hi {
                    hi_rom: Rom::new(0x00010004),
                },
            }),
        ];
        static EXPECTED_OPERATIONS: [InstructionOperation; 5] = [
            InstructionOperation::UnhandledOpcode {
                opcode: Opcode::core_sll,
            },
            InstructionOperation::Hi {
                value: 0x80000000,
                dst_reg: Gpr::v0,
            },
            InstructionOperation::UnhandledOpcode {
                opcode: Opcode::core_addu,
            },
            InstructionOperation::ReturnJump,
            InstructionOperation::PairedAddress {
                vram: Vram::new(0x80000090),
                info: InstrOpPairedAddress::PairedLo {
                    hi_rom: Rom::new(0x00010004),
                    access_info: Some((AccessType::WORD, false)),
                },
            },
        ];

        register_tracking_general_test(&BYTES, &EXPECTED_GPR_VALUES, &EXPECTED_OPERATIONS, None);
    }

    #[test]
    fn gp_rel_access_pairs_without_lui() {
        static BYTES: [u8; 3 * 4] = [
            0x27, 0x8E, 0x80, 0x10, // addiu $t6, $gp, -0x7FF0
            0x03, 0xE0, 0x00, 0x08, // jr
            0x00, 0x8E, 0x10, 0x21, // addu
        ];
        static EXPECTED_GPR_VALUES: [Option<GprRegisterValue>; 3] = [
            Some(GprRegisterValue::RawAddress {
                vram: Vram::new(0x800000B0),
                setter_rom: Rom::new(0x00010000),
                info: crate::analysis::GprRegRawAddress::GpRel,
            }),
            None,
            Some(GprRegisterValue::RawAddress {
                vram: Vram::new(0x800000B0),
                setter_rom: Rom::new(0x00010000),
                info: crate::analysis::GprRegRawAddress::GpRel,
            }),
        ];
        static EXPECTED_OPERATIONS: [InstructionOperation; 3] = [
            InstructionOperation::PairedAddress {
                vram: Vram::new(0x800000B0),
                info: InstrOpPairedAddress::GpRel { access_info: None },
            },
            InstructionOperation::ReturnJump,
            InstructionOperation::UnhandledOpcode {
                opcode: Opcode::core_addu,
            },
        ];
        let gp_config = Some(GpConfig::new(GpValue::new(0x800080A0)));

        register_tracking_general_test(
            &BYTES,
            &EXPECTED_GPR_VALUES,
            &EXPECTED_OPERATIONS,
            gp_config,
        );
    }

    #[test]
    fn call_clobbers_temporaries() {
        static BYTES: [u8; 4 * 4] = [
            0x3C, 0x08, 0x80, 0x10, // lui $t0, 0x8010
            0x0C, 0x00, 0x01, 0x00, // jal
            0x00, 0x00, 0x00, 0x00, //  nop
            0x25, 0x08, 0x00, 0x20, // addiu $t0, $t0, 0x20
        ];
        static EXPECTED_GPR_VALUES: [Option<GprRegisterValue>; 4] = [
            Some(GprRegisterValue::Hi {
                value: 0x80100000,
                rom: Rom::new(0x00010000),
            }),
            None,
            Some(GprRegisterValue::HardwiredZero),
            // The call discarded the tracked `lui`.
            Some(GprRegisterValue::Garbage),
        ];
        static EXPECTED_OPERATIONS: [InstructionOperation; 4] = [
            InstructionOperation::Hi {
                value: 0x80100000,
                dst_reg: Gpr::t0,
            },
            InstructionOperation::Link {
                info: InstrOpLink::DirectCall {
                    target_vram: Vram::new(0x80000400),
                },
            },
            InstructionOperation::UnhandledOpcode {
                opcode: Opcode::core_sll,
            },
            InstructionOperation::DanglingLo { imm: 0x20 },
        ];

        register_tracking_general_test(&BYTES, &EXPECTED_GPR_VALUES, &EXPECTED_OPERATIONS, None);
    }
}
