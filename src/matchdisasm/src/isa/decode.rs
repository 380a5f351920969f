/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use super::{instr::InstructionFlags, IsaExtension, IsaVersion, Opcode};

const fn rs(word: u32) -> u32 {
    (word >> 21) & 0x1F
}
const fn rt(word: u32) -> u32 {
    (word >> 16) & 0x1F
}
const fn rd(word: u32) -> u32 {
    (word >> 11) & 0x1F
}
const fn sa(word: u32) -> u32 {
    (word >> 6) & 0x1F
}
const fn function(word: u32) -> u32 {
    word & 0x3F
}

/// Decode one word into an opcode for the dialect selected by `flags`.
///
/// Never fails: any bit pattern that does not match the dialect's tables
/// yields [`Opcode::INVALID`].
pub(crate) const fn decode(word: u32, flags: InstructionFlags) -> Opcode {
    let version = flags.isa_version();
    let extension = flags.isa_extension();

    match word >> 26 {
        0x00 => decode_special(word, version, extension),
        0x01 => decode_regimm(word, version),
        0x02 => Opcode::core_j,
        0x03 => Opcode::core_jal,
        0x04 => Opcode::core_beq,
        0x05 => Opcode::core_bne,
        0x06 => {
            if rt(word) == 0 {
                Opcode::core_blez
            } else {
                Opcode::INVALID
            }
        }
        0x07 => {
            if rt(word) == 0 {
                Opcode::core_bgtz
            } else {
                Opcode::INVALID
            }
        }
        0x08 => Opcode::core_addi,
        0x09 => Opcode::core_addiu,
        0x0A => Opcode::core_slti,
        0x0B => Opcode::core_sltiu,
        0x0C => Opcode::core_andi,
        0x0D => Opcode::core_ori,
        0x0E => Opcode::core_xori,
        0x0F => {
            if rs(word) == 0 {
                Opcode::core_lui
            } else {
                Opcode::INVALID
            }
        }
        0x10 => decode_cop0(word, extension),
        0x11 => decode_cop1(word, version, extension),
        0x12 => decode_cop2(word, extension),
        0x14 => likely(Opcode::core_beql, version),
        0x15 => likely(Opcode::core_bnel, version),
        0x16 => {
            if rt(word) == 0 {
                likely(Opcode::core_blezl, version)
            } else {
                Opcode::INVALID
            }
        }
        0x17 => {
            if rt(word) == 0 {
                likely(Opcode::core_bgtzl, version)
            } else {
                Opcode::INVALID
            }
        }
        0x18 => mips3(Opcode::core_daddi, version, extension),
        0x19 => mips3(Opcode::core_daddiu, version, extension),
        0x1A => mips3(Opcode::core_ldl, version, extension),
        0x1B => mips3(Opcode::core_ldr, version, extension),
        0x1C => match extension {
            Some(IsaExtension::R5900Ee) => decode_mmi(word),
            Some(IsaExtension::R4000Allegrex) => decode_allegrex_special2(word),
            _ => Opcode::INVALID,
        },
        0x1E => match extension {
            Some(IsaExtension::R5900Ee) => Opcode::ee_lq,
            _ => Opcode::INVALID,
        },
        0x1F => match extension {
            Some(IsaExtension::R5900Ee) => Opcode::ee_sq,
            Some(IsaExtension::R4000Allegrex) => decode_allegrex_special3(word),
            _ => Opcode::INVALID,
        },
        0x20 => Opcode::core_lb,
        0x21 => Opcode::core_lh,
        0x22 => Opcode::core_lwl,
        0x23 => Opcode::core_lw,
        0x24 => Opcode::core_lbu,
        0x25 => Opcode::core_lhu,
        0x26 => Opcode::core_lwr,
        0x27 => mips3(Opcode::core_lwu, version, extension),
        0x28 => Opcode::core_sb,
        0x29 => Opcode::core_sh,
        0x2A => Opcode::core_swl,
        0x2B => Opcode::core_sw,
        0x2C => mips3(Opcode::core_sdl, version, extension),
        0x2D => mips3(Opcode::core_sdr, version, extension),
        0x2E => Opcode::core_swr,
        0x2F => Opcode::core_cache,
        0x30 => Opcode::core_ll,
        0x31 => Opcode::core_lwc1,
        0x32 => match extension {
            Some(IsaExtension::Rsp) => decode_rsp_vector_load(word),
            _ => Opcode::core_lwc2,
        },
        0x33 => Opcode::core_pref,
        0x34 => mips3(Opcode::core_lld, version, extension),
        0x35 => Opcode::core_ldc1,
        0x36 => Opcode::core_ldc2,
        0x37 => mips3(Opcode::core_ld, version, extension),
        0x38 => Opcode::core_sc,
        0x39 => Opcode::core_swc1,
        0x3A => match extension {
            Some(IsaExtension::Rsp) => decode_rsp_vector_store(word),
            _ => Opcode::core_swc2,
        },
        0x3C => mips3(Opcode::core_scd, version, extension),
        0x3D => Opcode::core_sdc1,
        0x3E => Opcode::core_sdc2,
        0x3F => mips3(Opcode::core_sd, version, extension),
        _ => Opcode::INVALID,
    }
}

const fn likely(opcode: Opcode, version: IsaVersion) -> Opcode {
    if version.has_branch_likely() {
        opcode
    } else {
        Opcode::INVALID
    }
}

const fn mips3(
    opcode: Opcode,
    version: IsaVersion,
    extension: Option<IsaExtension>,
) -> Opcode {
    // The RSP and the ALLEGREX are 32-bit cores even though their base isa
    // would allow the 64-bit opcodes.
    match extension {
        Some(IsaExtension::Rsp) | Some(IsaExtension::R4000Allegrex) => Opcode::INVALID,
        _ => {
            if version.has_64bit_gprs() {
                opcode
            } else {
                Opcode::INVALID
            }
        }
    }
}

const fn decode_special(
    word: u32,
    version: IsaVersion,
    extension: Option<IsaExtension>,
) -> Opcode {
    if let Some(IsaExtension::R4000Allegrex) = extension {
        if let Some(opcode) = decode_special_allegrex(word) {
            return opcode;
        }
    }

    match function(word) {
        0x00 => {
            if rs(word) == 0 {
                Opcode::core_sll
            } else {
                Opcode::INVALID
            }
        }
        0x02 => {
            if rs(word) == 0 {
                Opcode::core_srl
            } else {
                Opcode::INVALID
            }
        }
        0x03 => {
            if rs(word) == 0 {
                Opcode::core_sra
            } else {
                Opcode::INVALID
            }
        }
        0x04 => Opcode::core_sllv,
        0x06 => Opcode::core_srlv,
        0x07 => Opcode::core_srav,
        0x08 => Opcode::core_jr,
        0x09 => {
            if rt(word) == 0 {
                Opcode::core_jalr
            } else {
                Opcode::INVALID
            }
        }
        0x0A => match version {
            IsaVersion::MIPS_IV => Opcode::core_movz,
            _ => Opcode::INVALID,
        },
        0x0B => match version {
            IsaVersion::MIPS_IV => Opcode::core_movn,
            _ => Opcode::INVALID,
        },
        0x0C => Opcode::core_syscall,
        0x0D => Opcode::core_break,
        0x0F => Opcode::core_sync,
        0x10 => Opcode::core_mfhi,
        0x11 => Opcode::core_mthi,
        0x12 => Opcode::core_mflo,
        0x13 => Opcode::core_mtlo,
        0x14 => mips3(Opcode::core_dsllv, version, extension),
        0x16 => mips3(Opcode::core_dsrlv, version, extension),
        0x17 => mips3(Opcode::core_dsrav, version, extension),
        0x18 => Opcode::core_mult,
        0x19 => Opcode::core_multu,
        0x1A => Opcode::core_div,
        0x1B => Opcode::core_divu,
        0x1C => mips3(Opcode::core_dmult, version, extension),
        0x1D => mips3(Opcode::core_dmultu, version, extension),
        0x1E => mips3(Opcode::core_ddiv, version, extension),
        0x1F => mips3(Opcode::core_ddivu, version, extension),
        0x20 => Opcode::core_add,
        0x21 => Opcode::core_addu,
        0x22 => Opcode::core_sub,
        0x23 => Opcode::core_subu,
        0x24 => Opcode::core_and,
        0x25 => Opcode::core_or,
        0x26 => Opcode::core_xor,
        0x27 => Opcode::core_nor,
        0x2A => Opcode::core_slt,
        0x2B => Opcode::core_sltu,
        0x2C => mips3(Opcode::core_dadd, version, extension),
        0x2D => mips3(Opcode::core_daddu, version, extension),
        0x2E => mips3(Opcode::core_dsub, version, extension),
        0x2F => mips3(Opcode::core_dsubu, version, extension),
        0x30 => Opcode::core_tge,
        0x31 => Opcode::core_tgeu,
        0x32 => Opcode::core_tlt,
        0x33 => Opcode::core_tltu,
        0x34 => Opcode::core_teq,
        0x36 => Opcode::core_tne,
        0x38 => mips3(Opcode::core_dsll, version, extension),
        0x3A => mips3(Opcode::core_dsrl, version, extension),
        0x3B => mips3(Opcode::core_dsra, version, extension),
        0x3C => mips3(Opcode::core_dsll32, version, extension),
        0x3E => mips3(Opcode::core_dsrl32, version, extension),
        0x3F => mips3(Opcode::core_dsra32, version, extension),
        _ => Opcode::INVALID,
    }
}

const fn decode_special_allegrex(word: u32) -> Option<Opcode> {
    match function(word) {
        0x02 => {
            if rs(word) == 1 {
                Some(Opcode::alx_rotr)
            } else {
                None
            }
        }
        0x06 => {
            if sa(word) == 1 {
                Some(Opcode::alx_rotrv)
            } else {
                None
            }
        }
        0x16 => Some(Opcode::alx_clz),
        0x17 => Some(Opcode::alx_clo),
        0x1C => Some(Opcode::alx_madd),
        0x1D => Some(Opcode::alx_maddu),
        0x2C => Some(Opcode::alx_max),
        0x2D => Some(Opcode::alx_min),
        0x2E => Some(Opcode::alx_msub),
        0x2F => Some(Opcode::alx_msubu),
        _ => None,
    }
}

const fn decode_regimm(word: u32, version: IsaVersion) -> Opcode {
    match rt(word) {
        0x00 => Opcode::core_bltz,
        0x01 => Opcode::core_bgez,
        0x02 => likely(Opcode::core_bltzl, version),
        0x03 => likely(Opcode::core_bgezl, version),
        0x08 => Opcode::core_tgei,
        0x09 => Opcode::core_tgeiu,
        0x0A => Opcode::core_tlti,
        0x0B => Opcode::core_tltiu,
        0x0C => Opcode::core_teqi,
        0x0E => Opcode::core_tnei,
        0x10 => Opcode::core_bltzal,
        0x11 => Opcode::core_bgezal,
        0x12 => likely(Opcode::core_bltzall, version),
        0x13 => likely(Opcode::core_bgezall, version),
        _ => Opcode::INVALID,
    }
}

const fn decode_cop0(word: u32, extension: Option<IsaExtension>) -> Opcode {
    if let Some(IsaExtension::Rsp) = extension {
        return match rs(word) {
            0x00 => Opcode::rsp_mfc0,
            0x04 => Opcode::rsp_mtc0,
            _ => Opcode::INVALID,
        };
    }

    match rs(word) {
        0x00 => Opcode::core_mfc0,
        0x01 => Opcode::core_dmfc0,
        0x02 => Opcode::core_cfc0,
        0x04 => Opcode::core_mtc0,
        0x05 => Opcode::core_dmtc0,
        0x06 => Opcode::core_ctc0,
        0x10..=0x1F => match function(word) {
            0x01 => Opcode::core_tlbr,
            0x02 => Opcode::core_tlbwi,
            0x06 => Opcode::core_tlbwr,
            0x08 => Opcode::core_tlbp,
            0x18 => Opcode::core_eret,
            _ => Opcode::INVALID,
        },
        _ => Opcode::INVALID,
    }
}

const fn decode_cop1(
    word: u32,
    _version: IsaVersion,
    extension: Option<IsaExtension>,
) -> Opcode {
    if let Some(IsaExtension::Rsp) = extension {
        // The RSP has no fpu.
        return Opcode::INVALID;
    }

    match rs(word) {
        0x00 => Opcode::core_mfc1,
        0x01 => Opcode::core_dmfc1,
        0x02 => Opcode::core_cfc1,
        0x04 => Opcode::core_mtc1,
        0x05 => Opcode::core_dmtc1,
        0x06 => Opcode::core_ctc1,
        0x08 => match rt(word) & 0x3 {
            0x00 => Opcode::core_bc1f,
            0x01 => Opcode::core_bc1t,
            0x02 => Opcode::core_bc1fl,
            0x03 => Opcode::core_bc1tl,
            _ => Opcode::INVALID,
        },
        0x10 => decode_cop1_fmt_s(word),
        0x11 => decode_cop1_fmt_d(word),
        0x14 => match function(word) {
            0x20 => Opcode::core_cvt_s_w,
            0x21 => Opcode::core_cvt_d_w,
            _ => Opcode::INVALID,
        },
        0x15 => match function(word) {
            0x20 => Opcode::core_cvt_s_l,
            0x21 => Opcode::core_cvt_d_l,
            _ => Opcode::INVALID,
        },
        _ => Opcode::INVALID,
    }
}

const fn decode_cop1_fmt_s(word: u32) -> Opcode {
    match function(word) {
        0x00 => Opcode::core_add_s,
        0x01 => Opcode::core_sub_s,
        0x02 => Opcode::core_mul_s,
        0x03 => Opcode::core_div_s,
        0x04 => Opcode::core_sqrt_s,
        0x05 => Opcode::core_abs_s,
        0x06 => Opcode::core_mov_s,
        0x07 => Opcode::core_neg_s,
        0x08 => Opcode::core_round_l_s,
        0x09 => Opcode::core_trunc_l_s,
        0x0A => Opcode::core_ceil_l_s,
        0x0B => Opcode::core_floor_l_s,
        0x0C => Opcode::core_round_w_s,
        0x0D => Opcode::core_trunc_w_s,
        0x0E => Opcode::core_ceil_w_s,
        0x0F => Opcode::core_floor_w_s,
        0x21 => Opcode::core_cvt_d_s,
        0x24 => Opcode::core_cvt_w_s,
        0x25 => Opcode::core_cvt_l_s,
        0x30 => Opcode::core_c_f_s,
        0x31 => Opcode::core_c_un_s,
        0x32 => Opcode::core_c_eq_s,
        0x33 => Opcode::core_c_ueq_s,
        0x34 => Opcode::core_c_olt_s,
        0x35 => Opcode::core_c_ult_s,
        0x36 => Opcode::core_c_ole_s,
        0x37 => Opcode::core_c_ule_s,
        0x38 => Opcode::core_c_sf_s,
        0x39 => Opcode::core_c_ngle_s,
        0x3A => Opcode::core_c_seq_s,
        0x3B => Opcode::core_c_ngl_s,
        0x3C => Opcode::core_c_lt_s,
        0x3D => Opcode::core_c_nge_s,
        0x3E => Opcode::core_c_le_s,
        0x3F => Opcode::core_c_ngt_s,
        _ => Opcode::INVALID,
    }
}

const fn decode_cop1_fmt_d(word: u32) -> Opcode {
    match function(word) {
        0x00 => Opcode::core_add_d,
        0x01 => Opcode::core_sub_d,
        0x02 => Opcode::core_mul_d,
        0x03 => Opcode::core_div_d,
        0x04 => Opcode::core_sqrt_d,
        0x05 => Opcode::core_abs_d,
        0x06 => Opcode::core_mov_d,
        0x07 => Opcode::core_neg_d,
        0x08 => Opcode::core_round_l_d,
        0x09 => Opcode::core_trunc_l_d,
        0x0A => Opcode::core_ceil_l_d,
        0x0B => Opcode::core_floor_l_d,
        0x0C => Opcode::core_round_w_d,
        0x0D => Opcode::core_trunc_w_d,
        0x0E => Opcode::core_ceil_w_d,
        0x0F => Opcode::core_floor_w_d,
        0x20 => Opcode::core_cvt_s_d,
        0x24 => Opcode::core_cvt_w_d,
        0x25 => Opcode::core_cvt_l_d,
        0x30 => Opcode::core_c_f_d,
        0x31 => Opcode::core_c_un_d,
        0x32 => Opcode::core_c_eq_d,
        0x33 => Opcode::core_c_ueq_d,
        0x34 => Opcode::core_c_olt_d,
        0x35 => Opcode::core_c_ult_d,
        0x36 => Opcode::core_c_ole_d,
        0x37 => Opcode::core_c_ule_d,
        0x38 => Opcode::core_c_sf_d,
        0x39 => Opcode::core_c_ngle_d,
        0x3A => Opcode::core_c_seq_d,
        0x3B => Opcode::core_c_ngl_d,
        0x3C => Opcode::core_c_lt_d,
        0x3D => Opcode::core_c_nge_d,
        0x3E => Opcode::core_c_le_d,
        0x3F => Opcode::core_c_ngt_d,
        _ => Opcode::INVALID,
    }
}

const fn decode_cop2(word: u32, extension: Option<IsaExtension>) -> Opcode {
    match extension {
        Some(IsaExtension::Rsp) => decode_cop2_rsp(word),
        Some(IsaExtension::R3000Gte) => decode_cop2_gte(word),
        _ => Opcode::INVALID,
    }
}

const fn decode_cop2_rsp(word: u32) -> Opcode {
    if (word >> 25) & 1 == 0 {
        return match rs(word) {
            0x00 => Opcode::rsp_mfc2,
            0x02 => Opcode::rsp_cfc2,
            0x04 => Opcode::rsp_mtc2,
            0x06 => Opcode::rsp_ctc2,
            _ => Opcode::INVALID,
        };
    }

    match function(word) {
        0x00 => Opcode::rsp_vmulf,
        0x01 => Opcode::rsp_vmulu,
        0x02 => Opcode::rsp_vrndp,
        0x03 => Opcode::rsp_vmulq,
        0x04 => Opcode::rsp_vmudl,
        0x05 => Opcode::rsp_vmudm,
        0x06 => Opcode::rsp_vmudn,
        0x07 => Opcode::rsp_vmudh,
        0x08 => Opcode::rsp_vmacf,
        0x09 => Opcode::rsp_vmacu,
        0x0A => Opcode::rsp_vrndn,
        0x0B => Opcode::rsp_vmacq,
        0x0C => Opcode::rsp_vmadl,
        0x0D => Opcode::rsp_vmadm,
        0x0E => Opcode::rsp_vmadn,
        0x0F => Opcode::rsp_vmadh,
        0x10 => Opcode::rsp_vadd,
        0x11 => Opcode::rsp_vsub,
        0x13 => Opcode::rsp_vabs,
        0x14 => Opcode::rsp_vaddc,
        0x15 => Opcode::rsp_vsubc,
        0x1D => Opcode::rsp_vsar,
        0x20 => Opcode::rsp_vlt,
        0x21 => Opcode::rsp_veq,
        0x22 => Opcode::rsp_vne,
        0x23 => Opcode::rsp_vge,
        0x24 => Opcode::rsp_vcl,
        0x25 => Opcode::rsp_vch,
        0x26 => Opcode::rsp_vcr,
        0x27 => Opcode::rsp_vmrg,
        0x28 => Opcode::rsp_vand,
        0x29 => Opcode::rsp_vnand,
        0x2A => Opcode::rsp_vor,
        0x2B => Opcode::rsp_vnor,
        0x2C => Opcode::rsp_vxor,
        0x2D => Opcode::rsp_vnxor,
        0x30 => Opcode::rsp_vrcp,
        0x31 => Opcode::rsp_vrcpl,
        0x32 => Opcode::rsp_vrcph,
        0x33 => Opcode::rsp_vmov,
        0x34 => Opcode::rsp_vrsq,
        0x35 => Opcode::rsp_vrsql,
        0x36 => Opcode::rsp_vrsqh,
        0x37 => Opcode::rsp_vnop,
        _ => Opcode::INVALID,
    }
}

const fn decode_cop2_gte(word: u32) -> Opcode {
    if (word >> 25) & 1 == 0 {
        return match rs(word) {
            0x00 => Opcode::gte_mfc2,
            0x02 => Opcode::gte_cfc2,
            0x04 => Opcode::gte_mtc2,
            0x06 => Opcode::gte_ctc2,
            _ => Opcode::INVALID,
        };
    }

    match function(word) {
        0x01 => Opcode::gte_rtps,
        0x06 => Opcode::gte_nclip,
        0x0C => Opcode::gte_op,
        0x10 => Opcode::gte_dpcs,
        0x11 => Opcode::gte_intpl,
        0x12 => Opcode::gte_mvmva,
        0x13 => Opcode::gte_ncds,
        0x14 => Opcode::gte_cdp,
        0x16 => Opcode::gte_ncdt,
        0x1B => Opcode::gte_nccs,
        0x1C => Opcode::gte_cc,
        0x1E => Opcode::gte_ncs,
        0x20 => Opcode::gte_nct,
        0x28 => Opcode::gte_sqr,
        0x29 => Opcode::gte_dcpl,
        0x2A => Opcode::gte_dpct,
        0x2D => Opcode::gte_avsz3,
        0x2E => Opcode::gte_avsz4,
        0x30 => Opcode::gte_rtpt,
        0x3D => Opcode::gte_gpf,
        0x3E => Opcode::gte_gpl,
        0x3F => Opcode::gte_ncct,
        _ => Opcode::INVALID,
    }
}

const fn decode_rsp_vector_load(word: u32) -> Opcode {
    match (word >> 11) & 0x1F {
        0x00 => Opcode::rsp_lbv,
        0x01 => Opcode::rsp_lsv,
        0x02 => Opcode::rsp_llv,
        0x03 => Opcode::rsp_ldv,
        0x04 => Opcode::rsp_lqv,
        0x05 => Opcode::rsp_lrv,
        0x06 => Opcode::rsp_lpv,
        0x07 => Opcode::rsp_luv,
        0x08 => Opcode::rsp_lhv,
        0x09 => Opcode::rsp_lfv,
        0x0B => Opcode::rsp_ltv,
        _ => Opcode::INVALID,
    }
}

const fn decode_rsp_vector_store(word: u32) -> Opcode {
    match (word >> 11) & 0x1F {
        0x00 => Opcode::rsp_sbv,
        0x01 => Opcode::rsp_ssv,
        0x02 => Opcode::rsp_slv,
        0x03 => Opcode::rsp_sdv,
        0x04 => Opcode::rsp_sqv,
        0x05 => Opcode::rsp_srv,
        0x06 => Opcode::rsp_spv,
        0x07 => Opcode::rsp_suv,
        0x08 => Opcode::rsp_shv,
        0x09 => Opcode::rsp_sfv,
        0x0A => Opcode::rsp_swv,
        0x0B => Opcode::rsp_stv,
        _ => Opcode::INVALID,
    }
}

const fn decode_mmi(word: u32) -> Opcode {
    match function(word) {
        0x00 => Opcode::ee_madd,
        0x01 => Opcode::ee_maddu,
        0x04 => Opcode::ee_plzcw,
        0x08 => match sa(word) {
            0x00 => Opcode::ee_paddw,
            0x01 => Opcode::ee_psubw,
            0x04 => Opcode::ee_paddh,
            0x05 => Opcode::ee_psubh,
            0x08 => Opcode::ee_paddb,
            0x09 => Opcode::ee_psubb,
            _ => Opcode::INVALID,
        },
        0x09 => match sa(word) {
            0x12 => Opcode::ee_pand,
            0x13 => Opcode::ee_pxor,
            _ => Opcode::INVALID,
        },
        0x10 => Opcode::ee_mfhi1,
        0x11 => Opcode::ee_mthi1,
        0x12 => Opcode::ee_mflo1,
        0x13 => Opcode::ee_mtlo1,
        0x18 => Opcode::ee_mult1,
        0x19 => Opcode::ee_multu1,
        0x1A => Opcode::ee_div1,
        0x1B => Opcode::ee_divu1,
        0x29 => match sa(word) {
            0x12 => Opcode::ee_por,
            0x13 => Opcode::ee_pnor,
            _ => Opcode::INVALID,
        },
        _ => Opcode::INVALID,
    }
}

const fn decode_allegrex_special2(word: u32) -> Opcode {
    match function(word) {
        0x00 => Opcode::alx_madd,
        0x01 => Opcode::alx_maddu,
        0x16 => Opcode::alx_clz,
        0x17 => Opcode::alx_clo,
        0x2C => Opcode::alx_msub,
        0x2D => Opcode::alx_msubu,
        _ => Opcode::INVALID,
    }
}

const fn decode_allegrex_special3(word: u32) -> Opcode {
    match function(word) {
        0x00 => Opcode::alx_ext,
        0x04 => Opcode::alx_ins,
        0x20 => match sa(word) {
            0x02 => Opcode::alx_wsbh,
            0x03 => Opcode::alx_wsbw,
            0x10 => Opcode::alx_seb,
            0x14 => Opcode::alx_bitrev,
            0x18 => Opcode::alx_seh,
            _ => Opcode::INVALID,
        },
        _ => Opcode::INVALID,
    }
}
