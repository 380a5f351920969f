/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use super::AccessType;

/// How the operands of an opcode are laid out for display purposes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum OperandFormat {
    /// No visible operands (`nop`, `tlbr`, ...).
    None,
    /// `rd, rs, rt`
    RdRsRt,
    /// `rd, rt, rs` (variable shifts)
    RdRtRs,
    /// `rd, rt, sa` (immediate shifts)
    RdRtSa,
    /// `rs, rt` (`mult`, `div`, traps)
    RsRt,
    /// `rs`
    Rs,
    /// `rd`
    Rd,
    /// `rd, rs` (`jalr` with explicit destination)
    RdRs,
    /// `rt, rs, imm`
    RtRsImm,
    /// `rt, imm` (`lui`)
    RtImm,
    /// `rs, imm` (regimm traps)
    RsImm,
    /// `rs, rt, offset` (`beq`, `bne`, ...)
    RsRtOffset,
    /// `rs, offset` (`blez`, regimm branches, ...)
    RsOffset,
    /// `offset` (`bc1f`, ...)
    Offset,
    /// 26-bit jump target
    Target,
    /// `rt, offset(base)`
    RtOffsetBase,
    /// `ft, offset(base)`
    FtOffsetBase,
    /// `fd, fs, ft`
    FdFsFt,
    /// `fd, fs`
    FdFs,
    /// `fs, ft` (float compares)
    FsFt,
    /// `rt, fs` (cop1 moves)
    RtFs,
    /// `rt, cop0 reg`
    RtCop0,
    /// `rt, cop1 control reg`
    RtFsControl,
    /// `rt, gte data reg`
    RtGteData,
    /// `rt, gte control reg`
    RtGteControl,
    /// Optional break/syscall code
    Code,
    /// GTE command (raw function field rendered as hex)
    GteCommand,
    /// `vd, vs, vt[e]` (RSP computational)
    RspVdVsVt,
    /// `vd[e], vs` (`vmov`, `vrcp`, ...)
    RspVdVs,
    /// `vt[e], offset(base)` (RSP vector loads/stores)
    RspVtOffsetBase,
    /// `rt, vs[e]` (RSP cop2 moves)
    RtRspVs,
    /// `rt, rsp cop0 reg`
    RtRspCop0,
}

macro_rules! declare_opcodes {
    ($( $variant:ident => $name:literal, $fmt:ident; )*) => {
        /// Every decodable mnemonic, prefixed by the table it belongs to.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
        #[non_exhaustive]
        pub enum Opcode {
            /// The word did not match any encoding of the selected dialect.
            INVALID,
            $( $variant, )*
        }

        impl Opcode {
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    Opcode::INVALID => "INVALID",
                    $( Opcode::$variant => $name, )*
                }
            }

            #[must_use]
            pub const fn operand_format(&self) -> OperandFormat {
                match self {
                    Opcode::INVALID => OperandFormat::None,
                    $( Opcode::$variant => OperandFormat::$fmt, )*
                }
            }
        }
    };
}

declare_opcodes! {
    // Primary table
    core_j => "j", Target;
    core_jal => "jal", Target;
    core_beq => "beq", RsRtOffset;
    core_bne => "bne", RsRtOffset;
    core_blez => "blez", RsOffset;
    core_bgtz => "bgtz", RsOffset;
    core_addi => "addi", RtRsImm;
    core_addiu => "addiu", RtRsImm;
    core_slti => "slti", RtRsImm;
    core_sltiu => "sltiu", RtRsImm;
    core_andi => "andi", RtRsImm;
    core_ori => "ori", RtRsImm;
    core_xori => "xori", RtRsImm;
    core_lui => "lui", RtImm;
    core_beql => "beql", RsRtOffset;
    core_bnel => "bnel", RsRtOffset;
    core_blezl => "blezl", RsOffset;
    core_bgtzl => "bgtzl", RsOffset;
    core_daddi => "daddi", RtRsImm;
    core_daddiu => "daddiu", RtRsImm;
    core_ldl => "ldl", RtOffsetBase;
    core_ldr => "ldr", RtOffsetBase;
    core_lb => "lb", RtOffsetBase;
    core_lh => "lh", RtOffsetBase;
    core_lwl => "lwl", RtOffsetBase;
    core_lw => "lw", RtOffsetBase;
    core_lbu => "lbu", RtOffsetBase;
    core_lhu => "lhu", RtOffsetBase;
    core_lwr => "lwr", RtOffsetBase;
    core_lwu => "lwu", RtOffsetBase;
    core_sb => "sb", RtOffsetBase;
    core_sh => "sh", RtOffsetBase;
    core_swl => "swl", RtOffsetBase;
    core_sw => "sw", RtOffsetBase;
    core_sdl => "sdl", RtOffsetBase;
    core_sdr => "sdr", RtOffsetBase;
    core_swr => "swr", RtOffsetBase;
    core_cache => "cache", RtOffsetBase;
    core_ll => "ll", RtOffsetBase;
    core_lwc1 => "lwc1", FtOffsetBase;
    core_lwc2 => "lwc2", RtOffsetBase;
    core_pref => "pref", RtOffsetBase;
    core_lld => "lld", RtOffsetBase;
    core_ldc1 => "ldc1", FtOffsetBase;
    core_ldc2 => "ldc2", RtOffsetBase;
    core_ld => "ld", RtOffsetBase;
    core_sc => "sc", RtOffsetBase;
    core_swc1 => "swc1", FtOffsetBase;
    core_swc2 => "swc2", RtOffsetBase;
    core_scd => "scd", RtOffsetBase;
    core_sdc1 => "sdc1", FtOffsetBase;
    core_sdc2 => "sdc2", RtOffsetBase;
    core_sd => "sd", RtOffsetBase;

    // SPECIAL
    core_sll => "sll", RdRtSa;
    core_srl => "srl", RdRtSa;
    core_sra => "sra", RdRtSa;
    core_sllv => "sllv", RdRtRs;
    core_srlv => "srlv", RdRtRs;
    core_srav => "srav", RdRtRs;
    core_jr => "jr", Rs;
    core_jalr => "jalr", RdRs;
    core_movz => "movz", RdRsRt;
    core_movn => "movn", RdRsRt;
    core_syscall => "syscall", Code;
    core_break => "break", Code;
    core_sync => "sync", None;
    core_mfhi => "mfhi", Rd;
    core_mthi => "mthi", Rs;
    core_mflo => "mflo", Rd;
    core_mtlo => "mtlo", Rs;
    core_dsllv => "dsllv", RdRtRs;
    core_dsrlv => "dsrlv", RdRtRs;
    core_dsrav => "dsrav", RdRtRs;
    core_mult => "mult", RsRt;
    core_multu => "multu", RsRt;
    core_div => "div", RsRt;
    core_divu => "divu", RsRt;
    core_dmult => "dmult", RsRt;
    core_dmultu => "dmultu", RsRt;
    core_ddiv => "ddiv", RsRt;
    core_ddivu => "ddivu", RsRt;
    core_add => "add", RdRsRt;
    core_addu => "addu", RdRsRt;
    core_sub => "sub", RdRsRt;
    core_subu => "subu", RdRsRt;
    core_and => "and", RdRsRt;
    core_or => "or", RdRsRt;
    core_xor => "xor", RdRsRt;
    core_nor => "nor", RdRsRt;
    core_slt => "slt", RdRsRt;
    core_sltu => "sltu", RdRsRt;
    core_dadd => "dadd", RdRsRt;
    core_daddu => "daddu", RdRsRt;
    core_dsub => "dsub", RdRsRt;
    core_dsubu => "dsubu", RdRsRt;
    core_tge => "tge", RsRt;
    core_tgeu => "tgeu", RsRt;
    core_tlt => "tlt", RsRt;
    core_tltu => "tltu", RsRt;
    core_teq => "teq", RsRt;
    core_tne => "tne", RsRt;
    core_dsll => "dsll", RdRtSa;
    core_dsrl => "dsrl", RdRtSa;
    core_dsra => "dsra", RdRtSa;
    core_dsll32 => "dsll32", RdRtSa;
    core_dsrl32 => "dsrl32", RdRtSa;
    core_dsra32 => "dsra32", RdRtSa;

    // REGIMM
    core_bltz => "bltz", RsOffset;
    core_bgez => "bgez", RsOffset;
    core_bltzl => "bltzl", RsOffset;
    core_bgezl => "bgezl", RsOffset;
    core_tgei => "tgei", RsImm;
    core_tgeiu => "tgeiu", RsImm;
    core_tlti => "tlti", RsImm;
    core_tltiu => "tltiu", RsImm;
    core_teqi => "teqi", RsImm;
    core_tnei => "tnei", RsImm;
    core_bltzal => "bltzal", RsOffset;
    core_bgezal => "bgezal", RsOffset;
    core_bltzall => "bltzall", RsOffset;
    core_bgezall => "bgezall", RsOffset;

    // COP0
    core_mfc0 => "mfc0", RtCop0;
    core_dmfc0 => "dmfc0", RtCop0;
    core_cfc0 => "cfc0", RtCop0;
    core_mtc0 => "mtc0", RtCop0;
    core_dmtc0 => "dmtc0", RtCop0;
    core_ctc0 => "ctc0", RtCop0;
    core_tlbr => "tlbr", None;
    core_tlbwi => "tlbwi", None;
    core_tlbwr => "tlbwr", None;
    core_tlbp => "tlbp", None;
    core_eret => "eret", None;

    // COP1
    core_mfc1 => "mfc1", RtFs;
    core_dmfc1 => "dmfc1", RtFs;
    core_cfc1 => "cfc1", RtFsControl;
    core_mtc1 => "mtc1", RtFs;
    core_dmtc1 => "dmtc1", RtFs;
    core_ctc1 => "ctc1", RtFsControl;
    core_bc1f => "bc1f", Offset;
    core_bc1t => "bc1t", Offset;
    core_bc1fl => "bc1fl", Offset;
    core_bc1tl => "bc1tl", Offset;

    core_add_s => "add.s", FdFsFt;
    core_sub_s => "sub.s", FdFsFt;
    core_mul_s => "mul.s", FdFsFt;
    core_div_s => "div.s", FdFsFt;
    core_sqrt_s => "sqrt.s", FdFs;
    core_abs_s => "abs.s", FdFs;
    core_mov_s => "mov.s", FdFs;
    core_neg_s => "neg.s", FdFs;
    core_round_l_s => "round.l.s", FdFs;
    core_trunc_l_s => "trunc.l.s", FdFs;
    core_ceil_l_s => "ceil.l.s", FdFs;
    core_floor_l_s => "floor.l.s", FdFs;
    core_round_w_s => "round.w.s", FdFs;
    core_trunc_w_s => "trunc.w.s", FdFs;
    core_ceil_w_s => "ceil.w.s", FdFs;
    core_floor_w_s => "floor.w.s", FdFs;
    core_cvt_d_s => "cvt.d.s", FdFs;
    core_cvt_w_s => "cvt.w.s", FdFs;
    core_cvt_l_s => "cvt.l.s", FdFs;
    core_c_f_s => "c.f.s", FsFt;
    core_c_un_s => "c.un.s", FsFt;
    core_c_eq_s => "c.eq.s", FsFt;
    core_c_ueq_s => "c.ueq.s", FsFt;
    core_c_olt_s => "c.olt.s", FsFt;
    core_c_ult_s => "c.ult.s", FsFt;
    core_c_ole_s => "c.ole.s", FsFt;
    core_c_ule_s => "c.ule.s", FsFt;
    core_c_sf_s => "c.sf.s", FsFt;
    core_c_ngle_s => "c.ngle.s", FsFt;
    core_c_seq_s => "c.seq.s", FsFt;
    core_c_ngl_s => "c.ngl.s", FsFt;
    core_c_lt_s => "c.lt.s", FsFt;
    core_c_nge_s => "c.nge.s", FsFt;
    core_c_le_s => "c.le.s", FsFt;
    core_c_ngt_s => "c.ngt.s", FsFt;

    core_add_d => "add.d", FdFsFt;
    core_sub_d => "sub.d", FdFsFt;
    core_mul_d => "mul.d", FdFsFt;
    core_div_d => "div.d", FdFsFt;
    core_sqrt_d => "sqrt.d", FdFs;
    core_abs_d => "abs.d", FdFs;
    core_mov_d => "mov.d", FdFs;
    core_neg_d => "neg.d", FdFs;
    core_round_l_d => "round.l.d", FdFs;
    core_trunc_l_d => "trunc.l.d", FdFs;
    core_ceil_l_d => "ceil.l.d", FdFs;
    core_floor_l_d => "floor.l.d", FdFs;
    core_round_w_d => "round.w.d", FdFs;
    core_trunc_w_d => "trunc.w.d", FdFs;
    core_ceil_w_d => "ceil.w.d", FdFs;
    core_floor_w_d => "floor.w.d", FdFs;
    core_cvt_s_d => "cvt.s.d", FdFs;
    core_cvt_w_d => "cvt.w.d", FdFs;
    core_cvt_l_d => "cvt.l.d", FdFs;
    core_c_f_d => "c.f.d", FsFt;
    core_c_un_d => "c.un.d", FsFt;
    core_c_eq_d => "c.eq.d", FsFt;
    core_c_ueq_d => "c.ueq.d", FsFt;
    core_c_olt_d => "c.olt.d", FsFt;
    core_c_ult_d => "c.ult.d", FsFt;
    core_c_ole_d => "c.ole.d", FsFt;
    core_c_ule_d => "c.ule.d", FsFt;
    core_c_sf_d => "c.sf.d", FsFt;
    core_c_ngle_d => "c.ngle.d", FsFt;
    core_c_seq_d => "c.seq.d", FsFt;
    core_c_ngl_d => "c.ngl.d", FsFt;
    core_c_lt_d => "c.lt.d", FsFt;
    core_c_nge_d => "c.nge.d", FsFt;
    core_c_le_d => "c.le.d", FsFt;
    core_c_ngt_d => "c.ngt.d", FsFt;

    core_cvt_s_w => "cvt.s.w", FdFs;
    core_cvt_d_w => "cvt.d.w", FdFs;
    core_cvt_s_l => "cvt.s.l", FdFs;
    core_cvt_d_l => "cvt.d.l", FdFs;

    // RSP cop moves
    rsp_mfc0 => "mfc0", RtRspCop0;
    rsp_mtc0 => "mtc0", RtRspCop0;
    rsp_mfc2 => "mfc2", RtRspVs;
    rsp_mtc2 => "mtc2", RtRspVs;
    rsp_cfc2 => "cfc2", RtRspVs;
    rsp_ctc2 => "ctc2", RtRspVs;

    // RSP vector loads/stores
    rsp_lbv => "lbv", RspVtOffsetBase;
    rsp_lsv => "lsv", RspVtOffsetBase;
    rsp_llv => "llv", RspVtOffsetBase;
    rsp_ldv => "ldv", RspVtOffsetBase;
    rsp_lqv => "lqv", RspVtOffsetBase;
    rsp_lrv => "lrv", RspVtOffsetBase;
    rsp_lpv => "lpv", RspVtOffsetBase;
    rsp_luv => "luv", RspVtOffsetBase;
    rsp_lhv => "lhv", RspVtOffsetBase;
    rsp_lfv => "lfv", RspVtOffsetBase;
    rsp_ltv => "ltv", RspVtOffsetBase;
    rsp_sbv => "sbv", RspVtOffsetBase;
    rsp_ssv => "ssv", RspVtOffsetBase;
    rsp_slv => "slv", RspVtOffsetBase;
    rsp_sdv => "sdv", RspVtOffsetBase;
    rsp_sqv => "sqv", RspVtOffsetBase;
    rsp_srv => "srv", RspVtOffsetBase;
    rsp_spv => "spv", RspVtOffsetBase;
    rsp_suv => "suv", RspVtOffsetBase;
    rsp_shv => "shv", RspVtOffsetBase;
    rsp_sfv => "sfv", RspVtOffsetBase;
    rsp_swv => "swv", RspVtOffsetBase;
    rsp_stv => "stv", RspVtOffsetBase;

    // RSP vector computational
    rsp_vmulf => "vmulf", RspVdVsVt;
    rsp_vmulu => "vmulu", RspVdVsVt;
    rsp_vrndp => "vrndp", RspVdVsVt;
    rsp_vmulq => "vmulq", RspVdVsVt;
    rsp_vmudl => "vmudl", RspVdVsVt;
    rsp_vmudm => "vmudm", RspVdVsVt;
    rsp_vmudn => "vmudn", RspVdVsVt;
    rsp_vmudh => "vmudh", RspVdVsVt;
    rsp_vmacf => "vmacf", RspVdVsVt;
    rsp_vmacu => "vmacu", RspVdVsVt;
    rsp_vrndn => "vrndn", RspVdVsVt;
    rsp_vmacq => "vmacq", RspVdVsVt;
    rsp_vmadl => "vmadl", RspVdVsVt;
    rsp_vmadm => "vmadm", RspVdVsVt;
    rsp_vmadn => "vmadn", RspVdVsVt;
    rsp_vmadh => "vmadh", RspVdVsVt;
    rsp_vadd => "vadd", RspVdVsVt;
    rsp_vsub => "vsub", RspVdVsVt;
    rsp_vabs => "vabs", RspVdVsVt;
    rsp_vaddc => "vaddc", RspVdVsVt;
    rsp_vsubc => "vsubc", RspVdVsVt;
    rsp_vsar => "vsar", RspVdVsVt;
    rsp_vlt => "vlt", RspVdVsVt;
    rsp_veq => "veq", RspVdVsVt;
    rsp_vne => "vne", RspVdVsVt;
    rsp_vge => "vge", RspVdVsVt;
    rsp_vcl => "vcl", RspVdVsVt;
    rsp_vch => "vch", RspVdVsVt;
    rsp_vcr => "vcr", RspVdVsVt;
    rsp_vmrg => "vmrg", RspVdVsVt;
    rsp_vand => "vand", RspVdVsVt;
    rsp_vnand => "vnand", RspVdVsVt;
    rsp_vor => "vor", RspVdVsVt;
    rsp_vnor => "vnor", RspVdVsVt;
    rsp_vxor => "vxor", RspVdVsVt;
    rsp_vnxor => "vnxor", RspVdVsVt;
    rsp_vrcp => "vrcp", RspVdVs;
    rsp_vrcpl => "vrcpl", RspVdVs;
    rsp_vrcph => "vrcph", RspVdVs;
    rsp_vrsq => "vrsq", RspVdVs;
    rsp_vrsql => "vrsql", RspVdVs;
    rsp_vrsqh => "vrsqh", RspVdVs;
    rsp_vmov => "vmov", RspVdVs;
    rsp_vnop => "vnop", None;

    // PS1 GTE
    gte_mfc2 => "mfc2", RtGteData;
    gte_mtc2 => "mtc2", RtGteData;
    gte_cfc2 => "cfc2", RtGteControl;
    gte_ctc2 => "ctc2", RtGteControl;
    gte_rtps => "RTPS", GteCommand;
    gte_nclip => "NCLIP", GteCommand;
    gte_op => "OP", GteCommand;
    gte_dpcs => "DPCS", GteCommand;
    gte_intpl => "INTPL", GteCommand;
    gte_mvmva => "MVMVA", GteCommand;
    gte_ncds => "NCDS", GteCommand;
    gte_cdp => "CDP", GteCommand;
    gte_ncdt => "NCDT", GteCommand;
    gte_nccs => "NCCS", GteCommand;
    gte_cc => "CC", GteCommand;
    gte_ncs => "NCS", GteCommand;
    gte_nct => "NCT", GteCommand;
    gte_sqr => "SQR", GteCommand;
    gte_dcpl => "DCPL", GteCommand;
    gte_dpct => "DPCT", GteCommand;
    gte_avsz3 => "AVSZ3", GteCommand;
    gte_avsz4 => "AVSZ4", GteCommand;
    gte_rtpt => "RTPT", GteCommand;
    gte_gpf => "GPF", GteCommand;
    gte_gpl => "GPL", GteCommand;
    gte_ncct => "NCCT", GteCommand;

    // PS2 EE
    ee_lq => "lq", RtOffsetBase;
    ee_sq => "sq", RtOffsetBase;
    ee_madd => "madd", RsRt;
    ee_maddu => "maddu", RsRt;
    ee_plzcw => "plzcw", RdRs;
    ee_mfhi1 => "mfhi1", Rd;
    ee_mthi1 => "mthi1", Rs;
    ee_mflo1 => "mflo1", Rd;
    ee_mtlo1 => "mtlo1", Rs;
    ee_mult1 => "mult1", RsRt;
    ee_multu1 => "multu1", RsRt;
    ee_div1 => "div1", RsRt;
    ee_divu1 => "divu1", RsRt;
    ee_paddw => "paddw", RdRsRt;
    ee_psubw => "psubw", RdRsRt;
    ee_paddh => "paddh", RdRsRt;
    ee_psubh => "psubh", RdRsRt;
    ee_paddb => "paddb", RdRsRt;
    ee_psubb => "psubb", RdRsRt;
    ee_pand => "pand", RdRsRt;
    ee_por => "por", RdRsRt;
    ee_pxor => "pxor", RdRsRt;
    ee_pnor => "pnor", RdRsRt;

    // PSP ALLEGREX
    alx_clz => "clz", RdRs;
    alx_clo => "clo", RdRs;
    alx_madd => "madd", RsRt;
    alx_maddu => "maddu", RsRt;
    alx_msub => "msub", RsRt;
    alx_msubu => "msubu", RsRt;
    alx_max => "max", RdRsRt;
    alx_min => "min", RdRsRt;
    alx_ext => "ext", RtRsImm;
    alx_ins => "ins", RtRsImm;
    alx_seb => "seb", RdRs;
    alx_seh => "seh", RdRs;
    alx_wsbh => "wsbh", RdRs;
    alx_wsbw => "wsbw", RdRs;
    alx_bitrev => "bitrev", RdRs;
    alx_rotr => "rotr", RdRtSa;
    alx_rotrv => "rotrv", RdRtRs;
}

impl Opcode {
    #[must_use]
    pub const fn is_branch(&self) -> bool {
        matches!(
            self,
            Opcode::core_beq
                | Opcode::core_bne
                | Opcode::core_blez
                | Opcode::core_bgtz
                | Opcode::core_beql
                | Opcode::core_bnel
                | Opcode::core_blezl
                | Opcode::core_bgtzl
                | Opcode::core_bltz
                | Opcode::core_bgez
                | Opcode::core_bltzl
                | Opcode::core_bgezl
                | Opcode::core_bltzal
                | Opcode::core_bgezal
                | Opcode::core_bltzall
                | Opcode::core_bgezall
                | Opcode::core_bc1f
                | Opcode::core_bc1t
                | Opcode::core_bc1fl
                | Opcode::core_bc1tl
        )
    }

    #[must_use]
    pub const fn is_branch_likely(&self) -> bool {
        matches!(
            self,
            Opcode::core_beql
                | Opcode::core_bnel
                | Opcode::core_blezl
                | Opcode::core_bgtzl
                | Opcode::core_bltzl
                | Opcode::core_bgezl
                | Opcode::core_bltzall
                | Opcode::core_bgezall
                | Opcode::core_bc1fl
                | Opcode::core_bc1tl
        )
    }

    #[must_use]
    pub const fn is_jump(&self) -> bool {
        matches!(
            self,
            Opcode::core_j | Opcode::core_jal | Opcode::core_jr | Opcode::core_jalr
        )
    }

    #[must_use]
    pub const fn is_jump_with_address(&self) -> bool {
        matches!(self, Opcode::core_j | Opcode::core_jal)
    }

    #[must_use]
    pub const fn does_link(&self) -> bool {
        matches!(
            self,
            Opcode::core_jal
                | Opcode::core_jalr
                | Opcode::core_bltzal
                | Opcode::core_bgezal
                | Opcode::core_bltzall
                | Opcode::core_bgezall
        )
    }

    #[must_use]
    pub const fn jumps_to_register(&self) -> bool {
        matches!(self, Opcode::core_jr | Opcode::core_jalr)
    }

    #[must_use]
    pub const fn has_delay_slot(&self) -> bool {
        self.is_branch() || self.is_jump()
    }

    /// Can this instruction hold the `%hi` half of an address?
    #[must_use]
    pub const fn can_be_hi(&self) -> bool {
        matches!(self, Opcode::core_lui)
    }

    /// Can this instruction hold the sign-extended `%lo` half of an address?
    #[must_use]
    pub const fn can_be_lo(&self) -> bool {
        if self.does_dereference() {
            true
        } else {
            matches!(
                self,
                Opcode::core_addi
                    | Opcode::core_addiu
                    | Opcode::core_daddi
                    | Opcode::core_daddiu
            )
        }
    }

    /// `ori` pairs with `lui` to form a zero-extended 32-bit constant, not an
    /// address.
    #[must_use]
    pub const fn can_be_unsigned_lo(&self) -> bool {
        matches!(self, Opcode::core_ori)
    }

    #[must_use]
    pub const fn does_load(&self) -> bool {
        matches!(
            self,
            Opcode::core_lb
                | Opcode::core_lh
                | Opcode::core_lwl
                | Opcode::core_lw
                | Opcode::core_lbu
                | Opcode::core_lhu
                | Opcode::core_lwr
                | Opcode::core_lwu
                | Opcode::core_ldl
                | Opcode::core_ldr
                | Opcode::core_ld
                | Opcode::core_ll
                | Opcode::core_lld
                | Opcode::core_lwc1
                | Opcode::core_ldc1
                | Opcode::core_lwc2
                | Opcode::core_ldc2
                | Opcode::ee_lq
        )
    }

    #[must_use]
    pub const fn does_store(&self) -> bool {
        matches!(
            self,
            Opcode::core_sb
                | Opcode::core_sh
                | Opcode::core_swl
                | Opcode::core_sw
                | Opcode::core_swr
                | Opcode::core_sdl
                | Opcode::core_sdr
                | Opcode::core_sd
                | Opcode::core_sc
                | Opcode::core_scd
                | Opcode::core_swc1
                | Opcode::core_sdc1
                | Opcode::core_swc2
                | Opcode::core_sdc2
                | Opcode::ee_sq
        )
    }

    #[must_use]
    pub const fn does_dereference(&self) -> bool {
        self.does_load() || self.does_store()
    }

    #[must_use]
    pub const fn does_unsigned_memory_access(&self) -> bool {
        matches!(
            self,
            Opcode::core_lbu | Opcode::core_lhu | Opcode::core_lwu
        )
    }

    #[must_use]
    pub const fn access_type(&self) -> Option<AccessType> {
        match self {
            Opcode::core_lb | Opcode::core_lbu | Opcode::core_sb => Some(AccessType::BYTE),
            Opcode::core_lh | Opcode::core_lhu | Opcode::core_sh => Some(AccessType::SHORT),
            Opcode::core_lw | Opcode::core_lwu | Opcode::core_sw | Opcode::core_ll
            | Opcode::core_sc | Opcode::core_lwc2 | Opcode::core_swc2 => Some(AccessType::WORD),
            Opcode::core_ld | Opcode::core_sd | Opcode::core_lld | Opcode::core_scd
            | Opcode::core_ldc2 | Opcode::core_sdc2 => Some(AccessType::DOUBLEWORD),
            Opcode::core_lwc1 | Opcode::core_swc1 => Some(AccessType::FLOAT),
            Opcode::core_ldc1 | Opcode::core_sdc1 => Some(AccessType::DOUBLEFLOAT),
            Opcode::core_lwl | Opcode::core_swl => Some(AccessType::WORD_LEFT),
            Opcode::core_lwr | Opcode::core_swr => Some(AccessType::WORD_RIGHT),
            Opcode::core_ldl | Opcode::core_sdl => Some(AccessType::DOUBLEWORD_LEFT),
            Opcode::core_ldr | Opcode::core_sdr => Some(AccessType::DOUBLEWORD_RIGHT),
            Opcode::ee_lq | Opcode::ee_sq => Some(AccessType::DOUBLEWORD),
            _ => None,
        }
    }

    #[must_use]
    pub const fn reads_rs(&self) -> bool {
        match self.operand_format() {
            OperandFormat::RdRsRt
            | OperandFormat::RdRtRs
            | OperandFormat::RsRt
            | OperandFormat::Rs
            | OperandFormat::RdRs
            | OperandFormat::RtRsImm
            | OperandFormat::RsImm
            | OperandFormat::RsRtOffset
            | OperandFormat::RsOffset
            | OperandFormat::RtOffsetBase
            | OperandFormat::FtOffsetBase
            | OperandFormat::RspVtOffsetBase => true,
            _ => false,
        }
    }

    #[must_use]
    pub const fn reads_rt(&self) -> bool {
        if self.does_store() {
            true
        } else {
            matches!(
                self.operand_format(),
                OperandFormat::RdRsRt
                    | OperandFormat::RdRtRs
                    | OperandFormat::RdRtSa
                    | OperandFormat::RsRt
                    | OperandFormat::RsRtOffset
            ) || matches!(
                self,
                Opcode::core_mtc0
                    | Opcode::core_dmtc0
                    | Opcode::core_ctc0
                    | Opcode::core_mtc1
                    | Opcode::core_dmtc1
                    | Opcode::core_ctc1
                    | Opcode::gte_mtc2
                    | Opcode::gte_ctc2
                    | Opcode::rsp_mtc0
                    | Opcode::rsp_mtc2
                    | Opcode::rsp_ctc2
            )
        }
    }

    #[must_use]
    pub const fn modifies_rt(&self) -> bool {
        if self.does_load() {
            // Coprocessor loads write a coprocessor register, not a gpr.
            !matches!(
                self,
                Opcode::core_lwc1 | Opcode::core_ldc1 | Opcode::core_lwc2 | Opcode::core_ldc2
            )
        } else {
            matches!(
                self,
                Opcode::core_addi
                    | Opcode::core_addiu
                    | Opcode::core_slti
                    | Opcode::core_sltiu
                    | Opcode::core_andi
                    | Opcode::core_ori
                    | Opcode::core_xori
                    | Opcode::core_lui
                    | Opcode::core_daddi
                    | Opcode::core_daddiu
                    | Opcode::core_mfc0
                    | Opcode::core_dmfc0
                    | Opcode::core_cfc0
                    | Opcode::core_mfc1
                    | Opcode::core_dmfc1
                    | Opcode::core_cfc1
                    | Opcode::gte_mfc2
                    | Opcode::gte_cfc2
                    | Opcode::rsp_mfc0
                    | Opcode::rsp_mfc2
                    | Opcode::rsp_cfc2
                    | Opcode::alx_ext
                    | Opcode::alx_ins
            )
        }
    }

    #[must_use]
    pub const fn modifies_rd(&self) -> bool {
        matches!(
            self.operand_format(),
            OperandFormat::RdRsRt | OperandFormat::RdRtRs | OperandFormat::RdRtSa | OperandFormat::Rd
        ) || matches!(self, Opcode::core_jalr | Opcode::ee_plzcw)
            || matches!(
                self,
                Opcode::alx_clz
                    | Opcode::alx_clo
                    | Opcode::alx_seb
                    | Opcode::alx_seh
                    | Opcode::alx_wsbh
                    | Opcode::alx_wsbw
                    | Opcode::alx_bitrev
            )
    }

    #[must_use]
    pub const fn adds_registers(&self) -> bool {
        matches!(
            self,
            Opcode::core_add | Opcode::core_addu | Opcode::core_dadd | Opcode::core_daddu
        )
    }

    #[must_use]
    pub const fn subs_registers(&self) -> bool {
        matches!(
            self,
            Opcode::core_sub | Opcode::core_subu | Opcode::core_dsub | Opcode::core_dsubu
        )
    }

    #[must_use]
    pub const fn ors_registers(&self) -> bool {
        matches!(self, Opcode::core_or)
    }

    #[must_use]
    pub const fn is_trap(&self) -> bool {
        matches!(
            self,
            Opcode::core_tge
                | Opcode::core_tgeu
                | Opcode::core_tlt
                | Opcode::core_tltu
                | Opcode::core_teq
                | Opcode::core_tne
                | Opcode::core_tgei
                | Opcode::core_tgeiu
                | Opcode::core_tlti
                | Opcode::core_tltiu
                | Opcode::core_teqi
                | Opcode::core_tnei
        )
    }

    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(
            self.operand_format(),
            OperandFormat::FdFsFt | OperandFormat::FdFs | OperandFormat::FsFt
        ) || matches!(
            self,
            Opcode::core_lwc1 | Opcode::core_swc1 | Opcode::core_ldc1 | Opcode::core_sdc1
        )
    }

    #[must_use]
    pub const fn is_double(&self) -> bool {
        matches!(
            self,
            Opcode::core_add_d
                | Opcode::core_sub_d
                | Opcode::core_mul_d
                | Opcode::core_div_d
                | Opcode::core_sqrt_d
                | Opcode::core_abs_d
                | Opcode::core_mov_d
                | Opcode::core_neg_d
                | Opcode::core_ldc1
                | Opcode::core_sdc1
        )
    }

    /// Opcodes which compilers essentially never emit; finding one suggests
    /// the surrounding function is handwritten.
    #[must_use]
    pub const fn is_likely_handwritten(&self) -> bool {
        matches!(
            self,
            Opcode::core_cache
                | Opcode::core_sync
                | Opcode::core_pref
                | Opcode::core_ll
                | Opcode::core_sc
                | Opcode::core_lld
                | Opcode::core_scd
                | Opcode::core_tlbr
                | Opcode::core_tlbwi
                | Opcode::core_tlbwr
                | Opcode::core_tlbp
                | Opcode::core_eret
                | Opcode::core_mfc0
                | Opcode::core_dmfc0
                | Opcode::core_cfc0
                | Opcode::core_mtc0
                | Opcode::core_dmtc0
                | Opcode::core_ctc0
        )
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !matches!(self, Opcode::INVALID)
    }
}
