/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

/// GTE data registers (PS1 COP2).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct GteData {
    index: u8,
}

const GTE_DATA_NAMES: [&str; 32] = [
    "$vxy0", "$vz0", "$vxy1", "$vz1", "$vxy2", "$vz2", "$rgb", "$otz", "$ir0", "$ir1", "$ir2",
    "$ir3", "$sxy0", "$sxy1", "$sxy2", "$sxyp", "$sz0", "$sz1", "$sz2", "$sz3", "$rgb0", "$rgb1",
    "$rgb2", "$res1", "$mac0", "$mac1", "$mac2", "$mac3", "$irgb", "$orgb", "$lzcs", "$lzcr",
];

impl GteData {
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        Self {
            index: (index & 0x1F) as u8,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        GTE_DATA_NAMES[self.index as usize]
    }
}

/// GTE control registers (PS1 COP2).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct GteControl {
    index: u8,
}

const GTE_CONTROL_NAMES: [&str; 32] = [
    "$r11r12", "$r13r21", "$r22r23", "$r31r32", "$r33", "$trx", "$try", "$trz", "$l11l12",
    "$l13l21", "$l22l23", "$l31l32", "$l33", "$rbk", "$gbk", "$bbk", "$lr1lr2", "$lr3lg1",
    "$lg2lg3", "$lb1lb2", "$lb3", "$rfc", "$gfc", "$bfc", "$ofx", "$ofy", "$h", "$dqa", "$dqb",
    "$zsf3", "$zsf4", "$flag",
];

impl GteControl {
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        Self {
            index: (index & 0x1F) as u8,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        GTE_CONTROL_NAMES[self.index as usize]
    }
}

/// RSP COP0 registers.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RspCop0 {
    index: u8,
}

const RSP_COP0_NAMES: [&str; 32] = [
    "SP_MEM_ADDR",
    "SP_DRAM_ADDR",
    "SP_RD_LEN",
    "SP_WR_LEN",
    "SP_STATUS",
    "SP_DMA_FULL",
    "SP_DMA_BUSY",
    "SP_SEMAPHORE",
    "DPC_START",
    "DPC_END",
    "DPC_CURRENT",
    "DPC_STATUS",
    "DPC_CLOCK",
    "DPC_BUFBUSY",
    "DPC_PIPEBUSY",
    "DPC_TMEM",
    "Reserved16",
    "Reserved17",
    "Reserved18",
    "Reserved19",
    "Reserved20",
    "Reserved21",
    "Reserved22",
    "Reserved23",
    "Reserved24",
    "Reserved25",
    "Reserved26",
    "Reserved27",
    "Reserved28",
    "Reserved29",
    "Reserved30",
    "Reserved31",
];

impl RspCop0 {
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        Self {
            index: (index & 0x1F) as u8,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        RSP_COP0_NAMES[self.index as usize]
    }
}

/// RSP vector registers.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RspVector {
    index: u8,
}

const RSP_VECTOR_NAMES: [&str; 32] = [
    "$v0", "$v1", "$v2", "$v3", "$v4", "$v5", "$v6", "$v7", "$v8", "$v9", "$v10", "$v11", "$v12",
    "$v13", "$v14", "$v15", "$v16", "$v17", "$v18", "$v19", "$v20", "$v21", "$v22", "$v23", "$v24",
    "$v25", "$v26", "$v27", "$v28", "$v29", "$v30", "$v31",
];

impl RspVector {
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        Self {
            index: (index & 0x1F) as u8,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        RSP_VECTOR_NAMES[self.index as usize]
    }
}
