/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

//! MIPS instruction decoding.
//!
//! A single 32-bit word decodes into an [`Instruction`]; decoding never
//! fails, unknown encodings produce [`Opcode::INVALID`] which sections emit
//! as a raw `.word`.

pub mod abi;
pub mod access_type;
pub mod display_flags;
pub mod instr;
pub mod isa_extension;
pub mod isa_version;
pub mod opcodes;
pub mod registers;

mod decode;
mod instruction_display;

pub use abi::Abi;
pub use access_type::AccessType;
pub use display_flags::InstructionDisplayFlags;
pub use instr::{Instruction, InstructionFlags};
pub use isa_extension::IsaExtension;
pub use isa_version::IsaVersion;
pub use opcodes::Opcode;
