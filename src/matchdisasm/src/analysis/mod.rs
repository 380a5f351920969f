/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

mod gpr_register_value;
mod instruction_analysis_result;
mod instruction_analyzer;
mod register_tracker;
mod string_guesser;

pub(crate) use gpr_register_value::{GprRegDereferencedAddress, GprRegRawAddress, GprRegisterValue};
pub use instruction_analysis_result::{InstrAnalysisInfo, InstructionAnalysisResult};
pub use instruction_analyzer::InstructionAnalyzer;
pub(crate) use register_tracker::{InstrOpLink, InstrOpPairedAddress, InstructionOperation, RegisterTracker};
pub use string_guesser::{StringGuessError, StringGuesserLevel};
