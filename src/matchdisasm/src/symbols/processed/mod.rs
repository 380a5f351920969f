/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

pub mod data_sym_processed;
pub mod function_sym_processed;
pub mod noload_sym_processed;

pub use data_sym_processed::DataSymProcessed;
pub use function_sym_processed::FunctionSymProcessed;
pub use noload_sym_processed::NoloadSymProcessed;
