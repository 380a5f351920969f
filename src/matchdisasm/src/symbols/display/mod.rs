/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

mod function_display;
mod sym_data_display;
mod sym_noload_display;

pub use function_display::{FunctionDisplay, FunctionDisplaySettings};
pub use sym_data_display::{SymDataDisplay, SymDataDisplaySettings};
pub use sym_noload_display::{SymNoloadDisplay, SymNoloadDisplaySettings};
