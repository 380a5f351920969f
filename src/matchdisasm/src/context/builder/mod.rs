/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

mod builder_errors;
mod context_builder;

pub use builder_errors::{AddOverlayError, AddUserSymbolError};
pub use context_builder::{ContextBuilder, UserSymbolAttributes};
