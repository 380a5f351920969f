/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

mod cop0;
mod cop1;
mod cop2;
mod gpr;

pub use cop0::Cop0;
pub use cop1::Cop1;
pub use cop2::{GteControl, GteData, RspCop0, RspVector};
pub use gpr::Gpr;
