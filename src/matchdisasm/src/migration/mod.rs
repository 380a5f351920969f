/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

pub mod func_rodata_migration;
mod pairing_display;
mod pairing_error;

pub use func_rodata_migration::FuncRodataPairing;
pub use pairing_display::FuncRodataPairingDisplay;
pub use pairing_error::PairingError;
