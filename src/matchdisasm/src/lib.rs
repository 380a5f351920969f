/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

#![warn(clippy::ref_option)]
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
extern crate alloc;

pub mod addresses;
pub mod isa;
pub mod parent_segment_info;
pub mod section_type;
pub mod str_decoding;
pub mod sym_file;

pub mod analysis;
pub mod config;
pub mod context;
pub mod metadata;
pub mod migration;
pub mod relocation;
pub mod sections;
pub mod symbols;

pub mod collections;
