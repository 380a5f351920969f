/* SPDX-FileCopyrightText: © 2024-2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

pub mod addended_ordered_map;
pub mod unordered_map;
pub mod unordered_set;

pub use addended_ordered_map::AddendedOrderedMap;
pub use unordered_map::UnorderedMap;
pub use unordered_set::UnorderedSet;
