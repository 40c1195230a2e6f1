// SPDX-FileCopyrightText: 2025 Adventure Physics Swap Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

/// Represents a continuous block of memory which is not owned, and comes either from an in-memory location or from a file.
pub type ByteSpan<'a> = &'a [u8];

/// Represents a continuous block of memory which is owned.
pub type ByteBuffer = Vec<u8>;

#[macro_use]
mod macros;

/// The unified character list and the per-game rosters that map into it.
pub mod character;

/// The physics parameter block used by every playable character.
pub mod physics;

/// Reading and writing binary physics tables (DefaultPhysics.bin).
pub mod table;

/// Locating the default physics file on disk.
pub mod discovery;

/// The user configuration, which decides which physics each character uses.
pub mod config;

/// Errors returned by this crate.
pub mod error;

pub use error::Error;
