// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Utility functions and macros provided by the chip crate.

pub mod poll;
mod static_ref;

pub use self::static_ref::StaticRef;

/// Re-export the tock-register-interface library.
pub mod registers {
    pub use tock_registers::interfaces;
    pub use tock_registers::registers::ReadWrite;
    pub use tock_registers::{register_bitfields, register_structs};
}
