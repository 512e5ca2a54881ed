// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! CAN

use crate::can::Registers;
use crate::utilities::StaticRef;

/// bxCAN1 on the APB1 bus (RM0008, Table 3).
pub const CAN1_BASE: StaticRef<Registers> =
    unsafe { StaticRef::new(0x4000_6400 as *const Registers) };
