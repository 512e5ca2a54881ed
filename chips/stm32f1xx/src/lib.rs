// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Peripheral implementations for the STM32F1xx MCU.
//!
//! STM32F103: <https://www.st.com/en/microcontrollers-microprocessors/stm32f103.html>
//!
//! Only the bxCAN controller is provided. Clock gating (RCC) and pin
//! multiplexing (GPIO/AFIO) are owned by the board, which must enable the
//! CAN clock and configure the RX/TX pins before handing the registers to
//! [`can::Can::new`].

#![crate_name = "stm32f1xx"]
#![crate_type = "rlib"]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod can;
pub mod can_registers;
pub mod errorcode;
pub mod utilities;

pub use crate::errorcode::ErrorCode;
