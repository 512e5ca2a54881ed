// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Polling driver for the bxCAN controller of the STM32F1xx chips.
//!
//! The driver owns the register block through a [`Can`] handle whose type
//! parameter records the peripheral mode. A fresh handle is
//! [`Can<Uninitialized>`]; [`Can::initialize`] consumes it, programs the
//! controller and returns a [`Can<Normal>`], the only handle on which frames
//! can be sent, received or filtered.
//!
//! Usage
//! -----
//!
//! ```rust,ignore
//! use stm32f1xx::can::{Bitrate, Can, Frame, StandardId};
//! use stm32f1xx::can_registers::CAN1_BASE;
//!
//! // the board enables the CAN clock and configures the pins first
//! let mut can = Can::new(CAN1_BASE).initialize(Bitrate::Kbps500);
//! can.allocate_filter(StandardId::new(0x123).unwrap());
//!
//! let frame = Frame::new(StandardId::new(0x321).unwrap(), &[1, 2, 3]).unwrap();
//! can.transmit(&frame)?;
//!
//! let mut reply = Frame::empty();
//! if can.available() > 0 {
//!     can.receive(&mut reply);
//! }
//! ```
//!
//! Only standard identifiers, transmit mailbox 0 and receive FIFO 0 are
//! used. There are no interrupts; every operation busy-waits on the
//! hardware.

use crate::errorcode::ErrorCode;
use crate::utilities::poll::{wait_for, Bound};
use crate::utilities::registers::interfaces::{ReadWriteable, Readable, Writeable};
use crate::utilities::StaticRef;

pub mod bit_timing;
pub mod config;
mod filter;
pub mod frame;
mod receive;
mod registers;
mod status;
mod transmit;


pub use self::bit_timing::{Bitrate, BitrateProfile};
pub use self::config::{Config, OperationMode};
pub use self::filter::{FILTER_BANK_COUNT, FILTER_SLOT_COUNT, SLOTS_PER_BANK};
pub use self::frame::Frame;
pub use self::receive::RX_FIFO_DEPTH;
pub use self::registers::Registers;
pub use self::status::{Error, State};
pub use self::transmit::TX_POLL_LIMIT;
pub use embedded_can::StandardId;

use self::filter::FilterBankAllocator;
use self::registers::{CAN_BTR, CAN_MCR, CAN_MSR};

/// The modes the controller goes through.
///
/// `Initializing` and `FilterConfiguration` only last for the duration of
/// [`Can::initialize`] and [`Can::allocate_filter`]. [`Can::mode`] never
/// reports them: a handle is always observed as `Uninitialized` or
/// `Normal`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeripheralMode {
    Uninitialized,
    Initializing,
    FilterConfiguration,
    Normal,
}

mod sealed {
    pub trait Sealed {}
}

/// Type-level peripheral mode of a [`Can`] handle.
pub trait Mode: sealed::Sealed {
    const MODE: PeripheralMode;
}

/// The controller has not been programmed by this driver yet.
pub struct Uninitialized;

/// The controller takes part in bus activity.
pub struct Normal {
    config: Config,
    filters: FilterBankAllocator,
}

impl sealed::Sealed for Uninitialized {}
impl sealed::Sealed for Normal {}

impl Mode for Uninitialized {
    const MODE: PeripheralMode = PeripheralMode::Uninitialized;
}

impl Mode for Normal {
    const MODE: PeripheralMode = PeripheralMode::Normal;
}

pub struct Can<M: Mode = Uninitialized> {
    registers: StaticRef<Registers>,
    state: M,
}

impl<M: Mode> Can<M> {
    /// The mode recorded in the handle type.
    pub fn mode(&self) -> PeripheralMode {
        M::MODE
    }
}

impl Can<Uninitialized> {
    /// Take over the controller at `registers`.
    ///
    /// Create a single handle per peripheral. [`StaticRef`] is `Copy`, so
    /// nothing stops a second handle on the same block, but the two would
    /// keep separate filter cursors and overwrite each other's banks.
    pub const fn new(registers: StaticRef<Registers>) -> Can<Uninitialized> {
        Can {
            registers,
            state: Uninitialized,
        }
    }

    /// Start the controller at `bitrate` with the default [`Config`].
    ///
    /// See [`Can::initialize_with`].
    pub fn initialize(self, bitrate: Bitrate) -> Can<Normal> {
        self.initialize_with(Config::new(bitrate))
    }

    /// Program the controller and bring it into normal mode.
    ///
    /// The bit timing comes from the pre-computed table, so the CAN clock
    /// must run at [`bit_timing::PCLK1_HZ`]. Filter bank 0 is set up to
    /// accept every frame into FIFO 0; [`Can::allocate_filter`] narrows
    /// that down.
    ///
    /// The mode changes are acknowledged by the hardware and this function
    /// waits for the acknowledgement without a timeout. If the peripheral
    /// clock is not enabled, or the RX pin never sees the recessive level
    /// needed to synchronize with the bus, it never returns.
    pub fn initialize_with(self, config: Config) -> Can<Normal> {
        debug!("can: uninitialized -> initializing");
        self.enter_initialization_mode(&config);
        self.program_bit_timing(&config);
        filter::install_accept_all(&self.registers);
        self.enter_normal_mode();
        debug!("can: initializing -> normal");

        Can {
            registers: self.registers,
            state: Normal {
                config,
                filters: FilterBankAllocator::new(),
            },
        }
    }

    fn enter_initialization_mode(&self, config: &Config) {
        // an absolute write: leaves sleep mode and sets the communication
        // mode in the same access as the initialization request
        self.registers.can_mcr.write(
            CAN_MCR::INRQ::SET
                + CAN_MCR::NART.val(u32::from(!config.automatic_retransmission))
                + CAN_MCR::ABOM.val(u32::from(config.automatic_bus_off)),
        );

        // the peripheral acknowledges by setting INAK (RM0008, 24.4.1)
        wait_for(Bound::Unbounded, || {
            self.registers.can_msr.is_set(CAN_MSR::INAK)
        });
    }

    fn program_bit_timing(&self, config: &Config) {
        let profile = config.bitrate.profile();
        trace!(
            "can: bit timing ts1={} ts2={} brp={}",
            profile.ts1,
            profile.ts2,
            profile.prescaler
        );

        // every field is stored as its value minus one
        self.registers.can_btr.write(
            CAN_BTR::SILM.val(u32::from(config.operation_mode.silent()))
                + CAN_BTR::LBKM.val(u32::from(config.operation_mode.loopback()))
                + CAN_BTR::SJW.val(0)
                + CAN_BTR::TS2.val(u32::from(profile.ts2) - 1)
                + CAN_BTR::TS1.val(u32::from(profile.ts1) - 1)
                + CAN_BTR::BRP.val(u32::from(profile.prescaler) - 1),
        );
    }

    fn enter_normal_mode(&self) {
        self.registers.can_mcr.modify(CAN_MCR::INRQ::CLEAR);

        // INAK clears once 11 consecutive recessive bits were seen on RX
        wait_for(Bound::Unbounded, || {
            !self.registers.can_msr.is_set(CAN_MSR::INAK)
        });
    }
}

impl Can<Normal> {
    /// The configuration the controller was started with.
    pub fn config(&self) -> &Config {
        &self.state.config
    }
}

impl embedded_can::blocking::Can for Can<Normal> {
    type Frame = Frame;
    type Error = ErrorCode;

    fn transmit(&mut self, frame: &Self::Frame) -> Result<(), Self::Error> {
        Can::<Normal>::transmit(self, frame)
    }

    /// Blocks until FIFO 0 holds a frame.
    fn receive(&mut self) -> Result<Self::Frame, Self::Error> {
        wait_for(Bound::Unbounded, || self.available() > 0);

        let mut frame = Frame::empty();
        Can::<Normal>::receive(self, &mut frame);
        Ok(frame)
    }
}
