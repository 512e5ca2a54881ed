// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Start-up configuration applied by [`Can::initialize_with`].
//!
//! [`Can::initialize_with`]: super::Can::initialize_with

use super::bit_timing::Bitrate;
use super::transmit::TX_POLL_LIMIT;

/// The peripheral can be configured to work in the following modes:
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperationMode {
    /// Normal mode means that the transmission and reception of frames
    /// are available
    Normal,

    /// Loopback mode means that each message is transmitted on the
    /// TX channel and immediately received on the RX channel
    Loopback,

    /// Monitoring mode means that the CAN peripheral sends only the recessive
    /// bits on the bus and cannot start a transmission, but can receive
    /// valid data frames and valid remote frames
    Monitoring,

    /// Loopback and monitoring combined: frames are looped back internally
    /// and nothing is driven onto the bus
    MonitoringLoopback,
}

impl OperationMode {
    pub(crate) fn loopback(self) -> bool {
        match self {
            OperationMode::Loopback | OperationMode::MonitoringLoopback => true,
            OperationMode::Normal | OperationMode::Monitoring => false,
        }
    }

    pub(crate) fn silent(self) -> bool {
        match self {
            OperationMode::Monitoring | OperationMode::MonitoringLoopback => true,
            OperationMode::Normal | OperationMode::Loopback => false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub bitrate: Bitrate,
    pub operation_mode: OperationMode,
    /// Retransmit frames that lost arbitration or were not acknowledged
    pub automatic_retransmission: bool,
    /// Leave bus-off automatically after 128 × 11 recessive bits
    pub automatic_bus_off: bool,
    /// Mailbox checks before [`Can::transmit`] reports `BUSY`
    ///
    /// [`Can::transmit`]: super::Can::transmit
    pub transmit_poll_limit: usize,
}

impl Config {
    /// Normal operation at `bitrate`, single-shot transmission, automatic
    /// bus-off recovery and a transmit bound of [`TX_POLL_LIMIT`].
    pub const fn new(bitrate: Bitrate) -> Config {
        Config {
            bitrate,
            operation_mode: OperationMode::Normal,
            automatic_retransmission: false,
            automatic_bus_off: true,
            transmit_poll_limit: TX_POLL_LIMIT,
        }
    }

    pub const fn with_operation_mode(mut self, operation_mode: OperationMode) -> Config {
        self.operation_mode = operation_mode;
        self
    }

    pub const fn with_automatic_retransmission(mut self, automatic: bool) -> Config {
        self.automatic_retransmission = automatic;
        self
    }

    pub const fn with_automatic_bus_off(mut self, automatic: bool) -> Config {
        self.automatic_bus_off = automatic;
        self
    }

    pub const fn with_transmit_poll_limit(mut self, polls: usize) -> Config {
        self.transmit_poll_limit = polls;
        self
    }
}

impl From<Bitrate> for Config {
    fn from(bitrate: Bitrate) -> Self {
        Config::new(bitrate)
    }
}
