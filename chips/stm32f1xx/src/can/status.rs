// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Bus state as reported by the error status register.

use super::registers::CAN_ESR;
use super::{Can, Normal};
use crate::errorcode::ErrorCode;
use crate::utilities::registers::interfaces::Readable;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// No error flag is raised and the last transfer succeeded
    Running,

    /// The error counters crossed a limit or the last transfer failed
    Error(Error),
}

/// Defines the error codes received from the CAN peripheral
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The internal Transmit Error Counter or the internal
    /// Receive Error Counter reached 96.
    Warning,

    /// The internal Transmit Error Counter or the internal
    /// Receive Error Counter is greater than 127 and the
    /// passive error state is entered.
    Passive,

    /// The internal Transmit Error Counter is greater than 255
    /// and the bus-off state is entered.
    BusOff,

    /// 6 consecutive bits of equal value are detected on the bus.
    Stuff,

    /// The form of the received or the transmitted frame is
    /// different than the standard format.
    Form,

    /// There are no receivers on the bus or the sender caused an
    /// error.
    Ack,

    /// While transmitting a recessive bit, the receiver sensed a
    /// dominant bit.
    BitRecessive,

    /// While transmitting a dominant bit, the receiver sensed a
    /// recessive bit.
    BitDominant,

    /// The frame has been corrupted on the CAN bus
    Crc,

    /// Set by software to force the hardware to indicate the
    /// current communication status.
    SetBySoftware,
}

impl From<Error> for ErrorCode {
    fn from(error: Error) -> ErrorCode {
        match error {
            Error::BusOff => ErrorCode::OFF,
            Error::Form => ErrorCode::INVAL,
            Error::BitRecessive | Error::BitDominant => ErrorCode::BUSY,
            Error::Ack => ErrorCode::NOACK,
            Error::Crc | Error::SetBySoftware | Error::Warning | Error::Passive | Error::Stuff => {
                ErrorCode::FAIL
            }
        }
    }
}

impl embedded_can::Error for Error {
    fn kind(&self) -> embedded_can::ErrorKind {
        match self {
            Error::Stuff => embedded_can::ErrorKind::Stuff,
            Error::Form => embedded_can::ErrorKind::Form,
            Error::Ack => embedded_can::ErrorKind::Acknowledge,
            Error::BitRecessive | Error::BitDominant => embedded_can::ErrorKind::Bit,
            Error::Crc => embedded_can::ErrorKind::Crc,
            Error::Warning | Error::Passive | Error::BusOff | Error::SetBySoftware => {
                embedded_can::ErrorKind::Other
            }
        }
    }
}

impl Can<Normal> {
    /// Current bus state.
    ///
    /// The fault confinement flags take precedence over the last error
    /// code: bus-off, then error passive, then error warning.
    pub fn state(&self) -> State {
        let esr = self.registers.can_esr.extract();

        let error = if esr.is_set(CAN_ESR::BOFF) {
            Some(Error::BusOff)
        } else if esr.is_set(CAN_ESR::EPVF) {
            Some(Error::Passive)
        } else if esr.is_set(CAN_ESR::EWGF) {
            Some(Error::Warning)
        } else {
            match esr.read_as_enum(CAN_ESR::LEC) {
                Some(CAN_ESR::LEC::Value::StuffError) => Some(Error::Stuff),
                Some(CAN_ESR::LEC::Value::FormError) => Some(Error::Form),
                Some(CAN_ESR::LEC::Value::AcknowledgmentError) => Some(Error::Ack),
                Some(CAN_ESR::LEC::Value::BitRecessiveError) => Some(Error::BitRecessive),
                Some(CAN_ESR::LEC::Value::BitDominantError) => Some(Error::BitDominant),
                Some(CAN_ESR::LEC::Value::CrcError) => Some(Error::Crc),
                Some(CAN_ESR::LEC::Value::SetBySoftware) => Some(Error::SetBySoftware),
                Some(CAN_ESR::LEC::Value::NoError) | None => None,
            }
        };

        error.map_or(State::Running, State::Error)
    }

    /// The transmit and receive error counters, in that order.
    ///
    /// Only the low 8 bits of the transmit counter are visible; a
    /// bus-off controller is reported by [`Can::state`].
    pub fn error_counters(&self) -> (u8, u8) {
        let esr = self.registers.can_esr.extract();
        (esr.read(CAN_ESR::TEC) as u8, esr.read(CAN_ESR::REC) as u8)
    }
}
