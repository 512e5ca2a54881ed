// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Standard error enum for invoking operations

/// Standard errors in Tock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(usize)]
pub enum ErrorCode {
    /// Generic failure condition
    FAIL = 0,
    /// Underlying system is busy; retry
    BUSY = 1,
    /// The state requested is already set
    ALREADY = 2,
    /// The component is powered down
    OFF = 3,
    /// Reservation required before use
    RESERVE = 4,
    /// An invalid parameter was passed
    INVAL = 5,
    /// Parameter passed was too large
    SIZE = 6,
    /// Operation canceled by a call
    CANCEL = 7,
    /// Memory required not available
    NOMEM = 8,
    /// Operation or command is unsupported
    NOSUPPORT = 9,
    /// Device does not exist
    NODEVICE = 10,
    /// Device is not physically installed
    UNINSTALLED = 11,
    /// Packet transmission not acknowledged
    NOACK = 12,
}

impl From<ErrorCode> for usize {
    fn from(err: ErrorCode) -> usize {
        err as usize
    }
}

impl embedded_can::Error for ErrorCode {
    fn kind(&self) -> embedded_can::ErrorKind {
        match self {
            ErrorCode::NOACK => embedded_can::ErrorKind::Acknowledge,
            ErrorCode::SIZE | ErrorCode::NOMEM => embedded_can::ErrorKind::Overrun,
            _ => embedded_can::ErrorKind::Other,
        }
    }
}
