// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

use super::frame::Frame;
use super::registers::{CAN_TDTxR, CAN_TIxR};
use super::{Can, Normal};
use crate::errorcode::ErrorCode;
use crate::utilities::poll::{wait_for, Bound};
use crate::utilities::registers::interfaces::{ReadWriteable, Readable, Writeable};

/// How many times [`Can::transmit`] checks the mailbox before giving up,
/// unless [`Config::transmit_poll_limit`] says otherwise.
///
/// [`Config::transmit_poll_limit`]: super::Config::transmit_poll_limit
pub const TX_POLL_LIMIT: usize = 1_000_000;

impl Can<Normal> {
    /// Send `frame` through transmit mailbox 0 and wait for the hardware
    /// to take it.
    ///
    /// Only the low 4 bits of `frame.len` reach the DLC field. A request
    /// still pending from an earlier call is overwritten.
    ///
    /// Returns `Err(ErrorCode::BUSY)` if the request did not complete within
    /// the configured number of checks, [`TX_POLL_LIMIT`] by default. The
    /// request is left in the mailbox.
    pub fn transmit(&self, frame: &Frame) -> Result<(), ErrorCode> {
        let mailbox = &self.registers.can_tx_mailbox[0];
        let data = &frame.data;

        // standard identifier data frame, clears IDE, RTR and TXRQ
        mailbox
            .can_tir
            .write(CAN_TIxR::STID.val(u32::from(frame.id.as_raw())));
        mailbox
            .can_tdtr
            .modify(CAN_TDTxR::DLC.val(u32::from(frame.len) & 0xf));
        mailbox
            .can_tdlr
            .set(u32::from_le_bytes([data[0], data[1], data[2], data[3]]));
        mailbox
            .can_tdhr
            .set(u32::from_le_bytes([data[4], data[5], data[6], data[7]]));

        // request the transmission
        mailbox.can_tir.modify(CAN_TIxR::TXRQ::SET);

        // TXRQ is cleared by hardware once the mailbox is empty again
        if wait_for(Bound::Polls(self.state.config.transmit_poll_limit), || {
            !mailbox.can_tir.is_set(CAN_TIxR::TXRQ)
        }) {
            trace!("can: sent id {} len {}", frame.id.as_raw(), frame.len);
            Ok(())
        } else {
            warn!("can: transmit of id {} timed out", frame.id.as_raw());
            Err(ErrorCode::BUSY)
        }
    }
}
