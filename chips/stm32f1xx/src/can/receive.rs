// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

use embedded_can::StandardId;

use super::frame::Frame;
use super::registers::{CAN_RDTxR, CAN_RF0R, CAN_RIxR};
use super::{Can, Normal};
use crate::utilities::registers::interfaces::{Readable, Writeable};

/// The most frames [`Can::available`] reports.
pub const RX_FIFO_DEPTH: usize = 2;

impl Can<Normal> {
    /// Number of frames waiting in receive FIFO 0, at most
    /// [`RX_FIFO_DEPTH`].
    pub fn available(&self) -> usize {
        (self.registers.can_rf0r.read(CAN_RF0R::FMP0) as usize).min(RX_FIFO_DEPTH)
    }

    /// Copy the oldest frame of FIFO 0 into `frame` and release it.
    ///
    /// The FIFO must not be empty, check [`Can::available`] first. On an
    /// empty FIFO the contents of the output mailbox are returned
    /// unchanged and the release is ignored by the hardware.
    pub fn receive(&self, frame: &mut Frame) {
        let mailbox = &self.registers.can_rx_mailbox[0];

        // STID is 11 bits wide, so it is always a valid standard id
        let id = mailbox.can_rir.read(CAN_RIxR::STID) as u16;
        frame.id = StandardId::new(id).unwrap_or(StandardId::ZERO);
        frame.len = mailbox.can_rdtr.read(CAN_RDTxR::DLC) as u8;

        let low = mailbox.can_rdlr.get().to_le_bytes();
        let high = mailbox.can_rdhr.get().to_le_bytes();
        frame.data[..4].copy_from_slice(&low);
        frame.data[4..].copy_from_slice(&high);

        // release the output mailbox, the next frame moves up
        self.registers.can_rf0r.write(CAN_RF0R::RFOM0::SET);

        trace!("can: received id {} len {}", id, frame.len);
    }
}
