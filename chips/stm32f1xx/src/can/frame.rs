// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Classic CAN data frame with a standard (11-bit) identifier.

use embedded_can::{Id, StandardId};

pub const STANDARD_CAN_PACKET_SIZE: usize = 8;

/// A data frame as moved through the transmit mailbox and receive FIFO.
///
/// The fields are public so a caller can reuse one frame as a receive
/// buffer. `len` is nominally 0 to 8; larger values are not rejected, the
/// transmitter keeps only its low 4 bits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub id: StandardId,
    pub data: [u8; STANDARD_CAN_PACKET_SIZE],
    pub len: u8,
}

impl Frame {
    pub const fn empty() -> Frame {
        Frame {
            id: StandardId::ZERO,
            data: [0; STANDARD_CAN_PACKET_SIZE],
            len: 0,
        }
    }

    /// Returns `None` if `data` is longer than 8 bytes.
    pub fn new(id: StandardId, data: &[u8]) -> Option<Frame> {
        if data.len() > STANDARD_CAN_PACKET_SIZE {
            return None;
        }

        let mut frame = Frame::empty();
        frame.id = id;
        frame.data[..data.len()].copy_from_slice(data);
        frame.len = data.len() as u8;
        Some(frame)
    }

    /// The valid part of the payload.
    pub fn data(&self) -> &[u8] {
        let len = usize::from(self.len).min(STANDARD_CAN_PACKET_SIZE);
        &self.data[..len]
    }
}

impl Default for Frame {
    fn default() -> Self {
        Frame::empty()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Frame {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Frame {{ id: {=u16:#x}, data: {=[u8]} }}", self.id.as_raw(), self.data());
    }
}

/// Remote frames and extended identifiers are not supported by this driver.
impl embedded_can::Frame for Frame {
    fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        match id.into() {
            Id::Standard(id) => Frame::new(id, data),
            Id::Extended(_) => None,
        }
    }

    fn new_remote(_id: impl Into<Id>, _dlc: usize) -> Option<Self> {
        None
    }

    fn is_extended(&self) -> bool {
        false
    }

    fn is_remote_frame(&self) -> bool {
        false
    }

    fn id(&self) -> Id {
        Id::Standard(self.id)
    }

    fn dlc(&self) -> usize {
        self.data().len()
    }

    fn data(&self) -> &[u8] {
        Frame::data(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(raw: u16) -> StandardId {
        StandardId::new(raw).unwrap()
    }

    #[test]
    fn new_copies_payload() {
        let frame = Frame::new(sid(0x123), &[1, 2, 3]).unwrap();
        assert_eq!(frame.id, sid(0x123));
        assert_eq!(frame.len, 3);
        assert_eq!(frame.data(), &[1, 2, 3]);
        assert_eq!(frame.data, [1, 2, 3, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn new_rejects_oversized_payload() {
        assert!(Frame::new(sid(1), &[0; 9]).is_none());
        assert!(Frame::new(sid(1), &[0; 8]).is_some());
    }

    #[test]
    fn data_is_clamped_to_payload_size() {
        let mut frame = Frame::new(sid(7), &[9; 8]).unwrap();
        frame.len = 15;
        assert_eq!(frame.data().len(), 8);
    }

    #[test]
    fn embedded_can_view() {
        use embedded_can::{ExtendedId, Frame as _};

        let frame = <Frame as embedded_can::Frame>::new(sid(0x7ff), &[0xaa, 0xbb]).unwrap();
        assert_eq!(frame.id(), Id::Standard(sid(0x7ff)));
        assert_eq!(frame.dlc(), 2);
        assert!(frame.is_standard());
        assert!(frame.is_data_frame());

        let extended = ExtendedId::new(0x1234_5678).unwrap();
        assert!(<Frame as embedded_can::Frame>::new(extended, &[]).is_none());
        assert!(<Frame as embedded_can::Frame>::new_remote(sid(1), 0).is_none());
    }
}
