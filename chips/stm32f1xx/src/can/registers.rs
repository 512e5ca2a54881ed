// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! bxCAN register map (RM0008, Section 24.9).

use crate::utilities::registers::{register_bitfields, register_structs, ReadWrite};

pub const TX_MAILBOX_COUNT: usize = 3;
pub const RX_MAILBOX_COUNT: usize = 2;
/// 28 filter banks, two 32-bit registers (FR1, FR2) each.
pub const FILTER_REGISTER_COUNT: usize = 56;

register_structs! {
    pub Registers {
        /// CAN master control register
        (0x000 => pub(crate) can_mcr: ReadWrite<u32, CAN_MCR::Register>),
        /// CAN master status register
        (0x004 => pub(crate) can_msr: ReadWrite<u32, CAN_MSR::Register>),
        /// CAN transmit status register
        (0x008 => pub(crate) can_tsr: ReadWrite<u32>),
        /// CAN receive FIFO 0 register
        (0x00c => pub(crate) can_rf0r: ReadWrite<u32, CAN_RF0R::Register>),
        /// CAN receive FIFO 1 register
        (0x010 => pub(crate) can_rf1r: ReadWrite<u32>),
        /// CAN interrupt enable register
        (0x014 => pub(crate) can_ier: ReadWrite<u32>),
        /// CAN error status register
        (0x018 => pub(crate) can_esr: ReadWrite<u32, CAN_ESR::Register>),
        /// CAN bit timing register
        (0x01c => pub(crate) can_btr: ReadWrite<u32, CAN_BTR::Register>),
        (0x020 => _reserved0),
        /// CAN TX mailboxes 0-2
        (0x180 => pub(crate) can_tx_mailbox: [TransmitMailBox; TX_MAILBOX_COUNT]),
        /// CAN RX FIFO 0 and FIFO 1 output mailboxes
        (0x1b0 => pub(crate) can_rx_mailbox: [ReceiveMailBox; RX_MAILBOX_COUNT]),
        (0x1d0 => _reserved1),
        /// CAN filter master register
        (0x200 => pub(crate) can_fmr: ReadWrite<u32, CAN_FMR::Register>),
        /// CAN filter mode register, one bit per bank (0: mask, 1: list)
        (0x204 => pub(crate) can_fm1r: ReadWrite<u32, CAN_FM1R::Register>),
        (0x208 => _reserved2),
        /// CAN filter scale register, one bit per bank (0: 16-bit, 1: 32-bit)
        (0x20c => pub(crate) can_fs1r: ReadWrite<u32, CAN_FS1R::Register>),
        (0x210 => _reserved3),
        /// CAN filter FIFO assignment register, one bit per bank
        (0x214 => pub(crate) can_ffa1r: ReadWrite<u32, CAN_FFA1R::Register>),
        (0x218 => _reserved4),
        /// CAN filter activation register, one bit per bank
        (0x21c => pub(crate) can_fa1r: ReadWrite<u32, CAN_FA1R::Register>),
        (0x220 => _reserved5),
        /// Filter banks 0-27, registers FR1 and FR2 interleaved
        (0x240 => pub(crate) can_firx: [ReadWrite<u32, CAN_FiRx::Register>; FILTER_REGISTER_COUNT]),
        (0x320 => @END),
    },

    pub TransmitMailBox {
        (0x00 => pub(crate) can_tir: ReadWrite<u32, CAN_TIxR::Register>),
        (0x04 => pub(crate) can_tdtr: ReadWrite<u32, CAN_TDTxR::Register>),
        (0x08 => pub(crate) can_tdlr: ReadWrite<u32>),
        (0x0c => pub(crate) can_tdhr: ReadWrite<u32>),
        (0x010 => @END),
    },

    pub ReceiveMailBox {
        (0x00 => pub(crate) can_rir: ReadWrite<u32, CAN_RIxR::Register>),
        (0x04 => pub(crate) can_rdtr: ReadWrite<u32, CAN_RDTxR::Register>),
        (0x08 => pub(crate) can_rdlr: ReadWrite<u32>),
        (0x0c => pub(crate) can_rdhr: ReadWrite<u32>),
        (0x010 => @END),
    }
}

register_bitfields![u32,
    pub(crate) CAN_MCR [
        /// Debug freeze
        DBF OFFSET(16) NUMBITS(1) [],
        /// bxCAN software master reset
        RESET OFFSET(15) NUMBITS(1) [],
        /// Time triggered communication mode
        TTCM OFFSET(7) NUMBITS(1) [],
        /// Automatic bus-off management
        ABOM OFFSET(6) NUMBITS(1) [],
        /// Automatic wakeup mode
        AWUM OFFSET(5) NUMBITS(1) [],
        /// No automatic retransmission
        NART OFFSET(4) NUMBITS(1) [],
        /// Receive FIFO locked mode
        RFLM OFFSET(3) NUMBITS(1) [],
        /// Transmit FIFO priority
        TXFP OFFSET(2) NUMBITS(1) [],
        /// Sleep mode request
        SLEEP OFFSET(1) NUMBITS(1) [],
        /// Initialization request
        INRQ OFFSET(0) NUMBITS(1) []
    ],
    pub(crate) CAN_MSR [
        /// Sleep acknowledge
        SLAK OFFSET(1) NUMBITS(1) [],
        /// Initialization acknowledge
        INAK OFFSET(0) NUMBITS(1) []
    ],
    pub(crate) CAN_RF0R [
        /// Release FIFO 0 output mailbox
        RFOM0 OFFSET(5) NUMBITS(1) [],
        /// FIFO 0 overrun
        FOVR0 OFFSET(4) NUMBITS(1) [],
        /// FIFO 0 full
        FULL0 OFFSET(3) NUMBITS(1) [],
        /// FIFO 0 message pending
        FMP0 OFFSET(0) NUMBITS(2) []
    ],
    pub(crate) CAN_ESR [
        /// Receive error counter
        REC OFFSET(24) NUMBITS(8) [],
        /// Least significant byte of the 9-bit transmit error counter
        TEC OFFSET(16) NUMBITS(8) [],
        /// Last error code
        LEC OFFSET(4) NUMBITS(3) [
            NoError = 0,
            StuffError = 1,
            FormError = 2,
            AcknowledgmentError = 3,
            BitRecessiveError = 4,
            BitDominantError = 5,
            CrcError = 6,
            SetBySoftware = 7
        ],
        /// Bus-off flag
        BOFF OFFSET(2) NUMBITS(1) [],
        /// Error passive flag
        EPVF OFFSET(1) NUMBITS(1) [],
        /// Error warning flag
        EWGF OFFSET(0) NUMBITS(1) []
    ],
    pub(crate) CAN_BTR [
        /// Silent mode (debug)
        SILM OFFSET(31) NUMBITS(1) [],
        /// Loop back mode (debug)
        LBKM OFFSET(30) NUMBITS(1) [],
        /// Resynchronization jump width, in quanta minus one
        SJW OFFSET(24) NUMBITS(2) [],
        /// Time segment 2, in quanta minus one
        TS2 OFFSET(20) NUMBITS(3) [],
        /// Time segment 1, in quanta minus one
        TS1 OFFSET(16) NUMBITS(4) [],
        /// Baud rate prescaler, minus one
        BRP OFFSET(0) NUMBITS(10) []
    ],
    pub(crate) CAN_TIxR [
        /// Standard identifier or extended identifier
        STID OFFSET(21) NUMBITS(11) [],
        /// Extended identifier
        EXID OFFSET(3) NUMBITS(18) [],
        /// Identifier extension
        IDE OFFSET(2) NUMBITS(1) [],
        /// Remote transmission request
        RTR OFFSET(1) NUMBITS(1) [],
        /// Transmit mailbox request
        TXRQ OFFSET(0) NUMBITS(1) []
    ],
    pub(crate) CAN_TDTxR [
        /// Message time stamp
        TIME OFFSET(16) NUMBITS(16) [],
        /// Transmit global time
        TGT OFFSET(8) NUMBITS(1) [],
        /// Data length code
        DLC OFFSET(0) NUMBITS(4) []
    ],
    pub(crate) CAN_RIxR [
        /// Standard identifier or extended identifier
        STID OFFSET(21) NUMBITS(11) [],
        /// Extended identifier
        EXID OFFSET(3) NUMBITS(18) [],
        /// Identifier extension
        IDE OFFSET(2) NUMBITS(1) [],
        /// Remote transmission request
        RTR OFFSET(1) NUMBITS(1) []
    ],
    pub(crate) CAN_RDTxR [
        /// Message time stamp
        TIME OFFSET(16) NUMBITS(16) [],
        /// Filter match index
        FMI OFFSET(8) NUMBITS(8) [],
        /// Data length code
        DLC OFFSET(0) NUMBITS(4) []
    ],
    pub(crate) CAN_FMR [
        /// CAN2 start bank (connectivity line only)
        CAN2SB OFFSET(8) NUMBITS(6) [],
        /// Filter initialization mode
        FINIT OFFSET(0) NUMBITS(1) []
    ],
    pub(crate) CAN_FM1R [
        /// Filter mode
        FBM OFFSET(0) NUMBITS(28) []
    ],
    pub(crate) CAN_FS1R [
        /// Filter scale configuration
        FSC OFFSET(0) NUMBITS(28) []
    ],
    pub(crate) CAN_FFA1R [
        /// Filter FIFO assignment for filter x
        FFA OFFSET(0) NUMBITS(28) []
    ],
    pub(crate) CAN_FA1R [
        /// Filter active
        FACT OFFSET(0) NUMBITS(28) []
    ],
    pub(crate) CAN_FiRx [
        /// Filter bits
        FB OFFSET(0) NUMBITS(32) []
    ]
];
