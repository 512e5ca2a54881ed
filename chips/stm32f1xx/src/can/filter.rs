// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Acceptance filter programming.
//!
//! Every bank is used in 16-bit identifier list mode, which fits four
//! standard identifiers: two in FR1 and two in FR2. A 16-bit filter entry
//! holds the identifier in bits 5 to 15, so the low half of a register is
//! `id << 5` and the high half is `id << 21`. When a bank is opened, both
//! halves of both registers hold the first identifier; the next
//! allocations overwrite the copies one half at a time.
//!
//! | slot | register | half | written as                  |
//! |------|----------|------|-----------------------------|
//! | 0    | FR1, FR2 | both | `(id << 5) \| (id << 21)`   |
//! | 1    | FR1      | high | low half kept               |
//! | 2    | FR2      | both | `(id << 5) \| (id << 21)`   |
//! | 3    | FR2      | high | low half kept               |

use embedded_can::StandardId;

use super::registers::{Registers, CAN_FA1R, CAN_FFA1R, CAN_FM1R, CAN_FMR, CAN_FS1R};
use super::{Can, Normal};
use crate::utilities::registers::interfaces::{ReadWriteable, Readable, Writeable};

pub const FILTER_BANK_COUNT: usize = 28;
pub const SLOTS_PER_BANK: usize = 4;
pub const FILTER_SLOT_COUNT: usize = FILTER_BANK_COUNT * SLOTS_PER_BANK;

const LOW_HALF: u32 = 0x0000_FFFF;

/// Hands out filter slots in order, bank by bank.
pub(crate) struct FilterBankAllocator {
    cursor: usize,
}

impl FilterBankAllocator {
    pub(crate) const fn new() -> FilterBankAllocator {
        FilterBankAllocator { cursor: 0 }
    }

    pub(crate) fn allocated(&self) -> usize {
        self.cursor
    }

    pub(crate) fn is_full(&self) -> bool {
        self.cursor >= FILTER_SLOT_COUNT
    }

    /// Program the next free slot with `id`. Does nothing once all slots
    /// are taken.
    pub(crate) fn allocate(&mut self, registers: &Registers, id: StandardId) {
        if self.is_full() {
            trace!("can: no free filter slot for id {}", id.as_raw());
            return;
        }

        let bank = self.cursor / SLOTS_PER_BANK;
        let slot = self.cursor % SLOTS_PER_BANK;
        let id = u32::from(id.as_raw());
        let pair = (id << 5) | (id << 21);
        let fr1 = &registers.can_firx[bank * 2];
        let fr2 = &registers.can_firx[bank * 2 + 1];

        // start filter configuration
        registers.can_fmr.modify(CAN_FMR::FINIT::SET);

        match slot {
            0 => {
                let bank_bit = 1u32 << bank;

                // identifier list mode
                registers
                    .can_fm1r
                    .modify(CAN_FM1R::FBM.val(registers.can_fm1r.read(CAN_FM1R::FBM) | bank_bit));
                // dual 16-bit scale
                registers
                    .can_fs1r
                    .modify(CAN_FS1R::FSC.val(registers.can_fs1r.read(CAN_FS1R::FSC) & !bank_bit));
                // matches go to FIFO 0
                registers.can_ffa1r.modify(
                    CAN_FFA1R::FFA.val(registers.can_ffa1r.read(CAN_FFA1R::FFA) & !bank_bit),
                );

                fr1.set(pair);
                fr2.set(pair);

                registers
                    .can_fa1r
                    .modify(CAN_FA1R::FACT.val(registers.can_fa1r.read(CAN_FA1R::FACT) | bank_bit));
            }
            1 => fr1.set((fr1.get() & LOW_HALF) | (id << 21)),
            2 => fr2.set(pair),
            _ => fr2.set((fr2.get() & LOW_HALF) | (id << 21)),
        }

        trace!("can: filter bank {} slot {} <- id {}", bank, slot, id);
        self.cursor += 1;

        // activate the filter configuration
        registers.can_fmr.modify(CAN_FMR::FINIT::CLEAR);
    }
}

/// Bank 0 in 32-bit mask mode with an all-zero mask, routed to FIFO 0.
/// Every frame passes until identifier slots are allocated.
///
/// All banks are assigned to CAN1. Connectivity line parts reset with
/// banks 14 to 27 belonging to CAN2.
pub(crate) fn install_accept_all(registers: &Registers) {
    let bank_bit = 1u32;

    registers.can_fmr.modify(CAN_FMR::FINIT::SET);
    registers
        .can_fmr
        .modify(CAN_FMR::CAN2SB.val(FILTER_BANK_COUNT as u32));

    registers
        .can_fa1r
        .modify(CAN_FA1R::FACT.val(registers.can_fa1r.read(CAN_FA1R::FACT) & !bank_bit));
    registers
        .can_fs1r
        .modify(CAN_FS1R::FSC.val(registers.can_fs1r.read(CAN_FS1R::FSC) | bank_bit));

    registers.can_firx[0].set(0);
    registers.can_firx[1].set(0);

    registers
        .can_fm1r
        .modify(CAN_FM1R::FBM.val(registers.can_fm1r.read(CAN_FM1R::FBM) & !bank_bit));
    registers
        .can_ffa1r
        .modify(CAN_FFA1R::FFA.val(registers.can_ffa1r.read(CAN_FFA1R::FFA) & !bank_bit));
    registers
        .can_fa1r
        .modify(CAN_FA1R::FACT.val(registers.can_fa1r.read(CAN_FA1R::FACT) | bank_bit));

    registers.can_fmr.modify(CAN_FMR::FINIT::CLEAR);
}

impl Can<Normal> {
    /// Accept frames with identifier `id` into FIFO 0.
    ///
    /// Slots are never released and duplicates are not detected. After
    /// [`FILTER_SLOT_COUNT`] allocations further calls are ignored.
    ///
    /// The first allocation reuses bank 0, replacing the accept-all filter
    /// installed by [`Can::initialize`].
    pub fn allocate_filter(&mut self, id: StandardId) {
        self.state.filters.allocate(&self.registers, id);
    }

    /// Allocate `ids` in order, stopping when the slots run out.
    pub fn allocate_filters(&mut self, ids: &[StandardId]) {
        for &id in ids {
            if self.state.filters.is_full() {
                trace!("can: filter slots exhausted");
                break;
            }
            self.allocate_filter(id);
        }
    }

    /// Number of filter slots taken so far.
    pub fn filters_allocated(&self) -> usize {
        self.state.filters.allocated()
    }
}
