// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Busy-wait polling of hardware status flags.

/// How long [`wait_for`] may poll before giving up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bound {
    /// Poll until the condition holds, however long that takes.
    Unbounded,
    /// Evaluate the condition at most this many times.
    Polls(usize),
}

/// This function is used for busy waiting and checks if the closure
/// received as an argument returns a true value within `bound`.
///
/// Returns `true` as soon as `f` does. With [`Bound::Polls`] returns
/// `false` once the poll budget is spent; with [`Bound::Unbounded`] it only
/// ever returns `true`, or never returns.
///
/// Usage: check if the INAK bit in the CAN_MSR is set, at most 200_000 times.
/// ```ignore
///    wait_for(Bound::Polls(200_000), || registers.can_msr.is_set(CAN_MSR::INAK))
/// ```
pub fn wait_for(bound: Bound, f: impl Fn() -> bool) -> bool {
    match bound {
        Bound::Unbounded => loop {
            if f() {
                return true;
            }
            core::hint::spin_loop();
        },
        Bound::Polls(times) => {
            for _ in 0..times {
                if f() {
                    return true;
                }
            }

            false
        }
    }
}
