// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Pre-computed bit timings for the supported bus speeds.
//!
//! Every profile was derived offline for a 36 MHz APB1 clock, the maximum
//! for STM32F103 and the frequency the board is expected to provide. A bit
//! lasts `prescaler * (1 + ts1 + ts2)` APB1 cycles: one synchronization
//! quantum followed by the two time segments. All profiles sample at
//! 87.5% or 88.9% of the bit time.

/// The APB1 frequency the timing table was computed for.
pub const PCLK1_HZ: u32 = 36_000_000;

pub const TS1_MIN: u8 = 1;
pub const TS1_MAX: u8 = 16;
pub const TS2_MIN: u8 = 1;
pub const TS2_MAX: u8 = 8;
pub const BRP_MIN: u16 = 1;
pub const BRP_MAX: u16 = 1024;

/// Supported bus speeds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bitrate {
    Kbps50,
    Kbps100,
    Kbps125,
    Kbps250,
    Kbps500,
    Kbps1000,
}

/// Timing segment lengths for one bus speed, in time quanta.
///
/// These are the lengths themselves, not their register encoding: the
/// hardware stores each field as `value - 1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitrateProfile {
    /// Time segment 1 (propagation + phase 1), 1 to 16 quanta
    pub ts1: u8,
    /// Time segment 2 (phase 2), 1 to 8 quanta
    pub ts2: u8,
    /// APB1 cycles per time quantum, 1 to 1024
    pub prescaler: u16,
}

const PROFILES: [BitrateProfile; 6] = [
    // 50 kbit/s
    BitrateProfile {
        ts1: 13,
        ts2: 2,
        prescaler: 45,
    },
    // 100 kbit/s
    BitrateProfile {
        ts1: 15,
        ts2: 2,
        prescaler: 20,
    },
    // 125 kbit/s
    BitrateProfile {
        ts1: 13,
        ts2: 2,
        prescaler: 18,
    },
    // 250 kbit/s
    BitrateProfile {
        ts1: 13,
        ts2: 2,
        prescaler: 9,
    },
    // 500 kbit/s
    BitrateProfile {
        ts1: 15,
        ts2: 2,
        prescaler: 4,
    },
    // 1 Mbit/s
    BitrateProfile {
        ts1: 15,
        ts2: 2,
        prescaler: 2,
    },
];

impl Bitrate {
    pub const ALL: [Bitrate; 6] = [
        Bitrate::Kbps50,
        Bitrate::Kbps100,
        Bitrate::Kbps125,
        Bitrate::Kbps250,
        Bitrate::Kbps500,
        Bitrate::Kbps1000,
    ];

    /// The timing profile for this bus speed.
    pub const fn profile(self) -> BitrateProfile {
        PROFILES[self as usize]
    }

    /// Nominal bus speed in bit/s.
    pub const fn bits_per_second(self) -> u32 {
        match self {
            Bitrate::Kbps50 => 50_000,
            Bitrate::Kbps100 => 100_000,
            Bitrate::Kbps125 => 125_000,
            Bitrate::Kbps250 => 250_000,
            Bitrate::Kbps500 => 500_000,
            Bitrate::Kbps1000 => 1_000_000,
        }
    }
}

impl BitrateProfile {
    /// Time quanta per bit, including the synchronization segment.
    pub const fn quanta_per_bit(&self) -> u32 {
        1 + self.ts1 as u32 + self.ts2 as u32
    }

    /// The bus speed this profile produces from a `pclk_hz` peripheral clock.
    pub const fn bitrate(&self, pclk_hz: u32) -> u32 {
        pclk_hz / (self.prescaler as u32 * self.quanta_per_bit())
    }

    /// Whether every field fits its register.
    pub const fn is_valid(&self) -> bool {
        self.ts1 >= TS1_MIN
            && self.ts1 <= TS1_MAX
            && self.ts2 >= TS2_MIN
            && self.ts2 <= TS2_MAX
            && self.prescaler >= BRP_MIN
            && self.prescaler <= BRP_MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_in_register_range() {
        for bitrate in Bitrate::ALL {
            assert!(bitrate.profile().is_valid(), "{:?}", bitrate);
        }
    }

    #[test]
    fn profiles_match_nominal_rate() {
        for bitrate in Bitrate::ALL {
            let profile = bitrate.profile();
            let cycles = profile.prescaler as u32 * profile.quanta_per_bit();
            assert_eq!(PCLK1_HZ % cycles, 0, "{:?} does not divide evenly", bitrate);
            assert_eq!(profile.bitrate(PCLK1_HZ), bitrate.bits_per_second());
        }
    }

    #[test]
    fn lookup_is_stable() {
        for bitrate in Bitrate::ALL {
            assert_eq!(bitrate.profile(), bitrate.profile());
        }
        assert_eq!(
            Bitrate::Kbps500.profile(),
            BitrateProfile {
                ts1: 15,
                ts2: 2,
                prescaler: 4
            }
        );
        assert_eq!(
            Bitrate::Kbps50.profile(),
            BitrateProfile {
                ts1: 13,
                ts2: 2,
                prescaler: 45
            }
        );
    }

    #[test]
    fn sample_point_is_late_in_the_bit() {
        for bitrate in Bitrate::ALL {
            let profile = bitrate.profile();
            // (1 + ts1) / (1 + ts1 + ts2) >= 87.5%
            assert!(8 * (1 + profile.ts1 as u32) >= 7 * profile.quanta_per_bit());
        }
    }
}
