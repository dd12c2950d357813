use std::{fmt, str::FromStr};

use alloy_primitives::U256;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::UnknownUnit;

/// An Ethereum denomination.
///
/// Serialized as its canonical, case-exact name (`"Wei"`, `"Gwei"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Unit {
    /// The smallest denomination.
    Wei,
    /// 10^9 wei, also known as shannon.
    Gwei,
    /// 10^12 wei, also known as microether.
    Szabo,
    /// 10^15 wei, also known as milliether.
    Finney,
    /// 10^18 wei.
    Ether,
}

impl Unit {
    /// Every unit, smallest first.
    pub const ALL: [Self; 5] = [Self::Wei, Self::Gwei, Self::Szabo, Self::Finney, Self::Ether];

    /// Power of ten relating this unit to wei.
    pub const fn exponent(self) -> u32 {
        match self {
            Self::Wei => 0,
            Self::Gwei => 9,
            Self::Szabo => 12,
            Self::Finney => 15,
            Self::Ether => 18,
        }
    }

    /// Number of wei in one unit.
    pub const fn wei(self) -> u64 {
        10u64.pow(self.exponent())
    }

    /// Number of wei in one unit, as an arbitrary-precision integer.
    pub fn scale(self) -> BigUint {
        BigUint::from(self.wei())
    }

    /// Number of wei in one unit, as a 256-bit integer.
    pub fn wei_per_unit(self) -> U256 {
        U256::from(self.wei())
    }

    /// Canonical name of the unit.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wei => "Wei",
            Self::Gwei => "Gwei",
            Self::Szabo => "Szabo",
            Self::Finney => "Finney",
            Self::Ether => "Ether",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wei" => Ok(Self::Wei),
            "gwei" | "shannon" | "nanoether" => Ok(Self::Gwei),
            "szabo" | "microether" => Ok(Self::Szabo),
            "finney" | "milliether" => Ok(Self::Finney),
            "ether" | "eth" => Ok(Self::Ether),
            _ => Err(UnknownUnit(s.to_owned())),
        }
    }
}
