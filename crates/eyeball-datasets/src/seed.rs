use std::{fmt, str::FromStr};

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seed for deterministic dataset generation.
///
/// A 128-bit value written as 32 lowercase hex digits, both in JSON records
/// and on the command line. The same seed always yields the same samples, so
/// a recorded result can be replayed on identical data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatasetSeed([u8; 16]);

impl DatasetSeed {
    #[must_use]
    pub fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

impl From<u128> for DatasetSeed {
    fn from(value: u128) -> Self {
        Self(value.to_be_bytes())
    }
}

impl fmt::Display for DatasetSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    #[display("invalid seed: expected 32 hex characters, got {_0}")]
    Length(#[error(not(source))] usize),
    #[display("invalid seed: {_0:?} is not hexadecimal")]
    Digits(#[error(not(source))] String),
}

impl FromStr for DatasetSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError::Length(s.len()));
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParseSeedError::Digits(s.to_owned()))?;
        Ok(Self::from(num))
    }
}

impl Serialize for DatasetSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DatasetSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Enables `rng.random::<DatasetSeed>()`.
impl Distribution<DatasetSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DatasetSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        DatasetSeed(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(DatasetSeed::from(0xab).to_string(), "000000000000000000000000000000ab");
    }

    #[test]
    fn test_parse() {
        let seed: DatasetSeed = "0123456789abcdef0123456789ABCDEF".parse().unwrap();
        assert_eq!(seed, DatasetSeed::from(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef));
        assert_eq!("abc".parse::<DatasetSeed>(), Err(ParseSeedError::Length(3)));
        assert!(matches!(
            "zz23456789abcdef0123456789abcdef".parse::<DatasetSeed>(),
            Err(ParseSeedError::Digits(_))
        ));
    }

    #[test]
    fn test_json_is_hex_string() {
        let seed = DatasetSeed::from(255);
        let json = serde_json::to_string(&seed).unwrap();
        assert_eq!(json, r#""000000000000000000000000000000ff""#);
        assert_eq!(serde_json::from_str::<DatasetSeed>(&json).unwrap(), seed);
        assert!(serde_json::from_str::<DatasetSeed>(r#""ff""#).is_err());
    }
}
