// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Mac address type and logic.

use arrayvec::ArrayVec;
use std::fmt::Display;

/// A [MAC Address] type.
///
/// `Mac` is a transparent wrapper around `[u8; 6]` which provides a
/// small collection of methods and type safety.
///
/// [MAC Address]: https://en.wikipedia.org/wiki/MAC_address
#[repr(transparent)]
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Mac(pub [u8; 6]);

impl From<[u8; 6]> for Mac {
    fn from(value: [u8; 6]) -> Self {
        Mac(value)
    }
}

impl From<Mac> for [u8; 6] {
    fn from(value: Mac) -> Self {
        value.0
    }
}

impl AsRef<[u8; 6]> for Mac {
    fn as_ref(&self) -> &[u8; 6] {
        &self.0
    }
}

/// Errors which can occur while converting a string or integer to a [`Mac`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMac {
    /// Invalid string representation of mac address
    #[error("invalid string representation of mac address: {0}")]
    Invalid(String),
    /// The integer does not fit in the 48 bits of a mac address
    #[error("the value {0:#x} does not fit in 48 bits")]
    TooWide(u64),
}

impl TryFrom<&str> for Mac {
    type Error = InvalidMac;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        const MAX_OCTETS: usize = 6;
        let mut octets_strs = value.split(':');
        let octets_parsed =
            octets_strs.try_fold(ArrayVec::<_, MAX_OCTETS>::new(), |mut acc, octet_str| {
                if octet_str.len() != 2 {
                    return Err(InvalidMac::Invalid(value.to_string()));
                }
                if octet_str.chars().any(|c| !c.is_ascii_hexdigit()) {
                    return Err(InvalidMac::Invalid(value.to_string()));
                }
                let parsed = u8::from_str_radix(octet_str, 16)
                    .map_err(|_| InvalidMac::Invalid(value.to_string()))?;
                acc.try_push(parsed)
                    .map_err(|_| InvalidMac::Invalid(value.to_string()))?;
                Ok(acc)
            })?;

        let octets = match octets_parsed.as_slice() {
            [o0, o1, o2, o3, o4, o5] => [*o0, *o1, *o2, *o3, *o4, *o5],
            _ => return Err(InvalidMac::Invalid(value.to_string())),
        };

        Ok(Mac(octets))
    }
}

impl Mac {
    /// The broadcast `Mac`
    pub const BROADCAST: Mac = Mac([u8::MAX; 6]);
    /// The zero `Mac`.
    ///
    /// `ZERO` is illegal as a source or destination `Mac` in most contexts.
    pub const ZERO: Mac = Mac([0; 6]);
    /// First `u64` which is too wide to be a [`Mac`] (2<sup>48</sup>).
    pub const TOO_WIDE: u64 = 1 << 48;

    /// Returns true iff the binary representation of the [`Mac`] is exclusively ones.
    #[must_use]
    pub fn is_broadcast(&self) -> bool {
        self == &Mac::BROADCAST
    }

    /// Returns true iff the least significant bit of the first octet of the [`Mac`] is one.
    #[must_use]
    pub fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 == 0x01
    }

    /// Returns true iff the binary representation of the [`Mac`] is exclusively zeros.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self == &Mac::ZERO
    }

    /// The address as a 48-bit number in the low bits of a `u64`, big-endian octet order.
    #[must_use]
    pub fn as_u48(self) -> u64 {
        let [o0, o1, o2, o3, o4, o5] = self.0;
        u64::from_be_bytes([0, 0, o0, o1, o2, o3, o4, o5])
    }

    /// Create a [`Mac`] from the low 48 bits of a `u64`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMac::TooWide`] if any of the high 16 bits are set.
    pub fn try_from_u48(value: u64) -> Result<Mac, InvalidMac> {
        if value >= Mac::TOO_WIDE {
            return Err(InvalidMac::TooWide(value));
        }
        let [_, _, o0, o1, o2, o3, o4, o5] = value.to_be_bytes();
        Ok(Mac([o0, o1, o2, o3, o4, o5]))
    }
}

impl Display for Mac {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_display_round_trip() {
        let mac = Mac::try_from("00:11:22:aa:bb:cc").expect("legal mac");
        assert_eq!(mac, Mac([0x00, 0x11, 0x22, 0xaa, 0xbb, 0xcc]));
        assert_eq!(mac.to_string(), "00:11:22:aa:bb:cc");
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in [
            "",
            "00:11:22:aa:bb",
            "00:11:22:aa:bb:cc:dd",
            "00:11:22:aa:bb:c",
            "00:11:22:aa:bb:zz",
            "001122aabbcc",
        ] {
            assert_eq!(
                Mac::try_from(bad),
                Err(InvalidMac::Invalid(bad.to_string()))
            );
        }
    }

    #[test]
    fn u48_round_trip() {
        bolero::check!().with_type().for_each(|mac: &Mac| {
            let wide = mac.as_u48();
            assert!(wide < Mac::TOO_WIDE);
            assert_eq!(Mac::try_from_u48(wide), Ok(*mac));
        });
    }

    #[test]
    fn u48_rejects_wide_values() {
        assert_eq!(
            Mac::try_from_u48(Mac::TOO_WIDE),
            Err(InvalidMac::TooWide(Mac::TOO_WIDE))
        );
        assert_eq!(Mac::try_from_u48(u64::MAX), Err(InvalidMac::TooWide(u64::MAX)));
        assert_eq!(Mac::try_from_u48(Mac::TOO_WIDE - 1), Ok(Mac::BROADCAST));
    }

    #[test]
    fn predicates() {
        assert!(Mac::BROADCAST.is_broadcast());
        assert!(Mac::BROADCAST.is_multicast());
        assert!(Mac::ZERO.is_zero());
        assert!(!Mac([0x02, 0, 0, 0, 0, 1]).is_multicast());
    }
}
