// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Packed MAC + VLAN host key.

use crate::mac::{InvalidMac, Mac};
use crate::vlan::{InvalidVlanId, VlanId};
use std::fmt::Display;

/// A layer-2 host as seen by a MAC mapping: a MAC address qualified by the
/// VLAN tag it was learned on.
///
/// The pair packs into a single `i64` for storage and equality: the VLAN
/// tag occupies the low 12 bits and the MAC address the next 48 bits.
/// Every encoding is therefore in `0..2^60`, so the encoded form is never
/// negative; the wire-level sentinel `-1` ("no specific host, the whole
/// bridge mapping") cannot collide with any real host.
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct MacVlan {
    pub mac: Mac,
    pub vlan: VlanId,
}

/// Errors which can occur when decoding an `i64` into a [`MacVlan`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[must_use]
pub enum InvalidMacVlan {
    /// Negative values are reserved (notably `-1`, the whole-bridge sentinel).
    #[error("{0} is not a valid encoded MAC-VLAN host (negative)")]
    Negative(i64),
    /// Bits above the 60 used by the encoding were set.
    #[error("{0:#x} is not a valid encoded MAC-VLAN host (bits above bit 59 set)")]
    TooWide(i64),
    /// The embedded MAC field failed validation.
    #[error(transparent)]
    BadMac(#[from] InvalidMac),
    /// The embedded VLAN field failed validation.
    #[error(transparent)]
    BadVlan(#[from] InvalidVlanId),
}

impl MacVlan {
    /// Number of low bits holding the VLAN tag.
    const VLAN_BITS: u32 = 12;
    /// First `i64` which is too wide to be a valid encoding (2^60).
    const TOO_WIDE: i64 = 1 << (Self::VLAN_BITS + 48);

    /// Create a new [`MacVlan`] from already-validated parts.
    #[must_use]
    pub fn new(mac: Mac, vlan: VlanId) -> Self {
        Self { mac, vlan }
    }

    /// Pack this host into its stable 64-bit encoded form.
    ///
    /// The result is always non-negative and below 2^60; in particular it
    /// is never `-1`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)] // value < 2^60
    pub fn encoded(self) -> i64 {
        ((self.mac.as_u48() << Self::VLAN_BITS) | u64::from(self.vlan.as_u16())) as i64
    }

    /// Decode a packed host value produced by [`MacVlan::encoded`].
    ///
    /// # Errors
    ///
    /// Returns an error for negative values (which include the `-1`
    /// whole-bridge sentinel) and for values with bits set above bit 59.
    #[allow(clippy::cast_sign_loss)] // negative rejected above
    pub fn from_encoded(value: i64) -> Result<MacVlan, InvalidMacVlan> {
        if value < 0 {
            return Err(InvalidMacVlan::Negative(value));
        }
        if value >= Self::TOO_WIDE {
            return Err(InvalidMacVlan::TooWide(value));
        }
        let raw = value as u64;
        let mac = Mac::try_from_u48(raw >> Self::VLAN_BITS)?;
        #[allow(clippy::cast_possible_truncation)] // masked to 12 bits
        let vlan = VlanId::new((raw & u64::from(VlanId::MAX)) as u16)?;
        Ok(MacVlan { mac, vlan })
    }
}

impl Display for MacVlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.mac, self.vlan)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn encoding_bijection() {
        bolero::check!().with_type().for_each(|host: &MacVlan| {
            let encoded = host.encoded();
            assert!(encoded >= 0);
            assert_ne!(encoded, -1);
            assert_eq!(MacVlan::from_encoded(encoded), Ok(*host));
        });
    }

    #[test]
    fn layout_is_vlan_low_mac_high() {
        let host = MacVlan::new(
            Mac::try_from("00:00:00:00:00:01").expect("legal mac"),
            VlanId::new(2).expect("legal vlan"),
        );
        assert_eq!(host.encoded(), (1 << 12) | 2);
    }

    #[test]
    fn sentinel_and_out_of_range_rejected() {
        assert_eq!(MacVlan::from_encoded(-1), Err(InvalidMacVlan::Negative(-1)));
        assert_eq!(
            MacVlan::from_encoded(i64::MIN),
            Err(InvalidMacVlan::Negative(i64::MIN))
        );
        assert_eq!(
            MacVlan::from_encoded(1 << 60),
            Err(InvalidMacVlan::TooWide(1 << 60))
        );
        assert_eq!(
            MacVlan::from_encoded(i64::MAX),
            Err(InvalidMacVlan::TooWide(i64::MAX))
        );
    }

    #[test]
    fn display_form() {
        let host = MacVlan::new(
            Mac::try_from("00:11:22:aa:bb:cc").expect("legal mac"),
            VlanId::new(10).expect("legal vlan"),
        );
        assert_eq!(host.to_string(), "00:11:22:aa:bb:cc@10");
    }
}
