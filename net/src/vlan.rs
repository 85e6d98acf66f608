// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! VLAN tag validation and manipulation.

use tracing::instrument;

/// A VLAN tag as used by VLAN and MAC mappings.
///
/// Unlike an 802.1Q VID drawn from 1..=4094, the mapping model treats the
/// whole 12-bit tag domain as addressable: 0 denotes untagged traffic and
/// 4095 is accepted as written by the northbound model. The only illegal
/// values are those which do not fit in 12 bits.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u16", into = "u16")]
#[repr(transparent)]
pub struct VlanId(u16);

/// Errors which can occur when converting a `u16` to a validated [`VlanId`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[must_use]
pub enum InvalidVlanId {
    /// The value is too large to be a VLAN tag (max is 2^12 - 1).
    #[error("{0} is too large to be a VLAN tag (max is {MAX})", MAX = VlanId::MAX)]
    TooLarge(u16),
}

impl VlanId {
    /// The minimum legal VLAN tag (0, untagged).
    pub const MIN: u16 = 0;
    /// The maximum legal VLAN tag (2^12 - 1).
    pub const MAX: u16 = 4095;

    /// Create a new [`VlanId`] from a `u16`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is greater than [`VlanId::MAX`].
    #[instrument(level = "trace", ret)]
    pub fn new(vlan: u16) -> Result<Self, InvalidVlanId> {
        if vlan > VlanId::MAX {
            return Err(InvalidVlanId::TooLarge(vlan));
        }
        Ok(VlanId(vlan))
    }

    /// Get the value of the [`VlanId`] as a `u16`.
    #[must_use]
    pub fn as_u16(self) -> u16 {
        self.0
    }
}

impl From<VlanId> for u16 {
    fn from(vlan: VlanId) -> u16 {
        vlan.as_u16()
    }
}

impl TryFrom<u16> for VlanId {
    type Error = InvalidVlanId;

    fn try_from(vlan: u16) -> Result<VlanId, Self::Error> {
        VlanId::new(vlan)
    }
}

impl core::fmt::Display for VlanId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

#[cfg(any(test, feature = "bolero"))]
mod contract {
    use crate::vlan::VlanId;
    use bolero::{Driver, TypeGenerator};

    impl TypeGenerator for VlanId {
        fn generate<D: Driver>(driver: &mut D) -> Option<Self> {
            Some(VlanId(driver.produce::<u16>()? & VlanId::MAX))
        }
    }
}
