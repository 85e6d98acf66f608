// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Flattened wire form of a virtual node path.

use crate::name::VnodeName;

/// Wire value of [`VnodePathFields::mac_mapped_host`] denoting the
/// bridge-wide MAC mapping rather than one mapped host.
pub const MAC_MAP_WHOLE_BRIDGE: i64 = -1;

/// The flattened path record persisted inside flow-route records.
///
/// At most one of `bridge`/`terminal` is populated for anything below
/// tenant scope; `vlan_map_id` and `mac_mapped_host` are mutually
/// exclusive augmentations that only appear on bridge-scoped,
/// interface-less records. Field population is bit-for-bit stable so a
/// record read back from storage denotes the same virtual node it was
/// written for.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VnodePathFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<VnodeName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bridge: Option<VnodeName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<VnodeName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<VnodeName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan_map_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_mapped_host: Option<i64>,
}
