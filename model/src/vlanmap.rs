// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! VLAN mapping configuration and map-ID generation.

use crate::errors::{RpcError, RpcResult};
use net::node::NodeIdParseError;
use net::vlan::InvalidVlanId;
use net::{NodeId, NodeRef, VlanId};
use tracing::debug;

/// Deterministic ID of a VLAN mapping: `"<node>.<vlan>"`, where `<node>`
/// is the [`NodeRef`] display form (`ANY` for the wildcard, the decimal
/// datapath id otherwise).
#[must_use]
pub fn create_map_id(node: NodeRef, vlan: VlanId) -> String {
    format!("{node}.{vlan}")
}

/// Shared validation core for VLAN mapping fields.
///
/// Both the hard-failing constructor and the soft map-ID derivation go
/// through here, so the two call sites cannot drift apart.
fn check_map_fields(node: Option<&str>, vlan: Option<u16>) -> RpcResult<(Option<NodeId>, VlanId)> {
    let Some(raw_vlan) = vlan else {
        return Err(RpcError::missing_element("vlan-id cannot be null"));
    };
    let vlan = VlanId::new(raw_vlan).map_err(|e: InvalidVlanId| {
        RpcError::bad_element_caused_by(format!("Invalid VLAN ID: {raw_vlan}"), e)
    })?;
    let node = match node {
        None => None,
        Some(raw) => Some(NodeId::try_from(raw).map_err(|e: NodeIdParseError| {
            RpcError::bad_element_caused_by(format!("Invalid node ID: {raw}"), e)
        })?),
    };
    Ok((node, vlan))
}

/// A validated VLAN mapping configuration.
///
/// Constructed from raw northbound fields with hard validation; once
/// built, both fields are known legal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VlanMapConfig {
    /// The mapped switch, or any switch when unset.
    pub node: Option<NodeId>,
    /// The mapped VLAN tag.
    pub vlan: VlanId,
}

impl VlanMapConfig {
    /// Validate raw input fields into a configuration.
    ///
    /// This constructor never defaults: a caller that wants to treat an
    /// absent VLAN as 0 must pass `Some(0)` explicitly.
    ///
    /// # Errors
    ///
    /// * VLAN absent: MISSING_ELEMENT, `"vlan-id cannot be null"`.
    /// * VLAN outside 0..=4095: BAD_ELEMENT, `"Invalid VLAN ID: <value>"`.
    /// * Node string unparsable: BAD_ELEMENT, `"Invalid node ID: <raw>"`.
    pub fn new(node: Option<&str>, vlan: Option<u16>) -> RpcResult<Self> {
        let (node, vlan) = check_map_fields(node, vlan)?;
        Ok(Self { node, vlan })
    }

    /// The deterministic ID of this mapping.
    #[must_use]
    pub fn map_id(&self) -> String {
        create_map_id(NodeRef::from(self.node), self.vlan)
    }
}

/// Best-effort map-ID derivation from already-stored configuration
/// fields.
///
/// Stored configurations were validated on the way in, so a field that no
/// longer checks out yields no ID rather than an error; indexing callers
/// only distinguish "computed" from "not computable". An absent VLAN
/// defaults to 0 here, deliberately and only here.
#[must_use]
pub fn map_id_from_config(node: Option<&str>, vlan: Option<u16>) -> Option<String> {
    match check_map_fields(node, Some(vlan.unwrap_or(0))) {
        Ok((node, vlan)) => Some(create_map_id(NodeRef::from(node), vlan)),
        Err(e) => {
            debug!("cannot derive VLAN map ID: {e}");
            None
        }
    }
}
