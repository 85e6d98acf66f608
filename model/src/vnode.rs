// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! The virtual node identifier hierarchy.
//!
//! One variant per addressable path shape in the virtual topology. The
//! bridge/terminal exclusivity invariant is structural: no variant can
//! carry both. Conversions to and from the flattened wire record are
//! exhaustive matches, so adding a variant forces both directions to be
//! revisited.

use crate::errors::{RpcError, RpcResult};
use crate::name::VnodeName;
use crate::path::{MAC_MAP_WHOLE_BRIDGE, VnodePathFields};
use net::MacVlan;
use std::fmt::Display;

/// A typed, immutable reference to one virtual node.
///
/// The tenant is optional on every sub-tenant variant: identifiers built
/// from records without tenant context (redirect targets in particular)
/// leave it unset, and it is never inferred during conversion. Resolution
/// of the enclosing tenant is always the caller's transaction context.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum VnodeId {
    /// A virtual tenant network.
    Tenant { tenant: VnodeName },
    /// A virtual bridge.
    Bridge {
        tenant: Option<VnodeName>,
        bridge: VnodeName,
    },
    /// A virtual terminal.
    Terminal {
        tenant: Option<VnodeName>,
        terminal: VnodeName,
    },
    /// A virtual interface attached to a bridge.
    BridgeInterface {
        tenant: Option<VnodeName>,
        bridge: VnodeName,
        interface: VnodeName,
    },
    /// A virtual interface attached to a terminal.
    TerminalInterface {
        tenant: Option<VnodeName>,
        terminal: VnodeName,
        interface: VnodeName,
    },
    /// A VLAN mapping configured on a bridge.
    VlanMap {
        tenant: Option<VnodeName>,
        bridge: VnodeName,
        map_id: String,
    },
    /// The MAC mapping of a bridge as a whole.
    MacMap {
        tenant: Option<VnodeName>,
        bridge: VnodeName,
    },
    /// One host mapped by a bridge's MAC mapping.
    MacMappedHost {
        tenant: Option<VnodeName>,
        bridge: VnodeName,
        host: MacVlan,
    },
}

impl VnodeId {
    /// Flatten this identifier into its wire record. Total: every variant
    /// maps to exactly one record shape.
    #[must_use]
    pub fn to_path_fields(&self) -> VnodePathFields {
        match self {
            VnodeId::Tenant { tenant } => VnodePathFields {
                tenant: Some(tenant.clone()),
                ..VnodePathFields::default()
            },
            VnodeId::Bridge { tenant, bridge } => VnodePathFields {
                tenant: tenant.clone(),
                bridge: Some(bridge.clone()),
                ..VnodePathFields::default()
            },
            VnodeId::Terminal { tenant, terminal } => VnodePathFields {
                tenant: tenant.clone(),
                terminal: Some(terminal.clone()),
                ..VnodePathFields::default()
            },
            VnodeId::BridgeInterface {
                tenant,
                bridge,
                interface,
            } => VnodePathFields {
                tenant: tenant.clone(),
                bridge: Some(bridge.clone()),
                interface: Some(interface.clone()),
                ..VnodePathFields::default()
            },
            VnodeId::TerminalInterface {
                tenant,
                terminal,
                interface,
            } => VnodePathFields {
                tenant: tenant.clone(),
                terminal: Some(terminal.clone()),
                interface: Some(interface.clone()),
                ..VnodePathFields::default()
            },
            VnodeId::VlanMap {
                tenant,
                bridge,
                map_id,
            } => VnodePathFields {
                tenant: tenant.clone(),
                bridge: Some(bridge.clone()),
                vlan_map_id: Some(map_id.clone()),
                ..VnodePathFields::default()
            },
            VnodeId::MacMap { tenant, bridge } => VnodePathFields {
                tenant: tenant.clone(),
                bridge: Some(bridge.clone()),
                mac_mapped_host: Some(MAC_MAP_WHOLE_BRIDGE),
                ..VnodePathFields::default()
            },
            VnodeId::MacMappedHost {
                tenant,
                bridge,
                host,
            } => VnodePathFields {
                tenant: tenant.clone(),
                bridge: Some(bridge.clone()),
                mac_mapped_host: Some(host.encoded()),
                ..VnodePathFields::default()
            },
        }
    }

    /// Rebuild an identifier from its wire record.
    ///
    /// # Errors
    ///
    /// Fails with BAD_ELEMENT when the record carries neither of
    /// `bridge`/`terminal`, or both, or a MAC-mapped host value that is
    /// not `-1` and does not decode.
    pub fn try_from_fields(fields: &VnodePathFields) -> RpcResult<VnodeId> {
        let tenant = fields.tenant.clone();
        match (&fields.bridge, &fields.terminal) {
            (Some(bridge), None) => {
                let bridge = bridge.clone();
                if let Some(interface) = &fields.interface {
                    return Ok(VnodeId::BridgeInterface {
                        tenant,
                        bridge,
                        interface: interface.clone(),
                    });
                }
                if let Some(map_id) = &fields.vlan_map_id {
                    return Ok(VnodeId::VlanMap {
                        tenant,
                        bridge,
                        map_id: map_id.clone(),
                    });
                }
                match fields.mac_mapped_host {
                    Some(MAC_MAP_WHOLE_BRIDGE) => Ok(VnodeId::MacMap { tenant, bridge }),
                    Some(encoded) => {
                        let host = MacVlan::from_encoded(encoded).map_err(|e| {
                            RpcError::bad_element_caused_by(
                                format!("Invalid MAC-mapped host: {encoded}"),
                                e,
                            )
                        })?;
                        Ok(VnodeId::MacMappedHost {
                            tenant,
                            bridge,
                            host,
                        })
                    }
                    None => Ok(VnodeId::Bridge { tenant, bridge }),
                }
            }
            (None, Some(terminal)) => {
                // map augmentations only exist below a bridge; a terminal
                // record carries none
                let terminal = terminal.clone();
                if let Some(interface) = &fields.interface {
                    Ok(VnodeId::TerminalInterface {
                        tenant,
                        terminal,
                        interface: interface.clone(),
                    })
                } else {
                    Ok(VnodeId::Terminal { tenant, terminal })
                }
            }
            // neither set, or both set: the record denotes no virtual node
            _ => Err(unexpected_path(fields)),
        }
    }

    /// [`VnodeId::try_from_fields`] lifted over optional records: an
    /// absent record maps to an absent identifier instead of an error.
    pub fn from_optional_fields(fields: Option<&VnodePathFields>) -> RpcResult<Option<VnodeId>> {
        fields.map(VnodeId::try_from_fields).transpose()
    }

    /// The tenant scope, if this identifier carries one.
    #[must_use]
    pub fn tenant(&self) -> Option<&VnodeName> {
        match self {
            VnodeId::Tenant { tenant } => Some(tenant),
            VnodeId::Bridge { tenant, .. }
            | VnodeId::Terminal { tenant, .. }
            | VnodeId::BridgeInterface { tenant, .. }
            | VnodeId::TerminalInterface { tenant, .. }
            | VnodeId::VlanMap { tenant, .. }
            | VnodeId::MacMap { tenant, .. }
            | VnodeId::MacMappedHost { tenant, .. } => tenant.as_ref(),
        }
    }

    /// The bridge name, for bridge-scoped variants.
    #[must_use]
    pub fn bridge_name(&self) -> Option<&VnodeName> {
        match self {
            VnodeId::Bridge { bridge, .. }
            | VnodeId::BridgeInterface { bridge, .. }
            | VnodeId::VlanMap { bridge, .. }
            | VnodeId::MacMap { bridge, .. }
            | VnodeId::MacMappedHost { bridge, .. } => Some(bridge),
            _ => None,
        }
    }

    /// The terminal name, for terminal-scoped variants.
    #[must_use]
    pub fn terminal_name(&self) -> Option<&VnodeName> {
        match self {
            VnodeId::Terminal { terminal, .. } | VnodeId::TerminalInterface { terminal, .. } => {
                Some(terminal)
            }
            _ => None,
        }
    }

    /// The interface name, for interface variants.
    #[must_use]
    pub fn interface_name(&self) -> Option<&VnodeName> {
        match self {
            VnodeId::BridgeInterface { interface, .. }
            | VnodeId::TerminalInterface { interface, .. } => Some(interface),
            _ => None,
        }
    }
}

/// The uniform rejection for records that denote no virtual node.
fn unexpected_path(fields: &VnodePathFields) -> RpcError {
    RpcError::bad_element(format!("Unexpected virtual node path: {fields:?}"))
}

impl Display for VnodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn scope(f: &mut std::fmt::Formatter<'_>, tenant: &Option<VnodeName>) -> std::fmt::Result {
            match tenant {
                Some(tenant) => write!(f, "{tenant}/"),
                None => write!(f, "-/"),
            }
        }
        match self {
            VnodeId::Tenant { tenant } => write!(f, "{tenant}"),
            VnodeId::Bridge { tenant, bridge } => {
                scope(f, tenant)?;
                write!(f, "{bridge}")
            }
            VnodeId::Terminal { tenant, terminal } => {
                scope(f, tenant)?;
                write!(f, "{terminal}")
            }
            VnodeId::BridgeInterface {
                tenant,
                bridge,
                interface,
            } => {
                scope(f, tenant)?;
                write!(f, "{bridge}/{interface}")
            }
            VnodeId::TerminalInterface {
                tenant,
                terminal,
                interface,
            } => {
                scope(f, tenant)?;
                write!(f, "{terminal}/{interface}")
            }
            VnodeId::VlanMap {
                tenant,
                bridge,
                map_id,
            } => {
                scope(f, tenant)?;
                write!(f, "{bridge}/vlan-map:{map_id}")
            }
            VnodeId::MacMap { tenant, bridge } => {
                scope(f, tenant)?;
                write!(f, "{bridge}/mac-map")
            }
            VnodeId::MacMappedHost {
                tenant,
                bridge,
                host,
            } => {
                scope(f, tenant)?;
                write!(f, "{bridge}/mac-map/{host}")
            }
        }
    }
}
