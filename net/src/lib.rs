// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Southbound scalar types for the VTN identifier core.
//!
//! This crate holds the checked wrapper types shared by the virtual node
//! model: MAC addresses, VLAN identifiers, the packed MAC+VLAN host key,
//! and the `openflow:<dpid>` switch identifier. All constructors validate;
//! an illegal value cannot be represented once construction succeeds.

pub mod mac;
pub mod macvlan;
pub mod node;
pub mod vlan;

pub use mac::Mac;
pub use macvlan::MacVlan;
pub use node::{NodeId, NodeRef};
pub use vlan::VlanId;
