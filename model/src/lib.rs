// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Virtual node identifier model.
//!
//! The identifier/validation/conversion core of the VTN model: name
//! syntax checks, the structured two-tag error currency, the typed
//! virtual node identifier hierarchy with its flattened wire form, and
//! deterministic VLAN map-ID computation. Everything here is pure and
//! side-effect free; resolution against stored state lives in the
//! resolver crate.

pub mod errors;
pub mod name;
pub mod path;
pub mod vlanmap;
pub mod vnode;

pub use errors::{InvalidArgument, RpcError, RpcErrorTag, RpcResult, VtnErrorTag};
pub use name::VnodeName;
pub use path::VnodePathFields;
pub use vnode::VnodeId;
