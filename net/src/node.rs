// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Southbound switch identifier codec.

use std::fmt::Display;

/// An OpenFlow switch identifier.
///
/// The textual form is exactly `"openflow:" + <decimal datapath id>`; the
/// datapath id is an unsigned 64-bit value. [`Display`] reproduces the
/// normalized textual form, so parse-then-format is canonicalizing
/// (leading zeros in the decimal part do not survive).
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
#[repr(transparent)]
pub struct NodeId(u64);

/// Errors which can occur while parsing a node identifier string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[must_use]
pub enum NodeIdParseError {
    /// The string did not match `"openflow:<decimal>"`.
    #[error("invalid node identifier: {0}")]
    Invalid(String),
}

impl NodeId {
    /// The protocol prefix of the textual form.
    pub const PREFIX: &'static str = "openflow:";

    /// Create a [`NodeId`] directly from a datapath id.
    #[must_use]
    pub fn new(dpid: u64) -> Self {
        NodeId(dpid)
    }

    /// The numeric datapath id.
    #[must_use]
    pub fn datapath_id(self) -> u64 {
        self.0
    }
}

impl TryFrom<&str> for NodeId {
    type Error = NodeIdParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let Some(rest) = value.strip_prefix(NodeId::PREFIX) else {
            return Err(NodeIdParseError::Invalid(value.to_string()));
        };
        // u64::from_str would tolerate a leading '+'; the wire form is
        // plain decimal digits only.
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NodeIdParseError::Invalid(value.to_string()));
        }
        let dpid = rest
            .parse::<u64>()
            .map_err(|_| NodeIdParseError::Invalid(value.to_string()))?;
        Ok(NodeId(dpid))
    }
}

impl TryFrom<String> for NodeId {
    type Error = NodeIdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        NodeId::try_from(value.as_str())
    }
}

impl From<NodeId> for String {
    fn from(value: NodeId) -> String {
        value.to_string()
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", NodeId::PREFIX, self.0)
    }
}

/// A possibly-wildcarded node reference.
///
/// Mapping configurations may leave the node unspecified, meaning "any
/// switch". This is a distinct state, never conflated with datapath id 0.
/// The [`Display`] form is diagnostic (it feeds VLAN map-ID generation):
/// the wildcard renders as `ANY` and a concrete node as its bare decimal
/// datapath id. It is never persisted and never parsed back.
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeRef {
    /// Any switch.
    Any,
    /// One specific switch.
    Node(NodeId),
}

impl From<Option<NodeId>> for NodeRef {
    fn from(value: Option<NodeId>) -> Self {
        match value {
            None => NodeRef::Any,
            Some(node) => NodeRef::Node(node),
        }
    }
}

impl Display for NodeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeRef::Any => write!(f, "ANY"),
            NodeRef::Node(node) => write!(f, "{}", node.datapath_id()),
        }
    }
}
