// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Error currency of the identifier core.
//!
//! Every failure crossing this layer's boundary is an [`RpcError`]
//! carrying two independent tags: an RPC protocol tag describing the
//! shape of the input problem, and a VTN tag selecting the wire-level
//! report category. A composite operation that fails because a nested
//! check failed wraps the nested error as its cause and prefixes its own
//! context onto the message; the nested error itself is never altered.

use std::error::Error;
use std::fmt::Display;

/// What kind of RPC input problem occurred.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum RpcErrorTag {
    /// A required field was absent.
    MissingElement,
    /// A present field failed validation.
    BadElement,
    /// A referenced entity does not exist.
    DataMissing,
    /// A name collides with an existing entity.
    DataExists,
}

/// How a failure is reported over the wire.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum VtnErrorTag {
    /// The request itself was malformed.
    BadRequest,
    /// The referenced entity was not found.
    NotFound,
    /// The request conflicts with existing state.
    Conflict,
}

/// Result type for every fallible operation in the identifier core.
pub type RpcResult<T> = Result<T, RpcError>;

/// A structured failure report.
///
/// Created at the point of detection and never mutated. May carry a cause
/// when a lower-layer check failed inside a higher-layer operation; the
/// cause chain never exceeds one nested [`RpcError`] in this core.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
#[must_use]
pub struct RpcError {
    tag: RpcErrorTag,
    vtn_tag: VtnErrorTag,
    message: String,
    #[source]
    cause: Option<Box<dyn Error + Send + Sync>>,
}

impl RpcError {
    fn new(tag: RpcErrorTag, vtn_tag: VtnErrorTag, message: impl Into<String>) -> Self {
        Self {
            tag,
            vtn_tag,
            message: message.into(),
            cause: None,
        }
    }

    fn caused_by(mut self, cause: impl Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// A required field was absent (MISSING_ELEMENT / BADREQUEST).
    pub fn missing_element(message: impl Into<String>) -> Self {
        Self::new(RpcErrorTag::MissingElement, VtnErrorTag::BadRequest, message)
    }

    /// A present field failed validation (BAD_ELEMENT / BADREQUEST).
    pub fn bad_element(message: impl Into<String>) -> Self {
        Self::new(RpcErrorTag::BadElement, VtnErrorTag::BadRequest, message)
    }

    /// [`RpcError::bad_element`] with the lower-level failure attached.
    pub fn bad_element_caused_by(
        message: impl Into<String>,
        cause: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self::bad_element(message).caused_by(cause)
    }

    /// A referenced entity does not exist (DATA_MISSING / NOTFOUND).
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(RpcErrorTag::DataMissing, VtnErrorTag::NotFound, message)
    }

    /// [`RpcError::not_found`] with the lower-level failure attached.
    pub fn not_found_caused_by(
        message: impl Into<String>,
        cause: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self::not_found(message).caused_by(cause)
    }

    /// A name collides with an existing entity (DATA_EXISTS / CONFLICT).
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(RpcErrorTag::DataExists, VtnErrorTag::Conflict, message)
    }

    /// Wrap `inner` into a composite-operation failure.
    ///
    /// The outer error keeps `inner`'s tags, prefixes `context` onto the
    /// message, and attaches `inner` untouched as the cause.
    pub fn wrap(context: impl Display, inner: RpcError) -> Self {
        Self {
            tag: inner.tag,
            vtn_tag: inner.vtn_tag,
            message: format!("{context}: {}", inner.message),
            cause: Some(Box::new(inner)),
        }
    }

    /// The protocol-shape tag.
    #[must_use]
    pub fn tag(&self) -> RpcErrorTag {
        self.tag
    }

    /// The wire-report tag.
    #[must_use]
    pub fn vtn_tag(&self) -> VtnErrorTag {
        self.vtn_tag
    }

    /// The user-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped cause, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|e| e as &(dyn Error + 'static))
    }

    /// The wrapped cause, if it is itself an [`RpcError`].
    #[must_use]
    pub fn rpc_cause(&self) -> Option<&RpcError> {
        self.cause().and_then(|e| e.downcast_ref::<RpcError>())
    }
}

/// Generic invalid-argument error.
///
/// Attached as the cause of "is invalid" name failures so that callers can
/// tell obviously malformed input apart from empty or missing input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid argument: {0}")]
pub struct InvalidArgument(pub String);

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wrap_keeps_tags_and_chains_cause() {
        let inner = RpcError::bad_element("vBridge name cannot be empty");
        let outer = RpcError::wrap("Invalid redirect-destination", inner);
        assert_eq!(outer.tag(), RpcErrorTag::BadElement);
        assert_eq!(outer.vtn_tag(), VtnErrorTag::BadRequest);
        assert_eq!(
            outer.message(),
            "Invalid redirect-destination: vBridge name cannot be empty"
        );
        let cause = outer.rpc_cause().expect("cause must be an RpcError");
        assert_eq!(cause.message(), "vBridge name cannot be empty");
        assert!(cause.cause().is_none());
    }

    #[test]
    fn helper_tag_pairs() {
        let e = RpcError::missing_element("x cannot be null");
        assert_eq!((e.tag(), e.vtn_tag()), (RpcErrorTag::MissingElement, VtnErrorTag::BadRequest));
        let e = RpcError::bad_element("x is invalid");
        assert_eq!((e.tag(), e.vtn_tag()), (RpcErrorTag::BadElement, VtnErrorTag::BadRequest));
        let e = RpcError::not_found("x does not exist");
        assert_eq!((e.tag(), e.vtn_tag()), (RpcErrorTag::DataMissing, VtnErrorTag::NotFound));
        let e = RpcError::conflict("x already exists");
        assert_eq!((e.tag(), e.vtn_tag()), (RpcErrorTag::DataExists, VtnErrorTag::Conflict));
    }

    #[test]
    fn display_is_the_message() {
        let e = RpcError::not_found("t: Tenant does not exist.");
        assert_eq!(e.to_string(), "t: Tenant does not exist.");
    }
}
