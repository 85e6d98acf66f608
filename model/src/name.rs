// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Virtual node name validation.

use crate::errors::{InvalidArgument, RpcError, RpcResult};
use std::fmt::Display;

/// A validated virtual node name.
///
/// Names are 1 to 31 characters long; the first character is ASCII
/// alphanumeric and the remaining characters are ASCII alphanumeric or
/// `_`. The same rule applies to every name class in the model (tenants,
/// vBridges, vTerminals, vInterfaces); only the label used in failure
/// messages differs. A `VnodeName` can only be obtained through
/// [`VnodeName::check`], so holding one proves the syntax check passed.
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct VnodeName(String);

impl VnodeName {
    /// Maximum name length in bytes.
    pub const MAX_LEN: usize = 31;

    /// Validate `raw` as a virtual node name.
    ///
    /// `kind` is the caller-context label interpolated into failure
    /// messages, e.g. `"Tenant name"` or `"vBridge name"`.
    ///
    /// # Errors
    ///
    /// * `raw` absent: MISSING_ELEMENT, `"<kind> cannot be null"`.
    /// * `raw` empty: BAD_ELEMENT, `"<kind> cannot be empty"`.
    /// * `raw` malformed: BAD_ELEMENT, `"<kind> is invalid"`, with a
    ///   generic [`InvalidArgument`] attached as cause.
    pub fn check(raw: Option<&str>, kind: &str) -> RpcResult<VnodeName> {
        let Some(raw) = raw else {
            return Err(RpcError::missing_element(format!("{kind} cannot be null")));
        };
        if raw.is_empty() {
            return Err(RpcError::bad_element(format!("{kind} cannot be empty")));
        }
        if !Self::is_valid(raw) {
            return Err(RpcError::bad_element_caused_by(
                format!("{kind} is invalid"),
                InvalidArgument(raw.to_string()),
            ));
        }
        Ok(VnodeName(raw.to_string()))
    }

    /// Syntax predicate for a non-empty candidate name.
    ///
    /// Byte-level on purpose: any non-ASCII input fails regardless of how
    /// it would count in characters.
    fn is_valid(raw: &str) -> bool {
        let bytes = raw.as_bytes();
        if bytes.len() > Self::MAX_LEN {
            return false;
        }
        bytes
            .iter()
            .enumerate()
            .all(|(i, b)| b.is_ascii_alphanumeric() || (i > 0 && *b == b'_'))
    }

    /// The validated name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VnodeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for VnodeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for VnodeName {
    type Error = RpcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        VnodeName::check(Some(&value), "Name")
    }
}

impl From<VnodeName> for String {
    fn from(value: VnodeName) -> String {
        value.0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::{RpcErrorTag, VtnErrorTag};
    use pretty_assertions::assert_eq;

    fn check(raw: Option<&str>) -> RpcResult<VnodeName> {
        VnodeName::check(raw, "Tenant name")
    }

    #[test]
    fn null_name() {
        let e = check(None).expect_err("null must fail");
        assert_eq!(e.tag(), RpcErrorTag::MissingElement);
        assert_eq!(e.vtn_tag(), VtnErrorTag::BadRequest);
        assert_eq!(e.message(), "Tenant name cannot be null");
        assert!(e.cause().is_none());
    }

    #[test]
    fn empty_name() {
        let e = check(Some("")).expect_err("empty must fail");
        assert_eq!(e.tag(), RpcErrorTag::BadElement);
        assert_eq!(e.message(), "Tenant name cannot be empty");
        assert!(e.cause().is_none());
    }

    #[test]
    fn malformed_name_attaches_invalid_argument() {
        let e = check(Some("_leading")).expect_err("leading underscore must fail");
        assert_eq!(e.tag(), RpcErrorTag::BadElement);
        assert_eq!(e.vtn_tag(), VtnErrorTag::BadRequest);
        assert_eq!(e.message(), "Tenant name is invalid");
        let cause = e.cause().expect("must carry a cause");
        assert_eq!(
            cause.downcast_ref::<InvalidArgument>(),
            Some(&InvalidArgument("_leading".to_string()))
        );
    }

    #[test]
    fn length_boundary() {
        let max = "a".repeat(31);
        assert_eq!(check(Some(&max)).expect("31 chars are legal").as_str(), max);
        let over = "a".repeat(32);
        assert_eq!(
            check(Some(&over)).expect_err("32 chars must fail").message(),
            "Tenant name is invalid"
        );
    }

    #[test]
    fn character_rules() {
        for ok in ["a", "A", "0", "vtn_1", "a_b_c", "Z9_"] {
            assert!(check(Some(ok)).is_ok(), "{ok:?} should validate");
        }
        for bad in ["_a", "a b", "a-b", "a%b", "café", "日本語", "a\n"] {
            assert!(check(Some(bad)).is_err(), "{bad:?} should not validate");
        }
    }

    #[test]
    fn validated_content_is_unchanged() {
        bolero::check!().with_type().for_each(|seed: &(u8, u16)| {
            // build a syntactically valid name from arbitrary input
            let len = usize::from(seed.0 % 31) + 1;
            let mut name = String::new();
            name.push(char::from(b'a' + (seed.1 % 26) as u8));
            while name.len() < len {
                name.push('_');
            }
            let checked = check(Some(&name)).expect("constructed name is valid");
            assert_eq!(checked.as_str(), name);
        });
    }
}
