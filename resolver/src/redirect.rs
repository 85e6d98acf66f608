// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Redirect-destination resolution.

use model::{RpcError, RpcResult, VnodeId, VnodeName};
use tracing::debug;

/// Context prefix for failures detected while resolving a destination.
const INVALID_DESTINATION: &str = "Invalid redirect-destination";

/// A flow-filter redirect target as supplied by external configuration.
///
/// All fields are raw, unvalidated strings; any of them may be absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RedirectDestination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bridge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
}

/// Build the virtual interface identifier a redirect target points at.
///
/// Redirect targets are always resolved relative to the enclosing tenant:
/// a tenant name inside the record is ignored, and the returned identifier
/// carries no tenant scope. Exactly one of the bridge/terminal fields must
/// be present. Validation failures are wrapped with the
/// `"Invalid redirect-destination: "` context, preserving the inner error
/// as the cause.
pub fn interface_id(dest: Option<&RedirectDestination>) -> RpcResult<VnodeId> {
    let Some(dest) = dest else {
        return Err(RpcError::missing_element(
            "redirect-destination cannot be null",
        ));
    };
    if let Some(tenant) = &dest.tenant {
        // tenant scope comes from the caller's transaction, never from here
        debug!("ignoring tenant name '{tenant}' in redirect destination");
    }
    let interface = VnodeName::check(dest.interface.as_deref(), "vInterface name")
        .map_err(|e| RpcError::wrap(INVALID_DESTINATION, e))?;
    match (&dest.bridge, &dest.terminal) {
        (Some(bridge), None) => {
            let bridge = VnodeName::check(Some(bridge.as_str()), "vBridge name")
                .map_err(|e| RpcError::wrap(INVALID_DESTINATION, e))?;
            Ok(VnodeId::BridgeInterface {
                tenant: None,
                bridge,
                interface,
            })
        }
        (None, Some(terminal)) => {
            let terminal = VnodeName::check(Some(terminal.as_str()), "vTerminal name")
                .map_err(|e| RpcError::wrap(INVALID_DESTINATION, e))?;
            Ok(VnodeId::TerminalInterface {
                tenant: None,
                terminal,
                interface,
            })
        }
        _ => Err(RpcError::bad_element(format!(
            "Unexpected virtual node path: {dest:?}"
        ))),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use model::{RpcErrorTag, VtnErrorTag};
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    fn dest(
        tenant: Option<&str>,
        bridge: Option<&str>,
        terminal: Option<&str>,
        interface: Option<&str>,
    ) -> RedirectDestination {
        RedirectDestination {
            tenant: tenant.map(str::to_string),
            bridge: bridge.map(str::to_string),
            terminal: terminal.map(str::to_string),
            interface: interface.map(str::to_string),
        }
    }

    #[test]
    fn null_destination() {
        let e = interface_id(None).expect_err("must fail");
        assert_eq!(e.tag(), RpcErrorTag::MissingElement);
        assert_eq!(e.vtn_tag(), VtnErrorTag::BadRequest);
        assert_eq!(e.message(), "redirect-destination cannot be null");
    }

    #[test]
    #[traced_test]
    fn tenant_name_is_always_ignored() {
        let id = interface_id(Some(&dest(Some("vtn_1"), Some("b"), None, Some("if"))))
            .expect("valid destination");
        assert_eq!(id.tenant(), None);
        assert_eq!(id.bridge_name().map(VnodeName::as_str), Some("b"));
        assert_eq!(id.interface_name().map(VnodeName::as_str), Some("if"));
        assert!(logs_contain("ignoring tenant name 'vtn_1'"));
    }

    #[test]
    fn terminal_destination() {
        let id = interface_id(Some(&dest(None, None, Some("vt_1"), Some("if_1"))))
            .expect("valid destination");
        assert_eq!(id.terminal_name().map(VnodeName::as_str), Some("vt_1"));
        assert_eq!(id.interface_name().map(VnodeName::as_str), Some("if_1"));
        assert_eq!(id.bridge_name(), None);
    }

    #[test]
    fn neither_bridge_nor_terminal() {
        let d = dest(None, None, None, Some("if_1"));
        let e = interface_id(Some(&d)).expect_err("must fail");
        assert_eq!(e.tag(), RpcErrorTag::BadElement);
        assert_eq!(e.message(), format!("Unexpected virtual node path: {d:?}"));
    }

    #[test]
    fn both_bridge_and_terminal() {
        let d = dest(None, Some("b"), Some("t"), Some("if_1"));
        let e = interface_id(Some(&d)).expect_err("must fail");
        assert_eq!(e.tag(), RpcErrorTag::BadElement);
        assert_eq!(e.message(), format!("Unexpected virtual node path: {d:?}"));
    }

    #[test]
    fn empty_bridge_name_is_wrapped() {
        let e = interface_id(Some(&dest(None, Some(""), None, Some("if_1"))))
            .expect_err("must fail");
        assert_eq!(e.tag(), RpcErrorTag::BadElement);
        assert_eq!(e.vtn_tag(), VtnErrorTag::BadRequest);
        assert_eq!(
            e.message(),
            "Invalid redirect-destination: vBridge name cannot be empty"
        );
        let cause = e.rpc_cause().expect("inner error preserved");
        assert_eq!(cause.message(), "vBridge name cannot be empty");
        assert!(cause.cause().is_none());
    }

    #[test]
    fn interface_name_is_checked_first() {
        let e = interface_id(Some(&dest(None, Some(""), None, None))).expect_err("must fail");
        assert_eq!(e.tag(), RpcErrorTag::MissingElement);
        assert_eq!(
            e.message(),
            "Invalid redirect-destination: vInterface name cannot be null"
        );
        let cause = e.rpc_cause().expect("inner error preserved");
        assert_eq!(cause.message(), "vInterface name cannot be null");
    }

    #[test]
    fn malformed_interface_name_keeps_cause_chain_shallow() {
        let e = interface_id(Some(&dest(None, Some("b"), None, Some("bad name"))))
            .expect_err("must fail");
        assert_eq!(
            e.message(),
            "Invalid redirect-destination: vInterface name is invalid"
        );
        let inner = e.rpc_cause().expect("inner error preserved");
        assert_eq!(inner.message(), "vInterface name is invalid");
        // the inner error's own cause is the generic invalid-argument marker
        assert!(inner.rpc_cause().is_none());
        assert!(inner.cause().is_some());
    }
}
