// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Tenant name resolution.

use crate::store::{StoreScope, TenantRecord, TenantStore};
use model::{RpcError, RpcResult, VnodeId, VnodeName};
use tracing::debug;

/// Label used in tenant name validation messages.
const TENANT_NAME: &str = "Tenant name";

/// Validate a raw tenant name.
pub fn check_name(raw: Option<&str>) -> RpcResult<VnodeName> {
    VnodeName::check(raw, TENANT_NAME)
}

/// Validate a raw tenant name and build its identifier.
pub fn get_identifier(raw: Option<&str>) -> RpcResult<VnodeId> {
    let tenant = check_name(raw)?;
    Ok(VnodeId::Tenant { tenant })
}

/// The uniform not-found report for a tenant name.
fn not_found(name: &str) -> RpcError {
    RpcError::not_found(format!("{name}: Tenant does not exist."))
}

/// Validate a raw tenant name for lookup purposes.
///
/// From the resolver's point of view, "cannot validate" and "does not
/// exist" look identical to the caller: a syntax failure is reclassified
/// as DATA_MISSING/NOTFOUND, with the validation error preserved as the
/// cause so diagnostics keep the precise reason. An absent name renders
/// as `null` in the message, matching the absent wire field it quotes.
pub fn get_vnode_name(raw: Option<&str>) -> RpcResult<VnodeName> {
    check_name(raw).map_err(|e| {
        debug!("tenant name {raw:?} did not validate: {e}");
        let shown = raw.unwrap_or("null");
        RpcError::not_found_caused_by(format!("{shown}: Tenant does not exist."), e)
    })
}

/// Look up a tenant by validated name through the store's point read.
///
/// An absent record reports the same not-found error as an unresolvable
/// name; no cause is attached since the name itself already validated.
/// Store failures propagate unchanged.
pub async fn read_vtn<S: TenantStore + ?Sized>(
    store: &S,
    scope: StoreScope,
    name: &VnodeName,
) -> RpcResult<TenantRecord> {
    store
        .read_tenant(scope, name)
        .await?
        .ok_or_else(|| not_found(name.as_str()))
}
