// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Transactional tenant store abstraction.
//!
//! The surrounding system owns the topology tree in a transactional
//! store; this core only ever issues single point-reads against it. The
//! store is responsible for its own concurrency control, isolation, and
//! cancellation; a read here is one awaited call returning an optional
//! record, and a store failure propagates unchanged.

use async_trait::async_trait;
use model::{RpcResult, VnodeName};

/// Which logical view of the store a read targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StoreScope {
    /// The observed, operational state.
    Operational,
    /// The intended, configured state.
    Config,
}

/// A stored tenant, as returned by a point read.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TenantRecord {
    pub name: VnodeName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TenantRecord {
    /// Build a record for a validated name.
    #[must_use]
    pub fn new(name: VnodeName) -> Self {
        Self {
            name,
            description: None,
        }
    }
}

/// Point-read access to the tenant tree.
#[async_trait]
pub trait TenantStore {
    /// Read the tenant with the given validated name, or `None` when no
    /// such tenant exists in the selected view.
    async fn read_tenant(
        &self,
        scope: StoreScope,
        name: &VnodeName,
    ) -> RpcResult<Option<TenantRecord>>;
}
