// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Resolution glue over the virtual node identifier model.
//!
//! Sits on top of the pure model crate and adds the two operations that
//! involve context outside a single record: tenant lookup through the
//! external transactional store, and conversion of flow-redirect targets
//! into interface identifiers.

pub mod redirect;
pub mod store;
pub mod tenant;

pub use redirect::RedirectDestination;
pub use store::{StoreScope, TenantRecord, TenantStore};
