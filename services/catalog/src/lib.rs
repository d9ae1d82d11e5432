//! Campus-market catalog service
//!
//! The catalog query engine for a campus-services marketplace: a
//! persistence-agnostic listing store gateway, a pure filter/sort query
//! pipeline, a facade orchestrating the browse/search/create use cases, and
//! the client-side disclosure and last-parameters-wins session controllers.

pub mod catalog;
pub mod disclosure;
pub mod error;
pub mod middleware;
pub mod models;
pub mod query;
pub mod routes;
pub mod session;
pub mod state;
pub mod store;
pub mod validation;
