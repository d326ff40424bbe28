//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains, where it applies:
//! - `mod.rs` — Rich domain types (validated, render-ready)
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `client.rs` — Sub-client with HTTP methods
//!
//! `confirmation` composes the other three into the post-checkout page.

pub mod address;
pub mod confirmation;
pub mod order;
pub mod payment;
