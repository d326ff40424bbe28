//! HTTP client layer — `StorefrontHttp`, one single-attempt GET per endpoint.

pub mod client;

pub use client::StorefrontHttp;
