//! HTTP client wrapper
//!
//! A thin layer over `reqwest`: base-URL joining, request timeout, default
//! headers, user agent. There is deliberately no retry or rate limiting —
//! any request failure aborts the whole run.

mod client;

#[cfg(test)]
mod tests;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
