//! HTTP API Client

pub mod client;

pub use client::{fetch_trend, get_api_base, GENERIC_FETCH_ERROR};
