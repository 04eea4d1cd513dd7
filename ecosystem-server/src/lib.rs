//! Ecosystem API server.
//!
//! A small backend for a commuter dashboard: it forwards requests to the
//! NS train information API and the Google Maps APIs, injecting the API
//! keys server-side, and reshapes a few responses for the client.

pub mod config;
pub mod domain;
pub mod journeys;
pub mod logging;
pub mod maps;
pub mod ns;
pub mod web;
