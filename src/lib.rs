//! Twilio Lookup API Client Library
//!
//! This library provides a typed client for the Twilio Lookup API
//! phone-number resource: carrier, caller-name, and fraud metadata for a
//! phone number, plus optional third-party add-on enrichments.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `lookup_client`: Lookup API client.
//! - `models`: Wire-format data models.

pub mod config;
pub mod errors;
pub mod lookup_client;
pub mod models;
