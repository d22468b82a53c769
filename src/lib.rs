//! Core library exports for the Faria assistant service.
//!
//! The `data` feature exposes the domain types, Diesel models and
//! repositories. The `server` feature adds entity extraction, the intent
//! table, answer rendering, services and the HTTP routes of the
//! conversational query endpoint.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod intent;
#[cfg(feature = "server")]
pub mod nlp;
#[cfg(feature = "server")]
pub mod render;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
