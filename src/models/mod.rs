//! Diesel row types and their conversions into domain entities.

pub mod brand;
pub mod category;
#[cfg(feature = "server")]
pub mod config;
pub mod message;
pub mod permission;
pub mod product;
pub mod suggestion;
pub mod supplier;
pub mod user;
