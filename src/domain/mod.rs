//! Domain entities shared by repositories, services and routes.

pub mod brand;
pub mod category;
pub mod entity;
pub mod message;
pub mod permission;
pub mod product;
pub mod suggestion;
pub mod supplier;
pub mod types;
pub mod user;
