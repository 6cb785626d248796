//! # Seed Core - Domain Module
//! 
//! Records created by the first-boot installer.

pub mod operator;
pub mod country;
pub mod state;
pub mod city;
pub mod identity;
pub mod entity;
pub mod user;

pub use operator::Operator;
pub use country::Country;
pub use state::State;
pub use city::City;
pub use identity::{Identity, IdentitySecret, PersonalData};
pub use entity::{Entity, EntityPrototype};
pub use user::User;
