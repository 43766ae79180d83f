// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod health;
pub mod lunch;
pub mod pages;

pub use health::config as health_config;
pub use lunch::config as lunch_config;
pub use pages::config as pages_config;
