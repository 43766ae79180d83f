// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod category;
pub mod place;
pub mod team;

pub use category::*;
pub use place::*;
pub use team::*;
