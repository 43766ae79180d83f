// src/views/mod.rs
// DOCUMENTATION: Views module organization
// PURPOSE: Server-rendered page, card fragments and embedded assets

pub mod assets;
pub mod page;

pub use page::*;
