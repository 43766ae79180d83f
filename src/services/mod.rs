// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod kakao_local_client;
pub mod place_service;
pub mod sampling;
pub mod team_picker;

pub use kakao_local_client::*;
pub use place_service::*;
pub use team_picker::*;
