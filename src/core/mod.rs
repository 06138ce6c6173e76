// src/core/mod.rs

pub mod html;
pub mod naming;
pub mod net;
pub mod sanitize;

pub use net::{HttpClient, Payload, Transport};
