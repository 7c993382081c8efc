//! Clients for third-party APIs.

pub mod hostaway;
