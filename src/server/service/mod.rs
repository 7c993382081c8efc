//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Field defaulting, not-found handling, lock resolution
//! - **Orchestration**: Coordinating repository calls and the HostAway client
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: The listing import runs as a single transaction

pub mod automated_message;
pub mod listing;
pub mod upsell;

#[cfg(test)]
mod test;
