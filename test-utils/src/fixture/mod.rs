//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. They are used for
//! unit tests of conversion logic and for stubbing the HostAway API in import tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Raw HostAway listing payload with two images
//! let payload = fixture::hostaway::listing_json(42, 2);
//! ```

pub mod hostaway;
