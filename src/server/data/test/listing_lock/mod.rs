use crate::server::data::listing_lock::ListingLockRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_active_by_listing_id;
