// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod catalog;
pub mod slugs;
pub mod time;
pub mod writer;

pub use catalog::{FailingCatalog, InMemoryCatalog};
pub use slugs::TakenSlugs;
pub use time::{FixedClock, fixed_now};
pub use writer::RacingWriter;
