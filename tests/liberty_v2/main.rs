//! AniLiberty (`/api`) adapter against a local stub server

#[path = "../utils/mod.rs"]
mod utils;

mod adapter_test;
mod errors_test;
