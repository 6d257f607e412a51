//! Local backend adapter against a local stub server

#[path = "../utils/mod.rs"]
mod utils;

mod adapter_test;
