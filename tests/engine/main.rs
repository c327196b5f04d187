//! Integration tests for the trolley_engine crate.
//!
//! - Movement and acquisition rules
//! - Cart and checkout bookkeeping
//! - Endings and fatal errors

mod dispatch_tests;
