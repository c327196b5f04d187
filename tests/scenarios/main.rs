//! End-to-end shopping trips through the runtime layer.

mod session_scenarios;
