//! Integration tests driving the full router against a mock remote API.

mod auth_test;
mod coordinator_test;
mod guard_test;
mod helpers;
mod workshop_test;
