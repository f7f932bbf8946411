//! HTTP integration tests driving the full router in-process.

mod category_test;
mod health_test;
mod helpers;
