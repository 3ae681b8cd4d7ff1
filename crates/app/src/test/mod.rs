//! Postgres-backed test harness for service tests.


pub(crate) use context::TestContext;
