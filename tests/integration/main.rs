// Integration tests against a local mock of the accounts API

mod account_tests;
mod common;
