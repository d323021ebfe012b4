/// Account resource models
pub mod account;
/// Serialization utilities for the protobuf JSON mapping
pub mod serialization;
