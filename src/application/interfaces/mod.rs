/// Account service interface
pub mod account;
