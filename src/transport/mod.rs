/// Interceptor hooks around each call
pub mod interceptor;
/// Per-RPC call types and the REST transport
pub mod rest;
/// Request transcoding into HTTP parts
pub mod transcoding;
