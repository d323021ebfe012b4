/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// Authenticated HTTP session
pub mod http;
/// Request models and per-call options
pub mod requests;
/// Response models
pub mod responses;
/// Retry configuration for HTTP requests
pub mod retry;
