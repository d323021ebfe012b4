/// Default host of the CSS API
pub const DEFAULT_HOST: &str = "css.googleapis.com";
/// Default URL scheme used when the host carries none
pub const DEFAULT_URL_SCHEME: &str = "https";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
/// OAuth scope required by the accounts API
pub const DEFAULT_SCOPE: &str = "https://www.googleapis.com/auth/content";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("css-accounts-client/", env!("CARGO_PKG_VERSION"));
/// Value of the `x-goog-api-client` header sent with every request
pub const API_CLIENT_HEADER: &str = concat!(
    "gl-rust/",
    env!("CARGO_PKG_VERSION"),
    " gapic/",
    env!("CARGO_PKG_VERSION"),
    " rest/reqwest"
);
/// System parameter appended to every request's query string
///
/// Asks the server for JSON responses with enums encoded as integers.
pub const ALT_JSON_PARAM: (&str, &str) = ("$alt", "json;enum-encoding=int");
/// Default retry delay in seconds between attempts
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 1;
