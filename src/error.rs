use thiserror::Error;

/// Everything that can go wrong while resolving a route request.
/// All variants are terminal for the request; there are no retries and
/// no partial results.
#[derive(Error, Debug)]
pub enum RouteError {
    #[error("ODSAY_API_KEY is not configured")]
    MissingCredential,
    #[error("ODsay request failed: {0}")]
    UpstreamUnavailable(#[from] reqwest::Error),
    #[error("ODsay reported error {code}: {msg}")]
    UpstreamReported { code: String, msg: String },
    #[error("unexpected ODsay response shape: {0}")]
    MalformedResponse(String),
    #[error("ODsay found no transit route")]
    NoRouteFound,
    #[error("selected route carries no mapObj handle")]
    MissingMapObject,
}
