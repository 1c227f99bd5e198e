/// Credential pair returned by registration and sign-in.
///
/// The access token is short-lived and sent on every request; the refresh
/// token is long-lived, persisted server-side, and exchanged only for new
/// access tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
