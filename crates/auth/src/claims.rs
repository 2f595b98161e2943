//! Access token claims

use serde::{Deserialize, Serialize};

/// Claims carried by an Askforge access token
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (stringified numeric user id)
    pub sub: String,
    /// Email of the authenticated user
    pub email: String,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
}
