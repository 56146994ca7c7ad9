use chrono::Utc;
use reqwest::Client;

use crate::{error::AppError, types::Token, utils};

use super::SERVICE;

/// Requests an app access token with the client credentials grant.
///
/// Exchanges the application's client id and secret for an access token.
/// Tokens obtained this way are not tied to a user and cannot be refreshed;
/// a new one is requested once the old one expires.
///
/// # Arguments
///
/// * `http` - Shared HTTP client
/// * `token_url` - Spotify accounts token endpoint
/// * `client_id` - Application client id
/// * `client_secret` - Application client secret
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Fresh token with its lifetime and the time it was obtained
/// - `Err(AppError)` - Network failure, rejected credentials or malformed response
///
/// # Error Conditions
///
/// Spotify answers invalid credentials with 400 `invalid_client`, which is
/// reported as [`AppError::Auth`] just like a 401.
///
/// # Example
///
/// ```
/// let token = request_token(&http, token_url, "client-id", "client-secret").await?;
/// println!("Token expires in {} seconds", token.expires_in);
/// ```
pub async fn request_token(
    http: &Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<Token, AppError> {
    let res = http
        .post(token_url)
        .basic_auth(client_id, Some(client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|source| AppError::unavailable(SERVICE, source))?;

    let token: Token = match utils::decode_response(SERVICE, res).await {
        Ok(token) => token,
        Err(AppError::Upstream {
            status: 400,
            message,
            ..
        }) => {
            return Err(AppError::Auth {
                service: SERVICE,
                message,
            });
        }
        Err(e) => return Err(e),
    };

    if token.access_token.is_empty() {
        return Err(AppError::UpstreamData {
            service: SERVICE,
            message: "token response contained an empty access token".to_string(),
        });
    }

    Ok(Token {
        obtained_at: Utc::now().timestamp() as u64,
        ..token
    })
}
