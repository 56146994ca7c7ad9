use chrono::Utc;
use reqwest::Client;

use crate::{error::AppError, spotify, types::Token};

// seconds before expiry at which a token is replaced
const EXPIRY_BUFFER: u64 = 240;

pub struct TokenManager {
    http: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    token: Option<Token>,
}

impl TokenManager {
    pub fn new(http: Client, token_url: String, client_id: String, client_secret: String) -> Self {
        TokenManager {
            http,
            token_url,
            client_id,
            client_secret,
            token: None,
        }
    }

    pub async fn get_valid_token(&mut self) -> Result<String, AppError> {
        if let Some(token) = self.token.as_ref().filter(|t| !Self::is_expired(t)) {
            return Ok(token.access_token.clone());
        }

        let token = spotify::auth::request_token(
            &self.http,
            &self.token_url,
            &self.client_id,
            &self.client_secret,
        )
        .await?;
        let access_token = token.access_token.clone();
        self.token = Some(token);

        Ok(access_token)
    }

    fn is_expired(token: &Token) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= (token.obtained_at + token.expires_in).saturating_sub(EXPIRY_BUFFER)
    }
}
