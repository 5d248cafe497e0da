use crate::client_error::ClientError;
use crate::credentials::Credentials;
use crate::token_record::{AccessToken, TokenRecord};
use crate::transport::{Body, HttpRequest, HttpTransport, Method};
use serde_json::error::Category;
use tracing::{debug, error, info};

/// Exchanges a self-client refresh token for a bearer access token.
///
/// Nothing is cached: every call to [`TokenBroker::obtain_access_token`] performs a fresh
/// exchange against the accounts server of the credentials' region.
pub struct TokenBroker<T> {
    transport: T,
}

impl<T: HttpTransport> TokenBroker<T> {
    pub fn new(transport: T) -> TokenBroker<T> {
        TokenBroker { transport }
    }

    /// Get a new access token from Zoho. Guarantees a non-empty token when it returns
    /// `Result::Ok`.
    pub fn obtain_access_token(
        &self,
        credentials: &Credentials,
    ) -> Result<AccessToken, ClientError> {
        let url = credentials.region.token_url();

        info!("Requesting new access token using refresh token");
        debug!(%url, region = %credentials.region, "token endpoint");

        let request = HttpRequest::new(Method::Post, url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::Form(vec![
                (String::from("client_id"), credentials.client_id.clone()),
                (String::from("client_secret"), credentials.client_secret.clone()),
                (String::from("refresh_token"), credentials.refresh_token.clone()),
                (String::from("grant_type"), String::from("refresh_token")),
            ]));

        let response = self.transport.send(request).map_err(|err| {
            error!("Token request failed: {}", err);
            ClientError::TokenEndpoint {
                message: err.to_string(),
            }
        })?;

        if !response.is_success() {
            error!(status = response.status, "Token endpoint returned an error status");
            return Err(ClientError::TokenEndpoint {
                message: format!("HTTP {}: {}", response.status, response.body),
            });
        }

        let token = parse_token(&response.body)?;

        info!("Successfully obtained new access token");

        Ok(token)
    }
}

/// Classify a token endpoint body: empty, not JSON, JSON without a token, or a usable token.
fn parse_token(body: &str) -> Result<AccessToken, ClientError> {
    if body.is_empty() {
        error!("Empty response from token endpoint");
        return Err(ClientError::EmptyTokenResponse);
    }

    let record = match serde_json::from_str::<TokenRecord>(body) {
        Ok(record) => record,
        // well-formed JSON of the wrong shape, e.g. an array or a mistyped field
        Err(err) if err.classify() == Category::Data => {
            error!("Token response is not a token record: {}", err);
            return Err(ClientError::TokenNotIssued { error: None });
        }
        Err(err) => {
            error!("Failed to parse token response: {}", err);
            return Err(ClientError::MalformedTokenResponse(err.to_string()));
        }
    };

    match record.access_token {
        Some(access_token) if !access_token.is_empty() => {
            Ok(AccessToken::new(access_token, record.expires_in))
        }
        _ => {
            error!(error = ?record.error, "No access token in response");
            Err(ClientError::TokenNotIssued {
                error: record.error,
            })
        }
    }
}
