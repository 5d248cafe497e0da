use thiserror::Error;

/// Various errors returned while talking to Zoho Desk.
///
/// Every message names the stage it came from (credentials, token exchange or ticket
/// operation), so a failure can be diagnosed from the message alone.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No credential record could be resolved from the host.
    #[error("No credentials found for Zoho Desk self client")]
    CredentialsMissing,

    /// A required credential field was left empty.
    #[error("Invalid credentials: `{field}` must not be empty")]
    InvalidCredentials { field: &'static str },

    /// An operation parameter was unknown or had the wrong type.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The token endpoint answered with an empty body.
    #[error("Token exchange failed: empty response from token endpoint")]
    EmptyTokenResponse,

    /// The token endpoint answered with something that is not JSON.
    #[error("Token exchange failed: invalid token response format ({0})")]
    MalformedTokenResponse(String),

    /// The token endpoint answered with JSON, but no access token was issued. Zoho reports
    /// the reason (e.g. `invalid_code`) in an `error` field, which is kept when present.
    #[error("Token exchange failed: no access token received{}", reason(.error))]
    TokenNotIssued { error: Option<String> },

    /// The token request itself failed, either in transport or with a non-2xx status.
    #[error("Token exchange failed: {message}")]
    TokenEndpoint { message: String },

    /// Ticket creation was attempted without its required fields.
    #[error("{0}")]
    Validation(String),

    /// The ticket operation failed, either in transport or with a non-2xx status.
    #[error("Zoho API Error: {0}")]
    Api(String),
}

fn reason(error: &Option<String>) -> String {
    match error {
        Some(error) => format!(" ({})", error),
        None => String::new(),
    }
}

impl ClientError {
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        ClientError::InvalidParameter(message.into())
    }

    pub fn api(message: impl Into<String>) -> Self {
        ClientError::Api(message.into())
    }

    /// `true` when the error came out of the token exchange stage.
    pub fn is_token_error(&self) -> bool {
        matches!(
            self,
            ClientError::EmptyTokenResponse
                | ClientError::MalformedTokenResponse(_)
                | ClientError::TokenNotIssued { .. }
                | ClientError::TokenEndpoint { .. }
        )
    }
}
