//! Ticket creation input.

use crate::client_error::ClientError;
use crate::credentials::Credentials;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MISSING_PARAMETERS: &str = "Missing required parameters for ticket creation";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ClientError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Low" => Ok(Priority::Low),
            "Medium" => Ok(Priority::Medium),
            "High" => Ok(Priority::High),
            "Urgent" => Ok(Priority::Urgent),
            _ => Err(ClientError::invalid_parameter(format!(
                "unknown priority `{}`",
                value
            ))),
        }
    }
}

/// Per-invocation ticket input as the caller supplied it, before the contact and department
/// defaults from the credentials are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketParams {
    pub override_contact_id: bool,
    pub contact_id: String,
    pub override_department_id: bool,
    pub department_id: String,
    pub subject: String,
    pub description: String,
    pub priority: Priority,
}

impl TicketParams {
    /// Apply the credential defaults wherever no override was requested, then validate.
    ///
    /// An explicit id is ignored unless its override flag is set.
    pub fn resolve(self, credentials: &Credentials) -> Result<TicketRequest, ClientError> {
        let contact_id = if self.override_contact_id {
            self.contact_id
        } else {
            credentials.contact_id.clone()
        };

        let department_id = if self.override_department_id {
            self.department_id
        } else {
            credentials.department_id.clone()
        };

        let request = TicketRequest {
            contact_id,
            department_id,
            subject: self.subject,
            description: self.description,
            priority: self.priority,
        };

        request.validate()?;

        Ok(request)
    }
}

/// Body of a create-ticket call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    pub contact_id: String,
    pub department_id: String,
    pub subject: String,
    pub description: String,
    pub priority: Priority,
}

impl TicketRequest {
    /// Contact, department and subject must be present. The description may be empty.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.contact_id.is_empty() || self.department_id.is_empty() || self.subject.is_empty() {
            return Err(ClientError::Validation(String::from(MISSING_PARAMETERS)));
        }

        Ok(())
    }
}
