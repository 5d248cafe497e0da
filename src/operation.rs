//! Reading the selected operation out of the host's node parameters.

use crate::client_error::ClientError;
use crate::credentials::Credentials;
use crate::ticket::{Priority, TicketParams, TicketRequest};
use serde_json::{Map, Value};
use std::collections::HashMap;

pub const GET_TICKETS: &str = "getTickets";
pub const SEND_TICKET: &str = "sendTicket";

/// The operation performed by one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    ListTickets,
    CreateTicket(TicketRequest),
}

impl Operation {
    /// Parameter value naming this operation.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::ListTickets => GET_TICKETS,
            Operation::CreateTicket(_) => SEND_TICKET,
        }
    }

    /// Build the operation from node parameters. For `sendTicket` the contact and department
    /// defaults are taken from `credentials` and the resulting request is validated, so an
    /// incomplete ticket never reaches the network.
    pub fn from_parameters<P>(
        parameters: &P,
        credentials: &Credentials,
    ) -> Result<Operation, ClientError>
    where
        P: ParameterSource + ?Sized,
    {
        let operation = string_parameter(parameters, "operation")?;

        match operation.as_deref().unwrap_or(GET_TICKETS) {
            GET_TICKETS => Ok(Operation::ListTickets),
            SEND_TICKET => {
                let params = ticket_params(parameters)?;
                Ok(Operation::CreateTicket(params.resolve(credentials)?))
            }
            other => Err(ClientError::invalid_parameter(format!(
                "unknown operation `{}`",
                other
            ))),
        }
    }
}

/// Host capability that looks up a node parameter by name. Missing parameters fall back to
/// their defaults.
pub trait ParameterSource {
    fn parameter(&self, name: &str) -> Option<Value>;
}

impl ParameterSource for HashMap<String, Value> {
    fn parameter(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl ParameterSource for Map<String, Value> {
    fn parameter(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl ParameterSource for Value {
    fn parameter(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

fn ticket_params<P>(parameters: &P) -> Result<TicketParams, ClientError>
where
    P: ParameterSource + ?Sized,
{
    let priority = match string_parameter(parameters, "priority")? {
        Some(priority) => priority.parse::<Priority>()?,
        None => Priority::default(),
    };

    Ok(TicketParams {
        override_contact_id: bool_parameter(parameters, "overrideContactId")?,
        contact_id: string_parameter(parameters, "contactId")?.unwrap_or_default(),
        override_department_id: bool_parameter(parameters, "overrideDepartmentId")?,
        department_id: string_parameter(parameters, "departmentId")?.unwrap_or_default(),
        subject: string_parameter(parameters, "subject")?.unwrap_or_default(),
        description: string_parameter(parameters, "description")?.unwrap_or_default(),
        priority,
    })
}

fn string_parameter<P>(parameters: &P, name: &str) -> Result<Option<String>, ClientError>
where
    P: ParameterSource + ?Sized,
{
    match parameters.parameter(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(other) => Err(ClientError::invalid_parameter(format!(
            "`{}` must be a string, got {}",
            name, other
        ))),
    }
}

fn bool_parameter<P>(parameters: &P, name: &str) -> Result<bool, ClientError>
where
    P: ParameterSource + ?Sized,
{
    match parameters.parameter(name) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(value)) => Ok(value),
        Some(other) => Err(ClientError::invalid_parameter(format!(
            "`{}` must be a boolean, got {}",
            name, other
        ))),
    }
}
