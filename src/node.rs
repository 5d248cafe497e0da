use crate::client::TicketClient;
use crate::client_error::ClientError;
use crate::credentials::CredentialSource;
use crate::operation::{Operation, ParameterSource};
use crate::response::ExecutionData;
use crate::token_broker::TokenBroker;
use crate::transport::HttpTransport;
use tracing::{debug, error, info};

/// The Zoho Desk node: one invocation performs one operation with a freshly exchanged token.
///
/// The three host capabilities are injected, so the node runs the same against a workflow
/// host, a CLI, or test doubles.
pub struct ZohoDesk<C, P, T> {
    credentials: C,
    parameters: P,
    transport: T,
}

impl<C, P, T> ZohoDesk<C, P, T>
where
    C: CredentialSource,
    P: ParameterSource,
    T: HttpTransport,
{
    pub fn new(credentials: C, parameters: P, transport: T) -> ZohoDesk<C, P, T> {
        ZohoDesk {
            credentials,
            parameters,
            transport,
        }
    }

    /// Run the selected operation and return its result as a single item.
    ///
    /// Credentials and parameters are checked before the token exchange, so invalid input
    /// never costs a network call.
    pub fn execute(&self) -> Result<Vec<ExecutionData>, ClientError> {
        info!("Starting Zoho Desk execution");

        self.run().map_err(|err| {
            error!("Operation failed: {}", err);
            err
        })
    }

    fn run(&self) -> Result<Vec<ExecutionData>, ClientError> {
        let credentials = self
            .credentials
            .credentials()
            .ok_or(ClientError::CredentialsMissing)?;
        credentials.validate()?;

        let operation = Operation::from_parameters(&self.parameters, &credentials)?;

        if let Operation::CreateTicket(ticket) = &operation {
            debug!(
                contact_id = %ticket.contact_id,
                department_id = %ticket.department_id,
                subject = %ticket.subject,
                priority = %ticket.priority,
                using_override_contact = ?self.parameters.parameter("overrideContactId"),
                using_override_department = ?self.parameters.parameter("overrideDepartmentId"),
                "ticket details"
            );
        }

        let token = TokenBroker::new(&self.transport).obtain_access_token(&credentials)?;

        let client = TicketClient::new(
            &self.transport,
            credentials.region,
            &token,
            &credentials.org_id,
        );
        let data = client.perform(&operation)?;

        info!(operation = operation.name(), "Zoho Desk execution finished");

        Ok(vec![ExecutionData::new(data)])
    }
}
