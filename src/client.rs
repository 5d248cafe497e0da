use crate::client_error::ClientError;
use crate::operation::Operation;
use crate::region::Region;
use crate::response::{describe_failure, payload};
use crate::ticket::TicketRequest;
use crate::token_record::AccessToken;
use crate::transport::{Body, HttpRequest, HttpTransport, Method};
use serde_json::Value;
use tracing::{debug, error, info};

/// Client for the Desk tickets endpoint, bound to one access token.
pub struct TicketClient<T> {
    transport: T,
    region: Region,
    headers: Vec<(String, String)>,
}

impl<T: HttpTransport> TicketClient<T> {
    /// Create a client whose requests carry `Authorization: Bearer <token>` and `orgId`.
    pub fn new(transport: T, region: Region, token: &AccessToken, org_id: &str) -> TicketClient<T> {
        let headers = vec![
            (String::from("Authorization"), token.bearer()),
            (String::from("orgId"), org_id.to_string()),
        ];

        TicketClient {
            transport,
            region,
            headers,
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Perform the selected operation.
    pub fn perform(&self, operation: &Operation) -> Result<Value, ClientError> {
        match operation {
            Operation::ListTickets => self.list_tickets(),
            Operation::CreateTicket(request) => self.create_ticket(request),
        }
    }

    /// Fetch the tickets of the organization.
    pub fn list_tickets(&self) -> Result<Value, ClientError> {
        info!("Fetching tickets");

        let request = HttpRequest::new(Method::Get, self.region.tickets_url())
            .headers(self.headers.iter().cloned());

        let data = self.send(request)?;

        info!("Successfully retrieved tickets");

        Ok(data)
    }

    /// Create a ticket. The request is validated before anything is sent.
    pub fn create_ticket(&self, ticket: &TicketRequest) -> Result<Value, ClientError> {
        ticket.validate()?;

        let body = serde_json::to_value(ticket)
            .map_err(|err| ClientError::api(format!("failed to encode ticket: {}", err)))?;

        info!("Creating ticket");

        let request = HttpRequest::new(Method::Post, self.region.tickets_url())
            .headers(self.headers.iter().cloned())
            .header("Content-Type", "application/json")
            .body(Body::Json(body));

        let data = self.send(request)?;

        info!("Ticket created successfully");

        Ok(data)
    }

    fn send(&self, request: HttpRequest) -> Result<Value, ClientError> {
        debug!(method = %request.method, url = %request.url, "sending Desk request");

        let response = self.transport.send(request).map_err(|err| {
            error!("Desk request failed: {}", err);
            ClientError::api(err.to_string())
        })?;

        if !response.is_success() {
            error!(status = response.status, "Desk returned an error status");
            return Err(ClientError::api(describe_failure(response.status, &response.body)));
        }

        Ok(payload(&response.body))
    }
}

#[cfg(test)]
mod tests {
    use super::TicketClient;
    use crate::client_error::ClientError;
    use crate::operation::Operation;
    use crate::region::Region;
    use crate::testing::RecordingTransport;
    use crate::ticket::{Priority, TicketRequest};
    use crate::token_record::AccessToken;
    use crate::transport::{Body, HttpResponse, Method};
    use serde_json::json;

    fn get_ticket() -> TicketRequest {
        TicketRequest {
            contact_id: String::from("c1"),
            department_id: String::from("d1"),
            subject: String::from("Printer broken"),
            description: String::from("Won't turn on"),
            priority: Priority::High,
        }
    }

    fn get_client(transport: &RecordingTransport, region: Region) -> TicketClient<&RecordingTransport> {
        TicketClient::new(transport, region, &AccessToken::new("1000.token", None), "org1")
    }

    #[test]
    fn list_tickets_request() {
        let transport = RecordingTransport::new();
        transport.respond(HttpResponse::new(200, r#"{"data":[]}"#));
        let client = get_client(&transport, Region::Global);

        let data = client.list_tickets().unwrap();

        let request = transport.request(0);
        assert_eq!(data, json!({"data": []}));
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "https://desk.zoho.com/api/v1/tickets");
        assert_eq!(request.header_value("Authorization"), Some("Bearer 1000.token"));
        assert_eq!(request.header_value("orgId"), Some("org1"));
        assert_eq!(request.header_value("Content-Type"), None);
        assert_eq!(request.body, None);
    }

    #[test]
    fn create_ticket_request() {
        let transport = RecordingTransport::new();
        transport.respond(HttpResponse::new(200, r#"{"id":"42","ticketNumber":"101"}"#));
        let client = get_client(&transport, Region::Europe);

        let data = client.create_ticket(&get_ticket()).unwrap();

        let request = transport.request(0);
        assert_eq!(data, json!({"id": "42", "ticketNumber": "101"}));
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "https://desk.zoho.eu/api/v1/tickets");
        assert_eq!(request.header_value("Authorization"), Some("Bearer 1000.token"));
        assert_eq!(request.header_value("orgId"), Some("org1"));
        assert_eq!(request.header_value("Content-Type"), Some("application/json"));
        assert_eq!(
            request.body,
            Some(Body::Json(json!({
                "contactId": "c1",
                "departmentId": "d1",
                "subject": "Printer broken",
                "description": "Won't turn on",
                "priority": "High"
            })))
        );
    }

    #[test]
    fn invalid_ticket_is_never_sent() {
        let transport = RecordingTransport::new();
        let client = get_client(&transport, Region::Global);
        let mut ticket = get_ticket();
        ticket.department_id.clear();

        let result = client.create_ticket(&ticket);

        assert!(matches!(result, Err(ClientError::Validation(_))));
        assert_eq!(transport.call_count(), 0);
    }

    #[test]
    fn perform_dispatches_on_operation() {
        let transport = RecordingTransport::new();
        transport.respond(HttpResponse::new(200, "{}"));
        transport.respond(HttpResponse::new(200, "{}"));
        let client = get_client(&transport, Region::India);

        client.perform(&Operation::ListTickets).unwrap();
        client.perform(&Operation::CreateTicket(get_ticket())).unwrap();

        assert_eq!(transport.request(0).method, Method::Get);
        assert_eq!(transport.request(1).method, Method::Post);
        assert_eq!(transport.request(1).url, "https://desk.zoho.in/api/v1/tickets");
    }

    #[test]
    fn error_status_is_an_api_error() {
        let transport = RecordingTransport::new();
        transport.respond(HttpResponse::new(
            401,
            r#"{"errorCode":"INVALID_OAUTH","message":"The OAuth Token you provided is invalid."}"#,
        ));
        let client = get_client(&transport, Region::Global);

        let error = client.list_tickets().unwrap_err();

        assert_eq!(
            error.to_string(),
            "Zoho API Error: [INVALID_OAUTH] The OAuth Token you provided is invalid."
        );
    }

    #[test]
    fn transport_failure_is_an_api_error() {
        let transport = RecordingTransport::new();
        transport.fail_with_timeout();
        let client = get_client(&transport, Region::Global);

        let error = client.create_ticket(&get_ticket()).unwrap_err();

        assert_eq!(error.to_string(), "Zoho API Error: Request timeout");
        assert!(!error.is_token_error());
    }
}
