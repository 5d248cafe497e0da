//! # zoho-desk
//!
//! Library to list and create Zoho Desk tickets with "self client" credentials.
//!
//! Every invocation exchanges the stored refresh token for a fresh access token and then
//! performs exactly one Desk API call. You can read more information about self clients here:
//! [https://desk.zoho.com/DeskAPIDocument#OauthTokens](https://desk.zoho.com/DeskAPIDocument#OauthTokens)
//!
//! Node parameters are plain JSON, named the way workflow hosts name them:
//! `operation` (`getTickets` or `sendTicket`), `overrideContactId`, `contactId`,
//! `overrideDepartmentId`, `departmentId`, `subject`, `description` and `priority`.
//!
//! ### Example
//!
//! ```no_run
//! use serde_json::json;
//! use zoho_desk::{Credentials, Region, ReqwestTransport, ZohoDesk};
//!
//! let credentials = Credentials {
//!     client_id: String::from("YOUR_CLIENT_ID"),
//!     client_secret: String::from("YOUR_CLIENT_SECRET"),
//!     refresh_token: String::from("YOUR_REFRESH_TOKEN"),
//!     org_id: String::from("YOUR_ORG_ID"),
//!     contact_id: String::from("DEFAULT_CONTACT_ID"),
//!     department_id: String::from("DEFAULT_DEPARTMENT_ID"),
//!     region: Region::Europe,
//! };
//!
//! let parameters = json!({
//!     "operation": "sendTicket",
//!     "subject": "Printer broken",
//!     "description": "Won't turn on",
//!     "priority": "High",
//! });
//!
//! let transport = ReqwestTransport::new().unwrap();
//! let node = ZohoDesk::new(credentials, parameters, transport);
//!
//! let items = node.execute().unwrap();
//! println!("{}", items[0].json);
//! ```
//!
//! Tokens are not cached between invocations.

mod client_error;
mod client;
mod credentials;
mod node;
mod operation;
mod region;
pub mod response;
mod ticket;
mod token_broker;
mod token_record;
pub mod transport;

#[cfg(test)]
mod testing;

pub use client::TicketClient;
pub use client_error::ClientError;
pub use credentials::{CredentialSource, Credentials};
pub use node::ZohoDesk;
pub use operation::{Operation, ParameterSource};
pub use region::Region;
pub use response::ExecutionData;
pub use ticket::{Priority, TicketParams, TicketRequest};
pub use token_broker::TokenBroker;
pub use token_record::{AccessToken, TokenRecord};
pub use transport::{HttpTransport, ReqwestTransport};
