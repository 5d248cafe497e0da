use crate::client_error::ClientError;
use crate::region::Region;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Self-client credentials for Zoho Desk, as stored by the host.
///
/// Every field except `region` is required. `contact_id` and `department_id` are the defaults
/// used for ticket creation when the caller does not override them.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    pub org_id: String,
    pub contact_id: String,
    pub department_id: String,
    #[serde(default)]
    pub region: Region,
}

impl Credentials {
    /// Parse a credential record from its JSON form.
    pub fn from_json(json: &str) -> Result<Credentials, ClientError> {
        serde_json::from_str(json)
            .map_err(|error| ClientError::invalid_parameter(format!("credentials: {}", error)))
    }

    /// Check that every field except `region` is filled in.
    pub fn validate(&self) -> Result<(), ClientError> {
        let required = [
            ("clientId", &self.client_id),
            ("clientSecret", &self.client_secret),
            ("refreshToken", &self.refresh_token),
            ("orgId", &self.org_id),
            ("contactId", &self.contact_id),
            ("departmentId", &self.department_id),
        ];

        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some(&(field, _)) => Err(ClientError::InvalidCredentials { field }),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &abbreviate(&self.client_id))
            .field("client_secret", &abbreviate(&self.client_secret))
            .field("refresh_token", &abbreviate(&self.refresh_token))
            .field("org_id", &self.org_id)
            .field("contact_id", &self.contact_id)
            .field("department_id", &self.department_id)
            .field("region", &self.region)
            .finish()
    }
}

/// Get an abbreviated version of a secret, safe to print: the first nine and last four
/// characters. Secrets too short to abbreviate are fully masked.
pub(crate) fn abbreviate(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();

    if chars.len() < 16 {
        return "*".repeat(chars.len());
    }

    let prefix: String = chars[..9].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();

    format!("{}..{}", prefix, suffix)
}

/// Host capability that looks up the stored credential record.
pub trait CredentialSource {
    fn credentials(&self) -> Option<Credentials>;
}

impl CredentialSource for Credentials {
    fn credentials(&self) -> Option<Credentials> {
        Some(self.clone())
    }
}

impl CredentialSource for Option<Credentials> {
    fn credentials(&self) -> Option<Credentials> {
        self.clone()
    }
}

impl<F> CredentialSource for F
where
    F: Fn() -> Option<Credentials>,
{
    fn credentials(&self) -> Option<Credentials> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::{abbreviate, CredentialSource, Credentials};
    use crate::client_error::ClientError;
    use crate::region::Region;

    fn get_credentials() -> Credentials {
        Credentials {
            client_id: String::from("1000.CLIENTID"),
            client_secret: String::from("0123456789abcdefghijklmnopqrstuvwxyz"),
            refresh_token: String::from("1000.aaaaaaaaaaaaaaaa.bbbbbbbbbbbbbbbb"),
            org_id: String::from("org1"),
            contact_id: String::from("c1"),
            department_id: String::from("d1"),
            region: Region::Europe,
        }
    }

    #[test]
    fn parses_host_record() {
        let json = r#"{
            "clientId": "id",
            "clientSecret": "secret",
            "refreshToken": "refresh",
            "orgId": "org1",
            "contactId": "c1",
            "departmentId": "d1",
            "region": "com.au"
        }"#;

        let credentials = Credentials::from_json(json).unwrap();

        assert_eq!(credentials.client_id, "id");
        assert_eq!(credentials.org_id, "org1");
        assert_eq!(credentials.region, Region::Australia);
    }

    #[test]
    fn region_defaults_to_global() {
        let json = r#"{
            "clientId": "id",
            "clientSecret": "secret",
            "refreshToken": "refresh",
            "orgId": "org1",
            "contactId": "c1",
            "departmentId": "d1"
        }"#;

        let credentials = Credentials::from_json(json).unwrap();

        assert_eq!(credentials.region, Region::Global);
    }

    #[test]
    fn missing_default_contact_is_rejected() {
        let json = r#"{"clientId":"id","clientSecret":"secret","refreshToken":"refresh","orgId":"org1","departmentId":"d1"}"#;

        match Credentials::from_json(json) {
            Err(ClientError::InvalidParameter(message)) => assert!(message.contains("contactId")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn unknown_region_is_rejected() {
        let json = r#"{
            "clientId": "id",
            "clientSecret": "secret",
            "refreshToken": "refresh",
            "orgId": "org1",
            "contactId": "c1",
            "departmentId": "d1",
            "region": "de"
        }"#;

        match Credentials::from_json(json) {
            Err(ClientError::InvalidParameter(message)) => assert!(message.starts_with("credentials:")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn validate_accepts_complete_record() {
        assert!(get_credentials().validate().is_ok());
    }

    #[test]
    fn validate_reports_first_empty_field() {
        let mut credentials = get_credentials();
        credentials.org_id = String::from("  ");

        match credentials.validate() {
            Err(ClientError::InvalidCredentials { field }) => assert_eq!(field, "orgId"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn validate_requires_default_contact() {
        let mut credentials = get_credentials();
        credentials.contact_id.clear();

        match credentials.validate() {
            Err(ClientError::InvalidCredentials { field }) => assert_eq!(field, "contactId"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn validate_requires_default_department() {
        let mut credentials = get_credentials();
        credentials.department_id.clear();

        match credentials.validate() {
            Err(ClientError::InvalidCredentials { field }) => assert_eq!(field, "departmentId"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn debug_redacts_secrets() {
        let output = format!("{:?}", get_credentials());

        assert!(!output.contains("0123456789abcdefghijklmnopqrstuvwxyz"));
        assert!(output.contains("012345678..wxyz"));
        assert!(output.contains("1000.aaaa..bbbb"));
        assert!(!output.contains("1000.CLIENTID"));
    }

    #[test]
    fn short_secrets_are_masked() {
        assert_eq!(abbreviate("secret"), "******");
        assert_eq!(abbreviate("12345678901234567890").len(), 15);
    }

    #[test]
    fn closures_are_credential_sources() {
        let source = || Some(get_credentials());
        let missing = || -> Option<Credentials> { None };

        assert_eq!(source.credentials().unwrap().org_id, "org1");
        assert!(missing.credentials().is_none());
        assert!(None::<Credentials>.credentials().is_none());
    }
}
