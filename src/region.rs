//! Zoho datacenter regions.

use crate::client_error::ClientError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The Zoho datacenter an account lives in. It selects both the accounts (OAuth) host and the
/// Desk API host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Region {
    #[default]
    #[serde(rename = "com")]
    Global,
    #[serde(rename = "in")]
    India,
    #[serde(rename = "eu")]
    Europe,
    #[serde(rename = "com.cn")]
    China,
    #[serde(rename = "com.au")]
    Australia,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Global,
        Region::India,
        Region::Europe,
        Region::China,
        Region::Australia,
    ];

    /// Domain suffix used in `accounts.zoho.<suffix>` and `desk.zoho.<suffix>`.
    pub fn suffix(&self) -> &'static str {
        match self {
            Region::Global => "com",
            Region::India => "in",
            Region::Europe => "eu",
            Region::China => "com.cn",
            Region::Australia => "com.au",
        }
    }

    /// Human readable name of the datacenter.
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::Global => "Global (US)",
            Region::India => "India",
            Region::Europe => "Europe",
            Region::China => "China",
            Region::Australia => "Australia",
        }
    }

    pub fn accounts_host(&self) -> String {
        format!("accounts.zoho.{}", self.suffix())
    }

    pub fn desk_host(&self) -> String {
        format!("desk.zoho.{}", self.suffix())
    }

    /// OAuth2 token endpoint for this region.
    pub fn token_url(&self) -> String {
        format!("https://{}/oauth/v2/token", self.accounts_host())
    }

    /// Desk tickets collection endpoint for this region.
    pub fn tickets_url(&self) -> String {
        format!("https://{}/api/v1/tickets", self.desk_host())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

impl FromStr for Region {
    type Err = ClientError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .iter()
            .copied()
            .find(|region| region.suffix() == value)
            .ok_or_else(|| ClientError::invalid_parameter(format!("unknown region `{}`", value)))
    }
}
