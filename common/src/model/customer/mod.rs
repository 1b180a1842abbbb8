//! Customer model and identifier

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Process-unique customer identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(Uuid);

impl CustomerId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CustomerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for CustomerId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| Error::invalid_argument(format!("Invalid customer id '{}': {}", s, e)))
    }
}

/// Customer model
///
/// Two customers are equal iff their ids are equal; the name plays no part in
/// identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CustomerRecord")]
pub struct Customer {
    /// Unique customer ID
    id: CustomerId,
    /// Display name, never blank
    name: String,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last rename timestamp
    updated_at: DateTime<Utc>,
}

/// Unvalidated wire form of a [`Customer`]
#[derive(Debug, Deserialize)]
pub struct CustomerRecord {
    id: CustomerId,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CustomerRecord> for Customer {
    type Error = Error;

    fn try_from(record: CustomerRecord) -> Result<Self> {
        Ok(Self {
            id: record.id,
            name: validate_name(record.name)?,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

impl Customer {
    /// Create a customer with a freshly generated id
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = validate_name(name.into())?;
        let now = Utc::now();

        Ok(Self {
            id: CustomerId::new(),
            name,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replace the display name. Leaves the customer untouched on invalid input.
    pub fn rename(&mut self, new_name: impl Into<String>) -> Result<()> {
        self.name = validate_name(new_name.into())?;
        self.updated_at = Utc::now();
        Ok(())
    }
}

fn validate_name(name: String) -> Result<String> {
    if name.trim().is_empty() {
        return Err(Error::invalid_argument("Customer name cannot be empty."));
    }
    Ok(name)
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Customer {}

impl Hash for Customer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer{{id='{}', name='{}'}}", self.id, self.name)
    }
}
