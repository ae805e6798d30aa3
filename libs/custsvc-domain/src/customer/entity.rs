//! Domain entities for customer management
//!
//! A Customer owns its family list by composition: family members have no
//! lifecycle of their own and are replaced wholesale when the customer is
//! updated. Nationality is read-only reference data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A customer record with contact and nationality data
///
/// The `id` is assigned by storage on creation and immutable afterwards;
/// an unsaved customer carries `id = 0` until the persistence layer returns
/// the generated key. The email is unique across all customers, enforced by
/// the persistence layer and surfaced as a conflict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Storage-assigned identifier (0 until persisted)
    pub id: i32,

    /// Foreign key into the nationality reference table
    pub nationality_id: i32,

    /// Customer name, non-empty
    pub name: String,

    /// Date of birth, calendar date only
    pub dob: NaiveDate,

    /// Contact phone number
    pub phone_num: String,

    /// Contact email, unique system-wide
    pub email: String,

    /// Owned family members, ordered as given at creation/update
    pub family: Vec<FamilyMember>,
}

/// A dependent record owned by exactly one customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    /// Storage-assigned identifier (0 until persisted)
    pub id: i32,

    /// Owning customer (0 until persisted)
    pub customer_id: i32,

    /// Free-form relation label, e.g. "Spouse", "Child"
    pub relation: String,

    /// Family member name, non-empty
    pub name: String,

    /// Date of birth, calendar date only
    pub dob: NaiveDate,
}

/// Read-only nationality reference entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nationality {
    pub id: i32,
    pub name: String,
    /// Optional short code, nullable in storage
    pub code: Option<String>,
}
