//! DTOs for customer endpoints
//!
//! The create and update contracts share one payload shape. Validation is
//! fail-fast and ordered: declared fields first, then the customer date of
//! birth, then each family date of birth in list order.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use custsvc_domain::customer::{Customer, FamilyMember};

/// Canonical wire format for all dates of birth
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DATE_HINT: &str = "YYYY-MM-DD";

/// Request body shared by `POST /users` and `PUT /users/{id}`
///
/// Every field is decoded as optional so that a missing value is reported as
/// a validation failure rather than a malformed body.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CustomerPayload {
    /// Reference to a nationality row, must be positive
    #[serde(default)]
    #[schema(example = 1)]
    pub nationality_id: Option<i32>,

    #[serde(default)]
    #[schema(example = "ALFA")]
    pub cst_name: Option<String>,

    /// Date of birth, `YYYY-MM-DD`
    #[serde(default)]
    #[schema(example = "1992-05-10")]
    pub cst_dob: Option<String>,

    #[serde(default, rename = "cst_phoneNum")]
    #[schema(example = "0811000001")]
    pub cst_phone_num: Option<String>,

    #[serde(default)]
    #[schema(example = "alfa1@example.com")]
    pub cst_email: Option<String>,

    /// Ordered family list; replaces the stored list wholesale on update
    #[serde(default)]
    pub family: Vec<FamilyPayload>,
}

/// One family entry in the request body
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct FamilyPayload {
    #[serde(default)]
    #[schema(example = "Spouse")]
    pub fl_relation: Option<String>,

    #[serde(default)]
    #[schema(example = "BETA")]
    pub fl_name: Option<String>,

    /// Date of birth, `YYYY-MM-DD`
    #[serde(default)]
    #[schema(example = "1993-07-01")]
    pub fl_dob: Option<String>,
}

/// Rejection reasons for a decodable but invalid payload
///
/// The `Display` strings double as the response messages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    /// A required field is missing, empty, non-positive or not an email
    #[error("validation error")]
    Validation,

    /// `cst_dob` does not match the canonical date format
    #[error("invalid cst_dob")]
    CustomerDob,

    /// A family entry's `fl_dob` does not match the canonical date format;
    /// carries the offending list index
    #[error("invalid fl_dob")]
    FamilyDob(usize),
}

impl PayloadError {
    /// Field-level complaints for the error envelope, when any
    pub fn field_hints(&self) -> Option<HashMap<String, String>> {
        match self {
            Self::Validation => None,
            Self::CustomerDob => Some(HashMap::from([(
                "cst_dob".to_string(),
                DATE_HINT.to_string(),
            )])),
            Self::FamilyDob(index) => Some(HashMap::from([(
                format!("family[{index}].fl_dob"),
                DATE_HINT.to_string(),
            )])),
        }
    }
}

impl CustomerPayload {
    /// Validate the payload and convert it into a domain customer
    ///
    /// First failure wins: declared-field validation, then `cst_dob`, then
    /// each `fl_dob` in list order. The returned customer carries parsed
    /// dates and zeroed ids.
    pub fn into_customer(self) -> Result<Customer, PayloadError> {
        let nationality_id = self
            .nationality_id
            .filter(|id| *id > 0)
            .ok_or(PayloadError::Validation)?;
        let name = required(self.cst_name)?;
        let dob_raw = required(self.cst_dob)?;
        let phone_num = required(self.cst_phone_num)?;
        let email = required(self.cst_email)?;
        if !is_valid_email(&email) {
            return Err(PayloadError::Validation);
        }
        for entry in &self.family {
            if is_blank(&entry.fl_relation) || is_blank(&entry.fl_name) || is_blank(&entry.fl_dob)
            {
                return Err(PayloadError::Validation);
            }
        }

        let dob = parse_date(&dob_raw).ok_or(PayloadError::CustomerDob)?;

        let mut family = Vec::with_capacity(self.family.len());
        for (index, entry) in self.family.into_iter().enumerate() {
            let member_dob = parse_date(&entry.fl_dob.unwrap_or_default())
                .ok_or(PayloadError::FamilyDob(index))?;
            family.push(FamilyMember {
                id: 0,
                customer_id: 0,
                relation: entry.fl_relation.unwrap_or_default(),
                name: entry.fl_name.unwrap_or_default(),
                dob: member_dob,
            });
        }

        Ok(Customer {
            id: 0,
            nationality_id,
            name,
            dob,
            phone_num,
            email,
            family,
        })
    }
}

fn required(value: Option<String>) -> Result<String, PayloadError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(PayloadError::Validation),
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

/// Parse a canonical `YYYY-MM-DD` date, rejecting non-canonical spellings
/// such as `1992-5-10` that chrono would otherwise accept
fn parse_date(value: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(value, DATE_FORMAT).ok()?;
    (date.format(DATE_FORMAT).to_string() == value).then_some(date)
}

/// Minimal syntactic email check: a single `@`, non-empty local part, a
/// dot-separated domain, no whitespace
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Response body for one family member
#[derive(Debug, Serialize, ToSchema)]
pub struct FamilyMemberResponse {
    #[schema(example = "Spouse")]
    pub fl_relation: String,
    #[schema(example = "BETA")]
    pub fl_name: String,
    #[schema(example = "1993-07-01")]
    pub fl_dob: String,
}

impl FamilyMemberResponse {
    fn from_member(member: &FamilyMember) -> Self {
        Self {
            fl_relation: member.relation.clone(),
            fl_name: member.name.clone(),
            fl_dob: format_date(member.dob),
        }
    }
}

/// Full customer representation returned by create and get
#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerResponse {
    #[schema(example = 36)]
    pub cst_id: i32,
    #[schema(example = "ALFA")]
    pub cst_name: String,
    #[schema(example = "1992-05-10")]
    pub cst_dob: String,
    #[schema(example = 1)]
    pub nationality_id: i32,
    #[serde(rename = "cst_phoneNum")]
    #[schema(example = "0811000001")]
    pub cst_phone_num: String,
    #[schema(example = "alfa1@example.com")]
    pub cst_email: String,
    pub family: Vec<FamilyMemberResponse>,
}

impl CustomerResponse {
    /// Build the response for a customer under the given id
    ///
    /// The id is passed separately because a freshly created customer still
    /// carries id 0; the storage-assigned id arrives out of band.
    pub fn new(id: i32, customer: &Customer) -> Self {
        Self {
            cst_id: id,
            cst_name: customer.name.clone(),
            cst_dob: format_date(customer.dob),
            nationality_id: customer.nationality_id,
            cst_phone_num: customer.phone_num.clone(),
            cst_email: customer.email.clone(),
            family: customer
                .family
                .iter()
                .map(FamilyMemberResponse::from_member)
                .collect(),
        }
    }
}

/// One row of the list endpoint (no family list)
#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerListItem {
    pub cst_id: i32,
    pub cst_name: String,
    pub cst_dob: String,
    pub nationality_id: i32,
    #[serde(rename = "cst_phoneNum")]
    pub cst_phone_num: String,
    pub cst_email: String,
}

impl CustomerListItem {
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            cst_id: customer.id,
            cst_name: customer.name.trim().to_string(),
            cst_dob: format_date(customer.dob),
            nationality_id: customer.nationality_id,
            cst_phone_num: customer.phone_num.clone(),
            cst_email: customer.email.clone(),
        }
    }
}

/// Envelope for the list endpoint; `data` is always present, even when empty
#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerListResponse {
    pub data: Vec<CustomerListItem>,
    #[schema(example = 42)]
    pub total: i64,
}

/// Generic acknowledgment for update and delete
#[derive(Debug, Serialize, ToSchema)]
pub struct AckResponse {
    #[schema(example = "ok")]
    pub status: String,
}

impl AckResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> CustomerPayload {
        CustomerPayload {
            nationality_id: Some(1),
            cst_name: Some("ALFA".to_string()),
            cst_dob: Some("1992-05-10".to_string()),
            cst_phone_num: Some("0811000001".to_string()),
            cst_email: Some("alfa1@example.com".to_string()),
            family: vec![FamilyPayload {
                fl_relation: Some("Spouse".to_string()),
                fl_name: Some("BETA".to_string()),
                fl_dob: Some("1993-07-01".to_string()),
            }],
        }
    }

    #[test]
    fn test_valid_payload_converts_to_domain_customer() {
        let customer = valid_payload().into_customer().unwrap();

        assert_eq!(customer.id, 0);
        assert_eq!(customer.name, "ALFA");
        assert_eq!(customer.dob, NaiveDate::from_ymd_opt(1992, 5, 10).unwrap());
        assert_eq!(customer.family.len(), 1);
        assert_eq!(customer.family[0].name, "BETA");
        assert_eq!(
            customer.family[0].dob,
            NaiveDate::from_ymd_opt(1993, 7, 1).unwrap()
        );
    }

    #[test]
    fn test_missing_required_field_is_validation_error() {
        let mut payload = valid_payload();
        payload.cst_name = None;
        assert_eq!(payload.into_customer().unwrap_err(), PayloadError::Validation);

        let mut payload = valid_payload();
        payload.cst_phone_num = Some(String::new());
        assert_eq!(payload.into_customer().unwrap_err(), PayloadError::Validation);
    }

    #[test]
    fn test_non_positive_nationality_id_is_validation_error() {
        let mut payload = valid_payload();
        payload.nationality_id = Some(0);
        assert_eq!(payload.into_customer().unwrap_err(), PayloadError::Validation);

        let mut payload = valid_payload();
        payload.nationality_id = Some(-4);
        assert_eq!(payload.into_customer().unwrap_err(), PayloadError::Validation);
    }

    #[test]
    fn test_bad_email_is_validation_error() {
        for email in ["not-an-email", "a@", "@x.com", "a@b", "a b@x.com", "a@@x.com"] {
            let mut payload = valid_payload();
            payload.cst_email = Some(email.to_string());
            assert_eq!(
                payload.into_customer().unwrap_err(),
                PayloadError::Validation,
                "email {email:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_bad_customer_dob_is_reported_by_field() {
        let mut payload = valid_payload();
        payload.cst_dob = Some("10-05-1992".to_string());

        let err = payload.into_customer().unwrap_err();
        assert_eq!(err, PayloadError::CustomerDob);
        assert_eq!(err.to_string(), "invalid cst_dob");
        let hints = err.field_hints().unwrap();
        assert_eq!(hints.get("cst_dob").map(String::as_str), Some("YYYY-MM-DD"));
    }

    #[test]
    fn test_first_bad_family_dob_is_reported_by_index() {
        let mut payload = valid_payload();
        payload.family.push(FamilyPayload {
            fl_relation: Some("Child".to_string()),
            fl_name: Some("GAMMA".to_string()),
            fl_dob: Some("01/02/2015".to_string()),
        });
        payload.family.push(FamilyPayload {
            fl_relation: Some("Child".to_string()),
            fl_name: Some("DELTA".to_string()),
            fl_dob: Some("also bad".to_string()),
        });

        let err = payload.into_customer().unwrap_err();
        assert_eq!(err, PayloadError::FamilyDob(1));
        let hints = err.field_hints().unwrap();
        assert!(hints.contains_key("family[1].fl_dob"));
    }

    #[test]
    fn test_family_entry_missing_field_is_validation_error() {
        let mut payload = valid_payload();
        payload.family[0].fl_relation = None;
        assert_eq!(payload.into_customer().unwrap_err(), PayloadError::Validation);
    }

    #[test]
    fn test_customer_field_check_precedes_date_parse() {
        // both the email and the dob are bad; the field check wins
        let mut payload = valid_payload();
        payload.cst_email = Some("nope".to_string());
        payload.cst_dob = Some("bad".to_string());
        assert_eq!(payload.into_customer().unwrap_err(), PayloadError::Validation);
    }

    #[test]
    fn test_non_canonical_date_spelling_is_rejected() {
        assert!(parse_date("1992-05-10").is_some());
        assert!(parse_date("1992-5-10").is_none());
        assert!(parse_date("1992-05-10 ").is_none());
        assert!(parse_date("1992-13-01").is_none());
    }

    #[test]
    fn test_list_item_trims_name() {
        let mut customer = valid_payload().into_customer().unwrap();
        customer.id = 7;
        customer.name = "  ALFA  ".to_string();

        let item = CustomerListItem::from_customer(&customer);
        assert_eq!(item.cst_name, "ALFA");
        assert_eq!(item.cst_dob, "1992-05-10");
    }

    #[test]
    fn test_response_round_trips_dates() {
        let customer = valid_payload().into_customer().unwrap();
        let response = CustomerResponse::new(125, &customer);

        assert_eq!(response.cst_id, 125);
        assert_eq!(response.cst_dob, "1992-05-10");
        assert_eq!(response.family[0].fl_dob, "1993-07-01");
    }

    #[test]
    fn test_payload_decodes_with_renamed_phone_field() {
        let payload: CustomerPayload = serde_json::from_str(
            r#"{"nationality_id":1,"cst_name":"ALFA","cst_dob":"1992-05-10",
                "cst_phoneNum":"0811000001","cst_email":"alfa1@example.com"}"#,
        )
        .unwrap();
        assert_eq!(payload.cst_phone_num.as_deref(), Some("0811000001"));
        assert!(payload.family.is_empty());
    }
}
