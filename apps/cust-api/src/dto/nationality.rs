//! DTOs for nationality endpoints

use serde::Serialize;
use utoipa::ToSchema;

use custsvc_domain::customer::Nationality;

/// One nationality reference row
#[derive(Debug, Serialize, ToSchema)]
pub struct NationalityResponse {
    #[schema(example = 1)]
    pub nationality_id: i32,
    #[schema(example = "Indonesia")]
    pub nationality_name: String,
    /// Optional short code, null when storage has none
    #[schema(example = "ID")]
    pub nationality_code: Option<String>,
}

impl NationalityResponse {
    pub fn from_nationality(nationality: &Nationality) -> Self {
        Self {
            nationality_id: nationality.id,
            nationality_name: nationality.name.clone(),
            nationality_code: nationality.code.clone(),
        }
    }
}
