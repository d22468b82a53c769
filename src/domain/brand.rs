use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{BrandId, BrandName};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub id: BrandId,
    pub name: BrandName,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}
