use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{SupplierId, SupplierName};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: SupplierName,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}
