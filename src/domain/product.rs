use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, ProductId, ProductName, ProductPrice, StockCount};

/// A catalogue product as seen by the assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    /// Decimal price exactly as stored, e.g. `"9.99"`.
    pub price: ProductPrice,
    pub category_id: CategoryId,
    pub stock: StockCount,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}
