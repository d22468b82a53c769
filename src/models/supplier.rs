use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::supplier::Supplier as DomainSupplier;
use crate::domain::types::{SupplierName, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::suppliers)]
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl TryFrom<Supplier> for DomainSupplier {
    type Error = TypeConstraintError;

    fn try_from(supplier: Supplier) -> Result<Self, Self::Error> {
        Ok(Self {
            id: supplier.id.try_into()?,
            name: SupplierName::new(supplier.name)?,
            email: supplier.email,
            phone: supplier.phone,
            address: supplier.address,
            created_at: supplier.created_at,
            updated_at: supplier.updated_at,
        })
    }
}
