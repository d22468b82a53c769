use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::brand::Brand as DomainBrand;
use crate::domain::types::{BrandName, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::brands)]
pub struct Brand {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl TryFrom<Brand> for DomainBrand {
    type Error = TypeConstraintError;

    fn try_from(brand: Brand) -> Result<Self, Self::Error> {
        Ok(Self {
            id: brand.id.try_into()?,
            name: BrandName::new(brand.name)?,
            description: brand.description,
            created_at: brand.created_at,
            updated_at: brand.updated_at,
        })
    }
}
