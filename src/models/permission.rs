use diesel::prelude::*;

use crate::domain::permission::UserPermission as DomainUserPermission;
use crate::domain::types::{ModuleName, TypeConstraintError};

/// Diesel model representing the `user_permissions` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::user_permissions)]
pub struct UserPermission {
    pub id: i32,
    pub user_id: i32,
    pub module_name: String,
    pub can_create: bool,
    pub can_read: bool,
    pub can_update: bool,
    pub can_delete: bool,
}

impl TryFrom<UserPermission> for DomainUserPermission {
    type Error = TypeConstraintError;

    fn try_from(permission: UserPermission) -> Result<Self, Self::Error> {
        Ok(Self {
            id: permission.id.try_into()?,
            user_id: permission.user_id.try_into()?,
            module_name: ModuleName::new(permission.module_name)?,
            can_create: permission.can_create,
            can_read: permission.can_read,
            can_update: permission.can_update,
            can_delete: permission.can_delete,
        })
    }
}
