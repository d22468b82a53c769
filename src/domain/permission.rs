use serde::{Deserialize, Serialize};

use crate::domain::types::{ModuleName, PermissionId, UserId};

/// CRUD flags granted to a user for one application module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserPermission {
    pub id: PermissionId,
    pub user_id: UserId,
    pub module_name: ModuleName,
    pub can_create: bool,
    pub can_read: bool,
    pub can_update: bool,
    pub can_delete: bool,
}
