use diesel::prelude::*;
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::permission::UserPermission;
use crate::domain::types::UserId;
use crate::models::permission::UserPermission as DbUserPermission;
use crate::repository::{DieselRepository, PermissionReader};

impl PermissionReader for DieselRepository {
    fn list_permissions(&self, user_id: Option<UserId>) -> RepositoryResult<Vec<UserPermission>> {
        use crate::schema::user_permissions;

        let mut conn = self.conn()?;

        let mut query = user_permissions::table
            .order(user_permissions::id.asc())
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(user_id) = user_id {
            query = query.filter(user_permissions::user_id.eq(user_id.get()));
        }

        let items = query
            .load::<DbUserPermission>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<UserPermission>, _>>()?;

        Ok(items)
    }
}
