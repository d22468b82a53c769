use diesel::prelude::*;
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::category::Category;
use crate::models::category::Category as DbCategory;
use crate::repository::{CategoryReader, DieselRepository, fold_case};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let items = categories::table
            .order(categories::id.asc())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(items)
    }

    fn find_category_by_name(&self, name: &str) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.folding_conn()?;

        let row = categories::table
            .filter(fold_case(categories::name).eq(name.trim().to_lowercase()))
            .order(categories::id.asc())
            .first::<DbCategory>(&mut conn)
            .optional()?;

        Ok(row.map(Category::try_from).transpose()?)
    }

    fn count_categories(&self) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let total = categories::table.count().get_result::<i64>(&mut conn)?;
        Ok(total as usize)
    }
}
