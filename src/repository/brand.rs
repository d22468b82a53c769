use diesel::prelude::*;
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::brand::Brand;
use crate::models::brand::Brand as DbBrand;
use crate::repository::{BrandReader, DieselRepository};

impl BrandReader for DieselRepository {
    fn list_brands(&self) -> RepositoryResult<Vec<Brand>> {
        use crate::schema::brands;

        let mut conn = self.conn()?;

        let items = brands::table
            .order(brands::id.asc())
            .load::<DbBrand>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Brand>, _>>()?;

        Ok(items)
    }

    fn count_brands(&self) -> RepositoryResult<usize> {
        use crate::schema::brands;

        let mut conn = self.conn()?;
        let total = brands::table.count().get_result::<i64>(&mut conn)?;
        Ok(total as usize)
    }
}
