use diesel::prelude::*;
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::supplier::Supplier;
use crate::models::supplier::Supplier as DbSupplier;
use crate::repository::{DieselRepository, SupplierReader};

impl SupplierReader for DieselRepository {
    fn list_suppliers(&self) -> RepositoryResult<Vec<Supplier>> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;

        let items = suppliers::table
            .order(suppliers::id.asc())
            .load::<DbSupplier>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Supplier>, _>>()?;

        Ok(items)
    }

    fn count_suppliers(&self) -> RepositoryResult<usize> {
        use crate::schema::suppliers;

        let mut conn = self.conn()?;
        let total = suppliers::table.count().get_result::<i64>(&mut conn)?;
        Ok(total as usize)
    }
}
