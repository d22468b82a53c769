use diesel::prelude::*;
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::product::Product;
use crate::domain::types::CategoryId;
use crate::models::product::Product as DbProduct;
use crate::repository::{DieselRepository, ProductReader, fold_case};

/// Build a `LIKE` pattern matching `text` anywhere, with wildcards in the
/// input escaped by `\`. Compared against `fold_case(column)`.
pub(crate) fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for ch in text.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn into_domain(rows: Vec<DbProduct>) -> RepositoryResult<Vec<Product>> {
    let products = rows
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<Product>, _>>()?;
    Ok(products)
}

impl ProductReader for DieselRepository {
    fn list_products(&self, limit: usize) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let rows = products::table
            .order(products::id.asc())
            .limit(limit as i64)
            .load::<DbProduct>(&mut conn)?;

        into_domain(rows)
    }

    fn count_products(&self) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let total = products::table.count().get_result::<i64>(&mut conn)?;
        Ok(total as usize)
    }

    fn count_in_stock_products(&self) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let total = products::table
            .filter(products::stock.gt(0))
            .count()
            .get_result::<i64>(&mut conn)?;
        Ok(total as usize)
    }

    fn list_out_of_stock_products(&self) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let rows = products::table
            .filter(products::stock.eq(0))
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?;

        into_domain(rows)
    }

    fn list_products_by_category(&self, category_id: CategoryId) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let rows = products::table
            .filter(products::category_id.eq(category_id.get()))
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?;

        into_domain(rows)
    }

    fn search_products_by_name(&self, text: &str) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.folding_conn()?;

        let rows = products::table
            .filter(
                fold_case(products::name)
                    .like(contains_pattern(text))
                    .escape('\\'),
            )
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?;

        into_domain(rows)
    }
}
