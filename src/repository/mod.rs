use diesel::sql_types::Text;
use pushkind_common::db::{DbConnection, DbPool};
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::brand::Brand;
use crate::domain::category::Category;
use crate::domain::message::{Message, NewMessage, Turn};
use crate::domain::permission::UserPermission;
use crate::domain::product::Product;
use crate::domain::suggestion::{Suggestion, SuggestionInsert};
use crate::domain::supplier::Supplier;
use crate::domain::types::{CategoryId, SuggestionContent, UserId};
use crate::domain::user::User;

pub mod brand;
pub mod category;
pub mod message;
pub mod permission;
pub mod product;
pub mod suggestion;
pub mod supplier;
#[cfg(test)]
pub mod test;
pub mod user;

diesel::define_sql_function! {
    /// Unicode lowercase. SQLite's own `lower()` and `LIKE` only fold ASCII.
    fn fold_case(x: Text) -> Text;
}

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers. Every method checks out its own
/// connection and returns it to the pool on exit.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }

    /// Get a pooled connection with `fold_case` registered on it.
    fn folding_conn(&self) -> RepositoryResult<DbConnection> {
        let mut conn = self.conn()?;
        fold_case_utils::register_impl(&mut conn, |text: String| text.to_lowercase())?;
        Ok(conn)
    }
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List at most `limit` products in primary-key order.
    fn list_products(&self, limit: usize) -> RepositoryResult<Vec<Product>>;
    /// Count all products.
    fn count_products(&self) -> RepositoryResult<usize>;
    /// Count products with a positive stock.
    fn count_in_stock_products(&self) -> RepositoryResult<usize>;
    /// List products whose stock is zero.
    fn list_out_of_stock_products(&self) -> RepositoryResult<Vec<Product>>;
    /// List products assigned to a category.
    fn list_products_by_category(&self, category_id: CategoryId) -> RepositoryResult<Vec<Product>>;
    /// Case-insensitive partial match on the product name.
    fn search_products_by_name(&self, text: &str) -> RepositoryResult<Vec<Product>>;
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Category whose name equals `name` ignoring case, lowest id first.
    fn find_category_by_name(&self, name: &str) -> RepositoryResult<Option<Category>>;
    fn count_categories(&self) -> RepositoryResult<usize>;
}

/// Read-only operations for brand entities.
pub trait BrandReader {
    fn list_brands(&self) -> RepositoryResult<Vec<Brand>>;
    fn count_brands(&self) -> RepositoryResult<usize>;
}

/// Read-only operations for user entities.
pub trait UserReader {
    /// List at most `limit` users in primary-key order.
    fn list_users(&self, limit: usize) -> RepositoryResult<Vec<User>>;
    fn count_users(&self) -> RepositoryResult<usize>;
}

/// Read-only operations for permission rows.
pub trait PermissionReader {
    /// List all permission rows, or only those of `user_id` when given.
    fn list_permissions(&self, user_id: Option<UserId>) -> RepositoryResult<Vec<UserPermission>>;
}

/// Read-only operations for supplier entities.
pub trait SupplierReader {
    fn list_suppliers(&self) -> RepositoryResult<Vec<Supplier>>;
    fn count_suppliers(&self) -> RepositoryResult<usize>;
}

/// Every catalogue reader the assistant queries while answering a message.
pub trait CatalogReader:
    ProductReader + CategoryReader + BrandReader + UserReader + PermissionReader + SupplierReader
{
}

impl<T> CatalogReader for T where
    T: ProductReader + CategoryReader + BrandReader + UserReader + PermissionReader + SupplierReader
{
}

/// Read-only operations for the conversation log.
pub trait MessageReader {
    /// Most recent messages first, at most `limit` of them.
    fn list_recent_messages(&self, limit: usize) -> RepositoryResult<Vec<Message>>;
}

/// Write operations for the conversation log.
pub trait ConversationWriter {
    /// Persist both sides of a turn and bump the usage of a suggestion whose
    /// content equals the user text. All writes happen atomically.
    fn record_turn(&self, user: &NewMessage, bot: &NewMessage) -> RepositoryResult<Turn>;
}

/// Read-only operations for canned suggestions.
pub trait SuggestionReader {
    /// Suggestions ordered by usage count, most used first.
    fn list_top_suggestions(&self, limit: usize) -> RepositoryResult<Vec<Suggestion>>;
}

/// Write operations for canned suggestions.
pub trait SuggestionWriter {
    /// Insert a suggestion unless one with identical content exists.
    fn create_suggestion(&self, content: &SuggestionContent) -> RepositoryResult<SuggestionInsert>;
    /// Insert every missing suggestion, returning how many were added.
    fn seed_suggestions(&self, contents: &[SuggestionContent]) -> RepositoryResult<usize>;
}
