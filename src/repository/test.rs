use std::sync::Mutex;

use chrono::DateTime;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::domain::brand::Brand;
use crate::domain::category::Category;
use crate::domain::message::{Message, NewMessage, Turn};
use crate::domain::permission::UserPermission;
use crate::domain::product::Product;
use crate::domain::suggestion::{Suggestion, SuggestionInsert};
use crate::domain::supplier::Supplier;
use crate::domain::types::{
    BrandId, BrandName, CategoryId, CategoryName, MessageId, ModuleName, PermissionId, ProductId,
    ProductName, ProductPrice, StockCount, SuggestionContent, SuggestionId, SupplierId,
    SupplierName, UsageCount, UserId, Username,
};
use crate::domain::user::User;
use crate::repository::{
    BrandReader, CategoryReader, ConversationWriter, MessageReader, PermissionReader,
    ProductReader, SuggestionReader, SuggestionWriter, SupplierReader, UserReader,
};

/// Simple in-memory repository used for unit tests.
#[derive(Default)]
pub struct TestRepository {
    products: Vec<Product>,
    categories: Vec<Category>,
    brands: Vec<Brand>,
    users: Vec<User>,
    permissions: Vec<UserPermission>,
    suppliers: Vec<Supplier>,
    messages: Mutex<Vec<Message>>,
    suggestions: Mutex<Vec<Suggestion>>,
    unavailable: bool,
}

impl TestRepository {
    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_brands(mut self, brands: Vec<Brand>) -> Self {
        self.brands = brands;
        self
    }

    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    pub fn with_permissions(mut self, permissions: Vec<UserPermission>) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn with_suppliers(mut self, suppliers: Vec<Supplier>) -> Self {
        self.suppliers = suppliers;
        self
    }

    pub fn with_suggestions(self, contents: &[&str]) -> Self {
        for content in contents {
            let content = SuggestionContent::new(*content).unwrap();
            self.insert_suggestion(&content);
        }
        self
    }

    /// Every call fails as if the database could not be reached.
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    pub fn messages(&self) -> Vec<Message> {
        self.messages.lock().unwrap().clone()
    }

    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.suggestions.lock().unwrap().clone()
    }

    pub fn usage_of(&self, content: &str) -> Option<i32> {
        self.suggestions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.content == content)
            .map(|s| s.usage_count.get())
    }

    fn check(&self) -> RepositoryResult<()> {
        if self.unavailable {
            Err(RepositoryError::from(DieselError::DatabaseError(
                DatabaseErrorKind::ClosedConnection,
                Box::new("store unreachable".to_string()),
            )))
        } else {
            Ok(())
        }
    }

    fn insert_suggestion(&self, content: &SuggestionContent) -> SuggestionInsert {
        let mut suggestions = self.suggestions.lock().unwrap();
        if suggestions.iter().any(|s| &s.content == content) {
            return SuggestionInsert::Exists;
        }
        let id = SuggestionId::new(suggestions.len() as i32 + 1).unwrap();
        suggestions.push(Suggestion {
            id,
            content: content.clone(),
            usage_count: UsageCount::default(),
        });
        SuggestionInsert::Created
    }
}

impl ProductReader for TestRepository {
    fn list_products(&self, limit: usize) -> RepositoryResult<Vec<Product>> {
        self.check()?;
        Ok(self.products.iter().take(limit).cloned().collect())
    }

    fn count_products(&self) -> RepositoryResult<usize> {
        self.check()?;
        Ok(self.products.len())
    }

    fn count_in_stock_products(&self) -> RepositoryResult<usize> {
        self.check()?;
        Ok(self
            .products
            .iter()
            .filter(|p| !p.stock.is_out_of_stock())
            .count())
    }

    fn list_out_of_stock_products(&self) -> RepositoryResult<Vec<Product>> {
        self.check()?;
        Ok(self
            .products
            .iter()
            .filter(|p| p.stock.is_out_of_stock())
            .cloned()
            .collect())
    }

    fn list_products_by_category(&self, category_id: CategoryId) -> RepositoryResult<Vec<Product>> {
        self.check()?;
        Ok(self
            .products
            .iter()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect())
    }

    fn search_products_by_name(&self, text: &str) -> RepositoryResult<Vec<Product>> {
        self.check()?;
        let text = text.to_lowercase();
        Ok(self
            .products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&text))
            .cloned()
            .collect())
    }
}

impl CategoryReader for TestRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        self.check()?;
        Ok(self.categories.clone())
    }

    fn find_category_by_name(&self, name: &str) -> RepositoryResult<Option<Category>> {
        self.check()?;
        let name = name.trim().to_lowercase();
        Ok(self
            .categories
            .iter()
            .find(|c| c.name.to_lowercase() == name)
            .cloned())
    }

    fn count_categories(&self) -> RepositoryResult<usize> {
        self.check()?;
        Ok(self.categories.len())
    }
}

impl BrandReader for TestRepository {
    fn list_brands(&self) -> RepositoryResult<Vec<Brand>> {
        self.check()?;
        Ok(self.brands.clone())
    }

    fn count_brands(&self) -> RepositoryResult<usize> {
        self.check()?;
        Ok(self.brands.len())
    }
}

impl UserReader for TestRepository {
    fn list_users(&self, limit: usize) -> RepositoryResult<Vec<User>> {
        self.check()?;
        Ok(self.users.iter().take(limit).cloned().collect())
    }

    fn count_users(&self) -> RepositoryResult<usize> {
        self.check()?;
        Ok(self.users.len())
    }
}

impl PermissionReader for TestRepository {
    fn list_permissions(&self, user_id: Option<UserId>) -> RepositoryResult<Vec<UserPermission>> {
        self.check()?;
        Ok(self
            .permissions
            .iter()
            .filter(|p| user_id.is_none_or(|id| p.user_id == id))
            .cloned()
            .collect())
    }
}

impl SupplierReader for TestRepository {
    fn list_suppliers(&self) -> RepositoryResult<Vec<Supplier>> {
        self.check()?;
        Ok(self.suppliers.clone())
    }

    fn count_suppliers(&self) -> RepositoryResult<usize> {
        self.check()?;
        Ok(self.suppliers.len())
    }
}

impl MessageReader for TestRepository {
    fn list_recent_messages(&self, limit: usize) -> RepositoryResult<Vec<Message>> {
        self.check()?;
        let mut messages = self.messages();
        messages.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        messages.truncate(limit);
        Ok(messages)
    }
}

impl ConversationWriter for TestRepository {
    fn record_turn(&self, user: &NewMessage, bot: &NewMessage) -> RepositoryResult<Turn> {
        self.check()?;
        let mut messages = self.messages.lock().unwrap();
        let mut push = |message: &NewMessage| {
            let stored = Message {
                id: MessageId::new(messages.len() as i32 + 1).unwrap(),
                content: message.content.clone(),
                is_user: message.is_user,
                timestamp: message.timestamp,
            };
            messages.push(stored.clone());
            stored
        };
        let user_message = push(user);
        let bot_message = push(bot);

        let mut suggestions = self.suggestions.lock().unwrap();
        let suggestion_used = match suggestions
            .iter_mut()
            .find(|s| s.content.as_str() == user.content.as_str())
        {
            Some(suggestion) => {
                suggestion.usage_count = UsageCount::new(suggestion.usage_count.get() + 1).unwrap();
                true
            }
            None => false,
        };

        Ok(Turn {
            user_message,
            bot_message,
            suggestion_used,
        })
    }
}

impl SuggestionReader for TestRepository {
    fn list_top_suggestions(&self, limit: usize) -> RepositoryResult<Vec<Suggestion>> {
        self.check()?;
        let mut suggestions = self.suggestions();
        suggestions.sort_by(|a, b| b.usage_count.cmp(&a.usage_count).then(a.id.cmp(&b.id)));
        suggestions.truncate(limit);
        Ok(suggestions)
    }
}

impl SuggestionWriter for TestRepository {
    fn create_suggestion(&self, content: &SuggestionContent) -> RepositoryResult<SuggestionInsert> {
        self.check()?;
        Ok(self.insert_suggestion(content))
    }

    fn seed_suggestions(&self, contents: &[SuggestionContent]) -> RepositoryResult<usize> {
        self.check()?;
        Ok(contents
            .iter()
            .filter(|content| self.insert_suggestion(content) == SuggestionInsert::Created)
            .count())
    }
}

/// Fixtures shared by the unit tests of the service layer.
pub mod fixtures {
    use super::*;

    fn epoch() -> chrono::NaiveDateTime {
        DateTime::from_timestamp(0, 0).unwrap().naive_utc()
    }

    pub fn product(id: i32, name: &str, price: &str, stock: i32) -> Product {
        Product {
            id: ProductId::new(id).unwrap(),
            name: ProductName::new(name).unwrap(),
            price: ProductPrice::new(price).unwrap(),
            category_id: CategoryId::new(1).unwrap(),
            stock: StockCount::new(stock).unwrap(),
            created_at: epoch(),
            updated_at: None,
        }
    }

    pub fn category(id: i32, name: &str, description: Option<&str>) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
            description: description.map(str::to_string),
            created_at: epoch(),
            updated_at: None,
        }
    }

    pub fn brand(id: i32, name: &str, description: &str) -> Brand {
        Brand {
            id: BrandId::new(id).unwrap(),
            name: BrandName::new(name).unwrap(),
            description: Some(description.to_string()),
            created_at: epoch(),
            updated_at: None,
        }
    }

    pub fn user(id: i32, username: &str, first: &str, last: &str, email: &str) -> User {
        User {
            id: UserId::new(id).unwrap(),
            username: Username::new(username).unwrap(),
            email: email.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            is_active: true,
            permissions: None,
            created_at: epoch(),
            updated_at: None,
        }
    }

    pub fn permission(id: i32, user_id: i32, module: &str, flags: [bool; 4]) -> UserPermission {
        UserPermission {
            id: PermissionId::new(id).unwrap(),
            user_id: UserId::new(user_id).unwrap(),
            module_name: ModuleName::new(module).unwrap(),
            can_create: flags[0],
            can_read: flags[1],
            can_update: flags[2],
            can_delete: flags[3],
        }
    }

    pub fn supplier(id: i32, name: &str, email: Option<&str>, phone: Option<&str>) -> Supplier {
        Supplier {
            id: SupplierId::new(id).unwrap(),
            name: SupplierName::new(name).unwrap(),
            email: email.map(str::to_string),
            phone: phone.map(str::to_string),
            address: None,
            created_at: epoch(),
            updated_at: None,
        }
    }
}
