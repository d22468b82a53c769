//! Text rendering of query results.
//!
//! Every list answer is a one-line header followed by one `- ...` line per
//! row. Empty results get a dedicated sentence instead of an empty list.

use crate::domain::brand::Brand;
use crate::domain::category::Category;
use crate::domain::permission::UserPermission;
use crate::domain::product::Product;
use crate::domain::supplier::Supplier;
use crate::domain::user::User;

pub const NO_PRODUCTS: &str = "No products found in the database.";
pub const NO_CATEGORIES: &str = "No product categories found in the database.";
pub const ALL_IN_STOCK: &str = "All products are currently in stock.";
pub const NO_BRANDS: &str = "No brands found in the database.";
pub const NO_USERS: &str = "No users found in the database.";
pub const NO_PERMISSIONS: &str = "No user permissions found in the database.";
pub const NO_SUPPLIERS: &str = "No suppliers found in the database.";
pub const NO_CATEGORY_NAME: &str = "Please specify a category name.";
pub const UNKNOWN_PRODUCT_NAME: &str = "I couldn't tell which product you're looking for. \
     Try something like 'find product Widget'.";

pub const HELP: &str = "I can help you with information from our e-commerce database. Try asking:\n\
     - List all products\n\
     - Show product categories\n\
     - Show brands\n\
     - List all users\n\
     - Show out of stock products\n\
     - How many products do we have?\n\
     - Show user permissions\n\
     - Show suppliers\n\
     - Search for a specific product";

const MISSING: &str = "N/A";

fn or_missing(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(MISSING)
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Header plus bullet lines, or `empty` when there are no rows.
fn bullet_list<T>(header: &str, empty: &str, rows: &[T], line: impl Fn(&T) -> String) -> String {
    if rows.is_empty() {
        return empty.to_string();
    }
    let lines = rows.iter().map(line).collect::<Vec<_>>().join("\n");
    format!("{header}\n{lines}")
}

fn product_line(product: &Product) -> String {
    format!(
        "- {}: ${}, Stock: {}",
        product.name, product.price, product.stock
    )
}

pub fn products(products: &[Product]) -> String {
    bullet_list(
        "Here are the products in our database:",
        NO_PRODUCTS,
        products,
        product_line,
    )
}

pub fn categories(categories: &[Category]) -> String {
    bullet_list(
        "Here are the product categories:",
        NO_CATEGORIES,
        categories,
        |c| format!("- {}: {}", c.name, or_missing(c.description.as_deref())),
    )
}

pub fn out_of_stock(products: &[Product]) -> String {
    bullet_list("Out of stock products:", ALL_IN_STOCK, products, |p| {
        format!("- {}", p.name)
    })
}

pub fn product_count(total: usize, in_stock: usize) -> String {
    format!("There are {total} products in total, with {in_stock} currently in stock.")
}

pub fn brands(brands: &[Brand]) -> String {
    bullet_list(
        "Here are the brands in our database:",
        NO_BRANDS,
        brands,
        |b| format!("- {}: {}", b.name, or_missing(b.description.as_deref())),
    )
}

pub fn users(users: &[User]) -> String {
    bullet_list("Here are the users in our system:", NO_USERS, users, |u| {
        format!(
            "- {} ({} {}, {})",
            u.username, u.first_name, u.last_name, u.email
        )
    })
}

pub fn permissions(permissions: &[UserPermission]) -> String {
    bullet_list("User permissions:", NO_PERMISSIONS, permissions, |p| {
        format!(
            "- User {}, Module: {}, Create: {}, Read: {}, Update: {}, Delete: {}",
            p.user_id,
            p.module_name,
            yes_no(p.can_create),
            yes_no(p.can_read),
            yes_no(p.can_update),
            yes_no(p.can_delete),
        )
    })
}

pub fn suppliers(suppliers: &[Supplier]) -> String {
    bullet_list("Here are our suppliers:", NO_SUPPLIERS, suppliers, |s| {
        format!(
            "- {} (Email: {}, Phone: {})",
            s.name,
            or_missing(s.email.as_deref()),
            or_missing(s.phone.as_deref()),
        )
    })
}

pub fn product_matches(name: &str, products: &[Product]) -> String {
    bullet_list(
        &format!("Found these products matching '{name}':"),
        &format!("No products found matching '{name}'."),
        products,
        product_line,
    )
}

/// Products of one category. `name` is what the user typed when the
/// category does not exist.
pub fn category_products(name: &str, products: &[Product]) -> String {
    bullet_list(
        &format!("Here are the products in category '{name}':"),
        &format!("No products found in category '{name}'."),
        products,
        product_line,
    )
}

/// Row counts for the overview answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overview {
    pub products: usize,
    pub categories: usize,
    pub brands: usize,
    pub users: usize,
    pub suppliers: usize,
}

pub fn overview(counts: Overview) -> String {
    format!(
        "Database overview:\n\
         - {} products\n\
         - {} product categories\n\
         - {} brands\n\
         - {} users\n\
         - {} suppliers",
        counts.products, counts.categories, counts.brands, counts.users, counts.suppliers
    )
}

/// Answer for messages no intent recognises; echoes the message back.
pub fn fallback(message: &str) -> String {
    format!(
        "I received your message: '{message}'. I can provide information about products, \
         categories, brands, users, and suppliers in our database. Type 'help' to see what I can do."
    )
}
