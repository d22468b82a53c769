//! Helpers for integration tests.
#![allow(dead_code)]

use diesel::prelude::*;
use pushkind_common::db::{DbPool, establish_connection_pool};
use pushkind_faria::db::run_migrations;
use pushkind_faria::schema::{brands, categories, products, suppliers, user_permissions, users};
use tempfile::NamedTempFile;

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        run_migrations(&pool).expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    /// Insert a small catalogue: one category, Widget (in stock) and Gadget
    /// (out of stock), a brand, a supplier without a phone, and two users
    /// with one permission row each.
    pub fn seed_catalogue(&self) {
        let mut conn = self.pool.get().expect("should acquire DB connection");

        diesel::insert_into(categories::table)
            .values((
                categories::name.eq("Gizmos"),
                categories::description.eq("Small useful things"),
            ))
            .execute(&mut conn)
            .expect("should create category");

        diesel::insert_into(products::table)
            .values(&vec![
                (
                    products::name.eq("Widget"),
                    products::price.eq("9.99"),
                    products::category_id.eq(1),
                    products::stock.eq(5),
                ),
                (
                    products::name.eq("Gadget"),
                    products::price.eq("19.99"),
                    products::category_id.eq(1),
                    products::stock.eq(0),
                ),
            ])
            .execute(&mut conn)
            .expect("should create products");

        diesel::insert_into(brands::table)
            .values(brands::name.eq("Acme"))
            .execute(&mut conn)
            .expect("should create brand");

        diesel::insert_into(suppliers::table)
            .values((
                suppliers::name.eq("Parts Co"),
                suppliers::email.eq("sales@parts.test"),
            ))
            .execute(&mut conn)
            .expect("should create supplier");

        diesel::insert_into(users::table)
            .values(&vec![
                (
                    users::username.eq("jdoe"),
                    users::email.eq("jane@example.com"),
                    users::first_name.eq("Jane"),
                    users::last_name.eq("Doe"),
                    users::password_hash.eq("not-a-real-hash"),
                ),
                (
                    users::username.eq("rroe"),
                    users::email.eq("rick@example.com"),
                    users::first_name.eq("Rick"),
                    users::last_name.eq("Roe"),
                    users::password_hash.eq("not-a-real-hash"),
                ),
            ])
            .execute(&mut conn)
            .expect("should create users");

        diesel::insert_into(user_permissions::table)
            .values(&vec![
                (
                    user_permissions::user_id.eq(1),
                    user_permissions::module_name.eq("Products"),
                    user_permissions::can_create.eq(true),
                    user_permissions::can_read.eq(true),
                ),
                (
                    user_permissions::user_id.eq(2),
                    user_permissions::module_name.eq("Users"),
                    user_permissions::can_create.eq(false),
                    user_permissions::can_read.eq(true),
                ),
            ])
            .execute(&mut conn)
            .expect("should create permissions");
    }
}
