use diesel::prelude::*;
use pushkind_faria::db::run_migrations;
use pushkind_faria::schema::suggestions;

mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let conn = pool.get();
    assert!(conn.is_ok());
}

#[test]
fn migrations_are_not_reapplied() {
    let test_db = common::TestDb::new();
    assert_eq!(run_migrations(&test_db.pool()).expect("migrations should run"), 0);
}

#[test]
fn suggestion_content_is_unique() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("should acquire DB connection");

    diesel::insert_into(suggestions::table)
        .values(suggestions::content.eq("Show brands"))
        .execute(&mut conn)
        .expect("first insert should succeed");
    let duplicate = diesel::insert_into(suggestions::table)
        .values(suggestions::content.eq("Show brands"))
        .execute(&mut conn);
    assert!(duplicate.is_err());
}

#[test]
fn blank_names_are_rejected_by_the_schema() {
    use pushkind_faria::schema::{categories, messages};

    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("should acquire DB connection");

    for name in ["", "  ", "\t\n"] {
        let inserted = diesel::insert_into(categories::table)
            .values(categories::name.eq(name))
            .execute(&mut conn);
        assert!(inserted.is_err(), "blank category name {name:?} was stored");
    }

    let inserted = diesel::insert_into(messages::table)
        .values((messages::content.eq(" "), messages::is_user.eq(true)))
        .execute(&mut conn);
    assert!(inserted.is_err());
}
