#[cfg(test)]
use sqlx::sqlite::SqlitePoolOptions;
#[cfg(test)]
use sqlx::SqlitePool;

/// In-memory database with migrations applied. One connection only: each
/// `sqlite::memory:` connection is its own database.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");

    pool
}

#[cfg(test)]
pub async fn seed_company(pool: &SqlitePool) -> i64 {
    sqlx::query("INSERT INTO companies (name, email, phone) VALUES ('Acme', 'a@acme.com', '123')")
        .execute(pool)
        .await
        .expect("seed company")
        .last_insert_rowid()
}

#[cfg(test)]
pub async fn seed_category(pool: &SqlitePool, slug: &str) -> i64 {
    sqlx::query("INSERT INTO product_categories (name, slug) VALUES (?, ?)")
        .bind(slug)
        .bind(slug)
        .execute(pool)
        .await
        .expect("seed category")
        .last_insert_rowid()
}

#[cfg(test)]
pub async fn seed_brand(pool: &SqlitePool, slug: &str, company_id: i64) -> i64 {
    sqlx::query("INSERT INTO brands (name, slug, company_id) VALUES (?, ?, ?)")
        .bind(slug)
        .bind(slug)
        .bind(company_id)
        .execute(pool)
        .await
        .expect("seed brand")
        .last_insert_rowid()
}

#[cfg(test)]
pub async fn seed_product(pool: &SqlitePool, slug: &str, category_id: i64, brand_id: i64) -> i64 {
    sqlx::query("INSERT INTO products (name, slug, category_id, brand_id) VALUES (?, ?, ?, ?)")
        .bind(slug)
        .bind(slug)
        .bind(category_id)
        .bind(brand_id)
        .execute(pool)
        .await
        .expect("seed product")
        .last_insert_rowid()
}
