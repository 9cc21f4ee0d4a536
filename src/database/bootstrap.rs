use sqlx::types::Json;
use sqlx::{Postgres, Transaction};
use tokio::sync::OnceCell;
use tracing::{error, info};
use uuid::Uuid;

use crate::database::pool::{db_pool, DatabaseError};
use crate::database::seed::{SeedProduct, SEED_PRODUCTS};

const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    slug TEXT NOT NULL UNIQUE,
    category TEXT NOT NULL,
    description TEXT NOT NULL,
    image_url TEXT NOT NULL DEFAULT '',
    features JSONB NOT NULL DEFAULT '[]'::jsonb,
    packaging_options TEXT NOT NULL DEFAULT '',
    moq TEXT NOT NULL DEFAULT '',
    countries_served JSONB NOT NULL DEFAULT '[]'::jsonb,
    shelf_life TEXT NOT NULL DEFAULT '',
    grades TEXT NOT NULL DEFAULT '',
    display_order INTEGER NOT NULL DEFAULT 1,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

static READY: OnceCell<()> = OnceCell::const_new();

/// Create and seed the products table on first database access.
///
/// Concurrent callers share one in-flight attempt; on failure the cell
/// stays empty so the next request retries from scratch while the
/// triggering caller gets the error.
pub async fn ensure_ready() -> Result<(), DatabaseError> {
    READY.get_or_try_init(initialize).await.map(|_| ())
}

async fn initialize() -> Result<(), DatabaseError> {
    match run_bootstrap().await {
        Ok(seeded) => {
            if seeded > 0 {
                info!("products table created and seeded with {} rows", seeded);
            } else {
                info!("products table ready");
            }
            Ok(())
        }
        Err(e) => {
            error!("database bootstrap failed: {}", e);
            Err(e)
        }
    }
}

/// One transaction: create the table if absent, then seed only when it is
/// empty. The empty-table check inside the same transaction is what keeps
/// a true create race from double-seeding.
async fn run_bootstrap() -> Result<usize, DatabaseError> {
    let pool = db_pool().await?;
    let mut tx = pool.begin().await?;

    sqlx::query(CREATE_PRODUCTS_TABLE).execute(&mut *tx).await?;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(&mut *tx)
        .await?;

    let mut seeded = 0;
    if count == 0 {
        for product in SEED_PRODUCTS {
            insert_seed_product(&mut tx, product).await?;
            seeded += 1;
        }
    }

    // Rollback happens implicitly if the transaction is dropped on error.
    tx.commit().await?;
    Ok(seeded)
}

async fn insert_seed_product(
    tx: &mut Transaction<'_, Postgres>,
    product: &SeedProduct,
) -> Result<(), DatabaseError> {
    sqlx::query(
        "INSERT INTO products (
            id, name, slug, category, description, image_url, features,
            packaging_options, moq, countries_served, shelf_life, grades,
            display_order
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
    )
    .bind(Uuid::new_v4())
    .bind(product.name)
    .bind(product.slug)
    .bind(product.category)
    .bind(product.description)
    .bind(product.image_url)
    .bind(Json(product.features))
    .bind(product.packaging_options)
    .bind(product.moq)
    .bind(Json(product.countries_served))
    .bind(product.shelf_life)
    .bind(product.grades)
    .bind(product.display_order)
    .execute(&mut **tx)
    .await?;

    Ok(())
}
