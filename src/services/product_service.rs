use sqlx::types::Json;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::database::bootstrap;
use crate::database::models::product::{Product, ProductInput, StringList};
use crate::database::pool::{db_pool, DatabaseError};

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Database(#[from] DatabaseError),
    #[error("query error: {0}")]
    Query(sqlx::Error),
}

impl From<sqlx::Error> for ProductError {
    fn from(err: sqlx::Error) -> Self {
        // The slug unique constraint is the final arbiter when two creates
        // race past the uniqueness probe; the loser gets a conflict.
        if let sqlx::Error::Database(ref db) = err {
            if db.is_unique_violation() {
                return ProductError::Conflict(
                    "A product with this slug already exists".to_string(),
                );
            }
        }
        ProductError::Query(err)
    }
}

const PRODUCT_COLUMNS: &str = "id, name, slug, category, description, image_url, features, \
     packaging_options, moq, countries_served, shelf_life, grades, \
     display_order, created_at, updated_at";

/// Textual slug normalization: lower-case, trim, strip characters outside
/// [a-z0-9 \s-], collapse whitespace and hyphen runs to single hyphens.
/// Idempotent; makes no uniqueness guarantee.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_hyphen = false;

    for c in value.trim().to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        }
        // Everything else is stripped.
    }

    slug
}

pub struct ProductService {
    pool: &'static PgPool,
}

impl ProductService {
    /// Acquire the service, running the lazy table bootstrap first so every
    /// catalog operation sees an initialized database.
    pub async fn new() -> Result<Self, ProductError> {
        bootstrap::ensure_ready().await?;
        let pool = db_pool().await?;
        Ok(Self { pool })
    }

    /// All products, user-controlled sort with creation order as tie-break.
    pub async fn list(&self) -> Result<Vec<Product>, ProductError> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY display_order ASC, created_at ASC"
        );
        let products = sqlx::query_as::<_, Product>(&sql).fetch_all(self.pool).await?;
        Ok(products)
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Product, ProductError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE slug = $1 LIMIT 1");
        sqlx::query_as::<_, Product>(&sql)
            .bind(slug)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| ProductError::NotFound("Product not found".to_string()))
    }

    pub async fn create(&self, input: ProductInput) -> Result<Product, ProductError> {
        if is_blank(input.name.as_deref())
            || is_blank(input.description.as_deref())
            || is_blank(input.category.as_deref())
        {
            return Err(ProductError::Validation(
                "name, description and category are required".to_string(),
            ));
        }

        let name = input.name.unwrap_or_default();
        let base_slug = base_slug([input.slug.as_deref(), Some(name.as_str())]);
        let slug = self.ensure_unique_slug(&base_slug, None).await?;

        let features = input.features.map(StringList::into_vec).unwrap_or_default();
        let countries = input
            .countries_served
            .map(StringList::into_vec)
            .unwrap_or_default();

        let sql = format!(
            "INSERT INTO products (
                id, name, slug, category, description, image_url, features,
                packaging_options, moq, countries_served, shelf_life, grades,
                display_order, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, NOW(), NOW())
            RETURNING {PRODUCT_COLUMNS}"
        );

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(Uuid::new_v4())
            .bind(&name)
            .bind(&slug)
            .bind(input.category.unwrap_or_default())
            .bind(input.description.unwrap_or_default())
            .bind(input.image_url.unwrap_or_default())
            .bind(Json(features))
            .bind(input.packaging_options.unwrap_or_default())
            .bind(input.moq.unwrap_or_default())
            .bind(Json(countries))
            .bind(input.shelf_life.unwrap_or_default())
            .bind(input.grades.unwrap_or_default())
            .bind(input.display_order.unwrap_or(1))
            .fetch_one(self.pool)
            .await?;

        Ok(product)
    }

    /// Partial update: absent fields keep their existing values. The slug is
    /// recomputed from the supplied slug or name, falling back to the
    /// existing name, and re-checked for uniqueness excluding this row.
    pub async fn update(&self, id: &str, input: ProductInput) -> Result<Product, ProductError> {
        let id = parse_id(id)?;

        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1 LIMIT 1");
        let existing = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| ProductError::NotFound("Product not found".to_string()))?;

        let base_slug = base_slug([
            input.slug.as_deref(),
            input.name.as_deref(),
            Some(existing.name.as_str()),
        ]);
        let slug = self.ensure_unique_slug(&base_slug, Some(id)).await?;

        let features = input
            .features
            .map(StringList::into_vec)
            .unwrap_or_else(|| existing.features.0.clone());
        let countries = input
            .countries_served
            .map(StringList::into_vec)
            .unwrap_or_else(|| existing.countries_served.0.clone());

        let sql = format!(
            "UPDATE products SET
                name = $1, slug = $2, category = $3, description = $4,
                image_url = $5, features = $6, packaging_options = $7,
                moq = $8, countries_served = $9, shelf_life = $10,
                grades = $11, display_order = $12, updated_at = NOW()
            WHERE id = $13
            RETURNING {PRODUCT_COLUMNS}"
        );

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(input.name.unwrap_or(existing.name))
            .bind(&slug)
            .bind(input.category.unwrap_or(existing.category))
            .bind(input.description.unwrap_or(existing.description))
            .bind(input.image_url.unwrap_or(existing.image_url))
            .bind(Json(features))
            .bind(input.packaging_options.unwrap_or(existing.packaging_options))
            .bind(input.moq.unwrap_or(existing.moq))
            .bind(Json(countries))
            .bind(input.shelf_life.unwrap_or(existing.shelf_life))
            .bind(input.grades.unwrap_or(existing.grades))
            .bind(input.display_order.unwrap_or(existing.display_order))
            .bind(id)
            .fetch_one(self.pool)
            .await?;

        Ok(product)
    }

    /// Hard delete. Zero rows affected is a distinct not-found outcome.
    pub async fn delete(&self, id: &str) -> Result<(), ProductError> {
        let id = parse_id(id)?;

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound("Product not found".to_string()));
        }
        Ok(())
    }

    /// Sequential probe: try the base slug, then base-1, base-2, ... until a
    /// free one turns up. Degrades linearly with existing collisions; the
    /// DB unique constraint backstops a concurrent race.
    async fn ensure_unique_slug(
        &self,
        base: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<String, ProductError> {
        let mut candidate = base.to_string();
        let mut suffix = 1;

        loop {
            let existing: Option<(Uuid,)> = match exclude_id {
                Some(id) => {
                    sqlx::query_as("SELECT id FROM products WHERE slug = $1 AND id <> $2 LIMIT 1")
                        .bind(&candidate)
                        .bind(id)
                        .fetch_optional(self.pool)
                        .await?
                }
                None => {
                    sqlx::query_as("SELECT id FROM products WHERE slug = $1 LIMIT 1")
                        .bind(&candidate)
                        .fetch_optional(self.pool)
                        .await?
                }
            };

            if existing.is_none() {
                return Ok(candidate);
            }

            candidate = format!("{}-{}", base, suffix);
            suffix += 1;
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.trim().is_empty())
}

/// Slug candidate from the first source that survives normalization:
/// supplied override, then name. An empty or all-punctuation override
/// falls through to the name; "product" is the last resort when every
/// candidate strips to nothing.
fn base_slug<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> String {
    for candidate in candidates.into_iter().flatten() {
        let normalized = slugify(candidate);
        if !normalized.is_empty() {
            return normalized;
        }
    }
    "product".to_string()
}

/// Unknown and malformed ids both read as "no such product".
fn parse_id(id: &str) -> Result<Uuid, ProductError> {
    Uuid::parse_str(id).map_err(|_| ProductError::NotFound("Product not found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_normalizes_name() {
        assert_eq!(slugify("Premium Red Onions"), "premium-red-onions");
        assert_eq!(slugify("Organic Jaggery (Gur)"), "organic-jaggery-gur");
        assert_eq!(slugify("  Cashews  "), "cashews");
    }

    #[test]
    fn slugify_collapses_whitespace_and_hyphen_runs() {
        assert_eq!(slugify("a   b"), "a-b");
        assert_eq!(slugify("a - b"), "a-b");
        assert_eq!(slugify("a--b"), "a-b");
    }

    #[test]
    fn slugify_strips_non_alphanumerics() {
        assert_eq!(slugify("100% Pure!"), "100-pure");
        assert_eq!(slugify("café"), "caf");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn slugify_is_idempotent() {
        for raw in ["Premium Red Onions", "a - b", "100% Pure!", "cashews-1"] {
            let once = slugify(raw);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn base_slug_prefers_supplied_override() {
        assert_eq!(
            base_slug([Some("My Slug"), Some("Other Name")]),
            "my-slug"
        );
        assert_eq!(base_slug([None, Some("Other Name")]), "other-name");
    }

    #[test]
    fn blank_override_falls_through_to_name() {
        assert_eq!(base_slug([Some(""), Some("Other Name")]), "other-name");
        assert_eq!(base_slug([Some("!!!"), Some("Other Name")]), "other-name");
    }

    #[test]
    fn base_slug_falls_back_when_every_candidate_strips_to_nothing() {
        assert_eq!(base_slug([Some("!!!"), Some("")]), "product");
    }

    #[test]
    fn malformed_id_reads_as_not_found() {
        assert!(matches!(
            parse_id("not-a-uuid"),
            Err(ProductError::NotFound(_))
        ));
        assert!(parse_id("8d6f3c0e-2a6b-4a7e-9c1d-0f3b2a1e4d5c").is_ok());
    }

    #[test]
    fn blank_detection_covers_missing_and_whitespace() {
        assert!(is_blank(None));
        assert!(is_blank(Some("   ")));
        assert!(!is_blank(Some("Cashews")));
    }
}
