//! Product catalog.
//!
//! An in-memory working copy of the product list backed by the persistent
//! store. Mutations write through; [`Catalog::reload`] re-reads the stored
//! copy after an external writer touches the products key.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use mangastore_core::{Price, ProductId};

use crate::models::Product;
use crate::store::{Store, StoreError, keys};

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product with this id.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// Persistent store failure.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Presentation order for a catalog browse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Stored catalog order, unchanged.
    #[default]
    CatalogOrder,
    /// Cheapest first.
    PriceAscending,
    /// Most expensive first.
    PriceDescending,
}

/// The product catalog, shared by all users.
pub struct Catalog {
    store: Store,
    products: Vec<Product>,
}

impl Catalog {
    /// Load the catalog from the store. An absent or malformed products
    /// key yields an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Store` if the store cannot be read.
    pub fn load(store: Store) -> Result<Self, CatalogError> {
        let products = store.get(keys::PRODUCTS)?.unwrap_or_default();
        Ok(Self { store, products })
    }

    /// Load the catalog, seeding the sample product list first if the
    /// products key is absent. A present key, even an empty list, is
    /// never overwritten.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Store` if the store cannot be read or
    /// seeded.
    pub fn load_or_seed(store: Store) -> Result<Self, CatalogError> {
        if store.get::<Vec<Product>>(keys::PRODUCTS)?.is_none() {
            let seed = sample_products();
            store.put(keys::PRODUCTS, &seed)?;
            info!(count = seed.len(), "catalog seeded");
        }
        Self::load(store)
    }

    /// All products, in stored order.
    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == *id)
    }

    /// Browse the catalog: filter by a case-insensitive substring match
    /// against title or author, then order the matches.
    ///
    /// A blank query matches everything.
    #[must_use]
    pub fn browse(&self, query: &str, sort: SortOrder) -> Vec<&Product> {
        let query = query.trim().to_lowercase();
        let mut matches: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| {
                query.is_empty()
                    || p.title.to_lowercase().contains(&query)
                    || p.author.to_lowercase().contains(&query)
            })
            .collect();
        match sort {
            SortOrder::CatalogOrder => {}
            SortOrder::PriceAscending => matches.sort_by_key(|p| p.price),
            SortOrder::PriceDescending => {
                matches.sort_by_key(|p| std::cmp::Reverse(p.price));
            }
        }
        matches
    }

    /// Decrement a product's stock, clamping at zero, and persist the
    /// whole catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ProductNotFound` for an unknown id and
    /// `CatalogError::Store` if the updated list cannot be written.
    pub fn decrement_stock(&mut self, id: &ProductId, by: u32) -> Result<(), CatalogError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.clone()))?;
        product.stock = product.stock.saturating_sub(by);
        debug!(product = %id, stock = product.stock, "stock decremented");
        self.store.put(keys::PRODUCTS, &self.products)?;
        Ok(())
    }

    /// Replace the working copy with whatever the store currently holds.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Store` if the store cannot be read.
    pub fn reload(&mut self) -> Result<(), CatalogError> {
        self.products = self.store.get(keys::PRODUCTS)?.unwrap_or_default();
        Ok(())
    }
}

// ====== Seed data ======

fn seed_product(
    id: &str,
    title: &str,
    author: &str,
    editorial: &str,
    price: u64,
    stock: u32,
    img: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_owned(),
        author: author.to_owned(),
        editorial: editorial.to_owned(),
        price: Price::new(price),
        stock,
        img: img.to_owned(),
    }
}

/// The built-in demo catalog, seeded on first run.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    vec![
        seed_product(
            "m001",
            "Jujutsu Kaisen Vol.1",
            "Gege Akutami",
            "Shueisha",
            12_000,
            12,
            "https://source.unsplash.com/400x600/?manga,anime,book",
        ),
        seed_product(
            "m002",
            "Chainsaw Man Vol.1",
            "Tatsuki Fujimoto",
            "Shueisha",
            11_000,
            8,
            "https://source.unsplash.com/400x600/?chainsaw,comic,book",
        ),
        seed_product(
            "m003",
            "One Piece Vol.1",
            "Eiichiro Oda",
            "Shueisha",
            10_000,
            20,
            "https://source.unsplash.com/400x600/?onepiece,manga,comic",
        ),
        seed_product(
            "m004",
            "Berserk Vol.1 (Deluxe)",
            "Kentaro Miura",
            "Hakusensha",
            45_000,
            4,
            "https://source.unsplash.com/400x600/?berserk,comic,book",
        ),
        seed_product(
            "m005",
            "Akira Vol.1",
            "Katsuhiro Otomo",
            "Kodansha",
            22_000,
            6,
            "https://source.unsplash.com/400x600/?akira,manga,book",
        ),
        seed_product(
            "m006",
            "My Hero Academia Vol.1",
            "Kohei Horikoshi",
            "Shueisha",
            9_500,
            14,
            "https://source.unsplash.com/400x600/?myheroacademy,manga,book",
        ),
        seed_product(
            "m007",
            "Death Note Vol.1",
            "Tsugumi Ohba",
            "Shueisha",
            13_000,
            11,
            "https://source.unsplash.com/400x600/?deathnote,manga,book",
        ),
        seed_product(
            "m008",
            "Vagabond Vol.1",
            "Takehiko Inoue",
            "Kodansha",
            26_000,
            7,
            "https://source.unsplash.com/400x600/?vagabond,manga,book",
        ),
        seed_product(
            "m009",
            "Fullmetal Alchemist Vol.1",
            "Hiromu Arakawa",
            "Square Enix",
            14_000,
            10,
            "https://source.unsplash.com/400x600/?fullmetal,manga,book",
        ),
        seed_product(
            "m010",
            "Tokyo Ghoul Vol.1",
            "Sui Ishida",
            "Shueisha",
            11_500,
            9,
            "https://source.unsplash.com/400x600/?tokyoghoul,manga,book",
        ),
        seed_product(
            "m011",
            "Hunter x Hunter Vol.1",
            "Yoshihiro Togashi",
            "Shueisha",
            12_500,
            13,
            "https://source.unsplash.com/400x600/?hunterxhunter,manga,book",
        ),
        seed_product(
            "m012",
            "Neon Genesis Evangelion Vol.1",
            "Yoshiyuki Sadamoto",
            "Kadokawa",
            20_000,
            5,
            "https://source.unsplash.com/400x600/?evangelion,manga,book",
        ),
    ]
}
