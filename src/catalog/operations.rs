use std::path::Path;

use crate::catalog::types::Storefront;
use crate::error::StoreError;

static BUILTIN_CATALOG: &str = include_str!("../../res/catalog.yaml");

/// Parse a catalog document. `origin` is only used in error messages.
pub fn parse_storefront(yaml: &str, origin: &Path) -> Result<Storefront, StoreError> {
    let storefront: Storefront =
        serde_yaml::from_str(yaml).map_err(|source| StoreError::Catalog {
            path: origin.to_path_buf(),
            source,
        })?;

    for product in storefront.products.iter().filter(|p| p.images.is_empty()) {
        tracing::warn!(product = %product.name, "product has no images, a placeholder will be shown");
    }

    Ok(storefront)
}

pub fn load_storefront(path: &Path) -> Result<Storefront, StoreError> {
    let yaml = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let storefront = parse_storefront(&yaml, path)?;
    tracing::info!(
        path = %path.display(),
        products = storefront.products.len(),
        "loaded catalog"
    );
    Ok(storefront)
}

/// The catalog bundled into the binary
pub fn default_storefront() -> Result<Storefront, StoreError> {
    parse_storefront(BUILTIN_CATALOG, Path::new("<builtin>"))
}
