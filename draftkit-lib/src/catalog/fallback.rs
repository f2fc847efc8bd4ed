use super::{Catalog, CatalogItem};
use crate::Amount;

/// Built-in catalog substituted when the catalog source fails.
pub fn default_catalog() -> Catalog {
    let items = vec![
        CatalogItem::new("1", "Bored Ape #1234", Amount::from_units(4500)).with_collection("BAYC"),
        CatalogItem::new("2", "Crypto Punk #5678", Amount::from_units(3800))
            .with_collection("CryptoPunks"),
        CatalogItem::new("3", "Doodle #9012", Amount::from_units(2200)).with_collection("Doodles"),
        CatalogItem::new("4", "Azuki #3456", Amount::from_units(2800)).with_collection("Azuki"),
        CatalogItem::new("5", "Clone X #7890", Amount::from_units(2100)).with_collection("CloneX"),
    ];

    // Static data: ids are unique and costs non-negative.
    Catalog::new(items).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_populated() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 5);
        assert_eq!(
            catalog.get(&"1".into()).map(|i| i.cost),
            Some(Amount::from_units(4500))
        );
    }
}
