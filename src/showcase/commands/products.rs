use crate::error::Result;
use crate::model::{Collection, Product, ProductDraft};
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

use super::helpers::{find, remove_all, update_first};
use super::ServiceOptions;

pub fn list<B: StorageBackend>(store: &RecordStore<B>) -> Result<Vec<Product>> {
    store.load()
}

/// Append a new product and return the whole updated collection.
pub fn add<B: StorageBackend>(
    store: &RecordStore<B>,
    options: &ServiceOptions,
    draft: ProductDraft,
) -> Result<Vec<Product>> {
    let mut products: Vec<Product> = store.load()?;
    let id = options
        .id_strategy
        .next_id(Collection::Products.id_prefix(), &products);
    tracing::info!(id = %id, title = %draft.title, "adding product");
    products.push(Product::new(id, draft));
    store.save(&products)?;
    Ok(products)
}

pub fn get<B: StorageBackend>(store: &RecordStore<B>, id: &str) -> Result<Option<Product>> {
    find(store, id)
}

/// Replace title, desc, price, tag, badge and link of the first product
/// with `id`. Returns whether one matched.
pub fn update<B: StorageBackend>(
    store: &RecordStore<B>,
    options: &ServiceOptions,
    id: &str,
    draft: ProductDraft,
) -> Result<bool> {
    let matched = update_first(store, options.missing, id, |p: &mut Product| p.apply(draft))?;
    if matched {
        tracing::info!(id, "updated product");
    }
    Ok(matched)
}

/// Remove every product with `id`. Returns how many were removed.
pub fn delete<B: StorageBackend>(
    store: &RecordStore<B>,
    options: &ServiceOptions,
    id: &str,
) -> Result<usize> {
    let removed = remove_all::<Product, _>(store, options.missing, id)?;
    if removed > 0 {
        tracing::info!(id, removed, "deleted product");
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MissingPolicy;
    use crate::error::ShowcaseError;
    use crate::ids::IdStrategy;
    use crate::store::mem_backend::MemBackend;

    fn store() -> RecordStore<MemBackend> {
        RecordStore::new(MemBackend::new())
    }

    fn draft(title: &str) -> ProductDraft {
        ProductDraft::new(title, "A description", 99)
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn add_assigns_count_based_ids() {
        let store = store();
        let opts = ServiceOptions::default();
        add(&store, &opts, draft("one")).unwrap();
        add(&store, &opts, draft("two")).unwrap();
        let all = add(&store, &opts, draft("three")).unwrap();

        assert_eq!(ids(&all), vec!["p1", "p2", "p3"]);
        assert_eq!(list(&store).unwrap(), all);
    }

    #[test]
    fn add_uses_form_defaults() {
        let store = store();
        let all = add(&store, &ServiceOptions::default(), draft("one")).unwrap();
        assert_eq!(all[0].link, "#");
        assert_eq!(all[0].tag, "");
        assert_eq!(all[0].badge, "");
        assert_eq!(all[0].price, 99);
    }

    #[test]
    fn add_after_delete_reuses_an_id() {
        let store = store();
        let opts = ServiceOptions::default();
        add(&store, &opts, draft("one")).unwrap();
        add(&store, &opts, draft("two")).unwrap();
        delete(&store, &opts, "p2").unwrap();

        let all = add(&store, &opts, draft("three")).unwrap();
        assert_eq!(ids(&all), vec!["p1", "p2"]);
        assert_eq!(all[1].title, "three");
    }

    #[test]
    fn count_strategy_duplicates_a_live_id() {
        let store = store();
        let opts = ServiceOptions::default();
        add(&store, &opts, draft("one")).unwrap();
        add(&store, &opts, draft("two")).unwrap();
        delete(&store, &opts, "p1").unwrap();

        let all = add(&store, &opts, draft("three")).unwrap();
        assert_eq!(ids(&all), vec!["p2", "p2"]);
    }

    #[test]
    fn high_water_strategy_avoids_the_duplicate() {
        let store = store();
        let opts = ServiceOptions::default().with_id_strategy(IdStrategy::HighWater);
        add(&store, &opts, draft("one")).unwrap();
        add(&store, &opts, draft("two")).unwrap();
        delete(&store, &opts, "p1").unwrap();

        let all = add(&store, &opts, draft("three")).unwrap();
        assert_eq!(ids(&all), vec!["p2", "p3"]);
    }

    #[test]
    fn get_returns_first_match() {
        let store = store();
        store
            .save(&[
                Product::new("p1".into(), draft("first")),
                Product::new("p1".into(), draft("shadow")),
            ])
            .unwrap();

        assert_eq!(get(&store, "p1").unwrap().unwrap().title, "first");
        assert!(get(&store, "p9").unwrap().is_none());
    }

    #[test]
    fn update_replaces_fields_and_keeps_id() {
        let store = store();
        let opts = ServiceOptions::default();
        add(&store, &opts, draft("old")).unwrap();

        let new = ProductDraft::new("new", "", 5)
            .with_tag("PPT")
            .with_badge("hot")
            .with_link("/buy");
        assert!(update(&store, &opts, "p1", new).unwrap());

        let p = get(&store, "p1").unwrap().unwrap();
        assert_eq!(p.id, "p1");
        assert_eq!(p.title, "new");
        assert_eq!(p.desc, "");
        assert_eq!(p.price, 5);
        assert_eq!(p.tag, "PPT");
        assert_eq!(p.badge, "hot");
        assert_eq!(p.link, "/buy");
    }

    #[test]
    fn update_touches_only_first_duplicate() {
        let store = store();
        store
            .save(&[
                Product::new("p1".into(), draft("a")),
                Product::new("p1".into(), draft("b")),
            ])
            .unwrap();
        update(&store, &ServiceOptions::default(), "p1", draft("changed")).unwrap();

        let all = list(&store).unwrap();
        assert_eq!(all[0].title, "changed");
        assert_eq!(all[1].title, "b");
    }

    #[test]
    fn update_missing_is_silent_and_rewrites_unchanged() {
        let store = store();
        let opts = ServiceOptions::default();
        add(&store, &opts, draft("one")).unwrap();
        let before = store.backend().document(Collection::Products).unwrap();
        let writes = store.backend().write_count();

        assert!(!update(&store, &opts, "p42", draft("ghost")).unwrap());
        assert_eq!(store.backend().write_count(), writes + 1);
        assert_eq!(
            store.backend().document(Collection::Products).unwrap(),
            before
        );
    }

    #[test]
    fn delete_missing_is_silent() {
        let store = store();
        let opts = ServiceOptions::default();
        add(&store, &opts, draft("one")).unwrap();
        let before = store.backend().document(Collection::Products).unwrap();

        assert_eq!(delete(&store, &opts, "p42").unwrap(), 0);
        assert_eq!(
            store.backend().document(Collection::Products).unwrap(),
            before
        );
    }

    #[test]
    fn delete_removes_every_duplicate() {
        let store = store();
        store
            .save(&[
                Product::new("p1".into(), draft("a")),
                Product::new("p2".into(), draft("b")),
                Product::new("p1".into(), draft("c")),
            ])
            .unwrap();

        assert_eq!(delete(&store, &ServiceOptions::default(), "p1").unwrap(), 2);
        assert_eq!(ids(&list(&store).unwrap()), vec!["p2"]);
    }

    #[test]
    fn strict_mode_reports_missing_without_writing() {
        let store = store();
        let opts = ServiceOptions::default().with_missing(MissingPolicy::Strict);
        add(&store, &opts, draft("one")).unwrap();
        let writes = store.backend().write_count();

        let err = update(&store, &opts, "p9", draft("x")).unwrap_err();
        assert!(matches!(err, ShowcaseError::RecordNotFound { .. }));
        let err = delete(&store, &opts, "p9").unwrap_err();
        assert!(matches!(err, ShowcaseError::RecordNotFound { .. }));
        assert_eq!(store.backend().write_count(), writes);
    }

    #[test]
    fn write_failure_propagates() {
        let store = store();
        store.backend().set_simulate_write_error(true);
        let err = add(&store, &ServiceOptions::default(), draft("one")).unwrap_err();
        assert!(matches!(err, ShowcaseError::Io(_)));
    }
}
