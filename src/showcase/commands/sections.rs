use crate::error::Result;
use crate::model::{Collection, Section, SectionDraft, DEFAULT_IMAGE};
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

use super::helpers::{find, remove_all, update_first};
use super::ServiceOptions;

/// Split a comma separated bullet list. Pieces are trimmed, empty pieces
/// dropped; order and duplicates are kept.
pub fn parse_bullets(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Inverse of [`parse_bullets`], used to pre-fill the edit form.
pub fn format_bullets(bullets: &[String]) -> String {
    bullets.join(", ")
}

/// The admin form posts `"1"` for a mirrored layout, anything else is off.
pub fn parse_reverse(flag: &str) -> bool {
    flag == "1"
}

pub fn list<B: StorageBackend>(store: &RecordStore<B>) -> Result<Vec<Section>> {
    store.load()
}

/// Append a new section and return the whole updated collection.
pub fn add<B: StorageBackend>(
    store: &RecordStore<B>,
    options: &ServiceOptions,
    draft: SectionDraft,
) -> Result<Vec<Section>> {
    let mut sections: Vec<Section> = store.load()?;
    let id = options
        .id_strategy
        .next_id(Collection::Sections.id_prefix(), &sections);
    tracing::info!(id = %id, title = %draft.title, "adding section");

    let image = if draft.image.is_empty() {
        DEFAULT_IMAGE.to_string()
    } else {
        draft.image
    };
    sections.push(Section {
        id,
        title: draft.title,
        desc: draft.desc,
        bullets: parse_bullets(&draft.bullets),
        image,
        reverse: parse_reverse(&draft.reverse),
        extra: serde_json::Map::new(),
    });
    store.save(&sections)?;
    Ok(sections)
}

pub fn get<B: StorageBackend>(store: &RecordStore<B>, id: &str) -> Result<Option<Section>> {
    find(store, id)
}

/// Replace the fields of the first section with `id`. An empty image keeps
/// the stored one; every other field is overwritten even when empty.
pub fn update<B: StorageBackend>(
    store: &RecordStore<B>,
    options: &ServiceOptions,
    id: &str,
    draft: SectionDraft,
) -> Result<bool> {
    let bullets = parse_bullets(&draft.bullets);
    let reverse = parse_reverse(&draft.reverse);
    let matched = update_first(store, options.missing, id, |s: &mut Section| {
        s.title = draft.title;
        s.desc = draft.desc;
        s.bullets = bullets;
        if !draft.image.is_empty() {
            s.image = draft.image;
        }
        s.reverse = reverse;
    })?;
    if matched {
        tracing::info!(id, "updated section");
    }
    Ok(matched)
}

/// Remove every section with `id`. Returns how many were removed.
pub fn delete<B: StorageBackend>(
    store: &RecordStore<B>,
    options: &ServiceOptions,
    id: &str,
) -> Result<usize> {
    let removed = remove_all::<Section, _>(store, options.missing, id)?;
    if removed > 0 {
        tracing::info!(id, removed, "deleted section");
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    fn store() -> RecordStore<MemBackend> {
        RecordStore::new(MemBackend::new())
    }

    #[test]
    fn bullets_are_trimmed_and_empties_dropped() {
        assert_eq!(
            parse_bullets("alpha, beta ,, gamma"),
            vec!["alpha", "beta", "gamma"]
        );
    }

    #[test]
    fn bullets_keep_order_and_duplicates() {
        assert_eq!(parse_bullets("b,a,b"), vec!["b", "a", "b"]);
        assert!(parse_bullets("").is_empty());
        assert!(parse_bullets(" , ,").is_empty());
    }

    #[test]
    fn bullets_format_for_editing() {
        let bullets = parse_bullets("一键生成, 可编辑");
        assert_eq!(format_bullets(&bullets), "一键生成, 可编辑");
    }

    #[test]
    fn reverse_flag_is_only_one() {
        assert!(parse_reverse("1"));
        assert!(!parse_reverse("0"));
        assert!(!parse_reverse("true"));
        assert!(!parse_reverse(""));
    }

    #[test]
    fn add_parses_form_fields() {
        let store = store();
        let draft = SectionDraft::new("Fast", "Build slides quickly")
            .with_bullets("one, two")
            .with_reverse("1");
        let all = add(&store, &ServiceOptions::default(), draft).unwrap();

        let s = &all[0];
        assert_eq!(s.id, "s1");
        assert_eq!(s.bullets, vec!["one", "two"]);
        assert_eq!(s.image, DEFAULT_IMAGE);
        assert!(s.reverse);
    }

    #[test]
    fn add_keeps_given_image() {
        let store = store();
        let draft = SectionDraft::new("t", "d").with_image("/static/img/a.png");
        let all = add(&store, &ServiceOptions::default(), draft).unwrap();
        assert_eq!(all[0].image, "/static/img/a.png");
        assert!(!all[0].reverse);
    }

    #[test]
    fn update_with_empty_image_keeps_stored_image() {
        let store = store();
        let opts = ServiceOptions::default();
        add(&store, &opts, SectionDraft::new("t", "d").with_image("/static/a.png")).unwrap();

        update(&store, &opts, "s1", SectionDraft::new("t2", "d2")).unwrap();
        let s = get(&store, "s1").unwrap().unwrap();
        assert_eq!(s.image, "/static/a.png");
        assert_eq!(s.title, "t2");

        update(
            &store,
            &opts,
            "s1",
            SectionDraft::new("t3", "d3").with_image("/static/x.png"),
        )
        .unwrap();
        assert_eq!(get(&store, "s1").unwrap().unwrap().image, "/static/x.png");
    }

    #[test]
    fn update_overwrites_other_fields_even_when_empty() {
        let store = store();
        let opts = ServiceOptions::default();
        let draft = SectionDraft::new("t", "d")
            .with_bullets("a, b")
            .with_reverse("1");
        add(&store, &opts, draft).unwrap();

        assert!(update(&store, &opts, "s1", SectionDraft::new("", "")).unwrap());
        let s = get(&store, "s1").unwrap().unwrap();
        assert_eq!(s.id, "s1");
        assert_eq!(s.title, "");
        assert_eq!(s.desc, "");
        assert!(s.bullets.is_empty());
        assert!(!s.reverse);
    }

    #[test]
    fn update_and_delete_missing_are_noops() {
        let store = store();
        let opts = ServiceOptions::default();
        add(&store, &opts, SectionDraft::new("t", "d")).unwrap();
        let before = store.backend().document(Collection::Sections).unwrap();

        assert!(!update(&store, &opts, "s7", SectionDraft::new("x", "y")).unwrap());
        assert_eq!(delete(&store, &opts, "s7").unwrap(), 0);
        assert_eq!(
            store.backend().document(Collection::Sections).unwrap(),
            before
        );
    }

    #[test]
    fn delete_then_add_reuses_id() {
        let store = store();
        let opts = ServiceOptions::default();
        add(&store, &opts, SectionDraft::new("a", "")).unwrap();
        add(&store, &opts, SectionDraft::new("b", "")).unwrap();
        assert_eq!(delete(&store, &opts, "s2").unwrap(), 1);

        let all = add(&store, &opts, SectionDraft::new("c", "")).unwrap();
        let ids: Vec<_> = all.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2"]);
    }

    #[test]
    fn delete_removes_every_duplicate() {
        let doc = r#"[{"id": "s1", "title": "a"}, {"id": "s2", "title": "b"}, {"id": "s1", "title": "c"}]"#;
        let store = RecordStore::new(MemBackend::new().with_document(Collection::Sections, doc));

        assert_eq!(delete(&store, &ServiceOptions::default(), "s1").unwrap(), 2);
        let left = list(&store).unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, "s2");
        assert_eq!(left[0].title, "b");
    }
}
