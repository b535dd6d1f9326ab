use rainbow_learners::core::registry::ColorRegistry;

#[test]
fn every_seeded_id_round_trips() {
    let registry = ColorRegistry::default();
    assert!(!registry.all().is_empty());
    for record in registry.all() {
        let found = registry
            .find_by_id(record.id)
            .expect("seeded id must resolve");
        assert_eq!(found.id, record.id);
        assert_eq!(found.english, record.english);
    }
}

#[test]
fn unknown_ids_are_absent() {
    let registry = ColorRegistry::default();
    assert!(registry.find_by_id(0).is_none());
    assert!(registry.find_by_id(999).is_none());
}

#[test]
fn ids_are_unique_and_ordered() {
    let registry = ColorRegistry::default();
    let ids: Vec<u32> = registry.all().iter().map(|r| r.id).collect();
    let mut deduped = ids.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len(), "duplicate ids in seed list");
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "seed order not stable by id");
}

#[test]
fn media_paths_follow_asset_conventions() {
    let registry = ColorRegistry::default();
    for record in registry.all() {
        assert!(
            record.audio.starts_with("audio/") && record.audio.ends_with(".ogg"),
            "unexpected audio path {}",
            record.audio
        );
        assert!(
            record.image.starts_with("images/") && record.image.ends_with(".png"),
            "unexpected image path {}",
            record.image
        );
    }
}
