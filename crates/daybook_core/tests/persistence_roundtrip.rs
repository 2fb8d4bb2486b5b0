use daybook_core::{
    DaybookService, KeyValueBackend, MemoryBackend, Repository, RepositoryConfig, StoreAdapter,
    Theme,
};

fn service_over(backend: MemoryBackend) -> DaybookService<MemoryBackend> {
    let store = StoreAdapter::new(backend);
    DaybookService::new(Repository::load(store, RepositoryConfig::default()))
}

#[test]
fn commit_then_fresh_load_yields_an_equal_snapshot() {
    let backend = MemoryBackend::new();
    {
        let mut service = service_over(backend.clone());
        service.add_task("buy stamps", Some("Personal")).unwrap();
        service.add_task("book room", Some("Work")).unwrap();
        let done = service.repo().tasks()[0].id;
        service.set_task_done(done, true);
        service.add_journal_entry("2024-06-01", "long walk").unwrap();
        service.toggle_theme();
    }

    let reloaded = service_over(backend);
    let tasks = reloaded.repo().tasks();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].text, "buy stamps");
    assert!(tasks[0].done);
    assert_eq!(tasks[1].text, "book room");
    assert_eq!(tasks[1].category.as_str(), "Work");

    let journal = reloaded.repo().journal();
    assert_eq!(journal.len(), 1);
    assert_eq!(journal[0].date, "2024-06-01");
    assert_eq!(reloaded.repo().theme(), Theme::Dark);
}

#[test]
fn sqlite_file_roundtrip_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("daybook.sqlite3");

    {
        let mut service = DaybookService::open(&path).unwrap();
        service.add_task("water the garden", Some("Personal")).unwrap();
        service.add_journal_entry("2024-06-02", "rained anyway").unwrap();
    }

    let service = DaybookService::open(&path).unwrap();
    assert_eq!(service.repo().tasks().len(), 1);
    assert_eq!(service.repo().tasks()[0].text, "water the garden");
    assert_eq!(service.repo().journal().len(), 1);
}

#[test]
fn corrupt_stored_collections_degrade_to_defaults() {
    let backend = MemoryBackend::new();
    let keys = RepositoryConfig::default().keys;
    backend.set_item(&keys.tasks, "{definitely not json").unwrap();
    backend.set_item(&keys.theme, "\"dark\"").unwrap();
    backend.set_item(&keys.quote_order, "[0,0,0]").unwrap();

    let service = service_over(backend);
    assert!(service.repo().tasks().is_empty());
    assert_eq!(service.repo().theme(), Theme::Dark);
}

#[test]
fn dropped_write_keeps_the_previously_persisted_state() {
    // Budget fits one small task collection but not a bloated one.
    let backend = MemoryBackend::with_budget(512);
    {
        let mut service = service_over(backend.clone());
        service.add_task("small", Some("Personal")).unwrap();
        // This commit exceeds the budget and is silently dropped; the
        // in-memory state still changes, as if never persisted.
        service.add_task(&"x".repeat(600), Some("Personal")).unwrap();
        assert_eq!(service.repo().tasks().len(), 2);
    }

    let reloaded = service_over(backend);
    assert_eq!(reloaded.repo().tasks().len(), 1);
    assert_eq!(reloaded.repo().tasks()[0].text, "small");
}

#[test]
fn clear_all_then_load_matches_a_never_initialized_store() {
    let backend = MemoryBackend::new();
    let keys = RepositoryConfig::default().keys;
    {
        let mut service = service_over(backend.clone());
        service.add_task("doomed", Some("Work")).unwrap();
        service.add_journal_entry("2024-06-03", "doomed too").unwrap();
        service.toggle_theme();
        service.clear_all();
    }

    // Keys are removed outright, not overwritten with empty values.
    assert_eq!(backend.get_item(&keys.tasks).unwrap(), None);
    assert_eq!(backend.get_item(&keys.journal).unwrap(), None);
    assert_eq!(backend.get_item(&keys.theme).unwrap(), None);

    let reloaded = service_over(backend);
    assert!(reloaded.repo().tasks().is_empty());
    assert!(reloaded.repo().journal().is_empty());
    assert_eq!(reloaded.repo().theme(), Theme::Light);
}

#[test]
fn later_commit_wins_across_uncoordinated_contexts() {
    let backend = MemoryBackend::new();
    let mut tab_a = service_over(backend.clone());
    let mut tab_b = service_over(backend.clone());

    tab_a.add_task("from tab a", Some("Personal")).unwrap();
    tab_b.add_task("from tab b", Some("Personal")).unwrap();

    // Tab B committed last; its snapshot silently overwrote tab A's.
    let reloaded = service_over(backend);
    assert_eq!(reloaded.repo().tasks().len(), 1);
    assert_eq!(reloaded.repo().tasks()[0].text, "from tab b");
}
