use daybook_core::{
    project_counts, CommandOutcome, DaybookService, MemoryBackend, Repository, RepositoryConfig,
    StoreAdapter,
};
use std::collections::HashSet;
use uuid::Uuid;

fn service() -> DaybookService<MemoryBackend> {
    let store = StoreAdapter::new(MemoryBackend::new());
    DaybookService::new(Repository::load(store, RepositoryConfig::default()))
}

#[test]
fn task_ids_stay_unique_across_adds_and_removes() {
    let mut service = service();
    let mut seen = HashSet::new();

    for round in 0..4 {
        let id = service
            .add_task(&format!("task {round}"), Some("Work"))
            .unwrap();
        assert!(seen.insert(id), "id reused: {id}");
    }

    let removed = service.repo().tasks()[1].id;
    service.remove_task(removed);

    for round in 4..8 {
        let id = service
            .add_task(&format!("task {round}"), Some("Work"))
            .unwrap();
        assert!(seen.insert(id), "id reused after removal: {id}");
    }
}

#[test]
fn remove_task_is_idempotent() {
    let mut service = service();
    let id = service.add_task("one-shot", Some("Personal")).unwrap();

    assert_eq!(service.remove_task(id), CommandOutcome::Applied);
    assert_eq!(service.remove_task(id), CommandOutcome::Ignored);
    assert!(service.repo().tasks().is_empty());
}

#[test]
fn empty_text_leaves_the_collection_unchanged() {
    let mut service = service();
    assert_eq!(service.add_task("", Some("Personal")), None);
    assert_eq!(service.add_task("   \t ", Some("Personal")), None);
    assert!(service.repo().tasks().is_empty());
}

#[test]
fn task_text_is_trimmed_before_storage() {
    let mut service = service();
    service.add_task("  water plants  ", Some("Personal")).unwrap();
    assert_eq!(service.repo().tasks()[0].text, "water plants");
}

#[test]
fn unknown_or_absent_category_falls_back_to_default() {
    let mut service = service();
    service.add_task("no category given", None).unwrap();
    service.add_task("made-up category", Some("Gardening")).unwrap();

    let default = service.repo().default_category();
    for task in service.repo().tasks() {
        assert_eq!(task.category, default);
    }
}

#[test]
fn set_task_done_toggles_and_ignores_missing_ids() {
    let mut service = service();
    let id = service.add_task("finish report", Some("Work")).unwrap();

    assert_eq!(service.set_task_done(id, true), CommandOutcome::Applied);
    assert!(service.repo().tasks()[0].done);
    assert_eq!(service.set_task_done(id, false), CommandOutcome::Applied);
    assert!(!service.repo().tasks()[0].done);

    assert_eq!(
        service.set_task_done(Uuid::new_v4(), true),
        CommandOutcome::Ignored
    );
}

#[test]
fn marking_the_only_personal_task_done_zeroes_its_count() {
    let mut service = service();
    let id = service.add_task("call home", Some("Personal")).unwrap();
    service.add_task("group project", Some("School")).unwrap();
    service.set_task_done(id, true);

    let counts = project_counts(
        service.repo().tasks(),
        service.repo().journal(),
        service.repo().categories(),
    );
    let personal = counts
        .open_tasks
        .iter()
        .find(|(category, _)| category.as_str() == "Personal")
        .unwrap();
    assert_eq!(personal.1, 0);

    let school = counts
        .open_tasks
        .iter()
        .find(|(category, _)| category.as_str() == "School")
        .unwrap();
    assert_eq!(school.1, 1);
}
