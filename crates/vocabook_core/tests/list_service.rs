use vocabook_core::{
    memory_stores, CallerId, ErrorKind, ListService, ManualSession, RecordStore,
    SequentialIdGenerator, ServiceError, ValidationError, WordPayload,
};

#[test]
fn create_list_assigns_caller_and_empty_words() {
    let stores = memory_stores();
    let session = ManualSession::new("alice", 1_000);
    let ids = SequentialIdGenerator::new("list");
    let service = ListService::new(&stores, &session, &ids);

    let list = service.create_list("  Spanish   basics ").unwrap();

    assert_eq!(list.id, "list-0001");
    assert_eq!(list.name, "Spanish basics");
    assert_eq!(list.creator, CallerId::new("alice"));
    assert!(list.words.is_empty());
    assert_eq!(list.created_at, 1_000);
    assert_eq!(list.updated_at, None);
    assert_eq!(stores.lists.get(&list.id).unwrap(), Some(list));
}

#[test]
fn create_list_rejects_blank_name_without_writing() {
    let stores = memory_stores();
    let session = ManualSession::new("alice", 1_000);
    let ids = SequentialIdGenerator::new("list");
    let service = ListService::new(&stores, &session, &ids);

    let err = service.create_list(" \t ").unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InvalidInput(ValidationError::EmptyListName)
    ));
    assert!(stores.lists.is_empty());
}

#[test]
fn update_list_renames_and_stamps_updated_at() {
    let stores = memory_stores();
    let session = ManualSession::new("alice", 1_000);
    let ids = SequentialIdGenerator::new("list");
    let service = ListService::new(&stores, &session, &ids);
    let list = service.create_list("Spanish").unwrap();

    session.set_now(5_000);
    let updated = service.update_list(&list.id, "Spanish A2").unwrap();

    assert_eq!(updated.name, "Spanish A2");
    assert_eq!(updated.created_at, 1_000);
    assert_eq!(updated.updated_at, Some(5_000));
    assert_eq!(service.get_list(&list.id).unwrap(), updated);
}

#[test]
fn update_list_by_non_owner_is_unauthorized_and_leaves_list_unchanged() {
    let stores = memory_stores();
    let session = ManualSession::new("alice", 1_000);
    let ids = SequentialIdGenerator::new("list");
    let service = ListService::new(&stores, &session, &ids);
    let list = service.create_list("Spanish").unwrap();

    session.act_as("bob");
    let err = service.update_list(&list.id, "Hijacked").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert_eq!(stores.lists.get(&list.id).unwrap(), Some(list));
}

#[test]
fn update_list_validates_name_before_lookup() {
    let stores = memory_stores();
    let session = ManualSession::new("alice", 1_000);
    let ids = SequentialIdGenerator::new("list");
    let service = ListService::new(&stores, &session, &ids);

    let err = service.update_list("ghost", "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let err = service.update_list("ghost", "Name").unwrap_err();
    assert!(matches!(err, ServiceError::ListNotFound(id) if id == "ghost"));
}

#[test]
fn get_list_is_owner_restricted() {
    let stores = memory_stores();
    let session = ManualSession::new("alice", 1_000);
    let ids = SequentialIdGenerator::new("list");
    let service = ListService::new(&stores, &session, &ids);
    let list = service.create_list("Spanish").unwrap();

    assert_eq!(service.get_list(&list.id).unwrap(), list);

    session.act_as("bob");
    assert_eq!(
        service.get_list(&list.id).unwrap_err().kind(),
        ErrorKind::Unauthorized
    );
    assert_eq!(
        service.get_list("ghost").unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn list_all_lists_is_unfiltered() {
    let stores = memory_stores();
    let session = ManualSession::new("alice", 1_000);
    let ids = SequentialIdGenerator::new("list");
    let service = ListService::new(&stores, &session, &ids);

    let first = service.create_list("Spanish").unwrap();
    session.act_as("bob");
    let second = service.create_list("German").unwrap();

    let all = service.list_all_lists().unwrap();
    assert_eq!(all, vec![first, second]);
}

#[test]
fn delete_list_cascades_to_canonical_words() {
    let stores = memory_stores();
    let session = ManualSession::new("alice", 1_000);
    let ids = SequentialIdGenerator::new("id");
    let service = ListService::new(&stores, &session, &ids);
    let words = service.words();

    let spanish = service.create_list("Spanish").unwrap();
    let german = service.create_list("German").unwrap();
    words
        .add_word(&spanish.id, &WordPayload::new("hola", "hello", 1))
        .unwrap();
    words
        .add_word(&spanish.id, &WordPayload::new("adios", "bye", 2))
        .unwrap();
    let kept = words
        .add_word(&german.id, &WordPayload::new("hallo", "hello", 1))
        .unwrap();

    let deleted = service.delete_list(&spanish.id).unwrap();

    assert_eq!(deleted.list_id, spanish.id);
    assert_eq!(deleted.purged_words, 2);
    assert!(stores.lists.get(&spanish.id).unwrap().is_none());
    assert_eq!(words.list_all_words().unwrap(), vec![kept]);
    assert_eq!(
        service.get_list(&spanish.id).unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn delete_list_by_non_owner_is_unauthorized() {
    let stores = memory_stores();
    let session = ManualSession::new("alice", 1_000);
    let ids = SequentialIdGenerator::new("id");
    let service = ListService::new(&stores, &session, &ids);
    let list = service.create_list("Spanish").unwrap();
    service
        .words()
        .add_word(&list.id, &WordPayload::new("hola", "hello", 1))
        .unwrap();

    session.act_as("bob");
    let err = service.delete_list(&list.id).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert_eq!(stores.lists.len(), 1);
    assert_eq!(stores.words.len(), 1);
}

#[test]
fn count_words_tracks_additions_and_deletions() {
    let stores = memory_stores();
    let session = ManualSession::new("alice", 1_000);
    let ids = SequentialIdGenerator::new("id");
    let service = ListService::new(&stores, &session, &ids);
    let words = service.words();
    let list = service.create_list("Spanish").unwrap();

    let mut added = Vec::new();
    for (text, difficulty) in [("hola", 1), ("adios", 2), ("gracias", 1)] {
        added.push(
            words
                .add_word(&list.id, &WordPayload::new(text, "", difficulty))
                .unwrap(),
        );
    }
    assert_eq!(service.count_words(&list.id).unwrap(), added.len());

    for (removed, word) in added.iter().enumerate() {
        let before = service.count_words(&list.id).unwrap();
        words.delete_word(&list.id, &word.id).unwrap();
        assert_eq!(service.count_words(&list.id).unwrap(), before - 1);
        assert_eq!(before, added.len() - removed);
    }

    session.act_as("bob");
    assert_eq!(
        service.count_words(&list.id).unwrap_err().kind(),
        ErrorKind::Unauthorized
    );
}

#[test]
fn delete_list_and_count_words_on_missing_list_are_not_found() {
    let stores = memory_stores();
    let session = ManualSession::new("alice", 1_000);
    let ids = SequentialIdGenerator::new("id");
    let service = ListService::new(&stores, &session, &ids);
    let list = service.create_list("Spanish").unwrap();
    service
        .words()
        .add_word(&list.id, &WordPayload::new("hola", "hello", 1))
        .unwrap();
    let words_before = stores.words.values().unwrap();
    let lists_before = stores.lists.values().unwrap();

    let deleted = service.delete_list("ghost").unwrap_err();
    assert!(matches!(deleted, ServiceError::ListNotFound(id) if id == "ghost"));
    let counted = service.count_words("ghost").unwrap_err();
    assert_eq!(counted.kind(), ErrorKind::NotFound);

    assert_eq!(stores.words.values().unwrap(), words_before);
    assert_eq!(stores.lists.values().unwrap(), lists_before);
}
