use vocabook_core::db::{open_db, open_db_in_memory};
use vocabook_core::{
    memory_stores, sqlite_stores, CallerId, ErrorKind, ListService, ManualSession, RecordStore,
    SequentialIdGenerator, VocabularyList, VocabularyStores, Word, WordPayload,
};

fn spanish_scenario<W, L>(stores: &VocabularyStores<W, L>)
where
    W: RecordStore<Word>,
    L: RecordStore<VocabularyList>,
{
    let session = ManualSession::new("caller-a", 1_000);
    let ids = SequentialIdGenerator::new("id");
    let lists = ListService::new(stores, &session, &ids);
    let words = lists.words();

    let list = lists.create_list("Spanish").unwrap();
    assert!(list.words.is_empty());
    assert_eq!(list.creator, CallerId::new("caller-a"));

    let hola = words
        .add_word(&list.id, &WordPayload::new("hola", "hello", 1))
        .unwrap();
    assert_eq!(hola.creator, CallerId::new("caller-a"));

    session.act_as("caller-b");
    assert_eq!(
        lists.get_list(&list.id).unwrap_err().kind(),
        ErrorKind::Unauthorized
    );

    session.act_as("caller-a");
    session.advance(500);
    let changed = words.change_difficulty(&hola.id, 3).unwrap();
    assert_eq!(changed.difficulty, 3);
    assert_eq!(words.get_word(&list.id, &hola.id).unwrap().difficulty, 3);
    assert_eq!(
        lists.get_list(&list.id).unwrap().words,
        vec![changed.clone()]
    );
    assert_eq!(stores.words.get(&hola.id).unwrap(), Some(changed));

    let ghost = words.add_word("ghost", &WordPayload::new("boo", "", 0));
    assert_eq!(ghost.unwrap_err().kind(), ErrorKind::NotFound);
}

fn initial_words_scenario<W, L>(stores: &VocabularyStores<W, L>)
where
    W: RecordStore<Word>,
    L: RecordStore<VocabularyList>,
{
    let session = ManualSession::new("caller-a", 1_000);
    let ids = SequentialIdGenerator::new("id");
    let lists = ListService::new(stores, &session, &ids);
    let words = lists.words();
    let list = lists.create_list("Numbers").unwrap();

    let added: Vec<_> = ["uno", "dos", "tres"]
        .into_iter()
        .map(|text| {
            words
                .add_word(&list.id, &WordPayload::new(text, "", 1))
                .unwrap()
        })
        .collect();

    assert_eq!(words.list_initial_words().unwrap(), added);
}

#[test]
fn spanish_scenario_on_memory_stores() {
    spanish_scenario(&memory_stores());
}

#[test]
fn spanish_scenario_on_sqlite_stores() {
    let conn = open_db_in_memory().unwrap();
    spanish_scenario(&sqlite_stores(&conn).unwrap());
}

#[test]
fn initial_words_scenario_on_both_engines() {
    initial_words_scenario(&memory_stores());

    let conn = open_db_in_memory().unwrap();
    initial_words_scenario(&sqlite_stores(&conn).unwrap());
}

#[test]
fn records_survive_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocabook.db");
    let session = ManualSession::new("caller-a", 1_000);
    let ids = SequentialIdGenerator::new("id");

    let (list_id, word) = {
        let conn = open_db(&path).unwrap();
        let stores = sqlite_stores(&conn).unwrap();
        let lists = ListService::new(&stores, &session, &ids);
        let list = lists.create_list("Spanish").unwrap();
        let word = lists
            .words()
            .add_word(&list.id, &WordPayload::new("hola", "hello", 1))
            .unwrap();
        (list.id, word)
    };

    let conn = open_db(&path).unwrap();
    let stores = sqlite_stores(&conn).unwrap();
    let lists = ListService::new(&stores, &session, &ids);
    assert_eq!(lists.count_words(&list_id).unwrap(), 1);
    assert_eq!(lists.words().get_word(&list_id, &word.id).unwrap(), word);
}
