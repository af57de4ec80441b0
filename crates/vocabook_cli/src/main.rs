//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `vocabook_core` linkage, configuration and database bootstrap.
//! - Print a deterministic summary of the configured stores.

use log::error;
use std::process::ExitCode;
use vocabook_core::db::open_db;
use vocabook_core::{
    init_logging, sqlite_stores, ListService, SystemSession, UuidIdGenerator, VocabConfig,
};

fn main() -> ExitCode {
    let config = VocabConfig::from_env();
    println!("vocabook_core ping={}", vocabook_core::ping());
    println!("vocabook_core version={}", vocabook_core::core_version());

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    match summarize(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_summary module=cli status=error error={err}");
            eprintln!("vocabook: {err}");
            ExitCode::FAILURE
        }
    }
}

fn summarize(config: &VocabConfig) -> Result<(), String> {
    let conn = open_db(&config.db_path).map_err(|err| format!("open db failed: {err}"))?;
    let stores = sqlite_stores(&conn).map_err(|err| format!("store init failed: {err}"))?;
    let session = SystemSession::new(config.caller.clone());
    let lists = ListService::new(&stores, &session, &UuidIdGenerator);

    let all_lists = lists.list_all_lists().map_err(|err| err.to_string())?;
    let owned = all_lists
        .iter()
        .filter(|list| list.creator == config.caller)
        .count();
    let words = lists
        .words()
        .list_all_words()
        .map_err(|err| err.to_string())?;

    println!("db_path={}", config.db_path.display());
    println!("caller={}", config.caller);
    println!("lists={} owned_lists={} words={}", all_lists.len(), owned, words.len());
    Ok(())
}
