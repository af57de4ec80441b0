//! Ownership gate shared by list and word use-cases.

use crate::model::identity::CallerId;
use crate::model::vocabulary_list::VocabularyList;
use crate::model::Record;
use crate::repo::record_store::RecordStore;
use crate::service::error::{ServiceError, ServiceResult};
use crate::session::CallScope;
use log::warn;

/// Fails with `Unauthorized` unless `scope.caller` created the record.
pub(crate) fn ensure_owner<V: Record>(
    creator: &CallerId,
    scope: &CallScope,
    id: &str,
) -> ServiceResult<()> {
    if *creator == scope.caller {
        return Ok(());
    }
    warn!(
        "event=access_denied module=service status=rejected entity={} id={}",
        V::KIND,
        id
    );
    Err(ServiceError::unauthorized::<V>(id))
}

/// Loads a list and checks that the acting caller owns it.
pub(crate) fn load_owned_list<L: RecordStore<VocabularyList>>(
    lists: &L,
    list_id: &str,
    scope: &CallScope,
) -> ServiceResult<VocabularyList> {
    let list = lists
        .get(list_id)?
        .ok_or_else(|| ServiceError::list_not_found(list_id))?;
    ensure_owner::<VocabularyList>(&list.creator, scope, list_id)?;
    Ok(list)
}
