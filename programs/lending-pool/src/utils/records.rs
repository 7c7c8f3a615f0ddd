use anchor_lang::prelude::*;

/// Deserialize a program-owned record, or `None` if the account was never
/// created (or has been closed).
pub fn load_record<T: AccountDeserialize + Owner>(info: &AccountInfo) -> Result<Option<T>> {
    if info.owner != &T::owner() || info.data_is_empty() {
        return Ok(None);
    }

    let data = info.try_borrow_data()?;
    let record = T::try_deserialize(&mut data.as_ref())?;
    Ok(Some(record))
}
