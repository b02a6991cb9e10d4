use soroban_sdk::{Address, Env};

use crate::error::ZiptyError;
use crate::events::EvtMint;
use crate::storage::DataKey;

pub fn next_id(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::NextTokenId)
        .unwrap_or(0)
}

pub fn holder_of(env: &Env, id: u64) -> Result<Address, ZiptyError> {
    env.storage()
        .persistent()
        .get(&DataKey::TokenHolder(id))
        .ok_or(ZiptyError::NotFound)
}

pub fn balance_of(env: &Env, holder: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(holder.clone()))
        .unwrap_or(0)
}

/// Assigns the next sequential id to `holder` and returns it.
pub fn issue(env: &Env, holder: &Address) -> u64 {
    let storage = env.storage().persistent();
    let id = next_id(env);
    let next = id
        .checked_add(1)
        .unwrap_or_else(|| panic!("token id overflow"));

    storage.set(&DataKey::TokenHolder(id), holder);
    storage.set(
        &DataKey::Balance(holder.clone()),
        &balance_of(env, holder).saturating_add(1),
    );
    storage.set(&DataKey::NextTokenId, &next);

    EvtMint {
        id,
        holder: holder.clone(),
    }
    .publish(env);
    id
}
