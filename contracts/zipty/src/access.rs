use soroban_sdk::{Address, Env};

use crate::error::ZiptyError;
use crate::storage::DataKey;

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Owner)
}

pub fn read_owner(env: &Env) -> Result<Address, ZiptyError> {
    env.storage()
        .persistent()
        .get(&DataKey::Owner)
        .ok_or(ZiptyError::NotInitialized)
}

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage().persistent().set(&DataKey::Owner, owner);
}

/// Authenticates `caller` and checks it is the stored owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), ZiptyError> {
    caller.require_auth();
    let owner = read_owner(env)?;
    if owner != *caller {
        return Err(ZiptyError::Unauthorized);
    }
    Ok(())
}
