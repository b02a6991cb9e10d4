use core::marker::PhantomData;

use soroban_sdk::{contracttype, Address, Env, IntoVal, TryFromVal, Val, Vec};

use crate::error::ZiptyError;
use crate::types::{District, DistrictKey, Province, SubDistrict, SubDistrictKey};

/// Records per page of a set's enumeration.
pub const PAGE_LEN: u32 = 32;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Province(u32),
    ProvinceSlot(u32),
    ProvincePage(u32),
    ProvinceCount,
    District(DistrictKey),
    DistrictSlot(DistrictKey),
    DistrictPage(u32),
    DistrictCount,
    SubDistrict(SubDistrictKey),
    SubDistrictSlot(SubDistrictKey),
    SubDistrictPage(u32),
    SubDistrictCount,
    NextTokenId,
    TokenHolder(u64),
    Balance(Address),
}

/// Keyed records plus the order in which their keys first appeared.
///
/// Each record lives in its own persistent entry so existence checks and
/// lookups are a single probe. A second copy of every value sits in ordered
/// pages of `PAGE_LEN`, and the slot entry remembers where, so enumeration
/// reads one entry per page instead of one per record.
pub struct RecordSet<K, V> {
    count: DataKey,
    page: fn(u32) -> DataKey,
    entry: fn(K) -> DataKey,
    slot: fn(K) -> DataKey,
    _records: PhantomData<V>,
}

impl<K, V> RecordSet<K, V>
where
    K: Clone + IntoVal<Env, Val> + TryFromVal<Env, Val>,
    V: Clone + IntoVal<Env, Val> + TryFromVal<Env, Val>,
{
    pub fn new(
        count: DataKey,
        page: fn(u32) -> DataKey,
        entry: fn(K) -> DataKey,
        slot: fn(K) -> DataKey,
    ) -> Self {
        Self {
            count,
            page,
            entry,
            slot,
            _records: PhantomData,
        }
    }

    pub fn exists(&self, env: &Env, key: &K) -> bool {
        env.storage().persistent().has(&(self.entry)(key.clone()))
    }

    pub fn get(&self, env: &Env, key: &K) -> Result<V, ZiptyError> {
        env.storage()
            .persistent()
            .get(&(self.entry)(key.clone()))
            .ok_or(ZiptyError::NotFound)
    }

    /// Writes `value` under `key`. Returns `true` when the key is new.
    ///
    /// A replaced value keeps its position in the enumeration.
    pub fn upsert(&self, env: &Env, key: K, value: &V) -> bool {
        let storage = env.storage().persistent();
        let slot_key = (self.slot)(key.clone());
        let existing: Option<u32> = storage.get(&slot_key);
        let inserted = existing.is_none();

        let position = match existing {
            Some(position) => position,
            None => {
                let position = self.len(env);
                storage.set(&slot_key, &position);
                storage.set(&self.count, &(position + 1));
                position
            }
        };

        let page_key = (self.page)(position / PAGE_LEN);
        let mut page = self.page_at(env, &page_key);
        let offset = position % PAGE_LEN;
        if offset < page.len() {
            page.set(offset, value.clone());
        } else {
            page.push_back(value.clone());
        }
        storage.set(&page_key, &page);
        storage.set(&(self.entry)(key), value);
        inserted
    }

    pub fn len(&self, env: &Env) -> u32 {
        env.storage().persistent().get(&self.count).unwrap_or(0)
    }

    /// Values in first-insertion order, read at call time.
    pub fn all(&self, env: &Env) -> Vec<V> {
        let mut values = Vec::new(env);
        let pages = self.len(env).div_ceil(PAGE_LEN);
        for number in 0..pages {
            values.append(&self.page_at(env, &(self.page)(number)));
        }
        values
    }

    fn page_at(&self, env: &Env, page_key: &DataKey) -> Vec<V> {
        env.storage()
            .persistent()
            .get(page_key)
            .unwrap_or_else(|| Vec::new(env))
    }
}

pub fn provinces() -> RecordSet<u32, Province> {
    RecordSet::new(
        DataKey::ProvinceCount,
        DataKey::ProvincePage,
        DataKey::Province,
        DataKey::ProvinceSlot,
    )
}

pub fn districts() -> RecordSet<DistrictKey, District> {
    RecordSet::new(
        DataKey::DistrictCount,
        DataKey::DistrictPage,
        DataKey::District,
        DataKey::DistrictSlot,
    )
}

pub fn sub_districts() -> RecordSet<SubDistrictKey, SubDistrict> {
    RecordSet::new(
        DataKey::SubDistrictCount,
        DataKey::SubDistrictPage,
        DataKey::SubDistrict,
        DataKey::SubDistrictSlot,
    )
}
