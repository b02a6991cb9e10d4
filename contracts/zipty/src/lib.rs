#![no_std]

#[cfg(test)]
extern crate std;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

mod access;
mod error;
mod events;
mod issuer;
mod storage;
mod types;
mod zones;


pub use error::{Level, Parent, ZiptyError};
pub use types::{District, DistrictKey, Province, SubDistrict, SubDistrictKey};

use events::{EvtInitialized, EvtOwnershipTransferred};

const CONTRACT_VERSION: u32 = 1;
const TOKEN_NAME: &str = "Zipty";
const TOKEN_SYMBOL: &str = "ZPTY";

/// Identity token issuer and Panama administrative-zone directory.
#[contract]
pub struct Zipty;

#[contractimpl]
impl Zipty {
    pub fn version(_env: Env) -> u32 {
        CONTRACT_VERSION
    }

    /// One-time initializer. Seeds are loaded provinces first, then districts,
    /// then sub-districts, under the same rules as the `set_*` calls.
    pub fn init(
        env: Env,
        owner: Address,
        provinces: Vec<Province>,
        districts: Vec<District>,
        sub_districts: Vec<SubDistrict>,
    ) -> Result<(), ZiptyError> {
        if access::is_initialized(&env) {
            return Err(ZiptyError::AlreadyInitialized);
        }
        owner.require_auth();

        for province in provinces.iter() {
            zones::put_province(&env, &province)?;
        }
        for district in districts.iter() {
            zones::put_district(&env, &district)?;
        }
        for sub_district in sub_districts.iter() {
            zones::put_sub_district(&env, &sub_district)?;
        }
        access::write_owner(&env, &owner);

        EvtInitialized {
            owner,
            provinces: storage::provinces().len(&env),
            districts: storage::districts().len(&env),
            sub_districts: storage::sub_districts().len(&env),
        }
        .publish(&env);
        Ok(())
    }

    // --- Access ---

    pub fn owner(env: Env) -> Result<Address, ZiptyError> {
        access::read_owner(&env)
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ZiptyError> {
        access::require_owner(&env, &caller)?;
        access::write_owner(&env, &new_owner);
        EvtOwnershipTransferred {
            from: caller,
            to: new_owner,
        }
        .publish(&env);
        Ok(())
    }

    // --- Zone directory ---

    pub fn set_province(
        env: Env,
        caller: Address,
        code: u32,
        name: String,
    ) -> Result<(), ZiptyError> {
        access::require_owner(&env, &caller)?;
        let province = Province { code, name };
        let inserted = zones::put_province(&env, &province)?;
        zones::publish_province(&env, province, inserted);
        Ok(())
    }

    pub fn province(env: Env, code: u32) -> Result<Province, ZiptyError> {
        storage::provinces().get(&env, &code)
    }

    pub fn provinces(env: Env) -> Vec<Province> {
        storage::provinces().all(&env)
    }

    pub fn province_count(env: Env) -> u32 {
        storage::provinces().len(&env)
    }

    pub fn set_district(
        env: Env,
        caller: Address,
        province_code: u32,
        code: u32,
        name: String,
    ) -> Result<(), ZiptyError> {
        access::require_owner(&env, &caller)?;
        let district = District {
            province_code,
            code,
            name,
        };
        let inserted = zones::put_district(&env, &district)?;
        zones::publish_district(&env, district, inserted);
        Ok(())
    }

    pub fn district(env: Env, province_code: u32, code: u32) -> Result<District, ZiptyError> {
        storage::districts().get(&env, &DistrictKey { province_code, code })
    }

    pub fn districts(env: Env) -> Vec<District> {
        storage::districts().all(&env)
    }

    pub fn district_count(env: Env) -> u32 {
        storage::districts().len(&env)
    }

    /// `"<province_code>-<code>"`, e.g. `"7-1"`.
    pub fn district_key(env: Env, province_code: u32, code: u32) -> String {
        DistrictKey { province_code, code }.render(&env)
    }

    pub fn set_sub_district(
        env: Env,
        caller: Address,
        province_code: u32,
        district_code: u32,
        code: u32,
        name: String,
    ) -> Result<(), ZiptyError> {
        access::require_owner(&env, &caller)?;
        let sub_district = SubDistrict {
            province_code,
            district_code,
            code,
            name,
        };
        let inserted = zones::put_sub_district(&env, &sub_district)?;
        zones::publish_sub_district(&env, sub_district, inserted);
        Ok(())
    }

    pub fn sub_district(
        env: Env,
        province_code: u32,
        district_code: u32,
        code: u32,
    ) -> Result<SubDistrict, ZiptyError> {
        let key = SubDistrictKey {
            province_code,
            district_code,
            code,
        };
        storage::sub_districts().get(&env, &key)
    }

    pub fn sub_districts(env: Env) -> Vec<SubDistrict> {
        storage::sub_districts().all(&env)
    }

    pub fn sub_district_count(env: Env) -> u32 {
        storage::sub_districts().len(&env)
    }

    /// `"<province_code>-<district_code>-<code>"`.
    pub fn sub_district_key(
        env: Env,
        province_code: u32,
        district_code: u32,
        code: u32,
    ) -> String {
        SubDistrictKey {
            province_code,
            district_code,
            code,
        }
        .render(&env)
    }

    // --- Identity token ---

    pub fn name(env: Env) -> String {
        String::from_str(&env, TOKEN_NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, TOKEN_SYMBOL)
    }

    /// Issues the next sequential id to `caller`. Open to any account.
    pub fn mint(env: Env, caller: Address) -> u64 {
        caller.require_auth();
        issuer::issue(&env, &caller)
    }

    pub fn owner_of(env: Env, id: u64) -> Result<Address, ZiptyError> {
        issuer::holder_of(&env, id)
    }

    pub fn balance_of(env: Env, holder: Address) -> u64 {
        issuer::balance_of(&env, &holder)
    }

    pub fn total_supply(env: Env) -> u64 {
        issuer::next_id(&env)
    }
}
