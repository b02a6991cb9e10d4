//! Province → district → sub-district directory.
//!
//! Every write runs an ordered list of [`Check`]s and stops at the first
//! failure, so the error a caller sees depends only on the inputs. Nothing is
//! written until all checks pass.

use soroban_sdk::Env;

use crate::error::{Level, Parent, ZiptyError};
use crate::events::{EvtDistrictSet, EvtProvinceSet, EvtSubDistrictSet};
use crate::storage;
use crate::types::{District, DistrictKey, Province, SubDistrict};

const MIN_CODE: u32 = 1;

enum Check<'a> {
    Code(Level, u32),
    ProvinceExists(u32),
    DistrictExists(&'a DistrictKey),
}

impl Check<'_> {
    fn run(&self, env: &Env) -> Result<(), ZiptyError> {
        match self {
            Check::Code(level, code) => {
                if *code < MIN_CODE {
                    return Err(ZiptyError::invalid_code(*level));
                }
            }
            Check::ProvinceExists(code) => {
                if !storage::provinces().exists(env, code) {
                    return Err(ZiptyError::missing_parent(Parent::Province));
                }
            }
            Check::DistrictExists(key) => {
                if !storage::districts().exists(env, key) {
                    return Err(ZiptyError::missing_parent(Parent::District));
                }
            }
        }
        Ok(())
    }
}

fn run_checks(env: &Env, checks: &[Check]) -> Result<(), ZiptyError> {
    checks.iter().try_for_each(|check| check.run(env))
}

/// Returns `true` when the province code is new.
pub fn put_province(env: &Env, province: &Province) -> Result<bool, ZiptyError> {
    run_checks(env, &[Check::Code(Level::Province, province.code)])?;
    Ok(storage::provinces().upsert(env, province.code, province))
}

pub fn put_district(env: &Env, district: &District) -> Result<bool, ZiptyError> {
    run_checks(
        env,
        &[
            Check::Code(Level::Province, district.province_code),
            Check::Code(Level::District, district.code),
            Check::ProvinceExists(district.province_code),
        ],
    )?;
    Ok(storage::districts().upsert(env, district.key(), district))
}

pub fn put_sub_district(env: &Env, sub_district: &SubDistrict) -> Result<bool, ZiptyError> {
    let parent = sub_district.district_key();
    run_checks(
        env,
        &[
            Check::Code(Level::Province, sub_district.province_code),
            Check::Code(Level::District, sub_district.district_code),
            Check::Code(Level::SubDistrict, sub_district.code),
            Check::DistrictExists(&parent),
        ],
    )?;
    Ok(storage::sub_districts().upsert(env, sub_district.key(), sub_district))
}

pub fn publish_province(env: &Env, province: Province, inserted: bool) {
    EvtProvinceSet {
        code: province.code,
        name: province.name,
        inserted,
    }
    .publish(env);
}

pub fn publish_district(env: &Env, district: District, inserted: bool) {
    EvtDistrictSet {
        province_code: district.province_code,
        code: district.code,
        name: district.name,
        inserted,
    }
    .publish(env);
}

pub fn publish_sub_district(env: &Env, sub_district: SubDistrict, inserted: bool) {
    EvtSubDistrictSet {
        province_code: sub_district.province_code,
        district_code: sub_district.district_code,
        code: sub_district.code,
        name: sub_district.name,
        inserted,
    }
    .publish(env);
}
