use soroban_sdk::{contracttype, Env, String};

/// Longest rendered key: three `u32::MAX` codes joined by two dashes.
const MAX_RENDERED_KEY_LEN: usize = 32;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Province {
    pub code: u32,
    pub name: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct District {
    pub province_code: u32,
    pub code: u32,
    pub name: String,
}

/// A corregimiento.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubDistrict {
    pub province_code: u32,
    pub district_code: u32,
    pub code: u32,
    pub name: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DistrictKey {
    pub province_code: u32,
    pub code: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SubDistrictKey {
    pub province_code: u32,
    pub district_code: u32,
    pub code: u32,
}

impl District {
    pub fn key(&self) -> DistrictKey {
        DistrictKey {
            province_code: self.province_code,
            code: self.code,
        }
    }
}

impl SubDistrict {
    pub fn key(&self) -> SubDistrictKey {
        SubDistrictKey {
            province_code: self.province_code,
            district_code: self.district_code,
            code: self.code,
        }
    }

    pub fn district_key(&self) -> DistrictKey {
        DistrictKey {
            province_code: self.province_code,
            code: self.district_code,
        }
    }
}

impl DistrictKey {
    /// Canonical `"<province>-<district>"` form.
    pub fn render(&self, env: &Env) -> String {
        render_codes(env, &[self.province_code, self.code])
    }
}

impl SubDistrictKey {
    /// Canonical `"<province>-<district>-<sub_district>"` form.
    pub fn render(&self, env: &Env) -> String {
        render_codes(env, &[self.province_code, self.district_code, self.code])
    }
}

fn render_codes(env: &Env, codes: &[u32]) -> String {
    let mut buf = [0u8; MAX_RENDERED_KEY_LEN];
    let mut len = 0usize;
    for (idx, code) in codes.iter().enumerate() {
        if idx != 0 {
            buf[len] = b'-';
            len += 1;
        }
        len = write_decimal(&mut buf, len, *code);
    }
    String::from_bytes(env, &buf[..len])
}

fn write_decimal(buf: &mut [u8; MAX_RENDERED_KEY_LEN], at: usize, value: u32) -> usize {
    let mut digits = [0u8; 10];
    let mut count = 0usize;
    let mut rest = value;
    loop {
        digits[count] = b'0' + (rest % 10) as u8;
        count += 1;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    let mut pos = at;
    while count > 0 {
        count -= 1;
        buf[pos] = digits[count];
        pos += 1;
    }
    pos
}
