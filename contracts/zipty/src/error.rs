use soroban_sdk::contracterror;

/// Directory level whose code failed validation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Level {
    Province,
    District,
    SubDistrict,
}

/// Levels that can be referenced as a parent.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Parent {
    Province,
    District,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ZiptyError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidProvinceCode = 4,
    InvalidDistrictCode = 5,
    InvalidSubDistrictCode = 6,
    MissingProvince = 7,
    MissingDistrict = 8,
    NotFound = 9,
}

impl ZiptyError {
    /// A code field at `level` is below 1.
    pub fn invalid_code(level: Level) -> Self {
        match level {
            Level::Province => ZiptyError::InvalidProvinceCode,
            Level::District => ZiptyError::InvalidDistrictCode,
            Level::SubDistrict => ZiptyError::InvalidSubDistrictCode,
        }
    }

    /// A child record names a `parent` that is not stored.
    pub fn missing_parent(parent: Parent) -> Self {
        match parent {
            Parent::Province => ZiptyError::MissingProvince,
            Parent::District => ZiptyError::MissingDistrict,
        }
    }
}
