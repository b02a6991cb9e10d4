use soroban_sdk::{contractevent, Address, String};

#[derive(Clone)]
#[contractevent(topics = ["province_set"])]
pub struct EvtProvinceSet {
    #[topic]
    pub code: u32,
    pub name: String,
    /// `false` when an existing record was renamed.
    pub inserted: bool,
}

#[derive(Clone)]
#[contractevent(topics = ["district_set"])]
pub struct EvtDistrictSet {
    #[topic]
    pub province_code: u32,
    #[topic]
    pub code: u32,
    pub name: String,
    pub inserted: bool,
}

#[derive(Clone)]
#[contractevent(topics = ["sub_district_set"])]
pub struct EvtSubDistrictSet {
    #[topic]
    pub province_code: u32,
    #[topic]
    pub district_code: u32,
    #[topic]
    pub code: u32,
    pub name: String,
    pub inserted: bool,
}

#[derive(Clone)]
#[contractevent(topics = ["mint"])]
pub struct EvtMint {
    #[topic]
    pub id: u64,
    pub holder: Address,
}

#[derive(Clone)]
#[contractevent(topics = ["ownership_transferred"])]
pub struct EvtOwnershipTransferred {
    pub from: Address,
    pub to: Address,
}

/// Published once, after the seed records are loaded.
#[derive(Clone)]
#[contractevent(topics = ["initialized"])]
pub struct EvtInitialized {
    pub owner: Address,
    pub provinces: u32,
    pub districts: u32,
    pub sub_districts: u32,
}
