use anchor_lang::prelude::*;

#[event]
pub struct AccessPassMinted {
    pub credential_id: u64,
    pub tourist_wallet: Pubkey,
    pub tourist_id_hash: [u8; 32],
    pub zone_id: String,
    pub expiry_timestamp: i64,
    pub metadata_uri: String,
    pub minted_at: i64,
}

#[event]
pub struct AccessVerified {
    pub credential_id: u64,
    pub tourist_wallet: Pubkey,
    pub zone_id: String,
    pub is_valid: bool,
    pub verified_at: i64,
}

#[event]
pub struct PassRevoked {
    pub credential_id: u64,
    pub tourist_wallet: Pubkey,
    pub zone_id: String,
    pub revoked_by: Pubkey,
    pub revoked_at: i64,
}

#[event]
pub struct MetadataUpdated {
    pub credential_id: u64,
    pub new_metadata_uri: String,
    pub updated_at: i64,
}
