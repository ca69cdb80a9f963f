use anchor_lang::prelude::*;
use crate::constants::{ACCESS_PASS_SEED, MAX_METADATA_URI_LEN, MAX_ZONE_ID_LEN};
use crate::errors::ErrorCode;

/// A soulbound, time-limited zone access pass.
///
/// `tourist_wallet`, `zone_id`, `tourist_id_hash` and `expiry_timestamp` are
/// fixed at mint. `is_valid` only ever moves from true to false.
#[account]
#[derive(InitSpace)]
pub struct AccessPass {
    /// Sequence number taken from the program config counter
    pub credential_id: u64,

    /// Opaque hash of the tourist's identity document
    pub tourist_id_hash: [u8; 32],

    /// Restricted area / park / site identifier
    #[max_len(MAX_ZONE_ID_LEN)]
    pub zone_id: String,

    /// Unix time at or after which the pass no longer verifies
    pub expiry_timestamp: i64,

    /// Wallet that minted the pass
    pub tourist_wallet: Pubkey,

    /// Cleared on revocation
    pub is_valid: bool,

    /// IPFS/Arweave metadata URI
    #[max_len(MAX_METADATA_URI_LEN)]
    pub metadata_uri: String,

    /// Ledger time at mint
    pub minted_at: i64,

    /// PDA bump
    pub bump: u8,
}

impl AccessPass {
    pub const SEED_PREFIX: &'static [u8] = ACCESS_PASS_SEED;

    pub const SIZE: usize = 8 + Self::INIT_SPACE;

    pub fn validate_zone_id(zone_id: &str) -> Result<()> {
        require!(!zone_id.is_empty(), ErrorCode::EmptyZoneId);
        require!(zone_id.len() <= MAX_ZONE_ID_LEN, ErrorCode::ZoneIdTooLong);
        Ok(())
    }

    pub fn validate_metadata_uri(metadata_uri: &str) -> Result<()> {
        require!(
            metadata_uri.len() <= MAX_METADATA_URI_LEN,
            ErrorCode::MetadataUriTooLong
        );
        Ok(())
    }

    /// Checks mint arguments against the ledger clock. Runs before any
    /// account is written.
    pub fn validate_mint(
        zone_id: &str,
        expiry_timestamp: i64,
        metadata_uri: &str,
        now: i64,
    ) -> Result<()> {
        require!(expiry_timestamp > now, ErrorCode::InvalidExpiryTime);
        Self::validate_zone_id(zone_id)?;
        Self::validate_metadata_uri(metadata_uri)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        credential_id: u64,
        tourist_id_hash: [u8; 32],
        zone_id: String,
        expiry_timestamp: i64,
        tourist_wallet: Pubkey,
        metadata_uri: String,
        minted_at: i64,
        bump: u8,
    ) -> Self {
        Self {
            credential_id,
            tourist_id_hash,
            zone_id,
            expiry_timestamp,
            tourist_wallet,
            is_valid: true,
            metadata_uri,
            minted_at,
            bump,
        }
    }

    pub fn is_expired(&self, now: i64) -> bool {
        self.expiry_timestamp <= now
    }

    /// Rejects a pass presented for the wrong wallet or zone. These are not
    /// reported as a `false` verification.
    pub fn check_binding(&self, tourist_wallet: &Pubkey, zone_id: &str) -> Result<()> {
        require_keys_eq!(
            self.tourist_wallet,
            *tourist_wallet,
            ErrorCode::WrongTourist
        );
        require!(self.zone_id == zone_id, ErrorCode::ZoneMismatch);
        Ok(())
    }

    pub fn verify(&self, tourist_wallet: &Pubkey, zone_id: &str, now: i64) -> Result<bool> {
        self.check_binding(tourist_wallet, zone_id)?;
        Ok(self.is_valid && !self.is_expired(now))
    }

    pub fn revoke(&mut self) -> Result<()> {
        require!(self.is_valid, ErrorCode::PassAlreadyRevoked);
        self.is_valid = false;
        Ok(())
    }

    pub fn set_metadata_uri(&mut self, metadata_uri: String) -> Result<()> {
        Self::validate_metadata_uri(&metadata_uri)?;
        self.metadata_uri = metadata_uri;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(err: ErrorCode) -> anchor_lang::error::Error {
        err.into()
    }

    const NOW: i64 = 1_700_000_000;
    const ZONE: &str = "CENTRAL_PARK_NYC";

    fn minted_pass(wallet: Pubkey) -> AccessPass {
        AccessPass::new(
            0,
            [1u8; 32],
            ZONE.to_string(),
            NOW + 86_400,
            wallet,
            "ipfs://pass-0".to_string(),
            NOW,
            254,
        )
    }

    #[test]
    fn new_pass_is_valid() {
        let wallet = Pubkey::new_unique();
        let pass = minted_pass(wallet);
        assert!(pass.is_valid);
        assert_eq!(pass.tourist_wallet, wallet);
        assert_eq!(pass.minted_at, NOW);
    }

    #[test]
    fn expiry_must_be_strictly_future() {
        assert_eq!(
            AccessPass::validate_mint(ZONE, NOW, "", NOW).unwrap_err(),
            expected(ErrorCode::InvalidExpiryTime)
        );
        assert_eq!(
            AccessPass::validate_mint(ZONE, NOW - 1, "", NOW).unwrap_err(),
            expected(ErrorCode::InvalidExpiryTime)
        );
        assert!(AccessPass::validate_mint(ZONE, NOW + 1, "", NOW).is_ok());
    }

    #[test]
    fn zone_id_bounds() {
        assert_eq!(
            AccessPass::validate_zone_id("").unwrap_err(),
            expected(ErrorCode::EmptyZoneId)
        );
        let long = "Z".repeat(MAX_ZONE_ID_LEN + 1);
        assert_eq!(
            AccessPass::validate_zone_id(&long).unwrap_err(),
            expected(ErrorCode::ZoneIdTooLong)
        );
        assert!(AccessPass::validate_zone_id(&"Z".repeat(MAX_ZONE_ID_LEN)).is_ok());
    }

    #[test]
    fn verify_true_when_bound_valid_and_unexpired() {
        let wallet = Pubkey::new_unique();
        let pass = minted_pass(wallet);
        assert!(pass.verify(&wallet, ZONE, NOW).unwrap());
    }

    #[test]
    fn verify_false_at_and_after_expiry() {
        let wallet = Pubkey::new_unique();
        let pass = minted_pass(wallet);
        assert!(pass.verify(&wallet, ZONE, NOW + 86_399).unwrap());
        assert!(!pass.verify(&wallet, ZONE, NOW + 86_400).unwrap());
        assert!(!pass.verify(&wallet, ZONE, NOW + 90_000).unwrap());
    }

    #[test]
    fn wrong_wallet_is_rejected_not_false() {
        let pass = minted_pass(Pubkey::new_unique());
        let err = pass.verify(&Pubkey::new_unique(), ZONE, NOW).unwrap_err();
        assert_eq!(err, expected(ErrorCode::WrongTourist));
    }

    #[test]
    fn wrong_zone_is_rejected_not_false() {
        let wallet = Pubkey::new_unique();
        let pass = minted_pass(wallet);
        let err = pass.verify(&wallet, "GOLDEN_GATE_SF", NOW).unwrap_err();
        assert_eq!(err, expected(ErrorCode::ZoneMismatch));
    }

    #[test]
    fn binding_errors_take_precedence_over_revocation() {
        let wallet = Pubkey::new_unique();
        let mut pass = minted_pass(wallet);
        pass.revoke().unwrap();
        let err = pass.verify(&wallet, "OTHER_ZONE", NOW).unwrap_err();
        assert_eq!(err, expected(ErrorCode::ZoneMismatch));
    }

    #[test]
    fn revoke_is_terminal_and_not_idempotent() {
        let wallet = Pubkey::new_unique();
        let mut pass = minted_pass(wallet);
        pass.revoke().unwrap();
        assert!(!pass.is_valid);
        assert_eq!(
            pass.revoke().unwrap_err(),
            expected(ErrorCode::PassAlreadyRevoked)
        );
        assert!(!pass.is_valid);
        assert!(!pass.verify(&wallet, ZONE, NOW).unwrap());
    }

    #[test]
    fn metadata_update_touches_only_uri() {
        let wallet = Pubkey::new_unique();
        let mut pass = minted_pass(wallet);
        pass.set_metadata_uri("ar://corrected-photo".to_string()).unwrap();
        pass.set_metadata_uri("ar://corrected-photo".to_string()).unwrap();
        assert_eq!(pass.metadata_uri, "ar://corrected-photo");
        assert_eq!(pass.zone_id, ZONE);
        assert_eq!(pass.expiry_timestamp, NOW + 86_400);
        assert_eq!(pass.tourist_wallet, wallet);
        assert!(pass.is_valid);
    }

    #[test]
    fn oversized_metadata_uri_is_rejected() {
        let mut pass = minted_pass(Pubkey::new_unique());
        let err = pass
            .set_metadata_uri("u".repeat(MAX_METADATA_URI_LEN + 1))
            .unwrap_err();
        assert_eq!(err, expected(ErrorCode::MetadataUriTooLong));
        assert_eq!(pass.metadata_uri, "ipfs://pass-0");
    }
}
