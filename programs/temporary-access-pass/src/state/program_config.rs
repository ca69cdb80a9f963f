use anchor_lang::prelude::*;
use crate::constants::PROGRAM_CONFIG_SEED;
use crate::errors::ErrorCode;

#[account]
#[derive(InitSpace)]
pub struct ProgramConfig {
    /// Administrator allowed to revoke passes and update metadata
    pub authority: Pubkey,

    /// Id the next minted pass will receive
    pub credential_counter: u64,

    /// PDA bump
    pub bump: u8,
}

impl ProgramConfig {
    pub const SEED_PREFIX: &'static [u8] = PROGRAM_CONFIG_SEED;

    pub const SIZE: usize = 8 + Self::INIT_SPACE;

    pub fn is_authority(&self, signer: &Pubkey) -> bool {
        self.authority == *signer
    }

    /// Claims the current counter value as a credential id and advances the
    /// counter. The caller must create the pass at the address derived from
    /// the returned id within the same instruction.
    pub fn claim_credential_id(&mut self) -> Result<u64> {
        let credential_id = self.credential_counter;
        self.credential_counter = credential_id
            .checked_add(1)
            .ok_or(ErrorCode::CounterOverflow)?;
        Ok(credential_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(err: ErrorCode) -> anchor_lang::error::Error {
        err.into()
    }

    fn fresh_config() -> ProgramConfig {
        ProgramConfig {
            authority: Pubkey::new_unique(),
            credential_counter: 0,
            bump: 255,
        }
    }

    #[test]
    fn ids_are_sequential_from_zero() {
        let mut config = fresh_config();
        let ids: Vec<u64> = (0..5).map(|_| config.claim_credential_id().unwrap()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        assert_eq!(config.credential_counter, 5);
    }

    #[test]
    fn overflow_leaves_counter_untouched() {
        let mut config = fresh_config();
        config.credential_counter = u64::MAX;
        let err = config.claim_credential_id().unwrap_err();
        assert_eq!(err, expected(ErrorCode::CounterOverflow));
        assert_eq!(config.credential_counter, u64::MAX);
    }

    #[test]
    fn only_configured_authority_matches() {
        let config = fresh_config();
        assert!(config.is_authority(&config.authority));
        assert!(!config.is_authority(&Pubkey::new_unique()));
    }
}
