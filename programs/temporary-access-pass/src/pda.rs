//! Address derivation for off-chain callers.
//!
//! Seeds match the account constraints in `instructions`, so verifiers and
//! front-ends can locate any record without an index.

use anchor_lang::prelude::Pubkey;

use crate::state::{AccessPass, ProgramConfig};

/// Derive the program config PDA.
pub fn program_config_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ProgramConfig::SEED_PREFIX], program_id)
}

/// Derive the PDA of the pass with the given credential id.
pub fn access_pass_address(program_id: &Pubkey, credential_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[AccessPass::SEED_PREFIX, &credential_id.to_le_bytes()],
        program_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(program_config_address(&crate::ID), program_config_address(&crate::ID));
        assert_eq!(access_pass_address(&crate::ID, 7), access_pass_address(&crate::ID, 7));
    }

    #[test]
    fn distinct_ids_do_not_collide() {
        let addresses: Vec<Pubkey> = (0..32u64)
            .map(|id| access_pass_address(&crate::ID, id).0)
            .collect();
        for (i, a) in addresses.iter().enumerate() {
            for b in &addresses[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(!addresses.contains(&program_config_address(&crate::ID).0));
    }

    #[test]
    fn addresses_are_program_scoped() {
        let other_program = Pubkey::new_unique();
        assert_ne!(
            access_pass_address(&crate::ID, 0).0,
            access_pass_address(&other_program, 0).0
        );
    }

    #[test]
    fn derived_addresses_are_off_curve() {
        let (config, _) = program_config_address(&crate::ID);
        let (pass, _) = access_pass_address(&crate::ID, 0);
        assert!(!config.is_on_curve());
        assert!(!pass.is_on_curve());
    }
}
