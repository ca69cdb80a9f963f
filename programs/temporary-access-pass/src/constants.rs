/// PDA seed for the singleton program configuration.
pub const PROGRAM_CONFIG_SEED: &[u8] = b"program_config";

/// PDA seed prefix for access pass records. The credential id (u64, little
/// endian) follows it.
pub const ACCESS_PASS_SEED: &[u8] = b"access_nft";

/// Maximum zone identifier length in bytes
pub const MAX_ZONE_ID_LEN: usize = 32;

/// Maximum metadata URI length in bytes (IPFS / Arweave)
pub const MAX_METADATA_URI_LEN: usize = 200;
