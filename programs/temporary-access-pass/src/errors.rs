use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Invalid expiry time - must be in the future")]
    InvalidExpiryTime,

    #[msg("Pass already revoked")]
    PassAlreadyRevoked,

    #[msg("Unauthorized access")]
    Unauthorized,

    #[msg("Pass is not bound to the presented wallet")]
    WrongTourist,

    #[msg("Pass was not issued for the presented zone")]
    ZoneMismatch,

    #[msg("Zone ID must not be empty")]
    EmptyZoneId,

    #[msg("Zone ID too long")]
    ZoneIdTooLong,

    #[msg("Metadata URI too long")]
    MetadataUriTooLong,

    #[msg("Credential counter overflow")]
    CounterOverflow,
}

/// Coarse classification of program failures.
///
/// Callers branch on this rather than on individual codes: a `Constraint`
/// failure on verify means the wrong pass was presented, while a plain
/// `false` result means the right pass is no longer usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required record missing or already present.
    ///
    /// Only counter overflow is raised by this program. A second
    /// `initialize` fails in the system program (`AccountAlreadyInUse`) and a
    /// missing config or pass fails in Anchor's account loader
    /// (`AccountNotInitialized`), so neither arrives as an `ErrorCode`.
    State,
    /// Signer, wallet or zone mismatch
    Constraint,
    /// Expiry not in the future at mint
    Temporal,
    /// Transition not allowed from the current pass state
    Lifecycle,
    /// Malformed instruction arguments
    InvalidInput,
}

impl ErrorCode {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::CounterOverflow => ErrorKind::State,
            ErrorCode::Unauthorized
            | ErrorCode::WrongTourist
            | ErrorCode::ZoneMismatch => ErrorKind::Constraint,
            ErrorCode::InvalidExpiryTime => ErrorKind::Temporal,
            ErrorCode::PassAlreadyRevoked => ErrorKind::Lifecycle,
            ErrorCode::EmptyZoneId
            | ErrorCode::ZoneIdTooLong
            | ErrorCode::MetadataUriTooLong => ErrorKind::InvalidInput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_binding_failures_are_constraint_violations() {
        assert_eq!(ErrorCode::WrongTourist.kind(), ErrorKind::Constraint);
        assert_eq!(ErrorCode::ZoneMismatch.kind(), ErrorKind::Constraint);
        assert_eq!(ErrorCode::Unauthorized.kind(), ErrorKind::Constraint);
    }

    #[test]
    fn each_failure_class_is_distinct() {
        assert_eq!(ErrorCode::InvalidExpiryTime.kind(), ErrorKind::Temporal);
        assert_eq!(ErrorCode::PassAlreadyRevoked.kind(), ErrorKind::Lifecycle);
        assert_eq!(ErrorCode::CounterOverflow.kind(), ErrorKind::State);
        assert_eq!(ErrorCode::ZoneIdTooLong.kind(), ErrorKind::InvalidInput);
    }
}
