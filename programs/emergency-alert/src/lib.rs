use anchor_lang::prelude::*;

declare_id!("8njHh9PtD6xVJjtYxRQTzQb89FKdCEWvjEKJHaMZESv3");

pub const MAX_LOCATION_LEN: usize = 64;
pub const MAX_DESCRIPTION_LEN: usize = 256;
pub const MAX_CONTACT_TYPE_LEN: usize = 32;

#[program]
pub mod emergency_alert {
    use super::*;

    /// Initialize the alert registry with the signer as authority
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        let registry = &mut ctx.accounts.emergency_alert;
        registry.authority = ctx.accounts.authority.key();
        registry.alert_counter = 0;
        registry.bump = ctx.bumps.emergency_alert;
        msg!("Emergency alert registry initialized with authority: {}", registry.authority);
        Ok(())
    }

    /// Raise an alert on behalf of the signing tourist
    pub fn trigger_alert(
        ctx: Context<TriggerAlert>,
        alert_type: u8,
        location: String,
        description: String,
    ) -> Result<()> {
        let kind = AlertType::from_code(alert_type)?;
        Alert::validate_report(&location, &description)?;

        let timestamp = Clock::get()?.unix_timestamp;
        let tourist = ctx.accounts.tourist.key();
        let alert_id = ctx.accounts.emergency_alert.claim_alert_id()?;

        let alert = &mut ctx.accounts.alert;
        alert.alert_id = alert_id;
        alert.tourist = tourist;
        alert.alert_type = alert_type;
        alert.location = location.clone();
        alert.description = description.clone();
        alert.timestamp = timestamp;
        alert.is_active = true;
        alert.bump = ctx.bumps.alert;

        emit!(AlertTriggered {
            alert_id,
            tourist,
            alert_type,
            location,
            description,
            timestamp,
        });

        msg!("Emergency alert triggered: ID {} ({:?})", alert_id, kind);
        Ok(())
    }

    /// Resolve an active alert (raising tourist or authority)
    pub fn resolve_alert(ctx: Context<ResolveAlert>) -> Result<()> {
        let authority = ctx.accounts.emergency_alert.authority;
        let caller = ctx.accounts.tourist.key();
        let alert = &mut ctx.accounts.alert;

        alert.resolve(&caller, &authority)?;

        emit!(AlertResolved {
            alert_id: alert.alert_id,
            tourist: caller,
            resolved_at: Clock::get()?.unix_timestamp,
        });

        msg!("Alert {} resolved", alert.alert_id);
        Ok(())
    }

    /// Register a responder address for a contact type (authority only)
    pub fn add_emergency_contact(
        ctx: Context<AddEmergencyContact>,
        contact_type: String,
    ) -> Result<()> {
        EmergencyContact::validate_contact_type(&contact_type)?;

        let contact = &mut ctx.accounts.emergency_contact;
        contact.contact_type = contact_type.clone();
        contact.contact_address = ctx.accounts.contact_address.key();
        contact.authority = ctx.accounts.authority.key();
        contact.bump = ctx.bumps.emergency_contact;

        emit!(EmergencyContactAdded {
            contact_type,
            contact_address: contact.contact_address,
        });

        msg!("Emergency contact added: {}", contact.contact_address);
        Ok(())
    }
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + EmergencyAlert::INIT_SPACE,
        seeds = [EmergencyAlert::SEED_PREFIX],
        bump
    )]
    pub emergency_alert: Account<'info, EmergencyAlert>,
    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct TriggerAlert<'info> {
    #[account(
        mut,
        seeds = [EmergencyAlert::SEED_PREFIX],
        bump = emergency_alert.bump
    )]
    pub emergency_alert: Account<'info, EmergencyAlert>,
    #[account(
        init,
        payer = tourist,
        space = 8 + Alert::INIT_SPACE,
        seeds = [Alert::SEED_PREFIX, emergency_alert.alert_counter.to_le_bytes().as_ref()],
        bump
    )]
    pub alert: Account<'info, Alert>,
    #[account(mut)]
    pub tourist: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct ResolveAlert<'info> {
    #[account(
        seeds = [EmergencyAlert::SEED_PREFIX],
        bump = emergency_alert.bump
    )]
    pub emergency_alert: Account<'info, EmergencyAlert>,
    #[account(
        mut,
        seeds = [Alert::SEED_PREFIX, alert.alert_id.to_le_bytes().as_ref()],
        bump = alert.bump
    )]
    pub alert: Account<'info, Alert>,
    pub tourist: Signer<'info>,
}

#[derive(Accounts)]
#[instruction(contact_type: String)]
pub struct AddEmergencyContact<'info> {
    #[account(
        seeds = [EmergencyAlert::SEED_PREFIX],
        bump = emergency_alert.bump,
        has_one = authority @ ErrorCode::Unauthorized
    )]
    pub emergency_alert: Account<'info, EmergencyAlert>,
    #[account(
        init,
        payer = authority,
        space = 8 + EmergencyContact::INIT_SPACE,
        seeds = [EmergencyContact::SEED_PREFIX, contact_type.as_bytes()],
        bump
    )]
    pub emergency_contact: Account<'info, EmergencyContact>,
    /// CHECK: Responder address being registered; never read or written
    pub contact_address: UncheckedAccount<'info>,
    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}

#[account]
#[derive(InitSpace)]
pub struct EmergencyAlert {
    pub authority: Pubkey,
    pub alert_counter: u64,
    pub bump: u8,
}

impl EmergencyAlert {
    pub const SEED_PREFIX: &'static [u8] = b"emergency_alert";

    pub fn claim_alert_id(&mut self) -> Result<u64> {
        let alert_id = self.alert_counter;
        self.alert_counter = alert_id
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(alert_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertType {
    Panic,
    Geofence,
    Anomaly,
}

impl AlertType {
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(AlertType::Panic),
            1 => Ok(AlertType::Geofence),
            2 => Ok(AlertType::Anomaly),
            _ => err!(ErrorCode::InvalidAlertType),
        }
    }
}

#[account]
#[derive(InitSpace)]
pub struct Alert {
    pub alert_id: u64,
    pub tourist: Pubkey,
    pub alert_type: u8, // 0: PANIC, 1: GEOFENCE, 2: ANOMALY
    #[max_len(MAX_LOCATION_LEN)]
    pub location: String,
    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,
    pub timestamp: i64,
    pub is_active: bool,
    pub bump: u8,
}

impl Alert {
    pub const SEED_PREFIX: &'static [u8] = b"alert";

    pub fn validate_report(location: &str, description: &str) -> Result<()> {
        require!(location.len() <= MAX_LOCATION_LEN, ErrorCode::LocationTooLong);
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            ErrorCode::DescriptionTooLong
        );
        Ok(())
    }

    pub fn resolve(&mut self, caller: &Pubkey, authority: &Pubkey) -> Result<()> {
        require!(self.is_active, ErrorCode::AlertAlreadyResolved);
        require!(
            self.tourist == *caller || *authority == *caller,
            ErrorCode::Unauthorized
        );
        self.is_active = false;
        Ok(())
    }
}

#[account]
#[derive(InitSpace)]
pub struct EmergencyContact {
    #[max_len(MAX_CONTACT_TYPE_LEN)]
    pub contact_type: String,
    pub contact_address: Pubkey,
    pub authority: Pubkey,
    pub bump: u8,
}

impl EmergencyContact {
    pub const SEED_PREFIX: &'static [u8] = b"emergency_contact";

    pub fn validate_contact_type(contact_type: &str) -> Result<()> {
        require!(
            !contact_type.is_empty() && contact_type.len() <= MAX_CONTACT_TYPE_LEN,
            ErrorCode::InvalidContactType
        );
        Ok(())
    }
}

#[event]
pub struct AlertTriggered {
    pub alert_id: u64,
    pub tourist: Pubkey,
    pub alert_type: u8,
    pub location: String,
    pub description: String,
    pub timestamp: i64,
}

#[event]
pub struct AlertResolved {
    pub alert_id: u64,
    pub tourist: Pubkey,
    pub resolved_at: i64,
}

#[event]
pub struct EmergencyContactAdded {
    pub contact_type: String,
    pub contact_address: Pubkey,
}

#[error_code]
pub enum ErrorCode {
    #[msg("Invalid alert type")]
    InvalidAlertType,
    #[msg("Alert already resolved")]
    AlertAlreadyResolved,
    #[msg("Unauthorized: only the reporting tourist or the authority may act")]
    Unauthorized,
    #[msg("Location too long")]
    LocationTooLong,
    #[msg("Description too long")]
    DescriptionTooLong,
    #[msg("Contact type must be 1-32 bytes")]
    InvalidContactType,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
