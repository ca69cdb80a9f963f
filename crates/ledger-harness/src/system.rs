//! The subset of the system program that Anchor's `init` constraint invokes.

use anchor_lang::solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    instruction::Instruction,
    program_error::ProgramError,
    pubkey::Pubkey,
    system_instruction::{SystemError, SystemInstruction},
    system_program,
};

pub(crate) fn process(
    caller: &Pubkey,
    instruction: &Instruction,
    account_infos: &[AccountInfo],
    signers_seeds: &[&[&[u8]]],
) -> ProgramResult {
    if instruction.program_id != system_program::ID {
        return Err(ProgramError::IncorrectProgramId);
    }
    let system_instruction: SystemInstruction = bincode::deserialize(&instruction.data)
        .map_err(|_| ProgramError::InvalidInstructionData)?;
    let signed = |info: &AccountInfo| {
        info.is_signer
            || signers_seeds.iter().any(|seeds| {
                Pubkey::create_program_address(seeds, caller).is_ok_and(|pda| pda == *info.key)
            })
    };

    match system_instruction {
        SystemInstruction::CreateAccount {
            lamports,
            space,
            owner,
        } => {
            let from = account(instruction, account_infos, 0)?;
            let to = account(instruction, account_infos, 1)?;
            if !signed(from) || !signed(to) {
                return Err(ProgramError::MissingRequiredSignature);
            }
            if to.lamports() > 0 || !is_unallocated(to) {
                return Err(system_error(SystemError::AccountAlreadyInUse));
            }
            move_lamports(from, to, lamports)?;
            allocate(to, space);
            to.assign(&owner);
            Ok(())
        }
        SystemInstruction::Transfer { lamports } => {
            let from = account(instruction, account_infos, 0)?;
            let to = account(instruction, account_infos, 1)?;
            if !signed(from) {
                return Err(ProgramError::MissingRequiredSignature);
            }
            move_lamports(from, to, lamports)
        }
        SystemInstruction::Allocate { space } => {
            let target = account(instruction, account_infos, 0)?;
            if !signed(target) {
                return Err(ProgramError::MissingRequiredSignature);
            }
            if !is_unallocated(target) {
                return Err(system_error(SystemError::AccountAlreadyInUse));
            }
            allocate(target, space);
            Ok(())
        }
        SystemInstruction::Assign { owner } => {
            let target = account(instruction, account_infos, 0)?;
            if !signed(target) {
                return Err(ProgramError::MissingRequiredSignature);
            }
            target.assign(&owner);
            Ok(())
        }
        _ => Err(ProgramError::InvalidInstructionData),
    }
}

fn account<'a, 'info>(
    instruction: &Instruction,
    account_infos: &'a [AccountInfo<'info>],
    index: usize,
) -> Result<&'a AccountInfo<'info>, ProgramError> {
    let key = instruction
        .accounts
        .get(index)
        .ok_or(ProgramError::NotEnoughAccountKeys)?
        .pubkey;
    account_infos
        .iter()
        .find(|info| *info.key == key)
        .ok_or(ProgramError::NotEnoughAccountKeys)
}

fn is_unallocated(info: &AccountInfo) -> bool {
    info.data_is_empty() && *info.owner == system_program::ID
}

fn move_lamports(from: &AccountInfo, to: &AccountInfo, lamports: u64) -> ProgramResult {
    let remaining = from
        .lamports()
        .checked_sub(lamports)
        .ok_or_else(|| system_error(SystemError::ResultWithNegativeLamports))?;
    **from.try_borrow_mut_lamports()? = remaining;
    **to.try_borrow_mut_lamports()? += lamports;
    Ok(())
}

// The runtime grows account data in place; here the slice is swapped for a
// fresh zeroed buffer that outlives the instruction.
fn allocate(info: &AccountInfo, space: u64) {
    let buffer: &'static mut [u8] = Box::leak(vec![0u8; space as usize].into_boxed_slice());
    *info.data.borrow_mut() = buffer;
}

fn system_error(error: SystemError) -> ProgramError {
    ProgramError::Custom(error as u32)
}
