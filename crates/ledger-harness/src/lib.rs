//! In-process ledger for driving Anchor programs through their real
//! entrypoint in `cargo test`.
//!
//! Instructions run against cloned account state and are committed only on
//! success, so a failed instruction leaves the ledger untouched. The clock and
//! rent sysvars, return data and system program CPIs are served by syscall
//! stubs installed on first use.

mod system;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::sync::Once;

use anchor_lang::solana_program::{
    account_info::AccountInfo,
    clock::Clock,
    entrypoint::{ProgramResult, SUCCESS},
    instruction::Instruction,
    program_error::ProgramError,
    program_stubs::{self, SyscallStubs},
    pubkey::Pubkey,
    rent::Rent,
    system_program,
};
use anchor_lang::AccountDeserialize;

// solana-program 1.18 does not export `native_loader`; it lives in solana-sdk.
mod native_loader {
    use anchor_lang::solana_program::pubkey::Pubkey;

    pub const ID: Pubkey = anchor_lang::pubkey!("NativeLoader1111111111111111111111111111111");
}

/// Signature of the `entry` function generated by `#[program]`.
pub type Entrypoint = for<'info> fn(&Pubkey, &'info [AccountInfo<'info>], &[u8]) -> ProgramResult;

/// Lamports given to wallets created with [`Ledger::funded_wallet`].
pub const DEFAULT_WALLET_LAMPORTS: u64 = 10_000_000_000;

thread_local! {
    static UNIX_TIMESTAMP: Cell<i64> = Cell::new(0);
    static CALLER: Cell<Pubkey> = Cell::new(Pubkey::default());
    static RETURN_DATA: RefCell<Option<(Pubkey, Vec<u8>)>> = RefCell::new(None);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerAccount {
    pub lamports: u64,
    pub data: Vec<u8>,
    pub owner: Pubkey,
    pub executable: bool,
}

impl LedgerAccount {
    /// An address nothing has been written to yet.
    pub fn empty() -> Self {
        Self {
            lamports: 0,
            data: Vec::new(),
            owner: system_program::ID,
            executable: false,
        }
    }
}

pub struct Ledger {
    accounts: BTreeMap<Pubkey, LedgerAccount>,
    unix_timestamp: i64,
}

impl Ledger {
    pub fn new(unix_timestamp: i64) -> Self {
        install_stubs();

        let mut accounts = BTreeMap::new();
        accounts.insert(
            system_program::ID,
            LedgerAccount {
                lamports: 1,
                data: Vec::new(),
                owner: native_loader::ID,
                executable: true,
            },
        );
        Self {
            accounts,
            unix_timestamp,
        }
    }

    pub fn now(&self) -> i64 {
        self.unix_timestamp
    }

    pub fn set_clock(&mut self, unix_timestamp: i64) {
        self.unix_timestamp = unix_timestamp;
    }

    pub fn fund(&mut self, key: Pubkey, lamports: u64) {
        let account = self.accounts.entry(key).or_insert_with(LedgerAccount::empty);
        account.lamports += lamports;
    }

    pub fn funded_wallet(&mut self) -> Pubkey {
        let key = Pubkey::new_unique();
        self.fund(key, DEFAULT_WALLET_LAMPORTS);
        key
    }

    pub fn account(&self, key: &Pubkey) -> Option<&LedgerAccount> {
        self.accounts.get(key)
    }

    /// True once an account at `key` holds lamports.
    pub fn exists(&self, key: &Pubkey) -> bool {
        self.accounts.get(key).is_some_and(|a| a.lamports > 0)
    }

    /// Deserialize a program account, checking its discriminator.
    pub fn read<T: AccountDeserialize>(&self, key: &Pubkey) -> T {
        let account = self
            .accounts
            .get(key)
            .unwrap_or_else(|| panic!("no account at {key}"));
        T::try_deserialize(&mut account.data.as_slice())
            .unwrap_or_else(|e| panic!("account at {key} does not deserialize: {e}"))
    }

    /// Run one instruction atomically and return the program's return data.
    pub fn process(
        &mut self,
        program_id: &Pubkey,
        entry: Entrypoint,
        instruction: &Instruction,
    ) -> Result<Option<Vec<u8>>, ProgramError> {
        UNIX_TIMESTAMP.with(|t| t.set(self.unix_timestamp));
        CALLER.with(|c| c.set(*program_id));
        RETURN_DATA.with(|r| r.borrow_mut().take());

        let mut keys: Vec<Pubkey> = Vec::new();
        for meta in &instruction.accounts {
            if !keys.contains(&meta.pubkey) {
                keys.push(meta.pubkey);
            }
        }
        let flags: Vec<(bool, bool)> = keys
            .iter()
            .map(|key| {
                let metas = instruction.accounts.iter().filter(|m| m.pubkey == *key);
                let (signer, writable) = metas.fold((false, false), |(s, w), m| {
                    (s || m.is_signer, w || m.is_writable)
                });
                (signer, writable)
            })
            .collect();
        let mut state: Vec<LedgerAccount> = keys
            .iter()
            .map(|key| self.accounts.get(key).cloned().unwrap_or_else(LedgerAccount::empty))
            .collect();
        let owners: Vec<Pubkey> = state.iter().map(|a| a.owner).collect();

        let (result, committed) = {
            let infos: Vec<AccountInfo> = keys
                .iter()
                .zip(state.iter_mut())
                .zip(owners.iter())
                .zip(flags.iter())
                .map(|(((key, account), owner), &(is_signer, is_writable))| {
                    let executable = account.executable;
                    AccountInfo::new(
                        key,
                        is_signer,
                        is_writable,
                        &mut account.lamports,
                        account.data.as_mut_slice(),
                        owner,
                        executable,
                        0,
                    )
                })
                .collect();
            let ordered: Vec<AccountInfo> = instruction
                .accounts
                .iter()
                .map(|meta| {
                    let index = keys.iter().position(|k| *k == meta.pubkey).unwrap_or_default();
                    infos[index].clone()
                })
                .collect();

            let result = entry(program_id, &ordered, &instruction.data);

            let committed: Vec<LedgerAccount> = infos
                .iter()
                .map(|info| LedgerAccount {
                    lamports: info.lamports(),
                    data: info.data.borrow().to_vec(),
                    owner: *info.owner,
                    executable: info.executable,
                })
                .collect();
            (result, committed)
        };

        result?;
        for (key, account) in keys.into_iter().zip(committed) {
            self.accounts.insert(key, account);
        }
        Ok(RETURN_DATA.with(|r| r.borrow_mut().take()).map(|(_, data)| data))
    }
}

fn install_stubs() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        program_stubs::set_syscall_stubs(Box::new(LedgerStubs));
    });
}

struct LedgerStubs;

impl SyscallStubs for LedgerStubs {
    fn sol_get_clock_sysvar(&self, var_addr: *mut u8) -> u64 {
        let clock = Clock {
            unix_timestamp: UNIX_TIMESTAMP.with(|t| t.get()),
            ..Clock::default()
        };
        unsafe { *(var_addr as *mut Clock) = clock };
        SUCCESS
    }

    fn sol_get_rent_sysvar(&self, var_addr: *mut u8) -> u64 {
        unsafe { *(var_addr as *mut Rent) = Rent::default() };
        SUCCESS
    }

    fn sol_set_return_data(&self, data: &[u8]) {
        let caller = CALLER.with(|c| c.get());
        RETURN_DATA.with(|r| *r.borrow_mut() = Some((caller, data.to_vec())));
    }

    fn sol_get_return_data(&self) -> Option<(Pubkey, Vec<u8>)> {
        RETURN_DATA.with(|r| r.borrow().clone())
    }

    fn sol_invoke_signed(
        &self,
        instruction: &Instruction,
        account_infos: &[AccountInfo],
        signers_seeds: &[&[&[u8]]],
    ) -> ProgramResult {
        let caller = CALLER.with(|c| c.get());
        system::process(&caller, instruction, account_infos, signers_seeds)
    }
}
