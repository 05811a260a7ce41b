use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::SEED_REQUEST;
use crate::state::OracleRequest;

/// How a request address gets turned into a program account
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RequestFunding {
    /// Empty address: a single `create_account`
    Create { lamports: u64 },
    /// Address already holds lamports, so `create_account` would fail:
    /// top up to rent exemption, then allocate and assign
    Adopt { top_up: u64 },
}

pub fn request_funding(current_lamports: u64, rent_exempt: u64) -> RequestFunding {
    if current_lamports == 0 {
        RequestFunding::Create {
            lamports: rent_exempt,
        }
    } else {
        RequestFunding::Adopt {
            top_up: rent_exempt.saturating_sub(current_lamports),
        }
    }
}

/// Creates the request PDA from an account the client passed in and writes
/// `request` into it. Used where a request is only opened conditionally
/// (verification), so the account cannot be an `init` constraint. The
/// address is checked by the caller.
pub fn open_request<'info>(
    payer: &AccountInfo<'info>,
    request_info: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    request: &OracleRequest,
) -> Result<()> {
    let index_bytes = request.index.to_le_bytes();
    let bump_slice = &[request.bump];
    let request_signer_seeds: &[&[u8]] = &[
        SEED_REQUEST,
        request.ledger.as_ref(),
        index_bytes.as_ref(),
        bump_slice,
    ];
    let space = OracleRequest::MAX_SIZE;
    let rent_exempt = Rent::get()?.minimum_balance(space);

    match request_funding(request_info.lamports(), rent_exempt) {
        RequestFunding::Create { lamports } => {
            system_program::create_account(
                CpiContext::new_with_signer(
                    system_program.clone(),
                    system_program::CreateAccount {
                        from: payer.clone(),
                        to: request_info.clone(),
                    },
                    &[request_signer_seeds],
                ),
                lamports,
                space as u64,
                &crate::ID,
            )?;
        }
        RequestFunding::Adopt { top_up } => {
            if top_up > 0 {
                system_program::transfer(
                    CpiContext::new(
                        system_program.clone(),
                        system_program::Transfer {
                            from: payer.clone(),
                            to: request_info.clone(),
                        },
                    ),
                    top_up,
                )?;
            }
            system_program::allocate(
                CpiContext::new_with_signer(
                    system_program.clone(),
                    system_program::Allocate {
                        account_to_allocate: request_info.clone(),
                    },
                    &[request_signer_seeds],
                ),
                space as u64,
            )?;
            system_program::assign(
                CpiContext::new_with_signer(
                    system_program.clone(),
                    system_program::Assign {
                        account_to_assign: request_info.clone(),
                    },
                    &[request_signer_seeds],
                ),
                &crate::ID,
            )?;
        }
    }

    let mut data = request_info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    request.try_serialize(&mut writer)
}
