use anchor_lang::prelude::*;
use crate::constants::SEED_LEDGER;
use crate::state::WagerLedger;

#[derive(Accounts)]
pub struct OpenLedger<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = WagerLedger::space_for(0),
        seeds = [SEED_LEDGER, owner.key().as_ref()],
        bump,
    )]
    pub ledger: Account<'info, WagerLedger>,

    pub system_program: Program<'info, System>,
}

pub fn handle_open_ledger(ctx: Context<OpenLedger>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts
        .ledger
        .set_inner(WagerLedger::new(owner, ctx.bumps.ledger));

    msg!("Ledger opened: owner={}", owner);
    Ok(())
}
