use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::SEED_VAULT;
use crate::errors::WeightWagersError;
use crate::state::RewardMultiplier;

/// round(stake * numerator / denominator), halves rounded up
pub fn settlement_amount(stake: u64, multiplier: &RewardMultiplier) -> Result<u64> {
    require!(
        multiplier.denominator > 0,
        WeightWagersError::InvalidMultiplier
    );
    let denominator = multiplier.denominator as u128;
    let doubled = (stake as u128)
        .checked_mul(multiplier.numerator as u128)
        .and_then(|v| v.checked_mul(2))
        .and_then(|v| v.checked_add(denominator))
        .ok_or(WeightWagersError::ArithmeticOverflow)?;
    let rounded = doubled / (denominator * 2);
    u64::try_from(rounded).map_err(|_| error!(WeightWagersError::ArithmeticOverflow))
}

/// Vault lamports that are neither rent nor owed back to live wagers
pub fn pool_balance(vault_lamports: u64, rent_floor: u64, total_staked: u64) -> u64 {
    vault_lamports
        .saturating_sub(rent_floor)
        .saturating_sub(total_staked)
}

/// The vault must still hold every other live stake and its rent floor after
/// paying out. A shortfall fails the whole resolution; payouts are never cut.
pub fn ensure_payout_covered(
    vault_lamports: u64,
    rent_floor: u64,
    other_stakes: u64,
    payout: u64,
) -> Result<()> {
    let reserved = rent_floor
        .checked_add(other_stakes)
        .and_then(|v| v.checked_add(payout))
        .ok_or(WeightWagersError::ArithmeticOverflow)?;
    require!(
        vault_lamports >= reserved,
        WeightWagersError::InsufficientPoolBalance
    );
    Ok(())
}

/// Moves lamports out of the vault PDA
pub fn pay_from_vault<'info>(
    vault: &AccountInfo<'info>,
    recipient: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    vault_bump: u8,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let bump_slice = &[vault_bump];
    let vault_signer_seeds: &[&[u8]] = &[SEED_VAULT, bump_slice];

    system_program::transfer(
        CpiContext::new_with_signer(
            system_program.clone(),
            system_program::Transfer {
                from: vault.clone(),
                to: recipient.clone(),
            },
            &[vault_signer_seeds],
        ),
        amount,
    )
}
