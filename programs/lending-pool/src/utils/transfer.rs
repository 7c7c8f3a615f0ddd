use anchor_lang::{
    prelude::*,
    system_program::{transfer, Transfer},
};
use anchor_spl::token_interface::{self, Mint, TransferChecked};
use crate::errors::PoolError;

/// Current cluster time as an unsigned unix timestamp.
pub fn current_timestamp() -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    u64::try_from(now).map_err(|_| error!(PoolError::InvalidTimestamp))
}

/// Ledger amounts are u128; SOL and SPL transfers take u64.
pub fn to_native_amount(amount: u128) -> Result<u64> {
    u64::try_from(amount).map_err(|_| error!(PoolError::MathOverflow))
}

/// Move lamports from a signing wallet into the principal vault.
pub fn pull_lamports<'info>(
    system_program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let ctx = CpiContext::new(system_program, Transfer { from, to: vault });
    transfer(ctx, amount)
}

/// Pay lamports out of the principal vault, keeping it rent-exempt.
pub fn push_lamports<'info>(
    system_program: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    to: AccountInfo<'info>,
    amount: u64,
    vault_seeds: &[&[&[u8]]],
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let rent_exempt = Rent::get()?.minimum_balance(0);
    let required = amount
        .checked_add(rent_exempt)
        .ok_or(PoolError::MathOverflow)?;
    require!(vault.lamports() >= required, PoolError::InsufficientLiquidity);

    let ctx = CpiContext::new_with_signer(system_program, Transfer { from: vault, to }, vault_seeds);
    transfer(ctx, amount)
}

/// Move collateral from a user's token account into the pool vault.
pub fn pull_tokens<'info>(
    token_program: AccountInfo<'info>,
    from: AccountInfo<'info>,
    mint: &InterfaceAccount<'info, Mint>,
    vault: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let accounts = TransferChecked {
        from,
        mint: mint.to_account_info(),
        to: vault,
        authority,
    };
    let ctx = CpiContext::new(token_program, accounts);
    token_interface::transfer_checked(ctx, amount, mint.decimals)
}

/// Release collateral from the pool vault, signed by the pool PDA.
pub fn push_tokens<'info>(
    token_program: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    mint: &InterfaceAccount<'info, Mint>,
    to: AccountInfo<'info>,
    pool_authority: AccountInfo<'info>,
    amount: u64,
    pool_seeds: &[&[&[u8]]],
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let accounts = TransferChecked {
        from: vault,
        mint: mint.to_account_info(),
        to,
        authority: pool_authority,
    };
    let ctx = CpiContext::new_with_signer(token_program, accounts, pool_seeds);
    token_interface::transfer_checked(ctx, amount, mint.decimals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_native_amount() {
        assert_eq!(to_native_amount(1_000).unwrap(), 1_000);
        assert_eq!(to_native_amount(u64::MAX as u128).unwrap(), u64::MAX);
        assert_eq!(
            to_native_amount(u64::MAX as u128 + 1).unwrap_err(),
            PoolError::MathOverflow.into()
        );
    }
}
