use anchor_lang::prelude::*;

use crate::{
    constants::{RAFFLE_SEED, TREASURY_SEED},
    state::{Raffle, Treasury},
    utils::verify_deposit,
};

/// Event emitted when a player enters the raffle
#[event]
pub struct RaffleEnter {
    /// The entrant's address
    pub player: Pubkey,
    /// Lamports paid for this entry
    pub amount: u64,
    /// Position of the entry in the current round
    pub player_index: u64,
}

/// Instruction to enter the current round of the raffle
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `amount` - Lamports to pay; must cover the entrance fee
///
/// # Security Considerations
/// 1. Payment is checked against the entrance fee before the raffle state
/// 2. Entries are refused while a draw is being calculated
/// 3. The treasury must be the one recorded in the raffle
///
/// # Implementation Notes
/// - The full `amount` goes to the treasury, overpayment included
/// - The same player may enter several times; each entry is a separate slot
/// - The treasury balance is verified after the transfer
pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    ctx.accounts.raffle.record_entry(player, amount)?;

    let pre_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();

    anchor_lang::solana_program::program::invoke(
        &anchor_lang::solana_program::system_instruction::transfer(
            &player,
            &ctx.accounts.treasury.key(),
            amount,
        ),
        &[
            ctx.accounts.player.to_account_info(),
            ctx.accounts.treasury.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
    )?;

    let post_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();
    verify_deposit(pre_transfer_balance, post_transfer_balance, amount)?;

    let player_index = (ctx.accounts.raffle.players.len() - 1) as u64;
    msg!("Player {} entered at index {}", player, player_index);

    emit!(RaffleEnter {
        player,
        amount,
        player_index,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
        has_one = treasury,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        mut,
        seeds = [
            TREASURY_SEED,
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}
