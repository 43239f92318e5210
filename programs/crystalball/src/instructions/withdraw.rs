//! Refund of an Unrevealed Prediction
//!
//! When the creator misses the reveal deadline the prediction is void:
//! every stake record can be withdrawn once for exactly what was staked.

use anchor_lang::prelude::*;

use crate::settlement::escrow;
use crate::state::{Prediction, UserOption};

/// Event emitted for every refund
#[event]
pub struct UserWithdrawn {
    pub pred_key: Pubkey,
    pub up_key: Pubkey,
    pub user: Pubkey,
    pub option_index: u8,
    pub amount: u64,
}

/// Accounts for a refund
#[derive(Accounts)]
#[instruction(option_index: u8)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    /// Expired prediction
    #[account(
        mut,
        seeds = [Prediction::SEED, prediction.seed.to_le_bytes().as_ref()],
        bump = prediction.bump,
    )]
    pub prediction: Account<'info, Prediction>,

    /// CHECK: address is pinned by the seeds; loaded in the handler
    #[account(
        mut,
        seeds = [
            UserOption::SEED,
            user.key().as_ref(),
            prediction.key().as_ref(),
            &[option_index],
        ],
        bump,
    )]
    pub user_option: UncheckedAccount<'info>,
}

impl<'info> Withdraw<'info> {
    pub fn withdraw(&mut self, option_index: u8) -> Result<u64> {
        let clock = Clock::get()?;
        let record_info = self.user_option.to_account_info();
        let mut record = UserOption::load(&record_info)?;

        let amount = self
            .prediction
            .withdraw(clock.unix_timestamp, record.as_mut())?;
        if let Some(record) = &record {
            record.store(&record_info)?;
        }

        escrow::pay_out(
            &self.prediction.to_account_info(),
            &self.user.to_account_info(),
            amount,
        )?;

        emit!(UserWithdrawn {
            pred_key: self.prediction.key(),
            up_key: self.user_option.key(),
            user: self.user.key(),
            option_index,
            amount,
        });

        msg!("Refunded {} lamports", amount);

        Ok(amount)
    }
}
