//! Staking
//!
//! Users stake lamports on one option while the prediction is open. Each
//! (user, prediction, option) triple has its own record, so staking twice on
//! the same option accumulates and staking on another option is independent.

use anchor_lang::prelude::*;

use crate::settlement::escrow;
use crate::state::{Config, Prediction, UserOption};

/// Event emitted for every stake
#[event]
pub struct UserPredicted {
    pub pred_key: Pubkey,
    pub pred_total_pool: u64,
    pub pred_participants: u32,
    pub up_key: Pubkey,
    pub user: Pubkey,
    pub option_index: u8,
    pub amount: u64,
}

/// Accounts for staking on an option
#[derive(Accounts)]
#[instruction(option_index: u8)]
pub struct UserPrediction<'info> {
    /// Staker
    #[account(mut)]
    pub user: Signer<'info>,

    /// Protocol configuration
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// Prediction being staked on; holds the escrowed lamports
    #[account(
        mut,
        seeds = [Prediction::SEED, prediction.seed.to_le_bytes().as_ref()],
        bump = prediction.bump,
    )]
    pub prediction: Account<'info, Prediction>,

    /// The user's record for this option
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + UserOption::INIT_SPACE,
        seeds = [
            UserOption::SEED,
            user.key().as_ref(),
            prediction.key().as_ref(),
            &[option_index],
        ],
        bump,
    )]
    pub user_option: Account<'info, UserOption>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> UserPrediction<'info> {
    pub fn predict(
        &mut self,
        option_index: u8,
        amount: u64,
        bumps: &UserPredictionBumps,
    ) -> Result<()> {
        self.config.ensure_active()?;

        let clock = Clock::get()?;
        let pred_key = self.prediction.key();

        self.user_option
            .bind(self.user.key(), pred_key, option_index, bumps.user_option);
        self.prediction
            .record_stake(clock.unix_timestamp, option_index, amount, &mut self.user_option)?;

        escrow::deposit(
            self.system_program.to_account_info(),
            self.user.to_account_info(),
            self.prediction.to_account_info(),
            amount,
        )?;

        emit!(UserPredicted {
            pred_key,
            pred_total_pool: self.prediction.total_pool,
            pred_participants: self.prediction.participants,
            up_key: self.user_option.key(),
            user: self.user.key(),
            option_index,
            amount,
        });

        Ok(())
    }
}
