//! Reward Claim
//!
//! After reveal, each winning stake record can be claimed once for its
//! share of the reward pool:
//!
//! ```text
//! reward = stake * reward_pool / winning_total
//! ```
//!
//! For example, with a 294 reward pool and 300 staked on the winner, a 100
//! stake receives 98 and a 200 stake receives 196.

use anchor_lang::prelude::*;

use crate::settlement::escrow;
use crate::state::{Prediction, UserOption};

/// Event emitted when a winner claims
#[event]
pub struct RewardClaimed {
    pub pred_key: Pubkey,
    pub up_key: Pubkey,
    pub user: Pubkey,
    pub option_index: u8,
    pub principal: u64,
    pub reward: u64,
}

/// Accounts for claiming
#[derive(Accounts)]
#[instruction(option_index: u8)]
pub struct Claim<'info> {
    /// Winner claiming their reward
    #[account(mut)]
    pub user: Signer<'info>,

    /// Revealed prediction
    #[account(
        mut,
        seeds = [Prediction::SEED, prediction.seed.to_le_bytes().as_ref()],
        bump = prediction.bump,
    )]
    pub prediction: Account<'info, Prediction>,

    /// CHECK: address is pinned by the seeds; may be empty when the user never
    /// staked on `option_index`, which the handler reports after the reveal
    /// checks
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

impl<'info> Claim<'info> {
    pub fn claim(&mut self, option_index: u8) -> Result<u64> {
        let record_info = self.user_option.to_account_info();
        let mut record = UserOption::load(&record_info)?;

        let reward = self.prediction.claim(option_index, record.as_mut())?;

        let principal = match &record {
            Some(record) => {
                record.store(&record_info)?;
                record.amount
            }
            None => 0,
        };

        escrow::pay_out(
            &self.prediction.to_account_info(),
            &self.user.to_account_info(),
            reward,
        )?;

        emit!(RewardClaimed {
            pred_key: self.prediction.key(),
            up_key: self.user_option.key(),
            user: self.user.key(),
            option_index,
            principal,
            reward,
        });

        Ok(reward)
    }
}
