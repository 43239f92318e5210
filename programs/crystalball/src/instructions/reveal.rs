//! Result Reveal
//!
//! ## Reveal Flow
//!
//! 1. `ended_time` passes and staking closes
//! 2. The creator calls `reveal` before `reveal_deadline`
//! 3. Protocol and creator fees leave the escrow immediately
//! 4. The rest stays in escrow as the reward pool for `claim`
//!
//! A prediction nobody revealed in time can only be withdrawn from.

use anchor_lang::prelude::*;

use crate::settlement::escrow;
use crate::state::{Config, Prediction};

/// Event emitted when the result is revealed
#[event]
pub struct PredictionRevealed {
    pub pred_key: Pubkey,
    pub result_index: u8,
    pub creator_amount: u64,
    pub protocol_amount: u64,
    pub reward_pool: u64,
}

/// Accounts for revealing a result
#[derive(Accounts)]
pub struct Reveal<'info> {
    /// Must be the prediction's creator; receives the creator fee
    #[account(mut)]
    pub creator: Signer<'info>,

    /// Protocol configuration
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// Prediction to reveal
    #[account(
        mut,
        seeds = [Prediction::SEED, prediction.seed.to_le_bytes().as_ref()],
        bump = prediction.bump,
    )]
    pub prediction: Account<'info, Prediction>,

    /// CHECK: compared against `config.fee_receiver` in the handler
    #[account(mut)]
    pub fee_receiver: UncheckedAccount<'info>,
}

impl<'info> Reveal<'info> {
    pub fn reveal(&mut self, result_index: u8) -> Result<()> {
        let clock = Clock::get()?;

        let split = self.prediction.reveal(
            clock.unix_timestamp,
            self.creator.key(),
            result_index,
            &self.config,
            self.fee_receiver.key(),
        )?;

        let escrow_info = self.prediction.to_account_info();
        escrow::pay_out(
            &escrow_info,
            &self.fee_receiver.to_account_info(),
            split.protocol_amount,
        )?;
        escrow::pay_out(
            &escrow_info,
            &self.creator.to_account_info(),
            split.creator_amount,
        )?;

        emit!(PredictionRevealed {
            pred_key: self.prediction.key(),
            result_index,
            creator_amount: split.creator_amount,
            protocol_amount: split.protocol_amount,
            reward_pool: split.reward_pool,
        });

        msg!(
            "Prediction {} revealed: option {}",
            self.prediction.seed,
            result_index
        );

        Ok(())
    }
}
