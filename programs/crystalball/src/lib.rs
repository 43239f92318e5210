//! # Crystalball: Multi-Option Prediction Markets
//!
//! Creators open predictions with up to ten options, users stake SOL on the
//! option they believe in, and the creator reveals the winner once staking
//! has closed.
//!
//! ## How it works
//! - Every prediction account is its own escrow.
//! - On reveal, the protocol fee and the creator fee are paid out and the
//!   rest is shared among the winners in proportion to their stake.
//! - If the creator misses the reveal deadline, every stake can be withdrawn
//!   in full.
//!

use anchor_lang::prelude::*;

pub mod errors;
pub mod instructions;
pub mod settlement;
pub mod state;

pub use instructions::*;
pub use state::{OptionData, PredictionParams};

declare_id!("FfGmPDwyMvLU66asNGZ5GWYn9pAKhAA8iHYwhHdGdoph");

/// Main Crystalball program
#[program]
pub mod crystalball {
    use super::*;

    /// Create the global config on first call, or update it (admin only)
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        protocol_fee: u8,
        fee_receiver: Pubkey,
        is_paused: bool,
    ) -> Result<()> {
        ctx.accounts
            .update_config(protocol_fee, fee_receiver, is_paused, &ctx.bumps)
    }

    /// Hand the admin role to another account
    pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
        ctx.accounts.transfer_admin(new_admin)
    }

    /// Open a new prediction at the address derived from `seed`
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        ctx: Context<CreatePrediction>,
        seed: u64,
        title: String,
        description: String,
        image_url: String,
        ended_time: i64,
        reveal_deadline: i64,
        creator_fee: u8,
        options: Vec<OptionData>,
    ) -> Result<()> {
        let params = PredictionParams {
            title,
            description,
            image_url,
            ended_time,
            reveal_deadline,
            creator_fee,
            options,
        };
        ctx.accounts.create(seed, params, &ctx.bumps)
    }

    /// Stake lamports on one option
    pub fn predict(ctx: Context<UserPrediction>, option_index: u8, amount: u64) -> Result<()> {
        ctx.accounts.predict(option_index, amount, &ctx.bumps)
    }

    /// Reveal the winning option (creator only)
    pub fn reveal(ctx: Context<Reveal>, result_index: u8) -> Result<()> {
        ctx.accounts.reveal(result_index)
    }

    /// Claim a winning share
    pub fn claim(ctx: Context<Claim>, option_index: u8) -> Result<u64> {
        ctx.accounts.claim(option_index)
    }

    /// Recover a stake after a missed reveal deadline
    pub fn withdraw(ctx: Context<Withdraw>, option_index: u8) -> Result<u64> {
        ctx.accounts.withdraw(option_index)
    }
}
