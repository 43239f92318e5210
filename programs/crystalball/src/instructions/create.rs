//! Permissionless Prediction Creation
//!
//! Anyone can open a prediction by choosing a seed, a set of options and two
//! deadlines. The creator pays the account rent and becomes the only account
//! allowed to reveal the result. No stake moves at creation.

use anchor_lang::prelude::*;

use crate::state::{Config, OptionData, Prediction, PredictionParams};

/// Event emitted when a new prediction is created
#[event]
pub struct PredictionCreated {
    pub pred_key: Pubkey,
    pub creator: Pubkey,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub created_time: i64,
    pub ended_time: i64,
    pub reveal_deadline: i64,
    pub creator_fee: u8,
    pub options: Vec<OptionData>,
}

/// Accounts for creating a new prediction
#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct CreatePrediction<'info> {
    /// Prediction creator (pays for the account)
    #[account(mut)]
    pub creator: Signer<'info>,

    /// Global protocol configuration
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// The new prediction account; an already used seed fails here
    #[account(
        init,
        payer = creator,
        space = 8 + Prediction::INIT_SPACE,
        seeds = [Prediction::SEED, seed.to_le_bytes().as_ref()],
        bump,
    )]
    pub prediction: Account<'info, Prediction>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> CreatePrediction<'info> {
    pub fn create(
        &mut self,
        seed: u64,
        params: PredictionParams,
        bumps: &CreatePredictionBumps,
    ) -> Result<()> {
        self.config.ensure_active()?;

        let clock = Clock::get()?;
        let prediction = Prediction::new(
            seed,
            bumps.prediction,
            self.creator.key(),
            params,
            clock.unix_timestamp,
        )?;

        emit!(PredictionCreated {
            pred_key: self.prediction.key(),
            creator: prediction.creator,
            title: prediction.title.clone(),
            description: prediction.description.clone(),
            image_url: prediction.image_url.clone(),
            created_time: prediction.created_time,
            ended_time: prediction.ended_time,
            reveal_deadline: prediction.reveal_deadline,
            creator_fee: prediction.creator_fee,
            options: prediction.options.clone(),
        });

        msg!(
            "Prediction {} created with {} options, closes at {}",
            seed,
            prediction.options.len(),
            prediction.ended_time
        );

        self.prediction.set_inner(prediction);

        Ok(())
    }
}
