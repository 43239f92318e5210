//! Prediction State
//!
//! Each prediction is an independent escrow: the account holds every staked
//! lamport until it is paid out as fees, rewards or refunds.
//!
//! ## Lifecycle
//!
//! ```text
//!   Open ──(ended_time)──▶ Closed ──reveal──▶ Revealed ──claim──▶ ...
//!                            │
//!                            └──(reveal_deadline)──▶ Expired ──withdraw──▶ ...
//! ```
//!
//! The status is derived from the clock and `result_index`; it is never
//! stored.

use anchor_lang::prelude::*;

use crate::errors::PredictionError;
use crate::settlement::{self, FeeSplit};
use crate::state::{Config, UserOption};

/// Prediction market account
///
/// Seeds: ["prediction", seed.to_le_bytes()]
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Prediction {
    /// Creator-chosen seed the address is derived from
    pub seed: u64,

    /// Sole authority allowed to reveal the result
    pub creator: Pubkey,

    #[max_len(50)]
    pub title: String,

    #[max_len(500)]
    pub description: String,

    #[max_len(66)]
    pub image_url: String,

    pub created_time: i64,

    /// Staking closes at this instant
    pub ended_time: i64,

    /// Reveal is rejected after this instant
    pub reveal_deadline: i64,

    /// Zero until revealed
    pub revealed_time: i64,

    /// Protocol fee percent, recorded at reveal
    pub protocol_fee: u8,

    /// Creator fee percent
    pub creator_fee: u8,

    /// Winning option, set once by `reveal`
    pub result_index: Option<u8>,

    /// Number of stake records
    pub participants: u32,

    /// Sum of all option amounts
    pub total_pool: u64,

    /// Lamports left for winners after fees, recorded at reveal
    pub reward_pool: u64,

    /// Lamports paid out through claims and refunds
    pub total_paid: u64,

    #[max_len(10)]
    pub options: Vec<OptionData>,

    /// PDA bump seed
    pub bump: u8,
}

/// One outcome of a prediction
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, InitSpace, Debug, Default)]
pub struct OptionData {
    #[max_len(10)]
    pub label: String,
    /// Total lamports staked on this option
    pub amount: u64,
}

/// Derived lifecycle status
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PredictionStatus {
    /// Accepting stakes
    Open,
    /// Staking closed, waiting for the creator to reveal
    Closed,
    /// Result revealed, winners may claim
    Revealed,
    /// Reveal deadline missed, stakers may withdraw
    Expired,
}

/// Creator-supplied parameters of a new prediction
#[derive(Clone, Debug, Default)]
pub struct PredictionParams {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub ended_time: i64,
    pub reveal_deadline: i64,
    pub creator_fee: u8,
    pub options: Vec<OptionData>,
}

impl Prediction {
    pub const SEED: &'static [u8] = b"prediction";

    pub const MAX_TITLE_LEN: usize = 50;
    pub const MAX_DESCRIPTION_LEN: usize = 500;
    pub const MAX_IMAGE_URL_LEN: usize = 66;
    pub const MAX_OPTIONS: usize = 10;
    pub const MAX_LABEL_LEN: usize = 10;

    /// Validate `params` and build a fresh, unrevealed prediction
    pub fn new(
        seed: u64,
        bump: u8,
        creator: Pubkey,
        params: PredictionParams,
        now: i64,
    ) -> Result<Self> {
        require!(
            params.title.len() <= Self::MAX_TITLE_LEN,
            PredictionError::TitleTooLong
        );
        require!(
            params.description.len() <= Self::MAX_DESCRIPTION_LEN,
            PredictionError::DescriptionTooLong
        );
        require!(
            params.image_url.len() <= Self::MAX_IMAGE_URL_LEN,
            PredictionError::ImageUrlTooLong
        );
        require!(!params.options.is_empty(), PredictionError::NoOptions);
        require!(
            params.options.len() <= Self::MAX_OPTIONS,
            PredictionError::TooManyOptions
        );
        for option in &params.options {
            require!(
                option.label.len() <= Self::MAX_LABEL_LEN,
                PredictionError::OptionLabelTooLong
            );
            require!(option.amount == 0, PredictionError::OptionAmountNotZero);
        }
        require!(params.ended_time > now, PredictionError::EndedTimeInvalid);
        require!(
            params.reveal_deadline > params.ended_time,
            PredictionError::RevealDeadlineInvalid
        );
        require!(
            params.creator_fee <= Config::MAX_FEE,
            PredictionError::FeeTooHigh
        );

        Ok(Self {
            seed,
            creator,
            title: params.title,
            description: params.description,
            image_url: params.image_url,
            created_time: now,
            ended_time: params.ended_time,
            reveal_deadline: params.reveal_deadline,
            revealed_time: 0,
            protocol_fee: 0,
            creator_fee: params.creator_fee,
            result_index: None,
            participants: 0,
            total_pool: 0,
            reward_pool: 0,
            total_paid: 0,
            options: params.options,
            bump,
        })
    }

    pub fn status(&self, now: i64) -> PredictionStatus {
        match self.result_index {
            Some(_) => PredictionStatus::Revealed,
            None if now < self.ended_time => PredictionStatus::Open,
            None if now <= self.reveal_deadline => PredictionStatus::Closed,
            None => PredictionStatus::Expired,
        }
    }

    fn option_mut(&mut self, index: u8) -> Result<&mut OptionData> {
        self.options
            .get_mut(index as usize)
            .ok_or_else(|| error!(PredictionError::InvalidOptionIndex))
    }

    /// Add `amount` to option `option_index` on behalf of `stake`'s owner.
    ///
    /// The caller moves the lamports into escrow.
    pub fn record_stake(
        &mut self,
        now: i64,
        option_index: u8,
        amount: u64,
        stake: &mut UserOption,
    ) -> Result<()> {
        require!(now < self.ended_time, PredictionError::PredictionClosed);
        require!(
            (option_index as usize) < self.options.len(),
            PredictionError::InvalidOptionIndex
        );
        require!(amount > 0, PredictionError::ZeroAmount);

        let total_pool = self
            .total_pool
            .checked_add(amount)
            .ok_or(PredictionError::MathOverflow)?;
        let stake_amount = stake
            .amount
            .checked_add(amount)
            .ok_or(PredictionError::MathOverflow)?;

        let option = self.option_mut(option_index)?;
        option.amount = option
            .amount
            .checked_add(amount)
            .ok_or(PredictionError::MathOverflow)?;

        if stake.amount == 0 {
            self.participants = self.participants.saturating_add(1);
        }
        self.total_pool = total_pool;
        stake.amount = stake_amount;

        Ok(())
    }

    /// Record the winning option and split the pool.
    ///
    /// Returns the fees the caller must move out of escrow.
    pub fn reveal(
        &mut self,
        now: i64,
        caller: Pubkey,
        result_index: u8,
        config: &Config,
        fee_receiver: Pubkey,
    ) -> Result<FeeSplit> {
        require!(now >= self.ended_time, PredictionError::PredictionStillOpen);
        require_keys_eq!(caller, self.creator, PredictionError::InvalidCreator);
        require!(
            now <= self.reveal_deadline,
            PredictionError::RevealDeadlinePassed
        );
        require!(
            (result_index as usize) < self.options.len(),
            PredictionError::InvalidOptionIndex
        );
        require!(self.result_index.is_none(), PredictionError::AlreadyRevealed);
        require_keys_eq!(
            fee_receiver,
            config.fee_receiver,
            PredictionError::InvalidFeeReceiver
        );

        let split = settlement::split_fees(self.total_pool, config.protocol_fee, self.creator_fee)?;

        self.result_index = Some(result_index);
        self.revealed_time = now;
        self.protocol_fee = config.protocol_fee;
        self.reward_pool = split.reward_pool;

        Ok(split)
    }

    /// Settle a winning stake. Returns the reward owed to the staker.
    pub fn claim(&mut self, option_index: u8, stake: Option<&mut UserOption>) -> Result<u64> {
        let result_index = self.result_index.ok_or(PredictionError::NotRevealed)?;
        require!(option_index == result_index, PredictionError::WrongOption);
        let stake = stake.ok_or(PredictionError::AccountNotInitialized)?;
        require!(!stake.claimed, PredictionError::AlreadyClaimed);

        let winning_total = self
            .options
            .get(result_index as usize)
            .ok_or(PredictionError::InvalidOptionIndex)?
            .amount;
        let reward = settlement::share_of_pool(stake.amount, self.reward_pool, winning_total)?;

        stake.claimed = true;
        self.total_paid = self
            .total_paid
            .checked_add(reward)
            .ok_or(PredictionError::MathOverflow)?;

        Ok(reward)
    }

    /// Refund a stake of an expired prediction. Returns the original amount.
    pub fn withdraw(&mut self, now: i64, stake: Option<&mut UserOption>) -> Result<u64> {
        require!(
            self.status(now) == PredictionStatus::Expired,
            PredictionError::NotEligibleForWithdraw
        );
        let stake = stake.ok_or(PredictionError::AccountNotInitialized)?;
        require!(!stake.claimed, PredictionError::AlreadyClaimed);

        stake.claimed = true;
        self.total_paid = self
            .total_paid
            .checked_add(stake.amount)
            .ok_or(PredictionError::MathOverflow)?;

        Ok(stake.amount)
    }
}
