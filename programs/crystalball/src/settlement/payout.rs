//! # Fee Split and Pro-Rata Payout
//!
//! ## Reveal
//!
//! ```text
//! protocol_amount = pool * protocol_fee / 100
//! creator_amount  = pool * creator_fee  / 100
//! reward_pool     = pool - protocol_amount - creator_amount
//! ```
//!
//! ## Claim
//!
//! ```text
//! reward = stake * reward_pool / winning_total
//! ```
//!
//! All divisions truncate. The remainder of each claim stays in escrow, so
//! the sum of rewards never exceeds `reward_pool`.

use anchor_lang::prelude::*;

use crate::errors::PredictionError;

/// Percent denominator for fee rates
pub const PERCENT: u128 = 100;

/// Result of splitting a settled pool at reveal time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeeSplit {
    /// Credited to the configured fee receiver
    pub protocol_amount: u64,
    /// Credited to the prediction creator
    pub creator_amount: u64,
    /// Left in escrow for winner claims
    pub reward_pool: u64,
}

impl FeeSplit {
    /// Lamports leaving the escrow at reveal
    pub fn fees(&self) -> u64 {
        self.protocol_amount + self.creator_amount
    }
}

/// `amount * rate / 100`, truncated
pub fn percent_of(amount: u64, rate: u8) -> Result<u64> {
    let value = (amount as u128)
        .checked_mul(rate as u128)
        .ok_or(PredictionError::MathOverflow)?
        / PERCENT;
    u64::try_from(value).map_err(|_| error!(PredictionError::MathOverflow))
}

/// Split `pool` into protocol fee, creator fee and the reward pool
pub fn split_fees(pool: u64, protocol_fee: u8, creator_fee: u8) -> Result<FeeSplit> {
    require!(
        (protocol_fee as u128 + creator_fee as u128) <= PERCENT,
        PredictionError::FeeTooHigh
    );

    let protocol_amount = percent_of(pool, protocol_fee)?;
    let creator_amount = percent_of(pool, creator_fee)?;
    let reward_pool = pool
        .checked_sub(protocol_amount)
        .and_then(|rest| rest.checked_sub(creator_amount))
        .ok_or(PredictionError::MathOverflow)?;

    Ok(FeeSplit {
        protocol_amount,
        creator_amount,
        reward_pool,
    })
}

/// Share of `reward_pool` owed to a winning `stake` out of `winning_total`
pub fn share_of_pool(stake: u64, reward_pool: u64, winning_total: u64) -> Result<u64> {
    require!(stake <= winning_total, PredictionError::MathOverflow);

    let reward = (stake as u128)
        .checked_mul(reward_pool as u128)
        .ok_or(PredictionError::MathOverflow)?
        .checked_div(winning_total as u128)
        .ok_or(PredictionError::MathOverflow)?;

    // stake <= winning_total keeps this within reward_pool
    u64::try_from(reward).map_err(|_| error!(PredictionError::MathOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::assert_error;

    #[test]
    fn test_split_fees_truncates() {
        let split = split_fees(500_000_000, 1, 1).unwrap();
        assert_eq!(split.protocol_amount, 5_000_000);
        assert_eq!(split.creator_amount, 5_000_000);
        assert_eq!(split.reward_pool, 490_000_000);

        // 1% of 199 is 1.99, truncated to 1
        let split = split_fees(199, 1, 0).unwrap();
        assert_eq!(split.protocol_amount, 1);
        assert_eq!(split.creator_amount, 0);
        assert_eq!(split.reward_pool, 198);
        assert_eq!(split.fees() + split.reward_pool, 199);
    }

    #[test]
    fn test_split_fees_rejects_over_hundred() {
        assert_error(split_fees(1_000, 60, 41), PredictionError::FeeTooHigh);

        let split = split_fees(1_000, 60, 40).unwrap();
        assert_eq!(split.reward_pool, 0);
    }

    #[test]
    fn test_split_fees_large_pool() {
        let split = split_fees(u64::MAX, 100, 0).unwrap();
        assert_eq!(split.protocol_amount, u64::MAX);
        assert_eq!(split.reward_pool, 0);
    }

    #[test]
    fn test_share_is_proportional() {
        // 1:2 split of a 294 reward pool
        assert_eq!(share_of_pool(100, 294, 300).unwrap(), 98);
        assert_eq!(share_of_pool(200, 294, 300).unwrap(), 196);
        // sole winner takes the whole pool
        assert_eq!(share_of_pool(300, 294, 300).unwrap(), 294);
    }

    #[test]
    fn test_share_rounding_never_overpays() {
        let reward_pool = 1_000;
        let stakes = [1u64, 2, 4];
        let winning_total: u64 = stakes.iter().sum();

        let paid: u64 = stakes
            .iter()
            .map(|stake| share_of_pool(*stake, reward_pool, winning_total).unwrap())
            .sum();

        assert!(paid <= reward_pool);
        assert!(reward_pool - paid < winning_total);
    }

    #[test]
    fn test_share_guards() {
        assert_error(share_of_pool(1, 10, 0), PredictionError::MathOverflow);
        assert_error(share_of_pool(5, 10, 4), PredictionError::MathOverflow);
        assert_eq!(share_of_pool(u64::MAX, u64::MAX, u64::MAX).unwrap(), u64::MAX);
    }
}
