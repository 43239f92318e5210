//! Program error codes
//!
//! Every instruction fails with one of these. Clients match on the message
//! strings, so the wording of the settlement errors is kept stable.

use anchor_lang::prelude::*;

#[error_code]
pub enum PredictionError {
    #[msg("Invalid owner")]
    InvalidOwner,
    #[msg("Admin cannot be the default address")]
    InvalidAdmin,
    #[msg("Program is paused")]
    ProgramPaused,
    #[msg("Fee rate cannot exceed 100%")]
    FeeTooHigh,

    // --- CREATION ---
    #[msg("Title is too long")]
    TitleTooLong,
    #[msg("Description is too long")]
    DescriptionTooLong,
    #[msg("Image url is too long")]
    ImageUrlTooLong,
    #[msg("Option label is too long")]
    OptionLabelTooLong,
    #[msg("Too many options")]
    TooManyOptions,
    #[msg("Prediction needs at least one option")]
    NoOptions,
    #[msg("Option amount must start at zero")]
    OptionAmountNotZero,
    #[msg("Ended time must be in the future")]
    EndedTimeInvalid,
    #[msg("Reveal deadline must be greater than ended time")]
    RevealDeadlineInvalid,

    // --- STAKING ---
    #[msg("Prediction has closed")]
    PredictionClosed,
    #[msg("Invalid option")]
    InvalidOptionIndex,
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    // --- SETTLEMENT ---
    #[msg("Prediction is still open")]
    PredictionStillOpen,
    #[msg("Invalid creator")]
    InvalidCreator,
    #[msg("Invalid fee receiver")]
    InvalidFeeReceiver,
    #[msg("Reveal deadline has passed")]
    RevealDeadlinePassed,
    #[msg("Prediction already revealed")]
    AlreadyRevealed,
    #[msg("Result not revealed")]
    NotRevealed,
    #[msg("Wrong option")]
    WrongOption,
    #[msg("AccountNotInitialized: no stake recorded for this option")]
    AccountNotInitialized,
    #[msg("Already claimed")]
    AlreadyClaimed,
    #[msg("Prediction is not eligible for withdraw")]
    NotEligibleForWithdraw,

    // --- ESCROW ---
    #[msg("Insufficient funds")]
    InsufficientFunds,
    #[msg("Math overflow")]
    MathOverflow,
}

#[cfg(test)]
pub(crate) fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: PredictionError) {
    match result {
        Err(anchor_lang::error::Error::AnchorError(e)) => {
            assert_eq!(e.error_code_number, u32::from(expected), "{}", e.error_msg)
        }
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
