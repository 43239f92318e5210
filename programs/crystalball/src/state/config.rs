//! Global Protocol Configuration
//!
//! This account stores the policy shared by every prediction: who may change
//! it, the protocol fee taken at reveal, where that fee goes, and the pause
//! switch.

use anchor_lang::prelude::*;

use crate::errors::PredictionError;

/// Global configuration account (singleton PDA)
///
/// Seeds: ["config"]
#[account]
#[derive(InitSpace, Default)]
pub struct Config {
    /// Account allowed to change policy; unset until the first update
    pub admin: Pubkey,

    /// Protocol fee in percent of the pool (0..=100), taken at reveal
    pub protocol_fee: u8,

    /// Receives the protocol fee
    pub fee_receiver: Pubkey,

    /// New predictions and stakes are rejected while set
    pub is_paused: bool,

    /// Set by the first update; the admin is only claimable before that
    pub initialized: bool,

    /// PDA bump seed
    pub bump: u8,
}

impl Config {
    pub const SEED: &'static [u8] = b"config";

    /// Highest fee rate, in percent
    pub const MAX_FEE: u8 = 100;

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Apply a policy update from `caller`.
    ///
    /// The first caller of a fresh config becomes its admin; afterwards only
    /// the admin may update it.
    pub fn update(
        &mut self,
        caller: Pubkey,
        protocol_fee: u8,
        fee_receiver: Pubkey,
        is_paused: bool,
    ) -> Result<()> {
        if !self.is_initialized() {
            self.admin = caller;
            self.initialized = true;
        }
        require_keys_eq!(self.admin, caller, PredictionError::InvalidOwner);
        require!(protocol_fee <= Self::MAX_FEE, PredictionError::FeeTooHigh);

        self.protocol_fee = protocol_fee;
        self.fee_receiver = fee_receiver;
        self.is_paused = is_paused;

        Ok(())
    }

    /// Reject new predictions and stakes while paused
    pub fn ensure_active(&self) -> Result<()> {
        require!(!self.is_paused, PredictionError::ProgramPaused);
        Ok(())
    }

    /// Hand the admin role to `new_admin`
    pub fn transfer_admin(&mut self, caller: Pubkey, new_admin: Pubkey) -> Result<()> {
        require!(self.is_initialized(), PredictionError::InvalidOwner);
        require_keys_eq!(self.admin, caller, PredictionError::InvalidOwner);
        require_keys_neq!(new_admin, Pubkey::default(), PredictionError::InvalidAdmin);
        self.admin = new_admin;
        Ok(())
    }
}
