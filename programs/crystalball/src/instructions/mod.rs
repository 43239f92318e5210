//! Instruction handlers for the prediction protocol
//!
//! Each instruction represents an action users can take:
//! - `update_config` - Create or change the global policy (admin only)
//! - `transfer_admin` - Hand the admin role to another account
//! - `create` - Open a new prediction (permissionless)
//! - `predict` - Stake lamports on one option
//! - `reveal` - Declare the winning option (creator only)
//! - `claim` - Collect a winning share after reveal
//! - `withdraw` - Recover a stake when the creator never revealed

pub mod update_config;
pub mod transfer_admin;
pub mod create;
pub mod predict;
pub mod reveal;
pub mod claim;
pub mod withdraw;

pub use update_config::*;
pub use transfer_admin::*;
pub use create::*;
pub use predict::*;
pub use reveal::*;
pub use claim::*;
pub use withdraw::*;
