//! Wallet notify cycle for txnotify.
//!
//! Ties the durable transaction registry to its side effects:
//! - Account book persisted alongside the registry
//! - Balance reconciliation for newly confirmed value transfers
//! - Notification dispatch: one subprocess per affected bundle, argv built
//!   by shell-word tokenization with no shell interposed
//! - [`run_notify_cycle`], the single entry point invoked per scheduler
//!   tick
//!
//! All durable mutations for one cycle land in one state transaction;
//! dispatch runs only after that transaction has committed.

pub mod accounts;
pub mod config;
pub mod cycle;
pub mod dispatch;
pub mod error;
pub mod reconcile;

pub use config::NotifyConfig;
pub use cycle::{run_notify_cycle, CycleReport};
pub use dispatch::{dispatch_notifications, DispatchError, DispatchFailure};
pub use error::WalletError;
pub use reconcile::reconcile_balances;
