//! # Mailroom Common
//!
//! Types shared by every mailroom crate:
//!
//! * **[`error`]**: the library error enum and its `Result` alias.
//! * **[`money`]**: cent-precise [`money::Amount`] values and currency formatting.
//! * **[`entry`]**: parsing of `NAME=AMOUNT[,AMOUNT...]` donation entries.
//! * **[`config`]**: run-wide settings and challenge defaults.

pub mod config;
pub mod entry;
pub mod error;
pub mod macros;
pub mod money;

pub use error::{MailroomError, Result};
pub use money::Amount;

#[doc(hidden)]
pub use tracing as __tracing;
