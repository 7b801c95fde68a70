//! # Mailroom Core
//!
//! Donor bookkeeping for a small charity:
//!
//! * **[`donor`]**: a single donor, its gift history and derived statistics.
//! * **[`collection`]**: the roster of donors, reports, letter export and
//!   "challenge" projections.
//! * **[`letter`]**: the thank-you letter template.
//!
//! Everything here is synchronous and owns its data. A projection always
//! builds a fresh roster and never touches the one it was derived from.

pub mod collection;
pub mod contribution;
pub mod donor;
pub mod letter;

pub use collection::{DonorCollection, ReportRow, projection::Projection};
pub use contribution::Contribution;
pub use donor::Donor;
