//! Cross-crate integration tests for the mailroom workspace.

pub mod fixtures;

#[cfg(test)]
mod letters;
#[cfg(test)]
mod roster;
