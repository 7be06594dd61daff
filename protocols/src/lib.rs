//! Wire-level helpers used by the probers.

pub mod dns;
