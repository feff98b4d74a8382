//! Cryptographic primitives for the commit-reveal scheme.
//!
//! This module provides:
//! - HmacKey, a fresh 256-bit secret per round
//! - HmacDigest, HMAC-SHA256 of a move name under that key
//! - Commitment, the hidden move bound to its digest

mod commitment;

pub use commitment::{Commitment, HmacDigest, HmacKey, HMAC_BYTES};
