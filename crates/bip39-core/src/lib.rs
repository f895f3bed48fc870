//! BIP-39 mnemonic codec - word tables, bit packing, and checksums.
//!
//! This crate provides the building blocks for encoding secrets as English
//! mnemonic phrases and decoding them back:
//! - Word table with two-level prefix search (index ⇄ mnemonic)
//! - 11-bit word packing over a fixed 40-byte buffer
//! - SHA-256 checksum append and verification
//! - Secret ⇄ words ⇄ phrase codec with caller-side output limits
//! - Interactive binary search over the word list
//! - Length and capacity policy

pub mod hash;
pub mod policy;
pub mod bits;
pub mod checksum;
pub mod wordlist;
pub mod search;
pub mod context;
pub mod codec;
pub mod mnemonic;

mod error;
pub use error::Bip39Error;

pub use codec::Codec;
pub use context::MnemonicContext;
pub use mnemonic::Mnemonic;
pub use policy::Limits;
pub use wordlist::{English, WordTable};
