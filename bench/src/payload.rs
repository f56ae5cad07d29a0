use crate::error::BenchError;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::time::{Duration, Instant};

pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random alphanumeric message body shared by every destination of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    body: String,
    hash: String,
    hash_elapsed: Duration,
}

impl Payload {
    /// Fills `length` bytes from the OS random source and maps them into [`ALPHABET`].
    pub fn generate(length: usize) -> Result<Self, BenchError> {
        let mut entropy = vec![0u8; length];
        OsRng.try_fill_bytes(&mut entropy)?;
        Ok(Self::from_entropy(entropy))
    }

    /// Builds the payload from raw random bytes.
    ///
    /// The hash is taken over the bytes before they are mapped into the alphabet.
    /// The mapping is a plain modulo, so the first 48 characters are slightly
    /// more likely than the rest.
    pub fn from_entropy(entropy: Vec<u8>) -> Self {
        let start = Instant::now();
        let hash = hex::encode(Sha256::digest(&entropy));
        let hash_elapsed = start.elapsed();

        let body = entropy
            .iter()
            .map(|byte| ALPHABET[*byte as usize % ALPHABET.len()] as char)
            .collect();

        Self {
            body,
            hash,
            hash_elapsed,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn hash_elapsed(&self) -> Duration {
        self.hash_elapsed
    }
}
