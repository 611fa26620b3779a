//! Multi-key sequence accumulation with numeric repeat prefixes.

use super::key::KeyToken;

/// Tracks the in-progress key sequence and repeat count.
///
/// Digits feed the repeat count; every other token is appended to the
/// pending sequence. The sequence signature is the plain concatenation of
/// the tokens, so `g` followed by `g` is `"gg"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySequenceAccumulator {
    signature: String,
    repeat: u32,
}

impl KeySequenceAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one token and returns the updated `(repeat, signature)`.
    pub fn record(&mut self, token: &KeyToken) -> (u32, &str) {
        match token.digit() {
            Some(digit) if self.repeat == 0 => self.repeat = digit,
            Some(digit) => {
                self.repeat = self.repeat.saturating_mul(10).saturating_add(digit);
            }
            None => {
                self.signature.push_str(token.as_str());
            }
        }
        (self.repeat, &self.signature)
    }

    pub fn reset(&mut self) {
        self.signature.clear();
        self.repeat = 0;
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn repeat(&self) -> u32 {
        self.repeat
    }

    pub fn is_empty(&self) -> bool {
        self.signature.is_empty() && self.repeat == 0
    }
}
