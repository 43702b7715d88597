use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;

/// Fixed catalog rotated through the quotes panel.
pub const QUOTES: [&str; 8] = [
    "Believe in yourself and all that you are.",
    "Push yourself, because no one else is going to do it for you.",
    "Success doesn't just find you. You have to go out and get it.",
    "Great things never come from comfort zones.",
    "Dream it. Wish it. Do it.",
    "Your limitation—it's only your imagination.",
    "Hard work beats talent when talent doesn't work hard.",
    "Don't watch the clock; do what it does. Keep going.",
];

/// Two distinct catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotePair(pub &'static str, pub &'static str);

impl QuotePair {
    pub fn lines(&self) -> [String; 2] {
        [quoted(self.0), quoted(self.1)]
    }
}

impl fmt::Display for QuotePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.lines();
        write!(f, "{a}\n{b}")
    }
}

fn quoted(s: &str) -> String {
    format!("\"{s}\"")
}

pub struct QuoteRotator {
    rng: StdRng,
}

impl Default for QuoteRotator {
    fn default() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl QuoteRotator {
    /// Deterministic rotator for reproducible sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Sample two quotes without replacement.
    pub fn rotate(&mut self) -> QuotePair {
        let mut picked = QUOTES.choose_multiple(&mut self.rng, 2).copied();
        match (picked.next(), picked.next()) {
            (Some(a), Some(b)) => QuotePair(a, b),
            // the catalog is a fixed array of more than two entries
            _ => QuotePair(QUOTES[0], QUOTES[1]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_wrapped_in_quotes() {
        let pair = QuotePair(QUOTES[4], QUOTES[3]);
        assert_eq!(pair.lines()[0], "\"Dream it. Wish it. Do it.\"");
    }
}
