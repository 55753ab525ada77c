//! Printable-character classification
//!
//! A code point is printable when at least one enabled [`Category`] claims
//! it. The enabled categories are compiled into a single Unicode character
//! class, so a code point belonging to several categories is still a single
//! match.

use crate::config::Configuration;
use crate::error::{CoreError, Result};
use regex::Regex;

const ASCII_LEN: usize = 128;

/// Unicode categories that can be toggled on or off
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// General category L (all letters)
    Letter,
    /// General category N (decimal digits, letter numbers, other numbers)
    Number,
    /// White_Space property (ASCII blanks, NEL, NBSP, Zs, line separators)
    Space,
    /// General category P (all punctuation)
    Punctuation,
}

impl Category {
    /// Regex class item matching this category
    pub fn class_item(self) -> &'static str {
        match self {
            Category::Letter => r"\p{L}",
            Category::Number => r"\p{N}",
            Category::Space => r"\s",
            Category::Punctuation => r"\p{P}",
        }
    }

    /// Check a single character against this category alone
    pub fn contains(self, ch: char) -> bool {
        Regex::new(self.class_item())
            .map(|re| re.is_match(ch.encode_utf8(&mut [0u8; 4])))
            .unwrap_or(false)
    }
}

/// Decides whether a code point counts as printable under a configuration
#[derive(Debug, Clone)]
pub struct CategoryPredicate {
    /// `None` when every category is disabled
    class: Option<Regex>,
    ascii: [bool; ASCII_LEN],
}

impl CategoryPredicate {
    /// Compile the predicate for the categories enabled in `config`
    pub fn new(config: &Configuration) -> Result<Self> {
        let categories = config.enabled_categories();
        if categories.is_empty() {
            log::debug!("all categories disabled; predicate rejects every code point");
            return Ok(Self {
                class: None,
                ascii: [false; ASCII_LEN],
            });
        }

        let items: String = categories.iter().map(|c| c.class_item()).collect();
        let pattern = format!("^[{items}]$");
        let class = Regex::new(&pattern).map_err(|e| {
            CoreError::InvalidConfiguration(format!("invalid category class '{pattern}': {e}"))
        })?;

        let mut ascii = [false; ASCII_LEN];
        let mut buf = [0u8; 4];
        for (byte, slot) in (0u8..).zip(ascii.iter_mut()) {
            *slot = class.is_match(char::from(byte).encode_utf8(&mut buf));
        }

        Ok(Self {
            class: Some(class),
            ascii,
        })
    }

    /// Whether `ch` belongs to at least one enabled category
    #[inline]
    pub fn matches(&self, ch: char) -> bool {
        if ch.is_ascii() {
            return self.ascii[ch as usize];
        }

        match &self.class {
            Some(class) => class.is_match(ch.encode_utf8(&mut [0u8; 4])),
            None => false,
        }
    }
}
