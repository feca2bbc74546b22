use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use super::error::{EscapeError, EscapeResult};

/// Independent text transformations applied by the escaper.
///
/// Flags compose with `|`. The text pipeline always runs in the same order:
/// quoting, then builtin comma escaping, then raw-string wrapping.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EscapeFlags(u8);

impl EscapeFlags {
    pub const NONE: Self = Self(0);
    /// Wrap in double quotes, escape embedded quotes and line breaks.
    pub const QUOTES: Self = Self(1);
    /// Escape literal commas with a backslash (builtin argument packing).
    pub const ESCAPE_BUILTIN: Self = Self(1 << 1);
    /// Wrap in `r'...'`.
    pub const RAW_STRING: Self = Self(1 << 2);
    /// Drop the trailing run of nulls from an argument list.
    pub const STRIP_NULL_ITEMS: Self = Self(1 << 3);

    const NAMED: [(Self, &'static str); 4] = [
        (Self::QUOTES, "Quotes"),
        (Self::ESCAPE_BUILTIN, "EscapeBuiltin"),
        (Self::RAW_STRING, "RawString"),
        (Self::STRIP_NULL_ITEMS, "StripNullItems"),
    ];

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Rejects combinations whose output would not be the literal the caller
    /// asked for.
    ///
    /// `RAW_STRING | QUOTES` would embed the quote characters and their
    /// backslashes into the raw literal's value.
    pub fn validate(self) -> EscapeResult<()> {
        if self.contains(Self::RAW_STRING | Self::QUOTES) {
            return Err(EscapeError::invalid_combination(
                self,
                "RawString cannot be combined with Quotes",
            ));
        }
        Ok(())
    }
}

impl Default for EscapeFlags {
    fn default() -> Self {
        Self::QUOTES
    }
}

impl BitOr for EscapeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for EscapeFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl fmt::Debug for EscapeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EscapeFlags({})", self)
    }
}

impl fmt::Display for EscapeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }
        let names: Vec<&str> = Self::NAMED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&names.join(" | "))
    }
}
