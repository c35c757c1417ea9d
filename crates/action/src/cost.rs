use std::fmt;

/// Expense of taking a single action, in abstract grid-search units.
///
/// Unsigned, so negative costs are unrepresentable. Zero is allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Cost(pub u32);

impl Cost {
    pub const ZERO: Self = Self(0);
    pub const UNIT: Self = Self(1);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Parses a plain decimal cost. Signs, whitespace and separators are
    /// rejected, so `"+3"` and `"3:4"` are not costs.
    pub fn parse_decimal(raw: &str) -> Option<Cost> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse::<u32>().ok().map(Cost)
    }

    /// Accumulates path cost without wrapping.
    pub const fn saturating_add(self, rhs: Cost) -> Cost {
        Cost(self.0.saturating_add(rhs.0))
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::UNIT
    }
}

impl From<u32> for Cost {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::iter::Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::ZERO, Cost::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_unit() {
        assert_eq!(Cost::default(), Cost::UNIT);
        assert_eq!(Cost::default().get(), 1);
    }

    #[test]
    fn sums_saturate() {
        let total: Cost = [Cost(u32::MAX), Cost(5)].into_iter().sum();
        assert_eq!(total, Cost(u32::MAX));

        let total: Cost = [Cost(2), Cost(3), Cost::ZERO].into_iter().sum();
        assert_eq!(total, Cost(5));
    }

    #[test]
    fn parse_decimal_accepts_digits_only() {
        assert_eq!(Cost::parse_decimal("0"), Some(Cost::ZERO));
        assert_eq!(Cost::parse_decimal("42"), Some(Cost(42)));
        assert_eq!(Cost::parse_decimal("+3"), None);
        assert_eq!(Cost::parse_decimal("-1"), None);
        assert_eq!(Cost::parse_decimal("3:4"), None);
        assert_eq!(Cost::parse_decimal(""), None);
        assert_eq!(Cost::parse_decimal("4294967296"), None);
    }

    #[test]
    fn displays_plain_decimal() {
        assert_eq!(Cost(0).to_string(), "0");
        assert_eq!(Cost(42).to_string(), "42");
    }
}
