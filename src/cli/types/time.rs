//! Season years and matchup weeks.

numeric_newtype!(
    /// Season year; ESPN keys seasons by the year they start in.
    Season(u16),
    as_u16
);

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

numeric_newtype!(
    /// Matchup period. Regular-season weeks map one to one onto scoring periods.
    Week(u16),
    as_u16
);

impl Week {
    /// Weeks `1..=self`, in order.
    pub fn through(self) -> impl Iterator<Item = Week> {
        (1..=self.0).map(Week)
    }
}

impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}
