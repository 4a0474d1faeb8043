//! League, franchise and athlete ids.

numeric_newtype!(
    /// ESPN league id, as found in the league URL (`leagueId=...`).
    ///
    /// ```rust
    /// use league_recap::LeagueId;
    ///
    /// let league_id: LeagueId = " 123456 ".parse().unwrap();
    /// assert_eq!(league_id.as_u32(), 123456);
    /// assert_eq!(league_id.to_string(), "123456");
    /// ```
    LeagueId(u32),
    as_u32
);

numeric_newtype!(
    /// Franchise id within one league (1-based, stable across the season).
    TeamId(u32),
    as_u32
);

numeric_newtype!(
    /// ESPN athlete id; shared across leagues.
    PlayerId(u64),
    as_u64
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_id_from_str() {
        let id: LeagueId = "123456".parse().unwrap();
        assert_eq!(id, LeagueId::new(123456));

        let padded: LeagueId = " 42 ".parse().unwrap();
        assert_eq!(padded.as_u32(), 42);

        assert!("abc".parse::<LeagueId>().is_err());
        assert!("-3".parse::<TeamId>().is_err());
    }

    #[test]
    fn test_ids_serialize_transparently() {
        assert_eq!(serde_json::to_string(&TeamId::new(7)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&PlayerId::new(4262921)).unwrap(), "4262921");

        let team: TeamId = serde_json::from_str("12").unwrap();
        assert_eq!(team.as_u32(), 12);
    }
}
