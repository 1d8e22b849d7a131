//! Meteorological season mapping.

/// Meteorological season of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// December, January, February.
    Winter,
    /// March, April, May.
    Spring,
    /// June, July, August.
    Summer,
    /// September, October, November.
    Autumn,
}

/// Total month -> season mapping, indexed by `month - 1`.
const SEASON_BY_MONTH: [Season; 12] = [
    Season::Winter, // Jan
    Season::Winter, // Feb
    Season::Spring, // Mar
    Season::Spring, // Apr
    Season::Spring, // May
    Season::Summer, // Jun
    Season::Summer, // Jul
    Season::Summer, // Aug
    Season::Autumn, // Sep
    Season::Autumn, // Oct
    Season::Autumn, // Nov
    Season::Winter, // Dec
];

impl Season {
    /// Maps a calendar month (1..=12) to its season.
    ///
    /// Returns `None` for any other month value, which callers treat as an
    /// input-contract violation and reject the record.
    pub fn from_month(month: u32) -> Option<Season> {
        if (1..=12).contains(&month) {
            Some(SEASON_BY_MONTH[(month - 1) as usize])
        } else {
            None
        }
    }

    /// Returns the numeric encoding used in the feature matrix:
    /// 0 = Winter, 1 = Spring, 2 = Summer, 3 = Autumn.
    pub fn index(self) -> u8 {
        match self {
            Season::Winter => 0,
            Season::Spring => 1,
            Season::Summer => 2,
            Season::Autumn => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_is_total_over_valid_months() {
        let expected = [
            (1, Season::Winter),
            (2, Season::Winter),
            (3, Season::Spring),
            (4, Season::Spring),
            (5, Season::Spring),
            (6, Season::Summer),
            (7, Season::Summer),
            (8, Season::Summer),
            (9, Season::Autumn),
            (10, Season::Autumn),
            (11, Season::Autumn),
            (12, Season::Winter),
        ];
        for (month, season) in expected {
            assert_eq!(Season::from_month(month), Some(season), "month {month}");
        }
    }

    #[test]
    fn invalid_months_rejected() {
        assert_eq!(Season::from_month(0), None);
        assert_eq!(Season::from_month(13), None);
        assert_eq!(Season::from_month(u32::MAX), None);
    }

    #[test]
    fn index_encoding() {
        assert_eq!(Season::Winter.index(), 0);
        assert_eq!(Season::Spring.index(), 1);
        assert_eq!(Season::Summer.index(), 2);
        assert_eq!(Season::Autumn.index(), 3);
    }
}
