use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Sort key used when the user has not picked one.
pub const DEFAULT_ORDER_BY: &str = "score";

/// Minimum score at or below which the score floor counts as unset.
const SCORE_FLOOR_DEFAULT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EpisodeBucket {
    /// Up to 12 episodes.
    Short,
    /// 13 to 26 episodes.
    Standard,
    /// 27 episodes or more.
    Long,
}

impl EpisodeBucket {
    /// Inclusive `(min, max)` episode bounds; `None` means unbounded.
    pub fn bounds(self) -> (Option<u32>, Option<u32>) {
        match self {
            EpisodeBucket::Short => (None, Some(12)),
            EpisodeBucket::Standard => (Some(13), Some(26)),
            EpisodeBucket::Long => (Some(27), None),
        }
    }
}

impl FromStr for EpisodeBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(EpisodeBucket::Short),
            "standard" => Ok(EpisodeBucket::Standard),
            "long" => Ok(EpisodeBucket::Long),
            other => Err(format!("unknown episode bucket '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction '{other}'")),
        }
    }
}

/// User-selected constraints narrowing catalog queries.
///
/// Two criteria that compare equal share a discovery session; any change
/// invalidates what was fetched under the old value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub genres: BTreeSet<u32>,
    pub kind: Option<String>,
    pub min_score: f64,
    pub status: Option<String>,
    pub season: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub episodes: Option<EpisodeBucket>,
    pub rating: Option<String>,
    pub source: Option<String>,
    pub order_by: Option<String>,
    pub sort: SortDirection,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing narrows the catalog. Sort key and direction are
    /// ignored; a score floor only counts above 1.
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
            && is_unset(&self.kind)
            && is_unset(&self.status)
            && is_unset(&self.season)
            && self.start_year.is_none()
            && self.end_year.is_none()
            && self.episodes.is_none()
            && is_unset(&self.rating)
            && is_unset(&self.source)
            && self.score_floor() <= SCORE_FLOOR_DEFAULT
    }

    /// Minimum score with non-finite values treated as unset.
    pub fn score_floor(&self) -> f64 {
        if self.min_score.is_finite() {
            self.min_score
        } else {
            0.0
        }
    }

    /// Copy with a non-finite score floor reset to the default, so the value
    /// compares equal to itself.
    pub fn normalized(&self) -> Self {
        Self {
            min_score: self.score_floor(),
            ..self.clone()
        }
    }

    pub fn order_by(&self) -> &str {
        self.order_by
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_ORDER_BY)
    }

    /// Query parameters for a filtered catalog listing, in request order.
    pub fn query_params(&self, page: u32, limit: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", page.to_string()),
            ("limit", limit.to_string()),
            ("order_by", self.order_by().to_string()),
            ("sort", self.sort.to_string()),
        ];

        if !self.genres.is_empty() {
            let joined = self
                .genres
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(",");
            params.push(("genres", joined));
        }
        push_set(&mut params, "type", &self.kind);
        push_set(&mut params, "status", &self.status);
        push_set(&mut params, "season", &self.season);
        if let Some(year) = self.start_year {
            params.push(("start_date", format!("{year}-01-01")));
        }
        if let Some(year) = self.end_year {
            params.push(("end_date", format!("{year}-12-31")));
        }
        push_set(&mut params, "rating", &self.rating);
        // The catalog has no source-material filter; the closest knob is `producers`.
        push_set(&mut params, "producers", &self.source);
        if self.score_floor() > SCORE_FLOOR_DEFAULT {
            params.push(("min_score", self.score_floor().to_string()));
        }
        if let Some(bucket) = self.episodes {
            let (min, max) = bucket.bounds();
            if let Some(min) = min {
                params.push(("min_episodes", min.to_string()));
            }
            if let Some(max) = max {
                params.push(("max_episodes", max.to_string()));
            }
        }

        params
    }
}

fn is_unset(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

fn push_set(params: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(v) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        params.push((key, v.to_string()));
    }
}
