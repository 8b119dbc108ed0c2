use thiserror::Error;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PER_PAGE: u32 = 5;
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("{param} must be a valid integer, got '{value}'")]
    NotAnInteger { param: &'static str, value: String },

    #[error("{param} must be a valid boolean, got '{value}'")]
    NotABoolean { param: &'static str, value: String },

    #[error("{param} must be greater than or equal to {min}")]
    TooSmall { param: &'static str, min: u64 },

    #[error("{param} must be less than or equal to {max}")]
    TooLarge { param: &'static str, max: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    ActivityDesc,
    ActivityAsc,
    NameAsc,
    NameDesc,
    /// Unrecognized sort value: keep post-filter order.
    Unsorted,
}

impl SortMode {
    pub fn parse(value: &str) -> Self {
        match value {
            "activity_desc" => SortMode::ActivityDesc,
            "activity_asc" => SortMode::ActivityAsc,
            "name_asc" => SortMode::NameAsc,
            "name_desc" => SortMode::NameDesc,
            _ => SortMode::Unsorted,
        }
    }
}

/// Validated parameters for `GET /api/candidates`.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateQuery {
    pub search: Option<String>,
    pub page: u64,
    pub per_page: u32,
    pub application_type: Vec<String>,
    pub job_id: Vec<String>,
    pub source: Vec<String>,
    pub has_availability: Option<bool>,
    pub has_interviews: Option<bool>,
    pub full_text_search: bool,
    pub sort: SortMode,
}

impl Default for CandidateQuery {
    fn default() -> Self {
        Self {
            search: None,
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            application_type: Vec::new(),
            job_id: Vec::new(),
            source: Vec::new(),
            has_availability: None,
            has_interviews: None,
            full_text_search: false,
            sort: SortMode::default(),
        }
    }
}

impl CandidateQuery {
    /// Builds the query from decoded `key=value` pairs in query-string order.
    ///
    /// List parameters collect every occurrence. Scalar parameters keep the
    /// last occurrence. Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = CandidateQuery::default();

        for (key, value) in pairs {
            let value: String = value.into();
            match key.as_ref() {
                "search" => query.search = Some(value).filter(|s| !s.is_empty()),
                "page" => query.page = parse_int("page", &value)?,
                "per_page" => {
                    // Anything past u32 is over the bound; `validate` reports it.
                    let per_page = match parse_int("per_page", &value) {
                        Err(QueryError::TooLarge { .. }) => u64::MAX,
                        other => other?,
                    };
                    query.per_page = u32::try_from(per_page).unwrap_or(u32::MAX);
                }
                "application_type" => query.application_type.push(value),
                "job_id" => query.job_id.push(value),
                "source" => query.source.push(value),
                "has_availability" => {
                    query.has_availability = Some(parse_bool("has_availability", &value)?)
                }
                "has_interviews" => {
                    query.has_interviews = Some(parse_bool("has_interviews", &value)?)
                }
                "full_text_search" => {
                    query.full_text_search = parse_bool("full_text_search", &value)?
                }
                "sort" => query.sort = SortMode::parse(&value),
                _ => {}
            }
        }

        query.validate()?;
        Ok(query)
    }

    fn validate(&self) -> Result<(), QueryError> {
        if self.page < 1 {
            return Err(QueryError::TooSmall {
                param: "page",
                min: 1,
            });
        }
        if self.per_page < 1 {
            return Err(QueryError::TooSmall {
                param: "per_page",
                min: 1,
            });
        }
        if self.per_page > MAX_PER_PAGE {
            return Err(QueryError::TooLarge {
                param: "per_page",
                max: u64::from(MAX_PER_PAGE),
            });
        }
        Ok(())
    }
}

/// Parses a positive integer. Any well-formed integer below 1 is `TooSmall`
/// and any above `u64::MAX` is `TooLarge`, however many digits it has.
fn parse_int(param: &'static str, value: &str) -> Result<u64, QueryError> {
    let trimmed = value.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(QueryError::NotAnInteger {
            param,
            value: value.to_string(),
        });
    }
    if negative || digits.bytes().all(|b| b == b'0') {
        return Err(QueryError::TooSmall { param, min: 1 });
    }

    digits.parse::<u64>().map_err(|_| QueryError::TooLarge {
        param,
        max: u64::MAX,
    })
}

fn parse_bool(param: &'static str, value: &str) -> Result<bool, QueryError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Ok(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Ok(false),
        _ => Err(QueryError::NotABoolean {
            param,
            value: value.to_string(),
        }),
    }
}
