use async_trait::async_trait;
use chrono::NaiveDate;

use crate::ride::application::domain::entities::Ride;
use crate::ride::application::ports::outgoing::RideSearchCriteria;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRidesQuery {
    criteria: RideSearchCriteria,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SearchRidesQueryError {
    #[error("Date must use the YYYY-MM-DD format")]
    InvalidDate,
}

impl SearchRidesQuery {
    /// Blank filters are dropped so the search falls back to all active rides.
    pub fn new(
        from: Option<String>,
        to: Option<String>,
        date: Option<String>,
    ) -> Result<Self, SearchRidesQueryError> {
        let clean = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

        let departure_date = match clean(date) {
            Some(raw) => Some(
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|_| SearchRidesQueryError::InvalidDate)?,
            ),
            None => None,
        };

        Ok(Self {
            criteria: RideSearchCriteria {
                from: clean(from),
                to: clean(to),
                departure_date,
            },
        })
    }

    pub fn criteria(&self) -> &RideSearchCriteria {
        &self.criteria
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchRidesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait SearchRidesUseCase: Send + Sync {
    async fn execute(&self, query: SearchRidesQuery) -> Result<Vec<Ride>, SearchRidesError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filters_are_dropped() {
        let query = SearchRidesQuery::new(Some(" ".to_string()), None, Some("".to_string()))
            .unwrap();
        assert_eq!(query.criteria(), &RideSearchCriteria::default());
    }

    #[test]
    fn filters_are_trimmed_and_date_parsed() {
        let query = SearchRidesQuery::new(
            Some(" Pune ".to_string()),
            Some("Mumbai".to_string()),
            Some("2030-01-15".to_string()),
        )
        .unwrap();

        let criteria = query.criteria();
        assert_eq!(criteria.from.as_deref(), Some("Pune"));
        assert_eq!(criteria.to.as_deref(), Some("Mumbai"));
        assert_eq!(criteria.departure_date, NaiveDate::from_ymd_opt(2030, 1, 15));
    }

    #[test]
    fn bad_date_is_rejected() {
        assert_eq!(
            SearchRidesQuery::new(None, None, Some("tomorrow".to_string())).unwrap_err(),
            SearchRidesQueryError::InvalidDate
        );
    }
}
