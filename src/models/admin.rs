use chrono::{NaiveDate, NaiveDateTime};

/// Bucket size of the cost analysis report
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PeriodType {
    #[default]
    Month,
    Quarter,
}

impl PeriodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodType::Month => "month",
            PeriodType::Quarter => "quarter",
        }
    }
}

/// Inclusive day range (`start_date` / `end_date` query parameters)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CostAnalysisQuery {
    pub range: DateRange,
    pub period_type: PeriodType,
}

impl From<DateRange> for CostAnalysisQuery {
    fn from(range: DateRange) -> Self {
        Self {
            range,
            period_type: PeriodType::default(),
        }
    }
}

/// Timestamp window (`start_time` / `end_time` query parameters)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimeRange {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}
