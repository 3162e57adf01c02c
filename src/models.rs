use crate::clock::Stamp;
use serde::{Deserialize, Serialize};

/// One toilet visit. Rows are append-only; fields default to empty strings so
/// a partially filled sheet row loads instead of failing, and an empty date
/// simply matches no bucket.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VisitRecord {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub datetime: String,
}

impl VisitRecord {
    pub fn from_stamp(stamp: Stamp) -> Self {
        Self {
            date: stamp.date,
            time: stamp.time,
            datetime: stamp.datetime,
        }
    }
}

/// One blood-pressure reading, same lifecycle as visits.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReadingRecord {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub datetime: String,
    #[serde(default)]
    pub systolic: u16,
    #[serde(default)]
    pub diastolic: u16,
    #[serde(default)]
    pub pulse: u16,
    #[serde(default)]
    pub memo: String,
}

#[derive(Debug, Deserialize)]
pub struct ReadingRequest {
    pub systolic: u16,
    pub diastolic: u16,
    pub pulse: u16,
    #[serde(default)]
    pub memo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayBucket {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct WeeklyStats {
    pub buckets: Vec<DayBucket>,
    pub total: u64,
    pub average: f64,
}

#[derive(Debug, Serialize)]
pub struct TodayEntry {
    pub seq: usize,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct TodayResponse {
    pub date: String,
    pub count: u64,
    pub entries: Vec<TodayEntry>,
}

#[derive(Debug, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub systolic: u16,
    pub diastolic: u16,
}

#[derive(Debug, Serialize)]
pub struct ReadingRow {
    pub datetime: String,
    pub systolic: u16,
    pub diastolic: u16,
    pub pulse: u16,
}

#[derive(Debug, Serialize)]
pub struct ReadingsResponse {
    pub latest: Option<ReadingRow>,
    pub trend: Vec<TrendPoint>,
    pub recent: Vec<ReadingRow>,
}
