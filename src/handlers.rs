use crate::errors::AppError;
use crate::format::format_time_label;
use crate::models::{
    ReadingRecord, ReadingRequest, ReadingRow, ReadingsResponse, TodayEntry, TodayResponse,
    TrendPoint, VisitRecord, WeeklyStats,
};
use crate::state::{AppState, READINGS_SHEET, VISITS_SHEET};
use crate::stats::{today_visits, weekly_stats};
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};
use chrono::NaiveDateTime;

/// How many readings feed the trend line and the recent table.
const RECENT_READINGS: usize = 10;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let today = state.clock.today();
    let visits: Vec<VisitRecord> = state.store.load(VISITS_SHEET).await?;
    let count = today_visits(today, &visits).len();
    Ok(Html(render_index(&today.to_string(), count)))
}

pub async fn record_visit_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    record_visit_inner(&state).await?;
    Ok(Redirect::to("/"))
}

pub async fn record_visit(State(state): State<AppState>) -> Result<Json<TodayResponse>, AppError> {
    record_visit_inner(&state).await?;
    let response = build_today(&state).await?;
    Ok(Json(response))
}

pub async fn get_today(State(state): State<AppState>) -> Result<Json<TodayResponse>, AppError> {
    let response = build_today(&state).await?;
    Ok(Json(response))
}

pub async fn get_weekly(State(state): State<AppState>) -> Result<Json<WeeklyStats>, AppError> {
    let visits: Vec<VisitRecord> = state.store.load(VISITS_SHEET).await?;
    Ok(Json(weekly_stats(state.clock.today(), &visits)))
}

pub async fn record_reading(
    State(state): State<AppState>,
    Json(payload): Json<ReadingRequest>,
) -> Result<Json<ReadingRecord>, AppError> {
    validate_reading(&payload)?;

    let stamp = state.clock.stamp();
    let record = ReadingRecord {
        date: stamp.date,
        time: stamp.time,
        datetime: stamp.datetime,
        systolic: payload.systolic,
        diastolic: payload.diastolic,
        pulse: payload.pulse,
        memo: payload.memo,
    };
    state.store.append(READINGS_SHEET, &record).await?;

    Ok(Json(record))
}

pub async fn get_readings(State(state): State<AppState>) -> Result<Json<ReadingsResponse>, AppError> {
    let readings: Vec<ReadingRecord> = state.store.load(READINGS_SHEET).await?;

    let latest = readings.last().map(to_row);

    let tail_start = readings.len().saturating_sub(RECENT_READINGS);
    let trend = readings[tail_start..]
        .iter()
        .map(|reading| TrendPoint {
            label: trend_label(reading),
            systolic: reading.systolic,
            diastolic: reading.diastolic,
        })
        .collect();

    let recent = readings[tail_start..].iter().rev().map(to_row).collect();

    Ok(Json(ReadingsResponse {
        latest,
        trend,
        recent,
    }))
}

async fn record_visit_inner(state: &AppState) -> Result<(), AppError> {
    let record = VisitRecord::from_stamp(state.clock.stamp());
    state.store.append(VISITS_SHEET, &record).await?;
    Ok(())
}

async fn build_today(state: &AppState) -> Result<TodayResponse, AppError> {
    let today = state.clock.today();
    let visits: Vec<VisitRecord> = state.store.load(VISITS_SHEET).await?;
    let todays = today_visits(today, &visits);

    let entries = todays
        .iter()
        .enumerate()
        .map(|(index, visit)| TodayEntry {
            seq: index + 1,
            label: format_time_label(&visit.time),
        })
        .collect();

    Ok(TodayResponse {
        date: today.to_string(),
        count: todays.len() as u64,
        entries,
    })
}

fn validate_reading(payload: &ReadingRequest) -> Result<(), AppError> {
    if !(60..=250).contains(&payload.systolic) {
        return Err(AppError::bad_request("systolic must be between 60 and 250"));
    }
    if !(40..=150).contains(&payload.diastolic) {
        return Err(AppError::bad_request("diastolic must be between 40 and 150"));
    }
    if !(40..=200).contains(&payload.pulse) {
        return Err(AppError::bad_request("pulse must be between 40 and 200"));
    }
    Ok(())
}

fn to_row(reading: &ReadingRecord) -> ReadingRow {
    ReadingRow {
        datetime: reading.datetime.clone(),
        systolic: reading.systolic,
        diastolic: reading.diastolic,
        pulse: reading.pulse,
    }
}

// Chart label as "MM/DD", falling back to the raw date field for rows whose
// datetime no longer parses.
fn trend_label(reading: &ReadingRecord) -> String {
    match NaiveDateTime::parse_from_str(&reading.datetime, "%Y-%m-%d %H:%M:%S") {
        Ok(parsed) => parsed.format("%m/%d").to_string(),
        Err(_) => reading.date.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(systolic: u16, diastolic: u16, pulse: u16) -> ReadingRequest {
        ReadingRequest {
            systolic,
            diastolic,
            pulse,
            memo: String::new(),
        }
    }

    #[test]
    fn reading_bounds_match_the_entry_form() {
        assert!(validate_reading(&request(120, 80, 70)).is_ok());
        assert!(validate_reading(&request(59, 80, 70)).is_err());
        assert!(validate_reading(&request(251, 80, 70)).is_err());
        assert!(validate_reading(&request(120, 39, 70)).is_err());
        assert!(validate_reading(&request(120, 151, 70)).is_err());
        assert!(validate_reading(&request(120, 80, 39)).is_err());
        assert!(validate_reading(&request(120, 80, 201)).is_err());
    }

    #[test]
    fn trend_label_uses_month_day_with_date_fallback() {
        let mut reading = ReadingRecord {
            datetime: "2024-06-10 16:10:00".to_string(),
            date: "2024-06-10".to_string(),
            ..ReadingRecord::default()
        };
        assert_eq!(trend_label(&reading), "06/10");

        reading.datetime = "garbage".to_string();
        assert_eq!(trend_label(&reading), "2024-06-10");
    }
}
