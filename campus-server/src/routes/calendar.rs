//! Calendar endpoints

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use campus_core::calendar::{CalendarCursor, DayCell, MonthGrid, Navigation};
use campus_core::event::{EventCategory, ResolvedEvent};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/schedules", get(list_schedules))
        .route("/api/schedules/{name}/month", get(month))
        .route("/api/schedules/{name}/days/{date}", get(day))
        .route("/api/schedules/{name}/navigate", post(navigate))
}

/// Event as handed to the page: title, category for styling, detail for tooltips
#[derive(Serialize)]
pub struct EventView {
    pub title: String,
    pub category: EventCategory,
    pub detail: String,
}

impl From<&ResolvedEvent> for EventView {
    fn from(event: &ResolvedEvent) -> Self {
        EventView {
            title: event.title.clone(),
            category: event.category(),
            detail: event.detail(),
        }
    }
}

#[derive(Serialize)]
pub struct DayView {
    pub date: NaiveDate,
    pub day: u32,
    pub is_other_month: bool,
    pub is_today: bool,
    pub events: Vec<EventView>,
}

impl From<&DayCell> for DayView {
    fn from(cell: &DayCell) -> Self {
        DayView {
            date: cell.date,
            day: cell.date.day(),
            is_other_month: cell.is_other_month,
            is_today: cell.is_today,
            events: cell.events.iter().map(EventView::from).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct MonthView {
    pub title: String,
    pub year: i32,
    /// 1 = January
    pub month: u32,
    pub cells: Vec<DayView>,
}

impl From<&MonthGrid> for MonthView {
    fn from(grid: &MonthGrid) -> Self {
        MonthView {
            title: grid.cursor.to_string(),
            year: grid.cursor.year(),
            month: grid.cursor.month().number_from_month(),
            cells: grid.cells.iter().map(DayView::from).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct ScheduleInfo {
    pub name: String,
    pub title: String,
    pub year: i32,
    pub month: u32,
}

/// GET /api/schedules - List schedules and the month each one is showing
async fn list_schedules(State(state): State<AppState>) -> Result<Json<Vec<ScheduleInfo>>, AppError> {
    let mut schedules = Vec::new();

    for name in state.schedule_names() {
        let cursor = state.calendar(name)?.cursor();
        schedules.push(ScheduleInfo {
            name: name.to_string(),
            title: cursor.to_string(),
            year: cursor.year(),
            month: cursor.month().number_from_month(),
        });
    }

    Ok(Json(schedules))
}

#[derive(Deserialize)]
pub struct MonthQuery {
    pub year: Option<i32>,
    /// 1 = January
    pub month: Option<u32>,
}

/// GET /api/schedules/:name/month - Grid for a month, defaulting to the schedule's cursor
async fn month(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthView>, AppError> {
    let calendar = state.calendar(&name)?;
    let current = calendar.cursor();

    let year = query.year.unwrap_or(current.year());
    let month = query.month.unwrap_or(current.month().number_from_month());
    let cursor = CalendarCursor::from_number(year, month)
        .ok_or_else(|| AppError::bad_request(format!("Invalid month {}. Expected 1-12", month)))?;

    let grid = calendar.build_month_grid(cursor);
    Ok(Json(MonthView::from(&grid)))
}

#[derive(Serialize)]
pub struct DayEvents {
    pub date: NaiveDate,
    pub events: Vec<EventView>,
}

/// GET /api/schedules/:name/days/:date - Events on one date
async fn day(
    State(state): State<AppState>,
    Path((name, date)): Path<(String, String)>,
) -> Result<Json<DayEvents>, AppError> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|_| {
        AppError::bad_request(format!("Invalid date format '{}'. Expected YYYY-MM-DD", date))
    })?;

    let events = state.calendar(&name)?.resolve_events_for_date(date);

    Ok(Json(DayEvents {
        date,
        events: events.iter().map(EventView::from).collect(),
    }))
}

#[derive(Deserialize)]
pub struct NavigateRequest {
    pub direction: Navigation,
}

/// POST /api/schedules/:name/navigate - Move the schedule's cursor and return the new grid
async fn navigate(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<NavigateRequest>,
) -> Result<Json<MonthView>, AppError> {
    let grid = state.calendar(&name)?.navigate(req.direction);
    Ok(Json(MonthView::from(&grid)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::test_support::{app, send};

    #[tokio::test]
    async fn december_2024_grid() {
        let (_dir, app) = app("");

        let (status, body) = send(&app, "GET", "/api/schedules/courses/month?year=2024&month=12", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "December 2024");

        let cells = body["cells"].as_array().unwrap();
        assert_eq!(cells.len(), 42);
        assert_eq!(cells[0]["date"], "2024-12-01");
        assert_eq!(cells[0]["is_other_month"], false);

        let christmas = &cells[24];
        assert_eq!(christmas["date"], "2024-12-25");
        assert_eq!(christmas["events"][0]["title"], "Christmas Day");
        assert_eq!(christmas["events"][0]["category"], "holiday");
        assert_eq!(christmas["events"][1]["category"], "course");
        assert_eq!(christmas["events"][1]["detail"], "09:00-10:30 - Room 201");
    }

    #[tokio::test]
    async fn day_events_for_meetings() {
        let (_dir, app) = app("");

        let (status, body) = send(&app, "GET", "/api/schedules/meetings/days/2024-12-15", None).await;

        // Sunday: the dated meeting only
        assert_eq!(status, StatusCode::OK);
        let events = body["events"].as_array().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["title"], "ER Meeting");
        assert_eq!(events[0]["category"], "meeting");
    }

    #[tokio::test]
    async fn navigation_moves_cursor_per_schedule() {
        let (_dir, app) = app("");

        let (_, today) = send(&app, "POST", "/api/schedules/courses/navigate", Some(json!({ "direction": "today" }))).await;
        let (_, next) = send(&app, "POST", "/api/schedules/courses/navigate", Some(json!({ "direction": "next" }))).await;
        let (_, back) = send(&app, "POST", "/api/schedules/courses/navigate", Some(json!({ "direction": "previous" }))).await;

        assert_ne!(today["title"], next["title"]);
        assert_eq!(today["title"], back["title"]);

        // The meetings cursor was never moved
        let (_, meetings) = send(&app, "GET", "/api/schedules/meetings/month", None).await;
        assert_eq!(meetings["title"], today["title"]);
    }

    #[tokio::test]
    async fn unknown_schedule_is_not_found() {
        let (_dir, app) = app("");

        let (status, body) = send(&app, "GET", "/api/schedules/labs/month", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Schedule not found: labs");
    }

    #[tokio::test]
    async fn invalid_inputs_are_bad_requests() {
        let (_dir, app) = app("");

        let (status, _) = send(&app, "GET", "/api/schedules/courses/month?year=2024&month=13", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "GET", "/api/schedules/courses/days/2024-13-01", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn lists_schedules() {
        let (_dir, app) = app("");

        let (status, body) = send(&app, "GET", "/api/schedules", None).await;

        assert_eq!(status, StatusCode::OK);
        let names: Vec<_> = body.as_array().unwrap().iter().map(|s| s["name"].clone()).collect();
        assert_eq!(names, [json!("courses"), json!("meetings")]);
    }
}
