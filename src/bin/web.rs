//! HTTP surface for the cup engine: stateless JSON endpoints for groups,
//! fixtures, calendar, standings and knockout, plus in-memory prize-draw
//! sessions with a step-by-step reveal.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.

use actix_web::{
    get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::NaiveDate;
use cup_engine::{
    allocate_round_dates, assign_groups, canonicalize_text, compute_standings, draw_audit_csv,
    generate_fixtures, run_prize_draw, saturdays_between, seed_knockout, AliasTable, DrawConfig,
    DrawId, DrawState, EngineError, Entrant, Fixture, GroupAssignment, GroupingConfig,
    KnockoutConfig, PointsConfig, RoundSpec, ScheduleConfig, Standing,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Per-draw entry: draw state + last activity time (for auto-cleanup).
struct DrawEntry {
    draw: DrawState,
    last_activity: Instant,
}

/// In-memory draw sessions by id. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<DrawId, DrawEntry>>>;

/// Inactivity threshold: draws not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct DrawResponse<'a> {
    id: DrawId,
    draw: &'a DrawState,
    revealed_winners: &'a [String],
    complete: bool,
}

#[derive(Deserialize)]
struct GroupsBody {
    entrants: Vec<Entrant>,
    grouping: GroupingConfig,
}

#[derive(Deserialize)]
struct FixturesBody {
    assignments: Vec<GroupAssignment>,
    schedule: ScheduleConfig,
}

#[derive(Deserialize)]
struct DateWindow {
    start: NaiveDate,
    end: NaiveDate,
}

/// Either explicit dates or a window whose Saturdays are used.
#[derive(Deserialize)]
struct CalendarBody {
    #[serde(default)]
    dates: Vec<NaiveDate>,
    #[serde(default)]
    saturdays: Option<DateWindow>,
    rounds: Vec<RoundSpec>,
}

#[derive(Deserialize)]
struct StandingsBody {
    fixtures: Vec<Fixture>,
    assignments: Vec<GroupAssignment>,
    points: PointsConfig,
}

#[derive(Deserialize)]
struct KnockoutBody {
    standings: Vec<Standing>,
    assignments: Vec<GroupAssignment>,
    knockout: KnockoutConfig,
}

#[derive(Deserialize)]
struct CreateDrawBody {
    seed: String,
    /// Newline-delimited entry list, as pasted.
    names: String,
    winners: usize,
    #[serde(default)]
    legacy_aliases: bool,
}

/// Path segment: draw id (e.g. /api/draws/{id})
#[derive(Deserialize)]
struct DrawPath {
    id: DrawId,
}

fn engine_error(e: &EngineError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string(), "kind": e.kind() }))
}

fn draw_response(id: DrawId, draw: &DrawState) -> HttpResponse {
    HttpResponse::Ok().json(DrawResponse {
        id,
        draw,
        revealed_winners: draw.revealed_winners(),
        complete: draw.is_complete(),
    })
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "cup-engine",
    })
}

/// Deal entrants into groups.
#[post("/api/groups")]
async fn api_groups(body: Json<GroupsBody>) -> HttpResponse {
    match assign_groups(&body.entrants, &body.grouping) {
        Ok(assignments) => HttpResponse::Ok().json(assignments),
        Err(e) => engine_error(&e),
    }
}

/// Generate round-robin fixtures for the given groups.
#[post("/api/fixtures")]
async fn api_fixtures(body: Json<FixturesBody>) -> HttpResponse {
    HttpResponse::Ok().json(generate_fixtures(&body.assignments, &body.schedule))
}

/// Allocate dates to rounds (partial allocation is a normal result).
#[post("/api/calendar")]
async fn api_calendar(body: Json<CalendarBody>) -> HttpResponse {
    let dates = match &body.saturdays {
        Some(window) if body.dates.is_empty() => saturdays_between(window.start, window.end),
        _ => body.dates.clone(),
    };
    HttpResponse::Ok().json(allocate_round_dates(&dates, &body.rounds))
}

/// Compute ordered standings from the current fixture set.
#[post("/api/standings")]
async fn api_standings(body: Json<StandingsBody>) -> HttpResponse {
    HttpResponse::Ok().json(compute_standings(&body.fixtures, &body.assignments, &body.points))
}

/// Seed the knockout bracket from standings.
#[post("/api/knockout")]
async fn api_knockout(body: Json<KnockoutBody>) -> HttpResponse {
    match seed_knockout(&body.standings, &body.assignments, &body.knockout) {
        Ok(draw) => HttpResponse::Ok().json(draw),
        Err(e) => engine_error(&e),
    }
}

/// Run a seeded prize draw and keep it for the reveal.
#[post("/api/draws")]
async fn api_create_draw(state: AppState, body: Json<CreateDrawBody>) -> HttpResponse {
    let aliases = if body.legacy_aliases {
        AliasTable::legacy_clubs()
    } else {
        AliasTable::new()
    };
    let canonical = canonicalize_text(&body.names, &aliases);
    let draw = match run_prize_draw(&canonical, &body.seed, &DrawConfig { winners: body.winners }) {
        Ok(d) => d,
        Err(e) => return engine_error(&e),
    };
    let id = Uuid::new_v4();
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    log::info!("Draw {} created over {} name(s)", id, draw.canonical.len());
    let response = draw_response(id, &draw);
    g.insert(
        id,
        DrawEntry {
            draw,
            last_activity: Instant::now(),
        },
    );
    response
}

/// Get a draw by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/draws/{id}")]
async fn api_get_draw(state: AppState, path: Path<DrawPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            draw_response(path.id, &entry.draw)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No draw" })),
    }
}

/// Reveal the next winner.
#[post("/api/draws/{id}/reveal")]
async fn api_reveal_next(state: AppState, path: Path<DrawPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No draw" })),
    };
    entry.last_activity = Instant::now();
    if entry.draw.reveal_next().is_none() {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": "All winners already revealed" }));
    }
    draw_response(path.id, &entry.draw)
}

/// Download the audit record (full order, winners flagged) as CSV.
#[get("/api/draws/{id}/audit")]
async fn api_draw_audit(state: AppState, path: Path<DrawPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No draw" })),
    };
    match draw_audit_csv(&entry.draw) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"prize-draw-{}.csv\"", path.id),
            ))
            .body(csv),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<DrawId, DrawEntry>::new()));

    // Background task: every 30 minutes, remove draws inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive draw(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_groups)
            .service(api_fixtures)
            .service(api_calendar)
            .service(api_standings)
            .service(api_knockout)
            .service(api_create_draw)
            .service(api_get_draw)
            .service(api_reveal_next)
            .service(api_draw_audit)
    })
    .bind(bind)?
    .run()
    .await
}
