//! Single binary web server: JSON API over the tournament engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Tournaments idle for TOURNAMENT_IDLE_HOURS (default 12) are dropped.

use actix_web::{
    get, post,
    web::{self, Bytes, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use football_tournament_web::{
    export, qualifiers_with_thirds, record_knockout_results, start_knockout, BracketTemplate,
    Tournament, TournamentError, TournamentId,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state: many tournaments by ID. Each RwLock write serializes mutations.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize, Default)]
struct CreateTournamentBody {
    /// Custom first-round pairings; the Euro 2024 table when absent.
    #[serde(default)]
    template: Option<BracketTemplate>,
}

#[derive(Deserialize)]
struct NameBody {
    name: String,
}

#[derive(Deserialize)]
struct MatchBody {
    team_1: String,
    goals_1: u32,
    team_2: String,
    goals_2: u32,
}

#[derive(Deserialize)]
struct RoundResultsBody {
    /// `[team_1 goals, team_2 goals]` per node, in node order.
    results: Vec<(u32, u32)>,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and group name (e.g. /api/tournaments/{id}/groups/{group})
#[derive(Deserialize)]
struct TournamentGroupPath {
    id: TournamentId,
    group: String,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" }))
}

fn bad_request(e: TournamentError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

/// Run a mutation on one tournament under the write lock and reply with the updated tournament.
fn mutate<F>(state: &AppState, id: TournamentId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Tournament) -> Result<(), TournamentError>,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    let t = &mut entry.tournament;
    match f(t) {
        Ok(()) => HttpResponse::Ok().json(&*t),
        Err(e) => bad_request(e),
    }
}

/// Read one tournament; touching it refreshes last_activity.
fn inspect<F>(state: &AppState, id: TournamentId, f: F) -> HttpResponse
where
    F: FnOnce(&Tournament) -> HttpResponse,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            f(&entry.tournament)
        }
        None => not_found(),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "football-tournament-web",
    })
}

/// Create a new tournament (returns it with id; client stores id for subsequent requests).
/// An empty body uses the Euro 2024 bracket; a supplied template that fails validation is a 400.
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Bytes) -> HttpResponse {
    let parsed = if body.iter().all(u8::is_ascii_whitespace) {
        CreateTournamentBody::default()
    } else {
        match serde_json::from_slice::<CreateTournamentBody>(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
            }
        }
    };
    let template = parsed.template.unwrap_or_default();
    let tournament = Tournament::with_template(template);
    let id = tournament.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let response = HttpResponse::Ok().json(&tournament);
    g.insert(
        id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    log::info!("Created tournament {}", id);
    response
}

/// Get a tournament by id (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    inspect(&state, path.id, |t| HttpResponse::Ok().json(t))
}

/// Create a group (group stage only).
#[post("/api/tournaments/{id}/groups")]
async fn api_add_group(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<NameBody>,
) -> HttpResponse {
    mutate(&state, path.id, |t| t.add_group(body.name.as_str()))
}

/// Add a team to a group (group stage only).
#[post("/api/tournaments/{id}/groups/{group}/teams")]
async fn api_add_team(
    state: AppState,
    path: Path<TournamentGroupPath>,
    body: Json<NameBody>,
) -> HttpResponse {
    mutate(&state, path.id, |t| t.add_team(&path.group, body.name.as_str()))
}

/// Record a group match result.
#[post("/api/tournaments/{id}/groups/{group}/matches")]
async fn api_record_match(
    state: AppState,
    path: Path<TournamentGroupPath>,
    body: Json<MatchBody>,
) -> HttpResponse {
    mutate(&state, path.id, |t| {
        t.record_match(
            &path.group,
            body.team_1.trim(),
            body.goals_1,
            body.team_2.trim(),
            body.goals_2,
        )
    })
}

/// Ranked standings of one group.
#[get("/api/tournaments/{id}/groups/{group}/standings")]
async fn api_group_standings(state: AppState, path: Path<TournamentGroupPath>) -> HttpResponse {
    inspect(&state, path.id, |t| match t.standings(&path.group) {
        Ok(standings) => HttpResponse::Ok().json(standings),
        Err(e) => bad_request(e),
    })
}

/// All standings as a CSV download.
#[get("/api/tournaments/{id}/standings.csv")]
async fn api_standings_csv(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    inspect(&state, path.id, |t| {
        let mut buf = Vec::new();
        match export::write_standings_csv(t, &mut buf) {
            Ok(()) => HttpResponse::Ok()
                .content_type("text/csv; charset=utf-8")
                .insert_header((
                    "Content-Disposition",
                    "attachment; filename=\"standings.csv\"",
                ))
                .body(buf),
            Err(e) => bad_request(e),
        }
    })
}

/// Import group match results from a CSV body (all rows or none).
#[post("/api/tournaments/{id}/matches/import")]
async fn api_import_matches(
    state: AppState,
    path: Path<TournamentPath>,
    body: String,
) -> HttpResponse {
    mutate(&state, path.id, |t| {
        export::import_match_results(t, body.as_bytes()).map(|_| ())
    })
}

/// Preview who would qualify if the group stage ended now.
#[get("/api/tournaments/{id}/qualifiers")]
async fn api_qualifiers(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    inspect(&state, path.id, |t| {
        if let Some(q) = &t.qualifiers {
            return HttpResponse::Ok().json(q);
        }
        match qualifiers_with_thirds(&t.groups, t.template.third_place_count()) {
            Ok(q) => HttpResponse::Ok().json(q),
            Err(e) => bad_request(e),
        }
    })
}

/// Close the group stage and build the first knockout round.
#[post("/api/tournaments/{id}/knockout/start")]
async fn api_start_knockout(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    mutate(&state, path.id, start_knockout)
}

/// Submit the current knockout round's scores.
#[post("/api/tournaments/{id}/knockout/results")]
async fn api_knockout_results(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<RoundResultsBody>,
) -> HttpResponse {
    mutate(&state, path.id, |t| record_knockout_results(t, &body.results))
}

/// Register every API route.
fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(api_create_tournament)
        .service(api_get_tournament)
        .service(api_add_group)
        .service(api_add_team)
        .service(api_record_match)
        .service(api_group_standings)
        .service(api_standings_csv)
        .service(api_import_matches)
        .service(api_qualifiers)
        .service(api_start_knockout)
        .service(api_knockout_results);
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_idle_hours() -> u64 {
    12
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let idle_hours: u64 = std::env::var("TOURNAMENT_IDLE_HOURS")
        .ok()
        .and_then(|h| h.parse().ok())
        .unwrap_or_else(default_idle_hours);
    let inactivity_timeout = Duration::from_secs(idle_hours * 3600);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));

    // Background task: every 30 minutes, remove idle tournaments
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < inactivity_timeout);
            let removed = before - g.len();
            if removed > 0 {
                log::info!(
                    "Cleaned up {} inactive tournament(s) (no activity for {}h)",
                    removed,
                    idle_hours
                );
            }
        }
    });

    HttpServer::new(move || {
        App::new().app_data(state.clone()).configure(routes)
    })
    .bind(bind)?
    .run()
    .await
}
