//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_files::Files;
use actix_web::{
    get, post, put,
    web::{self, Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;
use volleyball_rotation_web::{
    lineup, resolve, roster_from_csv, rotation_chart, rotation_chart_csv, Planner, PlannerId,
    PlayerUpdate, Seat,
};

/// Per-planner entry: planner data + last activity time (for auto-cleanup).
struct PlannerEntry {
    planner: Planner,
    last_activity: Instant,
}

/// In-memory state: many planners by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<PlannerId, PlannerEntry>>>;

/// Inactivity threshold: planners not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Default, Deserialize)]
struct CreatePlannerBody {
    /// Optional roster CSV (`seat,name,number,role`); default roster when absent.
    #[serde(default)]
    csv: Option<String>,
}

#[derive(Deserialize)]
struct SetRotationBody {
    rotation: i64,
}

/// Optional `?rotation=` override; defaults to the planner's current rotation.
#[derive(Deserialize)]
struct RotationQuery {
    rotation: Option<i64>,
}

#[derive(Deserialize)]
struct PlannerPath {
    id: PlannerId,
}

#[derive(Deserialize)]
struct PlannerPlayerPath {
    id: PlannerId,
    player_id: Uuid,
}

#[derive(Deserialize)]
struct PlannerSeatPath {
    id: PlannerId,
    seat: u8,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No planner" }))
}

fn bad_request(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

/// Look up a planner, refresh its activity time and run `f` on it.
fn with_planner<F>(state: &AppState, id: PlannerId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Planner) -> HttpResponse,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            f(&mut entry.planner)
        }
        None => not_found(),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "volleyball-rotation-web",
    })
}

#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new planner (returns it with id; client stores id for subsequent requests).
/// An empty body means the default roster; a body that is present must be valid JSON.
#[post("/api/planners")]
async fn api_create_planner(state: AppState, body: web::Bytes) -> HttpResponse {
    let body: CreatePlannerBody = if body.iter().all(u8::is_ascii_whitespace) {
        CreatePlannerBody::default()
    } else {
        match serde_json::from_slice(&body) {
            Ok(b) => b,
            Err(e) => return bad_request(format!("Invalid request body: {}", e)),
        }
    };
    let planner = match body.csv {
        Some(csv) => match roster_from_csv(&csv) {
            Ok(roster) => Planner::with_roster(roster),
            Err(e) => return bad_request(e),
        },
        None => Planner::new(),
    };
    let id = planner.id;
    let response = HttpResponse::Ok().json(&planner);
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        PlannerEntry {
            planner,
            last_activity: Instant::now(),
        },
    );
    log::info!("Created planner {}", id);
    response
}

#[get("/api/planners/{id}")]
async fn api_get_planner(state: AppState, path: Path<PlannerPath>) -> HttpResponse {
    with_planner(&state, path.id, |p| HttpResponse::Ok().json(&*p))
}

/// Edit a player's name / number / role.
#[put("/api/planners/{id}/players/{player_id}")]
async fn api_update_player(
    state: AppState,
    path: Path<PlannerPlayerPath>,
    body: Json<PlayerUpdate>,
) -> HttpResponse {
    with_planner(&state, path.id, |p| match p.update_player(path.player_id, &body) {
        Ok(()) => HttpResponse::Ok().json(&*p),
        Err(e) => bad_request(e),
    })
}

#[post("/api/planners/{id}/rotation/next")]
async fn api_next_rotation(state: AppState, path: Path<PlannerPath>) -> HttpResponse {
    with_planner(&state, path.id, |p| {
        p.next_rotation();
        HttpResponse::Ok().json(&*p)
    })
}

#[post("/api/planners/{id}/rotation/previous")]
async fn api_previous_rotation(state: AppState, path: Path<PlannerPath>) -> HttpResponse {
    with_planner(&state, path.id, |p| {
        p.previous_rotation();
        HttpResponse::Ok().json(&*p)
    })
}

#[put("/api/planners/{id}/rotation")]
async fn api_set_rotation(
    state: AppState,
    path: Path<PlannerPath>,
    body: Json<SetRotationBody>,
) -> HttpResponse {
    with_planner(&state, path.id, |p| match p.set_rotation(body.rotation) {
        Ok(()) => HttpResponse::Ok().json(&*p),
        Err(e) => bad_request(e),
    })
}

/// All 11 seats at the current (or `?rotation=`) rotation.
#[get("/api/planners/{id}/lineup")]
async fn api_lineup(
    state: AppState,
    path: Path<PlannerPath>,
    query: Query<RotationQuery>,
) -> HttpResponse {
    with_planner(&state, path.id, |p| {
        let rotation = query.rotation.unwrap_or_else(|| i64::from(p.rotation));
        HttpResponse::Ok().json(lineup(rotation, &p.roster))
    })
}

/// Single seat lookup; `null` when the seat is empty.
#[get("/api/planners/{id}/seats/{seat}")]
async fn api_resolve_seat(
    state: AppState,
    path: Path<PlannerSeatPath>,
    query: Query<RotationQuery>,
) -> HttpResponse {
    let seat = match Seat::from_number(path.seat) {
        Ok(s) => s,
        Err(e) => return bad_request(e),
    };
    with_planner(&state, path.id, |p| {
        let rotation = query.rotation.unwrap_or_else(|| i64::from(p.rotation));
        HttpResponse::Ok().json(resolve(rotation, seat, &p.roster))
    })
}

#[get("/api/planners/{id}/chart")]
async fn api_chart(state: AppState, path: Path<PlannerPath>) -> HttpResponse {
    with_planner(&state, path.id, |p| HttpResponse::Ok().json(rotation_chart(&p.roster)))
}

#[get("/api/planners/{id}/chart.csv")]
async fn api_chart_csv(state: AppState, path: Path<PlannerPath>) -> HttpResponse {
    with_planner(&state, path.id, |p| match rotation_chart_csv(&p.roster) {
        Ok(csv) => HttpResponse::Ok().content_type("text/csv; charset=utf-8").body(csv),
        Err(e) => {
            log::error!("chart export failed for planner {}: {}", p.id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
    })
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(serve_index_async))
        .service(api_health)
        .service(favicon)
        .service(api_create_planner)
        .service(api_get_planner)
        .service(api_update_player)
        .service(api_next_rotation)
        .service(api_previous_rotation)
        .service(api_set_rotation)
        .service(api_lineup)
        .service(api_resolve_seat)
        .service(api_chart_csv)
        .service(api_chart);
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

    let state = Data::new(RwLock::new(HashMap::<PlannerId, PlannerEntry>::new()));

    // Background task: every 30 minutes, remove planners inactive for 12+ hours
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
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive planner(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(configure)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
