//! festival — plan conflict-free routes through a small summer festival.
//!
//! Loads an embedded two-day programme, picks a selection for one visitor,
//! prints the three best routes and registers the visitor for every
//! selected event.  Routes are also written to `output/festival/`.
//!
//! Usage: `festival [config.json]`, where the optional file holds a
//! `PlannerConfig` (any subset of its fields).  Log level comes from
//! `RUST_LOG` (default `INFO`).

use std::env;
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use fr_catalog::{load_records_reader, EventCatalog, EventFilter, InvalidEventPolicy};
use fr_core::{EventId, UserId};
use fr_output::{CsvRouteWriter, JsonRouteWriter, PlanOutputObserver, RouteWriter};
use fr_planner::{PlanObserver, PlannerBuilder};
use fr_register::{MemoryRegistrationStore, RegistrationOutcome};
use fr_route::{DaySummary, PlannerConfig, RankedResult};

// ── Constants ─────────────────────────────────────────────────────────────────

const VISITOR:    UserId = UserId(1);
const OUTPUT_DIR: &str   = "output/festival";

// ── Programme CSV ─────────────────────────────────────────────────────────────

// Event 12 has a malformed start time and is skipped at load.
const PROGRAMME_CSV: &str = "\
id,name,type,location,date,start_time,duration,description\n\
1,Morning yoga,workshop,Lawn,2025-07-12,09:00,60,Mats provided\n\
2,Pottery workshop,workshop,Tent B,2025-07-12,10:00,90,Bring an apron\n\
3,Folk duo,concert,Side stage,2025-07-12,10:30,45,\n\
4,Food tasting,food,Market,2025-07-12,11:45,30,Local producers\n\
5,Brass band,concert,Main stage,2025-07-12,12:30,60,\n\
6,Street theatre,performance,Square,2025-07-12,13:00,40,\n\
7,Headliner,concert,Main stage,2025-07-12,20:00,120,\n\
8,Jazz brunch,concert,Garden,2025-07-13,10:00,90,\n\
9,Poetry slam,performance,Library,2025-07-13,11:00,45,Open mic\n\
10,Kids craft corner,workshop,Tent A,2025-07-13,12:15,60,\n\
11,Closing set,concert,Main stage,2025-07-13,18:00,90,\n\
12,Broken entry,concert,Nowhere,2025-07-13,25:00,30,\n\
";

const SELECTION: [u32; 9] = [2, 3, 4, 5, 6, 8, 9, 10, 11];

// ── Observer wrapper ──────────────────────────────────────────────────────────

/// Prints per-day progress and forwards rankings to two output writers.
struct ProgressObserver<A: RouteWriter, B: RouteWriter> {
    json:   PlanOutputObserver<A>,
    csv:    PlanOutputObserver<B>,
    failed: usize,
}

impl<A: RouteWriter, B: RouteWriter> PlanObserver for ProgressObserver<A, B> {
    fn on_day_searched(&mut self, day: &DaySummary) {
        println!(
            "  {}  events {:>2}  candidates {:>4}  best {:>4}{}",
            day.date,
            day.events,
            day.candidates,
            day.best_score.map_or_else(|| "-".to_string(), |s| s.to_string()),
            if day.truncated { "  (truncated)" } else { "" },
        );
    }

    fn on_ranked(&mut self, result: &RankedResult) {
        self.json.on_ranked(result);
        self.csv.on_ranked(result);
    }

    fn on_registration(&mut self, _event: EventId, outcome: &RegistrationOutcome) {
        if !outcome.is_ok() {
            self.failed += 1;
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn init_logging() {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();
}

fn load_config() -> Result<PlannerConfig> {
    let Some(path) = env::args().nth(1) else {
        return Ok(PlannerConfig::default());
    };
    let file = File::open(&path).with_context(|| format!("opening config {path}"))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {path}"))?;
    info!(%path, "loaded planner config");
    Ok(config)
}

fn print_routes(result: &RankedResult) {
    for (rank, route) in result.iter().enumerate() {
        println!("#{}  {}  score {}", rank + 1, route.date, route.score);
        for event in &route.events {
            println!(
                "      {}  {:<18} {:<12} {} min",
                event.start, event.name, event.location, event.duration_min
            );
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let config = load_config()?;

    println!("=== festival — conflict-free route planner ===");
    println!("top_k: {}  |  max events/day: {}", config.top_k, config.limits.max_events_per_day);
    println!();

    // 1. Load the programme.
    let records = load_records_reader(Cursor::new(PROGRAMME_CSV))?;
    let (catalog, skipped) = EventCatalog::from_records(records, InvalidEventPolicy::Skip)?;
    for err in &skipped {
        println!("skipped: {err}");
    }
    let stats = catalog.stats();
    println!("Programme: {} events over {} days", stats.events, stats.days);

    let concerts = catalog.search(&EventFilter::new().kind("concert"));
    println!("Concerts: {}", concerts.iter().map(|e| e.name.as_str()).collect::<Vec<_>>().join(", "));
    println!();

    // 2. Build the planner.
    let store = MemoryRegistrationStore::with_known_events(catalog.list().iter().map(|e| e.id));
    let planner = PlannerBuilder::new(catalog, store).config(config).build()?;

    // 3. Set up output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut obs = ProgressObserver {
        json:   PlanOutputObserver::new(JsonRouteWriter::new(Path::new(OUTPUT_DIR))?),
        csv:    PlanOutputObserver::new(CsvRouteWriter::new(Path::new(OUTPUT_DIR))?),
        failed: 0,
    };

    // 4. Plan.
    let selection: Vec<EventId> = SELECTION.iter().copied().map(EventId).collect();
    println!("Selection: {} events", selection.len());
    let t0 = Instant::now();
    let outcome = planner.plan(VISITOR, &selection, &mut obs).await?;
    let elapsed = t0.elapsed();
    println!();

    match &outcome.routes {
        Ok(ranked) => print_routes(ranked),
        Err(e) => println!("no routes: {e}"),
    }
    println!();

    // 5. Registrations.
    let report = &outcome.registrations;
    println!(
        "Registrations: {} new, {} existing, {} failed",
        report.registered(),
        report.already_registered(),
        report.failed()
    );
    for (event, reason) in report.failures() {
        println!("  {event}: {reason}");
    }

    // Planning the same selection again only finds existing registrations.
    let again = planner.plan(VISITOR, &selection, &mut obs).await?;
    println!("Re-run: {} already registered", again.registrations.already_registered());

    obs.json.finish()?;
    obs.csv.finish()?;

    // 6. Summary.
    let stats = planner.stats().await?;
    println!();
    println!("Planned in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!(
        "Catalogue: {} events  |  registrations: {}  |  failed calls: {}",
        stats.events, stats.registrations, obs.failed
    );
    println!("Routes written to {OUTPUT_DIR}/routes.json and {OUTPUT_DIR}/routes.csv");

    Ok(())
}
