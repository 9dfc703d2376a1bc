//! Builds a populated sample statistics database so the dashboard can be
//! demoed without institutional data:
//!
//! ```sh
//! cargo run --bin generate_sample        # writes aapi_dash.db
//! cargo run --bin generate_sample -- demo.db
//! ```
//!
//! Text cells are written with stray padding and recent cohorts get NULL
//! long-horizon retention, so the trim and blank-cell handling of the
//! dashboard is exercised by real rows.

use anyhow::{Context, Result};
use rusqlite::{params, Connection};

const ASIAN_GROUPS: &[&str] = &[
    "Asian Indian",
    "Chinese",
    "Filipino",
    "Japanese",
    "Korean",
    "Vietnamese",
    "Other Asian",
];

const PI_GROUPS: &[&str] = &["Guamanian", "Hawaiian", "Samoan", "Other Pac.Islander"];

const STANDINGS: &[&str] = &["Good Standing", "Probation", "Dismissed"];

const FIRST_YEAR: i64 = 2016;
const LAST_YEAR: i64 = 2022;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform float in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `[lo, hi]`.
    fn int_range(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_f64() * (hi - lo + 1) as f64) as i64
    }

    /// Uniform float in `[lo, hi)`, one decimal place.
    fn pct_range(&mut self, lo: f64, hi: f64) -> f64 {
        ((lo + self.next_f64() * (hi - lo)) * 10.0).round() / 10.0
    }
}

/// Term code in the source's registrar format, e.g. Fall 2019 → 2197.
fn term_code(year: i64, fall: bool) -> i64 {
    (year - 1800) * 10 + if fall { 7 } else { 2 }
}

fn semester_label(year: i64, fall: bool) -> String {
    // Written with end padding on purpose; the dashboard queries trim() it.
    if fall {
        format!("Fall {year} ")
    } else {
        format!(" Spring {year}")
    }
}

fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE asian_group_counts (asian_group TEXT, year_term INTEGER, semester TEXT, total INTEGER);
         CREATE TABLE pacific_islander_group_counts (pacific_islander_group TEXT, year_term INTEGER, semester TEXT, total INTEGER);
         CREATE TABLE ftf_asian_rtn (asian_group TEXT, cohort_year_term INTEGER, cohort_semester TEXT, \"#ENTERING_COHORT\" INTEGER, retention_1yr REAL, retention_2yr REAL, retention_4yr REAL, retention_6yr REAL);
         CREATE TABLE ftf_pi_rtn (pacific_islander_group TEXT, cohort_year_term INTEGER, cohort_semester TEXT, \"#ENTERING_COHORT\" INTEGER, retention_1yr REAL, retention_2yr REAL, retention_4yr REAL, retention_6yr REAL);
         CREATE TABLE trf_asian_rtn (asian_group TEXT, cohort_year_term INTEGER, cohort_semester TEXT, \"#ENTERING_COHORT\" INTEGER, retention_1yr REAL, retention_2yr REAL, retention_4yr REAL, retention_6yr REAL);
         CREATE TABLE tfr_pi_rtn (pacific_islander_group TEXT, cohort_year_term INTEGER, cohort_semester TEXT, \"#ENTERING_COHORT\" INTEGER, retention_1yr REAL, retention_2yr REAL, retention_4yr REAL, retention_6yr REAL);
         CREATE TABLE asian_standing (asian_group TEXT, standing TEXT, year_term INTEGER, semester TEXT, total_enroll INTEGER, standing_count INTEGER, standing_pct REAL);
         CREATE TABLE pi_standing (pacific_islander_group TEXT, standing TEXT, year_term INTEGER, semester TEXT, total_enroll INTEGER, standing_count INTEGER, standing_pct REAL);",
    )?;
    Ok(())
}

fn fill_counts(conn: &Connection, table: &str, groups: &[&str], rng: &mut SimpleRng) -> Result<()> {
    let sql = format!("INSERT INTO {table} VALUES (?1, ?2, ?3, ?4)");
    for group in groups {
        let base = rng.int_range(40, 600);
        for year in FIRST_YEAR..=LAST_YEAR {
            for fall in [false, true] {
                let total = (base + rng.int_range(-20, 25)).max(5);
                conn.execute(
                    &sql,
                    params![
                        format!("{group} "),
                        term_code(year, fall),
                        semester_label(year, fall),
                        total
                    ],
                )?;
            }
        }
    }
    Ok(())
}

fn fill_retention(
    conn: &Connection,
    table: &str,
    groups: &[&str],
    rng: &mut SimpleRng,
) -> Result<()> {
    let sql = format!("INSERT INTO {table} VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)");
    for group in groups {
        for year in FIRST_YEAR..=LAST_YEAR {
            let cohort = rng.int_range(10, 220);
            let r1 = rng.pct_range(70.0, 95.0);
            // Longer horizons only exist for cohorts old enough to have them.
            let r2 = (year + 2 <= LAST_YEAR).then(|| rng.pct_range(60.0, r1));
            let r4 = (year + 4 <= LAST_YEAR).then(|| rng.pct_range(45.0, r1));
            let r6 = (year + 6 <= LAST_YEAR).then(|| rng.pct_range(40.0, r1));
            conn.execute(
                &sql,
                params![
                    format!(" {group}"),
                    term_code(year, true),
                    semester_label(year, true),
                    cohort,
                    r1,
                    r2,
                    r4,
                    r6
                ],
            )?;
        }
    }
    Ok(())
}

fn fill_standing(
    conn: &Connection,
    table: &str,
    groups: &[&str],
    rng: &mut SimpleRng,
) -> Result<()> {
    let sql = format!("INSERT INTO {table} VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)");
    for group in groups {
        for year in FIRST_YEAR..=LAST_YEAR {
            for fall in [false, true] {
                // Occasional tiny cohorts land under the dashboard's
                // total_enroll >= 5 cutoff.
                let total = rng.int_range(3, 400);
                let mut remaining = total;
                for (i, standing) in STANDINGS.iter().enumerate() {
                    let count = if i == STANDINGS.len() - 1 {
                        remaining
                    } else {
                        let share = if i == 0 { 0.7 + rng.next_f64() * 0.2 } else { rng.next_f64() * 0.5 };
                        let c = ((remaining as f64) * share) as i64;
                        remaining -= c;
                        c
                    };
                    let pct = (count as f64 / total as f64 * 1000.0).round() / 10.0;
                    conn.execute(
                        &sql,
                        params![
                            format!("{group} "),
                            standing,
                            term_code(year, fall),
                            semester_label(year, fall),
                            total,
                            count,
                            pct
                        ],
                    )?;
                }
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "aapi_dash.db".to_string());
    if std::path::Path::new(&path).exists() {
        anyhow::bail!("{path} already exists; remove it first");
    }

    let mut conn = Connection::open(&path).with_context(|| format!("creating {path}"))?;
    create_schema(&conn)?;

    let mut rng = SimpleRng::new(42);
    let tx = conn.transaction()?;
    fill_counts(&tx, "asian_group_counts", ASIAN_GROUPS, &mut rng)?;
    fill_counts(&tx, "pacific_islander_group_counts", PI_GROUPS, &mut rng)?;
    fill_retention(&tx, "ftf_asian_rtn", ASIAN_GROUPS, &mut rng)?;
    fill_retention(&tx, "ftf_pi_rtn", PI_GROUPS, &mut rng)?;
    fill_retention(&tx, "trf_asian_rtn", ASIAN_GROUPS, &mut rng)?;
    fill_retention(&tx, "tfr_pi_rtn", PI_GROUPS, &mut rng)?;
    fill_standing(&tx, "asian_standing", ASIAN_GROUPS, &mut rng)?;
    fill_standing(&tx, "pi_standing", PI_GROUPS, &mut rng)?;
    tx.commit()?;

    println!("Wrote sample statistics database to {path}");
    Ok(())
}
