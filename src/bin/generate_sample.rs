use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use job_tracker::data::aggregate::count_by_status;
use job_tracker::data::loader::{DEFAULT_DATA_PATH, load_file};

const N_APPLICATIONS: usize = 60;

const TITLES: [&str; 8] = [
    "Software Engineer",
    "Backend Developer",
    "Data Analyst",
    "Site Reliability Engineer",
    "Product Manager",
    "Frontend Developer",
    "Machine Learning Engineer",
    "QA Engineer",
];

const COMPANIES: [&str; 10] = [
    "Acme Corp",
    "Globex",
    "Initech",
    "Umbrella",
    "Hooli",
    "Stark Industries",
    "Wayne Enterprises",
    "Vandelay Industries",
    "Soylent",
    "Cyberdyne",
];

const SOURCES: [&str; 4] = ["LinkedIn", "Company site", "Referral", "Job board"];

/// Status with its relative weight.
const STATUSES: [(&str, u64); 6] = [
    ("Applied", 30),
    ("Rejected", 25),
    ("No Response", 20),
    ("Interview", 12),
    ("Suspected Ghost Job", 8),
    ("Offer", 5),
];

const DAYS_IN_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

#[derive(Serialize)]
struct Row {
    #[serde(rename = "Job Title")]
    job_title: &'static str,
    #[serde(rename = "Company")]
    company: &'static str,
    #[serde(rename = "Date Applied")]
    date_applied: String,
    #[serde(rename = "Status")]
    status: &'static str,
    #[serde(rename = "Source")]
    source: &'static str,
}

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

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len() as u64) as usize]
    }

    fn weighted_status(&mut self) -> &'static str {
        let total: u64 = STATUSES.iter().map(|(_, w)| w).sum();
        let mut roll = self.below(total);
        for (status, weight) in STATUSES {
            if roll < weight {
                return status;
            }
            roll -= weight;
        }
        STATUSES[0].0
    }
}

/// ISO date for a zero-based day of 2024.
fn date_in_2024(mut day: u32) -> String {
    for (month, len) in DAYS_IN_MONTH.iter().enumerate() {
        if day < *len {
            return format!("2024-{:02}-{:02}", month + 1, day + 1);
        }
        day -= len;
    }
    "2024-12-31".to_string()
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // Applications spread over the year, in date order.
    let mut days: Vec<u32> = (0..N_APPLICATIONS).map(|_| rng.below(366) as u32).collect();
    days.sort_unstable();

    let output_path = Path::new(DEFAULT_DATA_PATH);
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    for day in days {
        let row = Row {
            job_title: rng.pick(&TITLES),
            company: rng.pick(&COMPANIES),
            date_applied: date_in_2024(day),
            status: rng.weighted_status(),
            source: rng.pick(&SOURCES),
        };
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV writer")?;

    // Read it back through the dashboard's loader as a sanity check.
    let table = load_file(output_path).context("re-reading generated file")?;
    let summary: Vec<String> = count_by_status(&table.records)
        .iter()
        .map(|c| format!("{} {}", c.status, c.count))
        .collect();

    println!(
        "Wrote {} applications to {}: {}",
        table.len(),
        output_path.display(),
        summary.join(", ")
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_cover_leap_year() {
        assert_eq!(date_in_2024(0), "2024-01-01");
        assert_eq!(date_in_2024(59), "2024-02-29");
        assert_eq!(date_in_2024(365), "2024-12-31");
    }

    #[test]
    fn rng_is_deterministic() {
        let mut a = SimpleRng::new(7);
        let mut b = SimpleRng::new(7);
        for _ in 0..10 {
            assert_eq!(a.weighted_status(), b.weighted_status());
        }
    }
}
