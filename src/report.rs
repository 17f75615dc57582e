//! Report module: aggregates path timings and prints the comparison.

use crate::bench::{PathKind, PathTiming};
use crate::error::{BenchError, BenchResult};
use std::time::Duration;

/// Timings collected for both paths over every sampled round
#[derive(Debug, Clone, Default)]
pub struct BenchReport {
    /// Rows serialized per run (from the latest round)
    pub rows: usize,
    pub plain: Vec<Duration>,
    pub validated: Vec<Duration>,
}

impl BenchReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sampled round. Both paths run the same query, so a row
    /// count mismatch means the table changed mid-round.
    pub fn add_round(&mut self, plain: &PathTiming, validated: &PathTiming) {
        if plain.rows != validated.rows {
            tracing::warn!(
                plain_rows = plain.rows,
                validated_rows = validated.rows,
                "Paths serialized different row counts"
            );
        }
        self.rows = plain.rows;
        self.plain.push(plain.elapsed);
        self.validated.push(validated.elapsed);
    }

    pub fn sample_count(&self) -> usize {
        self.plain.len()
    }

    pub fn mean(&self, kind: PathKind) -> Duration {
        let samples = match kind {
            PathKind::Plain => &self.plain,
            PathKind::Validated => &self.validated,
        };
        mean_duration(samples)
    }

    /// Validated-path time divided by plain-path time
    pub fn ratio(&self) -> BenchResult<f64> {
        speed_ratio(self.mean(PathKind::Plain), self.mean(PathKind::Validated))
    }

    /// Two timing lines and the ratio line
    pub fn render(&self) -> BenchResult<String> {
        let ratio = self.ratio()?;
        let mut out = String::new();
        for kind in [PathKind::Plain, PathKind::Validated] {
            out.push_str(&timing_line(kind, self.mean(kind), self.rows));
            out.push('\n');
        }
        out.push_str(&ratio_line(ratio));
        out.push('\n');
        Ok(out)
    }

    pub fn print(&self) -> BenchResult<()> {
        print!("{}", self.render()?);
        Ok(())
    }
}

fn mean_duration(samples: &[Duration]) -> Duration {
    if samples.is_empty() {
        return Duration::ZERO;
    }
    samples.iter().sum::<Duration>() / samples.len() as u32
}

/// `validated / plain`. A zero plain duration is reported as an error rather
/// than turning into infinity.
pub fn speed_ratio(plain: Duration, validated: Duration) -> BenchResult<f64> {
    if plain.is_zero() {
        return Err(BenchError::DivisionByZero(
            "plain-record serialization took no measurable time".to_string(),
        ));
    }
    Ok(validated.as_secs_f64() / plain.as_secs_f64())
}

pub fn ratio_line(ratio: f64) -> String {
    format!("plain records are {:.2}x faster", ratio)
}

fn timing_line(kind: PathKind, elapsed: Duration, rows: usize) -> String {
    format!(
        "{:.<24} {:>10} | {} rows",
        format!("{} ", kind.label()),
        format_duration(elapsed),
        rows
    )
}

pub fn format_duration(d: Duration) -> String {
    if d.as_secs() > 0 {
        format!("{:.2}s", d.as_secs_f64())
    } else if d.as_millis() > 0 {
        format!("{:.2}ms", d.as_secs_f64() * 1000.0)
    } else {
        format!("{:.2}µs", d.as_secs_f64() * 1_000_000.0)
    }
}
