//! Descriptive statistics over a rate log.

use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

use crate::loader::get_optional_f64;
use crate::transform::RateTable;

/// Summary statistics about a rate log
#[derive(Debug, Clone, PartialEq)]
pub struct RateSummary {
    /// Number of records, gaps included
    pub samples: usize,
    /// Number of records with both a second and a rate
    pub valid_samples: usize,
    /// Second range (min, max)
    pub second_range: Option<(f64, f64)>,
    /// Mean rate in MB/s over valid samples
    pub mean_mbps: Option<f64>,
    /// Highest rate as (second, MB/s); the earliest one wins ties
    pub peak: Option<(f64, f64)>,
}

impl RateSummary {
    /// Compute the summary of a transformed log
    pub fn from_table(table: &RateTable) -> Self {
        let seconds = table.seconds();
        let rates = table.rate_mbps();

        let points: Vec<(f64, f64)> = (0..table.len())
            .filter_map(|i| Some((get_optional_f64(seconds, i)?, get_optional_f64(rates, i)?)))
            .collect();

        let second_range = seconds
            .iter()
            .flatten()
            .fold(None, |acc: Option<(f64, f64)>, s| match acc {
                None => Some((s, s)),
                Some((lo, hi)) => Some((lo.min(s), hi.max(s))),
            });

        let mean_mbps = if points.is_empty() {
            None
        } else {
            Some(points.iter().map(|&(_, r)| r).sum::<f64>() / points.len() as f64)
        };

        let peak = points.iter().copied().fold(None, |acc: Option<(f64, f64)>, p| match acc {
            Some(best) if best.1 >= p.1 => Some(best),
            _ => Some(p),
        });

        Self {
            samples: table.len(),
            valid_samples: points.len(),
            second_range,
            mean_mbps,
            peak,
        }
    }

    /// Format the summary with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let mut output = String::new();
            output.push_str(&format!("{}\n", style("Rate Log Summary").bold().cyan()));
            output.push_str(&format!("{}\n", style("================").cyan()));
            output.push_str(&format!(
                "{}: {} ({} valid)\n",
                style("Samples").bold(),
                self.samples,
                self.valid_samples
            ));
            if let Some((lo, hi)) = self.second_range {
                output.push_str(&format!("{}: {} - {} s\n", style("Seconds").bold(), lo, hi));
            }
            if let Some(mean) = self.mean_mbps {
                output.push_str(&format!(
                    "{}: {}\n",
                    style("Mean rate").bold(),
                    style(format!("{:.2} MB/s", mean)).green()
                ));
            }
            if let Some((second, rate)) = self.peak {
                output.push_str(&format!(
                    "{}: {} at {} s\n",
                    style("Peak rate").bold(),
                    style(format!("{:.2} MB/s", rate)).green().bold(),
                    second
                ));
            }
            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            self.to_string()
        }
    }
}

impl fmt::Display for RateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rate Log Summary")?;
        writeln!(f, "================")?;
        writeln!(f, "Samples: {} ({} valid)", self.samples, self.valid_samples)?;
        if let Some((lo, hi)) = self.second_range {
            writeln!(f, "Seconds: {} - {} s", lo, hi)?;
        }
        if let Some(mean) = self.mean_mbps {
            writeln!(f, "Mean rate: {:.2} MB/s", mean)?;
        }
        if let Some((second, rate)) = self.peak {
            writeln!(f, "Peak rate: {:.2} MB/s at {} s", rate, second)?;
        }
        Ok(())
    }
}
