//! Text rendering of site reports

use std::fmt;

use domain::{DayAssessment, Site, SiteReport};

/// Printed before any report
pub const DISCLAIMER: &str = "Disclaimer: This tool is for informational purposes only and should \
NEVER replace your own judgment, formal training, or official weather briefings. Always exercise \
caution and use certified sources before flying.";

/// Printed once the batch starts
pub const FETCHING: &str = "Fetching weather data for candidate sites...";

/// Printed after the last report
pub const DONE: &str = "Done.";

const fn status_mark(ok: bool) -> char {
    if ok { '✔' } else { '✘' }
}

fn write_reasons(f: &mut fmt::Formatter<'_>, day: &DayAssessment) -> fmt::Result {
    if day.verdict.is_ok() {
        return Ok(());
    }
    writeln!(f, "    Reasons: {}", day.verdict.reason_strings().join(", "))
}

/// One report as a block of lines followed by a blank line
pub struct ReportBlock<'a>(pub &'a SiteReport);

impl fmt::Display for ReportBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            SiteReport::Assessed {
                site,
                today,
                tomorrow,
                ..
            } => {
                writeln!(f, "{}:", site.name())?;
                writeln!(
                    f,
                    "  Today: Temp {:.1}°F, Wind {:.1} mph ({}), Weather {}, Status {}",
                    today.snapshot.temperature,
                    today.snapshot.wind_speed,
                    today.wind_compass,
                    today.condition,
                    status_mark(today.verdict.is_ok()),
                )?;
                write_reasons(f, today)?;
                writeln!(
                    f,
                    "  Tomorrow: Temp {:.1}°F, Wind {:.1} mph ({}), Weather {}, Precip {:.1}%, Status {}",
                    tomorrow.snapshot.temperature,
                    tomorrow.snapshot.wind_speed,
                    tomorrow.wind_compass,
                    tomorrow.condition,
                    tomorrow.snapshot.precipitation_probability.unwrap_or_default(),
                    status_mark(tomorrow.verdict.is_ok()),
                )?;
                write_reasons(f, tomorrow)?;
            },
            SiteReport::Failed { site, error } => {
                writeln!(f, "{}: Error: {error}", site.name())?;
            },
        }
        writeln!(f)
    }
}

/// The site registry, one site per line with names padded to a common width
pub struct SiteList<'a>(pub &'a [Site]);

impl fmt::Display for SiteList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.0.iter().map(|s| s.name().len()).max().unwrap_or(0);
        for site in self.0 {
            writeln!(f, "{:<width$}  {}", site.name(), site.location())?;
        }
        Ok(())
    }
}
