use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::data::aggregate::AggregationResult;
use crate::data::change::MissingBoundary;

/// Jobs (thousands) Clinton said were created under Democratic presidents.
pub const CLAIMED_DEMOCRATIC_JOBS: f64 = 42_000.0;
/// Jobs (thousands) Clinton said were created under Republican presidents.
pub const CLAIMED_REPUBLICAN_JOBS: f64 = 24_000.0;

fn describe(missing: MissingBoundary) -> &'static str {
    match missing {
        MissingBoundary::Start => "start month missing",
        MissingBoundary::End => "end month missing",
        MissingBoundary::Both => "start and end months missing",
    }
}

// ---------------------------------------------------------------------------
// Markdown document
// ---------------------------------------------------------------------------

/// The `conclusions.md` document. Figures are rounded to whole thousands here
/// and nowhere else.
pub struct MarkdownReport<'a>(pub &'a AggregationResult);

impl fmt::Display for MarkdownReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        let totals = &result.totals;

        writeln!(f, "# Clinton Job Claim Analysis\n")?;

        writeln!(f, "## Job Changes by President (in thousands)\n")?;
        writeln!(f, "| President | Party | Job Change |")?;
        writeln!(f, "|-----------|--------|-------------|")?;
        for r in &result.details {
            writeln!(f, "| {} | {} | {:.0} |", r.name, r.party, r.change)?;
        }

        writeln!(f, "\n## Total Job Changes by Party\n")?;
        writeln!(f, "- Democrats total: **{:.0} thousand**", totals.democratic)?;
        writeln!(f, "- Republicans total: **{:.0} thousand**\n", totals.republican)?;

        writeln!(f, "## Comparison to Clinton's Statement")?;
        writeln!(
            f,
            "Clinton claimed Democrats created 42 million jobs and Republicans created 24 million."
        )?;
        writeln!(
            f,
            "The results above show how close the official BLS data is to his claim.\n"
        )?;
        writeln!(
            f,
            "- Democrats: {:.0} thousand computed vs {:.0} thousand claimed ({:+.0} thousand)",
            totals.democratic,
            CLAIMED_DEMOCRATIC_JOBS,
            totals.democratic - CLAIMED_DEMOCRATIC_JOBS
        )?;
        writeln!(
            f,
            "- Republicans: {:.0} thousand computed vs {:.0} thousand claimed ({:+.0} thousand)\n",
            totals.republican,
            CLAIMED_REPUBLICAN_JOBS,
            totals.republican - CLAIMED_REPUBLICAN_JOBS
        )?;

        writeln!(f, "## Assumptions and Limitations")?;
        writeln!(
            f,
            "Job change is private employment in a term's end month minus its start month."
        )?;

        let incomplete: Vec<_> = result.incomplete().collect();
        if !incomplete.is_empty() {
            writeln!(
                f,
                "\nThese terms have no BLS figure at a boundary month. They count as 0 in the totals \
                 because the data is missing, not because no jobs changed:\n"
            )?;
            for r in incomplete {
                if let Some(missing) = r.missing {
                    writeln!(f, "- {} ({})", r.name, describe(missing))?;
                }
            }
        }

        let untallied: Vec<_> = result.untallied().map(|r| r.name.as_str()).collect();
        if !untallied.is_empty() {
            writeln!(
                f,
                "\nTerms with a party other than D or R are listed above but excluded from both totals: {}.",
                untallied.join(", ")
            )?;
        }

        writeln!(f, "\n## My Conclusion (write this part yourself)")?;
        writeln!(
            f,
            "Explain whether Clinton was right or wrong, using the numbers your program produced."
        )?;
        writeln!(f, "Discuss any assumptions or limitations.")
    }
}

/// Render and write the markdown report.
pub fn write_report(path: &Path, result: &AggregationResult) -> Result<()> {
    let text = MarkdownReport(result).to_string();
    std::fs::write(path, text)
        .with_context(|| format!("writing report to {}", path.display()))?;
    info!("report written to {}", path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Console echo
// ---------------------------------------------------------------------------

pub struct ConsoleSummary<'a>(pub &'a AggregationResult);

impl fmt::Display for ConsoleSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;

        writeln!(f, "Job changes by president:")?;
        for r in &result.details {
            writeln!(f, "{} ({}): {:.0} thousand", r.name, r.party, r.change)?;
        }

        writeln!(f, "\nTotals by party:")?;
        writeln!(f, "Democrats: {:.0} thousand", result.totals.democratic)?;
        writeln!(f, "Republicans: {:.0} thousand", result.totals.republican)
    }
}

pub fn print_summary(result: &AggregationResult) {
    print!("{}", ConsoleSummary(result));
}
