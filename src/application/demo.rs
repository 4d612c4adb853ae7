//! Demonstration report over a small fixed mobile
//!
//! Builds `[[(3),4,(2),6],2,(1),10]`, prints its queries, compares it with
//! an independently built copy and a clone, then mirrors it twice.

use std::io::Write;

use tracing::{debug, instrument};

use crate::application::summary::{equality_verdict, identity_verdict, Summary};
use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::Mobile;

/// `(1)` on a 10 arm against `[(2) on 6, (3) on 4]` on a 2 arm.
pub fn sample_mobile() -> Mobile {
    let m1 = Mobile::simple(1.0);
    let m2 = Mobile::composite(Mobile::simple(2.0), 6.0, Mobile::simple(3.0), 4.0);
    Mobile::composite(m1, 10.0, m2, 2.0)
}

/// Everything the demo prints, computed up front.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    pub summary: Summary,
    /// Sample compared with a separately constructed equal mobile.
    pub equals_rebuilt: bool,
    pub clone_equal: bool,
    pub clone_identical: bool,
    pub mirrored: String,
    pub restored: String,
}

impl DemoReport {
    #[instrument(level = "debug")]
    pub fn build() -> Self {
        let mut m = sample_mobile();
        let summary = Summary::of(&m);

        let m3 = Mobile::composite(
            Mobile::simple(1.0),
            10.0,
            Mobile::composite(Mobile::simple(2.0), 6.0, Mobile::simple(3.0), 4.0),
            2.0,
        );
        let equals_rebuilt = m.structural_eq(&m3);

        let c = m.clone();
        let clone_equal = c.structural_eq(&m);
        let clone_identical = std::ptr::eq(&c, &m);
        debug!(equals_rebuilt, clone_equal, clone_identical, "comparisons");

        m.mirror();
        let mirrored = m.pretty();
        m.mirror();
        let restored = m.pretty();

        Self {
            summary,
            equals_rebuilt,
            clone_equal,
            clone_identical,
            mirrored,
            restored,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.summary.lines();
        lines.push(equality_verdict(self.equals_rebuilt).to_string());
        lines.push(equality_verdict(self.clone_equal).to_string());
        lines.push(identity_verdict(self.clone_identical).to_string());
        lines.push(self.mirrored.clone());
        lines.push(self.restored.clone());
        lines
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> ApplicationResult<()> {
        for line in self.lines() {
            writeln!(out, "{}", line).io_context("write demo report")?;
        }
        out.flush().io_context("flush demo report")
    }
}

/// Build the demo report and write it to `out`.
pub fn run_demo<W: Write>(out: &mut W) -> ApplicationResult<DemoReport> {
    let report = DemoReport::build();
    report.write_to(out)?;
    Ok(report)
}
