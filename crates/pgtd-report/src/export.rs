//! CSV export of findings.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use pgtd_model::Finding;

use crate::response::FindingRecord;

/// Write findings to `path`, one record per finding with a header line.
pub fn write_findings_csv(path: &Path, findings: &[Finding]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_findings(file, findings).with_context(|| format!("write {}", path.display()))
}

pub fn write_findings<W: Write>(writer: W, findings: &[Finding]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for finding in findings {
        writer
            .serialize(FindingRecord::from(finding))
            .with_context(|| format!("serialize finding for row {}", finding.row))?;
    }
    writer.flush().context("flush findings")?;
    Ok(())
}
