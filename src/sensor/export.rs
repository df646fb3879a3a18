use std::io::Write;
use std::path::{Path, PathBuf};
use chrono::SecondsFormat;
use crate::sensor::error::ExportError;
use crate::sensor::plot::{render_recording_png, PlotStyle};
use crate::sensor::Recording;
/// Files produced by one export.
#[derive(Clone, Debug, Default)]
pub struct ExportSummary {
    pub recordings: usize,
    pub files: Vec<PathBuf>,
}
/// One CSV row per recording: `id,timestamp,sample_count,s0,s1,...`.
pub fn write_csv<W: Write>(recordings: &[Recording], mut out: W) -> std::io::Result<()> {
    let width = recordings
        .iter()
        .map(|r| r.samples().len())
        .max()
        .unwrap_or(0);
    write!(out, "id,timestamp,sample_count")?;
    for i in 0..width {
        write!(out, ",s{i}")?;
    }
    writeln!(out)?;
    for rec in recordings {
        write!(
            out,
            "{},{},{}",
            rec.id(),
            rec.created_at().to_rfc3339_opts(SecondsFormat::Millis, true),
            rec.samples().len()
        )?;
        for v in rec.samples() {
            write!(out, ",{v:.6}")?;
        }
        writeln!(out)?;
    }
    out.flush()
}
pub fn to_json(recordings: &[Recording]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(recordings)?)
}
/// Writes the CSV table, the JSON dump and one PNG per recording into `dir`.
pub fn export_logs(recordings: &[Recording], dir: &Path) -> Result<ExportSummary, ExportError> {
    if recordings.is_empty() {
        return Ok(ExportSummary::default());
    }
    std::fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let stamp = chrono::Utc::now().timestamp();
    let mut files = Vec::new();
    let mut csv = Vec::new();
    write_csv(recordings, &mut csv).map_err(|source| ExportError::Write {
        path: dir.to_path_buf(),
        source,
    })?;
    files.push(write_file(dir.join(format!("recordings_{stamp}.csv")), &csv)?);
    let json = to_json(recordings)?;
    files.push(write_file(dir.join(format!("recordings_{stamp}.json")), json.as_bytes())?);
    let style = PlotStyle::default();
    for rec in recordings {
        let png = render_recording_png(rec, &style)?;
        files.push(write_file(dir.join(format!("recording_{}.png", rec.id())), &png)?);
    }
    log::info!("exported {} recordings to {}", recordings.len(), dir.display());
    Ok(ExportSummary {
        recordings: recordings.len(),
        files,
    })
}
fn write_file(path: PathBuf, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    std::fs::write(&path, bytes).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;
    fn fixed(samples: Vec<f64>) -> Recording {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        Recording::from_parts(Uuid::nil(), at, samples)
    }
    #[test]
    fn csv_has_header_and_one_row_per_recording() {
        let recs = vec![fixed(vec![0.1, -0.2]), fixed(vec![0.5, 0.0])];
        let mut out = Vec::new();
        write_csv(&recs, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "id,timestamp,sample_count,s0,s1");
        assert_eq!(
            lines[1],
            "00000000-0000-0000-0000-000000000000,2024-05-01T12:00:00.000Z,2,0.100000,-0.200000"
        );
    }
    #[test]
    fn json_lists_samples() {
        let json = to_json(&[fixed(vec![1.5])]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["samples"][0], 1.5);
        assert_eq!(value[0]["id"], "00000000-0000-0000-0000-000000000000");
    }
    #[test]
    fn empty_log_exports_nothing() {
        let dir = std::env::temp_dir().join(format!("vibesense-empty-{}", Uuid::new_v4()));
        let summary = export_logs(&[], &dir).unwrap();
        assert_eq!(summary.recordings, 0);
        assert!(!dir.exists());
    }
    #[test]
    fn export_writes_table_dump_and_plots() {
        let dir = std::env::temp_dir().join(format!("vibesense-export-{}", Uuid::new_v4()));
        let recs = vec![
            Recording::from_parts(Uuid::new_v4(), Utc::now(), vec![0.1; 20]),
            Recording::from_parts(Uuid::new_v4(), Utc::now(), vec![-0.1; 20]),
        ];
        let summary = export_logs(&recs, &dir).unwrap();
        assert_eq!(summary.recordings, 2);
        assert_eq!(summary.files.len(), 4);
        assert!(summary.files.iter().all(|f| f.exists()));
        std::fs::remove_dir_all(&dir).ok();
    }
}
