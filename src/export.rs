//! CSV export of a field sampled at observation points.
use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::error::FieldError;
use crate::field::VectorField;
use crate::math::rss3;

/// Errors that can occur while writing field data.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Field(#[from] FieldError),
}

#[derive(Debug, Serialize)]
struct FieldRow {
    x: f64,
    y: f64,
    z: f64,
    bx: f64,
    by: f64,
    bz: f64,
    b_magnitude: f64,
}

/// Write one CSV row per observation point, with header
/// `x,y,z,bx,by,bz,b_magnitude`; coordinates in (m), field in (T).
pub fn write_field_csv<W: Write>(
    writer: W,
    xyzp: (&[f64], &[f64], &[f64]),
    field: &VectorField,
) -> Result<(), ExportError> {
    let (xp, yp, zp) = xyzp;
    let n = xp.len();
    if yp.len() != n || zp.len() != n || field.len() != n {
        return Err(FieldError::LengthMismatch("exported points and field").into());
    }

    let mut wtr = csv::Writer::from_writer(writer);
    for i in 0..n {
        let (bx, by, bz) = (field.x[i], field.y[i], field.z[i]);
        wtr.serialize(FieldRow {
            x: xp[i],
            y: yp[i],
            z: zp[i],
            bx,
            by,
            bz,
            b_magnitude: rss3(bx, by, bz),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// [`write_field_csv`] to a file, creating parent directories as needed.
pub fn write_field_csv_file<P: AsRef<Path>>(
    path: P,
    xyzp: (&[f64], &[f64], &[f64]),
    field: &VectorField,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = fs::File::create(path)?;
    write_field_csv(file, xyzp, field)?;
    info!(path = %path.display(), npoints = field.len(), "wrote field CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_one_row_per_point() {
        let field =
            VectorField::from_components(vec![3.0, 0.0], vec![4.0, 1.0], vec![0.0, 0.0]).unwrap();
        let mut buf = Vec::new();
        write_field_csv(&mut buf, (&[0.0, 1.0], &[0.5, 0.5], &[0.0, 0.0]), &field).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "x,y,z,bx,by,bz,b_magnitude");
        assert_eq!(lines[1], "0.0,0.5,0.0,3.0,4.0,0.0,5.0");
    }

    #[test]
    fn rejects_mismatched_field() {
        let field = VectorField::zeros(3);
        let err = write_field_csv(Vec::new(), (&[0.0], &[0.0], &[0.0]), &field).unwrap_err();
        assert!(matches!(err, ExportError::Field(_)));
    }

    #[test]
    fn file_export_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/field.csv");
        let field = VectorField::zeros(1);
        write_field_csv_file(&path, (&[1.0], &[2.0], &[3.0]), &field).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("x,y,z,bx,by,bz,b_magnitude"));
        assert_eq!(text.lines().count(), 2);
    }
}
