// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Batch visualization of pose annotations over a dataset split.

/// Color definitions and the fixed drawing palette.
pub mod color;

/// Fixed skeleton edge table.
pub mod skeleton;

pub use color::Color;

use std::fs;
use std::path::{Path, PathBuf};

use crate::annotate::{draw_annotations, load_image};
use crate::error::{Result, ToolError};
use crate::label::LabelRecord;
use crate::{info, warn};

/// Outcome of one visualization run.
#[derive(Debug, Clone, Copy, Default)]
pub struct VisualizeSummary {
    /// Images written to the output directory.
    pub processed: usize,
    /// Images skipped because they could not be read or written.
    pub skipped: usize,
}

/// Overlay annotations for every image of a dataset split.
///
/// `data_dir` must contain `images/` and `labels/` subdirectories. Every file
/// under `images/` is processed in name order; the matching label file is
/// `labels/<stem>.txt`. Images without a label file are copied through
/// unmodified. Unreadable images are skipped with a warning and the batch
/// continues.
///
/// # Errors
///
/// Returns an error, before anything is written, if `images/` or `labels/`
/// is missing; and afterwards only for output directory creation failures.
pub fn visualize_dataset(data_dir: &Path, output_dir: &Path) -> Result<VisualizeSummary> {
    let images_dir = data_dir.join("images");
    let labels_dir = data_dir.join("labels");

    if !images_dir.is_dir() || !labels_dir.is_dir() {
        return Err(ToolError::DatasetError(format!(
            "'images' or 'labels' subdirectories not found in '{}'",
            data_dir.display()
        )));
    }

    fs::create_dir_all(output_dir)?;
    info!("Saving visualized images to: {}", output_dir.display());

    let mut summary = VisualizeSummary::default();

    for image_path in list_files_sorted(&images_dir)? {
        let file_name = match image_path.file_name() {
            Some(name) => name.to_owned(),
            None => continue,
        };
        info!("Processing {}...", file_name.to_string_lossy());

        let image = match load_image(&image_path) {
            Ok(img) => img,
            Err(e) => {
                warn!(
                    "Could not read image {}: {e}. Skipping.",
                    image_path.display()
                );
                summary.skipped += 1;
                continue;
            }
        };

        let stem = image_path
            .file_stem()
            .unwrap_or(&file_name)
            .to_string_lossy();
        let label_path = labels_dir.join(format!("{stem}.txt"));
        let output_path = output_dir.join(&file_name);

        if !label_path.exists() {
            // No annotations: pass the original bytes through untouched.
            match fs::copy(&image_path, &output_path) {
                Ok(_) => summary.processed += 1,
                Err(e) => {
                    warn!("Could not write {}: {e}. Skipping.", output_path.display());
                    summary.skipped += 1;
                }
            }
            continue;
        }

        let records = match fs::read_to_string(&label_path) {
            Ok(contents) => parse_labels(&contents),
            Err(e) => {
                warn!(
                    "Could not read label file {}: {e}. Copying image as is.",
                    label_path.display()
                );
                match fs::copy(&image_path, &output_path) {
                    Ok(_) => summary.processed += 1,
                    Err(e) => {
                        warn!("Could not write {}: {e}. Skipping.", output_path.display());
                        summary.skipped += 1;
                    }
                }
                continue;
            }
        };

        let annotated = draw_annotations(&image, &records);
        match annotated.save(&output_path) {
            Ok(()) => summary.processed += 1,
            Err(e) => {
                warn!("Could not write {}: {e}. Skipping.", output_path.display());
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}

/// Parse every well-formed line of a label file; malformed lines are dropped.
fn parse_labels(contents: &str) -> Vec<LabelRecord> {
    contents.lines().filter_map(LabelRecord::parse).collect()
}

/// All files directly under `dir`, sorted by name for deterministic output.
fn list_files_sorted(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();

    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels_skips_malformed_lines() {
        let contents = "0 0.5 0.5 0.2 0.4\n\n0 0.1\nnot a label\n1 0.2 0.2 0.1 0.1\n";
        let records = parse_labels(contents);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].class_id, 0);
        assert_eq!(records[1].class_id, 1);
    }

    #[test]
    fn test_list_files_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.png", "c.png"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        let names: Vec<String> = list_files_sorted(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn test_missing_subdirectories_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("images")).unwrap();
        let out = dir.path().join("out");

        let err = visualize_dataset(dir.path(), &out).unwrap_err();
        assert!(matches!(err, ToolError::DatasetError(_)));
        assert!(!out.exists());
    }
}
