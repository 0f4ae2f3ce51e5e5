// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![allow(clippy::multiple_crate_versions)]

//! # Pose Dataset Tools
//!
//! Utilities for a pose-annotation dataset workflow:
//!
//! - **Frame extraction** - extract every frame of a video file to numbered
//!   JPEG images, with a per-run log file recording video properties and
//!   progress.
//! - **Annotation visualization** - overlay YOLO-style pose annotations
//!   (bounding boxes, keypoints, and skeleton limbs) from label files onto
//!   their dataset images.
//!
//! ## CLI Usage
//!
//! ```bash
//! # Extract frames (interactive prompts for video path and output folder)
//! pose-dataset-tools extract
//!
//! # Visualize annotations for a dataset split
//! pose-dataset-tools visualize datasets/test
//!
//! # With a custom output directory
//! pose-dataset-tools visualize datasets/valid --output_dir viz
//! ```
//!
//! ## Library Usage
//!
//! ```no_run
//! use std::path::Path;
//! use pose_dataset_tools::{extract_frames, visualize_dataset};
//!
//! fn main() -> pose_dataset_tools::Result<()> {
//!     let summary = extract_frames(Path::new("video.mp4"), Path::new("extracted_frames"))?;
//!     println!("{} frames written", summary.frames_written);
//!
//!     let summary = visualize_dataset(Path::new("datasets/test"), Path::new("viz"))?;
//!     println!("{} images written", summary.processed);
//!     Ok(())
//! }
//! ```
//!
//! ## Label File Format
//!
//! One object per line, whitespace separated, all geometry normalized to
//! [0,1] relative to the image dimensions:
//!
//! ```text
//! class_id x_center y_center width height [kp1_x kp1_y ... kp17_x kp17_y]
//! ```
//!
//! A keypoint at (0,0) is treated as not detected. The skeleton table assumes
//! the 17-point COCO keypoint ordering.
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`extractor`] | Video frame extraction pipeline |
//! | [`visualizer`] | Dataset annotation visualization pipeline |
//! | [`annotate`] | Per-image drawing of boxes, keypoints, and limbs |
//! | [`label`] | Label file parsing and box geometry |
//! | [`logging`] | Per-run extraction log context |
//! | [`error`] | Error types ([`ToolError`], [`Result`]) |

// Modules
pub mod annotate;
pub mod cli;
pub mod error;
pub mod extractor;
pub mod label;
pub mod logging;
pub mod visualizer;

// Re-export main types for convenience
pub use annotate::{draw_annotations, load_image};
pub use error::{Result, ToolError};
pub use extractor::{extract_frames, ExtractionSummary, VideoMetadata};
pub use label::{LabelRecord, PixelBox};
pub use logging::RunLogger;
pub use visualizer::{visualize_dataset, VisualizeSummary};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
