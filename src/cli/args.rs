// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Examples:
    pose-dataset-tools extract
    pose-dataset-tools visualize datasets/test
    pose-dataset-tools visualize datasets/valid --output_dir viz"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract every frame of a video file to numbered JPEG images
    Extract,
    /// Overlay pose annotations from label files onto dataset images
    Visualize(VisualizeArgs),
}

/// Arguments for the visualize command.
#[derive(Args, Debug)]
pub struct VisualizeArgs {
    /// Path to the dataset split directory (e.g. 'test', 'train', or 'valid')
    pub data_dir: PathBuf,

    /// Directory to save the visualized images
    #[arg(long = "output_dir", default_value = "output_visualizations")]
    pub output_dir: PathBuf,
}
