// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::io::{self, Write};
use std::path::Path;
use std::process;

use crate::error;
use crate::extractor::extract_frames;

/// Output folder used when the user presses Enter at the prompt.
const DEFAULT_OUTPUT_FOLDER: &str = "extracted_frames";

/// Read one trimmed line from stdin after printing `message`.
fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Run the interactive frame extraction subcommand.
pub fn run_extract() {
    let video_path = match prompt("Enter the path to your video file: ") {
        Ok(path) => path,
        Err(e) => {
            error!("Failed to read input: {e}");
            process::exit(1);
        }
    };

    let output_folder = match prompt(&format!(
        "Enter output folder name (press Enter for '{DEFAULT_OUTPUT_FOLDER}'): "
    )) {
        Ok(name) if name.is_empty() => DEFAULT_OUTPUT_FOLDER.to_string(),
        Ok(name) => name,
        Err(e) => {
            error!("Failed to read input: {e}");
            process::exit(1);
        }
    };

    match extract_frames(Path::new(&video_path), Path::new(&output_folder)) {
        Ok(summary) => {
            println!();
            println!("Log file saved: {}", summary.log_path.display());
        }
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}
