use batchfit::{output, run};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "batchfit")]
#[command(about = "Resize every image in a directory to 78px wide, in place")]
#[command(long_about = "\
Resize every image in a directory to 78px wide, in place

Scans the given directory (non-recursive) for files ending in .png, .jpg,
.jpeg, .bmp, or .gif and resizes each to a fixed width of 78 pixels,
preserving aspect ratio (height is floor(78 * H / W)). The original file is
overwritten — no backup is kept. Images narrower than 78px are upscaled.

One status line is printed per file:

  Resized and replaced: <filename>
  Error processing <filename>: <message>

Per-file failures (corrupt files, permission errors) are reported and the
batch continues. The exit code is 0 whenever the directory could be listed,
even if individual files failed.")]
#[command(version)]
struct Cli {
    /// Directory to process
    #[arg(default_value = ".")]
    directory: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    run::run(&cli.directory, output::print_outcome)?;

    Ok(())
}
