use clap::Parser;
use std::path::PathBuf;

use picstitch::types::Rgb;

#[derive(Parser)]
#[command(name = "picstitch", version, about = "Arrange images on a canvas")]
pub struct CliArgs {
    /// Folder containing the images
    pub input_folder: PathBuf,

    /// Width of the canvas in pixels
    #[arg(short, long, default_value_t = 1920)]
    pub width: u32,

    /// Height of the canvas in pixels
    #[arg(short = 'i', long, default_value_t = 1080)]
    pub height: u32,

    /// Output filename; its extension picks the format
    #[arg(short, long, default_value = "pic_collage.jpg")]
    pub output: PathBuf,

    /// Number of rows to arrange the images; computed from the canvas and
    /// image shapes when omitted
    #[arg(short, long)]
    pub num_rows: Option<usize>,

    /// Shuffle images before arranging
    #[arg(short, long, default_value_t = false)]
    pub shuffle: bool,

    /// Padding around each image in pixels
    #[arg(short, long, default_value_t = 0)]
    pub padding: u32,

    /// Background color ('#RRGGBB' or '#RGB')
    #[arg(short, long, default_value = "#FFFFFF")]
    pub color: Rgb,

    /// Overwrite the output file if it already exists
    #[arg(short = 'Y', long, default_value_t = false)]
    pub overwrite: bool,

    /// Path to a SeetaFace detection model; face-aware cropping is
    /// disabled when not provided
    #[arg(short = 'm', long)]
    pub face_model: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
