use clap::Parser;

/// Interpreter for the Piet programming language
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the program image
    #[arg()]
    pub image_file: String,

    /// Edge length of one codel in image pixels
    #[arg(short, long, default_value_t = 1)]
    pub codel_size: usize,

    /// Enables debug output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn new(image_file: &str, codel_size: usize, verbose: bool) -> Self {
        Self {
            image_file: image_file.to_owned(),
            codel_size,
            verbose,
        }
    }
}
