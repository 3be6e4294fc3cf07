pub mod args;
pub mod block;
pub mod canvas;
pub mod cc;
pub mod codel;
pub mod command;
pub mod dp;
pub mod interpreter;
pub mod stdin;

use std::error::Error;

use log::debug;

use crate::args::Args;
use crate::block::BlockIndex;
use crate::canvas::Canvas;
use crate::interpreter::Interpreter;

/// Loads the program image and drives it to completion.
///
/// Load failures (missing file, undecodable image, bad dimensions) and fatal
/// I/O errors during execution come back as errors; a program that simply
/// walls itself in returns `Ok`.
pub fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let canvas = Canvas::from_file(&args.image_file, args.codel_size)
        .map_err(|e| format!("failed to load `{}`: {}", args.image_file, e))?;
    debug!("program graphic:\n{}", canvas);

    let blocks = BlockIndex::build(&canvas);
    debug!(
        "{}x{} codels, {} colour blocks",
        canvas.width(),
        canvas.height(),
        blocks.blocks().len(),
    );

    let mut ip = Interpreter::new();
    ip.run(&canvas, &blocks)
}
