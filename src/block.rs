use std::cmp::Reverse;
use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use super::canvas::Canvas;
use super::cc::CC;
use super::codel::{Hue, Lightness};
use super::dp::DP;

pub type BlockId = u32;

/**
Colour block.

In more general terms, a block is a connected component of the grid graph.

Related [spec](https://www.dangermouse.net/esoteric/piet.html):

> A colour block is a contiguous block of any number of codels of one colour, bounded by blocks of other colours or by the edge of the program graphic.
> Blocks of colour adjacent only diagonally are not considered contiguous.

Only colored regions become blocks; white and black regions are never
materialized.
*/
#[derive(Debug, Clone)]
pub struct Block {
    pub id: BlockId,

    /// The exact (hue, lightness) shared by every codel of the block.
    pub color: (Hue, Lightness),

    pub pixels: FxHashSet<(usize, usize)>,

    /**
    Number of codels in the block.

    This is used as an integer literal as [the spec](https://www.dangermouse.net/esoteric/piet.html) says

    > Each non-black, non-white colour block in a Piet program represents an integer equal to the number of codels in that block.
    */
    pub size: usize,

    //exit codels for the 8 (DP, CC) states
    //The naming convention is `<dp>_<cc>` (see `DP` struct and `CC` struct).
    right_left: (usize, usize),
    right_right: (usize, usize),
    down_left: (usize, usize),
    down_right: (usize, usize),
    left_left: (usize, usize),
    left_right: (usize, usize),
    up_left: (usize, usize),
    up_right: (usize, usize),
}

impl Block {
    /// Creates a block from the codels of one connected component.
    ///
    /// The eight exit corners are fixed here so that the pointer engine never
    /// scans the pixel set while the program runs.
    pub fn new(id: BlockId, color: (Hue, Lightness), pixels: FxHashSet<(usize, usize)>) -> Self {
        let p = || pixels.iter().copied();
        let right_left = p().max_by_key(|&(x, y)| (x, Reverse(y))).unwrap();
        let right_right = p().max_by_key(|&(x, y)| (x, y)).unwrap();
        let down_left = p().max_by_key(|&(x, y)| (y, x)).unwrap();
        let down_right = p().max_by_key(|&(x, y)| (y, Reverse(x))).unwrap();
        let left_left = p().min_by_key(|&(x, y)| (x, Reverse(y))).unwrap();
        let left_right = p().min_by_key(|&(x, y)| (x, y)).unwrap();
        let up_left = p().min_by_key(|&(x, y)| (y, x)).unwrap();
        let up_right = p().min_by_key(|&(x, y)| (y, Reverse(x))).unwrap();
        Self {
            id,
            color,
            size: pixels.len(),
            pixels,
            right_left,
            right_right,
            down_left,
            down_right,
            left_left,
            left_right,
            up_left,
            up_right,
        }
    }

    /// The exit codel of the block for the given pointer state: the codel
    /// furthest along `dp`, disambiguated by `cc`.
    pub fn corner(&self, dp: &DP, cc: &CC) -> (usize, usize) {
        match (dp, cc) {
            (DP::Right, CC::Left) => self.right_left,
            (DP::Right, CC::Right) => self.right_right,
            (DP::Down, CC::Left) => self.down_left,
            (DP::Down, CC::Right) => self.down_right,
            (DP::Left, CC::Left) => self.left_left,
            (DP::Left, CC::Right) => self.left_right,
            (DP::Up, CC::Left) => self.up_left,
            (DP::Up, CC::Right) => self.up_right,
        }
    }
}

/// The partition of a canvas into colour blocks, with a dense codel-to-block
/// map for O(1) ownership lookup.
///
/// Built once per program load and never rebuilt while the program runs.
pub struct BlockIndex {
    blocks: Vec<Block>,
    owner: Vec<Option<BlockId>>,
    width: usize,
}

impl BlockIndex {
    /// Discovers every colour block of the canvas.
    ///
    /// Codels are scanned in row-major order and each unvisited colored codel
    /// seeds a flood fill, so block ids are deterministic for a given canvas.
    pub fn build(canvas: &Canvas) -> Self {
        let (width, height) = (canvas.width(), canvas.height());
        let mut owner: Vec<Option<BlockId>> = vec![None; width * height];
        let mut blocks: Vec<Block> = vec![];

        for y in 0..height {
            for x in 0..width {
                if owner[y * width + x].is_some() {
                    continue;
                }
                let Some(color) = canvas.at(x, y).and_then(|c| c.hue_lightness()) else {
                    continue;
                };
                let id = blocks.len() as BlockId;
                let pixels = flood_fill(canvas, (x, y));
                for &(px, py) in &pixels {
                    owner[py * width + px] = Some(id);
                }
                blocks.push(Block::new(id, color, pixels));
            }
        }

        Self {
            blocks,
            owner,
            width,
        }
    }

    pub fn block(&self, id: BlockId) -> &Block {
        &self.blocks[id as usize]
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The block owning `(x, y)`, or `None` for white and black codels.
    pub fn owner_at(&self, pos: (usize, usize)) -> Option<BlockId> {
        self.owner[pos.1 * self.width + pos.0]
    }
}

//BFS by 4-connectivity over codels with the identical (hue, lightness);
//same hue family with a different lightness does not merge
fn flood_fill(canvas: &Canvas, start: (usize, usize)) -> FxHashSet<(usize, usize)> {
    let color = canvas.codel_at(start);
    let mut pixels = FxHashSet::default();
    pixels.insert(start);
    let mut queue = VecDeque::from([start]);
    while let Some(pos) = queue.pop_front() {
        for dp in [DP::Right, DP::Down, DP::Left, DP::Up] {
            let Some(next) = canvas.neighbor(pos, &dp) else {
                continue;
            };
            if canvas.codel_at(next) != color {
                continue;
            }
            if !pixels.insert(next) {
                continue;
            }
            queue.push_back(next);
        }
    }
    pixels
}
