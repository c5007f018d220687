use crate::chunk::TerrainChunk;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorState {
    // Parked on index 0, nothing visited yet
    Fresh,
    Active,
    // `next()` ran off the end; stays parked on the last cell
    Exhausted,
}

// Row-major walker over a borrowed chunk.
//
// A fresh cursor sits on index 0 without having visited it: the first
// `next()` returns true and stays on index 0, every later call advances
// by one. This makes `while cursor.next() { ... }` touch every cell once.
pub struct ChunkCursor<'a> {
    chunk: &'a mut TerrainChunk,
    width: usize,
    area: usize,
    index: usize,
    x: usize,
    y: usize,
    state: CursorState,
}

impl<'a> ChunkCursor<'a> {
    pub fn new(chunk: &'a mut TerrainChunk) -> Self {
        let width = chunk.width();
        Self {
            chunk,
            width,
            area: width * width,
            index: 0,
            x: 0,
            y: 0,
            state: CursorState::Fresh,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == CursorState::Exhausted
    }

    pub fn chunk(&self) -> &TerrainChunk {
        self.chunk
    }

    // Moves to the next cell in row-major order (x fastest).
    // Returns false once every cell has been visited, and keeps returning false.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        match self.state {
            CursorState::Fresh => {
                self.state = CursorState::Active;
                true
            }
            CursorState::Active if self.index + 1 < self.area => {
                self.move_to(self.index + 1);
                true
            }
            CursorState::Active | CursorState::Exhausted => {
                self.state = CursorState::Exhausted;
                false
            }
        }
    }

    fn move_to(&mut self, index: usize) {
        self.index = index;
        self.x = index % self.width;
        self.y = index / self.width;
    }

    // The cursor index is always inside [0, area), so these never fail
    pub fn get(&self) -> f64 {
        self.chunk.heights[self.index]
    }

    pub fn set(&mut self, value: f64) {
        self.chunk.heights[self.index] = value;
    }

    pub fn add(&mut self, amount: f64) {
        self.chunk.heights[self.index] += amount;
    }

    // Jumps to a flat index clamped into [0, area - 1]. The target counts as
    // visited, so the following `next()` moves past it.
    pub fn seek(&mut self, index: isize) {
        let last = self.area - 1;
        let clamped = if index < 0 {
            0
        } else {
            (index as usize).min(last)
        };
        self.move_to(clamped);
        self.state = CursorState::Active;
    }

    // Same as `seek(y * width + x)`; x and y are not clamped on their own
    pub fn seek_xy(&mut self, x: isize, y: isize) {
        let flat = y.saturating_mul(self.width as isize).saturating_add(x);
        self.seek(flat);
    }
}
