//! Tile grid representation and builder.
//!
//! # Data layout
//!
//! Tiles are stored row-major in one `Vec`: the tile at `(x, y)` lives at
//! offset `y * width + x`.  Dimensions are fixed at construction; only tile
//! types change afterwards.
//!
//! Every accessor range-checks its `Cell` and answers "outside" with
//! `None`/`false`/`Err`, so no caller can index past the grid.

use cs_core::{Cell, Direction};

use crate::{GridError, GridResult};

// ── Tile ──────────────────────────────────────────────────────────────────────

/// Terrain of one cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Tile {
    /// Impassable.
    #[default]
    Grass,
    /// Passable by actors.
    Road,
}

impl Tile {
    #[inline]
    pub fn is_road(self) -> bool {
        matches!(self, Tile::Road)
    }

    /// Parse a single-character tile glyph: `#` road, `.` grass.
    pub fn from_glyph(c: char) -> GridResult<Tile> {
        match c {
            '#' => Ok(Tile::Road),
            '.' => Ok(Tile::Grass),
            other => Err(GridError::UnknownGlyph(other)),
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Tile::Road  => '#',
            Tile::Grass => '.',
        }
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Fixed-size matrix of [`Tile`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width:  u32,
    height: u32,
    tiles:  Vec<Tile>,
}

impl Grid {
    /// An all-grass grid.
    ///
    /// # Panics
    /// Panics if either dimension is zero.  Use [`GridBuilder::build`] for a
    /// fallible constructor.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        Self {
            width,
            height,
            tiles: vec![Tile::Grass; width as usize * height as usize],
        }
    }

    /// Build a grid from text rows of `#` (road) and `.` (grass).  Row 0 is
    /// the top (`y = 0`).
    pub fn from_rows(rows: &[&str]) -> GridResult<Self> {
        let height = rows.len();
        let width  = rows.first().map_or(0, |r| r.chars().count());
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            let got = line.chars().count();
            if got != width {
                return Err(GridError::RaggedRow { row, got, expected: width });
            }
            for c in line.chars() {
                tiles.push(Tile::from_glyph(c)?);
            }
        }

        Ok(Self { width: width as u32, height: height as u32, tiles })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false`: grids have at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    // ── Cell addressing ───────────────────────────────────────────────────

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Row-major offset of `cell`, or `None` if it is outside the grid.
    #[inline]
    pub fn offset(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.y as usize * self.width as usize + cell.x as usize)
    }

    /// Inverse of [`offset`](Self::offset).
    #[inline]
    pub fn cell_at(&self, offset: usize) -> Cell {
        let w = self.width as usize;
        Cell::new((offset % w) as u32, (offset / w) as u32)
    }

    /// Map a pixel position to the tile under it, `None` if the pixel lies
    /// outside the grid.
    pub fn cell_at_pixel(&self, px: u32, py: u32, tile_size: u32) -> Option<Cell> {
        if tile_size == 0 {
            return None;
        }
        let cell = Cell::new(px / tile_size, py / tile_size);
        self.contains(cell).then_some(cell)
    }

    fn out_of_bounds(&self, cell: Cell) -> GridError {
        GridError::OutOfBounds { cell, width: self.width, height: self.height }
    }

    // ── Tile access ───────────────────────────────────────────────────────

    #[inline]
    pub fn tile(&self, cell: Cell) -> Option<Tile> {
        self.offset(cell).map(|i| self.tiles[i])
    }

    /// `true` if `cell` is inside the grid and a road.
    #[inline]
    pub fn is_road(&self, cell: Cell) -> bool {
        self.tile(cell).is_some_and(Tile::is_road)
    }

    /// Overwrite the tile at `cell`, returning the previous tile.
    pub fn set(&mut self, cell: Cell, tile: Tile) -> GridResult<Tile> {
        let i = self.offset(cell).ok_or_else(|| self.out_of_bounds(cell))?;
        Ok(std::mem::replace(&mut self.tiles[i], tile))
    }

    /// Make `cell` a road.  Idempotent; returns the previous tile.
    #[inline]
    pub fn paint_road(&mut self, cell: Cell) -> GridResult<Tile> {
        self.set(cell, Tile::Road)
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// In-bounds orthogonal neighbours of `cell`, in `+x, -x, +y, -y` order.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| cell.step(d))
            .filter(|&n| self.contains(n))
    }

    /// Every cell with its tile, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, &t)| (self.cell_at(i), t))
    }

    pub fn road_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_road()).count()
    }

    /// Text form: one line per row, `#` road and `.` grass.
    pub fn to_rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.width as usize)
            .map(|row| row.iter().map(|t| t.glyph()).collect())
            .collect()
    }
}

// ── GridBuilder ───────────────────────────────────────────────────────────────

/// Lay out roads on an all-grass grid, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use cs_core::Cell;
/// use cs_grid::GridBuilder;
///
/// // L-shaped corridor: down column 2, then along row 10.
/// let grid = GridBuilder::new(20, 20)
///     .road_line(Cell::new(2, 2), Cell::new(2, 10))
///     .road_line(Cell::new(2, 10), Cell::new(10, 10))
///     .build()
///     .unwrap();
/// assert_eq!(grid.road_count(), 17);
/// ```
pub struct GridBuilder {
    width:    u32,
    height:   u32,
    segments: Vec<(Cell, Cell)>,
}

impl GridBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, segments: Vec::new() }
    }

    /// Mark a single cell as road.
    pub fn road(mut self, cell: Cell) -> Self {
        self.segments.push((cell, cell));
        self
    }

    /// Mark every cell on the axis-aligned segment `from..=to` as road.
    pub fn road_line(mut self, from: Cell, to: Cell) -> Self {
        self.segments.push((from, to));
        self
    }

    /// Validate the layout and produce the [`Grid`].
    pub fn build(self) -> GridResult<Grid> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::Empty);
        }
        let mut grid = Grid::new(self.width, self.height);
        for (from, to) in self.segments {
            if from.x != to.x && from.y != to.y {
                return Err(GridError::NotAxisAligned { from, to });
            }
            for x in from.x.min(to.x)..=from.x.max(to.x) {
                for y in from.y.min(to.y)..=from.y.max(to.y) {
                    grid.paint_road(Cell::new(x, y))?;
                }
            }
        }
        Ok(grid)
    }
}
