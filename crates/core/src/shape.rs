//! Shape module - piece occupancy matrices and the rotation transform
//!
//! A shape is a rectangular 0/1 matrix describing which cells of its bounding
//! box a piece covers. Storage is a fixed 4x4 bit matrix plus the used extent,
//! so a jagged matrix cannot be represented at all.
//!
//! Each row is a bitmask where bit `x` is column `x`.

use arrayvec::ArrayVec;

/// Largest supported bounding box edge
pub const MAX_SHAPE_DIM: usize = 4;

/// Set cells of a shape as `(x, y)` offsets from its top-left corner
pub type ShapeCells = ArrayVec<(u8, u8), { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// Immutable rectangular occupancy matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    bits: [u8; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from row bitmasks (bit `x` = column `x`).
    ///
    /// Bits beyond `cols` and rows beyond `rows` are dropped.
    const fn from_masks(rows: u8, cols: u8, masks: [u8; MAX_SHAPE_DIM]) -> Self {
        let keep = (1u8 << cols) - 1;
        let mut bits = [0u8; MAX_SHAPE_DIM];
        let mut y = 0;
        while y < rows as usize {
            bits[y] = masks[y] & keep;
            y += 1;
        }
        Self { rows, cols, bits }
    }

    /// Build a shape from a 0/1 matrix.
    ///
    /// Returns `None` for an empty or jagged matrix, one larger than 4x4, or
    /// one containing values other than 0 and 1.
    pub fn from_rows<R: AsRef<[u8]>>(matrix: &[R]) -> Option<Self> {
        let rows = matrix.len();
        let cols = matrix.first()?.as_ref().len();
        if rows > MAX_SHAPE_DIM || cols == 0 || cols > MAX_SHAPE_DIM {
            return None;
        }

        let mut bits = [0u8; MAX_SHAPE_DIM];
        for (y, row) in matrix.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return None;
            }
            for (x, &v) in row.iter().enumerate() {
                match v {
                    0 => {}
                    1 => bits[y] |= 1 << x,
                    _ => return None,
                }
            }
        }

        Some(Self {
            rows: rows as u8,
            cols: cols as u8,
            bits,
        })
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Raw bit at (x, y): 1 if covered, 0 otherwise (including outside the box)
    pub fn get(&self, x: u8, y: u8) -> u8 {
        if x >= self.cols || y >= self.rows {
            return 0;
        }
        (self.bits[y as usize] >> x) & 1
    }

    pub fn is_set(&self, x: u8, y: u8) -> bool {
        self.get(x, y) == 1
    }

    /// Covered cells in row-major order
    pub fn cells(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for y in 0..self.rows {
            for x in 0..self.cols {
                if self.is_set(x, y) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    /// Matrix form, mostly for tests and diagnostics
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|y| (0..self.cols).map(|x| self.get(x, y)).collect())
            .collect()
    }

    /// Quarter turn clockwise.
    ///
    /// An R x C shape becomes C x R with `out[x][R - 1 - y] = self[y][x]`.
    /// Pure: legality of the result on a board is checked elsewhere.
    pub fn rotate(&self) -> Shape {
        let mut bits = [0u8; MAX_SHAPE_DIM];
        for y in 0..self.rows {
            for x in 0..self.cols {
                if self.is_set(x, y) {
                    bits[x as usize] |= 1 << (self.rows - 1 - y);
                }
            }
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }
}

/// The fixed piece catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    L,
    I,
    T,
}

/// Catalog in draw order; a random index into this picks the next piece.
pub const CATALOG: [ShapeKind; 4] = [ShapeKind::Square, ShapeKind::L, ShapeKind::I, ShapeKind::T];

const SQUARE: Shape = Shape::from_masks(
    2,
    2,
    [
        0b11, // ##
        0b11, // ##
        0, 0,
    ],
);

const L: Shape = Shape::from_masks(
    2,
    3,
    [
        0b111, // ###
        0b001, // #
        0, 0,
    ],
);

const I: Shape = Shape::from_masks(
    1,
    4,
    [
        0b1111, // ####
        0, 0, 0,
    ],
);

const T: Shape = Shape::from_masks(
    2,
    3,
    [
        0b010, //  #
        0b111, // ###
        0, 0,
    ],
);

impl ShapeKind {
    /// Spawn orientation of this piece
    pub fn shape(self) -> Shape {
        match self {
            ShapeKind::Square => SQUARE,
            ShapeKind::L => L,
            ShapeKind::I => I,
            ShapeKind::T => T,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::L => "l",
            ShapeKind::I => "i",
            ShapeKind::T => "t",
        }
    }
}
