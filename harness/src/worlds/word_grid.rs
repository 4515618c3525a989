//! `WordGrid`: keyword paths through a character grid.
//!
//! The root's candidates are every cell, in row-major order; after that the
//! candidates are compass steps that stay inside the grid. A state whose
//! current cell does not hold the next keyword character is pruned, so only
//! matching prefixes are ever extended.
//!
//! A solution is the start cell plus the direction taken at each step.
//! Cells may be revisited: a winding path may double back.

use combsearch_search::SearchProblemV1;

use crate::contract::{Variant, WorldV1};

/// Compass direction of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// Clockwise from north.
    pub const COMPASS: [Direction; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Clockwise from north, no diagonals.
    pub const ORTHOGONAL: [Direction; 4] = [Self::N, Self::E, Self::S, Self::W];

    /// `(row, col)` offset.
    #[must_use]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Self::N => (-1, 0),
            Self::NE => (-1, 1),
            Self::E => (0, 1),
            Self::SE => (1, 1),
            Self::S => (1, 0),
            Self::SW => (1, -1),
            Self::W => (0, -1),
            Self::NW => (-1, -1),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }
}

/// Which directions a step may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionSet {
    Compass8,
    Orthogonal4,
}

impl DirectionSet {
    fn directions(self) -> &'static [Direction] {
        match self {
            Self::Compass8 => &Direction::COMPASS,
            Self::Orthogonal4 => &Direction::ORTHOGONAL,
        }
    }
}

/// Whether a path may turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathShape {
    /// Any allowed direction at every step.
    Winding,
    /// The first step fixes the direction for the rest of the word.
    Straight,
}

/// One move: pick a start cell, or step from the current cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Start { row: usize, col: usize },
    Step(Direction),
}

/// Path so far. `cursor` is `None` only at the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    pub origin: Option<(usize, usize)>,
    pub cursor: Option<(usize, usize)>,
    pub matched: usize,
    pub steps: Vec<Direction>,
}

/// A keyword occurrence: start cell and the steps that spell the rest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordMatch {
    pub row: usize,
    pub col: usize,
    pub steps: Vec<Direction>,
}

impl WordMatch {
    /// Space-joined direction names (e.g. `"SE SW"`).
    #[must_use]
    pub fn directions(&self) -> String {
        self.steps
            .iter()
            .map(|d| d.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Word-search world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGrid {
    grid: Vec<Vec<char>>,
    keyword: Vec<char>,
    directions: DirectionSet,
    shape: PathShape,
    world_id: String,
}

impl WordGrid {
    /// Winding search in all eight directions.
    #[must_use]
    pub fn new(grid: Vec<Vec<char>>, keyword: &str) -> Self {
        Self::with_rules(grid, keyword, DirectionSet::Compass8, PathShape::Winding)
    }

    #[must_use]
    pub fn with_rules(
        grid: Vec<Vec<char>>,
        keyword: &str,
        directions: DirectionSet,
        shape: PathShape,
    ) -> Self {
        let world_id = format!(
            "word_grid:v1:{keyword}:{}x{}:{directions:?}:{shape:?}",
            grid.len(),
            grid.iter().map(Vec::len).max().unwrap_or(0),
        );
        Self {
            grid,
            keyword: keyword.chars().collect(),
            directions,
            shape,
            world_id,
        }
    }

    fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    fn neighbour(&self, (row, col): (usize, usize), direction: Direction) -> Option<(usize, usize)> {
        let (dr, dc) = direction.delta();
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        self.cell(row, col).map(|_| (row, col))
    }

    /// True when the cursor cell holds the last consumed keyword character.
    fn cursor_matches(&self, state: &GridState) -> bool {
        let Some((row, col)) = state.cursor else {
            return false;
        };
        state
            .matched
            .checked_sub(1)
            .and_then(|i| self.keyword.get(i))
            .is_some_and(|expected| self.cell(row, col) == Some(*expected))
    }
}

impl SearchProblemV1 for WordGrid {
    type State = GridState;
    type Candidate = GridMove;
    type Solution = WordMatch;

    fn problem_id(&self) -> &str {
        &self.world_id
    }

    fn root(&self) -> GridState {
        GridState {
            origin: None,
            cursor: None,
            matched: 0,
            steps: Vec::new(),
        }
    }

    fn candidates(&self, state: &GridState) -> Vec<GridMove> {
        let Some(cursor) = state.cursor else {
            if self.keyword.is_empty() {
                return Vec::new();
            }
            return self
                .grid
                .iter()
                .enumerate()
                .flat_map(|(row, cells)| (0..cells.len()).map(move |col| GridMove::Start { row, col }))
                .collect();
        };

        let allowed: &[Direction] = match (self.shape, state.steps.last()) {
            (PathShape::Straight, Some(last)) => std::slice::from_ref(last),
            _ => self.directions.directions(),
        };
        allowed
            .iter()
            .filter(|d| self.neighbour(cursor, **d).is_some())
            .map(|d| GridMove::Step(*d))
            .collect()
    }

    fn extend(&self, state: &GridState, candidate: &GridMove) -> GridState {
        match *candidate {
            GridMove::Start { row, col } => GridState {
                origin: Some((row, col)),
                cursor: Some((row, col)),
                matched: 1,
                steps: Vec::new(),
            },
            GridMove::Step(direction) => {
                let mut steps = state.steps.clone();
                steps.push(direction);
                GridState {
                    origin: state.origin,
                    cursor: state.cursor.and_then(|c| self.neighbour(c, direction)),
                    matched: state.matched + 1,
                    steps,
                }
            }
        }
    }

    fn is_goal(&self, state: &GridState) -> bool {
        state.matched == self.keyword.len() && self.cursor_matches(state)
    }

    fn is_prunable(&self, state: &GridState) -> bool {
        state.cursor.is_some() && !self.cursor_matches(state)
    }

    fn solution(&self, state: &GridState) -> WordMatch {
        let (row, col) = state.origin.unwrap_or_default();
        WordMatch {
            row,
            col,
            steps: state.steps.clone(),
        }
    }

    fn solution_json(&self, solution: &WordMatch) -> serde_json::Value {
        serde_json::json!({
            "col": solution.col,
            "row": solution.row,
            "steps": solution.steps.iter().map(|d| d.as_str()).collect::<Vec<_>>(),
        })
    }
}

impl WorldV1 for WordGrid {
    fn variant(&self) -> Variant {
        Variant::WordGrid
    }

    fn render(&self, solution: &WordMatch) -> String {
        let start = format!("({}, {})", solution.row, solution.col);
        if solution.steps.is_empty() {
            start
        } else {
            format!("{start} {}", solution.directions())
        }
    }
}
