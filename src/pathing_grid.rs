use crate::error::{EndpointIssue, Result, SearchError};
use crate::search_context::{DefaultSearchContext, SearchContext};
use crate::{DEFAULT_COLS, DEFAULT_GOAL, DEFAULT_ROWS, DEFAULT_START, N_SMALLVEC_SIZE};
use core::fmt;
use core::str::FromStr;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::sync::{Arc, Mutex};

/// Fixed order in which neighbours are produced: up, down, left, right.
const NEUMANN_OFFSETS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// [PathingGrid] is a rows x cols lattice of cells, each either free or a wall ([true] in the
/// underlying [BoolGrid]), with exactly one start and one goal cell. Points use `x` for the
/// column and `y` for the row.
///
/// It additionally tracks the connected components of free cells in a [UnionFind] structure and
/// owns the scratch [SearchContext] used by runs. The context sits behind a mutex that a run
/// holds for its whole duration, while every edit needs `&mut self`, so edits and runs cannot
/// interleave.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    pub grid: BoolGrid,
    start: Point,
    goal: Point,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
    pub(crate) context: Arc<Mutex<DefaultSearchContext>>,
}

impl Default for PathingGrid {
    /// The initial session layout: a 20 x 50 grid with start and goal on row 10.
    fn default() -> PathingGrid {
        let (start_row, start_col) = DEFAULT_START;
        let (goal_row, goal_col) = DEFAULT_GOAL;
        PathingGrid::from_parts(
            DEFAULT_ROWS,
            DEFAULT_COLS,
            Point::new(start_col as i32, start_row as i32),
            Point::new(goal_col as i32, goal_row as i32),
        )
    }
}

impl PathingGrid {
    /// Creates a grid without walls. Fails if either endpoint is out of bounds or they coincide.
    pub fn new(rows: usize, cols: usize, start: Point, goal: Point) -> Result<PathingGrid> {
        let grid = PathingGrid::from_parts(rows, cols, start, goal);
        grid.validate_endpoints()?;
        Ok(grid)
    }

    fn from_parts(rows: usize, cols: usize, start: Point, goal: Point) -> PathingGrid {
        let mut grid = PathingGrid {
            grid: BoolGrid::new(cols, rows, false),
            start,
            goal,
            components: UnionFind::new(rows * cols),
            components_dirty: false,
            context: Arc::new(Mutex::new(SearchContext::new())),
        };
        grid.generate_components();
        grid
    }

    pub fn rows(&self) -> usize {
        self.grid.height()
    }
    pub fn cols(&self) -> usize {
        self.grid.width()
    }
    pub fn len(&self) -> usize {
        self.rows() * self.cols()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.cols()
            && (point.y as usize) < self.rows()
    }
    /// Row-major index of an in-bounds point.
    pub fn cell_index(&self, point: Point) -> usize {
        point.y as usize * self.cols() + point.x as usize
    }
    pub fn cell_point(&self, ix: usize) -> Point {
        Point::new((ix % self.cols()) as i32, (ix / self.cols()) as i32)
    }
    pub fn is_wall(&self, point: Point) -> bool {
        self.in_bounds(point) && self.grid.get(point.x as usize, point.y as usize)
    }
    pub fn can_move_to(&self, point: Point) -> bool {
        self.in_bounds(point) && !self.grid.get(point.x as usize, point.y as usize)
    }

    /// The in-bounds, non-wall cells 4-adjacent to `point`, in the order up, down, left, right.
    pub fn neighbors(&self, point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        NEUMANN_OFFSETS
            .iter()
            .map(|(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|p| self.can_move_to(*p))
            .collect()
    }

    fn check_bounds(&self, point: Point) -> Result<()> {
        if self.in_bounds(point) {
            Ok(())
        } else {
            Err(SearchError::OutOfBounds(point))
        }
    }

    /// Checks that start and goal are in bounds, distinct and not walls.
    pub fn validate_endpoints(&self) -> Result<()> {
        let reason = if !self.in_bounds(self.start) || !self.in_bounds(self.goal) {
            EndpointIssue::OutOfBounds
        } else if self.start == self.goal {
            EndpointIssue::Coincident
        } else if self.is_wall(self.start) || self.is_wall(self.goal) {
            EndpointIssue::Wall
        } else {
            return Ok(());
        };
        Err(SearchError::InvalidEndpoints {
            start: self.start,
            goal: self.goal,
            reason,
        })
    }

    /// Places or removes a wall. Start and goal stay traversable, so walls on them are ignored.
    /// Removing a wall joins the newly connected components; adding one regenerates them, so
    /// [reachable](Self::reachable) is always up to date after an edit.
    pub fn set_wall(&mut self, point: Point, blocked: bool) -> Result<()> {
        self.check_bounds(point)?;
        if blocked && (point == self.start || point == self.goal) {
            debug!("Ignoring wall on endpoint {}", point);
            return Ok(());
        }
        self.set_blocked(point, blocked);
        self.update();
        Ok(())
    }

    fn set_blocked(&mut self, point: Point, blocked: bool) {
        if self.grid.get(point.x as usize, point.y as usize) == blocked {
            return;
        }
        self.grid.set(point.x as usize, point.y as usize, blocked);
        if blocked {
            self.components_dirty = true;
        } else {
            let p_ix = self.cell_index(point);
            for n in self.neighbors(&point) {
                let n_ix = self.cell_index(n);
                self.components.union(p_ix, n_ix);
            }
        }
    }

    pub fn toggle_wall(&mut self, point: Point) -> Result<()> {
        self.check_bounds(point)?;
        let blocked = self.grid.get(point.x as usize, point.y as usize);
        self.set_wall(point, !blocked)
    }

    /// Removes every wall.
    pub fn clear_walls(&mut self) {
        self.grid = BoolGrid::new(self.cols(), self.rows(), false);
        self.generate_components();
    }

    /// Relocates the start, clearing any wall on the destination. Placing it on the goal is
    /// allowed while editing; runs reject coincident endpoints.
    pub fn move_start(&mut self, point: Point) -> Result<()> {
        self.check_bounds(point)?;
        self.set_blocked(point, false);
        self.start = point;
        Ok(())
    }

    /// Relocates the goal, clearing any wall on the destination. Placing it on the start is
    /// allowed while editing; runs reject coincident endpoints.
    pub fn move_goal(&mut self, point: Point) -> Result<()> {
        self.check_bounds(point)?;
        self.set_blocked(point, false);
        self.goal = point;
        Ok(())
    }

    /// Retrieves the component id a given [Point] belongs to, or [None] if it is out of bounds.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        self.in_bounds(*point).then(|| self.components.find(self.cell_index(*point)))
    }
    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }
    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.can_move_to(*start) && self.can_move_to(*goal) {
            let start_ix = self.cell_index(*start);
            let goal_ix = self.cell_index(*goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            debug!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free 4-neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        let (w, h) = (self.cols() as i32, self.rows() as i32);
        self.components = UnionFind::new(self.len());
        self.components_dirty = false;
        for y in 0..h {
            for x in 0..w {
                let point = Point::new(x, y);
                if !self.can_move_to(point) {
                    continue;
                }
                let parent_ix = self.cell_index(point);
                for p in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.can_move_to(p) {
                        let ix = self.cell_index(p);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.rows() as i32 {
            let line = (0..self.cols() as i32)
                .map(|x| {
                    let p = Point::new(x, y);
                    if p == self.start {
                        'S'
                    } else if p == self.goal {
                        'G'
                    } else if self.is_wall(p) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl FromStr for PathingGrid {
    type Err = SearchError;

    /// Parses an ASCII map with one line per row: `.` is free, `#`, `@` and `T` are walls, `S`
    /// and `G` mark the single start and goal. Blank lines and surrounding whitespace are
    /// ignored.
    fn from_str(s: &str) -> Result<PathingGrid> {
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        if rows == 0 || cols == 0 {
            return Err(SearchError::InvalidMap("map is empty".to_owned()));
        }
        let mut start = None;
        let mut goal = None;
        let mut walls = Vec::new();
        for (y, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(SearchError::InvalidMap(format!(
                    "row {y} has {} cells, expected {cols}",
                    line.chars().count()
                )));
            }
            for (x, tile) in line.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                let slot = match tile {
                    '.' => continue,
                    '#' | '@' | 'T' => {
                        walls.push(p);
                        continue;
                    }
                    'S' => &mut start,
                    'G' => &mut goal,
                    other => {
                        return Err(SearchError::InvalidMap(format!(
                            "unknown tile '{other}' at {p}"
                        )))
                    }
                };
                if slot.replace(p).is_some() {
                    return Err(SearchError::InvalidMap(format!("duplicate '{tile}' at {p}")));
                }
            }
        }
        let (Some(start), Some(goal)) = (start, goal) else {
            return Err(SearchError::InvalidMap(
                "map needs exactly one 'S' and one 'G'".to_owned(),
            ));
        };
        let mut grid = PathingGrid::new(rows, cols, start, goal)?;
        for p in walls {
            grid.grid.set(p.x as usize, p.y as usize, true);
        }
        grid.generate_components();
        Ok(grid)
    }
}
