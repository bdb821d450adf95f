use std::collections::{BTreeMap, BTreeSet};

use ai_core::{diagnostics::report, AiError, AiResult};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::WeightedGraph;

/// Grid cell coordinate. `y` grows downward, so "north" is `y - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

const CARDINAL: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
const DIAGONAL: [(i32, i32); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridConfig {
    /// Include the four diagonal directions.
    pub diagonal: bool,
    /// Cost of entering a cell without a weight override.
    pub default_weight: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            diagonal: false,
            default_weight: 1,
        }
    }
}

/// Rectangular grid with walls and per-cell entry weights.
///
/// Neighbors are enumerated N, E, S, W, then NE, SE, SW, NW when diagonals are on. Cells outside
/// the grid and walls are never neighbors.
#[derive(Debug, Clone)]
pub struct GridGraph {
    width: i32,
    height: i32,
    config: GridConfig,
    walls: BTreeSet<GridPoint>,
    weights: BTreeMap<GridPoint, u32>,
}

impl GridGraph {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_config(width, height, GridConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: GridConfig) -> Self {
        Self {
            width: i32::try_from(width).unwrap_or(i32::MAX),
            height: i32::try_from(height).unwrap_or(i32::MAX),
            config,
            walls: BTreeSet::new(),
            weights: BTreeMap::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width as u32
    }

    pub fn height(&self) -> u32 {
        self.height as u32
    }

    pub fn config(&self) -> GridConfig {
        self.config
    }

    pub fn in_bounds(&self, p: GridPoint) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    pub fn is_wall(&self, p: GridPoint) -> bool {
        self.walls.contains(&p)
    }

    /// In bounds and not a wall.
    pub fn is_passable(&self, p: GridPoint) -> bool {
        self.in_bounds(p) && !self.is_wall(p)
    }

    pub fn set_wall(&mut self, p: GridPoint, wall: bool) {
        if wall {
            self.walls.insert(p);
        } else {
            self.walls.remove(&p);
        }
    }

    pub fn with_wall(mut self, p: GridPoint) -> Self {
        self.set_wall(p, true);
        self
    }

    pub fn walls(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.walls.iter().copied()
    }

    pub fn set_weight(&mut self, p: GridPoint, weight: u32) {
        self.weights.insert(p, weight);
    }

    pub fn clear_weight(&mut self, p: GridPoint) {
        self.weights.remove(&p);
    }

    /// Entry weight of `p`: its override, or the default weight.
    pub fn weight(&self, p: GridPoint) -> u32 {
        self.weights
            .get(&p)
            .copied()
            .unwrap_or(self.config.default_weight)
    }

    fn directions(&self) -> impl Iterator<Item = (i32, i32)> {
        let diagonals = if self.config.diagonal { DIAGONAL.len() } else { 0 };
        CARDINAL.into_iter().chain(DIAGONAL.into_iter().take(diagonals))
    }

    fn is_neighbor(&self, from: GridPoint, to: GridPoint) -> bool {
        self.is_passable(to)
            && self
                .directions()
                .any(|(dx, dy)| from.offset(dx, dy) == to)
    }
}

impl WeightedGraph for GridGraph {
    type Node = GridPoint;

    fn neighbors(&self, node: &GridPoint) -> Vec<GridPoint> {
        self.directions()
            .map(|(dx, dy)| node.offset(dx, dy))
            .filter(|p| self.is_passable(*p))
            .collect()
    }

    fn cost(&self, from: &GridPoint, to: &GridPoint) -> AiResult<u32> {
        if !self.is_neighbor(*from, *to) {
            return Err(report(AiError::invalid_edge(from, to)));
        }
        Ok(self.weight(*to))
    }
}
