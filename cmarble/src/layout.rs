//! Geometry of a generated maze, in the units of whatever draws it.
//!
//! Nothing here simulates or renders anything. It only turns the passage
//! matrices into axis-aligned rectangles a physics engine can take as static
//! bodies.

use serde::{Deserialize, Serialize};

use crate::{
    dims::{CellPos, MazeSize},
    gameboard::{Maze, Orientation},
};

/// Share of a cell the goal marker covers.
pub const GOAL_SCALE: f32 = 0.7;
/// Radius of the start marker relative to the shorter cell side.
pub const MARKER_RADIUS_SCALE: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallKind {
    Border,
    Horizontal,
    Vertical,
}

impl From<Orientation> for WallKind {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => WallKind::Horizontal,
            Orientation::Vertical => WallKind::Vertical,
        }
    }
}

/// Axis-aligned rectangle given by its center and its full extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    pub kind: WallKind,
    /// Passage matrix entry the wall stands for, `None` for the border.
    pub cell: Option<CellPos>,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallLayout {
    pub width: f32,
    pub height: f32,
    pub unit_x: f32,
    pub unit_y: f32,
    pub wall_thickness: f32,
    pub border_thickness: f32,
}

impl WallLayout {
    /// Splits an arena of `width x height` evenly between the cells of `size`.
    pub fn new(
        size: MazeSize,
        width: f32,
        height: f32,
        wall_thickness: f32,
        border_thickness: f32,
    ) -> Self {
        Self {
            width,
            height,
            unit_x: width / size.columns as f32,
            unit_y: height / size.rows as f32,
            wall_thickness,
            border_thickness,
        }
    }

    /// Walls around the whole arena, top, bottom, left and right.
    pub fn border(&self) -> [WallSegment; 4] {
        let (w, h, t) = (self.width, self.height, self.border_thickness);
        let border = |rect| WallSegment {
            kind: WallKind::Border,
            cell: None,
            rect,
        };

        [
            border(Rect::new(w / 2.0, 0.0, w, t)),
            border(Rect::new(w / 2.0, h, w, t)),
            border(Rect::new(0.0, h / 2.0, t, h)),
            border(Rect::new(w, h / 2.0, t, h)),
        ]
    }

    /// One segment for every wall still standing between two cells.
    pub fn walls(&self, maze: &Maze) -> Vec<WallSegment> {
        maze.closed_walls()
            .map(|(orientation, pos)| self.wall(orientation, pos))
            .collect()
    }

    /// Border followed by the inner walls.
    pub fn all_walls(&self, maze: &Maze) -> Vec<WallSegment> {
        let mut walls = self.border().to_vec();
        walls.extend(self.walls(maze));
        walls
    }

    pub fn wall(&self, orientation: Orientation, pos: CellPos) -> WallSegment {
        let (ux, uy, t) = (self.unit_x, self.unit_y, self.wall_thickness);
        let (r, c) = (pos.row() as f32, pos.column() as f32);

        // horizontal walls sit on the bottom edge of their cell, vertical on the right edge
        let rect = match orientation {
            Orientation::Horizontal => Rect::new(c * ux + ux / 2.0, r * uy + uy, ux, t),
            Orientation::Vertical => Rect::new(c * ux + ux, r * uy + uy / 2.0, t, uy),
        };

        WallSegment {
            kind: orientation.into(),
            cell: Some(pos),
            rect,
        }
    }

    pub fn cell_center(&self, pos: CellPos) -> (f32, f32) {
        (
            pos.column() as f32 * self.unit_x + self.unit_x / 2.0,
            pos.row() as f32 * self.unit_y + self.unit_y / 2.0,
        )
    }

    pub fn marker_radius(&self) -> f32 {
        self.unit_x.min(self.unit_y) * MARKER_RADIUS_SCALE
    }

    /// Center of the start cell, where the collaborator drops its marker.
    pub fn start_marker(&self, maze: &Maze) -> (f32, f32) {
        self.cell_center(maze.start())
    }

    pub fn goal_marker(&self, maze: &Maze) -> Rect {
        let (x, y) = self.cell_center(maze.goal());
        Rect::new(x, y, self.unit_x * GOAL_SCALE, self.unit_y * GOAL_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algorithms::generate, random::seeded};

    fn layout_6x10() -> (Maze, WallLayout) {
        let maze = generate(6, 10, &mut seeded(5)).unwrap();
        let layout = WallLayout::new(maze.size(), 1000.0, 600.0, 5.0, 12.0);
        (maze, layout)
    }

    #[test]
    fn units_split_the_arena() {
        let (_, layout) = layout_6x10();
        assert_eq!(layout.unit_x, 100.0);
        assert_eq!(layout.unit_y, 100.0);
        assert_eq!(layout.marker_radius(), 20.0);
    }

    #[test]
    fn one_segment_per_closed_wall() {
        let (maze, layout) = layout_6x10();
        // 6 * 9 vertical + 5 * 10 horizontal slots, 59 of them open
        assert_eq!(layout.walls(&maze).len(), 54 + 50 - 59);
        assert_eq!(layout.all_walls(&maze).len(), 4 + 54 + 50 - 59);
    }

    #[test]
    fn wall_geometry() {
        let (_, layout) = layout_6x10();
        let h = layout.wall(Orientation::Horizontal, CellPos(2, 3));
        assert_eq!(h.kind, WallKind::Horizontal);
        assert_eq!(h.rect, Rect::new(350.0, 300.0, 100.0, 5.0));

        let v = layout.wall(Orientation::Vertical, CellPos(2, 3));
        assert_eq!(v.kind, WallKind::Vertical);
        assert_eq!(v.rect, Rect::new(400.0, 250.0, 5.0, 100.0));
    }

    #[test]
    fn border_surrounds_arena() {
        let (_, layout) = layout_6x10();
        let border = layout.border();
        assert!(border.iter().all(|w| w.kind == WallKind::Border && w.cell.is_none()));
        assert_eq!(border[0].rect, Rect::new(500.0, 0.0, 1000.0, 12.0));
        assert_eq!(border[3].rect, Rect::new(1000.0, 300.0, 12.0, 600.0));
    }

    #[test]
    fn markers_sit_in_opposite_corners() {
        let (maze, layout) = layout_6x10();
        assert_eq!(layout.start_marker(&maze), (50.0, 50.0));
        assert_eq!(layout.goal_marker(&maze), Rect::new(950.0, 550.0, 70.0, 70.0));
    }
}
