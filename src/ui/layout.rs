use super::{Edges, Rect, Size};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    #[default]
    Vertical,
}

/// Per-child hints read by the parent's layout.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum LayoutData {
    #[default]
    None,
    /// Row layout: stretch across the cross axis instead of using the
    /// preferred cross size.
    Row { stretch: bool },
}

/// Children stacked along one axis at their preferred size.
#[derive(Debug, Clone, Default)]
pub struct RowLayout {
    pub direction: Direction,
    pub spacing: f32,
    pub padding: Edges,
}

/// Children placed left-to-right, top-to-bottom into `columns` columns.
///
/// Each column is as wide as its widest child, each row as tall as its
/// tallest child. Space left over (or missing) is split evenly between the
/// stretched tracks. Children fill their cell.
#[derive(Debug, Clone)]
pub struct GridLayout {
    pub columns: usize,
    pub column_stretch: Vec<bool>,
    pub row_stretch: Vec<bool>,
    /// (horizontal, vertical) gap between cells in pixels.
    pub spacing: (f32, f32),
    pub padding: Edges,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: 1,
            column_stretch: Vec::new(),
            row_stretch: Vec::new(),
            spacing: (0.0, 0.0),
            padding: Edges::ZERO,
        }
    }
}

/// Layout strategy of a Container. Closed set.
#[derive(Debug, Clone)]
pub enum Layout {
    Row(RowLayout),
    Grid(GridLayout),
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Row(RowLayout::default())
    }
}

impl Layout {
    pub fn padding(&self) -> Edges {
        match self {
            Layout::Row(row) => row.padding,
            Layout::Grid(grid) => grid.padding,
        }
    }

    pub fn set_padding(&mut self, padding: Edges) {
        match self {
            Layout::Row(row) => row.padding = padding,
            Layout::Grid(grid) => grid.padding = padding,
        }
    }

    /// Preferred size of a container holding children of the given sizes.
    pub fn preferred_size(&self, children: &[Size]) -> Size {
        match self {
            Layout::Row(row) => row.preferred_size(children),
            Layout::Grid(grid) => grid.preferred_size(children),
        }
    }

    /// Child rectangles inside `rect`, in child order.
    pub fn arrange(&self, rect: Rect, children: &[(Size, LayoutData)]) -> Vec<Rect> {
        match self {
            Layout::Row(row) => row.arrange(rect, children),
            Layout::Grid(grid) => grid.arrange(rect, children),
        }
    }
}

/// Total gap between `n` items.
fn gaps(n: usize, spacing: f32) -> f32 {
    n.saturating_sub(1) as f32 * spacing
}

impl RowLayout {
    pub fn preferred_size(&self, children: &[Size]) -> Size {
        let (mut main, mut cross) = (0.0_f32, 0.0_f32);
        for size in children {
            let (m, c) = match self.direction {
                Direction::Horizontal => (size.width, size.height),
                Direction::Vertical => (size.height, size.width),
            };
            main += m;
            cross = cross.max(c);
        }
        main += gaps(children.len(), self.spacing);
        match self.direction {
            Direction::Horizontal => Size {
                width: main + self.padding.horizontal(),
                height: cross + self.padding.vertical(),
            },
            Direction::Vertical => Size {
                width: cross + self.padding.horizontal(),
                height: main + self.padding.vertical(),
            },
        }
    }

    pub fn arrange(&self, rect: Rect, children: &[(Size, LayoutData)]) -> Vec<Rect> {
        let content = rect.inset(self.padding);
        let mut offset = 0.0_f32;
        let mut out = Vec::with_capacity(children.len());
        for (size, data) in children {
            let stretch = matches!(data, LayoutData::Row { stretch: true });
            let child = match self.direction {
                Direction::Vertical => Rect {
                    x: content.x,
                    y: content.y + offset,
                    width: if stretch { content.width } else { size.width },
                    height: size.height,
                },
                Direction::Horizontal => Rect {
                    x: content.x + offset,
                    y: content.y,
                    width: size.width,
                    height: if stretch { content.height } else { size.height },
                },
            };
            offset += match self.direction {
                Direction::Vertical => size.height,
                Direction::Horizontal => size.width,
            } + self.spacing;
            out.push(child);
        }
        out
    }
}

impl GridLayout {
    fn columns(&self) -> usize {
        self.columns.max(1)
    }

    /// Natural (column widths, row heights) of the grid.
    fn tracks(&self, children: &[Size]) -> (Vec<f32>, Vec<f32>) {
        let cols = self.columns();
        let rows = children.len().div_ceil(cols);
        let mut widths = vec![0.0_f32; cols];
        let mut heights = vec![0.0_f32; rows];
        for (i, size) in children.iter().enumerate() {
            let (r, c) = (i / cols, i % cols);
            widths[c] = widths[c].max(size.width);
            heights[r] = heights[r].max(size.height);
        }
        (widths, heights)
    }

    pub fn preferred_size(&self, children: &[Size]) -> Size {
        let (widths, heights) = self.tracks(children);
        Size {
            width: widths.iter().sum::<f32>()
                + gaps(widths.len(), self.spacing.0)
                + self.padding.horizontal(),
            height: heights.iter().sum::<f32>()
                + gaps(heights.len(), self.spacing.1)
                + self.padding.vertical(),
        }
    }

    pub fn arrange(&self, rect: Rect, children: &[(Size, LayoutData)]) -> Vec<Rect> {
        let sizes: Vec<Size> = children.iter().map(|(size, _)| *size).collect();
        let (mut widths, mut heights) = self.tracks(&sizes);
        let content = rect.inset(self.padding);

        let avail_w = content.width - gaps(widths.len(), self.spacing.0);
        let avail_h = content.height - gaps(heights.len(), self.spacing.1);
        distribute(&mut widths, &self.column_stretch, avail_w);
        distribute(&mut heights, &self.row_stretch, avail_h);

        let cols = self.columns();
        let mut out = Vec::with_capacity(children.len());
        for i in 0..children.len() {
            let (r, c) = (i / cols, i % cols);
            let x = content.x + widths[..c].iter().sum::<f32>() + c as f32 * self.spacing.0;
            let y = content.y + heights[..r].iter().sum::<f32>() + r as f32 * self.spacing.1;
            out.push(Rect {
                x,
                y,
                width: widths[c],
                height: heights[r],
            });
        }
        out
    }
}

/// Grow or shrink the stretched tracks so the tracks sum to `available`.
/// Tracks never go below zero. Without stretched tracks nothing changes.
fn distribute(tracks: &mut [f32], stretch: &[bool], available: f32) {
    let stretched: Vec<usize> = (0..tracks.len())
        .filter(|&i| stretch.get(i).copied().unwrap_or(false))
        .collect();
    if stretched.is_empty() {
        return;
    }
    let extra = available - tracks.iter().sum::<f32>();
    let share = extra / stretched.len() as f32;
    for i in stretched {
        tracks[i] = (tracks[i] + share).max(0.0);
    }
}
