//! Splitting the content region between the two panels.

/// The content area available to the panel pair, in character cells.
///
/// Dimensions are signed because hosts report transient non-positive sizes
/// while a window is being collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// A region of `width` columns by `height` rows.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Placement of one panel inside a [`Region`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelGeometry {
    /// Left column of the panel.
    pub x: i32,
    /// Width in columns, always positive.
    pub width: i32,
    /// Height in rows, always positive.
    pub height: i32,
}

/// The result of splitting a region.
///
/// A side is `None` when its computed width or the shared height is not
/// strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    pub left: Option<PanelGeometry>,
    pub right: Option<PanelGeometry>,
    /// Column of the divider; only present when both panels fit.
    pub divider_x: Option<i32>,
}

/// Splits `region` into two halves with one divider column between them.
///
/// The left panel gets `width / 2` columns, the divider the next column,
/// and the right panel whatever remains.
pub fn split(region: Region) -> Split {
    let height = region.height;
    let left_width = region.width.max(0) / 2;
    let right_x = left_width + 1;
    let right_width = (region.width - right_x).max(0);

    let left = (left_width > 0 && height > 0).then_some(PanelGeometry {
        x: 0,
        width: left_width,
        height,
    });
    let right = (right_width > 0 && height > 0).then_some(PanelGeometry {
        x: right_x,
        width: right_width,
        height,
    });
    let divider_x = (left.is_some() && right.is_some()).then_some(left_width);

    Split {
        left,
        right,
        divider_x,
    }
}
