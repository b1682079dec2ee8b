//! 3x3 screen grid used by [`Window::clip`](crate::window::Window::clip).
//!
//! Each monitor is split into thirds.  Horizontal and vertical extents are
//! widened by the invisible resize border that Windows 10+ draws around
//! top-level windows, and the bottom row leaves room for the taskbar.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Width of the invisible frame around a top-level window (negative: the
/// visible edge sits this far inside `GetWindowRect`).
pub const FRAME_OFFSET: i32 = -7;

/// Height reserved for the taskbar at the bottom of the screen.
pub const TASKBAR_HEIGHT: i32 = 34;

/// Size of a single monitor in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScreenDimensions {
    pub width: i32,
    pub height: i32,
}

/// Target rectangle expressed the way `MoveWindow` takes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Left,
    Middle,
    Right,
}

/// One of the nine grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridCell {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl GridCell {
    pub const ALL: [GridCell; 9] = [
        GridCell::TopLeft,
        GridCell::Top,
        GridCell::TopRight,
        GridCell::Left,
        GridCell::Center,
        GridCell::Right,
        GridCell::BottomLeft,
        GridCell::Bottom,
        GridCell::BottomRight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GridCell::TopLeft => "top-left",
            GridCell::Top => "top",
            GridCell::TopRight => "top-right",
            GridCell::Left => "left",
            GridCell::Center => "center",
            GridCell::Right => "right",
            GridCell::BottomLeft => "bottom-left",
            GridCell::Bottom => "bottom",
            GridCell::BottomRight => "bottom-right",
        }
    }

    fn row(self) -> Row {
        match self {
            GridCell::TopLeft | GridCell::Top | GridCell::TopRight => Row::Top,
            GridCell::Left | GridCell::Center | GridCell::Right => Row::Middle,
            GridCell::BottomLeft | GridCell::Bottom | GridCell::BottomRight => Row::Bottom,
        }
    }

    fn column(self) -> Column {
        match self {
            GridCell::TopLeft | GridCell::Left | GridCell::BottomLeft => Column::Left,
            GridCell::Top | GridCell::Center | GridCell::Bottom => Column::Middle,
            GridCell::TopRight | GridCell::Right | GridCell::BottomRight => Column::Right,
        }
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GridCell {
    type Err = String;

    /// Accepts `top-left`, `top_left` and `topleft`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        GridCell::ALL
            .into_iter()
            .find(|cell| cell.name().replace('-', "") == key)
            .ok_or_else(|| format!("unknown grid cell: {s}"))
    }
}

/// Horizontal shift that keeps the target on the monitor containing
/// `current_left`, assuming identical monitors laid out left to right.
fn monitor_offset(screen: ScreenDimensions, current_left: i32) -> i64 {
    if screen.width <= 0 {
        return 0;
    }
    let width = i64::from(screen.width);
    width * (i64::from(current_left) - i64::from(FRAME_OFFSET)).div_euclid(width)
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Compute where `cell` lands for a window whose left edge is currently at
/// `current_left`.  Results outside the `i32` range saturate.
pub fn placement(cell: GridCell, screen: ScreenDimensions, current_left: i32) -> Placement {
    let frame = i64::from(FRAME_OFFSET);
    let third_width = i64::from(screen.width).div_euclid(3);
    let third_height = i64::from(screen.height).div_euclid(3);

    let (top, height) = match cell.row() {
        Row::Top => (0, third_height),
        Row::Middle => (third_height + frame, third_height - frame),
        Row::Bottom => (
            third_height * 2 + frame,
            third_height - i64::from(TASKBAR_HEIGHT) - frame,
        ),
    };

    let (left, width) = match cell.column() {
        Column::Left => (frame, third_width - 3 * frame),
        Column::Middle => (third_width, third_width),
        Column::Right => (third_width * 2 + 2 * frame, third_width - 3 * frame),
    };

    Placement {
        left: saturate(left + monitor_offset(screen, current_left)),
        top: saturate(top),
        width: saturate(width),
        height: saturate(height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FHD: ScreenDimensions = ScreenDimensions {
        width: 1920,
        height: 1080,
    };

    #[test]
    fn test_center_on_primary() {
        let p = placement(GridCell::Center, FHD, 100);
        assert_eq!(
            p,
            Placement {
                left: 640,
                top: 353,
                width: 640,
                height: 367
            }
        );
    }

    #[test]
    fn test_top_left_covers_frame() {
        let p = placement(GridCell::TopLeft, FHD, 0);
        assert_eq!(
            p,
            Placement {
                left: -7,
                top: 0,
                width: 661,
                height: 360
            }
        );
    }

    #[test]
    fn test_bottom_right_leaves_taskbar() {
        let p = placement(GridCell::BottomRight, FHD, 0);
        assert_eq!(
            p,
            Placement {
                left: 1266,
                top: 713,
                width: 661,
                height: 333
            }
        );
        assert_eq!(p.top + p.height, 1080 - TASKBAR_HEIGHT);
    }

    #[test]
    fn test_second_monitor_offset() {
        let primary = placement(GridCell::Left, FHD, 10);
        let secondary = placement(GridCell::Left, FHD, 2000);
        assert_eq!(secondary.left - primary.left, 1920);
        assert_eq!(secondary.top, primary.top);
    }

    #[test]
    fn test_window_snapped_left_stays_on_its_monitor() {
        // A window already snapped to the left column sits at x = -7.
        assert_eq!(placement(GridCell::Right, FHD, -7).left, 1266);
        assert_eq!(placement(GridCell::Right, FHD, 1913).left, 1266 + 1920);
    }

    #[test]
    fn test_zero_width_screen_does_not_panic() {
        let p = placement(
            GridCell::Center,
            ScreenDimensions {
                width: 0,
                height: 0,
            },
            500,
        );
        assert_eq!(p.left, 0);
    }

    #[test]
    fn test_huge_screen_saturates() {
        let huge = ScreenDimensions {
            width: i32::MAX,
            height: i32::MAX,
        };
        let p = placement(GridCell::Left, huge, -100);
        assert_eq!(p.left, i32::MIN);
        assert_eq!(p.width, i32::MAX / 3 + 21);

        let p = placement(GridCell::BottomRight, huge, i32::MAX);
        assert!(p.top > 0);
        assert!(p.height > 0);
    }

    #[test]
    fn test_far_right_left_edge_does_not_overflow() {
        let p = placement(GridCell::Left, FHD, i32::MAX);
        assert_eq!(p.left, 2_147_483_513);
        assert_eq!(p.width, 661);
    }

    #[test]
    fn test_grid_cell_parse() {
        assert_eq!("top-left".parse::<GridCell>(), Ok(GridCell::TopLeft));
        assert_eq!("BOTTOM_RIGHT".parse::<GridCell>(), Ok(GridCell::BottomRight));
        assert_eq!("center".parse::<GridCell>(), Ok(GridCell::Center));
        assert!("middle-ish".parse::<GridCell>().is_err());
    }

    #[test]
    fn test_grid_cell_names_round_trip() {
        for cell in GridCell::ALL {
            assert_eq!(cell.to_string().parse::<GridCell>(), Ok(cell));
        }
    }
}
