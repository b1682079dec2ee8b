//! Window handle and bounds types, plus the [`Window`] convenience wrapper.
//!
//! [`Window`] builds the higher-level moves (snap to grid, topmost, style
//! swaps) out of the same [`WindowApi`] primitives the host operations use.

use std::thread;
use std::time::Duration;

use serde::Serialize;

use crate::constants::{
    GWL_STYLE, HWND_NOTOPMOST, HWND_TOP, HWND_TOPMOST, SWP_SHOWWINDOW, SW_HIDE, SW_MAXIMIZE,
    SW_MINIMIZE, SW_RESTORE, SW_SHOW,
};
use crate::errors::WindowManagerError;
use crate::layout::{self, GridCell, Placement, ScreenDimensions};
use crate::platform::WindowApi;

/// Size of the title buffer, terminator included.  Titles come back with at
/// most `TITLE_CAPACITY - 1` UTF-16 units.
pub const TITLE_CAPACITY: usize = 256;

/// Delay between rewriting `GWL_STYLE` and the `SetWindowPos` that makes the
/// new frame take effect.
const STYLE_REFRESH_DELAY: Duration = Duration::from_millis(10);

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

/// Opaque OS window handle (`HWND`) at pointer width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

impl WindowHandle {
    /// Handle from a host integer: sign-extended, as `(HWND)(int)` does.
    pub fn from_host(value: i32) -> Self {
        WindowHandle(value as isize)
    }

    /// Handle as a host integer.  User handles only carry 32 significant
    /// bits, so truncation is lossless for real windows.
    pub fn to_host(self) -> i32 {
        self.0 as i32
    }
}

/// Window bounding rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WindowBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl WindowBounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

// ---------------------------------------------------------------------------
// Window
// ---------------------------------------------------------------------------

/// A window plus the screen geometry needed for grid snapping.
#[derive(Clone, Copy)]
pub struct Window<'a> {
    api: &'a dyn WindowApi,
    handle: WindowHandle,
    screen: Option<ScreenDimensions>,
}

impl std::fmt::Debug for Window<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("handle", &self.handle)
            .field("screen", &self.screen)
            .finish()
    }
}

impl<'a> Window<'a> {
    pub fn new(api: &'a dyn WindowApi, handle: WindowHandle) -> Self {
        Self {
            api,
            handle,
            screen: None,
        }
    }

    /// The current foreground window.
    pub fn foreground(api: &'a dyn WindowApi) -> Self {
        Self::new(api, api.foreground_window())
    }

    pub fn handle(&self) -> WindowHandle {
        self.handle
    }

    pub fn set_screen_dimensions(&mut self, screen: ScreenDimensions) {
        self.screen = Some(screen);
    }

    pub fn with_screen_dimensions(mut self, screen: ScreenDimensions) -> Self {
        self.set_screen_dimensions(screen);
        self
    }

    pub fn bounds(&self) -> WindowBounds {
        self.api.window_rect(self.handle)
    }

    pub fn title(&self) -> String {
        self.api.window_text(self.handle)
    }

    pub fn width(&self) -> i32 {
        self.bounds().width()
    }

    pub fn height(&self) -> i32 {
        self.bounds().height()
    }

    /// `GWL_STYLE` bits.
    pub fn style(&self) -> i32 {
        self.api.window_long(self.handle, GWL_STYLE)
    }

    pub fn set_state(&self, command: i32) {
        self.api.show_window(self.handle, command);
    }

    pub fn show(&self) {
        self.set_state(SW_SHOW);
    }

    pub fn hide(&self) {
        self.set_state(SW_HIDE);
    }

    pub fn minimize(&self) {
        self.set_state(SW_MINIMIZE);
    }

    pub fn restore(&self) {
        self.set_state(SW_RESTORE);
    }

    pub fn maximize(&self) {
        self.set_state(SW_MAXIMIZE);
    }

    /// Restore (a maximized window ignores `MoveWindow`), then move.
    pub fn move_to(&self, target: Placement) {
        self.restore();
        self.api.move_window(
            self.handle,
            target.left,
            target.top,
            target.width,
            target.height,
        );
    }

    /// Move the top-left corner, keeping the current size and z-order slot.
    pub fn set_position(&self, left: i32, top: i32) {
        let b = self.bounds();
        self.api.set_window_pos(
            self.handle,
            WindowHandle(HWND_TOP),
            left,
            top,
            b.width(),
            b.height(),
            0,
        );
    }

    pub fn set_topmost(&self, topmost: bool, flags: u32) {
        let b = self.bounds();
        let insert_after = if topmost { HWND_TOPMOST } else { HWND_NOTOPMOST };
        self.api.set_window_pos(
            self.handle,
            WindowHandle(insert_after),
            b.left,
            b.top,
            b.width(),
            b.height(),
            flags,
        );
    }

    /// Replace `GWL_STYLE` and re-show the window at its previous rectangle.
    pub fn set_style(&self, style: i32) {
        let b = self.bounds();
        self.api.set_window_long(self.handle, GWL_STYLE, style);
        thread::sleep(STYLE_REFRESH_DELAY);
        self.api.set_window_pos(
            self.handle,
            WindowHandle(HWND_TOP),
            b.left,
            b.top,
            b.width(),
            b.height(),
            SWP_SHOWWINDOW,
        );
    }

    /// Where `cell` would put this window.
    pub fn placement_for(&self, cell: GridCell) -> Result<Placement, WindowManagerError> {
        let screen = self
            .screen
            .ok_or(WindowManagerError::MissingScreenDimensions)?;
        Ok(layout::placement(cell, screen, self.bounds().left))
    }

    /// Snap to a grid cell.  Snapping to [`GridCell::Center`] when already
    /// there maximizes instead.
    pub fn clip(&self, cell: GridCell) -> Result<(), WindowManagerError> {
        let target = self.placement_for(cell)?;

        if cell == GridCell::Center {
            let b = self.bounds();
            let current = Placement {
                left: b.left,
                top: b.top,
                width: b.width(),
                height: b.height(),
            };
            if current == target {
                log::debug!("window {:#x} already centred, maximizing", self.handle.0);
                self.maximize();
                return Ok(());
            }
        }

        self.move_to(target);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
