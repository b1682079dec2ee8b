//! Fallback backend for targets without the Win32 windowing API.
//!
//! Behaves like every call failing at the OS level: queries return zeroes,
//! mutations do nothing.

use super::WindowApi;
use crate::window::{WindowBounds, WindowHandle};

#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedApi;

impl WindowApi for UnsupportedApi {
    fn foreground_window(&self) -> WindowHandle {
        WindowHandle(0)
    }

    fn move_window(&self, window: WindowHandle, _x: i32, _y: i32, _width: i32, _height: i32) {
        log::debug!("move_window({:#x}) ignored: no window manager", window.0);
    }

    fn window_rect(&self, _window: WindowHandle) -> WindowBounds {
        WindowBounds::default()
    }

    fn window_text(&self, _window: WindowHandle) -> String {
        String::new()
    }

    fn show_window(&self, window: WindowHandle, _command: i32) {
        log::debug!("show_window({:#x}) ignored: no window manager", window.0);
    }

    fn set_window_pos(
        &self,
        window: WindowHandle,
        _insert_after: WindowHandle,
        _x: i32,
        _y: i32,
        _cx: i32,
        _cy: i32,
        _flags: u32,
    ) {
        log::debug!("set_window_pos({:#x}) ignored: no window manager", window.0);
    }

    fn set_window_long(&self, window: WindowHandle, _index: i32, _value: i32) -> i32 {
        log::debug!("set_window_long({:#x}) ignored: no window manager", window.0);
        0
    }

    fn window_long(&self, _window: WindowHandle, _index: i32) -> i32 {
        0
    }
}
