//! Win32 backend for [`WindowApi`].
//!
//! Return codes are absorbed: failures are logged at `debug` and the call
//! behaves as a no-op (or yields zeroes / an empty string).

use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;

use windows::Win32::Foundation::{HWND, RECT, TRUE};
use windows::Win32::UI::WindowsAndMessaging::{
    GetForegroundWindow, GetWindowLongW, GetWindowRect, GetWindowTextW, MoveWindow,
    SetWindowLongW, SetWindowPos, ShowWindow, SET_WINDOW_POS_FLAGS, SHOW_WINDOW_CMD,
    WINDOW_LONG_PTR_INDEX,
};

use super::WindowApi;
use crate::window::{WindowBounds, WindowHandle, TITLE_CAPACITY};

fn hwnd(window: WindowHandle) -> HWND {
    HWND(window.0 as *mut core::ffi::c_void)
}

/// Stateless handle to the Win32 windowing API.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Api;

impl WindowApi for Win32Api {
    fn foreground_window(&self) -> WindowHandle {
        let hwnd = unsafe { GetForegroundWindow() };
        WindowHandle(hwnd.0 as isize)
    }

    fn move_window(&self, window: WindowHandle, x: i32, y: i32, width: i32, height: i32) {
        if let Err(e) = unsafe { MoveWindow(hwnd(window), x, y, width, height, TRUE) } {
            log::debug!("MoveWindow({:#x}) failed: {e}", window.0);
        }
    }

    fn window_rect(&self, window: WindowHandle) -> WindowBounds {
        let mut rect = RECT::default();
        if let Err(e) = unsafe { GetWindowRect(hwnd(window), &mut rect) } {
            log::debug!("GetWindowRect({:#x}) failed: {e}", window.0);
            return WindowBounds::default();
        }
        WindowBounds {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
        }
    }

    fn window_text(&self, window: WindowHandle) -> String {
        let mut buf = [0u16; TITLE_CAPACITY];
        let copied = unsafe { GetWindowTextW(hwnd(window), &mut buf) };
        if copied <= 0 {
            return String::new();
        }
        OsString::from_wide(&buf[..copied as usize])
            .to_string_lossy()
            .into_owned()
    }

    fn show_window(&self, window: WindowHandle, command: i32) {
        // The return value is the previous visibility, not a status.
        let _ = unsafe { ShowWindow(hwnd(window), SHOW_WINDOW_CMD(command)) };
    }

    fn set_window_pos(
        &self,
        window: WindowHandle,
        insert_after: WindowHandle,
        x: i32,
        y: i32,
        cx: i32,
        cy: i32,
        flags: u32,
    ) {
        let result = unsafe {
            SetWindowPos(
                hwnd(window),
                hwnd(insert_after),
                x,
                y,
                cx,
                cy,
                SET_WINDOW_POS_FLAGS(flags),
            )
        };
        if let Err(e) = result {
            log::debug!("SetWindowPos({:#x}) failed: {e}", window.0);
        }
    }

    fn set_window_long(&self, window: WindowHandle, index: i32, value: i32) -> i32 {
        unsafe { SetWindowLongW(hwnd(window), WINDOW_LONG_PTR_INDEX(index), value) }
    }

    fn window_long(&self, window: WindowHandle, index: i32) -> i32 {
        unsafe { GetWindowLongW(hwnd(window), WINDOW_LONG_PTR_INDEX(index)) }
    }
}

#[cfg(test)]
mod tests {
    //! Real-window checks.  Every test creates and destroys its own hidden
    //! window and never touches windows owned by other processes.

    use super::*;
    use crate::constants::{GWL_USERDATA, SW_HIDE};
    use windows::core::w;
    use windows::Win32::UI::WindowsAndMessaging::{
        CreateWindowExW, DestroyWindow, WINDOW_EX_STYLE, WS_OVERLAPPEDWINDOW,
    };

    /// A hidden top-level `STATIC` window owned by the test.
    struct TestWindow(HWND);

    impl TestWindow {
        fn create(title: &str) -> Self {
            let wide: Vec<u16> = title.encode_utf16().chain(std::iter::once(0)).collect();
            let hwnd = unsafe {
                CreateWindowExW(
                    WINDOW_EX_STYLE(0),
                    w!("STATIC"),
                    windows::core::PCWSTR(wide.as_ptr()),
                    WS_OVERLAPPEDWINDOW,
                    100,
                    100,
                    300,
                    200,
                    None,
                    None,
                    None,
                    None,
                )
            }
            .expect("CreateWindowExW failed");
            Self(hwnd)
        }

        fn handle(&self) -> WindowHandle {
            WindowHandle(self.0 .0 as isize)
        }
    }

    impl Drop for TestWindow {
        fn drop(&mut self) {
            let _ = unsafe { DestroyWindow(self.0) };
        }
    }

    #[test]
    fn test_move_then_bounds() {
        let win = TestWindow::create("wwm move test");
        let api = Win32Api;
        api.show_window(win.handle(), SW_HIDE);
        api.move_window(win.handle(), 120, 140, 400, 300);
        let b = api.window_rect(win.handle());
        assert_eq!((b.left, b.top, b.right, b.bottom), (120, 140, 520, 440));
    }

    #[test]
    fn test_window_long_round_trip() {
        let win = TestWindow::create("wwm long test");
        let api = Win32Api;
        api.set_window_long(win.handle(), GWL_USERDATA, 0x1234);
        assert_eq!(api.window_long(win.handle(), GWL_USERDATA), 0x1234);
    }

    #[test]
    fn test_long_title_truncated() {
        let title = "x".repeat(400);
        let win = TestWindow::create(&title);
        let text = Win32Api.window_text(win.handle());
        assert_eq!(text.chars().count(), TITLE_CAPACITY - 1);
    }

    #[test]
    fn test_invalid_handle_yields_zeroes() {
        let api = Win32Api;
        let bogus = WindowHandle(0x7fff_fff0);
        assert_eq!(api.window_rect(bogus), WindowBounds::default());
        assert_eq!(api.window_text(bogus), "");
    }
}
