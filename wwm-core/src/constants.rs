//! Win32 constants that callers pass as plain integers.
//!
//! Values are copied from `WinUser.h` so that hosts (and non-Windows builds)
//! can use them without the `windows` crate.

// ShowWindow commands
pub const SW_HIDE: i32 = 0;
pub const SW_SHOWNORMAL: i32 = 1;
pub const SW_SHOWMINIMIZED: i32 = 2;
pub const SW_MAXIMIZE: i32 = 3;
pub const SW_SHOWNOACTIVATE: i32 = 4;
pub const SW_SHOW: i32 = 5;
pub const SW_MINIMIZE: i32 = 6;
pub const SW_SHOWMINNOACTIVE: i32 = 7;
pub const SW_SHOWNA: i32 = 8;
pub const SW_RESTORE: i32 = 9;
pub const SW_SHOWDEFAULT: i32 = 10;
pub const SW_FORCEMINIMIZE: i32 = 11;

// GetWindowLong / SetWindowLong indices
pub const GWL_WNDPROC: i32 = -4;
pub const GWL_HINSTANCE: i32 = -6;
pub const GWL_ID: i32 = -12;
pub const GWL_STYLE: i32 = -16;
pub const GWL_EXSTYLE: i32 = -20;
pub const GWL_USERDATA: i32 = -21;

// SetWindowPos insert-after handles
pub const HWND_TOP: isize = 0;
pub const HWND_BOTTOM: isize = 1;
pub const HWND_TOPMOST: isize = -1;
pub const HWND_NOTOPMOST: isize = -2;

// SetWindowPos flags
pub const SWP_NOSIZE: u32 = 0x0001;
pub const SWP_NOMOVE: u32 = 0x0002;
pub const SWP_NOZORDER: u32 = 0x0004;
pub const SWP_NOREDRAW: u32 = 0x0008;
pub const SWP_NOACTIVATE: u32 = 0x0010;
pub const SWP_FRAMECHANGED: u32 = 0x0020;
pub const SWP_SHOWWINDOW: u32 = 0x0040;
pub const SWP_HIDEWINDOW: u32 = 0x0080;
pub const SWP_NOCOPYBITS: u32 = 0x0100;
pub const SWP_NOOWNERZORDER: u32 = 0x0200;
pub const SWP_NOSENDCHANGING: u32 = 0x0400;
pub const SWP_ASYNCWINDOWPOS: u32 = 0x4000;

// Window styles
pub const WS_POPUP: u32 = 0x8000_0000;
pub const WS_VISIBLE: u32 = 0x1000_0000;
pub const WS_CAPTION: u32 = 0x00C0_0000;
pub const WS_SYSMENU: u32 = 0x0008_0000;
pub const WS_THICKFRAME: u32 = 0x0004_0000;
pub const WS_MINIMIZEBOX: u32 = 0x0002_0000;
pub const WS_MAXIMIZEBOX: u32 = 0x0001_0000;
pub const WS_OVERLAPPEDWINDOW: u32 =
    WS_CAPTION | WS_SYSMENU | WS_THICKFRAME | WS_MINIMIZEBOX | WS_MAXIMIZEBOX;

/// Mouse message delivered to the low-level hook on primary-button release.
pub const WM_LBUTTONUP: u32 = 0x0202;

/// Every constant above, by name, for registration in host modules.
pub const EXPORTED: &[(&str, i64)] = &[
    ("SW_HIDE", SW_HIDE as i64),
    ("SW_SHOWNORMAL", SW_SHOWNORMAL as i64),
    ("SW_SHOWMINIMIZED", SW_SHOWMINIMIZED as i64),
    ("SW_MAXIMIZE", SW_MAXIMIZE as i64),
    ("SW_SHOWNOACTIVATE", SW_SHOWNOACTIVATE as i64),
    ("SW_SHOW", SW_SHOW as i64),
    ("SW_MINIMIZE", SW_MINIMIZE as i64),
    ("SW_SHOWMINNOACTIVE", SW_SHOWMINNOACTIVE as i64),
    ("SW_SHOWNA", SW_SHOWNA as i64),
    ("SW_RESTORE", SW_RESTORE as i64),
    ("SW_SHOWDEFAULT", SW_SHOWDEFAULT as i64),
    ("SW_FORCEMINIMIZE", SW_FORCEMINIMIZE as i64),
    ("GWL_WNDPROC", GWL_WNDPROC as i64),
    ("GWL_HINSTANCE", GWL_HINSTANCE as i64),
    ("GWL_ID", GWL_ID as i64),
    ("GWL_STYLE", GWL_STYLE as i64),
    ("GWL_EXSTYLE", GWL_EXSTYLE as i64),
    ("GWL_USERDATA", GWL_USERDATA as i64),
    ("HWND_TOP", HWND_TOP as i64),
    ("HWND_BOTTOM", HWND_BOTTOM as i64),
    ("HWND_TOPMOST", HWND_TOPMOST as i64),
    ("HWND_NOTOPMOST", HWND_NOTOPMOST as i64),
    ("SWP_NOSIZE", SWP_NOSIZE as i64),
    ("SWP_NOMOVE", SWP_NOMOVE as i64),
    ("SWP_NOZORDER", SWP_NOZORDER as i64),
    ("SWP_NOREDRAW", SWP_NOREDRAW as i64),
    ("SWP_NOACTIVATE", SWP_NOACTIVATE as i64),
    ("SWP_FRAMECHANGED", SWP_FRAMECHANGED as i64),
    ("SWP_SHOWWINDOW", SWP_SHOWWINDOW as i64),
    ("SWP_HIDEWINDOW", SWP_HIDEWINDOW as i64),
    ("SWP_NOCOPYBITS", SWP_NOCOPYBITS as i64),
    ("SWP_NOOWNERZORDER", SWP_NOOWNERZORDER as i64),
    ("SWP_NOSENDCHANGING", SWP_NOSENDCHANGING as i64),
    ("SWP_ASYNCWINDOWPOS", SWP_ASYNCWINDOWPOS as i64),
    ("WS_POPUP", WS_POPUP as i64),
    ("WS_VISIBLE", WS_VISIBLE as i64),
    ("WS_CAPTION", WS_CAPTION as i64),
    ("WS_SYSMENU", WS_SYSMENU as i64),
    ("WS_THICKFRAME", WS_THICKFRAME as i64),
    ("WS_MINIMIZEBOX", WS_MINIMIZEBOX as i64),
    ("WS_MAXIMIZEBOX", WS_MAXIMIZEBOX as i64),
    ("WS_OVERLAPPEDWINDOW", WS_OVERLAPPEDWINDOW as i64),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_exported_names_unique() {
        let names: HashSet<&str> = EXPORTED.iter().map(|(n, _)| *n).collect();
        assert_eq!(names.len(), EXPORTED.len());
    }

    #[test]
    fn test_overlapped_window_matches_winuser() {
        assert_eq!(WS_OVERLAPPEDWINDOW, 0x00CF_0000);
    }

    #[test]
    fn test_topmost_handles_are_negative() {
        assert_eq!(HWND_TOPMOST, -1);
        assert_eq!(HWND_NOTOPMOST, -2);
    }
}
