//! C ABI DLL for windows-window-manager -- loadable by ctypes, C#, or any FFI
//! consumer.
//!
//! All exported functions follow the convention:
//! - Return `i32` status code: `WWM_OK=0`, `WWM_ERROR=-1`
//! - Results are written through out-pointers
//! - String outputs allocated by Rust, freed via `wwm_free_string()`
//! - Last error retrievable via `wwm_last_error()`
//!
//! Arguments are already typed by the C signature, so the only argument
//! errors here are null pointers.  Handles are pointer-width (`intptr_t`).

use std::cell::RefCell;
use std::ffi::{c_char, c_void, CString};
use std::ptr;
use std::sync::Arc;

use wwm_core::hook::{self, HookCallback, MouseUpHook};
use wwm_core::platform::{native, WindowApi};
use wwm_core::window::WindowHandle;

pub const WWM_OK: i32 = 0;
pub const WWM_ERROR: i32 = -1;

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Window rectangle in screen coordinates.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WwmBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// C callback for mouse-up events; receives the `user_data` given at install.
pub type WwmMouseUpCallback = Option<unsafe extern "C" fn(user_data: *mut c_void)>;

/// Opaque supervised hook returned by [`wwm_mouse_up_hook_start`].
pub struct WwmMouseUpHook(MouseUpHook);

/// Caller-owned context pointer handed back to the callback.  The caller
/// guarantees it stays valid, and is safe to use from the hook thread, for
/// the lifetime of the hook.
#[derive(Clone, Copy)]
struct UserData(*mut c_void);

unsafe impl Send for UserData {}
unsafe impl Sync for UserData {}

impl UserData {
    fn get(self) -> *mut c_void {
        self.0
    }
}

fn c_callback(callback: WwmMouseUpCallback, user_data: *mut c_void) -> Option<HookCallback> {
    let callback = callback?;
    let user_data = UserData(user_data);
    Some(Arc::new(move || unsafe { callback(user_data.get()) }))
}

/// Retrieve the last error message (thread-local).
///
/// Returns a pointer valid until the next wwm_* call on this thread.
/// Returns null if no error has occurred.
#[no_mangle]
pub extern "C" fn wwm_last_error() -> *const c_char {
    LAST_ERROR.with(|e| {
        e.borrow()
            .as_ref()
            .map(|s| s.as_ptr())
            .unwrap_or(ptr::null())
    })
}

/// Free a string previously allocated by a wwm_* function.
///
/// # Safety
///
/// `ptr` must be a pointer returned by a wwm_* function or null.
#[no_mangle]
pub unsafe extern "C" fn wwm_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(unsafe { CString::from_raw(ptr) });
    }
}

/// Handle of the foreground window (0 if none).
#[no_mangle]
pub extern "C" fn wwm_get_active_window() -> isize {
    native().foreground_window().0
}

/// Move and resize a window; a redraw is requested.
#[no_mangle]
pub extern "C" fn wwm_move_window(hwnd: isize, x: i32, y: i32, width: i32, height: i32) -> i32 {
    native().move_window(WindowHandle(hwnd), x, y, width, height);
    WWM_OK
}

/// Read a window's screen rectangle.
///
/// # Safety
///
/// `out_bounds` must be a valid pointer to a `WwmBounds`.
#[no_mangle]
pub unsafe extern "C" fn wwm_get_window_bounds(hwnd: isize, out_bounds: *mut WwmBounds) -> i32 {
    if out_bounds.is_null() {
        set_last_error("out_bounds is null");
        return WWM_ERROR;
    }
    let b = native().window_rect(WindowHandle(hwnd));
    unsafe {
        *out_bounds = WwmBounds {
            left: b.left,
            top: b.top,
            right: b.right,
            bottom: b.bottom,
        }
    };
    WWM_OK
}

/// Read a window's title as UTF-8 (at most 255 UTF-16 units of source).
///
/// # Safety
///
/// `out_title` must be a valid pointer to a `*mut c_char`.
/// On success, `*out_title` is set to a heap-allocated C string.
/// Caller must free with `wwm_free_string()`.
#[no_mangle]
pub unsafe extern "C" fn wwm_get_window_title(hwnd: isize, out_title: *mut *mut c_char) -> i32 {
    if out_title.is_null() {
        set_last_error("out_title is null");
        return WWM_ERROR;
    }
    let title = native().window_text(WindowHandle(hwnd));
    // Interior NULs cannot cross a C string; cut the title at the first one.
    let title = title.split('\0').next().unwrap_or_default().to_owned();
    match CString::new(title) {
        Ok(cstr) => {
            unsafe { *out_title = cstr.into_raw() };
            WWM_OK
        }
        Err(e) => {
            set_last_error(&format!("CString conversion failed: {e}"));
            WWM_ERROR
        }
    }
}

/// `ShowWindow(hwnd, state)`.
#[no_mangle]
pub extern "C" fn wwm_set_window_state(hwnd: isize, state: i32) -> i32 {
    native().show_window(WindowHandle(hwnd), state);
    WWM_OK
}

/// `SetWindowPos(hwnd, insert_after, x, y, cx, cy, flags)`.
#[no_mangle]
pub extern "C" fn wwm_set_window_pos(
    hwnd: isize,
    insert_after: isize,
    x: i32,
    y: i32,
    cx: i32,
    cy: i32,
    flags: u32,
) -> i32 {
    native().set_window_pos(
        WindowHandle(hwnd),
        WindowHandle(insert_after),
        x,
        y,
        cx,
        cy,
        flags,
    );
    WWM_OK
}

/// `SetWindowLongW(hwnd, index, value)`.
#[no_mangle]
pub extern "C" fn wwm_set_window_long(hwnd: isize, index: i32, value: i32) -> i32 {
    native().set_window_long(WindowHandle(hwnd), index, value);
    WWM_OK
}

/// `GetWindowLongW(hwnd, index)`.
///
/// # Safety
///
/// `out_value` must be a valid pointer to an `i32`.
#[no_mangle]
pub unsafe extern "C" fn wwm_get_window_long(hwnd: isize, index: i32, out_value: *mut i32) -> i32 {
    if out_value.is_null() {
        set_last_error("out_value is null");
        return WWM_ERROR;
    }
    unsafe { *out_value = native().window_long(WindowHandle(hwnd), index) };
    WWM_OK
}

/// Install a mouse-up hook on the calling thread and pump messages until
/// the thread receives `WM_QUIT` (see `wwm_request_quit()`).  Fails if the
/// hook cannot be installed.
///
/// # Safety
///
/// `callback` is invoked on this thread with `user_data`, which must stay
/// valid until this function returns.
#[no_mangle]
pub unsafe extern "C" fn wwm_create_mouse_up_hook(
    callback: WwmMouseUpCallback,
    user_data: *mut c_void,
) -> i32 {
    match hook::create_mouse_up_hook(c_callback(callback, user_data)) {
        Ok(()) => WWM_OK,
        Err(e) => {
            set_last_error(&e.to_string());
            WWM_ERROR
        }
    }
}

/// OS id of the calling thread, for `wwm_request_quit()`.
#[no_mangle]
pub extern "C" fn wwm_current_thread_id() -> u32 {
    hook::current_thread_id()
}

/// Post `WM_QUIT` to a thread blocked in `wwm_create_mouse_up_hook()`.
#[no_mangle]
pub extern "C" fn wwm_request_quit(thread_id: u32) -> i32 {
    if hook::request_quit(thread_id) {
        WWM_OK
    } else {
        set_last_error(&format!("could not post WM_QUIT to thread {thread_id}"));
        WWM_ERROR
    }
}

/// Install a mouse-up hook on a dedicated thread.
///
/// # Safety
///
/// `out_hook` must be a valid pointer to a `*mut WwmMouseUpHook`.  On
/// success it receives a hook that must be released with
/// `wwm_mouse_up_hook_stop()`.  `callback` runs on the hook thread with
/// `user_data`, which must stay valid (and be usable from that thread)
/// until the hook is stopped.
#[no_mangle]
pub unsafe extern "C" fn wwm_mouse_up_hook_start(
    callback: WwmMouseUpCallback,
    user_data: *mut c_void,
    out_hook: *mut *mut WwmMouseUpHook,
) -> i32 {
    if out_hook.is_null() {
        set_last_error("out_hook is null");
        return WWM_ERROR;
    }
    let Some(callback) = c_callback(callback, user_data) else {
        set_last_error("callback is null");
        return WWM_ERROR;
    };
    match MouseUpHook::install_callback(callback) {
        Ok(hook) => {
            unsafe { *out_hook = Box::into_raw(Box::new(WwmMouseUpHook(hook))) };
            WWM_OK
        }
        Err(e) => {
            set_last_error(&e.to_string());
            WWM_ERROR
        }
    }
}

/// Remove a hook started with `wwm_mouse_up_hook_start()`, wait for its
/// thread to exit, and free it.
///
/// # Safety
///
/// `hook` must be a pointer returned by `wwm_mouse_up_hook_start()` that
/// has not been stopped yet, or null.
#[no_mangle]
pub unsafe extern "C" fn wwm_mouse_up_hook_stop(hook: *mut WwmMouseUpHook) {
    if !hook.is_null() {
        let hook = unsafe { Box::from_raw(hook) };
        hook.0.stop();
        log::debug!("supervised mouse-up hook released");
    }
}

/// Number of mouse hooks currently installed by this process.
#[no_mangle]
pub extern "C" fn wwm_active_hook_count() -> usize {
    hook::active_hook_count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_null_out_pointers_report_errors() {
        unsafe {
            assert_eq!(wwm_get_window_bounds(0, ptr::null_mut()), WWM_ERROR);
            let msg = CStr::from_ptr(wwm_last_error()).to_str().unwrap();
            assert_eq!(msg, "out_bounds is null");

            assert_eq!(wwm_get_window_title(0, ptr::null_mut()), WWM_ERROR);
            assert_eq!(wwm_get_window_long(0, -16, ptr::null_mut()), WWM_ERROR);
        }
    }

    #[test]
    fn test_null_callback_is_rejected() {
        let mut out: *mut WwmMouseUpHook = ptr::null_mut();
        let status = unsafe { wwm_mouse_up_hook_start(None, ptr::null_mut(), &mut out) };
        assert_eq!(status, WWM_ERROR);
        assert!(out.is_null());

        let status = unsafe { wwm_create_mouse_up_hook(None, ptr::null_mut()) };
        assert_eq!(status, WWM_ERROR);
        let msg = unsafe { CStr::from_ptr(wwm_last_error()) }.to_str().unwrap();
        assert_eq!(msg, "Wrong arguments");
    }

    #[test]
    fn test_title_round_trips_through_free() {
        let mut out: *mut c_char = ptr::null_mut();
        unsafe {
            assert_eq!(wwm_get_window_title(0, &mut out), WWM_OK);
            assert!(!out.is_null());
            wwm_free_string(out);
        }
    }

    #[cfg(not(windows))]
    #[test]
    fn test_request_quit_reports_failure() {
        assert_eq!(wwm_request_quit(wwm_current_thread_id()), WWM_ERROR);
        let msg = unsafe { CStr::from_ptr(wwm_last_error()) }.to_str().unwrap();
        assert!(msg.starts_with("could not post WM_QUIT"));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_blocking_hook_reports_unsupported() {
        unsafe extern "C" fn noop(_: *mut c_void) {}
        let status = unsafe { wwm_create_mouse_up_hook(Some(noop), ptr::null_mut()) };
        assert_eq!(status, WWM_ERROR);
        let msg = unsafe { CStr::from_ptr(wwm_last_error()) }.to_str().unwrap();
        assert!(msg.starts_with("Unsupported"));
    }

    #[test]
    fn test_stop_null_hook_is_noop() {
        unsafe { wwm_mouse_up_hook_stop(ptr::null_mut()) };
    }
}
