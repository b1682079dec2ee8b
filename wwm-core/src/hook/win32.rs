//! `SetWindowsHookExW(WH_MOUSE_LL)` and the thread message loop.

use std::cell::RefCell;

use windows::Win32::Foundation::{HINSTANCE, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, DispatchMessageW, GetMessageW, PeekMessageW, PostThreadMessageW,
    SetWindowsHookExW, TranslateMessage, UnhookWindowsHookEx, HHOOK, MSG, PM_NOREMOVE,
    WH_MOUSE_LL, WM_QUIT,
};

use super::{dispatch, note_installed, note_removed, HookCallback};
use crate::errors::WindowManagerError;

struct Registration {
    hook: HHOOK,
    callback: HookCallback,
}

thread_local! {
    static REGISTRATION: RefCell<Option<Registration>> = const { RefCell::new(None) };
}

/// `WH_MOUSE_LL` procedure.  Runs on the thread that installed the hook,
/// from inside `GetMessageW`.
unsafe extern "system" fn low_level_mouse_proc(
    code: i32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let (hook, callback) = REGISTRATION.with(|r| match r.borrow().as_ref() {
        Some(reg) => (reg.hook, Some(reg.callback.clone())),
        None => (HHOOK::default(), None),
    });

    if let Some(callback) = callback {
        dispatch(code, wparam.0 as u32, &callback);
    }

    unsafe { CallNextHookEx(hook, code, wparam, lparam) }
}

pub(super) fn current_thread_id() -> u32 {
    unsafe { GetCurrentThreadId() }
}

pub(super) fn post_quit(thread_id: u32) -> bool {
    unsafe { PostThreadMessageW(thread_id, WM_QUIT, WPARAM(0), LPARAM(0)) }.is_ok()
}

/// Install the hook on this thread, report the thread id through
/// `on_installed`, then pump messages until `WM_QUIT` or an error.
pub(super) fn run_mouse_up_loop(
    callback: HookCallback,
    on_installed: impl FnOnce(u32),
) -> Result<(), WindowManagerError> {
    if REGISTRATION.with(|r| r.borrow().is_some()) {
        return Err(WindowManagerError::HookInstall(
            "a mouse-up hook is already running on this thread".into(),
        ));
    }

    let thread_id = current_thread_id();
    let mut msg = MSG::default();

    // Create the thread message queue so PostThreadMessageW can reach us.
    let _ = unsafe { PeekMessageW(&mut msg, None, 0, 0, PM_NOREMOVE) };

    let module = unsafe { GetModuleHandleW(None) }?;
    let hook = unsafe {
        SetWindowsHookExW(
            WH_MOUSE_LL,
            Some(low_level_mouse_proc),
            HINSTANCE(module.0),
            0,
        )
    }?;

    REGISTRATION.with(|r| *r.borrow_mut() = Some(Registration { hook, callback }));
    note_installed();
    log::info!("WH_MOUSE_LL hook installed on thread {thread_id}");

    on_installed(thread_id);

    loop {
        let got = unsafe { GetMessageW(&mut msg, None, 0, 0) };
        match got.0 {
            0 => {
                log::debug!("WM_QUIT received on hook thread {thread_id}");
                break;
            }
            -1 => {
                log::warn!("GetMessageW failed on hook thread {thread_id}, leaving loop");
                break;
            }
            _ => unsafe {
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            },
        }
    }

    let registration = REGISTRATION.with(|r| r.borrow_mut().take());
    if let Some(reg) = registration {
        match unsafe { UnhookWindowsHookEx(reg.hook) } {
            Ok(()) => {
                note_removed();
                log::info!("WH_MOUSE_LL hook removed from thread {thread_id}");
            }
            Err(e) => log::warn!("UnhookWindowsHookEx failed on thread {thread_id}: {e}"),
        }
    }

    Ok(())
}
