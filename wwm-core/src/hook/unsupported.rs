//! Hook backend for targets without Win32 low-level hooks.

use super::HookCallback;
use crate::errors::WindowManagerError;

pub(super) fn current_thread_id() -> u32 {
    0
}

pub(super) fn post_quit(_thread_id: u32) -> bool {
    false
}

pub(super) fn run_mouse_up_loop(
    _callback: HookCallback,
    _on_installed: impl FnOnce(u32),
) -> Result<(), WindowManagerError> {
    Err(WindowManagerError::Unsupported("the low-level mouse hook"))
}
