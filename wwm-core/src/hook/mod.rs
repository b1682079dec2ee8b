//! Global low-level (`WH_MOUSE_LL`) hook firing on primary-button release.
//!
//! Two entry points share one loop implementation:
//!
//! * [`run_mouse_up_hook`] installs the hook on the calling thread and pumps
//!   messages until `WM_QUIT`.  This is the blocking, always-on form.
//! * [`MouseUpHook::install`] runs the same loop on a dedicated worker thread
//!   and returns an owned handle whose [`stop`](MouseUpHook::stop) posts
//!   `WM_QUIT` to the worker and joins it.
//!
//! The registration (OS hook handle + callback) is thread-local to the loop
//! thread, so independent hooks never overwrite each other.  The callback is
//! invoked synchronously inside the OS hook dispatch and must return quickly:
//! Windows silently removes low-level hooks that exceed
//! `LowLevelHooksTimeout`.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;

use crate::constants::WM_LBUTTONUP;
use crate::errors::WindowManagerError;

#[cfg(windows)]
mod win32;
#[cfg(windows)]
use win32 as backend;

#[cfg(not(windows))]
mod unsupported;
#[cfg(not(windows))]
use unsupported as backend;

/// Argument-less callback run on every primary-button release.
pub type HookCallback = Arc<dyn Fn() + Send + Sync + 'static>;

static ACTIVE_HOOKS: AtomicUsize = AtomicUsize::new(0);

/// Number of mouse hooks this process currently has installed.
pub fn active_hook_count() -> usize {
    ACTIVE_HOOKS.load(Ordering::SeqCst)
}

fn note_installed() {
    ACTIVE_HOOKS.fetch_add(1, Ordering::SeqCst);
}

fn note_removed() {
    ACTIVE_HOOKS.fetch_sub(1, Ordering::SeqCst);
}

/// Decide whether a hook notification is a primary-button release and, if
/// so, run `callback`.  Returns whether the callback ran.  The caller must
/// forward the event with `CallNextHookEx` either way.
fn dispatch(code: i32, message: u32, callback: &HookCallback) -> bool {
    if code < 0 || message != WM_LBUTTONUP {
        return false;
    }
    log::trace!("primary button released");
    if panic::catch_unwind(AssertUnwindSafe(|| callback())).is_err() {
        log::warn!("mouse-up callback panicked; event still forwarded to the next hook");
    }
    true
}

// ---------------------------------------------------------------------------
// Blocking entry point
// ---------------------------------------------------------------------------

/// Install the hook on the calling thread and pump messages until the thread
/// receives `WM_QUIT` (or message retrieval fails).  The hook is removed
/// before returning.
pub fn run_mouse_up_hook(callback: HookCallback) -> Result<(), WindowManagerError> {
    backend::run_mouse_up_loop(callback, |_| {})
}

/// Host-facing form of [`run_mouse_up_hook`]: `None` means the host value
/// was not callable.
///
/// Besides `InvalidArgumentType`, fails with `HookInstall` when Windows
/// refuses the hook (or this thread already runs one) and with
/// `Unsupported` off Windows.  Another thread ends the loop with
/// [`request_quit`] on the id this thread got from [`current_thread_id`].
pub fn create_mouse_up_hook(callback: Option<HookCallback>) -> Result<(), WindowManagerError> {
    let callback = callback.ok_or(WindowManagerError::InvalidArgumentType)?;
    run_mouse_up_hook(callback)
}

/// Post `WM_QUIT` to a thread running [`run_mouse_up_hook`].
pub fn request_quit(thread_id: u32) -> bool {
    backend::post_quit(thread_id)
}

/// OS id of the calling thread, suitable for [`request_quit`].
pub fn current_thread_id() -> u32 {
    backend::current_thread_id()
}

// ---------------------------------------------------------------------------
// Supervised hook
// ---------------------------------------------------------------------------

struct Worker {
    thread_id: u32,
    join: JoinHandle<()>,
}

/// An installed mouse-up hook running on its own thread.
///
/// Dropping the handle stops the hook.
pub struct MouseUpHook {
    worker: Mutex<Option<Worker>>,
}

impl std::fmt::Debug for MouseUpHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MouseUpHook")
            .field("thread_id", &self.thread_id())
            .field("running", &self.is_running())
            .finish()
    }
}

impl MouseUpHook {
    /// Spawn the hook thread and wait until the hook is installed.
    pub fn install<F>(callback: F) -> Result<Self, WindowManagerError>
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::install_callback(Arc::new(callback))
    }

    pub fn install_callback(callback: HookCallback) -> Result<Self, WindowManagerError> {
        let (tx, rx) = mpsc::channel::<Result<u32, WindowManagerError>>();

        let join = thread::Builder::new()
            .name("wwm-mouse-up-hook".into())
            .spawn(move || {
                let ready = tx.clone();
                let result = backend::run_mouse_up_loop(callback, move |thread_id| {
                    let _ = ready.send(Ok(thread_id));
                });
                if let Err(e) = result {
                    let _ = tx.send(Err(e));
                }
            })
            .map_err(|e| WindowManagerError::HookInstall(format!("failed to spawn hook thread: {e}")))?;

        match rx.recv() {
            Ok(Ok(thread_id)) => Ok(Self {
                worker: Mutex::new(Some(Worker { thread_id, join })),
            }),
            Ok(Err(e)) => {
                let _ = join.join();
                Err(e)
            }
            Err(_) => {
                let _ = join.join();
                Err(WindowManagerError::HookInstall(
                    "hook thread exited before reporting".into(),
                ))
            }
        }
    }

    /// OS id of the hook thread, or `None` once stopped.
    pub fn thread_id(&self) -> Option<u32> {
        self.worker.lock().as_ref().map(|w| w.thread_id)
    }

    /// Whether the message loop is still running.
    pub fn is_running(&self) -> bool {
        self.worker
            .lock()
            .as_ref()
            .is_some_and(|w| !w.join.is_finished())
    }

    /// Ask the loop to quit and wait for the hook to be removed.  Idempotent.
    ///
    /// Called from inside the callback (i.e. on the hook thread) it only
    /// requests the quit; the loop exits once the callback returns.
    pub fn stop(&self) {
        let Some(worker) = self.worker.lock().take() else {
            return;
        };

        if !worker.join.is_finished() && !backend::post_quit(worker.thread_id) {
            log::warn!("failed to post WM_QUIT to hook thread {}", worker.thread_id);
        }

        if backend::current_thread_id() == worker.thread_id {
            return;
        }
        if worker.join.join().is_err() {
            log::warn!("hook thread {} panicked", worker.thread_id);
        }
    }
}

impl Drop for MouseUpHook {
    fn drop(&mut self) {
        self.stop();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
