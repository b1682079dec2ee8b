//! `windows_window_manager` -- Thin PyO3 wrappers around `wwm_core`.
//!
//! The module-level functions take `*args` and hand them to `wwm_core::ops`
//! as raw numbers, so a non-number anywhere raises
//! `TypeError("Wrong arguments")` before any Win32 call.  Calls release the
//! GIL via `py.allow_threads()`; hook callbacks re-acquire it on the hook
//! thread.

use std::sync::Arc;

use pyo3::exceptions::{PyRuntimeError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyFloat, PyInt, PyTuple};

use wwm_core::args::Number;
use wwm_core::errors::WindowManagerError;
use wwm_core::hook::{self, HookCallback, MouseUpHook};
use wwm_core::layout::{GridCell, Placement, ScreenDimensions};
use wwm_core::ops;
use wwm_core::platform::{native, WindowApi};
use wwm_core::window::{Window, WindowBounds, WindowHandle};

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

fn to_py_err(e: WindowManagerError) -> PyErr {
    match e {
        WindowManagerError::InvalidArgumentType => PyTypeError::new_err(e.to_string()),
        other => PyRuntimeError::new_err(other.to_string()),
    }
}

/// `Some` for `int`/`float` (but not `bool`), `None` for anything else.
fn number(value: &Bound<'_, PyAny>) -> Option<Number> {
    if value.is_instance_of::<PyBool>() {
        return None;
    }
    if value.is_instance_of::<PyInt>() {
        return match value.extract::<i64>() {
            Ok(v) => Some(Number::Int(v)),
            Err(_) => value.extract::<f64>().ok().map(Number::Float),
        };
    }
    if value.is_instance_of::<PyFloat>() {
        return value.extract::<f64>().ok().map(Number::Float);
    }
    None
}

fn numbers(args: &Bound<'_, PyTuple>) -> Vec<Option<Number>> {
    args.iter().map(|v| number(&v)).collect()
}

fn bounds_to_py_dict(py: Python<'_>, bounds: &WindowBounds) -> PyResult<PyObject> {
    let dict = PyDict::new(py);
    dict.set_item("left", bounds.left)?;
    dict.set_item("top", bounds.top)?;
    dict.set_item("right", bounds.right)?;
    dict.set_item("bottom", bounds.bottom)?;
    Ok(dict.into_any().unbind())
}

/// Wrap a Python callable as an argument-less hook callback.  Exceptions
/// are printed to `sys.stderr` and swallowed so the hook keeps running.
fn py_callback(callback: &Bound<'_, PyAny>) -> Option<HookCallback> {
    if !callback.is_callable() {
        return None;
    }
    let callback: Py<PyAny> = callback.clone().unbind();
    Some(Arc::new(move || {
        Python::with_gil(|py| {
            if let Err(err) = callback.call0(py) {
                err.print(py);
            }
        })
    }))
}

// ---------------------------------------------------------------------------
// Window operations
// ---------------------------------------------------------------------------

/// Handle of the foreground window.
#[pyfunction]
fn get_active_window(py: Python<'_>) -> i32 {
    py.allow_threads(|| ops::get_active_window(native()))
}

/// Move and resize a window: `(handle, x, y, width, height)`.
#[pyfunction]
#[pyo3(signature = (*args))]
fn move_window(py: Python<'_>, args: &Bound<'_, PyTuple>) -> PyResult<()> {
    let args = numbers(args);
    py.allow_threads(move || ops::move_window(native(), &args))
        .map_err(to_py_err)
}

/// `{left, top, right, bottom}` of a window: `(handle)`.
#[pyfunction]
#[pyo3(signature = (*args))]
fn get_window_bounds(py: Python<'_>, args: &Bound<'_, PyTuple>) -> PyResult<PyObject> {
    let args = numbers(args);
    let bounds = py
        .allow_threads(move || ops::get_window_bounds(native(), &args))
        .map_err(to_py_err)?;
    bounds_to_py_dict(py, &bounds)
}

/// Window title, at most 255 characters: `(handle)`.
#[pyfunction]
#[pyo3(signature = (*args))]
fn get_window_title(py: Python<'_>, args: &Bound<'_, PyTuple>) -> PyResult<String> {
    let args = numbers(args);
    py.allow_threads(move || ops::get_window_title(native(), &args))
        .map_err(to_py_err)
}

/// `ShowWindow`: `(handle, state)`.
#[pyfunction]
#[pyo3(signature = (*args))]
fn set_window_state(py: Python<'_>, args: &Bound<'_, PyTuple>) -> PyResult<()> {
    let args = numbers(args);
    py.allow_threads(move || ops::set_window_state(native(), &args))
        .map_err(to_py_err)
}

/// `SetWindowPos`: `(handle, insert_after, x, y, cx, cy, flags)`.
#[pyfunction]
#[pyo3(signature = (*args))]
fn set_window_pos(py: Python<'_>, args: &Bound<'_, PyTuple>) -> PyResult<()> {
    let args = numbers(args);
    py.allow_threads(move || ops::set_window_pos(native(), &args))
        .map_err(to_py_err)
}

/// `SetWindowLongW`: `(handle, index, value)`.
#[pyfunction]
#[pyo3(signature = (*args))]
fn set_window_long(py: Python<'_>, args: &Bound<'_, PyTuple>) -> PyResult<()> {
    let args = numbers(args);
    py.allow_threads(move || ops::set_window_long(native(), &args))
        .map_err(to_py_err)
}

/// `GetWindowLongW`: `(handle, index)`.
#[pyfunction]
#[pyo3(signature = (*args))]
fn get_window_long(py: Python<'_>, args: &Bound<'_, PyTuple>) -> PyResult<i32> {
    let args = numbers(args);
    py.allow_threads(move || ops::get_window_long(native(), &args))
        .map_err(to_py_err)
}

// ---------------------------------------------------------------------------
// Mouse-up hook
// ---------------------------------------------------------------------------

/// Install a global mouse-up hook and pump messages on this thread.
///
/// Blocks until the thread receives `WM_QUIT`; run it on a dedicated
/// `threading.Thread` if the caller must keep going, and end it with
/// `request_hook_quit(tid)` where `tid` is that thread's
/// `current_thread_id()`.  Ctrl+C is not delivered while the loop runs.
/// Raises `RuntimeError` if the hook cannot be installed.
#[pyfunction]
#[pyo3(signature = (callback=None))]
fn create_mouse_up_hook(py: Python<'_>, callback: Option<&Bound<'_, PyAny>>) -> PyResult<()> {
    let callback = callback.and_then(py_callback);
    py.allow_threads(move || hook::create_mouse_up_hook(callback))
        .map_err(to_py_err)
}

/// OS id of the calling thread.
#[pyfunction]
fn current_thread_id() -> u32 {
    hook::current_thread_id()
}

/// Post `WM_QUIT` to a thread blocked in `create_mouse_up_hook`.  Returns
/// whether the message was queued.
#[pyfunction]
fn request_hook_quit(thread_id: u32) -> bool {
    hook::request_quit(thread_id)
}

/// Number of mouse hooks currently installed by this process.
#[pyfunction]
fn active_hook_count() -> usize {
    hook::active_hook_count()
}

/// A mouse-up hook running on its own thread.  Usable as a context manager.
#[pyclass(name = "MouseUpHook", module = "windows_window_manager")]
struct PyMouseUpHook {
    inner: MouseUpHook,
}

#[pymethods]
impl PyMouseUpHook {
    #[new]
    fn new(py: Python<'_>, callback: &Bound<'_, PyAny>) -> PyResult<Self> {
        let callback = py_callback(callback)
            .ok_or_else(|| to_py_err(WindowManagerError::InvalidArgumentType))?;
        let inner = py
            .allow_threads(move || MouseUpHook::install_callback(callback))
            .map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Remove the hook and wait for its thread to exit.
    fn stop(&self, py: Python<'_>) {
        py.allow_threads(|| self.inner.stop());
    }

    #[getter]
    fn is_running(&self) -> bool {
        self.inner.is_running()
    }

    #[getter]
    fn thread_id(&self) -> Option<u32> {
        self.inner.thread_id()
    }

    fn __enter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    #[pyo3(signature = (*_exc))]
    fn __exit__(&self, py: Python<'_>, _exc: &Bound<'_, PyTuple>) -> bool {
        self.stop(py);
        false
    }

    fn __repr__(&self) -> String {
        format!(
            "MouseUpHook(thread_id={:?}, running={})",
            self.inner.thread_id(),
            self.inner.is_running()
        )
    }
}

impl Drop for PyMouseUpHook {
    fn drop(&mut self) {
        // The hook thread needs the GIL to run callbacks; never join while
        // holding it.
        let inner = &self.inner;
        Python::with_gil(|py| py.allow_threads(|| inner.stop()));
    }
}

// ---------------------------------------------------------------------------
// Window class
// ---------------------------------------------------------------------------

/// Convenience wrapper over one window handle.
#[pyclass(name = "Window", module = "windows_window_manager")]
struct PyWindow {
    handle: isize,
    screen: Option<ScreenDimensions>,
}

impl PyWindow {
    fn window(&self) -> Window<'static> {
        let window = Window::new(native(), WindowHandle(self.handle));
        match self.screen {
            Some(screen) => window.with_screen_dimensions(screen),
            None => window,
        }
    }
}

#[pymethods]
impl PyWindow {
    #[new]
    fn new(handle: &Bound<'_, PyAny>) -> PyResult<Self> {
        let handle =
            number(handle).ok_or_else(|| to_py_err(WindowManagerError::InvalidArgumentType))?;
        Ok(Self {
            handle: WindowHandle::from_host(handle.to_i32()).0,
            screen: None,
        })
    }

    /// The current foreground window.
    #[staticmethod]
    fn active(py: Python<'_>) -> Self {
        let handle = py.allow_threads(|| native().foreground_window());
        Self {
            handle: handle.0,
            screen: None,
        }
    }

    #[getter]
    fn handle(&self) -> isize {
        self.handle
    }

    fn set_screen_dimensions(&mut self, width: i32, height: i32) {
        self.screen = Some(ScreenDimensions { width, height });
    }

    fn bounds(&self, py: Python<'_>) -> PyResult<PyObject> {
        let bounds = self.window().bounds();
        bounds_to_py_dict(py, &bounds)
    }

    fn title(&self) -> String {
        self.window().title()
    }

    fn width(&self) -> i32 {
        self.window().width()
    }

    fn height(&self) -> i32 {
        self.window().height()
    }

    fn style(&self) -> i32 {
        self.window().style()
    }

    fn set_state(&self, state: i32) {
        self.window().set_state(state);
    }

    fn show(&self) {
        self.window().show();
    }

    fn hide(&self) {
        self.window().hide();
    }

    fn minimize(&self) {
        self.window().minimize();
    }

    fn restore(&self) {
        self.window().restore();
    }

    fn maximize(&self) {
        self.window().maximize();
    }

    fn move_to(&self, left: i32, top: i32, width: i32, height: i32) {
        self.window().move_to(Placement {
            left,
            top,
            width,
            height,
        });
    }

    fn set_position(&self, left: i32, top: i32) {
        self.window().set_position(left, top);
    }

    #[pyo3(signature = (topmost, flags=0))]
    fn set_topmost(&self, topmost: bool, flags: u32) {
        self.window().set_topmost(topmost, flags);
    }

    fn set_style(&self, py: Python<'_>, style: i32) {
        let window = self.window();
        py.allow_threads(move || window.set_style(style));
    }

    /// Snap to a grid cell such as `"top-left"` or `"center"`.
    fn clip(&self, cell: &str) -> PyResult<()> {
        let cell: GridCell = cell.parse().map_err(PyValueError::new_err)?;
        self.window().clip(cell).map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!("Window(handle={:#x})", self.handle)
    }
}

// ---------------------------------------------------------------------------
// Module registration
// ---------------------------------------------------------------------------

/// Register the `windows_window_manager` Python module.
#[pymodule]
fn windows_window_manager(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(get_active_window, m)?)?;
    m.add_function(wrap_pyfunction!(move_window, m)?)?;
    m.add_function(wrap_pyfunction!(get_window_bounds, m)?)?;
    m.add_function(wrap_pyfunction!(get_window_title, m)?)?;
    m.add_function(wrap_pyfunction!(set_window_state, m)?)?;
    m.add_function(wrap_pyfunction!(set_window_pos, m)?)?;
    m.add_function(wrap_pyfunction!(set_window_long, m)?)?;
    m.add_function(wrap_pyfunction!(get_window_long, m)?)?;
    m.add_function(wrap_pyfunction!(create_mouse_up_hook, m)?)?;
    m.add_function(wrap_pyfunction!(current_thread_id, m)?)?;
    m.add_function(wrap_pyfunction!(request_hook_quit, m)?)?;
    m.add_function(wrap_pyfunction!(active_hook_count, m)?)?;

    m.add_class::<PyMouseUpHook>()?;
    m.add_class::<PyWindow>()?;

    for (name, value) in wwm_core::constants::EXPORTED {
        m.add(*name, *value)?;
    }

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("__doc__", "Win32 window management primitives.")?;

    Ok(())
}
