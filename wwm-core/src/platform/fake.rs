//! In-memory [`WindowApi`] that records every call.

use std::collections::HashMap;

use parking_lot::Mutex;

use super::WindowApi;
use crate::window::{WindowBounds, WindowHandle, TITLE_CAPACITY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Foreground,
    Move(isize, i32, i32, i32, i32),
    Rect(isize),
    Text(isize),
    Show(isize, i32),
    SetPos(isize, isize, i32, i32, i32, i32, u32),
    SetLong(isize, i32, i32),
    GetLong(isize, i32),
}

#[derive(Debug, Default, Clone)]
pub(crate) struct FakeWindow {
    pub bounds: WindowBounds,
    pub title: String,
    pub longs: HashMap<i32, i32>,
    pub show_state: Option<i32>,
}

#[derive(Debug, Default)]
struct State {
    foreground: isize,
    windows: HashMap<isize, FakeWindow>,
    calls: Vec<Call>,
}

#[derive(Debug, Default)]
pub(crate) struct FakeApi {
    state: Mutex<State>,
}

impl FakeApi {
    pub fn with_window(handle: isize, window: FakeWindow) -> Self {
        let api = Self::default();
        {
            let mut state = api.state.lock();
            state.foreground = handle;
            state.windows.insert(handle, window);
        }
        api
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    /// Calls that change window state.
    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| {
                matches!(
                    c,
                    Call::Move(..) | Call::Show(..) | Call::SetPos(..) | Call::SetLong(..)
                )
            })
            .collect()
    }

    pub fn window(&self, handle: isize) -> Option<FakeWindow> {
        self.state.lock().windows.get(&handle).cloned()
    }
}

impl WindowApi for FakeApi {
    fn foreground_window(&self) -> WindowHandle {
        let mut state = self.state.lock();
        state.calls.push(Call::Foreground);
        WindowHandle(state.foreground)
    }

    fn move_window(&self, window: WindowHandle, x: i32, y: i32, width: i32, height: i32) {
        let mut state = self.state.lock();
        state.calls.push(Call::Move(window.0, x, y, width, height));
        if let Some(w) = state.windows.get_mut(&window.0) {
            w.bounds = WindowBounds {
                left: x,
                top: y,
                right: x + width,
                bottom: y + height,
            };
        }
    }

    fn window_rect(&self, window: WindowHandle) -> WindowBounds {
        let mut state = self.state.lock();
        state.calls.push(Call::Rect(window.0));
        state
            .windows
            .get(&window.0)
            .map(|w| w.bounds)
            .unwrap_or_default()
    }

    fn window_text(&self, window: WindowHandle) -> String {
        let mut state = self.state.lock();
        state.calls.push(Call::Text(window.0));
        state
            .windows
            .get(&window.0)
            .map(|w| w.title.chars().take(TITLE_CAPACITY - 1).collect())
            .unwrap_or_default()
    }

    fn show_window(&self, window: WindowHandle, command: i32) {
        let mut state = self.state.lock();
        state.calls.push(Call::Show(window.0, command));
        if let Some(w) = state.windows.get_mut(&window.0) {
            w.show_state = Some(command);
        }
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
        let mut state = self.state.lock();
        state
            .calls
            .push(Call::SetPos(window.0, insert_after.0, x, y, cx, cy, flags));
        if let Some(w) = state.windows.get_mut(&window.0) {
            w.bounds = WindowBounds {
                left: x,
                top: y,
                right: x + cx,
                bottom: y + cy,
            };
        }
    }

    fn set_window_long(&self, window: WindowHandle, index: i32, value: i32) -> i32 {
        let mut state = self.state.lock();
        state.calls.push(Call::SetLong(window.0, index, value));
        state
            .windows
            .get_mut(&window.0)
            .and_then(|w| w.longs.insert(index, value))
            .unwrap_or(0)
    }

    fn window_long(&self, window: WindowHandle, index: i32) -> i32 {
        let mut state = self.state.lock();
        state.calls.push(Call::GetLong(window.0, index));
        state
            .windows
            .get(&window.0)
            .and_then(|w| w.longs.get(&index).copied())
            .unwrap_or(0)
    }
}
