//! `wwm_core` -- Pure Rust core library for windows-window-manager.
//!
//! This crate contains all binding logic with **no PyO3 dependency**.
//! It can be consumed by:
//! - `wwm-pyo3` (PyO3 Python extension `windows_window_manager`)
//! - `wwm-ffi` (C ABI DLL for ctypes / other languages)
//! - `wwm-cli` (the `wwm` command-line tool)
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`errors`] | `WindowManagerError` enum via `thiserror` |
//! | [`args`] | Host number coercion and argument-type validation |
//! | [`platform`] | `WindowApi` seam, Win32 backend, non-Windows fallback |
//! | [`ops`] | The eight window operations as exposed to hosts |
//! | [`hook`] | `WH_MOUSE_LL` mouse-up hook: blocking loop and supervised worker |
//! | [`window`] | Handle/bounds types and the `Window` convenience wrapper |
//! | [`layout`] | 3x3 screen grid placement |
//! | [`constants`] | Win32 constants used as integer arguments |

pub mod args;
pub mod constants;
pub mod errors;
pub mod hook;
pub mod layout;
pub mod ops;
pub mod platform;
pub mod window;
