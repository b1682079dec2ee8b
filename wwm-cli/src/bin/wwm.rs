//! `wwm` -- query and manipulate top-level windows from the command line.

use std::process::ExitCode;
use std::sync::{mpsc, Arc};

use clap::{Parser, Subcommand};
use serde::Serialize;

use wwm_core::constants::{
    SW_HIDE, SW_MAXIMIZE, SW_MINIMIZE, SW_RESTORE, SW_SHOW, SW_SHOWNORMAL,
};
use wwm_core::errors::WindowManagerError;
use wwm_core::hook::{self, MouseUpHook};
use wwm_core::layout::{GridCell, ScreenDimensions};
use wwm_core::platform::{native, WindowApi};
use wwm_core::window::{Window, WindowHandle};

#[derive(Parser)]
#[command(name = "wwm", about = "Win32 window management primitives")]
struct Args {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the foreground window handle
    Active,
    /// Print a window's screen rectangle
    Bounds {
        #[arg(value_parser = parse_handle)]
        hwnd: isize,
    },
    /// Print a window's title
    Title {
        #[arg(value_parser = parse_handle)]
        hwnd: isize,
    },
    /// Move and resize a window
    Move {
        #[arg(value_parser = parse_handle)]
        hwnd: isize,
        #[arg(allow_negative_numbers = true)]
        x: i32,
        #[arg(allow_negative_numbers = true)]
        y: i32,
        width: i32,
        height: i32,
    },
    /// Change a window's show state (number or show/hide/minimize/maximize/restore/normal)
    State {
        #[arg(value_parser = parse_handle)]
        hwnd: isize,
        #[arg(value_parser = parse_show_command)]
        state: i32,
    },
    /// SetWindowPos with explicit insert-after handle and flags
    Pos {
        #[arg(value_parser = parse_handle)]
        hwnd: isize,
        #[arg(value_parser = parse_handle, allow_negative_numbers = true)]
        insert_after: isize,
        #[arg(allow_negative_numbers = true)]
        x: i32,
        #[arg(allow_negative_numbers = true)]
        y: i32,
        cx: i32,
        cy: i32,
        #[arg(value_parser = parse_hex_or_dec, default_value = "0")]
        flags: u32,
    },
    /// Read a window long (e.g. -16 for GWL_STYLE)
    GetLong {
        #[arg(value_parser = parse_handle)]
        hwnd: isize,
        #[arg(allow_negative_numbers = true)]
        index: i32,
    },
    /// Write a window long
    SetLong {
        #[arg(value_parser = parse_handle)]
        hwnd: isize,
        #[arg(allow_negative_numbers = true)]
        index: i32,
        #[arg(value_parser = parse_hex_or_dec)]
        value: u32,
    },
    /// Snap a window (default: foreground) onto a 3x3 screen grid
    Clip {
        /// top-left, top, top-right, left, center, right, bottom-left, bottom, bottom-right
        cell: GridCell,
        #[arg(long, value_parser = parse_handle)]
        hwnd: Option<isize>,
        #[arg(long, default_value_t = 1920)]
        screen_width: i32,
        #[arg(long, default_value_t = 1080)]
        screen_height: i32,
    },
    /// Print a line on every primary-button release
    Watch {
        /// Stop after this many releases; runs until killed otherwise
        #[arg(short, long)]
        count: Option<usize>,
    },
}

#[derive(Serialize)]
struct HandleOutput {
    hwnd: isize,
}

#[derive(Serialize)]
struct TitleOutput<'a> {
    hwnd: isize,
    title: &'a str,
}

#[derive(Serialize)]
struct LongOutput {
    hwnd: isize,
    index: i32,
    value: i32,
}

fn parse_hex_or_dec(s: &str) -> Result<u32, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).map_err(|e| e.to_string())
    } else if let Some(neg) = s.strip_prefix('-') {
        neg.parse::<u32>()
            .map(|v| (v as i64).wrapping_neg() as u32)
            .map_err(|e| e.to_string())
    } else {
        s.parse::<u32>().map_err(|e| e.to_string())
    }
}

fn parse_handle(s: &str) -> Result<isize, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        isize::from_str_radix(hex, 16).map_err(|e| e.to_string())
    } else {
        s.parse::<isize>().map_err(|e| e.to_string())
    }
}

fn parse_show_command(s: &str) -> Result<i32, String> {
    match s.to_ascii_lowercase().as_str() {
        "hide" => Ok(SW_HIDE),
        "normal" => Ok(SW_SHOWNORMAL),
        "maximize" => Ok(SW_MAXIMIZE),
        "show" => Ok(SW_SHOW),
        "minimize" => Ok(SW_MINIMIZE),
        "restore" => Ok(SW_RESTORE),
        other => other
            .parse::<i32>()
            .map_err(|_| format!("unknown show state: {s}")),
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("wwm: JSON serialization failed: {e}"),
    }
}

fn watch(count: Option<usize>) -> Result<(), WindowManagerError> {
    let Some(count) = count else {
        log::info!("watching primary-button releases until killed");
        return hook::run_mouse_up_hook(Arc::new(|| println!("mouse-up")));
    };

    let (tx, rx) = mpsc::channel();
    let hook = MouseUpHook::install(move || {
        let _ = tx.send(());
    })?;
    for i in 1..=count {
        if rx.recv().is_err() {
            break;
        }
        println!("mouse-up {i}");
    }
    hook.stop();
    Ok(())
}

fn run(args: Args) -> Result<(), WindowManagerError> {
    let api = native();

    match args.command {
        Command::Active => {
            let hwnd = api.foreground_window().0;
            if args.json {
                print_json(&HandleOutput { hwnd });
            } else {
                println!("{hwnd:#x}");
            }
        }
        Command::Bounds { hwnd } => {
            let bounds = api.window_rect(WindowHandle(hwnd));
            if args.json {
                print_json(&bounds);
            } else {
                println!(
                    "{},{},{},{} ({}x{})",
                    bounds.left,
                    bounds.top,
                    bounds.right,
                    bounds.bottom,
                    bounds.width(),
                    bounds.height()
                );
            }
        }
        Command::Title { hwnd } => {
            let title = api.window_text(WindowHandle(hwnd));
            if args.json {
                print_json(&TitleOutput {
                    hwnd,
                    title: &title,
                });
            } else {
                println!("{title}");
            }
        }
        Command::Move {
            hwnd,
            x,
            y,
            width,
            height,
        } => api.move_window(WindowHandle(hwnd), x, y, width, height),
        Command::State { hwnd, state } => api.show_window(WindowHandle(hwnd), state),
        Command::Pos {
            hwnd,
            insert_after,
            x,
            y,
            cx,
            cy,
            flags,
        } => api.set_window_pos(
            WindowHandle(hwnd),
            WindowHandle(insert_after),
            x,
            y,
            cx,
            cy,
            flags,
        ),
        Command::GetLong { hwnd, index } => {
            let value = api.window_long(WindowHandle(hwnd), index);
            if args.json {
                print_json(&LongOutput { hwnd, index, value });
            } else {
                println!("{value:#010x}");
            }
        }
        Command::SetLong { hwnd, index, value } => {
            api.set_window_long(WindowHandle(hwnd), index, value as i32);
        }
        Command::Clip {
            cell,
            hwnd,
            screen_width,
            screen_height,
        } => {
            let window = match hwnd {
                Some(h) => Window::new(api, WindowHandle(h)),
                None => Window::foreground(api),
            }
            .with_screen_dimensions(ScreenDimensions {
                width: screen_width,
                height: screen_height,
            });
            let target = window.placement_for(cell)?;
            log::info!("clipping {:#x} to {cell}: {target:?}", window.handle().0);
            window.clip(cell)?;
        }
        Command::Watch { count } => watch(count)?,
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("wwm: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_or_dec() {
        assert_eq!(parse_hex_or_dec("0x40"), Ok(0x40));
        assert_eq!(parse_hex_or_dec("64"), Ok(64));
        assert_eq!(parse_hex_or_dec("-1"), Ok(u32::MAX));
        assert!(parse_hex_or_dec("zz").is_err());
    }

    #[test]
    fn test_parse_handle() {
        assert_eq!(parse_handle("0x1A2B"), Ok(0x1a2b));
        assert_eq!(parse_handle("-2"), Ok(-2));
    }

    #[test]
    fn test_parse_show_command() {
        assert_eq!(parse_show_command("Minimize"), Ok(SW_MINIMIZE));
        assert_eq!(parse_show_command("9"), Ok(SW_RESTORE));
        assert!(parse_show_command("wiggle").is_err());
    }

    #[test]
    fn test_cli_parses_clip() {
        let args = Args::try_parse_from(["wwm", "clip", "top-left", "--hwnd", "0x10"]).unwrap();
        match args.command {
            Command::Clip { cell, hwnd, .. } => {
                assert_eq!(cell, GridCell::TopLeft);
                assert_eq!(hwnd, Some(0x10));
            }
            _ => panic!("expected clip"),
        }
    }

    #[test]
    fn test_cli_parses_negative_index() {
        let args = Args::try_parse_from(["wwm", "get-long", "0x10", "-16"]).unwrap();
        match args.command {
            Command::GetLong { hwnd, index } => assert_eq!((hwnd, index), (0x10, -16)),
            _ => panic!("expected get-long"),
        }
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
