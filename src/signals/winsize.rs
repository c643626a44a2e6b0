/*!
 * Terminal Window Size
 */

use nix::libc;
use serde::{Deserialize, Serialize};
use std::os::fd::{AsRawFd, RawFd};

/// Terminal dimensions in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub rows: u16,
    pub cols: u16,
}

/// Query the size of the terminal attached to stdout
///
/// Returns `None` when stdout is not a terminal.
pub fn window_size() -> Option<WindowSize> {
    window_size_of(std::io::stdout().as_raw_fd())
}

/// Query the size of the terminal behind `fd`
pub fn window_size_of(fd: RawFd) -> Option<WindowSize> {
    let mut ws = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };

    // SAFETY: TIOCGWINSZ writes a winsize into the pointer we pass, which
    // points at a live stack value.
    let rc = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut ws as *mut libc::winsize) };
    if rc == -1 || (ws.ws_row == 0 && ws.ws_col == 0) {
        return None;
    }

    Some(WindowSize {
        rows: ws.ws_row,
        cols: ws.ws_col,
    })
}
