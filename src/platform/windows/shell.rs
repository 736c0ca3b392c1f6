//! Launching files and programs through the Windows shell.

use windows::core::{w, HSTRING, PCWSTR};
use windows::Win32::UI::Shell::ShellExecuteW;
use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;

/// Open `path` with its registered handler.
///
/// ShellExecuteW returns a value greater than 32 on success; anything else
/// is an error code.
pub fn shell_open(path: &str) -> Result<(), String> {
    let file = HSTRING::from(path);
    let result = unsafe {
        ShellExecuteW(
            None,
            w!("open"),
            &file,
            PCWSTR::null(),
            PCWSTR::null(),
            SW_SHOWNORMAL,
        )
    };

    let code = result.0 as isize;
    if code > 32 {
        Ok(())
    } else {
        Err(format!("ShellExecuteW returned {}", code))
    }
}
