//! Console font control
//!
//! Reads and changes the font of the console attached to stdout through
//! `GetCurrentConsoleFontEx` / `SetCurrentConsoleFontEx`. Every setter is a
//! read-modify-write of the current font, so unrelated fields are kept.
//!
//! Only Windows consoles expose this API. On other platforms every
//! operation returns [`CoreError::PlatformUnsupported`].

use crate::{CoreError, Result};
use std::fmt;

/// Maximum face name length, terminator included (UTF-16 units)
pub const LF_FACESIZE: usize = 32;
/// Regular font weight
pub const FW_NORMAL: u32 = 400;
/// Bold font weight
pub const FW_BOLD: u32 = 700;

/// Snapshot of the console font
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontInfo {
    pub face_name: String,
    /// Character cell height in pixels
    pub height: i16,
    pub weight: u32,
}

impl FontInfo {
    pub fn is_bold(&self) -> bool {
        self.weight >= FW_BOLD
    }
}

impl fmt::Display for FontInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Font: {}", self.face_name)?;
        writeln!(f, "Size: {}", self.height)?;
        write!(
            f,
            "Weight: {}",
            if self.is_bold() { "Bold" } else { "Normal" }
        )
    }
}

/// Encode `name` as a NUL-terminated UTF-16 face name, truncated to fit
/// [`LF_FACESIZE`].
pub fn encode_face_name(name: &str) -> [u16; LF_FACESIZE] {
    let mut buf = [0u16; LF_FACESIZE];
    for (slot, unit) in buf[..LF_FACESIZE - 1].iter_mut().zip(name.encode_utf16()) {
        *slot = unit;
    }
    buf
}

/// Decode a NUL-terminated UTF-16 face name
pub fn decode_face_name(buf: &[u16]) -> String {
    let len = buf.iter().position(|&unit| unit == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..len])
}

// ============================================================================
// Windows implementation
// ============================================================================

#[cfg(windows)]
mod windows {
    use super::*;
    use windows_sys::Win32::Foundation::{HANDLE, INVALID_HANDLE_VALUE};
    use windows_sys::Win32::System::Console::{
        GetCurrentConsoleFontEx, GetStdHandle, SetCurrentConsoleFontEx, CONSOLE_FONT_INFOEX,
        STD_OUTPUT_HANDLE,
    };

    fn stdout_handle() -> Result<HANDLE> {
        // SAFETY: GetStdHandle has no preconditions.
        let handle = unsafe { GetStdHandle(STD_OUTPUT_HANDLE) };
        if handle == INVALID_HANDLE_VALUE || handle.is_null() {
            return Err(CoreError::ConsoleFont(format!(
                "no console on stdout: {}",
                std::io::Error::last_os_error()
            )));
        }
        Ok(handle)
    }

    pub(super) fn get_raw() -> Result<CONSOLE_FONT_INFOEX> {
        let handle = stdout_handle()?;
        // SAFETY: CONSOLE_FONT_INFOEX is plain data; all-zero is a valid value.
        let mut font: CONSOLE_FONT_INFOEX = unsafe { std::mem::zeroed() };
        font.cbSize = std::mem::size_of::<CONSOLE_FONT_INFOEX>() as u32;

        // SAFETY: `font` is a live, correctly sized struct.
        let ok = unsafe { GetCurrentConsoleFontEx(handle, 0, &mut font) };
        if ok == 0 {
            return Err(CoreError::ConsoleFont(format!(
                "GetCurrentConsoleFontEx failed: {}",
                std::io::Error::last_os_error()
            )));
        }
        Ok(font)
    }

    pub(super) fn set_raw(font: &mut CONSOLE_FONT_INFOEX) -> Result<()> {
        let handle = stdout_handle()?;
        font.cbSize = std::mem::size_of::<CONSOLE_FONT_INFOEX>() as u32;

        // SAFETY: `font` is a live, correctly sized struct.
        let ok = unsafe { SetCurrentConsoleFontEx(handle, 0, font) };
        if ok == 0 {
            return Err(CoreError::ConsoleFont(format!(
                "SetCurrentConsoleFontEx failed: {}",
                std::io::Error::last_os_error()
            )));
        }
        Ok(())
    }

    pub(super) fn current_font() -> Result<FontInfo> {
        let font = get_raw()?;
        Ok(FontInfo {
            face_name: decode_face_name(&font.FaceName),
            height: font.dwFontSize.Y,
            weight: font.FontWeight,
        })
    }

    pub(super) fn modify<F>(f: F) -> Result<()>
    where
        F: FnOnce(&mut CONSOLE_FONT_INFOEX),
    {
        let mut font = get_raw()?;
        f(&mut font);
        set_raw(&mut font)
    }

    pub(super) fn set_face_name(font: &mut CONSOLE_FONT_INFOEX, name: &str) {
        font.FaceName = encode_face_name(name);
    }
}

#[cfg(windows)]
pub fn current_font() -> Result<FontInfo> {
    windows::current_font()
}

#[cfg(windows)]
pub fn set_font_size(height: i16) -> Result<()> {
    windows::modify(|font| font.dwFontSize.Y = height)?;
    tracing::info!(height, "Console font size changed");
    Ok(())
}

#[cfg(windows)]
fn set_weight(weight: u32) -> Result<()> {
    windows::modify(|font| font.FontWeight = weight)?;
    tracing::info!(weight, "Console font weight changed");
    Ok(())
}

#[cfg(windows)]
pub fn set_font_name(name: &str) -> Result<()> {
    windows::modify(|font| windows::set_face_name(font, name))?;
    tracing::info!(name, "Console font face changed");
    Ok(())
}

// ============================================================================
// Other platforms
// ============================================================================

#[cfg(not(windows))]
const UNSUPPORTED: &str = "console font control requires a Windows console";

#[cfg(not(windows))]
pub fn current_font() -> Result<FontInfo> {
    Err(CoreError::PlatformUnsupported(UNSUPPORTED))
}

#[cfg(not(windows))]
pub fn set_font_size(_height: i16) -> Result<()> {
    Err(CoreError::PlatformUnsupported(UNSUPPORTED))
}

#[cfg(not(windows))]
fn set_weight(_weight: u32) -> Result<()> {
    Err(CoreError::PlatformUnsupported(UNSUPPORTED))
}

#[cfg(not(windows))]
pub fn set_font_name(_name: &str) -> Result<()> {
    Err(CoreError::PlatformUnsupported(UNSUPPORTED))
}

/// Switch the console font to bold weight
pub fn set_bold() -> Result<()> {
    set_weight(FW_BOLD)
}

/// Switch the console font back to regular weight
pub fn set_normal() -> Result<()> {
    set_weight(FW_NORMAL)
}

/// Current font as three `Font/Size/Weight` lines
pub fn show_font() -> Result<String> {
    Ok(current_font()?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_info_display() {
        let info = FontInfo {
            face_name: "Consolas".to_string(),
            height: 16,
            weight: FW_BOLD,
        };
        assert!(info.is_bold());
        assert_eq!(info.to_string(), "Font: Consolas\nSize: 16\nWeight: Bold");

        let normal = FontInfo {
            weight: FW_NORMAL,
            ..info
        };
        assert!(normal.to_string().ends_with("Weight: Normal"));
    }

    #[test]
    fn test_face_name_round_trip() {
        let buf = encode_face_name("Courier New");
        assert_eq!(decode_face_name(&buf), "Courier New");
        assert_eq!(buf[11], 0);
    }

    #[test]
    fn test_face_name_truncated() {
        let long = "X".repeat(40);
        let buf = encode_face_name(&long);
        assert_eq!(buf[LF_FACESIZE - 1], 0);
        assert_eq!(decode_face_name(&buf).len(), LF_FACESIZE - 1);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_unsupported_off_windows() {
        assert!(matches!(
            current_font(),
            Err(CoreError::PlatformUnsupported(_))
        ));
        assert!(matches!(set_bold(), Err(CoreError::PlatformUnsupported(_))));
        assert!(matches!(
            set_font_name("Consolas"),
            Err(CoreError::PlatformUnsupported(_))
        ));
        assert!(show_font().is_err());
    }
}
