use windows::core::PCWSTR;
use windows::Win32::Foundation::ERROR_SUCCESS;
use windows::Win32::System::Registry::{
    RegCloseKey, RegOpenKeyExW, RegQueryValueExW, HKEY, HKEY_LOCAL_MACHINE, KEY_READ,
    REG_EXPAND_SZ, REG_SZ, REG_VALUE_TYPE,
};

/// Open registry key, closed on drop.
struct OpenKey(HKEY);

impl OpenKey {
    fn open(subkey: &str) -> Option<Self> {
        let wide_subkey = wide(subkey);
        let mut handle = HKEY::default();
        let status = unsafe {
            RegOpenKeyExW(
                HKEY_LOCAL_MACHINE,
                PCWSTR(wide_subkey.as_ptr()),
                0,
                KEY_READ,
                &mut handle,
            )
        };
        if status != ERROR_SUCCESS {
            log::debug!("RegOpenKeyExW(HKLM\\{}) failed: {:?}", subkey, status);
            return None;
        }
        Some(OpenKey(handle))
    }

    fn string_value(&self, name: &str) -> Option<String> {
        let name = wide(name);
        let mut kind = REG_VALUE_TYPE::default();
        let mut size: u32 = 0;

        let status = unsafe {
            RegQueryValueExW(
                self.0,
                PCWSTR(name.as_ptr()),
                None,
                Some(&mut kind as *mut REG_VALUE_TYPE),
                None,
                Some(&mut size as *mut u32),
            )
        };
        if status != ERROR_SUCCESS || (kind != REG_SZ && kind != REG_EXPAND_SZ) {
            return None;
        }

        // size is in bytes and includes the terminator when the writer stored one
        let mut buffer = vec![0u16; (size as usize).div_ceil(2)];
        let status = unsafe {
            RegQueryValueExW(
                self.0,
                PCWSTR(name.as_ptr()),
                None,
                Some(&mut kind as *mut REG_VALUE_TYPE),
                Some(buffer.as_mut_ptr().cast::<u8>()),
                Some(&mut size as *mut u32),
            )
        };
        if status != ERROR_SUCCESS {
            return None;
        }

        buffer.truncate((size as usize) / 2);
        while buffer.last() == Some(&0) {
            buffer.pop();
        }
        String::from_utf16(&buffer).ok()
    }
}

impl Drop for OpenKey {
    fn drop(&mut self) {
        let _ = unsafe { RegCloseKey(self.0) };
    }
}

/// Reads a `REG_SZ` or `REG_EXPAND_SZ` value from `HKEY_LOCAL_MACHINE\<key>`.
pub fn read_registry_string(key: &str, value: &str) -> Option<String> {
    let key = OpenKey::open(key)?;
    key.string_value(value)
}

fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}
