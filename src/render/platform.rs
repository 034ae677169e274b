//! Target platforms and their text capabilities.

/// The platform the host framework renders on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    Ios,
    /// The text primitive ignores `letterSpacing` here.
    Android,
    Web,
    #[default]
    Other,
}

impl Platform {
    /// Whether the text primitive renders letter spacing natively.
    pub fn supports_native_letter_spacing(self) -> bool {
        !matches!(self, Platform::Android)
    }

    /// Parses a platform name as reported by host frameworks (case-insensitive).
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "ios" => Platform::Ios,
            "android" => Platform::Android,
            "web" => Platform::Web,
            _ => Platform::Other,
        }
    }

    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_os = "ios") {
            Platform::Ios
        } else if cfg!(target_family = "wasm") {
            Platform::Web
        } else {
            Platform::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_android_lacks_native_spacing() {
        assert!(!Platform::Android.supports_native_letter_spacing());
        assert!(Platform::Ios.supports_native_letter_spacing());
        assert!(Platform::Web.supports_native_letter_spacing());
        assert!(Platform::Other.supports_native_letter_spacing());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Platform::from_name("Android"), Platform::Android);
        assert_eq!(Platform::from_name("ios"), Platform::Ios);
        assert_eq!(Platform::from_name("windows"), Platform::Other);
    }
}
