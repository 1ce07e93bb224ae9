//! File kind classification.

use std::fmt;

/// The kind of source file being generated, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// C source (`.c`)
    C,
    /// C++ source (`.cpp`)
    Cpp,
    /// C/C++ header (`.h`)
    Header,
    /// Java source (`.java`)
    Java,
    /// Any other extension. Generates no dependency lines and no body.
    Unrecognized,
}

impl FileKind {
    /// Classify an extension (the text after the first `.`).
    ///
    /// Matching is exact and case-sensitive.
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "c" => FileKind::C,
            "cpp" => FileKind::Cpp,
            "h" => FileKind::Header,
            "java" => FileKind::Java,
            _ => FileKind::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::C => "c",
            FileKind::Cpp => "c++",
            FileKind::Header => "header",
            FileKind::Java => "java",
            FileKind::Unrecognized => "unrecognized",
        }
    }

    /// Whether the kind has a template at all.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, FileKind::Unrecognized)
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(FileKind::from_extension("c"), FileKind::C);
        assert_eq!(FileKind::from_extension("cpp"), FileKind::Cpp);
        assert_eq!(FileKind::from_extension("h"), FileKind::Header);
        assert_eq!(FileKind::from_extension("java"), FileKind::Java);
    }

    #[test]
    fn test_from_extension_unrecognized() {
        assert_eq!(FileKind::from_extension("txt"), FileKind::Unrecognized);
        assert_eq!(FileKind::from_extension(""), FileKind::Unrecognized);
        assert_eq!(FileKind::from_extension("CPP"), FileKind::Unrecognized);
        assert_eq!(FileKind::from_extension("tar.gz"), FileKind::Unrecognized);
    }

    #[test]
    fn test_display() {
        assert_eq!(FileKind::Cpp.to_string(), "c++");
        assert_eq!(FileKind::Unrecognized.to_string(), "unrecognized");
        assert!(!FileKind::Unrecognized.is_recognized());
        assert!(FileKind::Java.is_recognized());
    }
}
