//! Human-readable size formatting.

use crate::model::{Measurable, SizeType};

const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;

/// Formats a byte count as a short human-readable string.
///
/// Values below 1 KB are shown as exact byte counts, everything above with
/// one decimal in the largest fitting unit.
pub fn format_bytes(bytes: u64) -> String {
    let value = bytes as f64;
    if value >= GB {
        format!("{:.1} GB", value / GB)
    } else if value >= MB {
        format!("{:.1} MB", value / MB)
    } else if value >= KB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{bytes} B")
    }
}

/// Formats the size of a measurable entry for the given metric.
pub fn format_size(measurable: &impl Measurable, size_type: SizeType) -> String {
    format_bytes(measurable.size(size_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AppFile, FileType};

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(348), "348 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.0 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
    }

    #[test]
    fn test_format_bytes_large_units() {
        assert_eq!(format_bytes(12 * 1024 * 1024 + 300 * 1024), "12.3 MB");
        assert_eq!(format_bytes(1024 * 1024 * 1024), "1.0 GB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024 + 512 * 1024 * 1024), "5.5 GB");
    }

    #[test]
    fn test_format_size_follows_metric() {
        let file = AppFile {
            name: "res/layout/activity_main.xml".to_string(),
            file_type: FileType::Resource,
            download_size: 1536,
            install_size: 4096,
            owner: None,
        };
        assert_eq!(format_size(&file, SizeType::Download), "1.5 KB");
        assert_eq!(format_size(&file, SizeType::Install), "4.0 KB");
    }
}
