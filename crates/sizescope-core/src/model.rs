//! Data model for app size reports.
//!
//! A report is produced by a build-time analysis step and consumed by the
//! viewer as JSON. Field names on the wire are camelCase and enum variants
//! are SCREAMING_SNAKE_CASE, so the serde attributes here are part of the
//! format and must not change without a report version bump.

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Which of the two size metrics a value refers to.
///
/// Download size is the compressed size transferred to the device, install
/// size the bytes occupied after installation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SizeType {
    #[default]
    Download,
    Install,
}

impl SizeType {
    /// All metrics, in the order selection widgets should offer them.
    pub const ALL: [SizeType; 2] = [SizeType::Download, SizeType::Install];

    /// Stable identifier used as the `value` of selection widgets.
    pub fn key(&self) -> &'static str {
        match self {
            SizeType::Download => "download",
            SizeType::Install => "install",
        }
    }

    /// Inverse of [`SizeType::key`].
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "download" => Some(SizeType::Download),
            "install" => Some(SizeType::Install),
            _ => None,
        }
    }

    /// Human-readable label for selection widgets.
    pub fn label(&self) -> &'static str {
        match self {
            SizeType::Download => "Download size",
            SizeType::Install => "Install size",
        }
    }
}

/// Anything with a measurable download and install size.
pub trait Measurable {
    fn download_size(&self) -> u64;
    fn install_size(&self) -> u64;

    /// Size in bytes for the given metric.
    fn size(&self, size_type: SizeType) -> u64 {
        match size_type {
            SizeType::Download => self.download_size(),
            SizeType::Install => self.install_size(),
        }
    }
}

/// A named, measurable entry that may own a list of files.
///
/// Components and dynamic features both satisfy this, which lets the viewer
/// render either through the same expandable list.
///
/// `files()` distinguishes "no file data available" (`None`, rendered as a
/// non-expandable row) from "expandable but empty" (`Some` of an empty
/// slice).
pub trait FileContainer: Measurable {
    fn name(&self) -> &str;
    fn owner(&self) -> Option<&str>;
    fn files(&self) -> Option<&[AppFile]>;
}

/// Broad classification of a file inside the app artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileType {
    Class,
    Resource,
    Asset,
    NativeLib,
    Other,
}

/// A single file contributing to the app size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppFile {
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    pub download_size: u64,
    pub install_size: u64,
    /// Team or person this file is attributed to, when ownership data was
    /// part of the analysis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Measurable for AppFile {
    fn download_size(&self) -> u64 {
        self.download_size
    }

    fn install_size(&self) -> u64 {
        self.install_size
    }
}

/// Whether a component is part of the project or pulled in as a dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentType {
    Internal,
    External,
}

/// A code unit (module, library) contributing to the app size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppComponent {
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub download_size: u64,
    pub install_size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Files attributed to this component. `None` when the report was
    /// generated without file-level detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<AppFile>>,
}

impl Measurable for AppComponent {
    fn download_size(&self) -> u64 {
        self.download_size
    }

    fn install_size(&self) -> u64 {
        self.install_size
    }
}

impl FileContainer for AppComponent {
    fn name(&self) -> &str {
        &self.name
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    fn files(&self) -> Option<&[AppFile]> {
        self.files.as_deref()
    }
}

/// A feature module delivered on demand rather than with the base app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicFeature {
    pub name: String,
    pub download_size: u64,
    pub install_size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<AppFile>>,
}

impl Measurable for DynamicFeature {
    fn download_size(&self) -> u64 {
        self.download_size
    }

    fn install_size(&self) -> u64 {
        self.install_size
    }
}

impl FileContainer for DynamicFeature {
    fn name(&self) -> &str {
        &self.name
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    fn files(&self) -> Option<&[AppFile]> {
        self.files.as_deref()
    }
}

/// A complete size report for one build of an app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppReport {
    pub name: String,
    pub version: String,
    pub variant: String,
    pub download_size: u64,
    pub install_size: u64,
    /// Components sorted by the analysis step, largest first.
    pub components: Vec<AppComponent>,
    /// Absent in reports from apps without dynamic delivery.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dynamic_features: Vec<DynamicFeature>,
}

impl AppReport {
    /// Parses a report from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        serde_json::from_str(json).map_err(ReportError::from)
    }

    pub fn has_dynamic_features(&self) -> bool {
        !self.dynamic_features.is_empty()
    }
}

impl Measurable for AppReport {
    fn download_size(&self) -> u64 {
        self.download_size
    }

    fn install_size(&self) -> u64 {
        self.install_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_type_keys_round_trip() {
        for size_type in SizeType::ALL {
            assert_eq!(SizeType::from_key(size_type.key()), Some(size_type));
        }
        assert_eq!(SizeType::from_key("unknown"), None);
    }

    #[test]
    fn test_measurable_selects_metric() {
        let file = AppFile {
            name: "/lib/arm64-v8a/libapp.so".to_string(),
            file_type: FileType::NativeLib,
            download_size: 100,
            install_size: 250,
            owner: None,
        };
        assert_eq!(file.size(SizeType::Download), 100);
        assert_eq!(file.size(SizeType::Install), 250);
    }

    #[test]
    fn test_component_parses_camel_case() {
        let json = r#"{
            "name": ":app",
            "type": "INTERNAL",
            "downloadSize": 4096,
            "installSize": 8192,
            "owner": "platform-team",
            "files": [
                {
                    "name": "com.example.MainActivity",
                    "type": "CLASS",
                    "downloadSize": 1024,
                    "installSize": 2048
                }
            ]
        }"#;
        let component: AppComponent = serde_json::from_str(json).unwrap();
        assert_eq!(component.name, ":app");
        assert_eq!(component.component_type, ComponentType::Internal);
        assert_eq!(component.owner.as_deref(), Some("platform-team"));

        let files = component.files().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_type, FileType::Class);
        assert_eq!(files[0].owner, None);
    }

    #[test]
    fn test_component_without_files_is_not_expandable() {
        let json = r#"{
            "name": "external-lib",
            "type": "EXTERNAL",
            "downloadSize": 10,
            "installSize": 20
        }"#;
        let component: AppComponent = serde_json::from_str(json).unwrap();
        assert_eq!(component.files(), None);
        assert_eq!(component.owner(), None);
    }

    #[test]
    fn test_empty_file_list_stays_expandable() {
        let json = r#"{
            "name": ":empty",
            "type": "INTERNAL",
            "downloadSize": 0,
            "installSize": 0,
            "files": []
        }"#;
        let component: AppComponent = serde_json::from_str(json).unwrap();
        let files = component.files().expect("files should be present");
        assert!(files.is_empty());
    }

    #[test]
    fn test_file_type_uses_screaming_snake_case() {
        let file_type: FileType = serde_json::from_str("\"NATIVE_LIB\"").unwrap();
        assert_eq!(file_type, FileType::NativeLib);
        assert_eq!(
            serde_json::to_string(&FileType::NativeLib).unwrap(),
            "\"NATIVE_LIB\""
        );
    }

    #[test]
    fn test_report_without_dynamic_features() {
        let json = r#"{
            "name": "Sample",
            "version": "1.0.0",
            "variant": "release",
            "downloadSize": 100,
            "installSize": 200,
            "components": []
        }"#;
        let report = AppReport::from_json(json).unwrap();
        assert!(report.dynamic_features.is_empty());
        assert!(!report.has_dynamic_features());
    }

    #[test]
    fn test_invalid_report_is_a_parse_error() {
        let err = AppReport::from_json("{\"name\": 42}").unwrap_err();
        assert!(matches!(err, ReportError::Parse(_)));
    }
}
