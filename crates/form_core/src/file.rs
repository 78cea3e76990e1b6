//! File selection rules: constraint checks, size labels, preview kinds.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::controlled::ControlledValue;

/// What the widget needs to know about a selected file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    /// File name including extension.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type reported by the browser; may be empty.
    pub mime: String,
}

impl FileMeta {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// Whether the file can be previewed as an image thumbnail.
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    /// Icon category for the file list.
    pub fn kind(&self) -> FileKind {
        FileKind::from_mime(&self.mime)
    }

    fn matches_type(&self, allowed: &str) -> bool {
        if allowed.starts_with('.') {
            self.name.to_lowercase().ends_with(&allowed.to_lowercase())
        } else {
            self.mime.contains(allowed)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Constraints applied to a file selection. Unset or zero limits are not checked.
pub struct FileValidation {
    /// Largest accepted file, in bytes.
    pub max_size: Option<u64>,
    /// Smallest accepted file, in bytes.
    pub min_size: Option<u64>,
    /// Largest accepted selection.
    pub max_files: Option<usize>,
    /// MIME types (substring match) or extensions such as `.pdf`.
    pub allowed_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// A single constraint violation. The display text is shown to users.
pub enum FileValidationError {
    /// The selection holds more files than allowed.
    #[error("Maximum {max} files allowed")]
    TooMany {
        /// Allowed count.
        max: usize,
    },
    /// A file exceeds the size limit.
    #[error("File \"{name}\" is too large (max: {})", size_label(.max))]
    TooLarge {
        /// Offending file.
        name: String,
        /// Limit in bytes.
        max: u64,
    },
    /// A file is below the minimum size.
    #[error("File \"{name}\" is too small (min: {})", size_label(.min))]
    TooSmall {
        /// Offending file.
        name: String,
        /// Limit in bytes.
        min: u64,
    },
    /// A file matches none of the allowed types.
    #[error("File \"{name}\" type not allowed")]
    TypeNotAllowed {
        /// Offending file.
        name: String,
    },
}

/// Checks a whole selection. Every violation is reported, the count check
/// first and then per-file checks in selection order.
pub fn validate_files(
    files: &[FileMeta],
    rules: &FileValidation,
) -> Result<(), Vec<FileValidationError>> {
    let mut errors = Vec::new();

    if let Some(max) = rules.max_files.filter(|max| *max > 0) {
        if files.len() > max {
            errors.push(FileValidationError::TooMany { max });
        }
    }

    for file in files {
        if let Some(max) = rules.max_size.filter(|max| *max > 0) {
            if file.size > max {
                errors.push(FileValidationError::TooLarge {
                    name: file.name.clone(),
                    max,
                });
            }
        }
        if let Some(min) = rules.min_size.filter(|min| *min > 0) {
            if file.size < min {
                errors.push(FileValidationError::TooSmall {
                    name: file.name.clone(),
                    min,
                });
            }
        }
        if !rules.allowed_types.is_empty()
            && !rules.allowed_types.iter().any(|allowed| file.matches_type(allowed))
        {
            errors.push(FileValidationError::TypeNotAllowed {
                name: file.name.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Commits a new selection only when all of it passes `rules`. A rejected
/// selection leaves `held` untouched and must not be reported as a change; an
/// accepted one returns the value for the change notification.
pub fn apply_selection<T: Clone>(
    held: &mut ControlledValue<Vec<T>>,
    files: Vec<T>,
    meta: impl Fn(&T) -> FileMeta,
    rules: &FileValidation,
) -> Result<Vec<T>, Vec<FileValidationError>> {
    let metas: Vec<FileMeta> = files.iter().map(meta).collect();
    validate_files(&metas, rules)?;
    Ok(held.commit(files))
}

fn size_label(bytes: &u64) -> String {
    format_file_size(*bytes)
}

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable size using 1024-based units with at most two decimals.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut scaled = bytes as f64;
    let mut unit = 0;
    while scaled >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{scaled:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", SIZE_UNITS[unit])
}

/// Returns the selection without the file at `index`. Out-of-range indexes
/// leave the selection unchanged.
pub fn remove_at<T: Clone>(files: &[T], index: usize) -> Vec<T> {
    files
        .iter()
        .enumerate()
        .filter(|(position, _)| *position != index)
        .map(|(_, file)| file.clone())
        .collect()
}

/// Joins the owner's error and the validation errors into one message line.
pub fn combined_error(explicit: Option<&str>, errors: &[FileValidationError]) -> Option<String> {
    let parts: Vec<String> = explicit
        .filter(|error| !error.is_empty())
        .map(str::to_string)
        .into_iter()
        .chain(errors.iter().map(ToString::to_string))
        .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Icon category of a selected file.
pub enum FileKind {
    /// `image/*`
    Image,
    /// PDFs, plain text and JSON.
    Document,
    /// `video/*`
    Video,
    /// `audio/*`
    Audio,
    /// Anything else.
    Other,
}

impl FileKind {
    /// Classifies a MIME type.
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            Self::Image
        } else if mime.contains("pdf") {
            Self::Document
        } else if mime.contains("video/") {
            Self::Video
        } else if mime.contains("audio/") {
            Self::Audio
        } else if mime.contains("text/") || mime.contains("json") {
            Self::Document
        } else {
            Self::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Thumbnail size in the file list.
pub enum PreviewSize {
    /// Small thumbnails.
    Sm,
    /// Medium thumbnails.
    #[default]
    Md,
    /// Large thumbnails.
    Lg,
}

impl PreviewSize {
    /// Stable token used for `data-ui-size` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn pdf(name: &str, size: u64) -> FileMeta {
        FileMeta::new(name, size, "application/pdf")
    }

    #[test]
    fn oversized_file_is_rejected_with_message() {
        let rules = FileValidation {
            max_size: Some(1024 * 1024),
            ..FileValidation::default()
        };
        let errors = validate_files(&[pdf("report.pdf", 2 * 1024 * 1024)], &rules)
            .expect_err("too large");
        assert_eq!(
            errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
            vec!["File \"report.pdf\" is too large (max: 1 MB)".to_string()]
        );
    }

    #[test]
    fn rejected_selection_keeps_the_previous_files() {
        let rules = FileValidation {
            max_size: Some(1024),
            ..FileValidation::default()
        };
        let kept = vec![pdf("small.pdf", 512)];
        let mut held = ControlledValue::new(None, kept.clone());

        let errors = apply_selection(&mut held, vec![pdf("big.pdf", 4096)], Clone::clone, &rules)
            .expect_err("too large");
        assert_eq!(errors.len(), 1);
        assert_eq!(held.current(), &kept);

        let next = vec![pdf("other.pdf", 100)];
        assert_eq!(
            apply_selection(&mut held, next.clone(), Clone::clone, &rules),
            Ok(next.clone())
        );
        assert_eq!(held.current(), &next);
    }

    #[test]
    fn every_violation_is_reported_in_order() {
        let rules = FileValidation {
            max_size: Some(100),
            min_size: Some(10),
            max_files: Some(1),
            allowed_types: vec![".png".into()],
        };
        let files = [pdf("big.pdf", 500), pdf("tiny.pdf", 1)];
        let errors = validate_files(&files, &rules).expect_err("invalid");
        assert_eq!(
            errors,
            vec![
                FileValidationError::TooMany { max: 1 },
                FileValidationError::TooLarge {
                    name: "big.pdf".into(),
                    max: 100
                },
                FileValidationError::TypeNotAllowed {
                    name: "big.pdf".into()
                },
                FileValidationError::TooSmall {
                    name: "tiny.pdf".into(),
                    min: 10
                },
                FileValidationError::TypeNotAllowed {
                    name: "tiny.pdf".into()
                },
            ]
        );
        assert_eq!(errors[0].to_string(), "Maximum 1 files allowed");
        assert_eq!(errors[3].to_string(), "File \"tiny.pdf\" is too small (min: 10 Bytes)");
    }

    #[test]
    fn type_matching_uses_extension_or_mime() {
        let rules = FileValidation {
            allowed_types: vec![".PDF".into(), "image/".into()],
            ..FileValidation::default()
        };
        assert!(validate_files(&[FileMeta::new("Scan.pdf", 5, "")], &rules).is_ok());
        assert!(validate_files(&[FileMeta::new("photo", 5, "image/jpeg")], &rules).is_ok());
        assert!(validate_files(&[FileMeta::new("notes.txt", 5, "text/plain")], &rules).is_err());
    }

    #[test]
    fn unset_and_zero_limits_are_ignored() {
        let rules = FileValidation {
            max_size: Some(0),
            max_files: Some(0),
            ..FileValidation::default()
        };
        let files = vec![pdf("a.pdf", u64::MAX); 3];
        assert_eq!(validate_files(&files, &rules), Ok(()));
        assert_eq!(validate_files(&files, &FileValidation::default()), Ok(()));
    }

    #[test]
    fn file_sizes_are_humanized() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_000_000), "976.56 KB");
        assert_eq!(format_file_size(2 * 1024 * 1024), "2 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024 * 1024), "5120 GB");
    }

    #[test]
    fn remove_and_combine() {
        let files = vec![pdf("a.pdf", 1), pdf("b.pdf", 2), pdf("c.pdf", 3)];
        let remaining = remove_at(&files, 1);
        assert_eq!(
            remaining.iter().map(|file| file.name.as_str()).collect::<Vec<_>>(),
            vec!["a.pdf", "c.pdf"]
        );
        assert_eq!(remove_at(&files, 9).len(), 3);

        let errors = vec![FileValidationError::TypeNotAllowed { name: "x".into() }];
        assert_eq!(
            combined_error(Some("Required"), &errors).as_deref(),
            Some("Required, File \"x\" type not allowed")
        );
        assert_eq!(combined_error(Some(""), &[]), None);
    }

    #[test]
    fn kinds_and_validation_config_from_json() {
        assert_eq!(FileKind::from_mime("image/png"), FileKind::Image);
        assert_eq!(FileKind::from_mime("application/pdf"), FileKind::Document);
        assert_eq!(FileKind::from_mime("application/json"), FileKind::Document);
        assert_eq!(FileKind::from_mime("audio/ogg"), FileKind::Audio);
        assert_eq!(FileKind::from_mime(""), FileKind::Other);

        let rules: FileValidation =
            serde_json::from_str(r#"{"maxSize": 2048, "allowedTypes": [".csv"]}"#).expect("json");
        assert_eq!(rules.max_size, Some(2048));
        assert_eq!(rules.allowed_types, vec![".csv".to_string()]);
        assert_eq!(rules.max_files, None);
    }
}
