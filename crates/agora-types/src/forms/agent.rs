//! Add-agent wizard forms: basics, version and media.

use crate::error::{Result, ValidationError};
use crate::models::{MediaKind, VersionStatus};
use crate::protocol::{AgentCreate, VersionCreate};
use crate::view::{slugify, split_tags};

/// Categories offered on the basics step.
pub const CATEGORIES: [&str; 9] = [
    "Programming",
    "Analytics",
    "Design",
    "Marketing",
    "Education",
    "Health",
    "Finance",
    "Entertainment",
    "Other",
];

pub const MAX_CATEGORIES: usize = 3;

/// 100 MiB.
pub const VIDEO_MAX_BYTES: u64 = 100 * 1024 * 1024;

pub const VIDEO_MAX_SECONDS: f64 = 180.0;

/// Add or remove `category`; additions past [`MAX_CATEGORIES`] are ignored.
pub fn toggle_category(selected: &mut Vec<String>, category: &str) {
    if let Some(pos) = selected.iter().position(|c| c == category) {
        selected.remove(pos);
    } else if selected.len() < MAX_CATEGORIES {
        selected.push(category.to_string());
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Wizard step 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentBasicsForm {
    pub name: String,
    pub short_description: String,
    pub long_description: String,
    /// Comma separated
    pub tags: String,
    pub install_guide: String,
    pub repo_url: String,
    pub demo_url: String,
    pub categories: Vec<String>,
}

impl AgentBasicsForm {
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    /// Build the create payload for `user_id`.
    ///
    /// The gateway has no category table, so selected categories are sent as
    /// extra tags. A long description is appended after the short one.
    pub fn into_request(&self, user_id: &str) -> Result<AgentCreate> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::required("Agent name"));
        }
        let short = self.short_description.trim();
        if short.is_empty() {
            return Err(ValidationError::required("Short description"));
        }
        if self.categories.is_empty() || self.categories.len() > MAX_CATEGORIES {
            return Err(ValidationError::CategoryCount { max: MAX_CATEGORIES });
        }

        let slug = self.slug();
        if slug.is_empty() {
            return Err(ValidationError::Invalid {
                field: "Agent name".to_string(),
                message: "must contain latin letters or digits".to_string(),
            });
        }

        let mut tags = split_tags(&self.tags);
        for category in &self.categories {
            if !tags.iter().any(|t| t.eq_ignore_ascii_case(category)) {
                tags.push(category.clone());
            }
        }

        let description = match self.long_description.trim() {
            "" => short.to_string(),
            long => format!("{short}\n\n{long}"),
        };

        Ok(AgentCreate {
            user_id: user_id.to_string(),
            name: name.to_string(),
            slug,
            agent_url: optional(&self.repo_url).or_else(|| optional(&self.demo_url)),
            description,
            requirements: optional(&self.install_guide),
            tags,
            category_id: None,
            article_id: None,
            price: None,
        })
    }
}

/// Wizard step 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionForm {
    pub version: String,
    pub changelog: String,
    pub status: VersionStatus,
    pub project_path: String,
}

impl Default for VersionForm {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            changelog: String::new(),
            status: VersionStatus::Stable,
            project_path: String::new(),
        }
    }
}

impl VersionForm {
    pub fn into_request(&self, agent_id: &str) -> Result<VersionCreate> {
        let version = self.version.trim();
        if version.is_empty() {
            return Err(ValidationError::required("Version"));
        }
        Ok(VersionCreate {
            agent_id: agent_id.to_string(),
            version: version.to_string(),
            changelog: optional(&self.changelog),
            status: self.status,
            project_path: optional(&self.project_path),
        })
    }
}

/// A file picked on the media step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
    /// Known only when the picker could read the metadata
    pub duration_secs: Option<f64>,
    pub data: Vec<u8>,
}

impl MediaFile {
    pub fn kind(&self) -> Option<MediaKind> {
        MediaKind::detect(&self.mime, &self.name)
    }

    pub fn validate_photo(&self) -> Result<()> {
        if self.mime.starts_with("image/") {
            Ok(())
        } else {
            Err(ValidationError::UnsupportedMedia { name: self.name.clone() })
        }
    }

    pub fn validate_video(&self) -> Result<()> {
        let is_mp4 = self.mime == "video/mp4" || self.name.to_lowercase().ends_with(".mp4");
        if !is_mp4 {
            return Err(ValidationError::UnsupportedMedia { name: self.name.clone() });
        }
        if self.size > VIDEO_MAX_BYTES {
            return Err(ValidationError::VideoTooLarge { max_mb: VIDEO_MAX_BYTES / (1024 * 1024) });
        }
        if self.duration_secs.is_some_and(|d| d > VIDEO_MAX_SECONDS) {
            return Err(ValidationError::VideoTooLong { max_minutes: (VIDEO_MAX_SECONDS / 60.0) as u64 });
        }
        Ok(())
    }

    /// Agent archives for the single-page flow are `.zip` only.
    pub fn validate_archive(&self) -> Result<()> {
        let is_zip = matches!(self.mime.as_str(), "application/zip" | "application/x-zip-compressed")
            || self.name.to_lowercase().ends_with(".zip");
        if is_zip {
            Ok(())
        } else {
            Err(ValidationError::UnsupportedMedia { name: self.name.clone() })
        }
    }
}

/// Wizard step 3: photos plus an optional video.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaSelection {
    pub photos: Vec<MediaFile>,
    pub video: Option<MediaFile>,
}

impl MediaSelection {
    /// Keep image files only; returns how many were rejected.
    pub fn add_photos(&mut self, files: impl IntoIterator<Item = MediaFile>) -> usize {
        let mut rejected = 0;
        for file in files {
            if file.validate_photo().is_ok() {
                self.photos.push(file);
            } else {
                rejected += 1;
            }
        }
        rejected
    }

    pub fn remove_photo(&mut self, index: usize) {
        if index < self.photos.len() {
            self.photos.remove(index);
        }
    }

    /// Replace the video after checking it.
    pub fn set_video(&mut self, file: MediaFile) -> Result<()> {
        file.validate_video()?;
        self.video = Some(file);
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.photos.is_empty() && self.video.is_none() {
            return Err(ValidationError::NoMedia);
        }
        self.photos.iter().try_for_each(MediaFile::validate_photo)?;
        if let Some(video) = &self.video {
            video.validate_video()?;
        }
        Ok(())
    }

    /// Files in upload order with their `is_primary` flag. The first photo is primary.
    pub fn upload_plan(&self) -> Vec<(&MediaFile, bool)> {
        self.photos
            .iter()
            .enumerate()
            .map(|(i, photo)| (photo, i == 0))
            .chain(self.video.iter().map(|video| (video, false)))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn basics() -> AgentBasicsForm {
        AgentBasicsForm {
            name: "Code Master Pro".to_string(),
            short_description: "Reviews your pull requests".to_string(),
            tags: "rust, review, Rust".to_string(),
            categories: vec!["Programming".to_string()],
            ..Default::default()
        }
    }

    fn photo(name: &str) -> MediaFile {
        MediaFile {
            name: name.to_string(),
            mime: "image/png".to_string(),
            size: 1024,
            ..Default::default()
        }
    }

    fn video(size: u64, duration: Option<f64>) -> MediaFile {
        MediaFile {
            name: "demo.mp4".to_string(),
            mime: "video/mp4".to_string(),
            size,
            duration_secs: duration,
            data: Vec::new(),
        }
    }

    #[test]
    fn test_toggle_category_caps_at_three() {
        let mut selected = Vec::new();
        for category in CATEGORIES.iter().take(4) {
            toggle_category(&mut selected, category);
        }
        assert_eq!(selected.len(), MAX_CATEGORIES);
        toggle_category(&mut selected, "Programming");
        assert_eq!(selected, vec!["Analytics", "Design"]);
    }

    #[test]
    fn test_basics_request() {
        let request = basics().into_request("u1").unwrap();
        assert_eq!(request.slug, "code-master-pro");
        assert_eq!(request.tags, vec!["rust", "review", "Programming"]);
        assert_eq!(request.description, "Reviews your pull requests");
        assert_eq!(request.agent_url, None);
        assert_eq!(request.user_id, "u1");
    }

    #[test]
    fn test_basics_rules() {
        let form = AgentBasicsForm { name: "  ".to_string(), ..basics() };
        assert_eq!(form.into_request("u1"), Err(ValidationError::required("Agent name")));

        let form = AgentBasicsForm { short_description: String::new(), ..basics() };
        assert_eq!(form.into_request("u1"), Err(ValidationError::required("Short description")));

        let form = AgentBasicsForm { categories: Vec::new(), ..basics() };
        assert_eq!(form.into_request("u1"), Err(ValidationError::CategoryCount { max: 3 }));

        let form = AgentBasicsForm { name: "Агент".to_string(), ..basics() };
        assert!(matches!(form.into_request("u1"), Err(ValidationError::Invalid { .. })));
    }

    #[test]
    fn test_long_description_appended() {
        let form = AgentBasicsForm { long_description: "Supports GitHub.".to_string(), ..basics() };
        let request = form.into_request("u1").unwrap();
        assert_eq!(request.description, "Reviews your pull requests\n\nSupports GitHub.");
    }

    #[test]
    fn test_version_defaults() {
        let request = VersionForm::default().into_request("a1").unwrap();
        assert_eq!(request.version, "1.0.0");
        assert_eq!(request.status, VersionStatus::Stable);
        assert_eq!(request.changelog, None);

        let form = VersionForm { version: " ".to_string(), ..Default::default() };
        assert_eq!(form.into_request("a1"), Err(ValidationError::required("Version")));
    }

    #[test]
    fn test_video_limits() {
        assert!(video(1024, Some(60.0)).validate_video().is_ok());
        assert!(video(1024, None).validate_video().is_ok());
        assert_eq!(
            video(VIDEO_MAX_BYTES + 1, None).validate_video(),
            Err(ValidationError::VideoTooLarge { max_mb: 100 })
        );
        assert_eq!(
            video(1024, Some(181.0)).validate_video(),
            Err(ValidationError::VideoTooLong { max_minutes: 3 })
        );

        let mov = MediaFile { name: "demo.mov".to_string(), mime: "video/quicktime".to_string(), ..video(1, None) };
        assert!(matches!(mov.validate_video(), Err(ValidationError::UnsupportedMedia { .. })));
    }

    #[test]
    fn test_archive_must_be_zip() {
        let zip = MediaFile { name: "agent.ZIP".to_string(), mime: String::new(), ..photo("x") };
        assert!(zip.validate_archive().is_ok());
        assert!(matches!(photo("agent.tar").validate_archive(), Err(ValidationError::UnsupportedMedia { .. })));
    }

    #[test]
    fn test_selection_requires_media() {
        assert_eq!(MediaSelection::default().validate(), Err(ValidationError::NoMedia));

        let mut selection = MediaSelection::default();
        selection.set_video(video(1024, Some(10.0))).unwrap();
        assert!(selection.validate().is_ok());
    }

    #[test]
    fn test_upload_plan_first_photo_primary() {
        let mut selection = MediaSelection::default();
        let pdf = MediaFile { name: "notes.pdf".to_string(), mime: "application/pdf".to_string(), ..photo("x") };
        let rejected = selection.add_photos(vec![photo("a.png"), pdf, photo("b.png")]);
        assert_eq!(rejected, 1);
        selection.set_video(video(1024, None)).unwrap();

        let plan: Vec<_> = selection.upload_plan().into_iter().map(|(f, p)| (f.name.as_str(), p)).collect();
        assert_eq!(plan, vec![("a.png", true), ("b.png", false), ("demo.mp4", false)]);
    }
}
