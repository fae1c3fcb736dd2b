use std::path::Path;

use agora_client::AgentWizard;
use agora_types::forms::{AgentBasicsForm, MediaFile, MediaSelection, VersionForm};
use agora_types::VersionStatus;
use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::PublishArgs;
use crate::commands::AppContext;

/// MIME type from the file extension; the gateway stores what we send.
fn mime_for(path: &Path) -> &'static str {
    let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}

async fn read_media(path: &Path) -> Result<MediaFile> {
    let data = tokio::fs::read(path).await.with_context(|| format!("Failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(MediaFile { name, mime: mime_for(path).to_string(), size: data.len() as u64, duration_secs: None, data })
}

fn forms(args: &PublishArgs) -> Result<(AgentBasicsForm, VersionForm)> {
    let status = VersionStatus::parse(&args.status).with_context(|| {
        let known: Vec<_> = VersionStatus::ALL.iter().map(|s| s.as_str()).collect();
        format!("Unknown status '{}', expected one of: {}", args.status, known.join(", "))
    })?;
    let basics = AgentBasicsForm {
        name: args.name.clone(),
        short_description: args.description.clone(),
        long_description: args.long_description.clone(),
        tags: args.tags.clone(),
        install_guide: args.install_guide.clone(),
        repo_url: args.repo_url.clone(),
        demo_url: args.demo_url.clone(),
        categories: args.categories.clone(),
    };
    let version = VersionForm {
        version: args.version.clone(),
        changelog: args.changelog.clone(),
        status,
        project_path: args.project_path.clone(),
    };
    Ok((basics, version))
}

pub async fn publish(ctx: &AppContext, args: PublishArgs) -> Result<()> {
    let user = ctx.require_user().await?;
    if !user.is_developer() {
        anyhow::bail!("Only developers can publish agents. Register a developer profile first.");
    }
    let (basics, version) = forms(&args)?;

    let mut media = MediaSelection::default();
    for path in &args.photos {
        let file = read_media(path).await?;
        file.validate_photo()?;
        media.photos.push(file);
    }
    if let Some(path) = &args.video {
        media.set_video(read_media(path).await?)?;
    }

    println!("Publishing {} as {}...", basics.slug().cyan(), user.nickname);
    let agent = AgentWizard::new(ctx.client.clone()).publish(&user.id, &basics, &version, &media).await?;
    println!("{} Agent {} published (id {})", "✓".green(), agent.name.cyan().bold(), agent.id);
    println!("  {} photo(s), {} video", media.photos.len(), if media.video.is_some() { "1" } else { "no" });
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::{Cli, Commands};

    #[test]
    fn test_mime_for() {
        assert_eq!(mime_for(Path::new("cover.PNG")), "image/png");
        assert_eq!(mime_for(Path::new("shot.jpeg")), "image/jpeg");
        assert_eq!(mime_for(Path::new("demo.mp4")), "video/mp4");
        assert_eq!(mime_for(Path::new("README")), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_read_media() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.mp4");
        std::fs::write(&path, b"0000").unwrap();

        let file = read_media(&path).await.unwrap();
        assert_eq!(file.name, "demo.mp4");
        assert_eq!(file.size, 4);
        assert!(file.validate_video().is_ok());
        assert!(file.validate_photo().is_err());
    }

    fn publish_args(extra: &[&str]) -> PublishArgs {
        let mut argv = vec!["agora", "publish", "--name", "Summarizer", "--description", "Summarizes text"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Publish(args) => args,
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_forms_from_args() {
        let (basics, version) = forms(&publish_args(&["--status", "latest", "--tags", "ai, text"])).unwrap();
        assert_eq!(basics.slug(), "summarizer");
        assert_eq!(basics.tags, "ai, text");
        assert_eq!(version.status, VersionStatus::Latest);
        assert_eq!(version.version, "1.0.0");
    }

    #[test]
    fn test_unknown_status_rejected() {
        let err = forms(&publish_args(&["--status", "beta"])).unwrap_err();
        assert!(err.to_string().contains("Unknown status 'beta'"));
    }
}
