use crate::utils::error::Result;
use reqwest::Client;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const PLACEHOLDER_LOGO: &str = "placeholder.svg";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

struct DownloadTarget {
    dest: PathBuf,
    // Paths are reported relative to this directory when possible.
    base: PathBuf,
}

/// Resolves a project's logo reference. Without a destination directory the
/// URL is passed through untouched; with one, logos are downloaded and the
/// local path is recorded instead. Fetch failures never propagate, they
/// degrade to a placeholder reference.
pub struct LogoResolver {
    client: Client,
    download: Option<DownloadTarget>,
}

impl LogoResolver {
    pub fn keep_urls() -> Self {
        Self {
            client: Client::new(),
            download: None,
        }
    }

    pub fn download_into(dest: impl Into<PathBuf>, base: impl Into<PathBuf>) -> Result<Self> {
        let dest = dest.into();
        fs::create_dir_all(&dest)?;

        let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self {
            client,
            download: Some(DownloadTarget {
                dest,
                base: base.into(),
            }),
        })
    }

    pub async fn resolve(&self, logo_url: Option<&str>) -> String {
        let Some(url) = logo_url else {
            return PLACEHOLDER_LOGO.to_string();
        };

        match &self.download {
            None => url.to_string(),
            Some(target) => match self.fetch_into(target, url).await {
                Ok(path) => path,
                Err(e) => {
                    tracing::warn!("Logo fetch failed for {}: {}", url, e);
                    relativize(&target.base, target.dest.join(PLACEHOLDER_LOGO))
                }
            },
        }
    }

    async fn fetch_into(&self, target: &DownloadTarget, url: &str) -> Result<String> {
        let file_name = file_name_from_url(url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        let path = target.dest.join(file_name);
        fs::write(&path, &bytes)?;
        tracing::debug!("Downloaded logo {} -> {}", url, path.display());

        Ok(relativize(&target.base, path))
    }
}

fn relativize(base: &Path, path: PathBuf) -> String {
    match path.strip_prefix(base) {
        Ok(relative) => relative.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

/// Last path segment of the URL with any query string stripped.
fn file_name_from_url(url: &str) -> &str {
    let segment = url.rsplit('/').next().unwrap_or(url);
    segment.split('?').next().unwrap_or(segment)
}
