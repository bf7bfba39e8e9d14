use reqwest::blocking::{Client, Response};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};
use tracing::{debug, info, instrument};
use url::Url;

use super::urls::resource_url;
use crate::error::{FetchError, Result};

/// Download `year`'s gzip file to `dest`, streaming the body to a temp file first.
/// Returns the number of bytes written.
#[instrument(level = "info", skip(client, dest), fields(dest = %dest.as_ref().display()))]
pub fn download_year(client: &Client, year: u16, dest: impl AsRef<Path>) -> Result<u64> {
    let url = resource_url(year)?;
    download_url(client, &url, year, dest.as_ref())
}

/// Fetch `url` into `dest`. Nothing is left at `dest` or its temp path unless the
/// server answers with a success status and the whole body is written.
fn download_url(client: &Client, url: &Url, year: u16, dest: &Path) -> Result<u64> {
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    debug!(%url, "requesting");
    let mut resp = client.get(url.as_str()).send().map_err(FetchError::from)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            year,
            status: status.as_u16(),
        }
        .into());
    }

    let tmp_path = dest.with_extension("gz.tmp");
    let bytes = match write_body(&mut resp, &tmp_path) {
        Ok(n) => n,
        Err(e) => {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
    };
    fs::rename(&tmp_path, dest)?;

    info!(bytes, "downloaded");
    Ok(bytes)
}

fn write_body(resp: &mut Response, path: &Path) -> Result<u64> {
    let mut out = BufWriter::new(File::create(path)?);
    let bytes = resp.copy_to(&mut out).map_err(FetchError::from)?;
    out.flush()?;
    Ok(bytes)
}
