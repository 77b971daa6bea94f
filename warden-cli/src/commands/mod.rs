pub mod classify;
pub mod decide;
pub mod lexicon;
pub mod summarize;

use std::io::Write;

use anyhow::{Context, Result};
use warden_core::config::WardenConfig;

/// Print the effective configuration.
pub fn show_config(config: &WardenConfig, out: &mut dyn Write) -> Result<()> {
    let rendered = toml::to_string_pretty(config).context("rendering configuration")?;
    out.write_all(rendered.as_bytes())?;
    Ok(())
}

/// Write pretty JSON followed by a newline.
pub(crate) fn write_json<T>(out: &mut dyn Write, value: &T) -> Result<()>
where
    T: serde::Serialize + ?Sized,
{
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
