use std::io::Write;
use std::path::PathBuf;

use tagsort_core::api::{SortConfig, sort_sources};
use tagsort_core::util::segment::segments;
use tagsort_core::util::sort::compare_tag_names_sign;
use tracing::{debug, info};

use crate::input::read_sources;

type CommandResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

pub async fn sort_command(
    sources: Vec<PathBuf>,
    config: SortConfig,
    output_path: Option<PathBuf>,
    json: bool,
) -> CommandResult {
    debug!("Starting sort command");
    debug!("Sources: {:?}", sources);
    debug!("Config: {:?}", config);

    let inputs = read_sources(&sources).await?;
    let output = sort_sources(&inputs, &config)?;

    let rendered = if json {
        let mut text = output.to_json()?;
        text.push('\n');
        text
    } else {
        output.to_text()
    };

    match output_path {
        Some(path) => {
            tokio::fs::write(&path, rendered).await?;
            info!("Wrote {} lines to {}", output.lines.len(), path.display());
        }
        None => write_stdout(&rendered)?,
    }

    if output.dropped > 0 {
        debug!("Dropped {} lines", output.dropped);
    }
    Ok(())
}

pub fn compare_command(a: &str, b: &str) -> CommandResult {
    let sign = compare_tag_names_sign(a, b);
    debug!("compare({:?}, {:?}) = {}", a, b, sign);
    write_stdout(&format!("{sign}\n"))
}

pub fn segments_command(name: &str, json: bool) -> CommandResult {
    let parts: Vec<_> = segments(name).collect();
    let rendered = if json {
        format!("{}\n", serde_json::to_string_pretty(&parts)?)
    } else {
        render_segments(name)
    };
    write_stdout(&rendered)
}

/// One `kind<TAB>text` line per segment
fn render_segments(name: &str) -> String {
    segments(name)
        .map(|s| format!("{}\t{}\n", s.kind(), s.text()))
        .collect()
}

fn write_stdout(text: &str) -> CommandResult {
    let mut out = std::io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
