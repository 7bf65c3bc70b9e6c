// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless drawing explorer.
//!
//! Loads project metadata, replays selection events given on the command line
//! in the order they appear, and prints the derived view as JSON.
//!
//! ```text
//! drawing_explorer --metadata data/metadata.json \
//!     --space 01 --discipline Structural --overlay Mechanical \
//!     --measure 4962x3508:1240x877
//! ```
//!
//! Set `RUST_LOG=understory_drawing_explorer=debug` to see which stale
//! choices were replaced and which overlays were skipped.

use std::path::PathBuf;

use anyhow::{Context as _, bail};
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use kurbo::Size;
use serde_json::json;
use understory_drawing_explorer::{Explorer, ExplorerConfig, filter_spaces};
use understory_drawing_selection::SelectionEvent;

/// A measured image: natural size, then rendered size.
#[derive(Clone, Copy, Debug)]
struct Measure {
    natural: Size,
    rendered: Size,
}

fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{s}`"))?;
    let w: f64 = w.trim().parse().map_err(|e| format!("bad width `{w}`: {e}"))?;
    let h: f64 = h.trim().parse().map_err(|e| format!("bad height `{h}`: {e}"))?;
    Ok(Size::new(w, h))
}

fn parse_measure(s: &str) -> Result<Measure, String> {
    let (natural, rendered) = s
        .split_once(':')
        .ok_or_else(|| format!("expected NATURAL:RENDERED, got `{s}`"))?;
    Ok(Measure {
        natural: parse_size(natural)?,
        rendered: parse_size(rendered)?,
    })
}

#[derive(Debug, Parser)]
#[command(name = "drawing_explorer", about = "Derive what a drawing explorer shows")]
struct Cli {
    /// Metadata file or, with the `http` feature, URL. Overrides the config.
    #[arg(long)]
    metadata: Option<String>,
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Select a space by id.
    #[arg(long, value_name = "ID")]
    space: Vec<String>,
    /// Select a discipline.
    #[arg(long, value_name = "NAME")]
    discipline: Vec<String>,
    /// Select a region.
    #[arg(long, value_name = "NAME")]
    region: Vec<String>,
    /// Select a revision by version.
    #[arg(long, value_name = "VERSION")]
    revision: Vec<String>,
    /// Toggle an overlay discipline.
    #[arg(long, value_name = "NAME")]
    overlay: Vec<String>,
    /// Measured base image, `NATURAL:RENDERED` as `WxH:WxH`.
    #[arg(long, value_parser = parse_measure)]
    measure: Option<Measure>,
    /// Measured root image, for the space outlines.
    #[arg(long, value_parser = parse_measure)]
    measure_root: Option<Measure>,
    /// Only list spaces whose name contains this text.
    #[arg(long, default_value = "")]
    search: String,
}

/// Selection flags in the order they were given.
fn ordered_events(matches: &ArgMatches) -> Vec<SelectionEvent> {
    let kinds: [(&str, fn(String) -> SelectionEvent); 5] = [
        ("space", SelectionEvent::space),
        ("discipline", SelectionEvent::discipline),
        ("region", SelectionEvent::region),
        ("revision", SelectionEvent::revision),
        ("overlay", SelectionEvent::overlay),
    ];
    let mut indexed = Vec::new();
    for (id, make) in kinds {
        let (Some(indices), Some(values)) = (matches.indices_of(id), matches.get_many::<String>(id))
        else {
            continue;
        };
        indexed.extend(indices.zip(values).map(|(i, v)| (i, make(v.clone()))));
    }
    indexed.sort_by_key(|(i, _)| *i);
    indexed.into_iter().map(|(_, event)| event).collect()
}

fn load_config(cli: &Cli) -> anyhow::Result<ExplorerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))?
        }
        None => ExplorerConfig::default(),
    };
    if let Some(metadata) = &cli.metadata {
        config.metadata_path.clone_from(metadata);
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "understory_drawing_explorer=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;
    let config = load_config(&cli)?;

    let mut explorer = Explorer::new(config);
    explorer.load();
    for event in ordered_events(&matches) {
        tracing::debug!(?event, "dispatch");
        explorer.dispatch(event);
    }
    if let Some(message) = explorer.error_message() {
        bail!(message);
    }
    if let Some(m) = cli.measure {
        explorer.observe_base_image(m.natural, m.rendered);
    }
    if let Some(m) = cli.measure_root {
        explorer.observe_root_image(m.natural, m.rendered);
    }

    let view = explorer.view()?;
    let spaces: Vec<_> = filter_spaces(&view.spaces, &cli.search)
        .into_iter()
        .map(|s| json!({ "id": s.id, "name": s.name }))
        .collect();
    let markers: Vec<_> = explorer
        .space_markers()
        .into_iter()
        .map(|m| {
            json!({
                "id": m.space.id,
                "points": m.svg_points(),
                "centroid": [m.polygon.centroid.x, m.polygon.centroid.y],
                "active": m.active,
            })
        })
        .collect();

    let revisions: Vec<&str> = view
        .revision_candidates
        .iter()
        .map(|r| r.version.as_str())
        .collect();
    let context = explorer.context()?;

    let output = json!({
        "selection": view.selection(),
        "spaces": spaces,
        "disciplines": view.discipline_names,
        "regions": view.region_names,
        "revisions": revisions,
        "baseImage": view.base_image,
        "baseImageUrl": explorer.base_image_url(),
        "overlays": explorer.placed_overlays(),
        "spaceMarkers": markers,
        "context": context,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
