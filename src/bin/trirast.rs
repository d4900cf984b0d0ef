// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! trirast entry point
//!
//! Renders a scene (the built-in triangle, or a TOML scene file) and writes it
//! as a 32-bit BMP.

use std::path::PathBuf;

use clap::Parser;
use trirast::core::image::write_image;
use trirast::core::scene::Scene;

/// Rasterize triangles into a BMP file
#[derive(Debug, Parser)]
#[command(name = "trirast", version, about)]
struct Args {
    /// TOML scene file (defaults to the built-in triangle)
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Output bitmap path, overrides the scene
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Image width in pixels, overrides the scene
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels, overrides the scene
    #[arg(long)]
    height: Option<u32>,

    /// Clear color as 0xAARRGGBB, overrides the scene
    #[arg(long, value_parser = parse_color)]
    clear: Option<u32>,
}

/// Parse `0xAARRGGBB`, `AARRGGBB` or `#AARRGGBB`
fn parse_color(s: &str) -> Result<u32, String> {
    let hex = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .or_else(|| s.strip_prefix('#'))
        .unwrap_or(s);
    u32::from_str_radix(hex, 16).map_err(|e| format!("invalid color '{}': {}", s, e))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional; it may set RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let mut scene = match &args.scene {
        Some(path) => {
            log::info!("Scene file: {}", path.display());
            Scene::load(path)?
        }
        None => Scene::default(),
    };

    if let Some(output) = args.output {
        scene.output = output;
    }
    if let Some(width) = args.width {
        scene.width = width;
    }
    if let Some(height) = args.height {
        scene.height = height;
    }
    if let Some(clear) = args.clear {
        scene.clear_color = clear;
    }

    let image = scene.render()?;

    // Write failures are logged by write_image; the run still succeeds
    write_image(&image, &scene.output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("0xFF00FF00"), Ok(0xFF00FF00));
        assert_eq!(parse_color("#80FFFFFF"), Ok(0x80FFFFFF));
        assert_eq!(parse_color("ffffffff"), Ok(0xFFFFFFFF));
        assert!(parse_color("0xGG").is_err());
        assert!(parse_color("0x1FFFFFFFF").is_err());
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::parse_from([
            "trirast", "--output", "out.bmp", "--width", "320", "--height", "200", "--clear",
            "0xFF000000",
        ]);
        assert_eq!(args.output, Some(PathBuf::from("out.bmp")));
        assert_eq!(args.width, Some(320));
        assert_eq!(args.height, Some(200));
        assert_eq!(args.clear, Some(0xFF000000));
        assert!(args.scene.is_none());
    }
}
