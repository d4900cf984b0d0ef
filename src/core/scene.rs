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

//! Scene description
//!
//! A scene is a canvas (size, clear color, output path) plus the primitives
//! drawn onto it, in order. Scenes are stored as TOML:
//!
//! ```toml
//! width = 800
//! height = 600
//! clear_color = 0xFFFFFFFF
//! output = "output.bmp"
//!
//! [[triangles]]
//! vertices = [[200.0, 100.0], [600.0, 300.0], [300.0, 500.0]]
//! colors = [0xFFFF0000, 0xFF00FF00, 0xFF0000FF]
//! outline = 0xFF000000
//!
//! [[lines]]
//! start = [0.0, 0.0]
//! end = [799.0, 599.0]
//! color = 0xFF000000
//! ```
//!
//! Missing top-level keys fall back to [`Scene::default`], which is the
//! single red/green/blue triangle on a white 800×600 canvas. Use
//! `triangles = []` for a scene without it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::{RasterError, Result};
use crate::core::image::{Color, PixelBuffer};
use crate::core::raster::{draw_line, draw_polyline, Triangle, Vec2};

/// A triangle entry in a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneTriangle {
    /// Vertex positions
    pub vertices: [Vec2; 3],
    /// Packed ARGB color per vertex
    pub colors: [u32; 3],
    /// Optional outline color, drawn over the fill with Bresenham lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<u32>,
}

impl SceneTriangle {
    /// The fill primitive of this entry
    pub fn triangle(&self) -> Triangle {
        Triangle::new(self.vertices, self.colors)
    }
}

/// A line entry in a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLine {
    /// First endpoint
    pub start: Vec2,
    /// Last endpoint
    pub end: Vec2,
    /// Packed ARGB color
    pub color: u32,
}

/// Canvas settings and the primitives to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Packed ARGB color every pixel starts with
    pub clear_color: u32,
    /// Where the rendered bitmap is written
    pub output: PathBuf,
    /// Triangles, drawn first, in order
    pub triangles: Vec<SceneTriangle>,
    /// Lines, drawn after all triangles
    pub lines: Vec<SceneLine>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            clear_color: Color::WHITE.into(),
            output: PathBuf::from("output.bmp"),
            triangles: vec![SceneTriangle {
                vertices: [
                    Vec2::new(200.0, 100.0),
                    Vec2::new(600.0, 300.0),
                    Vec2::new(300.0, 500.0),
                ],
                colors: [0xFFFF0000, 0xFF00FF00, 0xFF0000FF],
                outline: None,
            }],
            lines: Vec::new(),
        }
    }
}

impl Scene {
    /// Load and validate a scene from a TOML file
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::Io`] if the file cannot be read,
    /// [`RasterError::SceneParse`] if it is not a valid scene, or
    /// [`RasterError::InvalidScene`] if validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading scene from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate a scene from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let scene: Scene =
            toml::from_str(contents).map_err(|e| RasterError::SceneParse(e.to_string()))?;
        scene.validate()?;
        Ok(scene)
    }

    /// Serialize to TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| RasterError::InvalidScene(format!("cannot serialize: {}", e)))
    }

    /// Write the scene to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Check that the scene can be rendered
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidDimensions`] for an unusable canvas and
    /// [`RasterError::InvalidScene`] for non-finite coordinates.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RasterError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        for (i, tri) in self.triangles.iter().enumerate() {
            if let Some(v) = tri.vertices.iter().find(|v| !v.is_finite()) {
                return Err(RasterError::InvalidScene(format!(
                    "triangle {} has non-finite vertex ({}, {})",
                    i, v.x, v.y
                )));
            }
        }

        for (i, line) in self.lines.iter().enumerate() {
            if !line.start.is_finite() || !line.end.is_finite() {
                return Err(RasterError::InvalidScene(format!(
                    "line {} has a non-finite endpoint",
                    i
                )));
            }
        }

        Ok(())
    }

    /// Render into a freshly allocated buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the scene fails [`Scene::validate`] or the canvas
    /// cannot be allocated.
    pub fn render(&self) -> Result<PixelBuffer> {
        self.validate()?;

        let mut image = PixelBuffer::new(self.width, self.height)?;
        image.clear(self.clear_color);
        log::debug!(
            "Rendering {}x{} scene: {} triangle(s), {} line(s)",
            self.width,
            self.height,
            self.triangles.len(),
            self.lines.len()
        );

        let mut total = 0;
        for (i, entry) in self.triangles.iter().enumerate() {
            let triangle = entry.triangle();
            if triangle.is_degenerate() {
                log::warn!("Triangle {} has zero area, skipping", i);
                continue;
            }

            let written = triangle.rasterize(&mut image);
            log::debug!("Triangle {}: {} pixel(s)", i, written);
            total += written;

            if let Some(color) = entry.outline {
                let [v0, v1, v2] = entry.vertices;
                total += draw_polyline(&mut image, &[v0, v1, v2, v0], color);
            }
        }

        for line in &self.lines {
            total += draw_line(&mut image, line.start, line.end, line.color);
        }

        log::info!("Rendered scene ({} pixel writes)", total);
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
width = 64
height = 48
clear_color = 0xFF000000
output = "sample.bmp"

[[triangles]]
vertices = [[4.0, 4.0], [60.0, 10.0], [20.0, 44.0]]
colors = [0xFFFF0000, 0xFF00FF00, 0xFF0000FF]
outline = 0xFFFFFFFF

[[lines]]
start = [0.0, 47.0]
end = [63.0, 47.0]
color = 0xFFFFFF00
"#;

    #[test]
    fn test_default_scene() {
        let scene = Scene::default();
        assert_eq!(scene.width, 800);
        assert_eq!(scene.height, 600);
        assert_eq!(scene.clear_color, 0xFFFFFFFF);
        assert_eq!(scene.output, PathBuf::from("output.bmp"));
        assert_eq!(scene.triangles.len(), 1);
        assert!(scene.lines.is_empty());
    }

    #[test]
    fn test_parse_sample() {
        let scene = Scene::from_toml_str(SAMPLE).unwrap();
        assert_eq!(scene.width, 64);
        assert_eq!(scene.height, 48);
        assert_eq!(scene.clear_color, 0xFF000000);
        assert_eq!(scene.output, PathBuf::from("sample.bmp"));
        assert_eq!(scene.triangles[0].vertices[1], Vec2::new(60.0, 10.0));
        assert_eq!(scene.triangles[0].colors[2], 0xFF0000FF);
        assert_eq!(scene.triangles[0].outline, Some(0xFFFFFFFF));
        assert_eq!(scene.lines[0].color, 0xFFFFFF00);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let scene = Scene::from_toml_str("width = 320\nheight = 240\n").unwrap();
        assert_eq!(scene.width, 320);
        assert_eq!(scene.clear_color, 0xFFFFFFFF);
        assert_eq!(scene.triangles, Scene::default().triangles);

        let empty = Scene::from_toml_str("triangles = []\n").unwrap();
        assert!(empty.triangles.is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Scene::from_toml_str("width = \"wide\""),
            Err(RasterError::SceneParse(_))
        ));
        assert!(matches!(
            Scene::from_toml_str("[[triangles]]\nvertices = [[0.0, 0.0]]\ncolors = [0, 0, 0]\n"),
            Err(RasterError::SceneParse(_))
        ));
        assert!(matches!(
            Scene::from_toml_str("width = 0\n"),
            Err(RasterError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut scene = Scene::default();
        scene.triangles[0].vertices[2] = Vec2::new(f32::NAN, 0.0);
        assert!(matches!(scene.validate(), Err(RasterError::InvalidScene(_))));

        let mut scene = Scene::default();
        scene.lines.push(SceneLine {
            start: Vec2::new(0.0, f32::INFINITY),
            end: Vec2::new(1.0, 1.0),
            color: 0,
        });
        assert!(scene.render().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let scene = Scene::from_toml_str(SAMPLE).unwrap();
        let text = scene.to_toml_string().unwrap();
        assert_eq!(Scene::from_toml_str(&text).unwrap(), scene);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scene.toml");

        let scene = Scene::default();
        scene.save(&path).unwrap();
        assert_eq!(Scene::load(&path).unwrap(), scene);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Scene::load("/nonexistent/trirast/scene.toml"),
            Err(RasterError::Io(_))
        ));
    }

    #[test]
    fn test_render_default_scene() {
        let image = Scene::default().render().unwrap();
        assert_eq!(image.width(), 800);
        assert_eq!(image.height(), 600);
        assert_eq!(image.get_pixel(0, 0), Some(0xFFFFFFFF));
        assert_ne!(image.get_pixel(366, 300), Some(0xFFFFFFFF));
    }

    #[test]
    fn test_render_sample_draw_order() {
        let image = Scene::from_toml_str(SAMPLE).unwrap().render().unwrap();

        // Outline is drawn over the fill at each vertex
        assert_eq!(image.get_pixel(4, 4), Some(0xFFFFFFFF));
        assert_eq!(image.get_pixel(60, 10), Some(0xFFFFFFFF));
        // Line along the bottom row
        assert_eq!(image.get_pixel(30, 47), Some(0xFFFFFF00));
        // Background
        assert_eq!(image.get_pixel(62, 40), Some(0xFF000000));
        // Interior is shaded
        let inside = image.get_pixel(28, 20).unwrap();
        assert_ne!(inside, 0xFF000000);
        assert_ne!(inside, 0xFFFFFFFF);
    }

    #[test]
    fn test_render_write_read_back() {
        use crate::core::image::{read_bitmap, write_image};

        let dir = TempDir::new().unwrap();
        let mut scene = Scene::from_toml_str(SAMPLE).unwrap();
        scene.output = dir.path().join("scene.bmp");

        let image = scene.render().unwrap();
        assert!(write_image(&image, &scene.output));

        let size = std::fs::metadata(&scene.output).unwrap().len();
        assert_eq!(size, 54 + 64 * 48 * 4);
        assert_eq!(read_bitmap(&scene.output).unwrap(), image);
    }

    #[test]
    fn test_render_rejects_oversized_canvas() {
        let mut scene = Scene::default();
        scene.width = 1 << 31;
        scene.height = 1 << 31;
        assert!(matches!(
            scene.render(),
            Err(RasterError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_render_skips_degenerate_triangle() {
        let mut scene = Scene::default();
        scene.width = 16;
        scene.height = 16;
        scene.triangles = vec![SceneTriangle {
            vertices: [Vec2::new(1.0, 1.0), Vec2::new(5.0, 5.0), Vec2::new(9.0, 9.0)],
            colors: [0xFF000000; 3],
            outline: None,
        }];

        let image = scene.render().unwrap();
        assert!(image.as_slice().iter().all(|&p| p == 0xFFFFFFFF));
    }
}
