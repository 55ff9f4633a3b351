// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

/// Vertices of a Wavefront OBJ file, plus the first `o` name if any.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjMesh {
    pub name: Option<String>,
    pub vertices: Vec<[f32; 3]>,
}

pub fn load_obj(path: &Path) -> Result<ObjMesh, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    parse_obj(&text).map_err(|e| format!("{}: {e}", path.display()))
}

/// Only `v` and `o` records matter; faces, normals and the rest are skipped.
pub fn parse_obj(text: &str) -> Result<ObjMesh, String> {
    let mut mesh = ObjMesh {
        name: None,
        vertices: Vec::new(),
    };

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        let mut fields = line.split_whitespace();

        match fields.next() {
            Some("v") => {
                let mut xyz = [0.0f32; 3];
                for (axis, slot) in xyz.iter_mut().enumerate() {
                    let field = fields
                        .next()
                        .ok_or_else(|| format!("line {}: vertex needs 3 coordinates", idx + 1))?;
                    *slot = field.parse().map_err(|_| {
                        format!("line {}: bad coordinate {axis}: \"{field}\"", idx + 1)
                    })?;
                }
                mesh.vertices.push(xyz);
            }
            Some("o") if mesh.name.is_none() => {
                let name = fields.collect::<Vec<_>>().join(" ");
                if !name.is_empty() {
                    mesh.name = Some(name);
                }
            }
            _ => {}
        }
    }

    Ok(mesh)
}

/// Matrix from `--view-proj`; clap already enforces the count.
pub fn view_proj_from_args(values: &[f32]) -> Result<[f32; 16], String> {
    values
        .try_into()
        .map_err(|_| format!("--view-proj needs 16 values, got {}", values.len()))
}
