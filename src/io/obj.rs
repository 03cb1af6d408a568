//! Wavefront OBJ export for planet meshes
//!
//! Writes positions, optional `vn` normals and optional per-vertex colors
//! using the widespread `v x y z r g b` extension. Compatible with Blender,
//! MeshLab and most DCC tools.

use crate::io::IoError;
use crate::mesh::{Mesh, Triangle};
use glam::Vec3;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// OBJ export configuration
#[derive(Debug, Clone, Default)]
pub struct ObjConfig {
    /// Object name written after `o`
    pub name: Option<String>,
    /// Vertex normals, one per vertex (written as `vn`)
    pub normals: Option<Vec<Vec3>>,
    /// Vertex colors, one per vertex (appended to `v` lines)
    pub colors: Option<Vec<[f32; 3]>>,
}

/// Export a mesh to a Wavefront OBJ file
pub fn export_obj(mesh: &Mesh, path: impl AsRef<Path>, config: &ObjConfig) -> Result<(), IoError> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    let mut w = BufWriter::new(file);

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("planet");
    let name = config.name.as_deref().unwrap_or(stem);

    write_obj(&mut w, mesh, name, config)?;
    w.flush()?;
    Ok(())
}

/// Write a mesh as OBJ text to any writer
pub fn write_obj(
    w: &mut impl Write,
    mesh: &Mesh,
    name: &str,
    config: &ObjConfig,
) -> Result<(), IoError> {
    check_len("normals", config.normals.as_ref().map(Vec::len), mesh)?;
    check_len("colors", config.colors.as_ref().map(Vec::len), mesh)?;

    // Header
    writeln!(w, "# tiny-planet OBJ export")?;
    writeln!(w, "# Vertices: {}", mesh.vertex_count())?;
    writeln!(w, "# Triangles: {}", mesh.triangle_count())?;
    writeln!(w, "o {}", name)?;

    match &config.colors {
        Some(colors) => {
            for (p, c) in mesh.vertices.iter().zip(colors) {
                writeln!(w, "v {} {} {} {} {} {}", p.x, p.y, p.z, c[0], c[1], c[2])?;
            }
        }
        None => {
            for p in &mesh.vertices {
                writeln!(w, "v {} {} {}", p.x, p.y, p.z)?;
            }
        }
    }

    if let Some(normals) = &config.normals {
        for n in normals {
            writeln!(w, "vn {} {} {}", n.x, n.y, n.z)?;
        }
    }

    // OBJ is 1-indexed
    for t in &mesh.faces {
        let (a, b, c) = (t.a + 1, t.b + 1, t.c + 1);
        if config.normals.is_some() {
            writeln!(w, "f {}//{} {}//{} {}//{}", a, a, b, b, c, c)?;
        } else {
            writeln!(w, "f {} {} {}", a, b, c)?;
        }
    }

    Ok(())
}

fn check_len(what: &str, len: Option<usize>, mesh: &Mesh) -> Result<(), IoError> {
    match len {
        Some(n) if n != mesh.vertex_count() => Err(IoError::InvalidFormat(format!(
            "{} has {} entries for {} vertices",
            what,
            n,
            mesh.vertex_count()
        ))),
        _ => Ok(()),
    }
}

/// Import positions and triangles from an OBJ file
///
/// Normals, colors and texture coordinates are ignored; polygons are fan
/// triangulated.
pub fn import_obj(path: impl AsRef<Path>) -> Result<Mesh, IoError> {
    let file = std::fs::File::open(path)?;
    let reader = BufReader::new(file);
    let mut mesh = Mesh::new();

    for line in reader.lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("v") => {
                let coords: Vec<f32> = parts.take(3).filter_map(|s| s.parse().ok()).collect();
                if coords.len() != 3 {
                    return Err(IoError::InvalidFormat(format!("bad vertex line: {}", line)));
                }
                mesh.vertices.push(Vec3::new(coords[0], coords[1], coords[2]));
            }
            Some("f") => {
                let corners = parts
                    .map(|s| parse_face_index(s, mesh.vertex_count()))
                    .collect::<Result<Vec<u32>, IoError>>()?;
                for i in 1..corners.len().saturating_sub(1) {
                    mesh.faces
                        .push(Triangle::new(corners[0], corners[i], corners[i + 1]));
                }
            }
            _ => {}
        }
    }

    Ok(mesh)
}

/// Parse the position index of `v`, `v/vt`, `v//vn` or `v/vt/vn`
fn parse_face_index(s: &str, vertex_count: usize) -> Result<u32, IoError> {
    let index: usize = s
        .split('/')
        .next()
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| IoError::InvalidFormat(format!("bad face index: {}", s)))?;
    if index == 0 || index > vertex_count {
        return Err(IoError::InvalidFormat(format!(
            "face index {} out of range (1..={})",
            index, vertex_count
        )));
    }
    Ok((index - 1) as u32)
}
