//! Augmented, diminished and gyrate solids from their realized source.
//!
//! Modification sites are chosen greedily: the first site is index 0, `para`
//! takes the most opposite site, everything else takes the nearest site that
//! is compatible with the sites already chosen and not antipodal to them.
//! Antipodal sites are allowed in a second pass when no alignment is
//! requested (the biaugmented square prism only has opposite faces left).

use std::collections::HashSet;
use std::f64::consts::PI;

use itertools::Itertools;
use tracing::trace;

use crate::error::{PolyError, Result};
use crate::geom::{is_inverse, rotate_about, Vec3};
use crate::mesh::{CapKind, Polyhedron};
use crate::specs::{Align, Composite, CompositeSource, Specification};

use super::stack::{cap_points, CapFrame};
use super::{crf_hull, realize};

pub(crate) fn composite(c: &Composite) -> Result<Polyhedron> {
    let source = realize(&Specification::from(c.source))?;
    if c.total_count() == 0 {
        return Ok(source);
    }
    if c.is_augmented_solid() {
        augmented(&source, c)
    } else if c.is_diminished_solid() {
        diminished_icosahedron(&source, c)
    } else if c.is_gyrate_solid() {
        modified_rhombicosidodecahedron(&source, c)
    } else {
        Err(PolyError::domain(format!("no construction for {}", c.name())))
    }
}

/// Site indices for `count` modifications.
pub(crate) fn loci(
    dirs: &[Vec3],
    count: usize,
    align: Option<Align>,
    compatible: impl Fn(usize, usize) -> bool,
) -> Result<Vec<usize>> {
    if count == 0 || dirs.is_empty() {
        return if count == 0 {
            Ok(Vec::new())
        } else {
            Err(PolyError::domain("no modification sites"))
        };
    }
    if count == 1 {
        return Ok(vec![0]);
    }
    if align == Some(Align::Para) {
        let j = (1..dirs.len())
            .min_by(|&a, &b| dirs[0].dot(&dirs[a]).total_cmp(&dirs[0].dot(&dirs[b])))
            .ok_or_else(|| PolyError::domain("no para site"))?;
        return Ok(vec![0, j]);
    }
    let order: Vec<usize> = (1..dirs.len())
        .sorted_by(|&a, &b| dirs[0].dot(&dirs[b]).total_cmp(&dirs[0].dot(&dirs[a])))
        .collect();
    let passes: &[bool] = if align.is_none() { &[false, true] } else { &[false] };
    for &allow_antipodal in passes {
        let mut chosen = vec![0];
        for &j in &order {
            let ok = chosen.iter().all(|&a| {
                compatible(a, j) && (allow_antipodal || !is_inverse(&dirs[a], &dirs[j]))
            });
            if ok {
                chosen.push(j);
                if chosen.len() == count {
                    return Ok(chosen);
                }
            }
        }
    }
    Err(PolyError::domain(format!("cannot place {count} modifications")))
}

/// Add a cap on each listed face of `mesh`. Cupola/rotunda parity is
/// whichever keeps the result a CRF solid.
pub(crate) fn augment_faces(mesh: &Polyhedron, faces: &[usize], kind: CapKind) -> Result<Polyhedron> {
    let mut pts = mesh.vertices().to_vec();
    for &fi in faces {
        let face = mesh.face(fi);
        let frame = CapFrame::on_face(&face);
        let parities: &[u8] = if kind == CapKind::Pyramid { &[0] } else { &[0, 1] };
        let placed = parities.iter().find_map(|&parity| {
            let mut cand = pts.clone();
            cand.extend(cap_points(kind, face.num_sides(), &frame, parity));
            crf_hull(&cand).ok().map(|_| cand)
        });
        pts = placed.ok_or_else(|| {
            PolyError::mesh(format!("no convex {kind:?} fits on face {fi}"))
        })?;
    }
    crf_hull(&pts)
}

fn augmented(source: &Polyhedron, c: &Composite) -> Result<Polyhedron> {
    let (sides, kind) = match &c.source {
        CompositeSource::Capstone(_) => (4, CapKind::Pyramid),
        CompositeSource::Classical(cl) if cl.is_truncated() => (2 * cl.family.n(), CapKind::Cupola),
        CompositeSource::Classical(cl) => (cl.family.n(), CapKind::Pyramid),
    };
    let faces: Vec<usize> = source.faces_with_num_sides(sides).map(|f| f.index()).collect();
    let dirs: Vec<Vec3> = faces
        .iter()
        .map(|&f| source.face(f).centroid().normalize())
        .collect();
    let chosen = loci(&dirs, c.augmented as usize, c.align, |a, b| {
        augment_faces(source, &[faces[a], faces[b]], kind).is_ok()
    })?;
    trace!(solid = %c.name(), ?chosen, "augmentation sites");
    let sites: Vec<usize> = chosen.iter().map(|&i| faces[i]).collect();
    augment_faces(source, &sites, kind)
}

fn without_vertices(points: &[Vec3], removed: &HashSet<usize>) -> Vec<Vec3> {
    points
        .iter()
        .enumerate()
        .filter(|(i, _)| !removed.contains(i))
        .map(|(_, p)| *p)
        .collect()
}

fn diminished_icosahedron(source: &Polyhedron, c: &Composite) -> Result<Polyhedron> {
    let dirs: Vec<Vec3> = source.vertices().iter().map(|p| p.normalize()).collect();
    let chosen = loci(&dirs, c.diminished as usize, c.align, |a, b| {
        a != b && source.edge(a, b).is_none()
    })?;
    let removed: HashSet<usize> = chosen.into_iter().collect();
    let diminished = crf_hull(&without_vertices(source.vertices(), &removed))?;
    if c.augmented == 0 {
        return Ok(diminished);
    }
    // the one triangle surrounded by the three new pentagons
    let face = diminished
        .faces_with_num_sides(3)
        .find(|f| f.adjacent_faces().iter().all(|g| g.num_sides() == 5))
        .map(|f| f.index())
        .ok_or_else(|| PolyError::domain("no triangle between three pentagons"))?;
    augment_faces(&diminished, &[face], CapKind::Pyramid)
}

fn modified_rhombicosidodecahedron(source: &Polyhedron, c: &Composite) -> Result<Polyhedron> {
    let pentagons: Vec<usize> = source.faces_with_num_sides(5).map(|f| f.index()).collect();
    // full vertex set of the cupola topped by each pentagon
    let cupolae: Vec<HashSet<usize>> = pentagons
        .iter()
        .map(|&p| {
            let face = source.face(p);
            let mut set: HashSet<usize> = face.vertex_indices().iter().copied().collect();
            for g in face.adjacent_faces() {
                if g.num_sides() == 4 {
                    set.extend(g.vertex_indices().iter().copied());
                }
            }
            set
        })
        .collect();
    let dirs: Vec<Vec3> = pentagons
        .iter()
        .map(|&p| source.face(p).centroid().normalize())
        .collect();
    let count = (c.gyrate + c.diminished) as usize;
    let chosen = loci(&dirs, count, c.align, |a, b| {
        source
            .face(pentagons[a])
            .vertex_indices()
            .iter()
            .all(|v| !cupolae[b].contains(v))
    })?;
    let (gyrated, diminished) = chosen.split_at(c.gyrate as usize);
    let mut pts = source.vertices().to_vec();
    for &i in gyrated {
        let face = source.face(pentagons[i]);
        let center = face.centroid();
        let axis = face.normal();
        for &v in face.vertex_indices() {
            pts[v] = rotate_about(&pts[v], &center, &axis, PI / 5.0);
        }
    }
    let removed: HashSet<usize> = diminished
        .iter()
        .flat_map(|&i| source.face(pentagons[i]).vertex_indices().iter().copied())
        .collect();
    crf_hull(&without_vertices(&pts, &removed))
}
