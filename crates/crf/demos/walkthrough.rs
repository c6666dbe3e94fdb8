//! Walk a cube through a chain of operations and print what each step yields.
//!
//! Purpose
//! - Show the curated API end to end: resolve a name, list applicable
//!   operations, apply a few with explicit options, and export the last mesh.
//! - Operation `debug!` events stay hidden at the subscriber's default level.

use std::time::Instant;

use anyhow::Result;
use crf::api::{self, AugmentOptions, ExpandOptions, FacetOptions, OpResult, Solid};
use crf::mesh::CapKind;
use tracing_subscriber::fmt::SubscriberBuilder;

fn report(step: &str, r: &OpResult, ms: f64) {
    let mesh = r.result.mesh();
    println!(
        "{step:<10} -> {:<32} V={:<3} F={:<3} animated={} ({ms:.1} ms)",
        r.result.name(),
        mesh.num_vertices(),
        mesh.num_faces(),
        r.animation.end_vertices.len()
    );
}

fn timed(step: &str, f: impl FnOnce() -> crf::Result<OpResult>) -> Result<Solid> {
    let start = Instant::now();
    let r = f()?;
    report(step, &r, start.elapsed().as_secs_f64() * 1e3);
    Ok(r.result)
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();

    let cube = api::solid("cube")?;
    let info = api::info("cube")?;
    println!(
        "{} ({}), symmetry order {}, conway {:?}",
        info.name(),
        info.solid_type().as_str(),
        info.order()?,
        info.conway_symbol()
    );
    println!("applicable: {:?}", api::applicable_operations(&cube));

    let truncated = timed("truncate", || api::apply(&api::TRUNCATE, &cube, &FacetOptions::default()))?;
    timed("sharpen", || api::apply(&api::SHARPEN, &truncated, &FacetOptions::default()))?;

    let expanded = timed("expand", || api::apply(&api::EXPAND, &cube, &ExpandOptions::default()))?;
    timed("contract", || {
        api::apply(&api::CONTRACT, &expanded, &ExpandOptions { face_type: Some(4) })
    })?;

    let augmented = timed("augment", || {
        api::apply(
            &api::AUGMENT,
            &cube,
            &AugmentOptions {
                face: Some(0),
                using: Some(CapKind::Pyramid),
                gyrate: None,
            },
        )
    })?;
    let shortened = timed("diminish", || api::apply(&api::DIMINISH, &augmented, &Default::default()))?;

    let export = shortened.mesh().export();
    println!("{}", serde_json::to_string(&export)?);
    Ok(())
}
