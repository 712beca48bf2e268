use pathmesh_core::command::Command;
use pathmesh_core::triangulate::TriangulationEngine;
use pathmesh_core::{
    EarcutEngine, ErrorKind, HoleStrategy, Mesh, MissingHolePolicy, Pipeline, PipelineOptions,
};
use pathmesh_graphics::bbox::Aabb;
use pathmesh_graphics::polygon::contains_point;
use pathmesh_graphics::types::Point;

const EPSILON: f64 = 1e-9;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}

fn mesh_area(mesh: &Mesh) -> f64 {
    mesh.vertices
        .chunks_exact(9)
        .map(|t| {
            let a = Point::new(t[0], t[1]);
            let b = Point::new(t[3], t[4]);
            let c = Point::new(t[6], t[7]);
            ((b - a).cross(c - a) / 2.0).abs()
        })
        .sum()
}

#[test]
fn square_becomes_unit_square_graph() {
    let pslg = Pipeline::run("M0,0 L10,0 L10,10 L0,10 Z", &PipelineOptions::default()).unwrap();

    assert_eq!(pslg.points.len(), 4);
    for corner in [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ] {
        assert!(
            pslg.points.iter().any(|p| close(*p, corner)),
            "missing corner {corner:?} in {:?}",
            pslg.points
        );
    }
    assert_eq!(pslg.segments, vec![[0, 1], [1, 2], [2, 3], [3, 0]]);
    assert!(pslg.holes.is_empty());

    let input = pslg.to_triangulation_input();
    assert_eq!(input.points.len(), 8);
    assert_eq!(input.segments.len(), 8);
    assert!(input.holes.is_empty());
}

#[test]
fn y_axis_is_flipped() {
    // Drawn downwards in the source frame, so the first point ends up on top.
    let pslg = Pipeline::run("M0,0 L10,0 L10,10 L0,10 Z", &PipelineOptions::default()).unwrap();
    assert!(close(pslg.points[0], Point::new(0.0, 1.0)));
    assert!(close(pslg.points[2], Point::new(1.0, 0.0)));
}

#[test]
fn normalized_commands_fill_the_unit_frame() {
    let pipeline = Pipeline::parse(
        "M 10 20 C 20 0 40 0 50 20 L 50 40 Z",
        PipelineOptions::default(),
    )
    .and_then(Pipeline::expand)
    .and_then(Pipeline::absolutize)
    .and_then(Pipeline::sample)
    .and_then(Pipeline::normalize)
    .unwrap();

    assert!(pipeline
        .commands()
        .iter()
        .all(|c| !matches!(c, Command::CurveTo { .. })));
    let bbox = Aabb::from_points(pipeline.commands().iter().flat_map(Command::coordinates)).unwrap();
    assert!(close(bbox.min, Point::ZERO));
    assert!((bbox.long_side - 1.0).abs() < EPSILON);
}

#[test]
fn nested_ring_gets_interior_seed() {
    let d = "M0,0 L10,0 L10,10 L0,10 Z M3,3 L7,3 L7,7 L3,7 Z";
    let pipeline = Pipeline::parse(d, PipelineOptions::default())
        .and_then(Pipeline::expand)
        .and_then(Pipeline::absolutize)
        .and_then(Pipeline::sample)
        .and_then(Pipeline::normalize)
        .and_then(Pipeline::extract)
        .unwrap();

    let regions = pipeline.regions().unwrap();
    assert_eq!(regions.rings.len(), 2);
    assert_eq!(regions.hole_seeds.len(), 1);
    let seed = regions.hole_seeds[0];
    assert!(contains_point(&regions.holes()[0], seed));
    assert!(contains_point(regions.outer(), seed));
}

#[test]
fn hole_is_cut_from_mesh() {
    let d = "M0,0 L10,0 L10,10 L0,10 Z M3,3 L7,3 L7,7 L3,7 Z";
    for strategy in [HoleStrategy::Random, HoleStrategy::Scanline] {
        let mut options = PipelineOptions::default();
        options.hole.strategy = strategy;
        let pslg = Pipeline::run(d, &options).unwrap();
        assert_eq!(pslg.points.len(), 8);
        assert_eq!(pslg.holes.len(), 1);

        let output = EarcutEngine.triangulate(&pslg.to_triangulation_input()).unwrap();
        let mesh = Mesh::from_output(&output).unwrap();
        assert!(
            (mesh_area(&mesh) - 0.84).abs() < 1e-9,
            "{strategy:?}: area {}",
            mesh_area(&mesh)
        );
    }
}

#[test]
fn hole_seed_avoids_nested_island() {
    let d = "M0,0 L10,0 L10,10 L0,10 Z M2,2 L8,2 L8,8 L2,8 Z M3,3 L7,3 L7,7 L3,7 Z";
    for strategy in [HoleStrategy::Random, HoleStrategy::Scanline] {
        let mut options = PipelineOptions::default();
        options.hole.strategy = strategy;
        options.hole.max_attempts = 500;
        options.missing_hole = MissingHolePolicy::Omit;
        let pipeline = Pipeline::parse(d, options)
            .and_then(Pipeline::expand)
            .and_then(Pipeline::absolutize)
            .and_then(Pipeline::sample)
            .and_then(Pipeline::normalize)
            .and_then(Pipeline::extract)
            .unwrap();

        let regions = pipeline.regions().unwrap();
        assert_eq!(regions.hole_seeds.len(), 1, "{strategy:?}");
        let seed = regions.hole_seeds[0];
        assert!(contains_point(&regions.holes()[0], seed), "{strategy:?}: {seed:?}");
        assert!(!contains_point(&regions.holes()[1], seed), "{strategy:?}: {seed:?} is on the island");

        // The island ring has no seed, so earcut meshes it as filled and
        // only the frame between the outer ring and the hole remains.
        let pslg = pipeline.build().and_then(Pipeline::into_pslg).unwrap();
        let output = EarcutEngine.triangulate(&pslg.to_triangulation_input()).unwrap();
        let mesh = Mesh::from_output(&output).unwrap();
        assert!((mesh_area(&mesh) - 0.64).abs() < 1e-9, "{strategy:?}: area {}", mesh_area(&mesh));
    }
}

#[test]
fn huge_coordinates_normalize() {
    let pslg = Pipeline::run("M0,0 L1e40,0 L1e40,1e40 L0,1e40 Z", &PipelineOptions::default()).unwrap();
    assert_eq!(pslg.points.len(), 4);
    assert!(pslg.points.iter().any(|p| close(*p, Point::new(1.0, 1.0))));
}

#[test]
fn nearby_coordinates_stay_distinct() {
    let options = PipelineOptions::default();
    let pipeline = Pipeline::parse("M100000.01,0 L100000.02,0", options).unwrap();
    assert_eq!(pipeline.raw_commands()[0].args, vec![100_000.01, 0.0]);
    assert_eq!(pipeline.raw_commands()[1].args, vec![100_000.02, 0.0]);
}

#[test]
fn relative_subpath_after_close_starts_at_subpath_origin() {
    let d = "m0,0 l10,0 l0,10 l-10,0 z m3,3 l4,0 l0,4 l-4,0 z";
    let pslg = Pipeline::run(d, &PipelineOptions::default()).unwrap();
    assert_eq!(pslg.points.len(), 8);
    assert!(close(pslg.points[4], Point::new(0.3, 0.7)));
}

#[test]
fn curves_are_sampled() {
    let mut options = PipelineOptions::default();
    options.segments_per_curve = 9;
    let pslg = Pipeline::run("M0,0 C0,10 10,10 10,0 Z", &options).unwrap();
    // Start point plus eight samples along the curve.
    assert_eq!(pslg.points.len(), 9);
}

#[test]
fn same_seed_same_graph() {
    let d = "M0,0 L10,0 L10,10 L0,10 Z M2,2 L8,2 L5,8 Z";
    let options = PipelineOptions::default();
    assert_eq!(Pipeline::run(d, &options).unwrap(), Pipeline::run(d, &options).unwrap());
}

#[test]
fn failures_are_typed() {
    let options = PipelineOptions::default();
    assert_eq!(Pipeline::run("M0,0 X1,1", &options).unwrap_err().kind, ErrorKind::Parse);
    assert_eq!(Pipeline::run("Z M0,0 L1,0 L1,1 Z", &options).unwrap_err().kind, ErrorKind::Parse);
    assert_eq!(Pipeline::run("M0,0 L1,0 L1,1 Z Z", &options).unwrap_err().kind, ErrorKind::DegenerateRing);
    assert_eq!(Pipeline::run("M0,0 L1,0 L1,1", &options).unwrap_err().kind, ErrorKind::DegenerateRing);
}

#[test]
fn flat_hole_follows_policy() {
    // The second ring has no interior.
    let d = "M0,0 L10,0 L10,10 L0,10 Z M2,5 L5,5 L8,5 Z";
    let mut options = PipelineOptions::default();
    options.hole.max_attempts = 100;
    assert_eq!(Pipeline::run(d, &options).unwrap_err().kind, ErrorKind::HoleNotFound);

    options.missing_hole = MissingHolePolicy::Omit;
    let pslg = Pipeline::run(d, &options).unwrap();
    assert_eq!(pslg.points.len(), 7);
    assert!(pslg.holes.is_empty());
}
