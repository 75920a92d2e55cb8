//! Mesh spacing and finite-difference accuracy tests.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rctmod::{Domain, GeometryBuilder1D, Mesh1D, MeshConfig, MeshError, Segment};

#[test]
fn test_width_ten_eleven_nodes() {
    let mesh = Mesh1D::new(10.0, 11).unwrap();
    assert_eq!(mesh.spacing(), 1.0);
    let expected: Vec<f64> = (0..=10).map(f64::from).collect();
    for (x, e) in mesh.positions().iter().zip(&expected) {
        assert_abs_diff_eq!(*x, *e, epsilon = 1e-12);
    }
}

#[test]
fn test_spacing_identity() {
    for &(width, n) in &[(1.0, 2), (0.1, 101), (3.7, 13), (250.0, 1000)] {
        let mesh = Mesh1D::new(width, n).unwrap();
        let x = mesh.positions();

        assert_relative_eq!(x[n - 1] - x[0], width, max_relative = 1e-12);
        for w in x.windows(2) {
            assert_relative_eq!(w[1] - w[0], mesh.spacing(), max_relative = 1e-9);
        }
    }
}

#[test]
fn test_linear_field_derivative_exact() {
    let mesh = Mesh1D::new(2.0, 41).unwrap();
    let (k, c) = (-1.75, 4.0);
    let field = mesh.sample(|x| k * x + c);

    let df = mesh.central_difference(&field).unwrap();
    assert_eq!(df.len(), mesh.node_count());
    for d in df {
        assert_abs_diff_eq!(d, k, epsilon = 1e-10);
    }
}

#[test]
fn test_quadratic_second_derivative() {
    let mesh = Mesh1D::new(1.0, 51).unwrap();
    let field = mesh.sample(|x| x * x);

    let d2f = mesh.second_central_difference(&field).unwrap();
    for d in &d2f[1..d2f.len() - 1] {
        assert_abs_diff_eq!(*d, 2.0, epsilon = 1e-8);
    }
    assert_eq!(d2f[0], d2f[1]);
    assert_eq!(d2f[50], d2f[49]);
}

#[test]
fn test_boundary_copies_interior_value() {
    // sin is not linear, so one-sided differences would differ from the copy
    let mesh = Mesh1D::new(std::f64::consts::PI, 33).unwrap();
    let field = mesh.sample(f64::sin);

    let df = mesh.central_difference(&field).unwrap();
    let n = df.len();
    assert_eq!(df[0], df[1]);
    assert_eq!(df[n - 1], df[n - 2]);
}

#[test]
fn test_mismatched_field_rejected() {
    let mesh = Mesh1D::new(1.0, 11).unwrap();
    assert_eq!(
        mesh.central_difference(&[0.0; 10]),
        Err(MeshError::LengthMismatch {
            expected: 11,
            actual: 10
        })
    );
}

#[test]
fn test_degenerate_mesh_rejected() {
    assert!(matches!(
        Mesh1D::new(1.0, 1),
        Err(MeshError::DegenerateMesh { node_count: 1 })
    ));
}

#[test]
fn test_mesh_from_geometry_width() {
    let mut builder = GeometryBuilder1D::new("gap");
    builder
        .add_domain(Domain::new(0.0, 10e-2).unwrap())
        .unwrap()
        .add_segment(Segment::new("Metal", 0.0, 1e-2).unwrap())
        .unwrap()
        .add_segment(Segment::new("Metal", 9e-2, 10e-2).unwrap())
        .unwrap();
    let geom = builder.build().unwrap();

    let mesh = Mesh1D::from_config(&MeshConfig::new(geom.width()).with_node_count(101)).unwrap();
    let map = geom.material_map(&mesh);

    let metal = geom.index_of("Metal").unwrap();
    assert_eq!(map[0], metal);
    assert_eq!(map[100], metal);
    assert!(map[20..80].iter().all(|idx| idx.is_domain()));
}
