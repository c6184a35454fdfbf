extern crate nalgebra as na;

use na::Point3;
use orb3d::bounding_volume::{bounding_sphere, BoundingSphereBuilder, BoundingVolume, SeedDirections};

fn main() {
    let tetrahedron = [
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(1.0, -1.0, -1.0),
        Point3::new(-1.0, 1.0, -1.0),
        Point3::new(-1.0, -1.0, 1.0),
    ];
    let square = [
        Point3::new(4.0, 0.0, 0.0),
        Point3::new(6.0, 0.0, 0.0),
        Point3::new(6.0, 2.0, 0.0),
        Point3::new(4.0, 2.0, 0.0),
    ];

    let sphere1 = bounding_sphere(&tetrahedron);
    let sphere2 = BoundingSphereBuilder::default()
        .with_seed(SeedDirections::Axes)
        .with_refinement_passes(2)
        .build(&square);

    println!("Tetrahedron: {sphere1:?}");
    println!("Square: {sphere2:?}");

    assert!(tetrahedron.iter().all(|pt| sphere1.loosened(1.0e-9).contains_point(pt)));
    assert!(square.iter().all(|pt| sphere2.loosened(1.0e-9).contains_point(pt)));

    let merged = sphere1.merged(&sphere2);
    assert!(merged.contains(&sphere1));
    assert!(merged.contains(&sphere2));
    assert!(!sphere1.intersects(&sphere2));
}
