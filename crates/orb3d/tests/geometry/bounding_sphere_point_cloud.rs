use orb3d::bounding_volume::{bounding_sphere, BoundingSphereBuilder, SeedDirections};
use orb3d::math::{Point, Vector};
use orb3d::na;
use orb3d::shape::Sphere;

fn random_unit_vector(rng: &mut oorandom::Rand64) -> Vector<f64> {
    let z = rng.rand_float() * 2.0 - 1.0;
    let phi = rng.rand_float() * core::f64::consts::TAU;
    let r = (1.0 - z * z).sqrt();
    Vector::new(r * phi.cos(), r * phi.sin(), z)
}

fn assert_contains_all(sphere: &Sphere<f64>, pts: &[Point<f64>]) {
    for pt in pts {
        let dist = na::distance(&sphere.center, pt);
        assert!(
            dist <= sphere.radius * (1.0 + 1.0e-5),
            "{pt} is outside of {sphere:?} (distance {dist})"
        );
    }
}

#[test]
fn random_point_clouds_are_enclosed() {
    let mut rng = oorandom::Rand64::new(0);

    for i in 0..50 {
        let n = 1 + rng.rand_range(0..400) as usize;
        let scale = Vector::new(
            rng.rand_float() * 10.0,
            rng.rand_float() * 10.0,
            rng.rand_float() * 10.0,
        );
        let offset = random_unit_vector(&mut rng) * 100.0;
        let pts: Vec<_> = (0..n)
            .map(|_| {
                let v = Vector::new(rng.rand_float(), rng.rand_float(), rng.rand_float());
                Point::from(offset + v.component_mul(&scale))
            })
            .collect();

        let seed = if i % 2 == 0 {
            SeedDirections::Axes
        } else {
            SeedDirections::Extended
        };
        let sphere = BoundingSphereBuilder::default().with_seed(seed).build(&pts);
        assert_contains_all(&sphere, &pts);
    }
}

#[test]
fn single_precision_point_clouds_are_enclosed() {
    let mut rng = oorandom::Rand32::new(1);

    for _ in 0..50 {
        let pts: Vec<Point<f32>> = (0..200)
            .map(|_| {
                Point::new(
                    rng.rand_float() * 1000.0 - 500.0,
                    rng.rand_float() * 0.01,
                    rng.rand_float() * 3.0,
                )
            })
            .collect();
        let sphere = bounding_sphere(&pts);

        for pt in &pts {
            assert!(na::distance(&sphere.center, pt) <= sphere.radius * (1.0 + 1.0e-5));
        }
    }
}

#[test]
fn points_on_a_sphere_give_that_sphere() {
    let mut rng = oorandom::Rand64::new(1234);
    let center = Point::new(1.0, -2.0, 3.0);
    let radius = 4.0;

    let pts: Vec<_> = (0..10_000)
        .map(|_| center + random_unit_vector(&mut rng) * radius)
        .collect();
    let sphere = bounding_sphere(&pts);

    assert_contains_all(&sphere, &pts);
    assert!(na::distance(&sphere.center, &center) <= 1.0e-2 * radius);
    assert_relative_eq!(sphere.radius, radius, max_relative = 1.0e-2);

    // The radius is tight: some point lies on the surface.
    let max_dist = pts
        .iter()
        .map(|pt| na::distance(&sphere.center, pt))
        .fold(0.0, f64::max);
    assert_relative_eq!(max_dist, sphere.radius, max_relative = 1.0e-5);
}

#[test]
fn empty_point_cloud() {
    let sphere = bounding_sphere::<f64>(&[]);
    assert_eq!(sphere.center, Point::origin());
    assert_eq!(sphere.radius, 0.0);
}

#[test]
fn single_point() {
    let pt = Point::new(-7.0, 0.5, 12.0);
    let sphere = bounding_sphere(&[pt]);
    assert_eq!(sphere.center, pt);
    assert_eq!(sphere.radius, 0.0);
}

#[test]
fn two_points() {
    let a = Point::new(1.0, 1.0, 1.0);
    let b = Point::new(3.0, -1.0, 2.0);
    let sphere = bounding_sphere(&[a, b]);

    assert_relative_eq!(sphere.center, na::center(&a, &b), epsilon = 1.0e-12);
    assert_relative_eq!(sphere.radius, 1.5, epsilon = 1.0e-12);
}

#[test]
fn input_order_barely_matters() {
    let mut rng = oorandom::Rand64::new(99);
    let mut pts: Vec<_> = (0..2000)
        .map(|_| Point::from(random_unit_vector(&mut rng) * (1.0 + rng.rand_float())))
        .collect();

    let sphere = bounding_sphere(&pts);

    for i in (1..pts.len()).rev() {
        let j = rng.rand_range(0..i as u64 + 1) as usize;
        pts.swap(i, j);
    }

    let shuffled = bounding_sphere(&pts);

    assert_contains_all(&sphere, &pts);
    assert_contains_all(&shuffled, &pts);
    assert_relative_eq!(sphere.radius, shuffled.radius, max_relative = 2.0e-2);
}

#[test]
fn refinement_and_seed_options() {
    let mut rng = oorandom::Rand64::new(8);
    let pts: Vec<_> = (0..1000)
        .map(|_| Point::from(random_unit_vector(&mut rng) * 2.0))
        .collect();

    let plain = BoundingSphereBuilder::default()
        .with_seed(SeedDirections::Axes)
        .with_refinement_passes(0)
        .build(&pts);
    let refined = BoundingSphereBuilder::default()
        .with_seed(SeedDirections::Extended)
        .build(&pts);

    assert_contains_all(&plain, &pts);
    assert_contains_all(&refined, &pts);
    assert!(refined.radius <= plain.radius);
    assert!(refined.radius >= 2.0 * (1.0 - 1.0e-2));
}
