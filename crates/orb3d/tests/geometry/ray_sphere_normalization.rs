use orb3d::math::{Point, Vector};
use orb3d::query::{intersect_ray_sphere, NormalizationPolicy, Normalized, Ray, Unnormalized};
use orb3d::shape::Sphere;

fn all_hits<N: NormalizationPolicy>(sphere: &Sphere<f64>, ray: &Ray<f64, N>) -> Vec<f64> {
    let mut hits = Vec::new();
    let mut t_min = 0.0;

    while let Some(t) = intersect_ray_sphere(sphere, ray, t_min).time_of_impact() {
        hits.push(t);
        t_min = t;
    }

    hits
}

#[test]
fn scaling_the_direction_scales_the_parameter() {
    let mut rng = oorandom::Rand64::new(11);
    let sphere = Sphere::new(Point::new(2.0, -1.0, 0.5), 1.25);

    for _ in 0..500 {
        let origin = Point::new(
            rng.rand_float() * 20.0 - 10.0,
            rng.rand_float() * 20.0 - 10.0,
            rng.rand_float() * 20.0 - 10.0,
        );
        let target = sphere.center
            + Vector::new(
                rng.rand_float() - 0.5,
                rng.rand_float() - 0.5,
                rng.rand_float() - 0.5,
            );
        let dir = target - origin;
        let k = 0.01 + rng.rand_float() * 100.0;

        let ray = Ray::new(origin, dir);
        let scaled = Ray::new(origin, dir * k);

        let t = intersect_ray_sphere(&sphere, &ray, f64::MIN).time_of_impact();
        let scaled_t = intersect_ray_sphere(&sphere, &scaled, f64::MIN).time_of_impact();

        match (t, scaled_t) {
            (Some(t), Some(scaled_t)) => {
                assert_relative_eq!(scaled_t, t / k, epsilon = 1.0e-12, max_relative = 1.0e-9)
            }
            _ => panic!("Both rays should hit the sphere."),
        }
    }
}

#[test]
fn normalized_and_unnormalized_rays_agree() {
    let mut rng = oorandom::Rand64::new(5);
    let sphere = Sphere::new(Point::new(-3.0, 4.0, 1.0), 2.0);

    for _ in 0..500 {
        let origin = Point::new(
            rng.rand_float() * 10.0,
            rng.rand_float() * 10.0,
            rng.rand_float() * 10.0,
        );
        let target = sphere.center
            + Vector::new(
                rng.rand_float() * 2.0 - 1.0,
                rng.rand_float() * 2.0 - 1.0,
                rng.rand_float() * 2.0 - 1.0,
            );

        let ray: Ray<f64, Unnormalized> = Ray::new(origin, target - origin);
        let (unit_ray, length): (Ray<f64, Normalized>, f64) = ray.normalize().unwrap();

        let unnormalized_hits = all_hits(&sphere, &ray);
        let normalized_hits = all_hits(&sphere, &unit_ray);

        assert_eq!(unnormalized_hits.len(), normalized_hits.len());
        assert!(!unnormalized_hits.is_empty());

        for (t_u, t_n) in unnormalized_hits.into_iter().zip(normalized_hits) {
            assert_relative_eq!(t_n, t_u * length, max_relative = 1.0e-9);
            assert_relative_eq!(unit_ray.point_at(t_n), ray.point_at(t_u), epsilon = 1.0e-9);
        }
    }
}

#[test]
fn forgetting_the_normalization_keeps_the_hits() {
    let sphere = Sphere::new(Point::new(0.0f32, 0.0, 10.0), 3.0);
    let ray = Ray::<f32, Normalized>::try_from_direction(Point::origin(), Vector::z()).unwrap();
    let unnormalized: Ray<f32> = ray.into();

    assert_eq!(sphere.cast_ray(&ray, f32::MAX), Some(7.0));
    assert_eq!(sphere.cast_ray(&unnormalized, f32::MAX), Some(7.0));
    assert_eq!(unnormalized.dir_squared_length(), 1.0);
}
