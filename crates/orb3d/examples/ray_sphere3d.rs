extern crate nalgebra as na;

use na::{Point3, Vector3};
use orb3d::query::{intersect_ray_sphere, Normalized, Ray, RaySphereIntersection};
use orb3d::shape::Sphere;

fn main() {
    let sphere = Sphere::new(Point3::new(0.0, 0.0, 5.0), 2.0);

    let ray_inside = Ray::new(Point3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 1.0, 0.0));
    let ray_crossing = Ray::new(Point3::origin(), Vector3::new(0.0, 0.0, 2.0));
    let ray_miss = Ray::new(Point3::new(0.0, 3.0, 0.0), Vector3::z());

    // Walk along the crossing ray, one intersection at a time.
    let first = intersect_ray_sphere(&sphere, &ray_crossing, 0.0);
    let second = match first {
        RaySphereIntersection::OneIntersection(t) => intersect_ray_sphere(&sphere, &ray_crossing, t),
        RaySphereIntersection::NoIntersection => unreachable!(),
    };

    assert_eq!(first, RaySphereIntersection::OneIntersection(1.5));
    assert_eq!(second, RaySphereIntersection::OneIntersection(3.5));
    assert_eq!(sphere.cast_ray(&ray_inside, f64::MAX), Some(2.0));
    assert!(!sphere.intersects_ray(&ray_miss, f64::MAX));

    // With a unit direction, the parameter is the traveled distance.
    let (unit_ray, _): (Ray<f64, Normalized>, f64) = ray_crossing.normalize().unwrap();
    let hit = sphere
        .cast_ray_and_get_normal(&unit_ray, f64::MAX)
        .unwrap();

    println!(
        "Hit at distance {} with normal {:?}.",
        hit.time_of_impact, hit.normal
    );
    assert_eq!(hit.time_of_impact, 3.0);
}
