extern crate texcloud;
#[macro_use] extern crate log;

mod common;

use texcloud::{ConversionBuilder, Error};

use std::fs;

#[test]
fn missing_texcoords_write_nothing() {
    let directory = common::prepare_test_directory("missing-texcoords");

    let obj_path = common::write_unit_square(&directory, false, None);
    let xyz_path = directory.join("square.xyz");

    let result = ConversionBuilder::new()
        .scene(&obj_path)
        .add_sink_xyz(&xyz_path)
        .build();

    match result {
        Err(Error::MissingTexcoords { entity }) => assert_eq!(entity, "square"),
        Err(err) => panic!("Unexpected error {}", err),
        Ok(_) => panic!("Scene without texture coordinates should be rejected")
    }

    assert!(!xyz_path.exists(), "No partial output should be written");
}

#[test]
fn partial_texcoords_write_nothing() {
    let directory = common::prepare_test_directory("partial-texcoords");

    // Only the first face references texture coordinates
    let obj_path = directory.join("partial.obj");
    fs::write(
        &obj_path,
        "o partial\nv 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nvt 0 0\nvt 1 0\nvt 1 1\nf 1/1 2/2 3/3\nf 1 3 4\n"
    ).unwrap();
    let xyz_path = directory.join("partial.xyz");

    let result = ConversionBuilder::new()
        .scene(&obj_path)
        .add_sink_xyz(&xyz_path)
        .build();

    match result {
        Err(Error::MissingTexcoords { entity }) => assert_eq!(entity, "partial"),
        Err(err) => panic!("Unexpected error {}", err),
        Ok(_) => panic!("Faces without texture coordinates should be rejected")
    }

    assert!(!xyz_path.exists(), "No partial output should be written");
}

#[test]
fn oversized_point_count_is_rejected() {
    let directory = common::prepare_test_directory("oversized-point-count");

    let obj_path = directory.join("huge.obj");
    fs::write(
        &obj_path,
        "o huge\nv 0 0 0\nv 1e10 0 0\nv 0 1e10 0\nvt 0 0\nvt 1 0\nvt 0 1\nf 1/1 2/2 3/3\n"
    ).unwrap();
    let xyz_path = directory.join("huge.xyz");

    let result = ConversionBuilder::new()
        .scene(&obj_path)
        .density(1e10)
        .add_sink_xyz(&xyz_path)
        .build();

    match result {
        Err(Error::TooManyPoints(count)) => assert!(count >= 5e29, "expected about 5e29 points, got {}", count),
        Err(err) => panic!("Unexpected error {}", err),
        Ok(_) => panic!("Point cloud larger than memory should be rejected")
    }

    assert!(!xyz_path.exists(), "No partial output should be written");
}

#[test]
fn missing_obj_file() {
    let directory = common::prepare_test_directory("missing-obj");

    let result = ConversionBuilder::new()
        .scene(directory.join("nothing-here.obj"))
        .build();

    match result {
        Err(Error::LoadScene(_)) => info!("Missing OBJ reported"),
        Err(err) => panic!("Unexpected error {}", err),
        Ok(_) => panic!("Missing OBJ should be rejected")
    }
}

#[test]
fn obj_without_faces() {
    let directory = common::prepare_test_directory("no-faces");

    let obj_path = directory.join("points.obj");
    fs::write(&obj_path, "o points\nv 0 0 0\nv 1 0 0\nv 0 1 0\n").unwrap();

    match ConversionBuilder::new().scene(&obj_path).build() {
        Err(Error::NoMesh(path)) => assert_eq!(path, obj_path),
        Err(err) => panic!("Unexpected error {}", err),
        Ok(_) => panic!("OBJ without faces should be rejected")
    }
}

#[test]
fn missing_scene() {
    match ConversionBuilder::new().build() {
        Err(Error::MissingScene) => (),
        Err(err) => panic!("Unexpected error {}", err),
        Ok(_) => panic!("Conversion without scene should be rejected")
    }
}

#[test]
fn invalid_densities() {
    let directory = common::prepare_test_directory("invalid-density");
    let obj_path = common::write_unit_square(&directory, true, None);

    for &density in &[0.0, -5.0, std::f64::NAN, std::f64::INFINITY] {
        match ConversionBuilder::new().scene(&obj_path).density(density).build() {
            Err(Error::InvalidDensity(_)) => (),
            Err(err) => panic!("Unexpected error {}", err),
            Ok(_) => panic!("Density {} should be rejected", density)
        }
    }
}

#[test]
fn degenerate_triangles() {
    let directory = common::prepare_test_directory("degenerate");

    let obj_path = directory.join("degenerate.obj");
    fs::write(
        &obj_path,
        "o degenerate\n\
         v 0 0 0\nv 1 0 0\nv 1 1 0\nv 2 0 0\n\
         vt 0 0\nvt 1 0\nvt 1 1\nvt 0.5 0.5\n\
         f 1/1 2/2 3/3\n\
         f 1/1 2/2 4/4\n"
    ).unwrap();

    let kept = ConversionBuilder::new()
        .scene(&obj_path)
        .density(20.0)
        .seed(11)
        .build()
        .unwrap()
        .run()
        .unwrap();

    // 10 points on the proper triangle, one on the flat one
    assert_eq!(kept.len(), 11);
    let flat_point = kept.records[10].position;
    assert_eq!(flat_point.y, 0.0);
    assert!(flat_point.x >= 0.0 && flat_point.x <= 2.0);

    let skipped = ConversionBuilder::new()
        .scene(&obj_path)
        .density(20.0)
        .seed(11)
        .skip_degenerate(true)
        .build()
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(skipped.len(), 10);
}

#[test]
fn polygons_are_triangulated() {
    let directory = common::prepare_test_directory("polygons");

    let obj_path = directory.join("quad.obj");
    fs::write(
        &obj_path,
        "o quad\n\
         v 0 0 0\nv 2 0 0\nv 2 2 0\nv 0 2 0\n\
         vt 0 0\nvt 1 0\nvt 1 1\nvt 0 1\n\
         f 1/1 2/2 3/3 4/4\n"
    ).unwrap();

    let conversion = ConversionBuilder::new()
        .scene(&obj_path)
        .density(10.0)
        .build()
        .unwrap();

    assert_eq!(conversion.scene().triangle_count(), 2);
    assert_eq!(conversion.run().unwrap().len(), 40);
}
