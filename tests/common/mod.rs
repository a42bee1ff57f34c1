#![allow(dead_code)]

use chrono::prelude::*;

use simplelog::*;

use image::{ImageBuffer, Rgb};

use std::path::{Path, PathBuf};
use std::fs::{self, File, create_dir_all};
use std::sync::atomic::{AtomicUsize, Ordering};

pub const RED : [u8; 3] = [255, 0, 0];
pub const BLUE : [u8; 3] = [0, 0, 255];

static TEST_DIRECTORY_COUNTER : AtomicUsize = AtomicUsize::new(0);

pub fn prepare_test_directory(test_directory_name: &str) -> PathBuf {
    let test_output_parent_directory = "test_output";

    let mut path_buf = PathBuf::from(test_output_parent_directory);
    path_buf.push(format!(
        "{}-{}-{}",
        filename_timestamp(),
        TEST_DIRECTORY_COUNTER.fetch_add(1, Ordering::SeqCst),
        test_directory_name
    ));

    create_dir_all(&path_buf).expect("Test output directory could not be created");

    let log_file = create_log_file(&mut path_buf);

    // Tests in the same binary share the logger, only the first one gets to set it
    let _ = CombinedLogger::init(
        vec![
            TermLogger::new(LevelFilter::Info, Config::default(), TerminalMode::Mixed, ColorChoice::Auto),
            WriteLogger::new(LevelFilter::Trace, Config::default(), log_file),
        ]
    );

    info!("Created test directory {:?} and initialized logging", path_buf);

    path_buf
}

fn create_log_file(parent_directory: &mut PathBuf) -> File {
    parent_directory.push(format!("log-{}", filename_timestamp()));
    parent_directory.set_extension("log");

    let log_file = File::create(&parent_directory).expect("Log file could not be created");
    // Restore state before pushing and setting extension
    parent_directory.pop();

    log_file
}

/// Returns the current time formatted like "2014-11-28T120009+0000", i.e.
/// an ISO 8601 timestamp with the colons removed, since colons are traditionally
/// used as directory separators on mac and linux
fn filename_timestamp() -> String {
    Utc::now()
        .to_rfc3339()
        .replace(":", "")
}

/// Writes a 2x2 checkerboard with red in the bottom left and top right corner
/// and blue in the other two.
pub fn write_checkerboard(path: &Path) {
    let checkerboard = ImageBuffer::from_fn(2, 2, |x, y| {
        if (x + y) % 2 == 1 { Rgb(RED) } else { Rgb(BLUE) }
    });

    checkerboard.save(path).expect("Checkerboard texture could not be written");
}

/// Writes a unit square in the xy plane made of two triangles, with UVs covering
/// the whole texture if `with_texcoords` is set. If `diffuse_texture` is given,
/// an MTL library is written with a single material using it.
pub fn write_unit_square(directory: &Path, with_texcoords: bool, diffuse_texture: Option<&str>) -> PathBuf {
    let mut obj = String::new();

    if let Some(texture) = diffuse_texture {
        fs::write(
            directory.join("square.mtl"),
            format!("newmtl checker\nKd 1.0 1.0 1.0\nmap_Kd {}\n", texture)
        ).expect("MTL could not be written");
        obj.push_str("mtllib square.mtl\n");
    }

    obj.push_str("o square\n");
    obj.push_str("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\n");

    if with_texcoords {
        obj.push_str("vt 0 0\nvt 1 0\nvt 1 1\nvt 0 1\n");
    }

    if diffuse_texture.is_some() {
        obj.push_str("usemtl checker\n");
    }

    if with_texcoords {
        obj.push_str("f 1/1 2/2 3/3\nf 1/1 3/3 4/4\n");
    } else {
        obj.push_str("f 1 2 3\nf 1 3 4\n");
    }

    let obj_path = directory.join("square.obj");
    fs::write(&obj_path, obj).expect("OBJ could not be written");
    obj_path
}

/// Parses an XYZRGB file back into positions and colors.
pub fn read_xyz(path: &Path) -> Vec<([f64; 3], [u8; 3])> {
    fs::read_to_string(path)
        .expect("XYZ output could not be read")
        .lines()
        .map(|line| {
            let fields : Vec<&str> = line.split(' ').collect();
            assert_eq!(fields.len(), 6, "Expected six fields in {:?}", line);

            let position = [
                fields[0].parse().unwrap(),
                fields[1].parse().unwrap(),
                fields[2].parse().unwrap()
            ];
            let color = [
                fields[3].parse().unwrap(),
                fields[4].parse().unwrap(),
                fields[5].parse().unwrap()
            ];

            (position, color)
        })
        .collect()
}
