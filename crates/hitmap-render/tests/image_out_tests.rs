use hitmap_render::{demo_mesh, render_scene, write_png, write_ppm, RenderSettings, Scene, SceneBuilder};
use std::fs;
use std::path::PathBuf;

fn demo_scene() -> Scene {
    let mut builder = SceneBuilder::new();
    builder.attach(&demo_mesh());
    builder.commit()
}

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("hitmap-{}-{}", std::process::id(), name))
}

#[test]
fn ppm_round_trip_preserves_header_and_values() {
    let settings = RenderSettings {
        width: 16,
        height: 12,
    };
    let raster = render_scene(&demo_scene(), &settings);

    let path = temp_file("round-trip.ppm");
    write_ppm(&path, &raster).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    let _ = fs::remove_file(&path);

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("P3"));
    assert_eq!(lines.next(), Some("16 12"));
    assert_eq!(lines.next(), Some("255"));

    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 12);

    for (y, row) in rows.iter().enumerate() {
        let values: Vec<u32> = row
            .split_whitespace()
            .map(|token| token.parse().unwrap())
            .collect();
        assert_eq!(values.len(), 16 * 3);

        for (x, triple) in values.chunks(3).enumerate() {
            assert!(triple[0] == 0 || triple[0] == 255);
            assert_eq!(triple[0], triple[1]);
            assert_eq!(triple[1], triple[2]);
            assert_eq!(triple[0], u32::from(raster.get(x as u32, y as u32)));
        }
    }
}

#[test]
fn ppm_rows_end_with_newline_and_pixel_spacing() {
    let settings = RenderSettings {
        width: 4,
        height: 2,
    };
    let raster = render_scene(&demo_scene(), &settings);

    let path = temp_file("layout.ppm");
    write_ppm(&path, &raster).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    let _ = fs::remove_file(&path);

    let body = text
        .strip_prefix("P3\n4 2\n255\n")
        .expect("header must be exactly three lines");
    for row in body.split_terminator('\n') {
        // every pixel triple carries a trailing space, so rows end in one
        assert!(row.ends_with(' '));
        assert_eq!(row.split_whitespace().count(), 4 * 3);
    }
    assert!(body.ends_with('\n'));
}

#[test]
fn rewriting_is_byte_identical() {
    let raster = render_scene(&demo_scene(), &RenderSettings::default());

    let first = temp_file("rewrite-a.ppm");
    let second = temp_file("rewrite-b.ppm");
    write_ppm(&first, &raster).unwrap();
    write_ppm(&second, &raster).unwrap();

    let a = fs::read(&first).unwrap();
    let b = fs::read(&second).unwrap();
    let _ = fs::remove_file(&first);
    let _ = fs::remove_file(&second);

    assert_eq!(a, b);
}

#[test]
fn unwritable_destination_reports_error_and_leaves_no_file() {
    let raster = render_scene(&demo_scene(), &RenderSettings { width: 8, height: 8 });

    let dir = temp_file("missing-dir");
    let _ = fs::remove_dir_all(&dir);
    let path = dir.join("out.ppm");

    assert!(write_ppm(&path, &raster).is_err());
    assert!(!path.exists());
}

#[test]
fn png_output_decodes_to_the_same_binary_image() {
    let settings = RenderSettings {
        width: 32,
        height: 32,
    };
    let raster = render_scene(&demo_scene(), &settings);

    let path = temp_file("check.png");
    write_png(&path, &raster).unwrap();
    let decoded = image::open(&path).unwrap().into_luma8();
    let _ = fs::remove_file(&path);

    assert_eq!(decoded.width(), 32);
    assert_eq!(decoded.height(), 32);
    for y in 0..32 {
        for x in 0..32 {
            assert_eq!(decoded.get_pixel(x, y).0[0], raster.get(x, y));
        }
    }
}
