use crate::raster::Raster;
use image::{GrayImage, ImageError};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes the raster as an ASCII PPM (P3): three header lines, then each
/// pixel as `"<v> <v> <v> "` with a newline after every completed row.
pub fn write_ppm(path: &Path, raster: &Raster) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_ppm_to(&mut out, raster)?;
    out.flush()
}

fn write_ppm_to(out: &mut impl Write, raster: &Raster) -> io::Result<()> {
    write!(out, "P3\n{} {}\n255\n", raster.width(), raster.height())?;

    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let v = raster.get(x, y);
            write!(out, "{} {} {} ", v, v, v)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Encodes the raster as an 8-bit grayscale PNG.
pub fn write_png(path: &Path, raster: &Raster) -> Result<(), ImageError> {
    let image = GrayImage::from_raw(raster.width(), raster.height(), raster.pixels().to_vec())
        .expect("raster buffer length matches its dimensions");
    image.save(path)
}
