use anyhow::{anyhow, Result};
use clap::Parser;
use hitmap_model::{MeshData, MeshFile};
use hitmap_render::{demo_mesh, render_scene, write_png, write_ppm, RenderSettings, SceneBuilder};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hitmap", version, about = "Ray-cast occupancy imager")]
struct Cli {
    /// JSON mesh file to render; defaults to the built-in demo triangle.
    #[arg(long)]
    scene: Option<PathBuf>,

    #[arg(long, default_value = "out.ppm")]
    out: PathBuf,

    /// Also write a grayscale PNG of the same raster.
    #[arg(long)]
    png: Option<PathBuf>,

    #[arg(long, default_value_t = 256)]
    width: u32,

    #[arg(long, default_value_t = 256)]
    height: u32,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.width < 2 || cli.height < 2 {
        return Err(anyhow!(
            "image dimensions must be at least 2x2 (got {}x{})",
            cli.width,
            cli.height
        ));
    }

    let meshes = match &cli.scene {
        Some(path) => load_meshes(path)?,
        None => vec![demo_mesh()],
    };

    let mut builder = SceneBuilder::new();
    for mesh in &meshes {
        builder.attach(mesh);
    }
    let scene = builder.commit();
    if scene.triangle_count() == 0 {
        eprintln!("warning: scene has no triangles; every pixel will be a miss");
    }

    let settings = RenderSettings {
        width: cli.width,
        height: cli.height,
    };
    let raster = render_scene(&scene, &settings);

    ensure_parent_dir(&cli.out)?;
    write_ppm(&cli.out, &raster)
        .map_err(|err| anyhow!("failed to write ppm {:?}: {}", cli.out, err))?;
    eprintln!(
        "render: wrote {}x{} image to {:?}",
        raster.width(),
        raster.height(),
        cli.out
    );

    if let Some(png_path) = &cli.png {
        ensure_parent_dir(png_path)?;
        write_png(png_path, &raster)
            .map_err(|err| anyhow!("failed to write png {:?}: {}", png_path, err))?;
        eprintln!("render: wrote png to {:?}", png_path);
    }

    let cwd = env::current_dir()
        .map_err(|err| anyhow!("failed to read working directory: {err}"))?;
    println!("Current working directory: {}", cwd.display());

    Ok(())
}

fn load_meshes(path: &Path) -> Result<Vec<MeshData>> {
    let contents = fs::read_to_string(path)
        .map_err(|err| anyhow!("failed to read scene {:?}: {}", path, err))?;
    let file: MeshFile = serde_json::from_str(&contents)
        .map_err(|err| anyhow!("failed to parse scene {:?}: {}", path, err))?;
    Ok(file.meshes)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| {
                anyhow!("failed to create output directory {:?}: {}", parent, err)
            })?;
        }
    }
    Ok(())
}
