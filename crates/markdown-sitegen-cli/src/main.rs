use anyhow::{Context, Result};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{SiteLayout, io, site};
use std::{
    env,
    path::{Path, PathBuf},
    process,
};

fn layout(config: &Config) -> SiteLayout {
    SiteLayout {
        content_dir: config.content_dir.clone(),
        static_dir: config.static_dir.clone(),
        public_dir: config.public_dir.clone(),
        template: config.template.clone(),
        clean: config.clean,
    }
}

fn load_config(project_root: &Path) -> Result<Config> {
    let config_path = Config::config_path(project_root);
    let config = match Config::load(project_root)
        .with_context(|| format!("Failed to load {}", config_path.display()))?
    {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        None => {
            log::info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            Config::default()
        }
    };
    Ok(config.resolve(project_root))
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();

    let project_root = match args.len() {
        1 => PathBuf::from("."),
        2 => PathBuf::from(&args[1]),
        _ => {
            eprintln!("Usage: {} [project-dir]", args[0]);
            process::exit(1);
        }
    };

    io::validate_dir(&project_root)
        .with_context(|| format!("Invalid project directory {}", project_root.display()))?;

    let config = load_config(&project_root)?;
    let summary = site::build(&layout(&config), |page| {
        !config.is_excluded(page.as_str())
    })
    .with_context(|| format!("Failed to build site in {}", project_root.display()))?;

    println!(
        "Built {} page(s) and copied {} static file(s) into {}",
        summary.pages.len(),
        summary.files_copied,
        config.public_dir.display()
    );

    Ok(())
}
