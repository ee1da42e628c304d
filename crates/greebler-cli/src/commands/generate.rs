//! Generate command implementation
//!
//! Builds `GreebleParams` from an optional params file plus flag overrides,
//! runs generation, and writes the height and normal PNGs.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use greebler::{generate_with_params, save_images, GreebleParams, PngConfig};

use super::json_output::{error_codes, GenerateOutput, JsonError, OutputRecord};

/// Default height image path.
pub const DEFAULT_HEIGHT_OUT: &str = "heightmap.png";
/// Default normal image path.
pub const DEFAULT_NORMAL_OUT: &str = "normalmap.png";

/// Options for the generate command. `None` fields fall back to the params
/// file, then to `GreebleParams::default()`.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub dim: Option<u32>,
    pub limit: Option<u32>,
    pub seed: Option<u64>,
    pub regions: Option<u32>,
    pub params_file: Option<String>,
    pub height_out: Option<String>,
    pub normal_out: Option<String>,
}

impl GenerateOptions {
    fn height_path(&self) -> PathBuf {
        PathBuf::from(self.height_out.as_deref().unwrap_or(DEFAULT_HEIGHT_OUT))
    }

    fn normal_path(&self) -> PathBuf {
        PathBuf::from(self.normal_out.as_deref().unwrap_or(DEFAULT_NORMAL_OUT))
    }
}

/// Failure while assembling parameters, kept typed for the JSON report.
#[derive(Debug)]
enum ParamsError {
    Read { path: String, source: std::io::Error },
    Parse { path: String, source: serde_json::Error },
}

impl ParamsError {
    fn to_json(&self) -> JsonError {
        match self {
            ParamsError::Read { path, source } => JsonError::new(
                error_codes::FILE_READ,
                format!("Failed to read params file: {}", source),
            )
            .with_file(path.clone()),
            ParamsError::Parse { path, source } => JsonError::new(
                error_codes::JSON_PARSE,
                format!("Invalid params file: {}", source),
            )
            .with_file(path.clone()),
        }
    }
}

impl std::fmt::Display for ParamsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamsError::Read { path, source } => {
                write!(f, "Failed to read params file {}: {}", path, source)
            }
            ParamsError::Parse { path, source } => {
                write!(f, "Invalid params file {}: {}", path, source)
            }
        }
    }
}

/// Resolve final parameters: params file first, then flag overrides.
fn resolve_params(options: &GenerateOptions) -> std::result::Result<GreebleParams, ParamsError> {
    let mut params = match &options.params_file {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| ParamsError::Read {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&text).map_err(|source| ParamsError::Parse {
                path: path.clone(),
                source,
            })?
        }
        None => GreebleParams::default(),
    };

    if let Some(dim) = options.dim {
        params.dim = dim;
    }
    if let Some(limit) = options.limit {
        params.limit = limit;
    }
    if let Some(seed) = options.seed {
        params.seed = seed;
    }
    if let Some(regions) = options.regions {
        params.regions = regions;
    }

    log::debug!("resolved params: {:?}", params);
    Ok(params)
}

/// Run the generate command
///
/// # Arguments
/// * `options` - Parameter sources and output paths
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(options: &GenerateOptions, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(options)
    } else {
        run_human(options)
    }
}

/// Run generate with human-readable (colored) output
fn run_human(options: &GenerateOptions) -> Result<ExitCode> {
    let start = Instant::now();
    let params = resolve_params(options).map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("{}", "Generating greeble:".cyan().bold());
    println!("  {} {}x{}", "Size:".dimmed(), params.dim, params.dim);
    println!("  {} {}", "Limit:".dimmed(), params.limit);
    println!("  {} {}", "Seed:".dimmed(), params.seed);
    if params.regions > 1 {
        println!("  {} {}x{}", "Regions:".dimmed(), params.regions, params.regions);
    }

    let result = generate_with_params(&params)?;
    let images = result
        .encode(&PngConfig::default())
        .context("Failed to encode images")?;

    let height_path = options.height_path();
    let normal_path = options.normal_path();
    save_images(&images, &height_path, &normal_path)?;

    let stats = &result.stats;
    let (low, high) = result.height.min_max();
    println!("\n{}", "Statistics:".cyan().bold());
    println!("  {} {}..{}", "Height range:".dimmed(), low, high);
    println!(
        "  {} {} ({} splits, {} leaves)",
        "Partition calls:".dimmed(),
        stats.partition_calls,
        stats.splits,
        stats.leaves
    );
    println!(
        "  {} {}",
        "Delegated rectangles:".dimmed(),
        stats.delegated_rectangles
    );
    println!(
        "  {} {} ({} rings, max depth {})",
        "Circles:".dimmed(),
        stats.circles,
        stats.rings,
        stats.max_ring_depth
    );

    println!("\n{}", "Outputs:".cyan().bold());
    print_output(&height_path, &images.height_hash);
    print_output(&normal_path, &images.normal_hash);

    println!(
        "\n{} in {}ms",
        "Done".green().bold(),
        start.elapsed().as_millis()
    );
    Ok(ExitCode::SUCCESS)
}

fn print_output(path: &Path, hash: &str) {
    let short = hash.get(..16).unwrap_or(hash);
    println!("  {} {}", path.display(), short.dimmed());
}

/// Run generate with machine-readable JSON output
fn run_json(options: &GenerateOptions) -> Result<ExitCode> {
    let start = Instant::now();
    let elapsed = |start: Instant| start.elapsed().as_millis() as u64;

    let output = match resolve_params(options) {
        Err(e) => GenerateOutput::failure(None, e.to_json(), elapsed(start)),
        Ok(params) => match generate_and_save(&params, options) {
            Ok((stats, outputs)) => {
                GenerateOutput::success(params, stats, outputs, elapsed(start))
            }
            Err(e) => GenerateOutput::failure(
                Some(params),
                JsonError::new(e.code(), e.to_string()),
                elapsed(start),
            ),
        },
    };

    let json = serde_json::to_string_pretty(&output)?;
    println!("{}", json);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn generate_and_save(
    params: &GreebleParams,
    options: &GenerateOptions,
) -> std::result::Result<(greebler::GenerationStats, Vec<OutputRecord>), greebler::GenerateError> {
    let result = generate_with_params(params)?;
    let images = result.encode(&PngConfig::default())?;

    let height_path = options.height_path();
    let normal_path = options.normal_path();
    save_images(&images, &height_path, &normal_path)?;

    let outputs = vec![
        OutputRecord {
            kind: "height".to_string(),
            path: height_path.display().to_string(),
            hash: images.height_hash,
        },
        OutputRecord {
            kind: "normal".to_string(),
            path: normal_path.display().to_string(),
            hash: images.normal_hash,
        },
    ];
    Ok((result.stats, outputs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_in(dir: &Path) -> GenerateOptions {
        GenerateOptions {
            dim: Some(32),
            limit: Some(4),
            seed: Some(7),
            height_out: Some(dir.join("h.png").display().to_string()),
            normal_out: Some(dir.join("out").join("n.png").display().to_string()),
            ..GenerateOptions::default()
        }
    }

    #[test]
    fn resolve_params_defaults() {
        let params = resolve_params(&GenerateOptions::default()).unwrap();
        assert_eq!(params, GreebleParams::default());
    }

    #[test]
    fn flags_override_params_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        fs::write(&path, r#"{"dim": 256, "limit": 16, "seed": 3, "regions": 2}"#).unwrap();

        let options = GenerateOptions {
            params_file: Some(path.display().to_string()),
            seed: Some(99),
            ..GenerateOptions::default()
        };
        let params = resolve_params(&options).unwrap();
        assert_eq!(params.dim, 256);
        assert_eq!(params.limit, 16);
        assert_eq!(params.regions, 2);
        assert_eq!(params.seed, 99);
    }

    #[test]
    fn params_file_errors_are_coded() {
        let dir = tempfile::tempdir().unwrap();

        let missing = GenerateOptions {
            params_file: Some(dir.path().join("nope.json").display().to_string()),
            ..GenerateOptions::default()
        };
        let err = resolve_params(&missing).unwrap_err();
        assert_eq!(err.to_json().code, error_codes::FILE_READ);

        let bad = dir.path().join("bad.json");
        fs::write(&bad, r#"{"size": 10}"#).unwrap();
        let unknown = GenerateOptions {
            params_file: Some(bad.display().to_string()),
            ..GenerateOptions::default()
        };
        let err = resolve_params(&unknown).unwrap_err();
        assert_eq!(err.to_json().code, error_codes::JSON_PARSE);
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn human_run_writes_images() {
        let dir = tempfile::tempdir().unwrap();
        let options = options_in(dir.path());
        let code = run(&options, false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(dir.path().join("h.png").exists());
        assert!(dir.path().join("out").join("n.png").exists());
    }

    #[test]
    fn json_run_writes_images() {
        let dir = tempfile::tempdir().unwrap();
        let options = options_in(dir.path());
        let code = run(&options, true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(dir.path().join("h.png").exists());
    }

    #[test]
    fn invalid_params_fail() {
        let dir = tempfile::tempdir().unwrap();
        let options = GenerateOptions {
            limit: Some(64),
            ..options_in(dir.path())
        };
        assert!(run(&options, false).is_err());
        assert_eq!(run(&options, true).unwrap(), ExitCode::from(1));
        assert!(!dir.path().join("h.png").exists());
    }

    #[test]
    fn output_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let options = options_in(dir.path());
        let params = resolve_params(&options).unwrap();
        let (_, first) = generate_and_save(&params, &options).unwrap();
        let (_, second) = generate_and_save(&params, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn write_failure_names_normal_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"file").unwrap();
        let options = GenerateOptions {
            normal_out: Some(blocker.join("n.png").display().to_string()),
            ..options_in(dir.path())
        };

        let err = run(&options, false).unwrap_err();
        assert!(err.to_string().contains("n.png"), "{}", err);
        assert!(!err.to_string().contains("h.png"), "{}", err);
    }
}
