//! Command-line surface and pipeline orchestration for engawa.
//!
//! The flag surface mirrors the classic reduction tool: a dense text
//! matrix in, embedded coordinates out, with optional destinations for
//! the linear-projection artifact. [`resolve`] turns the raw strings into
//! a validated [`RunConfig`]; [`run`] wires the loader, the chosen
//! callback strategy, the invoker, and the writers together.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use engawa_core::{
    EigenMethod, EmbedError, Embedder, Method, NeighborsMethod, ParameterError, Parameters,
    ParametersBuilder, ProjectionArtifact, Reducer, SkeletonEmbedder, UnknownEigenMethod,
    UnknownMethod, UnknownNeighborsMethod,
};
use engawa_providers_dense::{
    DenseLoadError, LazyCallbacks, PrecomputedCallbacks, read_dense_matrix,
};
use nalgebra::DMatrix;
use thiserror::Error;
use tracing::{info, warn};

use crate::output;

const DEFAULT_OUTPUT_DEVICE: &str = "/dev/tty";

/// Raw CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "engawa",
    about = "Dimensionality reduction of dense matrices.",
    long_about = "Dimensionality reduction of dense matrices.\n\n\
        Reads a whitespace-delimited numeric matrix, embeds its samples with \
        the selected method, and writes the coordinates (and, for linear \
        methods, the projection artifact) to the requested destinations."
)]
pub struct Cli {
    /// Input file with a whitespace-delimited numeric matrix.
    #[arg(short = 'i', long = "input-file")]
    pub input_file: Option<PathBuf>,

    /// Transpose the loaded matrix.
    #[arg(long)]
    pub transpose: bool,

    /// Output file for the embedded coordinates.
    #[arg(short = 'o', long = "output-file")]
    pub output_file: Option<PathBuf>,

    /// Output file for the projection matrix of a linear method.
    #[arg(long = "output-projection-matrix-file")]
    pub output_projection_matrix_file: Option<PathBuf>,

    /// Output file for the mean of the data.
    #[arg(long = "output-projection-mean-file")]
    pub output_projection_mean_file: Option<PathBuf>,

    /// Dimension reduction method, canonical name or abbreviation
    /// (for example `locally_linear_embedding` or `lle`).
    #[arg(short = 'm', long, default_value = "locally_linear_embedding")]
    pub method: String,

    /// Neighbors search method: `brute`, or `covertree` when available.
    #[arg(long = "neighbors-method")]
    pub neighbors_method: Option<String>,

    /// Eigendecomposition method: `arpack` when available, `randomized`,
    /// or `dense`.
    #[arg(long = "eigen-method")]
    pub eigen_method: Option<String>,

    /// Target dimension.
    #[arg(long = "target-dimension", default_value_t = 2, allow_negative_numbers = true)]
    pub target_dimension: i64,

    /// Number of neighbors.
    #[arg(short = 'k', long = "num-neighbors", default_value_t = 10, allow_negative_numbers = true)]
    pub num_neighbors: i64,

    /// Width of the gaussian kernel.
    #[arg(long = "gaussian-width", default_value_t = 1.0, allow_negative_numbers = true)]
    pub gaussian_width: f64,

    /// Number of timesteps for the diffusion map.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub timesteps: i64,

    /// Use the local strategy in SPE (default is global).
    #[arg(long = "spe-local")]
    pub spe_local: bool,

    /// Regularization diagonal shift for the weight matrix.
    #[arg(long, default_value_t = 1e-9, allow_negative_numbers = true)]
    pub eigenshift: f64,

    /// Ratio of landmark points. Should be in the (0,1) range.
    #[arg(long = "landmark-ratio", default_value_t = 0.2, allow_negative_numbers = true)]
    pub landmark_ratio: f64,

    /// Tolerance for SPE.
    #[arg(long = "spe-tolerance", default_value_t = 1e-5, allow_negative_numbers = true)]
    pub spe_tolerance: f64,

    /// Number of SPE updates.
    #[arg(long = "spe-num-updates", default_value_t = 100, allow_negative_numbers = true)]
    pub spe_num_updates: i64,

    /// Maximum number of iterations.
    #[arg(long = "max-iters", default_value_t = 1000, allow_negative_numbers = true)]
    pub max_iters: i64,

    /// Factor-analysis convergence criterion.
    #[arg(long = "fa-epsilon", default_value_t = 1e-5, allow_negative_numbers = true)]
    pub fa_epsilon: f64,

    /// Perplexity for the t-SNE algorithm.
    #[arg(long = "sne-perplexity", default_value_t = 30.0, allow_negative_numbers = true)]
    pub sne_perplexity: f64,

    /// Theta for the t-SNE algorithm.
    #[arg(long = "sne-theta", default_value_t = 0.5, allow_negative_numbers = true)]
    pub sne_theta: f64,

    /// Materialize the pairwise matrices up front instead of recomputing
    /// values on demand.
    #[arg(long)]
    pub precompute: bool,

    /// Fixed seed for the stochastic methods.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output more information.
    #[arg(long)]
    pub verbose: bool,

    /// Output debug information.
    #[arg(long)]
    pub debug: bool,

    /// Output benchmark information.
    #[arg(long)]
    pub benchmark: bool,
}

/// Errors surfaced while resolving configuration or executing the run.
#[derive(Debug, Error)]
pub enum CliError {
    /// No input file flag was given.
    #[error("no input file specified")]
    NoInputFile,
    /// The input file could not be opened.
    #[error("failed to open input file `{path}`: {source}")]
    InputFile {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The method string matched no alias-table entry.
    #[error(transparent)]
    UnknownMethod(#[from] UnknownMethod),
    /// The neighbors-method string matched no available entry.
    #[error(transparent)]
    UnknownNeighborsMethod(#[from] UnknownNeighborsMethod),
    /// The eigen-method string matched no available entry.
    #[error(transparent)]
    UnknownEigenMethod(#[from] UnknownEigenMethod),
    /// A numeric parameter was out of range.
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    /// The input matrix could not be loaded.
    #[error(transparent)]
    Load(#[from] DenseLoadError),
    /// The embedding backend failed.
    #[error(transparent)]
    Embed(#[from] EmbedError),
    /// An output destination could not be created or written.
    #[error("failed to write `{path}`: {source}")]
    Output {
        /// Path that failed.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

impl CliError {
    /// Stable machine-readable code for structured logs.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NoInputFile | Self::InputFile { .. } => "MISSING_INPUT_FILE",
            Self::UnknownMethod(_) => "UNKNOWN_METHOD",
            Self::UnknownNeighborsMethod(_) => "UNKNOWN_NEIGHBORS_METHOD",
            Self::UnknownEigenMethod(_) => "UNKNOWN_EIGEN_METHOD",
            Self::Parameter(error) => error.code(),
            Self::Load(error) => error.code(),
            Self::Embed(error) => error.code(),
            Self::Output { .. } => "OUTPUT_WRITE_FAILURE",
        }
    }
}

/// Pairwise-callback supply strategy, chosen once per run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CallbackStrategy {
    /// Recompute pairwise values from the data on every call.
    #[default]
    Lazy,
    /// Materialize the required pairwise matrices before invocation.
    Precomputed,
}

/// Destinations for the linear-projection artifact.
#[derive(Clone, Debug)]
pub struct ProjectionDestinations {
    /// Where the projection matrix goes.
    pub matrix: PathBuf,
    /// Where the mean vector goes.
    pub mean: PathBuf,
}

/// Fully resolved configuration for one run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Validated parameter set handed to the invoker.
    pub parameters: Parameters,
    /// Callback supply strategy.
    pub strategy: CallbackStrategy,
    /// Dataset source.
    pub input_file: PathBuf,
    /// Transpose the matrix after loading.
    pub transpose: bool,
    /// Embedding destination.
    pub output_file: PathBuf,
    /// Projection destinations; `None` disables projection output.
    pub projection_output: Option<ProjectionDestinations>,
}

/// Resolves raw CLI strings into a validated [`RunConfig`].
///
/// Method selectors are matched against their closed alias tables, the
/// range-checked parameters are validated, and a missing output
/// destination is recovered by substituting the terminal device with a
/// warning. A missing input flag is an error; nothing is written in any
/// failure case.
///
/// # Errors
/// Returns [`CliError`] carrying the failure class named by its
/// [`CliError::code`].
pub fn resolve(cli: Cli) -> Result<RunConfig, CliError> {
    let method = Method::parse(&cli.method)?;
    let neighbors_method = match cli.neighbors_method.as_deref() {
        Some(raw) => NeighborsMethod::parse(raw)?,
        None => NeighborsMethod::default_available(),
    };
    let eigen_method = match cli.eigen_method.as_deref() {
        Some(raw) => EigenMethod::parse(raw)?,
        None => EigenMethod::default_available(),
    };

    let parameters = ParametersBuilder::default()
        .with_method(method)
        .with_neighbors_method(neighbors_method)
        .with_eigen_method(eigen_method)
        .with_target_dimension(cli.target_dimension)
        .with_num_neighbors(cli.num_neighbors)
        .with_gaussian_width(cli.gaussian_width)
        .with_timesteps(cli.timesteps)
        .with_spe_global(!cli.spe_local)
        .with_eigenshift(cli.eigenshift)
        .with_landmark_ratio(cli.landmark_ratio)
        .with_spe_tolerance(cli.spe_tolerance)
        .with_spe_num_updates(cli.spe_num_updates)
        .with_max_iters(cli.max_iters)
        .with_fa_epsilon(cli.fa_epsilon)
        .with_sne_perplexity(cli.sne_perplexity)
        .with_sne_theta(cli.sne_theta)
        .with_seed(cli.seed)
        .build()?;

    let input_file = cli.input_file.ok_or(CliError::NoInputFile)?;
    let output_file = cli.output_file.unwrap_or_else(|| {
        warn!("no output file specified, using {DEFAULT_OUTPUT_DEVICE}");
        PathBuf::from(DEFAULT_OUTPUT_DEVICE)
    });

    let projection_output = match (
        cli.output_projection_matrix_file,
        cli.output_projection_mean_file,
    ) {
        (Some(matrix), Some(mean)) => Some(ProjectionDestinations { matrix, mean }),
        _ => None,
    };

    let strategy = if cli.precompute {
        CallbackStrategy::Precomputed
    } else {
        CallbackStrategy::Lazy
    };

    Ok(RunConfig {
        parameters,
        strategy,
        input_file,
        transpose: cli.transpose,
        output_file,
        projection_output,
    })
}

/// Resolves `cli` and executes the pipeline.
///
/// # Errors
/// Returns [`CliError`] when resolution or execution fails.
pub fn run_cli(cli: Cli) -> Result<(), CliError> {
    let config = resolve(cli)?;
    run(&config)
}

/// Loads the data, invokes the embedding backend through the selected
/// callback strategy, and serializes the result.
///
/// # Errors
/// Returns [`CliError`] when loading, embedding, or writing fails.
pub fn run(config: &RunConfig) -> Result<(), CliError> {
    let mut data = load_input(&config.input_file)?;
    if config.transpose {
        data = data.transpose();
    }
    info!(
        "data contains {} feature vectors with dimension of {}",
        data.ncols(),
        data.nrows()
    );

    let indices: Vec<usize> = (0..data.ncols()).collect();
    let embedder = SkeletonEmbedder;
    let reducer = Reducer::new(config.parameters.clone());
    let method = reducer.parameters().method();

    let result = match config.strategy {
        CallbackStrategy::Lazy => {
            reducer.embed(&indices, &LazyCallbacks::new(&data), &embedder)?
        }
        CallbackStrategy::Precomputed => {
            let callbacks = PrecomputedCallbacks::new(
                &data,
                embedder.needs_distance(method),
                embedder.needs_kernel(method),
            );
            reducer.embed(&indices, &callbacks, &embedder)?
        }
    };

    let (coordinates, projection) = result.into_parts();
    write_embedding_file(&coordinates, &config.output_file)?;
    if let Some(destinations) = &config.projection_output {
        write_projection_files(&projection, destinations)?;
    }
    Ok(())
}

fn load_input(path: &Path) -> Result<DMatrix<f64>, CliError> {
    let file = File::open(path).map_err(|source| CliError::InputFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(read_dense_matrix(BufReader::new(file))?)
}

fn create_output(path: &Path) -> Result<BufWriter<File>, CliError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| CliError::Output {
            path: path.to_path_buf(),
            source,
        })
}

fn write_failure(path: &Path) -> impl FnOnce(io::Error) -> CliError + '_ {
    move |source| CliError::Output {
        path: path.to_path_buf(),
        source,
    }
}

fn write_embedding_file(coordinates: &DMatrix<f64>, path: &Path) -> Result<(), CliError> {
    let mut writer = create_output(path)?;
    output::write_embedding(coordinates, &mut writer).map_err(write_failure(path))?;
    writer.flush().map_err(write_failure(path))
}

/// Writes the projection matrix and mean to their respective files.
///
/// Both files are created whenever projection output was requested; for
/// the empty artifact of a non-linear method they are deliberately left
/// empty rather than treated as a failure.
fn write_projection_files(
    artifact: &ProjectionArtifact,
    destinations: &ProjectionDestinations,
) -> Result<(), CliError> {
    let mut matrix_writer = create_output(&destinations.matrix)?;
    let mut mean_writer = create_output(&destinations.mean)?;
    if let ProjectionArtifact::Linear { matrix, mean } = artifact {
        output::write_matrix(matrix, &mut matrix_writer)
            .map_err(write_failure(&destinations.matrix))?;
        output::write_vector(mean, &mut mean_writer).map_err(write_failure(&destinations.mean))?;
    }
    matrix_writer
        .flush()
        .map_err(write_failure(&destinations.matrix))?;
    mean_writer.flush().map_err(write_failure(&destinations.mean))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["engawa"];
        full.extend_from_slice(args);
        match Cli::try_parse_from(full) {
            Ok(cli) => cli,
            Err(err) => panic!("arguments must parse: {err}"),
        }
    }

    fn temp_dir() -> TempDir {
        match TempDir::new() {
            Ok(dir) => dir,
            Err(err) => panic!("failed to create temp dir: {err}"),
        }
    }

    /// Three features, four samples: columns are the samples.
    fn write_sample_input(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("input.dat");
        fs::write(&path, "0 1 0 0\n0 0 2 0\n0 0 0 3\n").expect("input must be writable");
        path
    }

    fn resolve_expecting_error(args: &[&str], message: &str) -> CliError {
        match resolve(parse(args)) {
            Ok(_) => panic!("{message}"),
            Err(err) => err,
        }
    }

    #[test]
    fn missing_input_flag_is_classified() {
        let err = resolve_expecting_error(&[], "missing input must fail");
        assert!(matches!(err, CliError::NoInputFile));
        assert_eq!(err.code(), "MISSING_INPUT_FILE");
    }

    #[test]
    fn missing_output_flag_falls_back_to_the_terminal_device() {
        let config = resolve(parse(&["-i", "input.dat"])).expect("resolution must succeed");
        assert_eq!(config.output_file, PathBuf::from(DEFAULT_OUTPUT_DEVICE));
    }

    #[test]
    fn missing_output_flag_does_not_abort_the_run() {
        let dir = temp_dir();
        let input = write_sample_input(&dir);
        let cli = parse(&[
            "-i",
            input.to_str().expect("utf-8 path"),
            "--method",
            "pca",
        ]);
        // Loading and embedding must complete; the only failure still open
        // is the substituted terminal device itself being unwritable, as in
        // a detached test environment.
        match run_cli(cli) {
            Ok(()) => {}
            Err(CliError::Output { path, .. }) => {
                assert_eq!(path, PathBuf::from(DEFAULT_OUTPUT_DEVICE));
            }
            Err(other) => panic!("run aborted before the write step: {other}"),
        }
    }

    #[test]
    fn unknown_method_is_classified() {
        let err = resolve_expecting_error(
            &["-i", "input.dat", "--method", "sammon_mapping"],
            "unknown method must fail",
        );
        assert!(matches!(err, CliError::UnknownMethod(_)));
        assert_eq!(err.code(), "UNKNOWN_METHOD");
    }

    #[test]
    fn unknown_neighbors_method_is_classified() {
        let err = resolve_expecting_error(
            &["-i", "input.dat", "--neighbors-method", "kdtree"],
            "unknown neighbors method must fail",
        );
        assert_eq!(err.code(), "UNKNOWN_NEIGHBORS_METHOD");
    }

    #[test]
    fn unknown_eigen_method_is_classified() {
        let err = resolve_expecting_error(
            &["-i", "input.dat", "--eigen-method", "jacobi"],
            "unknown eigen method must fail",
        );
        assert_eq!(err.code(), "UNKNOWN_EIGEN_METHOD");
    }

    #[rstest]
    #[case(&["--num-neighbors", "2"], false)]
    #[case(&["--num-neighbors", "3"], true)]
    #[case(&["--target-dimension", "0"], true)]
    #[case(&["--target-dimension", "-1"], false)]
    #[case(&["--gaussian-width", "-0.1"], false)]
    #[case(&["--timesteps", "-2"], false)]
    #[case(&["--landmark-ratio", "7.0"], true)]
    fn range_checks_match_the_contract(#[case] extra: &[&str], #[case] accepted: bool) {
        let mut args = vec!["-i", "input.dat"];
        args.extend_from_slice(extra);
        let resolved = resolve(parse(&args));
        assert_eq!(resolved.is_ok(), accepted, "args: {extra:?}");
        if !accepted {
            let err = resolved.err().expect("rejection must carry an error");
            assert_eq!(err.code(), "OUT_OF_RANGE_PARAMETER");
        }
    }

    #[test]
    fn projection_output_requires_both_destinations() {
        let config = resolve(parse(&[
            "-i",
            "input.dat",
            "--output-projection-matrix-file",
            "proj.dat",
        ]))
        .expect("resolution must succeed");
        assert!(config.projection_output.is_none());
    }

    #[test]
    fn failed_resolution_produces_zero_output_bytes() {
        let dir = temp_dir();
        let input = write_sample_input(&dir);
        let output = dir.path().join("embedding.dat");
        let cli = parse(&[
            "-i",
            input.to_str().expect("utf-8 path"),
            "-o",
            output.to_str().expect("utf-8 path"),
            "--method",
            "bogus",
        ]);
        let err = run_cli(cli).expect_err("unknown method must abort the run");
        assert_eq!(err.code(), "UNKNOWN_METHOD");
        assert!(!output.exists(), "no output may be written on failure");
    }

    #[test]
    fn unopenable_input_is_classified_as_missing() {
        let dir = temp_dir();
        let cli = parse(&[
            "-i",
            dir.path().join("absent.dat").to_str().expect("utf-8 path"),
        ]);
        let config = resolve(cli).expect("resolution must succeed");
        let err = run(&config).expect_err("absent input must fail");
        assert_eq!(err.code(), "MISSING_INPUT_FILE");
    }

    fn run_to_files(dir: &TempDir, extra: &[&str]) -> (PathBuf, PathBuf, PathBuf) {
        let input = write_sample_input(dir);
        let output = dir.path().join("embedding.dat");
        let proj_matrix = dir.path().join("projection.dat");
        let proj_mean = dir.path().join("mean.dat");
        let mut args = vec![
            "-i".to_owned(),
            input.to_str().expect("utf-8 path").to_owned(),
            "-o".to_owned(),
            output.to_str().expect("utf-8 path").to_owned(),
            "--output-projection-matrix-file".to_owned(),
            proj_matrix.to_str().expect("utf-8 path").to_owned(),
            "--output-projection-mean-file".to_owned(),
            proj_mean.to_str().expect("utf-8 path").to_owned(),
        ];
        args.extend(extra.iter().map(|arg| (*arg).to_owned()));
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        run_cli(parse(&arg_refs)).expect("pipeline must succeed");
        (output, proj_matrix, proj_mean)
    }

    #[test]
    fn linear_method_writes_coordinates_and_projection() {
        let dir = temp_dir();
        let (output, proj_matrix, proj_mean) = run_to_files(&dir, &["--method", "pca"]);

        let embedding = fs::read_to_string(&output).expect("embedding must exist");
        // Four samples, two target dimensions.
        assert_eq!(embedding.lines().count(), 4);
        for line in embedding.lines() {
            assert_eq!(line.split_whitespace().count(), 2);
        }

        let matrix = fs::read_to_string(&proj_matrix).expect("projection matrix must exist");
        assert_eq!(matrix.lines().count(), 2, "2x3 projection matrix");
        let mean = fs::read_to_string(&proj_mean).expect("projection mean must exist");
        assert_eq!(mean.lines().count(), 3, "mean over 3 features");
    }

    #[test]
    fn non_linear_method_leaves_projection_files_empty() {
        let dir = temp_dir();
        let (output, proj_matrix, proj_mean) = run_to_files(&dir, &["--method", "mds"]);

        assert!(output.exists());
        let matrix = fs::read(&proj_matrix).expect("projection matrix file must exist");
        let mean = fs::read(&proj_mean).expect("projection mean file must exist");
        assert!(matrix.is_empty(), "empty artifact leaves the matrix file empty");
        assert!(mean.is_empty(), "empty artifact leaves the mean file empty");
    }

    #[test]
    fn precomputed_and_lazy_strategies_agree() {
        let dir = temp_dir();
        let (lazy_output, _, _) = run_to_files(&dir, &["--method", "mds"]);
        let lazy_bytes = fs::read(&lazy_output).expect("lazy output must exist");

        let (precomputed_output, _, _) =
            run_to_files(&dir, &["--method", "mds", "--precompute"]);
        let precomputed_bytes =
            fs::read(&precomputed_output).expect("precomputed output must exist");
        assert_eq!(lazy_bytes, precomputed_bytes);
    }

    #[test]
    fn fixed_seed_reproduces_stochastic_output() {
        let dir = temp_dir();
        let (first, _, _) = run_to_files(&dir, &["--method", "ra", "--seed", "11"]);
        let first_bytes = fs::read(&first).expect("first run output must exist");
        let (second, _, _) = run_to_files(&dir, &["--method", "ra", "--seed", "11"]);
        let second_bytes = fs::read(&second).expect("second run output must exist");
        assert_eq!(first_bytes, second_bytes);
    }

    #[test]
    fn transpose_flag_reorients_the_input() {
        let dir = temp_dir();
        let straight = write_sample_input(&dir);
        let transposed = dir.path().join("transposed.dat");
        // The same matrix written sample-major.
        fs::write(&transposed, "0 0 0\n1 0 0\n0 2 0\n0 0 3\n")
            .expect("input must be writable");

        let out_a = dir.path().join("a.dat");
        let out_b = dir.path().join("b.dat");
        run_cli(parse(&[
            "-i",
            straight.to_str().expect("utf-8 path"),
            "-o",
            out_a.to_str().expect("utf-8 path"),
            "--method",
            "pca",
        ]))
        .expect("straight run must succeed");
        run_cli(parse(&[
            "-i",
            transposed.to_str().expect("utf-8 path"),
            "-o",
            out_b.to_str().expect("utf-8 path"),
            "--method",
            "pca",
            "--transpose",
        ]))
        .expect("transposed run must succeed");

        let a = fs::read(&out_a).expect("output a must exist");
        let b = fs::read(&out_b).expect("output b must exist");
        assert_eq!(a, b);
    }

    #[test]
    fn kernel_method_runs_under_both_strategies() {
        let dir = temp_dir();
        let (lazy_output, _, _) = run_to_files(&dir, &["--method", "kpca"]);
        let (precomputed_output, _, _) =
            run_to_files(&dir, &["--method", "kpca", "--precompute"]);
        let lazy_bytes = fs::read(&lazy_output).expect("lazy output must exist");
        let precomputed_bytes =
            fs::read(&precomputed_output).expect("precomputed output must exist");
        assert_eq!(lazy_bytes, precomputed_bytes);
    }

    #[test]
    fn default_method_is_locally_linear_embedding() {
        let config = resolve(parse(&["-i", "input.dat"])).expect("resolution must succeed");
        assert_eq!(
            config.parameters.method(),
            Method::LocallyLinearEmbedding,
        );
        assert_eq!(config.strategy, CallbackStrategy::Lazy);
    }
}
