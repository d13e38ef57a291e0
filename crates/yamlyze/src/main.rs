use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use yamlyze::extract::{ExtractOptions, extract, record_includes};
use yamlyze::output::write_model;
use yamlyze::provider::{parse_include_trace, read_compile_flags, run_ast_dump, run_include_trace};

#[derive(Parser, Debug)]
#[command(name = "yamlyze", version, about = "Creates a YAML representation of C/C++ source files")]
struct Args {
    /// Source/header file
    #[arg(long, short)]
    file: PathBuf,

    /// Compile options file
    #[arg(long, short)]
    options: Option<PathBuf>,

    /// Report included files
    #[arg(long, short)]
    includes: bool,

    /// Report function calls
    #[arg(long, short)]
    calls: bool,

    /// Report Doxygen comments
    #[arg(long, short)]
    docs: bool,

    /// Analyze all included files
    #[arg(long, short)]
    all: bool,

    /// Process as a header file
    #[arg(long = "header", short = 'H')]
    header: bool,

    /// Save output to file
    #[arg(long, short = 'O')]
    output: Option<PathBuf>,

    #[arg(long, short)]
    verbose: bool,

    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(args: &Args) {
    // The document goes to stdout; logs stay on stderr (and optionally in a
    // file) so piped output remains clean YAML.
    let stderr_filter = if args.verbose {
        EnvFilter::new("yamlyze=debug")
    } else {
        EnvFilter::new("yamlyze=warn")
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_filter(stderr_filter);

    match &args.log_file {
        Some(path) => {
            let file_filter = if args.verbose {
                EnvFilter::new("yamlyze=debug")
            } else {
                EnvFilter::new("yamlyze=info")
            };
            let file_appender = tracing_appender::rolling::never(
                path.parent().unwrap_or(std::path::Path::new(".")),
                path.file_name().unwrap_or(std::ffi::OsStr::new("yamlyze.log")),
            );
            let file_layer = fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(false)
                .with_filter(file_filter);
            tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();
        },
        None => tracing_subscriber::registry().with(stderr_layer).init(),
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(&args);

    info!("yamlyze v{}", env!("CARGO_PKG_VERSION"));

    let module_path = std::fs::canonicalize(&args.file).unwrap_or_else(|_| args.file.clone());

    let compile_flags = match &args.options {
        Some(path) => match read_compile_flags(path) {
            Some(flags) => flags,
            None => {
                error!("Couldn't read compile options from {}", path.display());
                std::process::exit(1);
            },
        },
        None => Vec::new(),
    };

    let options = ExtractOptions {
        analyze_all_files: args.all,
        analyze_calls: args.calls,
        analyze_docs: args.docs,
        analyze_includes: args.includes,
        process_as_header: args.header,
    };

    let Some(root) = run_ast_dump(&module_path, &compile_flags) else {
        error!("Failed to produce a translation unit for {}", module_path.display());
        std::process::exit(1);
    };

    let mut model = extract(&root, &module_path, &options);

    if options.analyze_includes {
        match run_include_trace(&module_path, &compile_flags) {
            Some(trace) => record_includes(&mut model, &parse_include_trace(&trace)),
            None => error!("Failed to trace header inclusions for {}", module_path.display()),
        }
    }

    let module_name = args.file.file_name().and_then(|n| n.to_str()).unwrap_or_default();

    if let Err(e) = write_model(&model, module_name, args.output.as_deref()) {
        error!("Failed to write output: {e}");
        std::process::exit(1);
    }
}
