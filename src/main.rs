use clap::Parser;
use repotext::clipboard::SystemClipboard;
use repotext::logger::initialize_logger;
use repotext::pipeline::{print_summary, run_pipeline, CliOverrides, DEFAULT_OUTPUT_FILE};
use repotext::scan::scan_directory;
use repotext::selector::{collect_exclusions, InteractiveSelector};
use repotext::Result;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::{debug, error, info};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Directory to bundle; falls back to the --config file, then the current directory
    root: Option<PathBuf>,
    #[arg(help = format!(
        "File the bundled text is written to; falls back to the --config file, then {}",
        DEFAULT_OUTPUT_FILE
    ))]
    output: Option<PathBuf>,
    #[arg(long, help = "Do not copy the output to the clipboard")]
    no_clipboard: bool,
    #[arg(
        short = 'c',
        long,
        env = "REPOTEXT_CONFIG",
        help = "JSON configuration with exclusions; skips the interactive prompts"
    )]
    config: Option<PathBuf>,
    #[arg(long, help = "Do not add the preset exclusions")]
    no_presets: bool,
}

impl From<CliArgs> for CliOverrides {
    fn from(args: CliArgs) -> Self {
        CliOverrides {
            root: args.root,
            output_file: args.output,
            config_file: args.config,
            no_clipboard: args.no_clipboard,
            no_presets: args.no_presets,
        }
    }
}

fn run(overrides: CliOverrides) -> Result<()> {
    let mut config = overrides.build_config()?;
    config.validate()?;

    let scan = scan_directory(&config.root)?;
    info!(
        "Found {} files and {} directories under {}",
        scan.files.len(),
        scan.dirs.len(),
        config.root.display()
    );

    if overrides.is_interactive() {
        let presets = overrides.interactive_presets();
        let stdin = io::stdin();
        let mut selector = InteractiveSelector::new(stdin.lock(), io::stdout());
        let (excluded_files, excluded_dirs) = collect_exclusions(&scan, &presets, &mut selector)?;
        config.excluded_files.extend(excluded_files);
        config.excluded_dirs.extend(excluded_dirs);
    }
    debug!("Running with configuration: {:?}", config);

    let report = run_pipeline(&config, &scan.files, SystemClipboard::new)?;
    print_summary(&mut io::stdout(), &report)?;
    Ok(())
}

fn main() {
    let cli_args = CliArgs::parse();
    initialize_logger();

    if let Err(e) = run(cli_args.into()) {
        error!("Run failed: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
