use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use resume_page::content;
use resume_page::page::{Page, PageShell};
use resume_page::pdf::PdfiumBackend;
use resume_page::view::{ExportOutcome, ResumeView};
use resume_page::viewport::Viewport;

/// Renders the résumé page from the command line.
///
/// Export needs the bundled fonts under `assets/fonts` (or the
/// `RESUME_PAGE_FONTS_DIR` environment variable) and a pdfium library on the
/// search path or in the directory named by `RESUME_PAGE_PDFIUM_DIR`.
#[derive(Parser)]
#[command(author, version, about = "Convenience CLI for the resume page")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the page shell metadata and the card text.
    #[command(name = "outline")]
    Outline,

    /// Capture the page and write the paginated PDF.
    #[command(name = "export", aliases = ["download", "pdf"])]
    Export {
        /// Directory the document is written into.
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Outline => run_outline(),
        Commands::Export { out } => run_export(out),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn run_outline() -> Result<(), Box<dyn Error>> {
    let shell = PageShell::default();
    let view = ResumeView::new(content::resume());
    let page = Page::compose(shell, view.body());
    println!("{} [{}]", page.shell().title(), page.shell().lang());
    println!("{}", page.shell().description());
    println!();
    print!("{}", page.body().flatten_text());
    Ok(())
}

fn run_export(out: PathBuf) -> Result<(), Box<dyn Error>> {
    let backend = PdfiumBackend::new();
    let mut viewport = Viewport::new();
    let mut view = ResumeView::new(content::resume());
    view.mount(&mut viewport);
    let outcome = view.download_pdf(&backend, &mut viewport, &out);
    view.unmount(&mut viewport);
    match outcome {
        ExportOutcome::Completed { path, pages } => {
            println!("Wrote {} ({} pages)", path.display(), pages);
            Ok(())
        }
        ExportOutcome::AlreadyRunning => Err("an export is already running".into()),
        ExportOutcome::Failed => {
            for alert in viewport.alerts() {
                eprintln!("{}", alert);
            }
            Err("PDF export failed; see the log for details".into())
        }
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
