use anyhow::Context;
use clap::{Parser, ValueEnum};
use pagectl::{
    MemoryContainer, PageBounds, PaginationConfig, PaginationController, SearchResult,
    TextListView,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Html,
}

/// Render one page of search results with its pagination controls
#[derive(Debug, Parser)]
#[command(name = "pagectl", version)]
struct Args {
    /// JSON file holding an array of search results
    #[arg(short, long)]
    results: PathBuf,

    /// Page to render (1-based)
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Results per page
    #[arg(short = 's', long, default_value_t = 10)]
    page_size: usize,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// HTML page whose container receives the controls (implies html output)
    #[arg(long)]
    host: Option<PathBuf>,

    /// Id of the container element
    #[arg(long, default_value = "paginationControls")]
    container_id: String,

    /// Id of the list element that receives the page's results
    #[arg(long, default_value = "results")]
    results_id: String,

    /// Clamp out-of-range pages instead of failing
    #[arg(long)]
    clamp: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: Args) -> anyhow::Result<()> {
    let results = SearchResult::load(&args.results)
        .with_context(|| format!("failed to load results from {}", args.results.display()))?;

    let config = PaginationConfig {
        page_size: args.page_size,
        container_id: args.container_id.clone(),
        page_bounds: if args.clamp {
            PageBounds::Clamp
        } else {
            PageBounds::Reject
        },
        ..Default::default()
    };

    let container = match &args.host {
        Some(path) => host_container(path, &args.container_id)?,
        None => MemoryContainer::new(&args.container_id),
    };

    let mut controller =
        PaginationController::new(results, config, container, TextListView::new())?;
    controller
        .set_page(args.page)
        .with_context(|| format!("cannot render page {}", args.page))?;
    let list = controller.view().to_list(&args.results_id);

    if let Some(path) = &args.host {
        return print_host(path, controller.container(), &list);
    }

    match args.format {
        Format::Text => {
            println!("{}", controller.view().text());
            println!();
            println!("{}", controller.container().to_text());
        }
        Format::Html => {
            println!("{}", list.to_html());
            println!("{}", controller.container().to_html());
        }
    }
    Ok(())
}

#[cfg(feature = "host")]
fn host_container(path: &Path, id: &str) -> anyhow::Result<MemoryContainer> {
    let page = pagectl::HostPage::load(path)
        .with_context(|| format!("failed to read host page {}", path.display()))?;
    Ok(page.container(id)?)
}

#[cfg(feature = "host")]
fn print_host(
    path: &Path,
    controls: &MemoryContainer,
    list: &MemoryContainer,
) -> anyhow::Result<()> {
    use pagectl::Container;

    let page = pagectl::HostPage::load(path)?;
    let html = match page.container(list.id()) {
        Ok(_) => page.render_with(&[controls, list])?,
        Err(pagectl::Error::ContainerNotFound(id)) => {
            log::warn!("host page has no #{}, results list not rendered", id);
            page.render_with(&[controls])?
        }
        Err(e) => return Err(e.into()),
    };
    println!("{}", html);
    Ok(())
}

#[cfg(not(feature = "host"))]
fn host_container(_path: &Path, _id: &str) -> anyhow::Result<MemoryContainer> {
    anyhow::bail!("host pages require the `host` feature")
}

#[cfg(not(feature = "host"))]
fn print_host(
    _path: &Path,
    _controls: &MemoryContainer,
    _list: &MemoryContainer,
) -> anyhow::Result<()> {
    anyhow::bail!("host pages require the `host` feature")
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(args) {
        eprintln!("pagectl: {:#}", e);
        std::process::exit(1);
    }
}
