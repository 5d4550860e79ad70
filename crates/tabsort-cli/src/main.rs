use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use tabsort_cli::{Page, PageConfig, Session};
use tabsort_render::{BorderStyle, Styles, TextTable};

/// Sortable, searchable data tables in the terminal.
#[derive(Parser)]
#[command(name = "tabsort")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Page configuration (YAML); the bundled sample page when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the tables once
    Show(ShowArgs),
    /// Read events from stdin and redraw one table after each
    Interactive {
        /// Table to show; the first table when omitted
        #[arg(long)]
        table: Option<String>,
    },
}

#[derive(Args)]
struct ShowArgs {
    /// Only render this table
    #[arg(long)]
    table: Option<String>,

    /// Search text applied before sorting
    #[arg(long)]
    search: Option<String>,

    /// Click a column header; repeat to click again
    #[arg(long = "sort", value_name = "KEY")]
    sorts: Vec<String>,

    /// Border style: none, ascii, light, heavy, double, rounded
    #[arg(long, default_value = "light", value_parser = parse_border)]
    border: BorderStyle,

    /// Truncate cells wider than this many columns
    #[arg(long)]
    max_width: Option<usize>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn parse_border(name: &str) -> Result<BorderStyle, String> {
    BorderStyle::from_name(name).ok_or_else(|| format!("unknown border style \"{}\"", name))
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("failed to initialise logging")
}

fn load_page(path: Option<&PathBuf>) -> Result<Page> {
    let config = match path {
        Some(path) => PageConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PageConfig::default_page().context("bundled page config is invalid")?,
    };
    let mut page = Page::new(config);
    page.load_all().context("failed to load table data")?;
    Ok(page)
}

fn text_renderer(no_color: bool) -> TextTable {
    let color = !no_color && console::Term::stdout().features().colors_supported();
    let styles = if color {
        Styles::colored()
    } else {
        Styles::plain()
    };
    TextTable::new().styles(styles)
}

fn show(mut page: Page, args: ShowArgs, renderer: TextTable) -> Result<()> {
    let names: Vec<String> = match &args.table {
        Some(name) => {
            if page.table(name).is_none() {
                bail!(
                    "no table \"{}\" (available: {})",
                    name,
                    page.names().join(", ")
                );
            }
            vec![name.clone()]
        }
        None => page.names().iter().map(|n| n.to_string()).collect(),
    };

    for key in &args.sorts {
        let mut clicked = false;
        for name in &names {
            if let Some(table) = page.table_mut(name) {
                if table.config.columns.iter().any(|c| &c.key == key) {
                    table.click(key);
                    clicked = true;
                }
            }
        }
        if !clicked {
            bail!("no column \"{}\" in the selected tables", key);
        }
    }
    if let Some(search) = &args.search {
        for name in &names {
            if let Some(table) = page.table_mut(name) {
                table.search(search.as_str());
            }
        }
    }

    let views: Vec<_> = names
        .iter()
        .filter_map(|name| page.table(name))
        .map(|table| page.view(table))
        .collect();

    match args.format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&views).context("failed to encode views")?;
            println!("{}", json);
        }
        Format::Text => {
            let mut renderer = renderer.border(args.border);
            if let Some(width) = args.max_width {
                renderer = renderer.max_cell_width(width);
            }
            let rendered: Vec<String> = views.iter().map(|v| renderer.render(v)).collect();
            println!("{}", rendered.join("\n\n"));
        }
    }
    Ok(())
}

fn interactive(mut page: Page, table: Option<String>, renderer: TextTable) -> Result<()> {
    let table = match table {
        Some(table) => table,
        None => page
            .names()
            .first()
            .map(|n| n.to_string())
            .context("page has no tables")?,
    };
    let mut session = Session::new(&mut page, &table, renderer)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    session
        .run(stdin.lock(), stdout.lock())
        .context("event loop failed")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let page = load_page(cli.config.as_ref())?;
    let renderer = text_renderer(cli.no_color);

    match cli.command {
        Command::Show(args) => show(page, args, renderer),
        Command::Interactive { table } => interactive(page, table, renderer),
    }
}
