//! Command-line interface for lauvinko
//! Renders site pages and glosses to HTML against a running site API, and checks authored
//! pages for broken links.
//!
//! Usage:
//!   lauvinko page `<name>` [--view `<view>`]                 - Fetch and render a page
//!   lauvinko render `<file>` [--name `<name>`] [--offline]   - Render a page tree from disk
//!   lauvinko gloss `<outline>` [--language] [--rows]         - Render one block gloss
//!   lauvinko link `<outline>` | --decode `<query>`           - Encode or decode a builder link
//!   lauvinko contents [--html]                             - Print the table of contents
//!   lauvinko validate `<files>`...                          - Check the links of page trees

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use lauvinko::lauvinko::client::ApiClient;
use lauvinko::lauvinko::config::{Loader, SiteConfig};
use lauvinko::lauvinko::directory::SectionDirectory;
use lauvinko::lauvinko::document::Document;
use lauvinko::lauvinko::gloss::{
    collect_requests, render_block_gloss, BlockGloss, BuilderLink, FooterStyle, GlossLoader,
};
use lauvinko::lauvinko::html::to_html;
use lauvinko::lauvinko::page::{render_contents, render_page, PageInstance, PageShell, PageStatus, TextView};
use lauvinko::lauvinko::validate::validate_links;
use std::path::Path;
use std::sync::Arc;

fn cli() -> Command {
    Command::new("lauvinko")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render Lauvìnko site pages and glosses")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .subcommand(
            Command::new("page")
                .about("Fetch a page with its glosses and print it as HTML")
                .arg(Arg::new("name").required(true).index(1))
                .arg(view_arg()),
        )
        .subcommand(
            Command::new("render")
                .about("Render a page tree stored as JSON")
                .arg(Arg::new("file").required(true).index(1))
                .arg(
                    Arg::new("name")
                        .long("name")
                        .help("Page name used for navigation and anchors (default: file stem)"),
                )
                .arg(
                    Arg::new("offline")
                        .long("offline")
                        .help("Do not fetch glosses")
                        .action(ArgAction::SetTrue),
                )
                .arg(view_arg()),
        )
        .subcommand(
            Command::new("gloss")
                .about("Fetch and render a single block gloss")
                .arg(Arg::new("outline").required(true).index(1))
                .arg(Arg::new("language").long("language").short('l').default_value("lv"))
                .arg(
                    Arg::new("rows")
                        .long("rows")
                        .short('r')
                        .help("Row letters: a(nalysis) r(omanization) f(alavay) n(arrow) b(road)"),
                )
                .arg(Arg::new("translation").long("translation").short('t'))
                .arg(
                    Arg::new("copy-link")
                        .long("copy-link")
                        .help("Render the footer as shown inside the builder")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("link")
                .about("Print the builder link for an outline, or decode one")
                .arg(
                    Arg::new("outline")
                        .required_unless_present("decode")
                        .index(1),
                )
                .arg(Arg::new("language").long("language").short('l').default_value("lv"))
                .arg(
                    Arg::new("translation")
                        .long("translation")
                        .short('t')
                        .default_value(""),
                )
                .arg(
                    Arg::new("decode")
                        .long("decode")
                        .help("Query string to decode")
                        .conflicts_with("outline"),
                ),
        )
        .subcommand(
            Command::new("contents")
                .about("Print the numbered table of contents")
                .arg(
                    Arg::new("html")
                        .long("html")
                        .help("Print the contents list as HTML")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Check the links of page trees stored as JSON")
                .arg(
                    Arg::new("files")
                        .required(true)
                        .num_args(1..)
                        .index(1),
                ),
        )
}

fn view_arg() -> Arg {
    Arg::new("view")
        .long("view")
        .value_parser(["simplified", "analysis"])
        .help("How pages made of glosses are shown (default: from config)")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let matches = cli().get_matches();
    let config = load_config(&matches)?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
        )
        .init();

    match matches.subcommand() {
        Some(("page", sub)) => handle_page(&config, sub).await,
        Some(("render", sub)) => handle_render(&config, sub).await,
        Some(("gloss", sub)) => handle_gloss(&config, sub).await,
        Some(("link", sub)) => handle_link(&config, sub),
        Some(("contents", sub)) => handle_contents(&config, sub),
        Some(("validate", sub)) => handle_validate(&config, sub),
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn load_config(matches: &ArgMatches) -> Result<SiteConfig> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader.build().context("Failed to load configuration")
}

fn load_directory(config: &SiteConfig) -> Result<SectionDirectory> {
    let path = &config.site.contents_path;
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read contents file {}", path.display()))?;
    SectionDirectory::from_json(&source)
        .with_context(|| format!("Invalid contents file {}", path.display()))
}

/// Navigation and link titles degrade gracefully without a contents file.
fn directory_or_empty(config: &SiteConfig) -> SectionDirectory {
    load_directory(config).unwrap_or_else(|err| {
        tracing::warn!("{:#}", err);
        SectionDirectory::default()
    })
}

fn text_view(config: &SiteConfig, matches: &ArgMatches) -> Result<TextView> {
    match matches.get_one::<String>("view") {
        Some(view) => view.parse().map_err(anyhow::Error::msg),
        None => Ok(config.render.text_view),
    }
}

fn client(config: &SiteConfig) -> Result<ApiClient> {
    ApiClient::new(&config.api.base_url)
        .with_context(|| format!("Invalid API base URL {}", config.api.base_url))
}

async fn handle_page(config: &SiteConfig, matches: &ArgMatches) -> Result<()> {
    let name = matches
        .get_one::<String>("name")
        .context("page name is required")?;
    let directory = directory_or_empty(config);
    let links = config.site.links();
    let client = client(config)?;

    let mut page = PageInstance::load(name.as_str(), &client, Arc::new(client.clone())).await;
    page.settle_all().await;

    let shell = PageShell {
        text_view: text_view(config, matches)?,
        ..PageShell::new(&directory, &links)
    };
    let html = render_page(page.name(), page.status(), page.glosses(), &shell)?;
    println!("{}", to_html(&[html])?);
    Ok(())
}

async fn handle_render(config: &SiteConfig, matches: &ArgMatches) -> Result<()> {
    let file = matches
        .get_one::<String>("file")
        .context("file is required")?;
    let name = match matches.get_one::<String>("name") {
        Some(name) => name.clone(),
        None => Path::new(file)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };

    let source = std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))?;
    let document = Document::from_json(&source).with_context(|| format!("Failed to decode {}", file))?;

    let glosses = if matches.get_flag("offline") {
        Default::default()
    } else {
        let client = Arc::new(client(config)?);
        GlossLoader::spawn(client, collect_requests(&document))
            .settle_all()
            .await
    };

    let directory = directory_or_empty(config);
    let links = config.site.links();
    let shell = PageShell {
        text_view: text_view(config, matches)?,
        ..PageShell::new(&directory, &links)
    };
    let html = render_page(&name, &PageStatus::Loaded(document), &glosses, &shell)?;
    println!("{}", to_html(&[html])?);
    Ok(())
}

async fn handle_gloss(config: &SiteConfig, matches: &ArgMatches) -> Result<()> {
    let outline = matches
        .get_one::<String>("outline")
        .context("outline is required")?;
    let language = matches
        .get_one::<String>("language")
        .context("language has a default")?;
    let directive = match matches.get_one::<String>("rows") {
        Some(rows) => format!("{};{}", language, rows),
        None => language.clone(),
    };
    let mut lines = vec![outline.clone()];
    if let Some(translation) = matches.get_one::<String>("translation") {
        lines.extend([String::new(), translation.clone()]);
    }

    let footer = if matches.get_flag("copy-link") {
        FooterStyle::CopyLink
    } else {
        FooterStyle::OpenInBuilder
    };

    let gloss = BlockGloss::from_code_fence(&directive, &lines);
    let cache = GlossLoader::spawn(Arc::new(client(config)?), [gloss.params.clone()])
        .settle_all()
        .await;

    let html = render_block_gloss(
        &gloss,
        cache.get(&gloss.params),
        &config.site.links(),
        footer,
    )?;
    println!("{}", to_html(&[html])?);
    Ok(())
}

fn handle_link(config: &SiteConfig, matches: &ArgMatches) -> Result<()> {
    if let Some(query) = matches.get_one::<String>("decode") {
        let link = BuilderLink::from_query(query);
        println!("outline: {}", link.outline);
        println!("language: {}", link.language);
        println!("translation: {}", link.translation);
        return Ok(());
    }

    let get = |id: &str| {
        matches
            .get_one::<String>(id)
            .cloned()
            .with_context(|| format!("{} is required", id))
    };
    let link = BuilderLink::new(get("outline")?, get("language")?, get("translation")?);
    println!("{}", config.site.links().builder_url(&link));
    Ok(())
}

fn handle_contents(config: &SiteConfig, matches: &ArgMatches) -> Result<()> {
    let directory = load_directory(config)?;
    if matches.get_flag("html") {
        println!(
            "{}",
            to_html(&[render_contents(&directory, &config.site.links())])?
        );
        return Ok(());
    }

    for entry in directory.outline() {
        println!("{}{}", "  ".repeat(entry.depth() - 1), entry.label());
    }
    Ok(())
}

fn handle_validate(config: &SiteConfig, matches: &ArgMatches) -> Result<()> {
    let directory = load_directory(config)?;
    let mut problems = 0;

    for file in matches.get_many::<String>("files").into_iter().flatten() {
        let source = std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))?;
        let document =
            Document::from_json(&source).with_context(|| format!("Failed to decode {}", file))?;
        for problem in validate_links(&document, &directory) {
            eprintln!("{}: {}", file, problem);
            problems += 1;
        }
    }

    if problems > 0 {
        bail!("{} link problem(s) found", problems);
    }
    Ok(())
}
