use anyhow::{Context, Result, bail};
use clap::Parser;
use lessonmark_config::Config;
use lessonmark_engine::{RenderOptions, parse_document, standalone_page, transform_with};
use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

/// Render lesson-plan text as HTML.
#[derive(Debug, Parser)]
#[command(name = "lessonmark", version, about)]
struct Cli {
    /// Lesson text file to render; `-` or nothing reads stdin
    input: Option<PathBuf>,

    /// Write HTML to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/lessonmark/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Wrap the fragment in a standalone HTML document
    #[arg(long)]
    standalone: bool,

    /// Page title for standalone output
    #[arg(long)]
    title: Option<String>,

    /// Render the first row of each table as header cells
    #[arg(long)]
    table_header: bool,

    /// Keep `[ ]` / `[x]` list prefixes as literal text
    #[arg(long)]
    no_task_markers: bool,
}

impl Cli {
    /// Input file path, or `None` for stdin.
    fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|p| *p != Path::new("-"))
    }
}

/// Everything needed to turn one lesson into output text.
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    options: RenderOptions,
    standalone: bool,
    title: Option<String>,
    fallback_title: String,
}

impl Settings {
    /// Command-line flags override config values.
    fn resolve(cli: &Cli, config: &Config) -> Self {
        let mut options = config.render_options();
        if cli.table_header {
            options.table_header = true;
        }
        if cli.no_task_markers {
            options.task_markers = false;
        }
        Self {
            options,
            standalone: cli.standalone || config.output.standalone,
            title: cli.title.clone(),
            fallback_title: config.output.title.clone(),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => {
                log::info!("Loaded config from {}", path.display());
                Ok(config)
            }
            None => bail!("Config file not found: {}", path.display()),
        },
        None => {
            let default_path = Config::config_path();
            let config = Config::load()?;
            if config.is_some() {
                log::info!("Loaded config from {}", default_path.display());
            } else {
                log::debug!("No config at {}, using defaults", default_path.display());
            }
            Ok(config.unwrap_or_default())
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            log::debug!("Reading lesson from {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {}", path.display()))
        }
        None => {
            log::debug!("Reading lesson from stdin");
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read lesson text from stdin")?;
            Ok(buf)
        }
    }
}

/// Renders the lesson, wrapping it in a page when requested.
///
/// The page title is the explicit title, else the lesson's first level-1
/// heading, else the configured fallback.
fn render(source: &str, settings: &Settings) -> String {
    let fragment = transform_with(source, &settings.options);
    let mut out = if settings.standalone {
        let doc = parse_document(source);
        let title = settings
            .title
            .as_deref()
            .or_else(|| doc.title(source))
            .unwrap_or(settings.fallback_title.as_str());
        standalone_page(title, &fragment)
    } else {
        fragment
    };
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Where output goes: explicit path, else `<output_dir>/<stem>.html` for file
/// input, else stdout (`None`).
fn resolve_destination(
    output: Option<&Path>,
    input: Option<&Path>,
    output_dir: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(output) = output {
        return Some(output.to_path_buf());
    }
    let stem = input?.file_stem()?;
    let dir = output_dir?;
    Some(dir.join(format!("{}.html", stem.to_string_lossy())))
}

fn write_output(destination: Option<&Path>, html: &str) -> Result<()> {
    match destination {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory {}", parent.display())
                })?;
            }
            fs::write(path, html)
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            log::info!("Wrote {} bytes to {}", html.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, &config);
    log::debug!("Render settings: {settings:?}");

    let source = read_input(cli.input_path())?;
    let html = render(&source, &settings);

    let destination = resolve_destination(
        cli.output.as_deref(),
        cli.input_path(),
        config.output.output_dir.as_deref(),
    );
    write_output(destination.as_deref(), &html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lessonmark_config::{OutputConfig, RenderConfig};
    use pretty_assertions::assert_eq;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("lessonmark").chain(args.iter().copied()))
    }

    fn settings(standalone: bool, title: Option<&str>) -> Settings {
        Settings {
            options: RenderOptions::default(),
            standalone,
            title: title.map(str::to_string),
            fallback_title: "Lesson Plan".to_string(),
        }
    }

    #[test]
    fn dash_means_stdin() {
        assert_eq!(cli(&["-"]).input_path(), None);
        assert_eq!(cli(&[]).input_path(), None);
        assert_eq!(
            cli(&["lesson.txt"]).input_path(),
            Some(Path::new("lesson.txt"))
        );
    }

    #[test]
    fn flags_override_config() {
        let config = Config {
            render: RenderConfig {
                task_markers: true,
                table_header: false,
            },
            output: OutputConfig {
                standalone: false,
                title: "From config".to_string(),
                output_dir: None,
            },
        };
        let resolved = Settings::resolve(
            &cli(&["--table-header", "--no-task-markers", "--standalone"]),
            &config,
        );
        assert_eq!(
            resolved.options,
            RenderOptions {
                task_markers: false,
                table_header: true,
            }
        );
        assert!(resolved.standalone);
        assert_eq!(resolved.fallback_title, "From config");
    }

    #[test]
    fn config_applies_without_flags() {
        let config = Config {
            render: RenderConfig {
                task_markers: false,
                table_header: true,
            },
            output: OutputConfig {
                standalone: true,
                ..OutputConfig::default()
            },
        };
        let resolved = Settings::resolve(&cli(&[]), &config);
        assert!(!resolved.options.task_markers);
        assert!(resolved.options.table_header);
        assert!(resolved.standalone);
    }

    #[test]
    fn fragment_output_ends_with_newline() {
        assert_eq!(render("# T", &settings(false, None)), "<h1>T</h1>\n");
        assert_eq!(render("", &settings(false, None)), "");
    }

    #[test]
    fn standalone_title_precedence() {
        let src = "## Intro\n# Ecosystems\ntext";
        assert!(render(src, &settings(true, Some("Given"))).contains("<title>Given</title>"));
        assert!(render(src, &settings(true, None)).contains("<title>Ecosystems</title>"));
        assert!(render("text", &settings(true, None)).contains("<title>Lesson Plan</title>"));
    }

    #[test]
    fn destination_resolution() {
        let out = Path::new("out.html");
        let input = Path::new("plans/week1.txt");
        let dir = Path::new("/srv/html");

        assert_eq!(
            resolve_destination(Some(out), Some(input), Some(dir)),
            Some(PathBuf::from("out.html"))
        );
        assert_eq!(
            resolve_destination(None, Some(input), Some(dir)),
            Some(PathBuf::from("/srv/html/week1.html"))
        );
        assert_eq!(resolve_destination(None, None, Some(dir)), None);
        assert_eq!(resolve_destination(None, Some(input), None), None);
    }
}
