use std::{io::{BufRead, Write}, path::Path};

use anyhow::Context;
use cardpager_common::{sample, MemorySurface, PagerConfig, Session, DEFAULT_CONFIG};
use tracing::{info, Level};
use tracing_subscriber::fmt::{writer::Tee, MakeWriter};

mod view;

/// Default config path
const DEF_CONFIG_FILE: &str = "cardpager.toml";

/// Command read from stdin
#[derive(Debug, PartialEq)]
enum Command {
    /// Activate button with this page label
    Page(u32),
    First,
    Last,
    Quit,
    Unknown,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let cmd = match line.trim() {
            "" => return None,
            "q" | "quit" => Self::Quit,
            "first" => Self::First,
            "last" => Self::Last,
            other => other.parse().map_or(Self::Unknown, Self::Page),
        };
        Some(cmd)
    }
}

fn init_logging<W>(writer: W, level: Level)
where W: for<'w> MakeWriter<'w> + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_file(true)
        .with_line_number(true)
        .with_max_level(level)
        .init();
}

fn print_view(out: &mut impl Write, items: &MemorySurface, buttons: &MemorySurface) -> std::io::Result<()> {
    writeln!(out)?;
    for line in view::item_lines(&items.fragments()) {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "\n  {}", view::button_line(&buttons.fragments()))?;
    write!(out, "page number, first, last or q > ")?;
    out.flush()
}

fn main() -> anyhow::Result<()> {
    let cfg_path = match std::env::args().nth(1) {
        Some(p) => p,
        None => DEF_CONFIG_FILE.to_string()
    };

    if !Path::new(&cfg_path).exists() {
        std::fs::write(&cfg_path, DEFAULT_CONFIG)?;
    }

    let cfg_str = std::fs::read_to_string(&cfg_path)
        .with_context(|| format!("failed to read {cfg_path}"))?;
    let config = PagerConfig::from_toml_str(&cfg_str)?;
    let level = config.log_level()?;

    match &config.log_file {
        Some(path) => {
            let log_file = std::fs::File::options()
                .append(true)
                .create(true)
                .open(path)?;
            init_logging(Tee::new(std::io::stderr, log_file), level);
        }
        None => init_logging(std::io::stderr, level),
    }

    let items = MemorySurface::new();
    let buttons = MemorySurface::new();
    let session = Session::from_config(
        sample::records(),
        sample::card,
        &config,
        items.clone(),
        buttons.clone(),
    );

    info!(page_size = config.page_size, "Starting preview");
    session.paginate()?;

    let mut stdout = std::io::stdout().lock();
    print_view(&mut stdout, &items, &buttons)?;

    for line in std::io::stdin().lock().lines() {
        let activated = match Command::parse(&line?) {
            None => true,
            Some(Command::Quit) => break,
            Some(Command::Page(page)) => buttons.activate_page(page),
            Some(Command::First) => buttons.activate("page-button first"),
            Some(Command::Last) => buttons.activate("page-button last"),
            Some(Command::Unknown) => false,
        };

        if !activated {
            writeln!(stdout, "no such button")?;
        }
        print_view(&mut stdout, &items, &buttons)?;
    }

    info!(page = session.current_page(), renders = session.render_count(), "Preview closed");
    Ok(())
}

#[test]
fn test_command_parse() {
    assert_eq!(Command::parse(" 12 "), Some(Command::Page(12)));
    assert_eq!(Command::parse("first"), Some(Command::First));
    assert_eq!(Command::parse("q"), Some(Command::Quit));
    assert_eq!(Command::parse("-1"), Some(Command::Unknown));
    assert_eq!(Command::parse("  "), None);
}
