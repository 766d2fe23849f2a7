use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tiptrigger::app::{App, Popup};
use tiptrigger::config::{self, Overrides};
use tiptrigger::tooltip::{self, Position, TooltipConfig};
use tiptrigger::ui;

#[derive(Parser, Debug)]
#[command(name = "tiptrigger")]
#[command(version = "0.1.0")]
#[command(about = "Render hover tooltips as HTML, or preview them in the terminal")]
struct Args {
    /// Tooltip config file (TOML); defaults to ~/.config/tiptrigger/tooltip.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Text shown inside the overlay
    #[arg(long)]
    text: Option<String>,

    /// Side of the trigger the overlay is anchored to
    #[arg(short, long, value_enum)]
    position: Option<Position>,

    /// Overlay minimum width (pass "" to drop it)
    #[arg(long)]
    min_width: Option<String>,

    /// Overlay text colour
    #[arg(long)]
    text_color: Option<String>,

    /// Overlay background colour
    #[arg(long)]
    bg_color: Option<String>,

    /// Extra class on the trigger container
    #[arg(long = "class")]
    class_name: Option<String>,

    /// Extra class on the overlay's inner box
    #[arg(long = "inner-class")]
    inner_class_name: Option<String>,

    /// Attribute forwarded to the trigger container (repeatable)
    #[arg(short, long = "attr", value_name = "NAME=VALUE", value_parser = config::parse_attr)]
    attrs: Vec<(String, String)>,

    /// Print the rendered HTML instead of starting the preview
    #[arg(long)]
    html: bool,

    /// With --html, wrap the markup in a document with the stylesheet
    #[arg(long, requires = "html")]
    standalone: bool,

    /// Print the rendered tree as JSON
    #[arg(long, conflicts_with = "html")]
    json: bool,

    /// Write the effective config to the default config path
    #[arg(long)]
    init: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            content: self.text.clone(),
            position: self.position,
            min_width: self.min_width.clone(),
            text_color: self.text_color.clone(),
            bg_color: self.bg_color.clone(),
            class_name: self.class_name.clone(),
            inner_class_name: self.inner_class_name.clone(),
            attributes: self.attrs.clone(),
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging (stderr keeps the preview screen clean)
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut tooltip_config = config::load(args.config.as_deref())?;
    args.overrides().apply(&mut tooltip_config);

    // Handle CLI-only commands
    if args.init {
        return init_config(&tooltip_config);
    }

    if args.html {
        return print_html(&tooltip_config, args.standalone);
    }

    if args.json {
        return print_json(&tooltip_config);
    }

    run_tui(tooltip_config, args.config)
}

fn init_config(tooltip_config: &TooltipConfig) -> Result<()> {
    let path = config::default_path()?;
    config::save(tooltip_config, &path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn print_html(tooltip_config: &TooltipConfig, standalone: bool) -> Result<()> {
    let markup = tooltip::render(tooltip_config).to_html();
    if standalone {
        println!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n{}</style>\n</head>\n<body>\n{}\n</body>\n</html>",
            tooltip::stylesheet(),
            markup
        );
    } else {
        println!("{}", markup);
    }
    Ok(())
}

fn print_json(tooltip_config: &TooltipConfig) -> Result<()> {
    let tree = tooltip::render(tooltip_config);
    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(())
}

fn run_tui(tooltip_config: TooltipConfig, save_path: Option<PathBuf>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(tooltip_config, save_path);
    tracing::info!("Starting preview");

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc if app.popup == Popup::None => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(event::KeyModifiers::CONTROL) => {
                        return Ok(())
                    }
                    _ => {
                        // Handle key and catch any errors to prevent crashes
                        if let Err(e) = app.handle_key(key) {
                            app.status_message = Some(format!("Error: {}", e));
                        }
                    }
                },
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        app.tick();
    }
}
