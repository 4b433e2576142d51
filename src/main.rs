//! Patternbook - catalog browser for UI patterns and visual effects
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --route categories/navigation
//! cargo run -- --route categories/navigation/hamburger-menu
//! cargo run -- --list
//! ```

use clap::Parser;
use gpui::*;

use patternbook::browser::CatalogBrowser;
use patternbook::route::Route;
use patternbook::theme::{Appearance, Theme};
use patternbook::{catalog, config, logging};

#[derive(Parser, Debug)]
#[command(name = "patternbook", about = "A field guide to UI patterns", version)]
struct Cli {
    /// Open at a catalog route, e.g. "categories/input/slider"
    #[arg(short, long)]
    route: Option<String>,

    /// Print the catalog (category/slug and name) and exit
    #[arg(short, long)]
    list: bool,

    /// Override the saved theme preference: system, light, or dark
    #[arg(short, long)]
    theme: Option<String>,
}

fn parse_theme_flag(flag: &str) -> Option<Appearance> {
    match flag {
        "system" => Some(Appearance::System),
        "light" => Some(Appearance::Light),
        "dark" => Some(Appearance::Dark),
        _ => None,
    }
}

fn main() {
    let cli = Cli::parse();

    // Keep the guard alive for the whole program so logs flush on exit
    let _logging_guard = logging::init();

    if cli.list {
        for entry in catalog::all() {
            println!("{}/{}\t{}", entry.category, entry.slug, entry.name);
        }
        return;
    }

    let saved = config::load();
    let appearance = match cli.theme.as_deref() {
        Some(flag) => parse_theme_flag(flag).unwrap_or_else(|| {
            tracing::warn!(flag, "Unknown theme flag, using saved preference");
            saved.appearance
        }),
        None => saved.appearance,
    };

    // Unknown routes still open the window: the browser renders its
    // not-found view with links back to known categories
    let initial_route = Route::parse(cli.route.as_deref().unwrap_or(""));
    tracing::info!(route = %initial_route.path(), "Opening catalog");

    let window_size = size(px(saved.window.width), px(saved.window.height));

    Application::new().run(move |cx| {
        cx.set_global(Theme::from_appearance(appearance));

        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                window_size,
                cx,
            ))),
            titlebar: Some(TitlebarOptions {
                title: Some("Patternbook".into()),
                appears_transparent: false,
                ..Default::default()
            }),
            window_min_size: Some(size(px(800.), px(600.))),
            focus: true,
            show: true,
            kind: WindowKind::Normal,
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            cx.new(|cx| CatalogBrowser::new(initial_route.clone(), cx))
        })
        .expect("Failed to open catalog window");
    });
}
