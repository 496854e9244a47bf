//! Main application entry point (native).
//!
//! Replays a short editing session and prints the resulting canvas markup.
//! Set `PAGECRAFT_CONFIG` to an editor configuration JSON to override defaults.

#[cfg(feature = "native")]
fn main() {
    use kurbo::{Point, Rect};
    use pagecraft_app::{App, AppConfig, HostEvent, PanelTab, ShortcutRegistry};
    use pagecraft_core::{CanvasEvent, ClickTarget, EditorField, ElementKind};

    env_logger::init();

    let config = match std::env::var("PAGECRAFT_CONFIG") {
        Ok(json) => match AppConfig::from_editor_json(&json) {
            Ok(config) => config,
            Err(err) => {
                log::error!("Invalid PAGECRAFT_CONFIG: {}", err);
                std::process::exit(1);
            }
        },
        Err(_) => AppConfig::default(),
    };
    log::info!("Starting {}", config.title);
    ShortcutRegistry::log_all();

    let mut app = App::new(config);
    app.handle(HostEvent::CanvasLayout(Some(Rect::new(
        240.0, 0.0, 1040.0, 800.0,
    ))));

    let drops = [
        (ElementKind::Heading, Point::new(340.0, 60.0)),
        (ElementKind::Paragraph, Point::new(340.0, 160.0)),
        (ElementKind::Button, Point::new(340.0, 260.0)),
    ];
    for (kind, pointer) in drops {
        let Some(entry) = app.palette().entry(kind) else {
            continue;
        };
        let start = entry.begin_drag(Point::new(40.0, 40.0));
        app.handle(HostEvent::Canvas(start));
        app.handle(HostEvent::Canvas(CanvasEvent::DragOver { pointer }));
        app.handle(HostEvent::Canvas(CanvasEvent::Drop { pointer }));
    }

    if let Some(heading) = app.session().all_elements().first().map(|e| e.id()) {
        app.handle(HostEvent::Canvas(CanvasEvent::Click {
            pointer: Point::new(350.0, 70.0),
            target: ClickTarget::Element(heading),
        }));
        app.handle(HostEvent::PanelInput {
            field: EditorField::Content,
            value: "Welcome to PageCraft".to_string(),
        });
        app.handle(HostEvent::PanelBlur);
        app.handle(HostEvent::SelectTab(PanelTab::Style));
        app.handle(HostEvent::PanelInput {
            field: EditorField::FontSize,
            value: "32px".to_string(),
        });
        app.handle(HostEvent::PanelBlur);
    }

    match app.render() {
        Ok(markup) => println!("{}", markup),
        Err(err) => {
            log::error!("Render failed: {}", err);
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
