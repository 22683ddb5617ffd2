use clap::{Parser, Subcommand};
use colored::*;
use pf_effects::console;
use pf_navigation::controller::Transition;
use pf_navigation::settings::{BindingPolicy, ReentrancyPolicy, UnknownViewPolicy};
use pf_navigation::site::SiteDefinition;
use pf_navigation::{
    animation_fn, IndicatorId, NavigationKey, Navigator, PresentationCommand, ViewController,
    ViewId,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

type Recorder = Vec<PresentationCommand>;

#[derive(Parser)]
struct Cli {
    /// Drive a site's navigation from the command line
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Replay navigation events and print what the presentation layer is told
    Navigate {
        /// File path to a site definition, the built-in portfolio when omitted
        #[arg(short, long)]
        site: Option<String>,

        /// Ignore unknown views and allow views without indicators
        #[arg(long)]
        lenient: bool,

        /// Queue activations requested by animations instead of rejecting them
        #[arg(long)]
        defer: bool,

        /// Stop at the first and last view instead of wrapping around
        #[arg(long)]
        no_wrap: bool,

        /// Initial view as a location anchor, e.g. `#skills`
        #[arg(short, long)]
        anchor: Option<String>,

        /// Events to replay: go:<view>, click:<n>, key:<name>, visible:<view>
        #[arg(value_parser = parse_event)]
        events: Vec<Event>,
    },
    /// Validate a site definition file
    Check {
        /// File path to the site definition
        #[arg(short, long)]
        site: String,
    },
    /// Print the built-in portfolio site definition
    Site,
    /// Print the console greeting
    Hello,
}

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Go(String),
    Click(usize),
    Key(String),
    Visible(String),
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::Go(view) => write!(f, "go:{}", view),
            Event::Click(indicator) => write!(f, "click:{}", indicator),
            Event::Key(key) => write!(f, "key:{}", key),
            Event::Visible(view) => write!(f, "visible:{}", view),
        }
    }
}

fn parse_event(s: &str) -> Result<Event, String> {
    let Some((kind, value)) = s.split_once(':') else {
        return Err(format!("expected <kind>:<value>, got '{}'", s));
    };

    if value.is_empty() {
        return Err(format!("missing value in '{}'", s));
    }

    match kind {
        "go" => Ok(Event::Go(value.to_string())),
        "click" => value
            .parse()
            .map(Event::Click)
            .map_err(|e| format!("invalid indicator '{}': {}", value, e)),
        "key" => Ok(Event::Key(value.to_string())),
        "visible" => Ok(Event::Visible(value.to_string())),
        _ => Err(format!(
            "unknown event kind '{}', expected go, click, key or visible",
            kind
        )),
    }
}

fn load_site(path: Option<&str>) -> SiteDefinition {
    match path {
        Some(path) => match SiteDefinition::load(std::path::Path::new(path)) {
            Ok(site) => site,
            Err(e) => {
                println!("{}: {}", "Could not load site".red().bold(), e);
                std::process::exit(1);
            }
        },
        None => SiteDefinition::portfolio(),
    }
}

/// Controller whose animations only announce themselves
fn build_controller(
    site: &SiteDefinition,
    lenient: bool,
    defer: bool,
    wrap: bool,
    anchor: Option<&str>,
) -> pf_navigation::Result<ViewController<Recorder>> {
    let mut settings = site.settings.clone();
    if lenient {
        settings.unknown_view = UnknownViewPolicy::Ignore;
        settings.bindings = BindingPolicy::Tolerant;
    }
    if defer {
        settings.reentrancy = ReentrancyPolicy::Defer;
    }
    settings.wrap = settings.wrap && wrap;

    let builder = site.views.iter().fold(
        site.builder::<Recorder>().settings(settings),
        |builder, view| {
            builder.on_activate(
                &view.id,
                animation_fn(|view: &ViewId, _: &mut Recorder, _: &mut Navigator<'_>| {
                    println!("  {} {}", "▶ animate".cyan(), view);
                }),
            )
        },
    );

    match anchor {
        Some(anchor) => builder.initial_anchor(anchor).build(),
        None => builder.build(),
    }
}

/// Applies one event. `Ok(None)` covers ignored requests and keys that lead
/// nowhere.
fn apply(
    controller: &mut ViewController<Recorder>,
    event: &Event,
    recorder: &mut Recorder,
) -> pf_navigation::Result<Option<Transition>> {
    match event {
        Event::Go(view) => controller.activate(view, recorder),
        Event::Click(indicator) => controller.on_indicator_click(IndicatorId(*indicator), recorder),
        Event::Key(name) => match NavigationKey::from_key_name(name) {
            Some(key) => controller.on_key(key, recorder),
            None => {
                println!("  {} {}", "ignored key".yellow(), name);
                Ok(None)
            }
        },
        Event::Visible(view) => controller.on_visible(view, recorder),
    }
}

fn print_commands(recorder: &mut Recorder) {
    for command in recorder.drain(..) {
        println!("  {}", command);
    }
}

fn navigate(
    site: &SiteDefinition,
    lenient: bool,
    defer: bool,
    wrap: bool,
    anchor: Option<&str>,
    events: &[Event],
) {
    let mut controller = match build_controller(site, lenient, defer, wrap, anchor) {
        Ok(controller) => controller,
        Err(e) => {
            println!("{}: {}", "Invalid site".red().bold(), e);
            std::process::exit(1);
        }
    };

    let mut recorder = vec![];

    println!("{}", "start".bold());
    if let Err(e) = controller.start(&mut recorder) {
        println!("  {}", e.to_string().red());
    }
    print_commands(&mut recorder);

    let mut failures = 0;
    for event in events {
        println!("{}", event.to_string().bold());

        match apply(&mut controller, event, &mut recorder) {
            Ok(Some(transition)) if transition.is_self_transition() => {
                println!("  {} {}", "already active".yellow(), transition.to)
            }
            Ok(Some(_)) => {}
            Ok(None) => println!("  {}", "no change".yellow()),
            Err(e) => {
                failures += 1;
                println!("  {}", e.to_string().red());
            }
        }
        print_commands(&mut recorder);
    }

    println!();
    println!(
        "{} {}",
        "Active view:".green().bold(),
        controller.active_view()
    );
    if failures > 0 {
        println!("{} {}", "Rejected events:".red().bold(), failures);
    }

    controller.teardown(&mut recorder);
}

fn check(path: &str) {
    let site = load_site(Some(path));

    match build_controller(&site, false, false, true, None) {
        Ok(controller) => {
            println!("{}", "Site definition is valid".green());
            println!("Title: {}", site.title);
            println!("Views: {}", controller.views().len());
            println!("Indicators: {}", controller.indicators().len());
        }
        Err(e) => {
            println!("{}: {}", "Invalid site".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn hello() {
    println!("{}", console::BANNER);
    println!("{}", console::HIRE_ME.bold().purple());
    println!(
        "{}",
        console::random_joke(&mut rand::thread_rng()).green().italic()
    );
}

fn main() {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Navigate {
            site,
            lenient,
            defer,
            no_wrap,
            anchor,
            events,
        } => {
            let site = load_site(site.as_deref());
            info!(site = site.title.as_str(), events = events.len(), "Replaying events");

            navigate(&site, lenient, defer, !no_wrap, anchor.as_deref(), &events);
        }
        Commands::Check { site } => check(&site),
        Commands::Site => match SiteDefinition::portfolio().to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                println!("{}: {}", "Could not serialize site".red(), e);
                std::process::exit(1);
            }
        },
        Commands::Hello => hello(),
    }
}
