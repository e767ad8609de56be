use clap::{Parser, ValueEnum};
use flowblox::palette::palette;
use flowblox::prelude::*;
use flowblox::render::svg::visualize_frame;
use flowblox::script::{ScriptRunner, ScriptStep, load_script_file};
use std::fs;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Output format for the final frame.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatCli {
    Json,
    Svg,
    Summary,
}

/// Replays recorded workflow-canvas sessions and prints the resulting frame
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a JSON event script (an array of steps)
    script_path: Option<String>,

    /// Optional JSON file with canvas settings (node size, viewport width, spacing)
    #[arg(short, long)]
    config: Option<String>,

    /// How to print the final frame
    #[arg(short, long, value_enum, default_value = "summary")]
    format: FormatCli,

    /// Write the frame to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Print the add-node palette and exit
    #[arg(long)]
    palette: bool,

    /// Read steps from stdin one JSON object per line
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if cli.palette {
        print_palette();
        return;
    }

    let config = cli
        .config
        .as_deref()
        .map(load_config)
        .unwrap_or_default();
    let mut editor = Editor::builder().with_config(config).build();

    if cli.human {
        run_interactive(&mut editor);
    } else {
        let script_path = cli.script_path.as_deref().unwrap_or_else(|| {
            exit_with_error("A script path is required in non-interactive mode.")
        });
        run_script(&mut editor, script_path);
    }

    emit_frame(&editor, cli.format, cli.output.as_deref());
}

fn load_config(path: &str) -> EditorConfig {
    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read config file '{}': {}", path, e))
    });
    serde_json::from_str(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse config JSON: {}", e)))
}

fn run_script(editor: &mut Editor, script_path: &str) {
    let steps = load_script_file(script_path).unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let step_count = steps.len();

    let start = Instant::now();
    let outcomes = ScriptRunner::new(editor).run(steps);
    let duration = start.elapsed();

    let ignored = outcomes
        .iter()
        .filter(|o| matches!(o, EventOutcome::Ignored))
        .count();
    let rejected = outcomes
        .iter()
        .filter(|o| matches!(o, EventOutcome::Commit(CommitOutcome::Rejected(_))))
        .count();

    eprintln!(
        "Replayed {} steps in {:?} ({} ignored, {} rejected connections)",
        step_count, duration, ignored, rejected
    );
}

/// Reads one step per line until EOF, reporting each outcome.
fn run_interactive(editor: &mut Editor) {
    println!("--- Flowblox Interactive Mode ---");
    println!("Enter one JSON step per line, e.g. {{\"step\": \"append_node\", \"name\": \"a\", \"type\": \"input\"}}");
    println!("End input with Ctrl-D.");

    let mut runner = ScriptRunner::new(editor);
    let stdin = io::stdin();
    prompt();
    for line in stdin.lock().lines() {
        let line = line.unwrap_or_else(|e| exit_with_error(&format!("Failed to read input: {}", e)));
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            match serde_json::from_str::<ScriptStep>(trimmed) {
                Ok(step) => println!("  -> {:?}", runner.step(step)),
                Err(e) => println!("  -> Invalid step: {}", e),
            }
        }
        prompt();
    }
    println!();
}

fn prompt() {
    print!("> ");
    // A failed flush only delays the prompt.
    let _ = io::stdout().flush();
}

fn emit_frame(editor: &Editor, format: FormatCli, output: Option<&str>) {
    let frame = editor.frame();
    let rendered = match format {
        FormatCli::Json => serde_json::to_string_pretty(&frame)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize frame: {}", e))),
        FormatCli::Svg => visualize_frame(&frame),
        FormatCli::Summary => summarize(&frame),
    };

    match output {
        Some(path) => fs::write(path, rendered).unwrap_or_else(|e| {
            exit_with_error(&format!("Could not write to file '{}': {}", path, e))
        }),
        None => print!("{}", rendered),
    }
}

fn summarize(frame: &RenderFrame) -> String {
    let mut out = String::from("\n--- Workflow ---\n");
    for node in &frame.nodes {
        let marker = if node.selected { "*" } else { " " };
        out.push_str(&format!(
            "{} [{}] {:<28} {:>8} at {}\n",
            marker,
            node.node_type,
            node.title,
            node.id.short(),
            node.position
        ));
    }
    out.push_str(&format!("\nConnections: {}\n", frame.connections.len()));
    for connection in &frame.connections {
        let title = |id: NodeId| {
            frame
                .node(id)
                .map(|n| n.title.as_str())
                .unwrap_or("?")
        };
        out.push_str(&format!(
            "  {} -> {}\n",
            title(connection.source_id),
            title(connection.target_id)
        ));
    }
    if let Some(draft) = &frame.draft {
        out.push_str(&format!(
            "\nDraft in progress from {} to {}\n",
            draft.source_id.short(),
            draft.cursor
        ));
    }
    out.push_str(&format!("Can append: {}\n", frame.can_append));
    out
}

fn print_palette() {
    for category in palette() {
        println!("{}", category.name);
        for item in category.items {
            println!("  {:<18} {:<7} {}", item.label, item.node_type, item.icon);
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
