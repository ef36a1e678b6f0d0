use std::fs;
use std::io::Read;
use std::process;

use clap::{Parser, Subcommand};

use keybar_cli::preview;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "bartool", about = "Suggestion bar composition diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compose a suggestion bar from a JSON suggestion list
    Preview {
        /// Path to the JSON file ("-" for stdin)
        input: String,
        /// Output the render model as JSON instead of a text preview
        #[arg(long)]
        json: bool,
        /// Apply a custom style TOML before rendering
        #[arg(long)]
        style: Option<String>,
    },

    /// Print the embedded default style TOML
    StyleExport,

    /// Validate a style TOML file
    StyleValidate {
        /// Path to the style TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::Preview { input, json, style } => run_preview(&input, json, style.as_deref()),
        Command::StyleExport => print!("{}", keybar_core::style::default_toml()),
        Command::StyleValidate { file } => run_style_validate(&file),
    }
}

fn run_preview(input: &str, json: bool, style: Option<&str>) {
    if let Some(path) = style {
        let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
        die!(keybar_core::style::init_custom(content), "Error: {}");
    }

    let data = if input == "-" {
        let mut buf = String::new();
        die!(
            std::io::stdin().read_to_string(&mut buf),
            "Error reading stdin: {}"
        );
        buf
    } else {
        die!(fs::read_to_string(input), "Error reading {input}: {}")
    };

    let suggestions = die!(preview::parse_suggestions(&data), "Error: {}");
    let bar = preview::standard_preview_bar(suggestions);
    let elements = bar.render();

    if json {
        let model = preview::render_model(&elements);
        println!("{}", die!(serde_json::to_string_pretty(&model), "Error: {}"));
    } else {
        println!("{}", preview::format_line(&elements));
    }
}

fn run_style_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let sheet = die!(keybar_core::style::parse_style_toml(&content), "Error: {}");
    println!(
        "OK: toolbar.height={}, toolbar.separator_height={}, callout.corner_radius={}",
        sheet.toolbar.height, sheet.toolbar.separator_height, sheet.callout.corner_radius
    );
}
