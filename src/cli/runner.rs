use clap::Parser;
use serde_json::json;

use crate::config::{Settings, load_settings};
use crate::runtime::AppContext;

use super::types::{Cli, Commands};

fn print_json(value: &impl serde::Serialize) -> Result<(), String> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).map_err(|error| error.to_string())?
    );
    Ok(())
}

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();
    let settings = match &cli.config {
        Some(path) => load_settings(path).map_err(|error| error.to_string())?,
        None => Settings::default(),
    };
    let app = AppContext::new(settings);

    match cli.command {
        Commands::Info { plots } => {
            let plots = app
                .stack_service()
                .load_plots(&plots)
                .map_err(|error| error.to_string())?;
            let stack = app
                .stack_service()
                .build(&plots)
                .map_err(|error| error.to_string())?;
            print_json(&app.stack_service().summary(&stack))?;
        }
        Commands::Render {
            plots,
            slice,
            output,
        } => {
            let plots = app
                .stack_service()
                .load_plots(&plots)
                .map_err(|error| error.to_string())?;
            let stack = app
                .stack_service()
                .build(&plots)
                .map_err(|error| error.to_string())?;
            app.stack_service()
                .render_slice(&stack, slice, &output)
                .map_err(|error| error.to_string())?;
            println!("{}", json!({"status": "ok", "slice": slice, "output": output}));
        }
        Commands::Export { plots, output_dir } => {
            let plots = app
                .stack_service()
                .load_plots(&plots)
                .map_err(|error| error.to_string())?;
            let stack = app
                .stack_service()
                .build(&plots)
                .map_err(|error| error.to_string())?;
            let written = app
                .stack_service()
                .export(&stack, &output_dir)
                .map_err(|error| error.to_string())?;
            println!("{}", json!({"status": "ok", "written": written}));
        }
        Commands::Brush {
            stroke,
            output,
            diameter,
        } => {
            let stroke = app
                .brush_service()
                .load_stroke(&stroke)
                .map_err(|error| error.to_string())?;
            let (target, report) = app
                .brush_service()
                .replay(&stroke, diameter)
                .map_err(|error| error.to_string())?;
            app.brush_service()
                .save_mask(&target, &output)
                .map_err(|error| error.to_string())?;
            print_json(&report)?;
        }
        Commands::Defaults => print_json(app.settings())?,
    }

    Ok(())
}
