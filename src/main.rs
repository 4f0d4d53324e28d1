use clap::{CommandFactory, Parser};
use text_to_prompt::app::{handle_fatal_error, initialize_app, AppConfig};
use text_to_prompt::cli::{execute_command, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let Some(command) = cli.command else {
        // No subcommand: show help like `--help` does
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!();
        return;
    };

    let app_config = AppConfig::new(verbose).with_config_path(cli.config);
    let result = match initialize_app(&app_config).await {
        Ok(app) => execute_command(command, &app).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        handle_fatal_error(e, verbose);
    }
}
