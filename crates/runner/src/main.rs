use stalk_runner::{Command, Session, USAGE, parse_args, watch};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    match command {
        Command::Help => {
            eprintln!("{}", USAGE);
        }
        Command::Forecast {
            config,
            observations,
        } => {
            let format = config.format;
            let mut session = Session::new(config)?;
            println!("{}", session.report(&observations).render(format)?);
        }
        Command::Watch { config } => {
            log::info!("Watching stdin (debounce {} ms)", config.debounce_ms);
            let session = Session::new(config)?;
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let handled = watch(stdin, session, |text| println!("{}", text)).await;
            log::info!("Input closed after {} forecasts", handled);
        }
    }

    Ok(())
}
