use clap::{Arg, ArgAction, Command};
use colored::Colorize;
use std::error::Error;
use url_deeplink::{
    detect_os, generate_deep_link, log_deeplink_card, setup_logging, DeepLinkResult, LogConfig,
};

fn print_result(result: &DeepLinkResult, ua_os: url_deeplink::Os) {
    println!("\n{}", "Deep Link".bold().blue());
    println!("{}", "---------------".blue());
    println!("{}: {}", "Platform".bold(), result.platform);
    println!("{}: {}", "Web".bold(), result.web_url);

    if let Ok(host) = result.web_host() {
        println!("{}: {}", "Host".bold(), host);
    }

    match &result.ios {
        Some(ios) => println!("{}: {}", "iOS".bold(), ios),
        None => println!("{}: {}", "iOS".bold(), "none".dimmed()),
    }

    match &result.android {
        Some(android) => println!("{}: {}", "Android".bold(), android),
        None => println!("{}: {}", "Android".bold(), "none".dimmed()),
    }

    let chosen = result.link_for(ua_os).unwrap_or(result.web_url.as_str());
    println!("{} ({:?}): {}", "Opens".bold().green(), ua_os, chosen);
}

fn main() -> Result<(), Box<dyn Error>> {
    let matches = Command::new("deeplink_cli")
        .about("Turn platform web URLs into native app deep links")
        .arg(
            Arg::new("urls")
                .required(true)
                .num_args(1..)
                .help("URLs to convert"),
        )
        .arg(
            Arg::new("user-agent")
                .long("user-agent")
                .short('u')
                .help("User agent used to pick the iOS or Android link"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print results as JSON lines"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Log dispatch decisions and a result card per URL"),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    if verbose {
        setup_logging(LogConfig {
            log_level: "debug".into(),
            ..LogConfig::default()
        })?;
    }

    let os = detect_os(matches.get_one::<String>("user-agent").map(String::as_str));
    let as_json = matches.get_flag("json");

    for url in matches.get_many::<String>("urls").into_iter().flatten() {
        let result = generate_deep_link(url);
        if verbose {
            log_deeplink_card(&result);
        }

        if as_json {
            println!("{}", serde_json::to_string(&result)?);
        } else {
            print_result(&result, os);
        }
    }

    Ok(())
}
