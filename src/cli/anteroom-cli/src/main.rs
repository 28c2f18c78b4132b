//! Anteroom CLI - interactive session shell.
//!
//! A terminal rendition of the single-page flow: bootstrap once, then move
//! between the login and dashboard routes as the session state changes.

use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use anteroom_cognito::{CognitoConfig, CognitoProvider};
use anteroom_session::ProviderError;
use anteroom_shell::{Dashboard, Navigator, Shell};

#[derive(Parser)]
#[command(name = "anteroom")]
#[command(about = "Anteroom - delegating authentication session shell")]
#[command(version)]
struct Cli {
    /// AWS region of the user pool
    #[arg(long, default_value = "eu-west-1", env = "COGNITO_REGION")]
    region: String,

    /// App client ID
    #[arg(long, env = "COGNITO_CLIENT_ID")]
    client_id: String,

    /// Identity provider endpoint override
    #[arg(long, env = "COGNITO_ENDPOINT")]
    endpoint: Option<String>,
}

/// Terminal navigator: a route change swaps the prompt.
struct RouteState {
    route: Mutex<String>,
}

impl RouteState {
    fn new() -> Self {
        Self {
            route: Mutex::new("/login".to_string()),
        }
    }

    fn current(&self) -> String {
        self.route.lock().expect("route lock poisoned").clone()
    }
}

impl Navigator for RouteState {
    fn navigate(&self, path: &str) {
        *self.route.lock().expect("route lock poisoned") = path.to_string();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = CognitoConfig::new(cli.region, cli.client_id);
    if let Some(endpoint) = cli.endpoint {
        config = config.with_endpoint(endpoint);
    }

    let mut shell = Shell::new();
    shell.bootstrap(Arc::new(CognitoProvider::new(config))).await?;
    let session = shell.session()?;

    let routes = RouteState::new();
    if session.is_authenticated().await {
        routes.navigate("/dashboard");
    }

    println!("anteroom - type 'help' for commands");

    let stdin = io::stdin();
    loop {
        print!("{}> ", routes.current());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("help") => {
                println!("commands: login <username>, whoami, logout, quit");
            }
            Some("login") => {
                let Some(username) = parts.next() else {
                    println!("usage: login <username>");
                    continue;
                };

                print!("password: ");
                io::stdout().flush()?;
                let mut password = String::new();
                stdin.lock().read_line(&mut password)?;
                let password = password.trim_end_matches(['\n', '\r']);

                match session.login(username, password).await {
                    Ok(principal) => {
                        routes.navigate("/dashboard");
                        println!("signed in as {}", principal.username());
                    }
                    Err(ProviderError::InvalidCredentials) => {
                        println!("login failed: invalid credentials");
                    }
                    Err(err) => println!("login failed: {err}"),
                }
            }
            Some("whoami") | Some("status") => {
                let dashboard = Dashboard::new(session, &routes);
                println!("{}", dashboard.greeting().await);
            }
            Some("logout") => {
                Dashboard::new(session, &routes).sign_out().await;
                println!("signed out");
            }
            Some("quit") | Some("exit") => break,
            Some(other) => println!("unknown command: {other}"),
            None => {}
        }
    }

    Ok(())
}
