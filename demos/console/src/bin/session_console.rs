use auth_portal_client::prelude::*;
use std::error::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

const HELP: &str = "commands: show <section> | login <email> <password> | \
register <email> <username> <password> | profile | update <username> | \
refresh | logout | logout-all | revoke | deactivate | status | help | quit";

fn print_view(view: View) {
    let sections: Vec<String> = view
        .visibility()
        .into_iter()
        .map(|(name, shown)| if shown { format!("[{name}]") } else { name.to_string() })
        .collect();
    info!("view → {}", sections.join(" "));
}

fn print_value(label: &str, value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(rendered) => info!("{label}:\n{rendered}"),
        Err(_) => info!("{label}: {value}"),
    }
}

/// Event caused by a failed request, if any
fn report(error: &AppError) -> Option<ViewEvent> {
    match error {
        AppError::Unauthenticated => {
            warn!("Not logged in");
            None
        }
        AppError::RateLimitExceeded { retry_after, .. } => {
            warn!("Rate limited, retry after {:?}s", retry_after);
            None
        }
        e if e.is_unauthorized() => {
            warn!("Session expired: {}", e);
            Some(ViewEvent::SessionExpired)
        }
        e => {
            error!("Request failed: {}", e);
            None
        }
    }
}

async fn run(client: &SessionClient, view: View, words: &[&str]) -> Option<ViewEvent> {
    let outcome = match words {
        ["show", section] => match section.parse::<View>() {
            Ok(target) => return Some(ViewEvent::Navigate(target)),
            Err(e) => {
                warn!("{e}");
                return None;
            }
        },
        ["login", email, password] => client
            .login(email, password)
            .await
            .map(|_| Some(ViewEvent::LoggedIn)),
        ["register", email, username, password] => client
            .register(email, username, password)
            .await
            .map(|confirmation| {
                print_value("Registered", &confirmation);
                Some(ViewEvent::Registered)
            }),
        ["profile"] => client.get_profile().await.map(|profile| {
            info!("Profile: {}", profile);
            None
        }),
        ["update", username] => client
            .update_profile(&UserUpdate::username(*username))
            .await
            .map(|confirmation| {
                print_value("Updated", &confirmation);
                None
            }),
        ["refresh"] => client.refresh().await.map(|_| None),
        ["logout"] => client.logout().await.map(|_| Some(ViewEvent::LoggedOut)),
        ["logout-all"] => {
            let result = client.logout_all().await;
            if let Err(e) = &result {
                report(e);
            }
            return Some(ViewEvent::LoggedOut);
        }
        ["revoke"] => {
            let result = client.revoke().await;
            if let Err(e) = &result {
                report(e);
            }
            return Some(ViewEvent::LoggedOut);
        }
        ["deactivate"] => client
            .deactivate_account()
            .await
            .map(|_| Some(ViewEvent::LoggedOut)),
        ["status"] => {
            let session = client.session().await;
            info!(
                "view={} authenticated={} refresh_token={} expires_in={:?} rate_limit={:?}",
                view,
                session.is_authenticated(),
                session.has_refresh_token(),
                session.seconds_until_expiry(),
                client.last_rate_limit().await
            );
            return None;
        }
        _ => {
            info!("{HELP}");
            return None;
        }
    };

    match outcome {
        Ok(event) => event,
        Err(e) => report(&e),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    let config = Config::new();
    info!("Loaded config → {}", config.rest_api.base_url);
    let client = SessionClient::from_config(config)?;

    let mut view = if client.is_authenticated().await {
        View::Tools
    } else {
        View::Home
    };
    print_view(view);
    info!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            _ => {}
        }

        if let Some(event) = run(&client, view, &words).await {
            let next = next_view(view, event);
            if next != view {
                view = next;
                print_view(view);
            }
        }
    }

    info!("Bye");
    Ok(())
}
