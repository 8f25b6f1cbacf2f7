//! Users list demo.
//!
//! Fetches the user directory, prints the list, and optionally narrows it
//! with a search query.
//!
//! Run with: cargo run -p userdeck --example users_list -- [query] [--config path.toml]
//!
//! Set `RUST_LOG=userdeck=debug` to watch the fetch flow.

use tracing_subscriber::EnvFilter;
use userdeck::{AlertAction, DisplayUser, UsersConfig, UsersViewModel};

fn print_user(user: &DisplayUser) {
    println!("  #{:<3} {:<26} @{}", user.id, user.name, user.username);
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let mut query = String::new();
    let mut config = UsersConfig::default();
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args.next().ok_or("--config needs a path")?;
            config = UsersConfig::load_toml(path)?;
        } else {
            query = arg;
        }
    }

    let view_model = UsersViewModel::from_config(config)?;
    let _guard = view_model.connect_state_changed(|snapshot| {
        tracing::debug!(
            loading = snapshot.is_loading,
            users = snapshot.users.len(),
            "state changed"
        );
    });

    let mut outcome = view_model.request_users().await;
    // One manual retry stands in for the user pressing "Retry".
    if let Some(alert) = view_model.snapshot().error_alert() {
        println!("{}: {}", alert.title, alert.message);
        outcome = view_model
            .handle_alert_action(AlertAction::Retry)
            .await
            .unwrap_or(outcome);
    }
    if let Err(err) = outcome {
        println!("{err}");
        view_model.handle_alert_action(AlertAction::Cancel).await;
        return Ok(());
    }

    view_model.set_search_query(query);
    let snapshot = view_model.snapshot();
    println!("{}", snapshot.list_title());
    for user in snapshot.filtered_users() {
        print_user(&user);
    }

    if let Some(first) = snapshot.filtered_users().into_iter().next() {
        view_model.select_user(first);
        if let Some(user) = view_model.snapshot().selected_user {
            println!();
            println!("{} <{}>", user.name, user.email);
            println!("  {}", user.address.one_line());
            println!("  {} | {}", user.phone, user.website);
            println!("  avatar: {}", user.detail_image_url);
        }
        view_model.dismiss_detail();
    }

    Ok(())
}
