//! # Quill Console
//!
//! The UI client: renders the posts collection and drives
//! create/edit/delete against the Data Service. Request failures are
//! logged and otherwise swallowed; local state is never rolled back.

use std::io::Write as _;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

mod api;
mod app;
mod config;

use api::ApiClient;
use app::{App, FormMode};
use config::ClientConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let config = ClientConfig::from_env();
    tracing::info!("Using posts API at {}", config.api_url);

    let client = ApiClient::new(config.api_url);
    let mut app = App::new();

    // Load the collection once on startup; a failure leaves it empty.
    match client.list_posts().await {
        Ok(posts) => app.set_posts(posts),
        Err(e) => tracing::error!("Error fetching posts: {}", e),
    }

    render(&app);
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt();
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let (command, arg) = split_command(line.trim());

        match command {
            "" => {}
            "list" => render(&app),
            "new" => {
                app.form.title = read_field(&mut lines, "Title", "").await?;
                app.form.content = read_field(&mut lines, "Content", "").await?;
                submit(&client, &mut app).await;
                render(&app);
            }
            "edit" => match parse_index(arg, app.posts.len()) {
                Some(index) => {
                    app.begin_edit(index);
                    // Prompts default to the current values; empty input
                    // keeps them.
                    let current = app.form.clone();
                    app.form.title = read_field(&mut lines, "Title", &current.title).await?;
                    app.form.content = read_field(&mut lines, "Content", &current.content).await?;
                    submit(&client, &mut app).await;
                    render(&app);
                }
                None => println!("No such post (try \"list\")"),
            },
            "delete" => match parse_index(arg, app.posts.len()) {
                Some(index) => {
                    let id = app.posts[index].id;
                    match client.delete_post(id).await {
                        Ok(()) => {
                            tracing::info!(%id, "post deleted");
                            app.remove(id);
                        }
                        Err(e) => tracing::error!("Error deleting post: {}", e),
                    }
                    render(&app);
                }
                None => println!("No such post (try \"list\")"),
            },
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("Unknown command: {} (try \"help\")", other),
        }
    }

    Ok(())
}

/// Issue the request the current form calls for and reconcile local state
/// from the response. The form is reset as soon as the submission is
/// taken, before the outcome is known.
async fn submit(client: &ApiClient, app: &mut App) {
    let submission = app.take_submission();

    match submission.mode {
        FormMode::Create => match client.create_post(&submission.payload).await {
            Ok(post) => {
                tracing::info!(id = %post.id, "post saved");
                app.apply_created(post);
            }
            Err(e) => tracing::error!("Error saving post: {}", e),
        },
        FormMode::Edit { id } => match client.update_post(id, &submission.payload).await {
            Ok(post) => {
                tracing::info!(id = %post.id, "post updated");
                app.apply_updated(post);
            }
            Err(e) => tracing::error!("Error saving post: {}", e),
        },
    }
}

fn render(app: &App) {
    println!();
    println!("All blog posts");
    if app.posts.is_empty() {
        println!("  (no posts available)");
    } else {
        for (i, post) in app.posts.iter().enumerate() {
            println!("  {}. {}", i + 1, post.title);
            println!("     {}", post.content);
        }
    }
    println!();
}

/// Prompt for one form field. Shows `current` as the default when
/// non-empty; entering nothing keeps it.
async fn read_field(
    lines: &mut Lines<BufReader<Stdin>>,
    label: &str,
    current: &str,
) -> anyhow::Result<String> {
    if current.is_empty() {
        print!("{}: ", label);
    } else {
        print!("{} [{}]: ", label, current);
    }
    std::io::stdout().flush()?;

    let entered = lines.next_line().await?.unwrap_or_default();
    let entered = entered.trim();

    Ok(if entered.is_empty() {
        current.to_string()
    } else {
        entered.to_string()
    })
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

fn print_help() {
    println!("Commands:");
    println!("  list         show the posts");
    println!("  new          create a post");
    println!("  edit <n>     edit post n");
    println!("  delete <n>   delete post n");
    println!("  help         show this help");
    println!("  quit         exit");
}

fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    }
}

/// Parse a 1-based list position into an index.
fn parse_index(arg: &str, len: usize) -> Option<usize> {
    let n: usize = arg.parse().ok()?;
    (1..=len).contains(&n).then(|| n - 1)
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,console=debug"));

    // Logs go to stderr so the rendered list stays clean on stdout.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
