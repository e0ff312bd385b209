//! CLI tool for inspecting and exercising the correspondence engine
//!
//! # Usage
//!
//! ```bash
//! # List registered templates
//! courier-admin templates
//!
//! # Render a template with sample data
//! courier-admin preview quote_ready --lang vi
//!
//! # List recent conversation threads
//! courier-admin threads --db sqlite://courier.db
//!
//! # Dump one conversation as JSON
//! courier-admin show INQ-1001 --db sqlite://courier.db
//!
//! # Send a test email through a local relay
//! courier-admin send-test someone@example.com quote_ready --relay 127.0.0.1:2525
//! ```

use clap::{Parser, Subcommand};
use courier_rs::config::Config;
use courier_rs::dispatch::{EmailDispatcher, SendRequest, SmtpRelayTransport};
use courier_rs::templates::{Language, TemplateData, TemplateRegistry, TemplateRenderer};
use courier_rs::threads::ThreadStore;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "courier-admin")]
#[command(about = "Inspect templates and conversation threads", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered templates
    Templates,
    /// Render a template with sample data
    Preview {
        /// Template identifier
        template_id: String,
        /// Language to render in (en or vi)
        #[arg(short, long, default_value = "en")]
        lang: String,
    },
    /// List recent conversation threads
    Threads {
        /// Database URL
        #[arg(long, default_value = "sqlite://courier.db")]
        db: String,
        /// Maximum number of threads to show
        #[arg(long, default_value_t = 20)]
        limit: i64,
    },
    /// Dump one conversation as JSON
    Show {
        /// Inquiry identifier
        inquiry_id: String,
        /// Database URL
        #[arg(long, default_value = "sqlite://courier.db")]
        db: String,
    },
    /// Send a test email through the dispatcher
    SendTest {
        /// Recipient address
        to: String,
        /// Template identifier
        template_id: String,
        /// Language to render in (en or vi)
        #[arg(short, long, default_value = "en")]
        lang: String,
        /// Inquiry id the thread is keyed on
        #[arg(long, default_value = "TEST-1")]
        inquiry: String,
        /// Database URL
        #[arg(long, default_value = "sqlite://courier.db")]
        db: String,
        /// SMTP relay address
        #[arg(long)]
        relay: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let cli = Cli::parse();
    let registry = TemplateRegistry::builtin();

    match cli.command {
        Commands::Templates => {
            println!("{:<24} {:<26} {:<26}", "Id", "Name (en)", "Name (vi)");
            println!("{:-<76}", "");
            for template in registry.all() {
                println!(
                    "{:<24} {:<26} {:<26}",
                    template.id, template.name.en, template.name.vi
                );
            }
            println!("\nTotal: {} template(s)", registry.len());
        }
        Commands::Preview { template_id, lang } => {
            let language = parse_language(&lang)?;
            let template = registry
                .get(&template_id)
                .ok_or_else(|| format!("Unknown template: {}", template_id))?;

            let rendered = TemplateRenderer::render(template, language, &sample_data());

            println!("Subject: {}\n", rendered.subject);
            println!("--- text ---\n{}\n", rendered.text);
            println!("--- html ---\n{}", rendered.html);
        }
        Commands::Threads { db, limit } => {
            let store = open_store(&db).await?;
            let threads = store.list_threads(limit).await?;

            if threads.is_empty() {
                println!("No threads found.");
            } else {
                println!(
                    "{:<38} {:<14} {:<28} {:<20}",
                    "Thread", "Inquiry", "Customer", "Opened"
                );
                println!("{:-<100}", "");
                for thread in &threads {
                    println!(
                        "{:<38} {:<14} {:<28} {:<20}",
                        thread.id,
                        thread.inquiry_id,
                        thread.customer_email,
                        thread.created_at.format("%Y-%m-%d %H:%M")
                    );
                }
                println!("\nTotal: {} thread(s)", threads.len());
            }
        }
        Commands::Show { inquiry_id, db } => {
            let store = open_store(&db).await?;
            match store.get_thread_with_emails(&inquiry_id).await? {
                Some(conversation) => {
                    println!("{}", serde_json::to_string_pretty(&conversation)?);
                }
                None => {
                    eprintln!("No thread found for inquiry {}", inquiry_id);
                    std::process::exit(1);
                }
            }
        }
        Commands::SendTest {
            to,
            template_id,
            lang,
            inquiry,
            db,
            relay,
        } => {
            let language = parse_language(&lang)?;
            let mut config = Config::default();
            if let Some(relay) = relay {
                config.smtp.relay_addr = relay;
            }

            let store = open_store(&db).await?;
            let transport = Arc::new(SmtpRelayTransport::from_config(&config.smtp));
            let dispatcher = EmailDispatcher::new(
                Arc::new(registry),
                store,
                transport,
                config.smtp.from_address.clone(),
            );

            let outcome = dispatcher
                .send_with_thread(SendRequest {
                    to: to.clone(),
                    subject: format!("Test message for inquiry {}", inquiry),
                    template_id,
                    data: sample_data(),
                    language,
                    inquiry_id: inquiry,
                    customer_email: to,
                    customer_name: "Test Customer".to_string(),
                    is_from_admin: true,
                })
                .await?;

            println!("✓ Sent {} on thread {}", outcome.message_id, outcome.thread_id);
        }
    }

    Ok(())
}

fn parse_language(code: &str) -> Result<Language, String> {
    Language::from_code(code).ok_or_else(|| format!("Unknown language: {}", code))
}

async fn open_store(db: &str) -> Result<ThreadStore, Box<dyn std::error::Error>> {
    let pool = sqlx::SqlitePool::connect(db).await?;
    let store = ThreadStore::new(pool);
    store.init_db().await?;
    Ok(store)
}

/// Plausible values for every variable the built-in templates reference
fn sample_data() -> TemplateData {
    let pairs = [
        ("customer_name", "Jane Carter"),
        ("inquiry_id", "INQ-1001"),
        ("item_count", "3"),
        ("submitted_date", "March 7, 2025"),
        ("company", "Carter Interiors"),
        ("message", "Looking for a quote on the oak dining set."),
        ("total_price", "$1,495.00"),
        (
            "quote_items_list",
            "<ul><li>Oak dining table — $950.00</li><li>Side chair x4 — $545.00</li></ul>",
        ),
        (
            "quote_items",
            "- Oak dining table: $950.00\n- Side chair x4: $545.00",
        ),
        ("valid_until", "April 7, 2025"),
        ("agent_name", "Minh Nguyen"),
        ("order_id", "PO-2045"),
        ("status", "In production"),
        ("status_note", "Frames are assembled; finishing starts this week."),
        ("delivery_estimate", "May 15, 2025"),
        ("inspection_date", "April 28, 2025"),
        ("result", "Passed"),
        ("notes", "Minor veneer touch-up on one cabinet door, corrected on site."),
        ("report_link", "https://storefront.example/reports/PO-2045"),
        ("catalog_link", "https://storefront.example/trade"),
        ("account_manager", "Minh Nguyen"),
    ];

    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
