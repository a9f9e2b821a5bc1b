use anyhow::Context;
use clap::Parser;
use listing_resolver::client::GraphQlClient;
use listing_resolver::config::{Config, DEFAULT_ENDPOINT};
use listing_resolver::models::Locale;
use listing_resolver::resolver::{parse_listing_path, PageResolver, PageResponse};
use listing_resolver::session::SessionContext;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Resolve a localized listing URL into backend filter variables
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Listing URL path, e.g. /en/buy/apartments/skopje?bedrooms=1,2
    url: String,

    /// Query the GraphQL backend and print the rendered page
    #[arg(long)]
    fetch: bool,

    /// GraphQL endpoint
    #[arg(long, env = "LISTING_GRAPHQL_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds
    #[arg(long, env = "LISTING_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Locale used when the URL's locale segment is not recognized
    #[arg(long, env = "LISTING_DEFAULT_LOCALE", default_value = "mk")]
    default_locale: String,

    /// Session token from the session cookie
    #[arg(long, env = "LISTING_SESSION_TOKEN")]
    token: Option<String>,

    /// Client-stored session token, used when no cookie token is given
    #[arg(long, env = "LISTING_STORED_TOKEN")]
    stored_token: Option<String>,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            graphql_endpoint: self.endpoint.clone(),
            timeout_secs: self.timeout_secs,
            default_locale: Locale::from_code_or(&self.default_locale, Locale::ROUTING_DEFAULT),
            ..Config::default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    info!("🏠 Listing Resolver");
    info!("Resolving {}", cli.url);

    let (path, query) = parse_listing_path(&cli.url)
        .with_context(|| format!("'{}' is not a listing URL", cli.url))?;
    let resolver = PageResolver::new(&config);

    if !cli.fetch {
        let output = match resolver.resolve(&path, &query) {
            Ok(page) => serde_json::to_string_pretty(&page)?,
            Err(err) => {
                info!("Not found: {}", err);
                let body = serde_json::json!({ "status": "not_found", "reason": err.to_string() });
                serde_json::to_string_pretty(&body)?
            }
        };
        println!("{output}");
        return Ok(());
    }

    let session = SessionContext::resolve(cli.token.as_deref(), cli.stored_token.as_deref());
    let client = GraphQlClient::with_config(&config)?.with_session(session);
    info!("Fetching listings from {}", client.endpoint());

    let response = resolver.handle(&client, &path, &query).await;

    // Display results
    match &response {
        PageResponse::Listings { page, cards } => {
            println!("{}", page.title);
            println!("{}", "=".repeat(page.title.chars().count()));
            for (i, card) in cards.iter().enumerate() {
                println!("{}. {}", i + 1, card.title);
                println!("   {}", card.summary);
                if let Some(city) = &card.city {
                    println!("   {}", city);
                }
                if let Some(price) = card.price {
                    println!("   Price: {}", price);
                }
                println!("   ID: {}", card.id);
                println!();
            }
            info!("✅ Rendered {} listings", cards.len());
        }
        PageResponse::Degraded { page, message } => {
            println!("{}\n{}", page.title, message);
        }
        PageResponse::NotFound { message, .. } => {
            println!("{}", message);
        }
    }

    Ok(())
}
