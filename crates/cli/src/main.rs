//! MangaStore CLI - command-line surface over the storefront engine.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! mangastore catalog --query berserk --sort price-asc
//!
//! # Register and log in
//! mangastore register -u alice -e alice@example.com -p secret
//! mangastore login -u alice -p secret
//!
//! # Shop
//! mangastore cart add m001 --qty 2
//! mangastore cart show
//! mangastore checkout
//! ```
//!
//! The engine reads `MANGASTORE_DATA_DIR` (and optionally
//! `MANGASTORE_SEED`) from the environment or a `.env` file.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand, ValueEnum};

use mangastore_storefront::catalog::SortOrder;
use mangastore_storefront::config::Config;
use mangastore_storefront::state::AppState;

mod commands;

#[derive(Parser)]
#[command(name = "mangastore")]
#[command(author, version, about = "MangaStore storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the catalog with the sample product list
    Seed,
    /// Register a new user
    Register {
        /// Username (normalized to lowercase)
        #[arg(short, long)]
        username: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Log in, replacing any active session
    Login {
        /// Username
        #[arg(short, long)]
        username: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Clear the active session
    Logout,
    /// Show the active session
    Whoami,
    /// Browse the catalog
    Catalog {
        /// Substring to match against title or author
        #[arg(short, long, default_value = "")]
        query: String,

        /// Presentation order
        #[arg(short, long, value_enum, default_value_t = SortArg::Catalog)]
        sort: SortArg,
    },
    /// Manage the active user's cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Show the active user's order history
    Orders,
    /// Place an order from the active user's cart
    Checkout,
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product id (e.g. m001)
        id: String,

        /// Units to add
        #[arg(long, default_value_t = 1)]
        qty: u32,
    },
    /// Set a line's quantity
    Set {
        /// Product id
        id: String,

        /// New quantity (clamped to stock)
        qty: u32,
    },
    /// Remove a line
    Remove {
        /// Product id
        id: String,
    },
    /// Empty the cart
    Clear,
    /// Show the cart with line totals
    Show,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    /// Stored catalog order
    Catalog,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Catalog => Self::CatalogOrder,
            SortArg::PriceAsc => Self::PriceAscending,
            SortArg::PriceDesc => Self::PriceDescending,
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let mut state = AppState::open(&config)?;

    match cli.command {
        Commands::Seed => commands::seed::run(&state)?,
        Commands::Register {
            username,
            email,
            password,
        } => commands::auth::register(&state, &username, &email, &password)?,
        Commands::Login { username, password } => {
            commands::auth::login(&state, &username, &password)?;
        }
        Commands::Logout => commands::auth::logout(&state)?,
        Commands::Whoami => commands::auth::whoami(&state)?,
        Commands::Catalog { query, sort } => {
            commands::catalog::browse(&state, &query, sort.into())?;
        }
        Commands::Cart { action } => match action {
            CartAction::Add { id, qty } => commands::cart::add(&state, &id, qty)?,
            CartAction::Set { id, qty } => commands::cart::set(&state, &id, qty)?,
            CartAction::Remove { id } => commands::cart::remove(&state, &id)?,
            CartAction::Clear => commands::cart::clear(&state)?,
            CartAction::Show => commands::cart::show(&state)?,
        },
        Commands::Orders => commands::orders::list(&state)?,
        Commands::Checkout => commands::orders::checkout(&mut state)?,
    }
    Ok(())
}
