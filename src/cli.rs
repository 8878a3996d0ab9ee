use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pa", about = r#"
  ______  _____   ______ _______      _______ _______ _______ _____ _______ _______
 |_____] |_____| |  ____ |______      |_____| |______ |______   |   |______    |
 |       |     | |_____| |______      |     | ______| ______| __|__ ______|    |

Mock search results and a canned-response chat widget, headless.
    "#, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chat with the widget interactively
    Chat {
        /// Path to an alternative reply rule table (JSON)
        #[arg(short, long)]
        rules: Option<String>,

        /// Reply delay in milliseconds
        #[arg(short, long, default_value_t = 1000)]
        delay: u64,

        /// Write the transcript to this file on exit (JSON)
        #[arg(short, long)]
        transcript: Option<String>,
    },
    /// Render mock resource results for a category and location
    Resources {
        /// Resource category, e.g. Pension
        #[arg(short, long)]
        domain: String,

        /// Location to search in
        #[arg(short, long)]
        location: String,
    },
    /// Render mock video results for a query
    Videos {
        /// The search term
        #[arg(short, long)]
        query: String,
    },
}
