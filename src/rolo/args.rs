use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including the git hash for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "rolo", version = get_version())]
#[command(about = "A fast local address book for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the database, images and config
    /// (defaults to the platform data dir, or $ROLO_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all contacts
    #[command(alias = "ls")]
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a new contact
    #[command(alias = "new")]
    Add {
        #[arg(short, long)]
        name: String,

        /// Phone number, any format
        #[arg(short, long)]
        phone: String,

        #[arg(short, long)]
        email: String,

        /// Image file to copy into the contact's photo library
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// Show one contact
    #[command(alias = "view")]
    Show {
        id: i64,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit an existing contact; omitted fields keep their values
    Edit {
        id: i64,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        phone: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        /// New image file to copy into the contact's photo library
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete { id: i64 },

    /// Show or change configuration
    Config {
        /// Config key (e.g. sort_by)
        key: Option<String>,

        /// New value
        value: Option<String>,
    },
}
