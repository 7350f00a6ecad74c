use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use rolo::config::{RoloConfig, SortBy};
use rolo::error::{Result, RoloError};
use rolo::images;
use rolo::model::Contact;
use rolo::nav::{Destination, Navigation, Router};
use rolo::repo::ContactRepository;
use rolo::store::sqlite::SqliteStore;
use rolo::viewmodel::ContactViewModel;
use std::path::PathBuf;
use std::sync::Arc;

mod args;
mod print;

use args::{Cli, Commands};

const DB_FILENAME: &str = "contacts.db";
const IMAGES_DIRNAME: &str = "images";

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(dispatch(cli))
}

struct AppContext {
    vm: ContactViewModel<SqliteStore>,
    config: RoloConfig,
    data_dir: PathBuf,
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { json }) => handle_list(&ctx, json),
        Some(Commands::Add {
            name,
            phone,
            email,
            image,
        }) => handle_add(&mut ctx, name, phone, email, image).await,
        Some(Commands::Show { id, json }) => handle_show(&ctx, id, json),
        Some(Commands::Edit {
            id,
            name,
            phone,
            email,
            image,
        }) => handle_edit(&mut ctx, id, name, phone, email, image).await,
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id).await,
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = RoloConfig::load(&data_dir).unwrap_or_default();

    let store = SqliteStore::open(data_dir.join(DB_FILENAME))?;
    let repo = Arc::new(ContactRepository::new(store)?);
    let vm = ContactViewModel::new(repo);

    Ok(AppContext {
        vm,
        config,
        data_dir,
    })
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os("ROLO_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = ProjectDirs::from("com", "rolo", "rolo")
        .ok_or_else(|| RoloError::Store("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

/// The latest feed snapshot, ordered per configuration.
fn current_contacts(ctx: &AppContext) -> Vec<Contact> {
    let mut contacts = ctx.vm.all_contacts().borrow().clone();
    if ctx.config.sort_by == SortBy::Name {
        contacts.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    }
    contacts
}

fn handle_list(ctx: &AppContext, json: bool) -> Result<()> {
    let contacts = current_contacts(ctx);
    if json {
        println!("{}", serde_json::to_string_pretty(&contacts)?);
    } else {
        print::print_contacts(&contacts);
    }
    Ok(())
}

async fn handle_add(
    ctx: &mut AppContext,
    name: String,
    phone: String,
    email: String,
    image: Option<PathBuf>,
) -> Result<()> {
    let mut contact = Contact::new("", phone, email, name);
    contact.validate_for_add()?;

    if let Some(source) = image {
        let images_dir = ctx.data_dir.join(IMAGES_DIRNAME);
        let file_name = images::library_file_name(&contact.name);
        match images::copy_into_library(&source, &images_dir, &file_name) {
            Some(dest) => contact.image = dest.to_string_lossy().into_owned(),
            None => print::warning("Failed to update image"),
        }
    }

    ctx.vm.add_contact(
        contact.image,
        contact.phone_number,
        contact.email,
        contact.name,
    );
    ctx.vm.settle().await?;

    print::success("Contact added!");
    print::print_contacts(&current_contacts(ctx));
    Ok(())
}

fn handle_show(ctx: &AppContext, id: i64, json: bool) -> Result<()> {
    let contacts = current_contacts(ctx);
    let mut router = Router::new();

    match router.navigate(Destination::Detail(id), &contacts) {
        Navigation::Arrived(_) => {
            if let Some(contact) = contacts.iter().find(|c| c.id == id) {
                if json {
                    println!("{}", serde_json::to_string_pretty(contact)?);
                } else {
                    print::print_contact_card(contact);
                }
            }
        }
        Navigation::NotFound { .. } => {
            print::warning("Contact not found");
            print::print_contacts(&contacts);
        }
    }
    Ok(())
}

async fn handle_edit(
    ctx: &mut AppContext,
    id: i64,
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    image: Option<PathBuf>,
) -> Result<()> {
    let contacts = current_contacts(ctx);
    let mut router = Router::new();

    if let Navigation::NotFound { .. } = router.navigate(Destination::Edit(id), &contacts) {
        print::warning("Contact not found");
        print::print_contacts(&contacts);
        return Ok(());
    }

    let mut updated = match contacts.iter().find(|c| c.id == id) {
        Some(contact) => contact.clone(),
        None => return Ok(()),
    };
    if let Some(name) = name {
        updated.name = name;
    }
    if let Some(phone) = phone {
        updated.phone_number = phone;
    }
    if let Some(email) = email {
        updated.email = email;
    }
    updated.validate_for_update()?;

    if let Some(source) = image {
        let images_dir = ctx.data_dir.join(IMAGES_DIRNAME);
        let file_name = images::library_file_name(&updated.name);
        match images::copy_into_library(&source, &images_dir, &file_name) {
            Some(dest) => updated.image = dest.to_string_lossy().into_owned(),
            // The record keeps its previous image path.
            None => print::warning("Failed to update image"),
        }
    }

    ctx.vm.update_contact(updated);
    ctx.vm.settle().await?;

    print::success("Contact updated");
    print::print_contacts(&current_contacts(ctx));
    Ok(())
}

async fn handle_delete(ctx: &mut AppContext, id: i64) -> Result<()> {
    let contacts = current_contacts(ctx);

    match contacts.iter().find(|c| c.id == id) {
        Some(contact) => {
            ctx.vm.delete_contact(contact.clone());
            ctx.vm.settle().await?;
            print::success("Contact deleted");
            print::print_contacts(&current_contacts(ctx));
        }
        None => {
            print::warning("Contact not found");
            print::print_contacts(&contacts);
        }
    }
    Ok(())
}

fn handle_config(
    ctx: &mut AppContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    match (key, value) {
        (Some(key), Some(value)) => {
            ctx.config.set(&key, &value)?;
            ctx.config.save(&ctx.data_dir)?;
            print::success(&format!("Set {} = {}", key, value));
        }
        (Some(key), None) => match key.as_str() {
            "sort_by" | "sort" => println!("sort_by = {}", ctx.config.sort_by),
            other => {
                return Err(RoloError::Validation(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        },
        (None, _) => {
            println!("sort_by = {}", ctx.config.sort_by);
        }
    }
    Ok(())
}
