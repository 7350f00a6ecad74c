use colored::Colorize;
use rolo::model::Contact;
use unicode_width::UnicodeWidthStr;

pub(crate) fn success(message: &str) {
    println!("{}", message.green());
}

pub(crate) fn warning(message: &str) {
    println!("{}", message.yellow());
}

pub(crate) fn print_contacts(contacts: &[Contact]) {
    if contacts.is_empty() {
        println!("No Contacts Available");
        return;
    }

    let name_width = contacts.iter().map(|c| c.name.width()).max().unwrap_or(0);
    let phone_width = contacts
        .iter()
        .map(|c| c.phone_number.width())
        .max()
        .unwrap_or(0);

    for contact in contacts {
        // Pad before coloring so the ANSI codes don't break alignment.
        let idx = format!("{:>4}.", contact.id);
        let name = pad(&contact.name, name_width);
        let phone = pad(&contact.phone_number, phone_width);
        let photo = if contact.image.is_empty() {
            String::new()
        } else {
            format!("  {}", "(photo)".dimmed())
        };
        println!(
            "{} {}  {}  {}{}",
            idx.yellow(),
            name.bold(),
            phone,
            contact.email.dimmed(),
            photo
        );
    }
}

pub(crate) fn print_contact_card(contact: &Contact) {
    println!("{}", contact.name.bold());
    println!("--------------------------------");
    println!("Phone: {}", contact.phone_number);
    println!("Email: {}", contact.email);
    if !contact.image.is_empty() {
        println!("Photo: {}", contact.image);
    }
}

fn pad(text: &str, target: usize) -> String {
    let fill = target.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}
