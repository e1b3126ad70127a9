//! Example reading the private message inbox of an account
//!
//! Credentials come from the GD_USERNAME and GD_PASSWORD environment
//! variables. Keep in mind that the servers answer an *empty* inbox with the
//! same error they use for a denied request.

use gd_client::{Credentials, Error, GdClientBuilder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let username = std::env::var("GD_USERNAME")?;
    let password = std::env::var("GD_PASSWORD")?;

    let client = GdClientBuilder::new()
        .build_authenticated(Credentials::new(username, password))
        .await?;

    let session = client.session().ok_or("expected a session after login")?;
    println!(
        "Logged in as {} (account {})",
        session.username(),
        session.account_id()
    );

    let mut page = match client.get_private_messages(0).await {
        Ok(page) => page,
        Err(Error::MissingAccess) => {
            println!("Inbox empty (or access denied - the API cannot tell us which)");
            return Ok(());
        }
        Err(other) => return Err(other.into()),
    };

    loop {
        println!("--- page {} ({} total) ---", page.page(), page.total());
        for message in page.items() {
            let marker = if message.read { " " } else { "*" };
            println!(
                "{marker} [{}] {} - {} ({})",
                message.id, message.sender_name, message.subject, message.age
            );
        }

        if !page.has_next() {
            break;
        }
        page = page.next_page().await?;
    }

    Ok(())
}
