//! Example looking up a user profile anonymously

use gd_client::GdClientBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client = GdClientBuilder::new().build()?;

    // RobTop's account
    let user = client.get_user(71).await?;

    println!("Profile of {}", user.username);
    println!("{:-<40}", "");
    println!("Account ID:     {}", user.account_id);
    println!("Player ID:      {}", user.player_id);
    println!("Stars:          {}", user.stars);
    println!("Demons:         {}", user.demons);
    println!("Creator points: {}", user.creator_points);
    if let Some(rank) = user.global_rank {
        println!("Global rank:    #{rank}");
    }

    // The second fetch is served from the cache; watch the tracing output.
    let _again = client.get_user(71).await?;

    Ok(())
}
