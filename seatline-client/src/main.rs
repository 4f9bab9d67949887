//! Demo client: walks one passenger through purchase, receipt, section
//! listing, seat change and removal, dumping the service state after each
//! step.
//!
//! ```bash
//! seatline-client --server http://localhost:50051
//! ```

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use seatline_client::BookingClient;
use seatline_shared::{SeatSelection, User};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEMO_EMAIL: &str = "john.doe@example.com";

/// Seat allocation demo client
#[derive(Parser, Debug)]
#[command(name = "seatline-client")]
#[command(about = "Runs the ticket booking demo against a seatline server")]
#[command(version)]
struct Args {
    /// Base URL of the server
    #[arg(short, long, default_value = "http://localhost:50051")]
    server: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 1)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = BookingClient::new(&args.server, Duration::from_secs(args.timeout_secs))
        .context("could not build client")?;

    println!("\n1. Purchasing a ticket...");
    let ticket = client
        .purchase_ticket(User::new("John", "Doe", DEMO_EMAIL))
        .await
        .context("could not purchase ticket")?;
    println!("Ticket purchased: {ticket:?}");
    stat(&client).await?;

    println!("\n2. Getting receipt...");
    let receipt = client
        .get_receipt(DEMO_EMAIL)
        .await
        .context("could not get receipt")?;
    println!("Receipt details: {receipt:?}");
    stat(&client).await?;

    println!("\n3. Getting users in section A...");
    let user_seats = client
        .get_section_users("A")
        .await
        .context("could not get section users")?;
    println!("Users in section A: {user_seats:?}");
    stat(&client).await?;

    println!("\n4. Modifying seat...");
    let updated = client
        .modify_seat(DEMO_EMAIL, SeatSelection::new("B", 1))
        .await
        .context("could not modify seat")?;
    println!("Updated ticket after seat modification: {updated:?}");
    stat(&client).await?;

    println!("\n5. Removing user...");
    let success = client
        .remove_user(DEMO_EMAIL)
        .await
        .context("could not remove user")?;
    println!("User removed successfully: {success}");
    stat(&client).await?;

    Ok(())
}

async fn stat(client: &BookingClient) -> anyhow::Result<()> {
    let snapshot = client.get_stat().await.context("could not get stat")?;
    println!("-------------------------------------------------");
    println!(">>>> Current state of the store:");
    println!("Users:   {:?}", snapshot.users);
    println!("Seats:   {:?}", snapshot.seats);
    println!("Tickets: {:?}", snapshot.tickets);
    println!("-------------------------------------------------");
    Ok(())
}
