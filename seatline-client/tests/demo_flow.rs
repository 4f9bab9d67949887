use std::sync::Arc;
use std::time::Duration;

use seatline_api::{app, AppState};
use seatline_client::{BookingClient, ClientError};
use seatline_shared::{Seat, SeatSelection, Section, User};
use seatline_store::AllocationStore;

/// Serve a fresh store on an ephemeral port and return its base URL
async fn spawn_server(store: Arc<AllocationStore>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app(AppState::new(store))).await.unwrap();
    });

    format!("http://{addr}")
}

fn client(base_url: &str) -> BookingClient {
    BookingClient::new(base_url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_demo_sequence() {
    let store = Arc::new(AllocationStore::default());
    let client = client(&spawn_server(Arc::clone(&store)).await);
    let email = "john.doe@example.com";

    let ticket = client
        .purchase_ticket(User::new("John", "Doe", email))
        .await
        .unwrap();
    assert_eq!(ticket.seat, Seat::new(Section::A, 1));

    let receipt = client.get_receipt(email).await.unwrap();
    assert_eq!(receipt, ticket);

    let in_a = client.get_section_users("A").await.unwrap();
    assert_eq!(in_a.len(), 1);
    assert_eq!(in_a[0].user.email, email);

    let moved = client.modify_seat(email, SeatSelection::new("B", 1)).await.unwrap();
    assert_eq!(moved.seat, Seat::new(Section::B, 1));
    assert_eq!(client.get_stat().await.unwrap().seats, vec![Seat::new(Section::B, 1)]);

    assert!(client.remove_user(email).await.unwrap());
    let stat = client.get_stat().await.unwrap();
    assert!(stat.users.is_empty() && stat.seats.is_empty() && stat.tickets.is_empty());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_lifecycle_with_reserved_characters_in_email() {
    let store = Arc::new(AllocationStore::default());
    let client = client(&spawn_server(Arc::clone(&store)).await);

    // Holds the prefix a truncated path would resolve to
    client.purchase_ticket(User::new("Plain", "A", "a")).await.unwrap();

    let emails = ["a#b@example.com", "a?x@example.com", "a/b@example.com", "a%20c@example.com"];
    for email in emails {
        let ticket = client
            .purchase_ticket(User::new("Odd", "Email", email))
            .await
            .unwrap();

        assert_eq!(client.get_receipt(email).await.unwrap(), ticket);

        let moved = client
            .modify_seat(email, SeatSelection::new("B", 50))
            .await
            .unwrap();
        assert_eq!(moved.user.email, email);
        assert_eq!(moved.seat, Seat::new(Section::B, 50));

        assert!(client.remove_user(email).await.unwrap());
        assert!(store.receipt(email).is_err());
        assert!(store.receipt("a").is_ok(), "removing {email} touched another ticket");
    }

    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_rejections_carry_server_codes() {
    let client = client(&spawn_server(Arc::new(AllocationStore::default())).await);

    let err = client.get_receipt("ghost@example.com").await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Rejected { status, .. } if status == reqwest::StatusCode::NOT_FOUND
    ));
    assert_eq!(err.code(), Some("NOT_FOUND"));

    let err = client.get_section_users("Z").await.unwrap_err();
    assert_eq!(err.code(), Some("INVALID_SECTION"));

    let err = client.purchase_ticket(User::new("No", "Email", "")).await.unwrap_err();
    assert_eq!(err.code(), Some("INVALID_INPUT"));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{addr}")).get_stat().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(err.code(), None);
}
