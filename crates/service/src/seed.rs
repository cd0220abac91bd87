//! Demo catalog used by the dev server and for manual poking.

use chrono::{TimeZone, Utc};

use stagepass_catalog::EventDraft;
use stagepass_core::{DomainResult, UserId};

use crate::service::TicketService;

/// The six demo events, attributed to `organizer_id`.
pub fn demo_event_drafts(organizer_id: UserId, organizer_name: &str) -> Vec<EventDraft> {
    let draft = |title: &str,
                 description: &str,
                 (y, mo, d, h): (i32, u32, u32, u32),
                 location: &str,
                 price: f64,
                 available_tickets: u32,
                 image_url: &str,
                 category: &str| EventDraft {
        title: title.to_string(),
        description: description.to_string(),
        date: Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap(),
        location: location.to_string(),
        price,
        available_tickets,
        image_url: image_url.to_string(),
        category: category.to_string(),
        organizer_id,
        organizer_name: organizer_name.to_string(),
    };

    vec![
        draft(
            "Summer Music Festival",
            "Experience three days of amazing performances from top artists across multiple \
             stages in a beautiful outdoor setting. Food vendors, art installations, and camping \
             available on site.",
            (2025, 7, 15, 18),
            "Central Park, New York",
            89.99,
            500,
            "https://images.unsplash.com/photo-1501281668745-f7f57925c3b4",
            "concerts",
        ),
        draft(
            "Tech Conference 2025",
            "Join industry leaders and innovators for a two-day conference covering the latest \
             in AI, blockchain, and web development. Networking opportunities, workshops, and \
             panel discussions with experts from major tech companies.",
            (2025, 9, 22, 9),
            "Convention Center, San Francisco",
            299.99,
            200,
            "https://images.unsplash.com/photo-1540304453527-62f979142a17",
            "conferences",
        ),
        draft(
            "Photography Workshop",
            "Learn essential photography skills in this hands-on workshop led by professional \
             photographers. From camera basics to advanced composition techniques, suitable for \
             beginners and intermediate photographers.",
            (2025, 6, 10, 10),
            "Photography Studio, Chicago",
            149.99,
            30,
            "https://images.unsplash.com/photo-1452587925148-ce544e77e70d",
            "workshops",
        ),
        draft(
            "Stand-up Comedy Night",
            "Laugh until it hurts with performances from five up-and-coming comedians. Full bar \
             and food menu available throughout the show. Age restriction: 18+.",
            (2025, 5, 20, 20),
            "Comedy Club, Los Angeles",
            45.00,
            100,
            "https://images.unsplash.com/photo-1585211969224-3e992986159d",
            "entertainment",
        ),
        draft(
            "Art Exhibition Opening",
            "Be the first to explore this innovative collection from international artists \
             exploring themes of nature and technology. Wine and hors d'oeuvres will be served \
             at this exclusive opening night event.",
            (2025, 8, 5, 19),
            "Modern Art Gallery, Boston",
            25.00,
            150,
            "https://images.unsplash.com/photo-1531058020387-3be344556be6",
            "arts",
        ),
        draft(
            "Marathon 2025",
            "Challenge yourself with this scenic city marathon. All participants receive a \
             medal, t-shirt, and post-race refreshments. Various categories for different age \
             groups and abilities.",
            (2025, 10, 12, 7),
            "Downtown, Seattle",
            75.00,
            1000,
            "https://images.unsplash.com/photo-1530549387789-4c1017266635",
            "sports",
        ),
    ]
}

/// Create the demo events through the regular create operation.
pub async fn seed_demo_events(
    service: &TicketService,
    organizer_id: UserId,
    organizer_name: &str,
) -> DomainResult<()> {
    for draft in demo_event_drafts(organizer_id, organizer_name) {
        service.create_event(draft).await?;
    }
    Ok(())
}
