use crate::models::EventRecord;
use lazy_static::lazy_static;

lazy_static! {
    static ref CATALOG: Vec<EventRecord> = vec![
        event(
            1,
            "Enchanted Garden Music Festival",
            "2025-06-15",
            "6:00 PM",
            "Gulberg Greens, Islamabad",
            "A magical evening of live music surrounded by blooming flowers. Featuring indie artists, fairy lights, and artisanal treats.",
            "Music",
            250,
        ),
        event(
            2,
            "Startup Connect",
            "2025-06-20",
            "11:00 AM",
            "NUST Incubation Center",
            "Meet startups, investors, and innovators. Featuring keynote speakers and empowerment workshops.",
            "Business",
            150,
        ),
        event(
            3,
            "Music Fest 2025",
            "2025-06-25",
            "6:00 PM",
            "Centaurus Mall, Islamabad",
            "Enjoy a night full of music, food, and fun.",
            "Music",
            300,
        ),
        event(
            4,
            "Cupcakes Tasting",
            "2025-07-02",
            "4:00 PM",
            "Layers Bakers, Islamabad",
            "Indulge in gourmet cupcakes in an Instagram-worthy setting with floral backdrops.",
            "Food",
            120,
        ),
        event(
            5,
            "Pilates in the Park",
            "2025-07-05",
            "8:00 AM",
            "F-9 Park, Islamabad",
            "Gentle morning pilates session among cherry blossoms. Includes yoga mats, healthy smoothies, and good vibes only!",
            "Fitness",
            45,
        ),
    ];
}

/// The featured events, in display order.
pub fn catalog() -> &'static [EventRecord] {
    &CATALOG
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: u32,
    name: &str,
    date: &str,
    time: &str,
    location: &str,
    description: &str,
    category: &str,
    attendees: u32,
) -> EventRecord {
    EventRecord {
        id,
        name: name.to_owned(),
        date: date.to_owned(),
        time: time.to_owned(),
        location: location.to_owned(),
        description: description.to_owned(),
        category: category.to_owned(),
        attendees,
    }
}
