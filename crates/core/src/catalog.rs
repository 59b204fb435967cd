//! The bundled catalog served in fallback mode.
//!
//! When no gallery backend is configured (or a read against it fails),
//! the site still renders: artworks and categories come from the fixed
//! lists below, which mirror the images shipped with the site bundle.
//! Services and testimonials are static site content in every mode.

use serde::Serialize;

use crate::artwork::Artwork;
use crate::types::DbId;

/// Category list served when no backend is configured, already including
/// the synthesized "All" entry.
pub const DEFAULT_CATEGORIES: &[&str] =
    &["All", "Mehendi", "Bridal", "Cultural", "Sketch", "Mandala"];

struct FallbackArtwork {
    id: DbId,
    title: &'static str,
    category: &'static str,
    image_url: &'static str,
}

const FALLBACK_ARTWORKS: &[FallbackArtwork] = &[
    FallbackArtwork { id: 1, title: "Navratri Special", category: "Cultural", image_url: "/images/AllArt/Navratri.jpg" },
    FallbackArtwork { id: 2, title: "Intricate Hand Art", category: "Bridal", image_url: "/images/AllArt/hand2.jpg" },
    FallbackArtwork { id: 3, title: "Artistic Mehendi Design", category: "Sketch", image_url: "/images/AllArt/art.jpg" },
    FallbackArtwork { id: 4, title: "Bridal Mehendi", category: "Bridal", image_url: "/images/AllArt/hands1.jpg" },
    FallbackArtwork { id: 5, title: "Mandala Art", category: "Mandala", image_url: "/images/AllArt/art2.jpg" },
    FallbackArtwork { id: 6, title: "Henna Aroma Design", category: "Mehendi", image_url: "/images/AllArt/hand4.jpg" },
    FallbackArtwork { id: 7, title: "Traditional Mehendi Pattern", category: "Sketch", image_url: "/images/AllArt/art3.jpg" },
    FallbackArtwork { id: 8, title: "Elegant Hand Design", category: "Bridal", image_url: "/images/AllArt/hand3.jpg" },
    FallbackArtwork { id: 9, title: "Mahendi Design", category: "Bridal", image_url: "/images/AllArt/mahendi/mahendi6.jpeg" },
    FallbackArtwork { id: 10, title: "Mahendi Design", category: "Mehendi", image_url: "/images/AllArt/mahendi/mahendi5.jpeg" },
    FallbackArtwork { id: 11, title: "Mahendi Design", category: "Mehendi", image_url: "/images/AllArt/mahendi/mahendi4.jpeg" },
    FallbackArtwork { id: 12, title: "Mahendi Design", category: "Mehendi", image_url: "/images/AllArt/mahendi/mahendi3.jpeg" },
    FallbackArtwork { id: 13, title: "Mahendi Design", category: "Bridal", image_url: "/images/AllArt/mahendi/mahendi2.jpeg" },
    FallbackArtwork { id: 14, title: "Mahendi Design", category: "Mehendi", image_url: "/images/AllArt/mahendi/mahendi1.jpeg" },
    FallbackArtwork { id: 15, title: "Mahendi Design", category: "Bridal", image_url: "/images/AllArt/hand/hand1.jpeg" },
    FallbackArtwork { id: 16, title: "Mahendi Design", category: "Mehendi", image_url: "/images/AllArt/hand/hand2.jpeg" },
    FallbackArtwork { id: 17, title: "Mahendi Design", category: "Mehendi", image_url: "/images/AllArt/hand/hand3.jpeg" },
    FallbackArtwork { id: 18, title: "Mahendi Design", category: "Mehendi", image_url: "/images/AllArt/hand/hand4.jpeg" },
    FallbackArtwork { id: 19, title: "Mahendi Design", category: "Mehendi", image_url: "/images/AllArt/hand/hand5.jpeg" },
];

/// Build the fallback artwork list in its fixed order.
pub fn fallback_artworks() -> Vec<Artwork> {
    FALLBACK_ARTWORKS
        .iter()
        .enumerate()
        .map(|(index, entry)| Artwork {
            id: entry.id,
            title: entry.title.to_string(),
            category: entry.category.to_string(),
            image_url: entry.image_url.to_string(),
            image_path: None,
            display_order: index as i32,
        })
        .collect()
}

/// Build the fallback category list, "All" first.
pub fn fallback_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Static site content
// ---------------------------------------------------------------------------

/// A service offered by the artist.
#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub id: DbId,
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub icon: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: 1,
        title: "Bridal Mehendi",
        description: "Exquisite bridal mehendi designs for your special day with intricate patterns and traditional motifs.",
        price: "Starting from ₹2,000",
        icon: "💐",
    },
    Service {
        id: 2,
        title: "Party & Event Mehendi",
        description: "Beautiful mehendi designs for parties, festivals, and special occasions.",
        price: "Starting from ₹1,000",
        icon: "🎉",
    },
    Service {
        id: 3,
        title: "Custom Sketches",
        description: "Hand-drawn portraits and custom artwork capturing your precious moments.",
        price: "Starting from ₹500",
        icon: "✏️",
    },
    Service {
        id: 4,
        title: "Mandala Art",
        description: "Intricate mandala designs for meditation, decoration, or spiritual purposes.",
        price: "Starting from ₹1,500",
        icon: "🎨",
    },
];

/// A client testimonial shown on the landing page.
#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub name: &'static str,
    pub rating: u8,
    pub text: &'static str,
    pub event: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Priya Sharma",
        rating: 5,
        text: "Divya created the most beautiful bridal mehendi for my wedding. Her attention to detail is incredible! The design lasted for weeks and everyone at my wedding was asking about her.",
        event: "Wedding Mehendi",
    },
    Testimonial {
        id: 2,
        name: "Ananya Patel",
        rating: 5,
        text: "The sketch portrait she made of my family is now our most treasured possession. Truly talented artist! She captured every emotion perfectly.",
        event: "Family Portrait",
    },
    Testimonial {
        id: 3,
        name: "Kavya Reddy",
        rating: 4,
        text: "Amazing mandala designs! Divya brought my vision to life with such precision and artistry. Very professional and creative.",
        event: "Custom Mandala",
    },
    Testimonial {
        id: 4,
        name: "Meera Iyer",
        rating: 5,
        text: "Professional, creative, and incredibly skilled. The mehendi lasted beautifully and looked stunning! Highly recommend for any special occasion.",
        event: "Sangeet Ceremony",
    },
    Testimonial {
        id: 5,
        name: "Riya Desai",
        rating: 5,
        text: "Absolutely loved my bridal mehendi! Divya is so patient and her designs are unique. She made my special day even more memorable.",
        event: "Bridal Mehendi",
    },
    Testimonial {
        id: 6,
        name: "Sneha Kapoor",
        rating: 4,
        text: "Beautiful work and very reasonable pricing. The mehendi color came out dark and rich. Will definitely book again for future events!",
        event: "Festival Mehendi",
    },
];
